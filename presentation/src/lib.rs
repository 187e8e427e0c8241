//! Presentation layer for roundtable
//!
//! CLI argument definitions, console/JSON/markdown output formatting,
//! and progress display.

pub mod cli;
pub mod output;
pub mod progress;

pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter as OutputFormatterTrait;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
