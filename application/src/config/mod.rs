//! Application configuration

pub mod generation_defaults;

pub use generation_defaults::GenerationDefaults;
