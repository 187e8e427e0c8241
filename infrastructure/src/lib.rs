//! Infrastructure layer for roundtable
//!
//! This crate contains the adapters behind the application-layer ports:
//! the Gemini HTTP gateway, the in-memory document store, offline
//! document analysis, text extraction, configuration loading, and the
//! JSONL discussion logger.

pub mod config;
pub mod document;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use document::{
    analyzer::{analyze_structure, extract_metadata},
    extract::{extract_text, ExtractError},
    store::InMemoryDocumentStore,
};
pub use gemini::GeminiGateway;
pub use logging::JsonlDiscussionLogger;
