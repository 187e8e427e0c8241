//! Document adapters: storage, offline analysis, text extraction

pub mod analyzer;
pub mod extract;
pub mod store;
