//! Reference document text extraction
//!
//! Plain-text formats are read directly. Binary formats (PDF, DOCX,
//! XLSX) need a dedicated extraction service and are rejected with a
//! classified error rather than silently producing garbage.

use std::path::Path;
use thiserror::Error;

/// Extensions this adapter reads directly
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// Errors that can occur during text extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported file format '{extension}' (supported: {supported})")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    #[error("File is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Extracted no text from {0}")]
    EmptyDocument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Extract the text content of a reference document.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ExtractError::UnsupportedFormat {
            extension: if extension.is_empty() {
                "(none)".to_string()
            } else {
                extension
            },
            supported: SUPPORTED_EXTENSIONS.join(", "),
        });
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| ExtractError::InvalidEncoding(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractError::EmptyDocument(
            path.to_string_lossy().to_string(),
        ));
    }

    Ok(text)
}
