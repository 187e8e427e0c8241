//! Reference document types
//!
//! A discussion may be grounded in one uploaded document per session. The
//! raw extracted text is always present; the derived pieces (model-based
//! content analysis, offline structure and metadata scans) are attached
//! as they become available.

pub mod parsing;

use serde::{Deserialize, Serialize};

/// Everything known about the session's reference document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentContext {
    /// Raw extracted text
    pub text: String,
    /// Original filename, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Model-based content analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<DocumentAnalysis>,
    /// Offline structural scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<DocumentStructure>,
    /// Offline metadata scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl DocumentContext {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_analysis(mut self, analysis: DocumentAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn with_structure(mut self, structure: DocumentStructure) -> Self {
        self.structure = Some(structure);
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Model-derived content analysis of a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Short prose summary
    pub summary: String,
    /// Main topics found in the document
    #[serde(default)]
    pub main_topics: Vec<String>,
    /// Key factual points
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Notable numbers, statistics, quantities
    #[serde(default)]
    pub key_data: Vec<String>,
    /// The full analysis text as returned by the model
    pub raw: String,
}

/// Offline structural scan: headers, lists, tables, recurring terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub total_length: usize,
    pub paragraph_count: usize,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub list_items: Vec<String>,
    #[serde(default)]
    pub tabular_rows: Vec<String>,
    #[serde(default)]
    pub key_terms: Vec<String>,
}

/// Offline metadata scan: best-effort guesses, all optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default)]
    pub key_entities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
}
