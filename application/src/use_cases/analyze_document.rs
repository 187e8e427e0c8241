//! Analyze Document use case.
//!
//! Single-shot model-based content analysis of an uploaded document:
//! summary, main topics, key points, key data. The response is parsed
//! into a structured [`DocumentAnalysis`] by a pure domain parser; when
//! the model ignores the requested format, the raw text is still carried
//! so grounding never loses information.
//!
//! The offline structure and metadata scans are a separate infrastructure
//! concern — this use case is only the gateway round trip.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use roundtable_domain::{
    parse_analysis_response, DocumentAnalysis, GenerationParams, Language, PromptTemplate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// A document shorter than this carries too little signal to analyze.
const MIN_DOCUMENT_CHARS: usize = 100;

/// Errors that can occur during document analysis
#[derive(Error, Debug)]
pub enum AnalyzeDocumentError {
    #[error("Document too short to analyze ({got} chars, need {min})")]
    DocumentTooShort { got: usize, min: usize },

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the [`AnalyzeDocumentUseCase`]
#[derive(Debug, Clone)]
pub struct AnalyzeDocumentInput {
    pub text: String,
    pub language: Language,
    pub params: GenerationParams,
}

/// Use case for model-based document content analysis
pub struct AnalyzeDocumentUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl AnalyzeDocumentUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        input: AnalyzeDocumentInput,
    ) -> Result<DocumentAnalysis, AnalyzeDocumentError> {
        let char_count = input.text.chars().count();
        if char_count < MIN_DOCUMENT_CHARS {
            return Err(AnalyzeDocumentError::DocumentTooShort {
                got: char_count,
                min: MIN_DOCUMENT_CHARS,
            });
        }

        info!("Analyzing document: {} chars", char_count);

        let prompt = PromptTemplate::document_analysis_prompt(&input.text, &input.language);
        let response = self.gateway.generate(&prompt, &input.params).await?;

        Ok(parse_analysis_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StructuredGateway;

    #[async_trait]
    impl LlmGateway for StructuredGateway {
        async fn generate(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GatewayError> {
            Ok("1. Summary: A plan.\n\n2. Main Topics\n- Planning\n\n3. Key Points\n- One point\n\n4. Key Data\nNone\n\n5. Document Analysis\nFine.".to_string())
        }
    }

    fn long_text() -> String {
        "This document describes the quarterly planning process in detail. ".repeat(10)
    }

    #[tokio::test]
    async fn test_analysis_is_parsed() {
        let use_case = AnalyzeDocumentUseCase::new(Arc::new(StructuredGateway));
        let analysis = use_case
            .execute(AnalyzeDocumentInput {
                text: long_text(),
                language: Language::English,
                params: GenerationParams::default().with_temperature(0.0),
            })
            .await
            .unwrap();

        assert_eq!(analysis.summary, "A plan.");
        assert_eq!(analysis.main_topics, vec!["Planning"]);
        assert!(analysis.key_data.is_empty());
        assert!(!analysis.raw.is_empty());
    }

    #[tokio::test]
    async fn test_short_document_rejected_without_gateway_call() {
        let use_case = AnalyzeDocumentUseCase::new(Arc::new(StructuredGateway));
        let result = use_case
            .execute(AnalyzeDocumentInput {
                text: "too short".to_string(),
                language: Language::English,
                params: GenerationParams::default(),
            })
            .await;
        assert!(matches!(
            result,
            Err(AnalyzeDocumentError::DocumentTooShort { .. })
        ));
    }
}
