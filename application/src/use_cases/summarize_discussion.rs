//! Summarize Discussion use case.
//!
//! Single-shot transformation of a completed transcript into a markdown
//! summary. Ignores cursors entirely: any utterance sequence, including
//! pseudo-role entries, is fair input. One gateway call, no retry, no
//! streaming.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use roundtable_domain::{GenerationParams, Language, PromptTemplate, Topic, Utterance};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during summarization
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Discussion transcript is empty")]
    EmptyTranscript,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the [`SummarizeDiscussionUseCase`]
#[derive(Debug, Clone)]
pub struct SummarizeInput {
    pub topic: Topic,
    pub utterances: Vec<Utterance>,
    pub language: Language,
    pub params: GenerationParams,
}

/// Use case for producing a markdown summary of a transcript
pub struct SummarizeDiscussionUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl SummarizeDiscussionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: SummarizeInput) -> Result<String, SummarizeError> {
        if input.utterances.is_empty() {
            return Err(SummarizeError::EmptyTranscript);
        }

        info!(
            "Summarizing discussion: {} utterances",
            input.utterances.len()
        );

        let prompt =
            PromptTemplate::summary_prompt(&input.topic, &input.utterances, &input.language);
        let summary = self.gateway.generate(&prompt, &input.params).await?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoGateway;

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn generate(
            &self,
            prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GatewayError> {
            Ok(format!("## Summary\nbased on {} bytes", prompt.len()))
        }
    }

    fn input(utterances: Vec<Utterance>) -> SummarizeInput {
        SummarizeInput {
            topic: Topic::new("Budget planning").unwrap(),
            utterances,
            language: Language::English,
            params: GenerationParams::default(),
        }
    }

    #[tokio::test]
    async fn test_summary_happy_path() {
        let use_case = SummarizeDiscussionUseCase::new(Arc::new(EchoGateway));
        let summary = use_case
            .execute(input(vec![Utterance::spoken("CEO", "Cut costs.")]))
            .await
            .unwrap();
        assert!(summary.starts_with("## Summary"));
    }

    #[tokio::test]
    async fn test_empty_transcript_is_error() {
        let use_case = SummarizeDiscussionUseCase::new(Arc::new(EchoGateway));
        let result = use_case.execute(input(vec![])).await;
        assert!(matches!(result, Err(SummarizeError::EmptyTranscript)));
    }
}
