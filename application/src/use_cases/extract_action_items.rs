//! Extract Action Items use case.
//!
//! Single-shot transformation of a completed transcript into a markdown
//! action-item list: per-role actions with priorities, plus overall next
//! steps. Same contract as summarization — one gateway call, no retry.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use roundtable_domain::{GenerationParams, Language, PromptTemplate, Utterance};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during action item extraction
#[derive(Error, Debug)]
pub enum ExtractActionItemsError {
    #[error("Discussion transcript is empty")]
    EmptyTranscript,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the [`ExtractActionItemsUseCase`]
#[derive(Debug, Clone)]
pub struct ExtractActionItemsInput {
    pub utterances: Vec<Utterance>,
    pub language: Language,
    pub params: GenerationParams,
}

/// Use case for extracting per-role action items from a transcript
pub struct ExtractActionItemsUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl ExtractActionItemsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        input: ExtractActionItemsInput,
    ) -> Result<String, ExtractActionItemsError> {
        if input.utterances.is_empty() {
            return Err(ExtractActionItemsError::EmptyTranscript);
        }

        info!(
            "Extracting action items: {} utterances",
            input.utterances.len()
        );

        let prompt = PromptTemplate::action_items_prompt(&input.utterances, &input.language);
        let action_items = self.gateway.generate(&prompt, &input.params).await?;

        Ok(action_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedGateway;

    #[async_trait]
    impl LlmGateway for FixedGateway {
        async fn generate(
            &self,
            prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GatewayError> {
            assert!(prompt.contains("CEO: Ship by June."));
            Ok("# Action Items List\n## CEO\n1. **Ship**: by June (Priority: High)".to_string())
        }
    }

    #[tokio::test]
    async fn test_action_items_happy_path() {
        let use_case = ExtractActionItemsUseCase::new(Arc::new(FixedGateway));
        let result = use_case
            .execute(ExtractActionItemsInput {
                utterances: vec![Utterance::spoken("CEO", "Ship by June.")],
                language: Language::English,
                params: GenerationParams::default(),
            })
            .await
            .unwrap();
        assert!(result.contains("Action Items List"));
    }

    #[tokio::test]
    async fn test_empty_transcript_is_error() {
        let use_case = ExtractActionItemsUseCase::new(Arc::new(FixedGateway));
        let result = use_case
            .execute(ExtractActionItemsInput {
                utterances: vec![],
                language: Language::English,
                params: GenerationParams::default(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ExtractActionItemsError::EmptyTranscript)
        ));
    }
}
