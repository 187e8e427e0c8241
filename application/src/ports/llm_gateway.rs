//! LLM Gateway port
//!
//! Defines the interface for the text generation backend. One prompt in,
//! one text out; failures are classified so callers can pick distinct
//! recovery actions (re-authenticate, wait out quota, retry transient).

use async_trait::async_trait;
use roundtable_domain::GenerationParams;
use thiserror::Error;

/// Classified failures from the generation backend
///
/// The classification is established at the adapter and must be preserved
/// end to end — quota, auth, and transient failures have different
/// recovery actions and must never be collapsed into one another.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Transient service error: {0}")]
    Transient(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Malformed model response: {0}")]
    InvalidResponse(String),

    #[error("Gateway error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether a retry of the same request can reasonably succeed.
    /// Retrying is always a caller decision — the core never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Transient(_) | GatewayError::Timeout)
    }
}

/// Gateway for text generation
///
/// This port defines how the application layer invokes the model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate text for a single prompt
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GatewayError>;
}
