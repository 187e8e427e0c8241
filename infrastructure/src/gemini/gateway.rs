//! Gemini gateway adapter
//!
//! One prompt in, one text out, errors classified from HTTP status so the
//! caller can tell auth from quota from transient trouble. Retrying is
//! the caller's decision — this adapter never retries.

use super::types::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig};
use async_trait::async_trait;
use reqwest::Client;
use roundtable_application::{GatewayError, LlmGateway};
use roundtable_domain::GenerationParams;
use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use tracing::{debug, error};

/// Environment variable for the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini gateway
pub struct GeminiGateway {
    api_key: String,
    client: Client,
    base_url: String,
}

impl GeminiGateway {
    /// Create a new gateway with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Create a gateway from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            GatewayError::Auth(format!(
                "{} environment variable not set",
                GEMINI_API_KEY_ENV
            ))
        })?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    fn build_request(prompt: &str, params: &GenerationParams) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_output_tokens,
                candidate_count: 1,
            }),
        }
    }

    /// Map an HTTP error status to the gateway error taxonomy.
    ///
    /// 401/403 carry bad credentials, 429 is quota, 5xx is the service's
    /// problem; anything else is unclassifiable.
    fn map_api_error(status: u16, response_text: &str) -> GatewayError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_string(), |e| e.message);

        match status {
            401 | 403 => GatewayError::Auth(message),
            429 => GatewayError::QuotaExceeded(Self::extract_quota_message(&message)),
            500..=599 => GatewayError::Transient(format!("HTTP {}: {}", status, message)),
            _ => GatewayError::Other(format!("HTTP {}: {}", status, message)),
        }
    }

    /// Extract a user-friendly quota message from a Gemini 429 error.
    ///
    /// Quota errors embed "Please retry in 6.406453963s."; surface the
    /// wait time when present.
    fn extract_quota_message(message: &str) -> String {
        if let Some(retry_pos) = message.find("Please retry in ")
            && let Some(s_pos) = message[retry_pos + 16..].find('s')
        {
            let time_str = &message[retry_pos + 16..retry_pos + 16 + s_pos];
            if let Ok(seconds) = time_str.parse::<f64>() {
                return format!(
                    "quota exceeded, retry in {} seconds",
                    seconds.ceil() as u64
                );
            }
        }
        "quota exceeded, wait a moment and try again".to_string()
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GatewayError> {
        let url = self.build_url(params.model.as_str());
        let request = Self::build_request(prompt, params);

        debug!(
            model = %params.model,
            prompt_bytes = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::Transient(format!("connection failed: {}", e))
                } else {
                    GatewayError::Other(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transient(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                GatewayError::InvalidResponse(format!("unparseable response body: {}", e))
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(GatewayError::Other(api_error.message));
        }

        match gemini_response.first_text() {
            Some(text) => {
                debug!(bytes = text.len(), "Received Gemini response");
                Ok(text.to_string())
            }
            None => Err(GatewayError::InvalidResponse(
                "no text candidate in response".to_string(),
            )),
        }
    }
}

impl Debug for GeminiGateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiGateway")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
