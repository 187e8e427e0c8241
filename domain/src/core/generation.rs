//! Generation parameters for a single model call

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Parameters passed to the model gateway for one generation call.
///
/// Temperature is bounded to [0.0, 1.0]; validation happens before any
/// gateway call so a bad value never costs a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: Model,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.7,
            max_output_tokens: 1024,
        }
    }
}

impl GenerationParams {
    pub fn new(model: Model, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            model,
            temperature,
            max_output_tokens,
        }
    }

    /// Validate parameter bounds
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(0.0..=1.0).contains(&self.temperature) || !self.temperature.is_finite() {
            return Err(DomainError::InvalidTemperature(self.temperature));
        }
        if self.max_output_tokens == 0 {
            return Err(DomainError::InvalidMaxTokens);
        }
        Ok(())
    }

    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.model, Model::Gemini20FlashLite);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_output_tokens, 1024);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_model(Model::Gemini15Pro)
            .with_temperature(0.2)
            .with_max_output_tokens(2048);

        assert_eq!(params.model, Model::Gemini15Pro);
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_output_tokens, 2048);
    }

    #[test]
    fn test_temperature_bounds() {
        let too_hot = GenerationParams::default().with_temperature(1.5);
        assert_eq!(
            too_hot.validate().unwrap_err(),
            DomainError::InvalidTemperature(1.5)
        );

        let negative = GenerationParams::default().with_temperature(-0.1);
        assert!(negative.validate().is_err());

        let boundary = GenerationParams::default().with_temperature(1.0);
        assert!(boundary.validate().is_ok());
    }

    #[test]
    fn test_zero_tokens_rejected() {
        let params = GenerationParams::default().with_max_output_tokens(0);
        assert_eq!(params.validate().unwrap_err(), DomainError::InvalidMaxTokens);
    }
}
