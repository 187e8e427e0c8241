//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion to validated domain types
//! happens through the accessor methods.

use roundtable_application::GenerationDefaults;
use roundtable_domain::{Language, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// [models]
/// discussion = "gemini-2.0-flash-lite"
/// analysis = "gemini-1.5-pro"
///
/// [generation]
/// temperature = 0.7
/// max_output_tokens = 1024
/// step_timeout_secs = 60
///
/// [discussion]
/// language = "ja"
/// turns = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-operation model selection
    pub models: FileModelsConfig,
    /// Generation parameter overrides
    pub generation: FileGenerationConfig,
    /// Discussion defaults
    pub discussion: FileDiscussionConfig,
}

/// Per-operation model configuration from TOML (`[models]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for discussion turns
    pub discussion: Option<String>,
    /// Model for document analysis and derived artifacts
    pub analysis: Option<String>,
}

impl FileModelsConfig {
    /// Parse the discussion model; unknown names become `Model::Custom`
    pub fn parse_discussion(&self) -> Option<Model> {
        self.discussion
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse().unwrap())
    }

    /// Parse the analysis model
    pub fn parse_analysis(&self) -> Option<Model> {
        self.analysis
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse().unwrap())
    }
}

/// Generation overrides from TOML (`[generation]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub step_timeout_secs: Option<u64>,
}

/// Discussion defaults from TOML (`[discussion]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiscussionConfig {
    /// Output language code ("ja", "en", ...)
    pub language: Option<String>,
    /// Default total turns for fresh runs
    pub turns: Option<u32>,
}

impl FileConfig {
    /// Merge file values over the built-in generation defaults.
    pub fn generation_defaults(&self) -> GenerationDefaults {
        let mut defaults = GenerationDefaults::default();

        if let Some(model) = self.models.parse_discussion() {
            defaults.discussion = defaults.discussion.with_model(model);
        }
        if let Some(model) = self.models.parse_analysis() {
            defaults.analysis = defaults.analysis.with_model(model);
        }
        if let Some(temperature) = self.generation.temperature {
            defaults.discussion = defaults.discussion.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.generation.max_output_tokens {
            defaults.discussion = defaults.discussion.with_max_output_tokens(max_tokens);
            defaults.analysis = defaults.analysis.with_max_output_tokens(max_tokens);
        }
        if let Some(secs) = self.generation.step_timeout_secs {
            defaults.step_timeout = Duration::from_secs(secs);
        }

        defaults
    }

    /// Configured output language, defaulting to Japanese.
    pub fn language(&self) -> Language {
        self.discussion
            .language
            .as_deref()
            .map(|s| s.parse().unwrap())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FileConfig::default();
        assert!(config.models.discussion.is_none());
        assert!(config.models.analysis.is_none());
        assert!(config.language().is_japanese());

        let defaults = config.generation_defaults();
        assert_eq!(defaults.discussion.temperature, 0.7);
    }

    #[test]
    fn test_config_deserialize() {
        let toml_str = r#"
[models]
discussion = "gemini-1.5-pro"

[generation]
temperature = 0.5
step_timeout_secs = 30

[discussion]
language = "en"
turns = 4
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.models.parse_discussion(),
            Some(Model::Gemini15Pro)
        );
        assert!(config.models.parse_analysis().is_none());
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.discussion.turns, Some(4));

        let defaults = config.generation_defaults();
        assert_eq!(defaults.discussion.model, Model::Gemini15Pro);
        assert_eq!(defaults.discussion.temperature, 0.5);
        assert_eq!(defaults.step_timeout, Duration::from_secs(30));
        // Analysis keeps its stable low temperature
        assert_eq!(defaults.analysis.temperature, 0.2);
    }

    #[test]
    fn test_empty_model_name_ignored() {
        let toml_str = r#"
[models]
discussion = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.models.parse_discussion().is_none());
    }
}
