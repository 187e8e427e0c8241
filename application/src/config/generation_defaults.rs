//! Generation defaults — per-operation model parameters.
//!
//! Discussion turns want variety (higher temperature); document analysis
//! and derived artifacts want stability (low temperature). These are
//! application-layer defaults, overridable from configuration and CLI.

use roundtable_domain::{GenerationParams, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-step gateway timeout. Timeouts are caller policy, not a
/// sequencer guarantee; the driver applies this bound to each step.
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(60);

/// Per-operation generation parameter defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationDefaults {
    /// Parameters for discussion turns.
    pub discussion: GenerationParams,
    /// Parameters for document analysis and derived artifacts.
    pub analysis: GenerationParams,
    /// Bound on each single step's gateway call.
    pub step_timeout: Duration,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            discussion: GenerationParams::new(Model::default_discussion(), 0.7, 1024),
            analysis: GenerationParams::new(Model::default_analysis(), 0.2, 1024),
            step_timeout: DEFAULT_STEP_TIMEOUT,
        }
    }
}

impl GenerationDefaults {
    // ==================== Builder Methods ====================

    pub fn with_discussion(mut self, params: GenerationParams) -> Self {
        self.discussion = params;
        self
    }

    pub fn with_analysis(mut self, params: GenerationParams) -> Self {
        self.analysis = params;
        self
    }

    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let defaults = GenerationDefaults::default();
        assert_eq!(defaults.discussion.temperature, 0.7);
        assert_eq!(defaults.analysis.temperature, 0.2);
        assert_eq!(defaults.step_timeout, Duration::from_secs(60));
        assert!(defaults.discussion.validate().is_ok());
        assert!(defaults.analysis.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let defaults = GenerationDefaults::default()
            .with_step_timeout(Duration::from_secs(30))
            .with_discussion(GenerationParams::default().with_temperature(0.4));

        assert_eq!(defaults.step_timeout, Duration::from_secs(30));
        assert_eq!(defaults.discussion.temperature, 0.4);
    }
}
