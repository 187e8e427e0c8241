//! Discussion transcript entities

use serde::{Deserialize, Serialize};

/// Reserved role for caller-injected directives. Not a roster participant.
pub const SYSTEM_ROLE: &str = "system";

/// Reserved role for synthesized cross-cutting commentary. Not a roster
/// participant.
pub const ANALYST_ROLE: &str = "analyst";

/// One attributed unit of discussion content (Entity)
///
/// `role` is usually a roster member's name, but a transcript may also
/// carry the reserved pseudo-roles — consumers must not assume every
/// utterance role is in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub role: String,
    pub content: String,
}

impl Utterance {
    /// An utterance spoken by a roster role
    pub fn spoken(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// A caller-injected guidance directive
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: SYSTEM_ROLE.to_string(),
            content: content.into(),
        }
    }

    /// Synthesized cross-cutting commentary
    pub fn analyst(content: impl Into<String>) -> Self {
        Self {
            role: ANALYST_ROLE.to_string(),
            content: content.into(),
        }
    }

    pub fn is_system(&self) -> bool {
        self.role == SYSTEM_ROLE
    }

    pub fn is_analyst(&self) -> bool {
        self.role == ANALYST_ROLE
    }

    /// True for utterances that do not belong to any roster participant
    pub fn is_pseudo_role(&self) -> bool {
        self.is_system() || self.is_analyst()
    }
}

/// A completed run with its optional derived artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionOutcome {
    pub topic: String,
    pub roles: Vec<String>,
    pub utterances: Vec<Utterance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_items: Option<String>,
}

impl DiscussionOutcome {
    pub fn new(
        topic: impl Into<String>,
        roles: Vec<String>,
        utterances: Vec<Utterance>,
    ) -> Self {
        Self {
            topic: topic.into(),
            roles,
            utterances,
            summary: None,
            action_items: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_action_items(mut self, action_items: impl Into<String>) -> Self {
        self.action_items = Some(action_items.into());
        self
    }
}
