//! Topic value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The subject of a discussion (Value Object)
///
/// Every speaker prompt and the summary prompt are built around this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a new topic, rejecting empty or whitespace-only input
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(Self { content })
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Topic {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Topic::new(s)
    }
}

impl TryFrom<String> for Topic {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Topic::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let t = Topic::new("Should we adopt a four-day work week?").unwrap();
        assert_eq!(t.content(), "Should we adopt a four-day work week?");
    }

    #[test]
    fn test_empty_topic_rejected() {
        assert_eq!(Topic::new("").unwrap_err(), DomainError::EmptyTopic);
        assert_eq!(Topic::new("   ").unwrap_err(), DomainError::EmptyTopic);
    }

    #[test]
    fn test_topic_try_from() {
        let t: Topic = "Remote work policy".try_into().unwrap();
        assert_eq!(t.content(), "Remote work policy");
    }
}
