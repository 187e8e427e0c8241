//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant represents an input-contract violation: the caller can
/// always recover by correcting the request. No partial output is ever
/// produced alongside one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("A discussion needs between {min} and {max} roles, got {got}")]
    InvalidRoleCount { got: usize, min: usize, max: usize },

    #[error("Duplicate role name: {0}")]
    DuplicateRole(String),

    #[error("Role name cannot be empty")]
    EmptyRoleName,

    #[error("Turn count {got} out of range [{min}, {max}]")]
    InvalidTurnCount { got: u32, min: u32, max: u32 },

    #[error("Cursor {turn}/{role_index} out of bounds for {role_count} roles and {total_turns} turns")]
    InvalidCursor {
        turn: u32,
        role_index: usize,
        role_count: usize,
        total_turns: u32,
    },

    #[error("Role not present in roster: {0}")]
    UnknownRole(String),

    #[error("Temperature {0} out of range [0.0, 1.0]")]
    InvalidTemperature(f32),

    #[error("Max output tokens must be at least 1")]
    InvalidMaxTokens,
}

impl DomainError {
    /// Check whether this error concerns the cursor/turn bookkeeping
    /// rather than the roster or generation parameters.
    pub fn is_cursor_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidCursor { .. } | DomainError::InvalidTurnCount { .. }
        )
    }
}
