//! Turn-advancement state: cursor and turn windows
//!
//! The cursor identifies the next utterance to produce. Speaking order
//! within a turn is roster order; the turn counter increments only after
//! every role has spoken once. All of this is pure arithmetic — the
//! transcript itself lives with the caller.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Bounds for a fresh run's total turns
pub const MAX_FRESH_TURNS: u32 = 10;
/// Bounds for a continuation's additional turns
pub const MAX_CONTINUATION_TURNS: u32 = 5;

/// Position of the next utterance to produce (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub turn: u32,
    pub role_index: usize,
}

impl Cursor {
    /// The cursor at the start of any window
    pub fn start() -> Self {
        Self {
            turn: 0,
            role_index: 0,
        }
    }

    pub fn new(turn: u32, role_index: usize) -> Self {
        Self { turn, role_index }
    }

    /// The cursor after one utterance is produced: advance within the
    /// turn, or wrap to the next turn once every role has spoken.
    pub fn advanced(&self, role_count: usize) -> Cursor {
        if self.role_index + 1 < role_count {
            Cursor {
                turn: self.turn,
                role_index: self.role_index + 1,
            }
        } else {
            Cursor {
                turn: self.turn + 1,
                role_index: 0,
            }
        }
    }

    /// Check this cursor addresses a producible utterance for the given
    /// roster size and turn budget.
    pub fn validate(&self, role_count: usize, total_turns: u32) -> Result<(), DomainError> {
        if self.role_index >= role_count || self.turn >= total_turns {
            return Err(DomainError::InvalidCursor {
                turn: self.turn,
                role_index: self.role_index,
                role_count,
                total_turns,
            });
        }
        Ok(())
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::start()
    }
}

/// How many turns this run is allowed to produce (Value Object)
///
/// Fresh runs and continuations carry different bounds; both count turns
/// from zero within their own window, independent of transcript length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnWindow {
    Fresh { total_turns: u32 },
    Continuation { additional_turns: u32 },
}

impl TurnWindow {
    pub fn fresh(total_turns: u32) -> Self {
        TurnWindow::Fresh { total_turns }
    }

    pub fn continuation(additional_turns: u32) -> Self {
        TurnWindow::Continuation { additional_turns }
    }

    /// Number of turns in this window
    pub fn turns(&self) -> u32 {
        match self {
            TurnWindow::Fresh { total_turns } => *total_turns,
            TurnWindow::Continuation { additional_turns } => *additional_turns,
        }
    }

    pub fn is_continuation(&self) -> bool {
        matches!(self, TurnWindow::Continuation { .. })
    }

    /// Enforce the per-kind turn bounds
    pub fn validate(&self) -> Result<(), DomainError> {
        let (got, max) = match self {
            TurnWindow::Fresh { total_turns } => (*total_turns, MAX_FRESH_TURNS),
            TurnWindow::Continuation { additional_turns } => {
                (*additional_turns, MAX_CONTINUATION_TURNS)
            }
        };
        if got < 1 || got > max {
            return Err(DomainError::InvalidTurnCount { got, min: 1, max });
        }
        Ok(())
    }
}

/// A caller-supplied instruction steering continued discussion
///
/// The driver converts this into exactly one synthetic system utterance
/// appended to the carried-in history before role cycling resumes. The
/// injected utterance counts toward prompt context but never toward the
/// cursor math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceDirective {
    pub instruction: String,
    pub additional_turns: u32,
}

impl GuidanceDirective {
    pub fn new(instruction: impl Into<String>, additional_turns: u32) -> Self {
        Self {
            instruction: instruction.into(),
            additional_turns,
        }
    }

    pub fn window(&self) -> TurnWindow {
        TurnWindow::continuation(self.additional_turns)
    }
}
