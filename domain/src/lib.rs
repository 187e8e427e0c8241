//! Domain layer for roundtable
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Discussion
//!
//! A discussion is a multi-turn exchange among 2-6 **roles** on a topic.
//! Within each turn every role speaks exactly once, in roster order. The
//! position of the next utterance to produce is a [`Cursor`]; all state
//! (transcript + cursor) is held by the caller and round-tripped on every
//! step, so the advancement logic is a pure function of its input.
//!
//! ## Grounding
//!
//! A discussion may be grounded in an uploaded reference document. The
//! document's extracted text and derived analysis are threaded into every
//! speaker prompt when grounding is active.

pub mod core;
pub mod discussion;
pub mod document;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use self::core::{
    error::DomainError,
    generation::GenerationParams,
    language::Language,
    model::Model,
    topic::Topic,
};
pub use discussion::{
    cursor::{Cursor, GuidanceDirective, TurnWindow},
    entities::{DiscussionOutcome, Utterance, ANALYST_ROLE, SYSTEM_ROLE},
    role::{Role, RoleRoster},
};
pub use document::{
    parsing::parse_analysis_response, DocumentAnalysis, DocumentContext, DocumentMetadata,
    DocumentStructure,
};
pub use prompt::PromptTemplate;
pub use util::truncate_str;
