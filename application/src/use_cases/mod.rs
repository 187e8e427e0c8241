//! Application use cases

pub mod advance_discussion;
pub mod analyze_document;
pub mod extract_action_items;
pub mod run_discussion;
pub mod summarize_discussion;
