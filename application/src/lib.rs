//! Application layer for roundtable
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationDefaults;
pub use ports::{
    discussion_logger::{DiscussionEvent, DiscussionLogger, NoDiscussionLogger},
    document_store::DocumentStore,
    llm_gateway::{GatewayError, LlmGateway},
    progress::{DiscussionProgressNotifier, NoProgress},
};
pub use use_cases::advance_discussion::{
    AdvanceDiscussionUseCase, StepError, StepInput, StepOutput,
};
pub use use_cases::analyze_document::{
    AnalyzeDocumentError, AnalyzeDocumentInput, AnalyzeDocumentUseCase,
};
pub use use_cases::extract_action_items::{
    ExtractActionItemsError, ExtractActionItemsInput, ExtractActionItemsUseCase,
};
pub use use_cases::run_discussion::{
    ContinueDiscussionInput, RunDiscussionInput, RunDiscussionUseCase,
};
pub use use_cases::summarize_discussion::{
    SummarizeError, SummarizeInput, SummarizeDiscussionUseCase,
};
