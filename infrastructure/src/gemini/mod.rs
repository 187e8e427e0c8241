//! Gemini API adapter
//!
//! Implements the [`LlmGateway`](roundtable_application::LlmGateway) port
//! against Google's Generative Language REST API.

mod gateway;
mod types;

pub use gateway::GeminiGateway;
