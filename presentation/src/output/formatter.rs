//! Output formatter trait

use roundtable_domain::DiscussionOutcome;

/// Trait for formatting discussion outcomes
pub trait OutputFormatter {
    /// Format the complete outcome: transcript plus derived artifacts
    fn format(&self, outcome: &DiscussionOutcome) -> String;

    /// Format only the transcript
    fn format_transcript(&self, outcome: &DiscussionOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &DiscussionOutcome) -> String;

    /// Format as a markdown document
    fn format_markdown(&self, outcome: &DiscussionOutcome) -> String;
}
