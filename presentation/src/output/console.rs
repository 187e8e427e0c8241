//! Console output formatter for discussion outcomes

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use roundtable_domain::{DiscussionOutcome, SYSTEM_ROLE};

/// Formats discussion outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &DiscussionOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Roundtable Discussion"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Topic:".cyan().bold(),
            outcome.topic
        ));

        output.push_str(&format!(
            "{} {}\n",
            "Roles:".cyan().bold(),
            outcome.roles.join(", ")
        ));

        output.push_str(&Self::section_header("Transcript"));
        output.push_str(&Self::transcript_body(outcome));

        if let Some(summary) = &outcome.summary {
            output.push_str(&Self::section_header("Summary"));
            output.push_str(&format!("\n{}\n", summary));
        }

        if let Some(action_items) = &outcome.action_items {
            output.push_str(&Self::section_header("Action Items"));
            output.push_str(&format!("\n{}\n", action_items));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format only the transcript
    pub fn format_transcript(outcome: &DiscussionOutcome) -> String {
        Self::transcript_body(outcome)
    }

    /// Format as JSON
    pub fn format_json(outcome: &DiscussionOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format as a markdown document
    pub fn format_markdown(outcome: &DiscussionOutcome) -> String {
        let mut output = format!("# {}\n\n", outcome.topic);

        output.push_str(&format!("Roles: {}\n\n", outcome.roles.join(", ")));

        output.push_str("## Transcript\n\n");
        for utterance in &outcome.utterances {
            if utterance.is_system() {
                output.push_str(&format!("> _Guidance: {}_\n\n", utterance.content));
            } else {
                output.push_str(&format!(
                    "**{}**: {}\n\n",
                    utterance.role, utterance.content
                ));
            }
        }

        if let Some(summary) = &outcome.summary {
            output.push_str("## Summary\n\n");
            output.push_str(summary);
            output.push_str("\n\n");
        }

        if let Some(action_items) = &outcome.action_items {
            output.push_str("## Action Items\n\n");
            output.push_str(action_items);
            output.push('\n');
        }

        output
    }

    fn transcript_body(outcome: &DiscussionOutcome) -> String {
        let mut body = String::new();
        for utterance in &outcome.utterances {
            if utterance.role == SYSTEM_ROLE {
                body.push_str(&format!(
                    "\n{}\n{}\n",
                    "── guidance ──".magenta().bold(),
                    utterance.content.dimmed()
                ));
            } else {
                body.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", utterance.role).yellow().bold(),
                    utterance.content
                ));
            }
        }
        body
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &DiscussionOutcome) -> String {
        Self::format(outcome)
    }

    fn format_transcript(&self, outcome: &DiscussionOutcome) -> String {
        Self::format_transcript(outcome)
    }

    fn format_json(&self, outcome: &DiscussionOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_markdown(&self, outcome: &DiscussionOutcome) -> String {
        Self::format_markdown(outcome)
    }
}
