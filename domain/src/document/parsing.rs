//! Analysis response parsing.
//!
//! Extracts a structured [`DocumentAnalysis`] from the free-form
//! numbered-section response the analysis prompt asks for. Pure domain
//! logic — no I/O, just text pattern matching. Conservative: anything
//! that fails to parse degrades to carrying the raw response text, never
//! to an error.

use crate::document::DocumentAnalysis;

/// Parse a numbered-section analysis response.
///
/// The analysis prompt asks for five numbered sections (summary, main
/// topics, key points, key data, overall analysis) in the output
/// language. Section headers are located by their `N.` line prefix, so
/// parsing works for both the Japanese and English templates.
pub fn parse_analysis_response(response: &str) -> DocumentAnalysis {
    let summary = section_body(response, 1, 2)
        .map(|s| strip_header_line(&s))
        .unwrap_or_default();

    let main_topics = section_body(response, 2, 3)
        .map(|s| bullet_items(&s))
        .unwrap_or_default();

    let key_points = section_body(response, 3, 4)
        .map(|s| bullet_items(&s))
        .unwrap_or_default();

    let key_data = section_body(response, 4, 5)
        .map(|s| bullet_items(&s))
        .filter(|items| !items.iter().any(|i| i == "なし" || i.eq_ignore_ascii_case("none")))
        .unwrap_or_default();

    DocumentAnalysis {
        // A response without recognizable sections still yields a usable
        // summary: the whole text.
        summary: if summary.is_empty() {
            response.trim().to_string()
        } else {
            summary
        },
        main_topics,
        key_points,
        key_data,
        raw: response.to_string(),
    }
}

/// Extract the text between the `from.`-numbered header line and the
/// `to.`-numbered one (or end of input).
fn section_body(text: &str, from: u8, to: u8) -> Option<String> {
    let start = find_numbered_header(text, from)?;
    let rest = &text[start..];
    let end = find_numbered_header(rest, to).unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}

/// Byte offset of the line starting with `n.` (after optional markdown
/// emphasis or whitespace), if any.
fn find_numbered_header(text: &str, n: u8) -> Option<usize> {
    let needle = format!("{}.", n);
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_start().trim_start_matches(['#', '*', ' ']);
        if trimmed.starts_with(&needle) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Drop the header line itself, keeping the body.
fn strip_header_line(section: &str) -> String {
    match section.split_once('\n') {
        Some((header, body)) => {
            // Inline bodies ("1. Summary: text...") keep the text after
            // the first colon.
            let inline = header
                .split_once(['：', ':'])
                .map(|(_, rest)| rest.trim())
                .unwrap_or("");
            let body = body.trim();
            if body.is_empty() {
                inline.to_string()
            } else if inline.is_empty() {
                body.to_string()
            } else {
                format!("{}\n{}", inline, body)
            }
        }
        None => section
            .split_once(['：', ':'])
            .map(|(_, rest)| rest.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Collect bulleted lines (`-`, `*`, `・`, `•`) from a section body;
/// falls back to non-header lines when the model skipped bullets.
fn bullet_items(section: &str) -> Vec<String> {
    let bullets: Vec<String> = section
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix(['-', '*', '・', '•'])
                .map(|item| item.trim().to_string())
        })
        .filter(|item| !item.is_empty())
        .collect();

    if !bullets.is_empty() {
        return bullets;
    }

    section
        .lines()
        .skip(1) // header line
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
