//! Offline document analysis
//!
//! Structural and metadata scans that run without a model call: header
//! and list detection, tabular rows, recurring key terms, and best-effort
//! title/date/type/entity guesses. Documents are frequently Japanese
//! business files, so the patterns cover both Japanese and Western
//! conventions.

use regex::Regex;
use roundtable_domain::{DocumentMetadata, DocumentStructure};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static HEADER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\s*第[一二三四五六七八九十１２３４５６７８９０\d]+[章節項]",
        r"^\s*\d+[\.\-\s]",
        r"^\s*[IVXivx]+[\.\s]",
        r"^【.+】$",
        r"^［.+］$",
        r"^■.+$",
        r"^●.+$",
        r"^#{1,6}\s+\S",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static LIST_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"^\s*[\-\*•◦▪▫・]", r"^\s*\d+[\.\)]\s", r"^\s*[a-zA-Zａ-ｚＡ-Ｚ][\.\)]\s"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[一-龠ぁ-んァ-ヶー々a-zA-Z0-9]{2,}").unwrap());

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d{4}[年/\-]\s*\d{1,2}[月/\-]\s*\d{1,2}日?",
        r"令和\d+年\d+月\d+日",
        r"平成\d+年\d+月\d+日",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static ENTITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"株式会社[^\s\d]{2,}",
        r"[^\s]{2,}株式会社",
        r"[^\s]{2,}大学",
        r"[^\s]{2,}協会",
        r"[A-Z][A-Za-z]+\s*(?:Inc\.|Ltd\.|LLC|Corp\.|社)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Number of most-frequent terms to keep
const MAX_KEY_TERMS: usize = 20;
/// Cap on extracted entities
const MAX_ENTITIES: usize = 10;

/// Scan the document's structure: headers, lists, tables, key terms.
pub fn analyze_structure(text: &str) -> DocumentStructure {
    let paragraphs: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    let mut structure = DocumentStructure {
        total_length: text.len(),
        paragraph_count: paragraphs.len(),
        ..Default::default()
    };

    for para in &paragraphs {
        if HEADER_PATTERNS.iter().any(|p| p.is_match(para)) {
            structure.headers.push(para.trim().to_string());
            continue;
        }

        // Tabular rows: at least two pipe separators
        if para.matches('|').count() >= 2 {
            structure.tabular_rows.push(para.trim().to_string());
        }

        if LIST_PATTERNS.iter().any(|p| p.is_match(para)) {
            structure.list_items.push(para.trim().to_string());
        }
    }

    // Recurring terms, most frequent first; ties keep first-seen order
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for m in WORD_PATTERN.find_iter(text) {
        let word = m.as_str();
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }
    let mut ranked: Vec<(usize, &str)> = order
        .iter()
        .enumerate()
        .filter(|(_, w)| counts[**w] > 1)
        .map(|(i, w)| (i, *w))
        .collect();
    ranked.sort_by(|a, b| counts[b.1].cmp(&counts[a.1]).then(a.0.cmp(&b.0)));
    structure.key_terms = ranked
        .into_iter()
        .take(MAX_KEY_TERMS)
        .map(|(_, w)| w.to_string())
        .collect();

    structure
}

/// Best-effort metadata extraction: title, date, document type, entities.
pub fn extract_metadata(text: &str, filename: &str) -> DocumentMetadata {
    let mut metadata = DocumentMetadata {
        file_extension: Path::new(filename)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase())),
        ..Default::default()
    };

    let sample: String = text.chars().take(1_000).collect();

    // Title: the first line when it is short enough, otherwise a bracketed
    // fragment near the top
    if let Some(first_line) = text.lines().next() {
        let first_line = first_line.trim();
        if !first_line.is_empty() && first_line.chars().count() < 100 {
            metadata.estimated_title = Some(first_line.to_string());
        }
    }
    if metadata.estimated_title.is_none()
        && let Some(bracketed) = find_bracketed(&sample)
    {
        metadata.estimated_title = Some(bracketed);
    }

    for pattern in DATE_PATTERNS.iter() {
        if let Some(m) = pattern.find(&sample) {
            metadata.possible_date = Some(m.as_str().to_string());
            break;
        }
    }

    metadata.document_type = guess_document_type(text, metadata.file_extension.as_deref());

    for pattern in ENTITY_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let entity = m.as_str().to_string();
            if !metadata.key_entities.contains(&entity) {
                metadata.key_entities.push(entity);
                if metadata.key_entities.len() >= MAX_ENTITIES {
                    return metadata;
                }
            }
        }
    }

    metadata
}

fn find_bracketed(sample: &str) -> Option<String> {
    static BRACKETED: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"【(.+?)】|\[(.+?)\]").unwrap());
    BRACKETED.captures(sample).and_then(|c| {
        c.get(1)
            .or_else(|| c.get(2))
            .map(|m| m.as_str().to_string())
    })
}

fn guess_document_type(text: &str, extension: Option<&str>) -> Option<String> {
    let head: String = text.chars().take(2_000).collect();

    let keyword_types: [(&str, &[&str]); 7] = [
        ("報告書", &["報告", "レポート", "調査結果", "report"]),
        ("議事録", &["議事録", "会議", "ミーティング", "minutes"]),
        ("仕様書", &["仕様", "要件", "設計", "specification"]),
        ("マニュアル", &["マニュアル", "手順", "ガイド", "manual"]),
        ("契約書", &["契約", "規約", "約款", "agreement"]),
        ("企画書", &["企画", "プロポーザル", "提案", "proposal"]),
        ("データ分析", &["統計", "分析結果", "調査データ", "dataset"]),
    ];

    for (doc_type, keywords) in keyword_types {
        if keywords.iter().any(|k| head.contains(k)) {
            return Some(doc_type.to_string());
        }
    }

    match extension {
        Some(".pdf") => Some("PDF文書".to_string()),
        Some(".docx") => Some("ワード文書".to_string()),
        Some(".xlsx") => Some("表計算データ".to_string()),
        Some(".txt") | Some(".md") => Some("テキスト文書".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_detects_headers_and_lists() {
        let text = "\
第一章 はじめに
本文の段落です。

1. 背景
- 項目その一
- 項目その二

| 列A | 列B |
| 1 | 2 |
";
        let structure = analyze_structure(text);
        assert_eq!(structure.headers.len(), 2);
        assert!(structure.headers[0].contains("第一章"));
        assert_eq!(structure.list_items.len(), 2);
        assert_eq!(structure.tabular_rows.len(), 2);
        assert!(structure.paragraph_count >= 6);
    }

    #[test]
    fn test_key_terms_ranked_by_frequency() {
        let text = "budget review budget plan budget plan review once";
        let structure = analyze_structure(text);
        assert_eq!(structure.key_terms[0], "budget");
        // "once" appears a single time and is excluded
        assert!(!structure.key_terms.contains(&"once".to_string()));
    }

    #[test]
    fn test_metadata_title_and_date() {
        let text = "2026年度採用計画\n作成日: 2026年4月1日\n本文です。";
        let metadata = extract_metadata(text, "plan.txt");
        assert_eq!(metadata.estimated_title.as_deref(), Some("2026年度採用計画"));
        assert_eq!(metadata.possible_date.as_deref(), Some("2026年4月1日"));
        assert_eq!(metadata.file_extension.as_deref(), Some(".txt"));
    }

    #[test]
    fn test_metadata_document_type_from_keywords() {
        let text = "プロジェクト議事録\n参加者: 全員\n".repeat(3);
        let metadata = extract_metadata(&text, "notes.txt");
        assert_eq!(metadata.document_type.as_deref(), Some("議事録"));
    }

    #[test]
    fn test_metadata_entities() {
        let text = "株式会社サンプルとAcme Inc.が提携した。詳細は山田工業株式会社まで。";
        let metadata = extract_metadata(text, "news.txt");
        assert!(
            metadata
                .key_entities
                .iter()
                .any(|e| e.contains("株式会社サンプル"))
        );
    }

    #[test]
    fn test_empty_document() {
        let structure = analyze_structure("");
        assert_eq!(structure.paragraph_count, 0);
        assert!(structure.headers.is_empty());

        let metadata = extract_metadata("", "empty.txt");
        assert!(metadata.estimated_title.is_none());
    }
}
