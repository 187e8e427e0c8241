//! Prompt templates for discussion and derived artifacts
//!
//! All builders are pure: identical inputs produce identical output, so
//! every prompt is testable without a gateway. Japanese and English have
//! dedicated templates; other languages ride the English template with an
//! explicit output-language instruction.

use crate::core::language::Language;
use crate::core::topic::Topic;
use crate::discussion::entities::Utterance;
use crate::discussion::role::{Role, RoleRoster};
use crate::document::DocumentContext;
use crate::util::truncate_str;

/// Byte budget for a raw-text document excerpt inside a speaker prompt.
/// When the document has an analysis, the analysis is used instead and
/// this budget does not apply.
pub const DOCUMENT_EXCERPT_BUDGET: usize = 4_000;

/// Above this length the analysis prompt samples head, middle, and tail
/// instead of shipping the whole document.
pub const ANALYSIS_SAMPLE_THRESHOLD: usize = 12_000;
const ANALYSIS_SAMPLE_PART: usize = 4_000;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for one discussion turn: respond *as* the given role, in
    /// the given language, considering the conversation so far and the
    /// document when grounding is active.
    pub fn speaker_prompt(
        topic: &Topic,
        roster: &RoleRoster,
        history: &[Utterance],
        speaker: &Role,
        language: &Language,
        document: Option<&DocumentContext>,
    ) -> String {
        let mut prompt = String::new();

        if language.is_japanese() {
            prompt.push_str(&format!(
                "あなたは「{}」として振る舞ってください。\n\
                 テーマ「{}」についてのディスカッションに参加しています。\n\n\
                 参加者:\n{}\n\n",
                speaker.persona(),
                topic,
                roster.persona_list()
            ));
        } else {
            prompt.push_str(&format!(
                "You are roleplaying as {}.\n\
                 You are participating in a discussion about: {}.\n\n\
                 Participants:\n{}\n\n",
                speaker.persona(),
                topic,
                roster.persona_list()
            ));
        }

        if let Some(doc) = document {
            prompt.push_str(&Self::document_block(doc, language));
            prompt.push('\n');
        }

        if history.is_empty() {
            if language.is_japanese() {
                prompt.push_str("まだ発言はありません。あなたが議論の口火を切ってください。\n\n");
            } else {
                prompt.push_str("No one has spoken yet. Open the discussion.\n\n");
            }
        } else {
            if language.is_japanese() {
                prompt.push_str("これまでの議論:\n");
            } else {
                prompt.push_str("Previous discussion:\n");
            }
            prompt.push_str(&Self::format_history(history));
            prompt.push('\n');
        }

        if language.is_japanese() {
            prompt.push_str(&format!(
                "「{}」として、この議論への次の発言をしてください。\n\
                 役割から外れず、2〜3文で簡潔かつ具体的に述べてください。",
                speaker.name
            ));
        } else {
            prompt.push_str(&format!(
                "As {}, provide your next contribution to this discussion.\n\
                 Stay in character. Keep it to 2-3 concise, substantive sentences.",
                speaker.name
            ));
        }

        if let Language::Other(name) = language {
            prompt.push_str(&format!("\nRespond in {}.", name));
        }

        prompt
    }

    /// Prompt for the one-shot transcript summary.
    pub fn summary_prompt(topic: &Topic, utterances: &[Utterance], language: &Language) -> String {
        let discussion = Self::format_history(utterances);

        let mut prompt = if language.is_japanese() {
            format!(
                "以下はテーマ「{}」についてのディスカッションの記録です。\n\n\
                 ## 議論内容:\n{}\n\
                 ## 指示:\n\
                 1. 議論全体を3〜5文で要約してください。\n\
                 2. 各参加者の主な立場を1〜2文でまとめてください。\n\
                 3. 合意できた点と意見が分かれた点を箇条書きで挙げてください。\n\n\
                 出力はMarkdown形式で、見出しを付けてください。",
                topic, discussion
            )
        } else {
            format!(
                "The following is a transcript of a discussion about: {}.\n\n\
                 ## Discussion:\n{}\n\
                 ## Instructions:\n\
                 1. Summarize the overall discussion in 3-5 sentences.\n\
                 2. Capture each participant's main position in 1-2 sentences.\n\
                 3. List points of agreement and points of disagreement as bullets.\n\n\
                 Format the output as markdown with headers.",
                topic, discussion
            )
        };

        if let Language::Other(name) = language {
            prompt.push_str(&format!("\nRespond in {}.", name));
        }

        prompt
    }

    /// Prompt for the one-shot action-item extraction.
    pub fn action_items_prompt(utterances: &[Utterance], language: &Language) -> String {
        let discussion = Self::format_history(utterances);

        let mut prompt = if language.is_japanese() {
            format!(
                "以下の議論を分析し、各参加者（役割）に対するアクションアイテムをまとめてください。\n\n\
                 ## 議論内容:\n{}\n\
                 ## 指示:\n\
                 1. 各役割が取るべき具体的なアクションを特定してください。\n\
                 2. アクションには優先順位（高・中・低）をつけてください。\n\
                 3. 各アクションの期限や完了条件を明確にしてください。\n\
                 4. 役割ごとに最大5つのアクションアイテムを提案してください。\n\
                 5. 最後に全体の次のステップを3つ提案してください。\n\n\
                 ## 出力形式:\n\
                 # アクションアイテム一覧\n\n\
                 ## [役割名]\n\
                 1. **アクション**: 説明 (優先度: 高/中/低)\n\
                 ...\n\n\
                 ## 次のステップ\n\
                 1. ...",
                discussion
            )
        } else {
            format!(
                "Analyze the following discussion and summarize action items for each participant (role).\n\n\
                 ## Discussion:\n{}\n\
                 ## Instructions:\n\
                 1. Identify specific actions that each role should take.\n\
                 2. Assign priority (High, Medium, Low) to each action.\n\
                 3. Clearly define deadlines or completion criteria for each action.\n\
                 4. Suggest a maximum of 5 action items per role.\n\
                 5. Finally, propose 3 next steps for the entire team.\n\n\
                 ## Output Format:\n\
                 # Action Items List\n\n\
                 ## [Role Name]\n\
                 1. **Action**: Description (Priority: High/Medium/Low)\n\
                 ...\n\n\
                 ## Next Steps\n\
                 1. ...",
                discussion
            )
        };

        if let Language::Other(name) = language {
            prompt.push_str(&format!("\nRespond in {}.", name));
        }

        prompt
    }

    /// Prompt for the one-shot document content analysis. Long documents
    /// are sampled head / middle / tail to stay inside a sane budget.
    pub fn document_analysis_prompt(text: &str, language: &Language) -> String {
        let sampled = Self::sample_for_analysis(text);

        if language.is_japanese() {
            format!(
                "以下の文書を分析し、その内容と構造を詳細に解析してください。\n\
                 分析結果は以下の形式で提供してください：\n\n\
                 1. 要約（3-5文で文書全体の内容を簡潔に要約）\n\
                 2. 主要トピック（3-7個の主要なトピックを箇条書き）\n\
                 3. 重要ポイント（5-10個の重要な事実や主張を箇条書き）\n\
                 4. 重要データ（重要な数値・統計を箇条書き。ない場合は「なし」）\n\
                 5. 文書分析（文書の目的、対象読者、全体的な特徴について2-3段落）\n\n\
                 必ず文書の内容に厳密に基づいた分析を行い、文書に存在しない情報や推測を含めないでください。\n\n\
                 [分析する文書]\n{}",
                sampled
            )
        } else {
            format!(
                "Analyze the following document in detail.\n\
                 Provide the analysis in exactly this format:\n\n\
                 1. Summary (3-5 sentences covering the whole document)\n\
                 2. Main Topics (3-7 topics as bullets)\n\
                 3. Key Points (5-10 important facts or claims as bullets)\n\
                 4. Key Data (important numbers and statistics as bullets; \"None\" if absent)\n\
                 5. Document Analysis (2-3 paragraphs on purpose, audience, and character)\n\n\
                 Base the analysis strictly on the document content; do not add information\n\
                 that is not present in it.\n\n\
                 [Document to analyze]\n{}",
                sampled
            )
        }
    }

    /// Format a transcript as `role: content` lines, one per utterance.
    /// Pseudo-roles are included — a system directive is context the
    /// speakers must see.
    pub fn format_history(utterances: &[Utterance]) -> String {
        let mut out = String::new();
        for utterance in utterances {
            out.push_str(&format!("{}: {}\n", utterance.role, utterance.content));
        }
        out
    }

    /// The grounding block for a speaker prompt: prefer the analysis
    /// (compact, already distilled), fall back to a truncated excerpt.
    fn document_block(doc: &DocumentContext, language: &Language) -> String {
        let header = if language.is_japanese() {
            "参考文書:"
        } else {
            "Reference document:"
        };

        match &doc.analysis {
            Some(analysis) => {
                let mut block = format!("{}\n{}\n", header, analysis.summary);
                if !analysis.key_points.is_empty() {
                    for point in &analysis.key_points {
                        block.push_str(&format!("- {}\n", point));
                    }
                }
                if !analysis.key_data.is_empty() {
                    for data in &analysis.key_data {
                        block.push_str(&format!("- {}\n", data));
                    }
                }
                block
            }
            None => format!(
                "{}\n{}\n",
                header,
                truncate_str(&doc.text, DOCUMENT_EXCERPT_BUDGET)
            ),
        }
    }

    /// Head / middle / tail sampling for long documents.
    fn sample_for_analysis(text: &str) -> String {
        if text.len() <= ANALYSIS_SAMPLE_THRESHOLD {
            return text.to_string();
        }
        let head = truncate_str(text, ANALYSIS_SAMPLE_PART);
        let middle_start = {
            let mut start = text.len() / 2 - ANALYSIS_SAMPLE_PART / 2;
            while start > 0 && !text.is_char_boundary(start) {
                start -= 1;
            }
            start
        };
        let middle = truncate_str(&text[middle_start..], ANALYSIS_SAMPLE_PART);
        let tail_start = {
            let mut start = text.len() - ANALYSIS_SAMPLE_PART;
            while start < text.len() && !text.is_char_boundary(start) {
                start += 1;
            }
            start
        };
        let tail = &text[tail_start..];
        format!("{}\n...\n{}\n...\n{}", head, middle, tail)
    }
}
