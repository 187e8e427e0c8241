//! CLI entrypoint for roundtable
//!
//! This is the main binary that wires together all layers using
//! dependency injection, then plays the "client" of the turn sequencer:
//! it holds the authoritative transcript and cursor and issues one
//! sequential step at a time through the run driver.

use anyhow::{Context, Result, bail};
use clap::Parser;
use roundtable_application::{
    AdvanceDiscussionUseCase, AnalyzeDocumentInput, AnalyzeDocumentUseCase,
    ContinueDiscussionInput, DiscussionLogger, DiscussionProgressNotifier, DocumentStore,
    ExtractActionItemsInput, ExtractActionItemsUseCase, GatewayError, GenerationDefaults,
    NoProgress, RunDiscussionInput, RunDiscussionUseCase, StepError, SummarizeDiscussionUseCase,
    SummarizeInput,
};
use roundtable_domain::{
    DiscussionOutcome, DocumentContext, Language, Role, RoleRoster, Topic, Utterance,
};
use roundtable_infrastructure::{
    ConfigLoader, GeminiGateway, InMemoryDocumentStore, JsonlDiscussionLogger, analyze_structure,
    extract_metadata, extract_text,
};
use roundtable_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting roundtable");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let mut defaults = config.generation_defaults();
    if let Some(model) = &cli.model {
        defaults.discussion = defaults.discussion.with_model(model.parse().unwrap());
    }
    if let Some(temperature) = cli.temperature {
        defaults.discussion = defaults.discussion.with_temperature(temperature);
    }
    if let Some(max_tokens) = cli.max_output_tokens {
        defaults.discussion = defaults.discussion.with_max_output_tokens(max_tokens);
        defaults.analysis = defaults.analysis.with_max_output_tokens(max_tokens);
    }

    let language: Language = match &cli.language {
        Some(lang) => lang.parse().unwrap(),
        None => config.language(),
    };

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::from_env().map_err(|e| anyhow::anyhow!("{}", e))?);
    let documents = Arc::new(InMemoryDocumentStore::new());

    // Upload the reference document, if any
    let use_document = cli.document.is_some();
    if let Some(path) = &cli.document {
        let document = ingest_document(path, &language, &defaults, gateway.clone()).await?;
        documents.set(&cli.session, document);
    }

    let mut driver = RunDiscussionUseCase::new(AdvanceDiscussionUseCase::new(
        gateway.clone(),
        documents.clone(),
    ))
    .with_step_timeout(defaults.step_timeout);

    if let Some(log_path) = &cli.log_file {
        if let Some(logger) = JsonlDiscussionLogger::new(log_path) {
            info!("Writing discussion log to {}", logger.path().display());
            driver = driver.with_logger(Arc::new(logger) as Arc<dyn DiscussionLogger>);
        }
    }

    let progress_reporter = ProgressReporter::new();
    let progress: &dyn DiscussionProgressNotifier = if cli.quiet {
        &NoProgress
    } else {
        &progress_reporter
    };

    // Run fresh or continue a saved transcript
    let (topic, roster_names, transcript) = if let Some(transcript_path) = &cli.transcript {
        let additional_turns = match cli.continue_turns {
            Some(n) => n,
            None => bail!("--continue-turns is required with --transcript"),
        };

        let saved: DiscussionOutcome = serde_json::from_str(
            &std::fs::read_to_string(transcript_path)
                .with_context(|| format!("reading {}", transcript_path.display()))?,
        )
        .with_context(|| format!("parsing {}", transcript_path.display()))?;

        let topic = Topic::new(cli.topic.clone().unwrap_or(saved.topic))?;
        let roster = parse_roster(&cli.role)?;

        let input = ContinueDiscussionInput {
            topic: topic.clone(),
            roster,
            prior: saved.utterances,
            additional_turns,
            guidance: cli.guidance.clone(),
            language: language.clone(),
            use_document,
            session: cli.session.clone(),
            params: defaults.discussion.clone(),
        };

        let transcript = driver
            .execute_continuation(input, progress)
            .await
            .map_err(step_error_to_anyhow)?;

        let roster_names = distinct_roles(&transcript);
        (topic, roster_names, transcript)
    } else {
        let topic = match &cli.topic {
            Some(t) => Topic::new(t.clone())?,
            None => bail!("A topic is required (or --transcript to continue one)"),
        };
        let roster = match parse_roster(&cli.role)? {
            Some(roster) => roster,
            None => bail!("At least two --role arguments are required"),
        };

        let roster_names: Vec<String> =
            roster.roles().iter().map(|r| r.name.clone()).collect();

        let total_turns = cli.turns.or(config.discussion.turns).unwrap_or(3);

        let input = RunDiscussionInput {
            topic: topic.clone(),
            roster,
            total_turns,
            language: language.clone(),
            use_document,
            session: cli.session.clone(),
            params: defaults.discussion.clone(),
        };

        let transcript = driver
            .execute_with_progress(input, progress)
            .await
            .map_err(step_error_to_anyhow)?;

        (topic, roster_names, transcript)
    };

    let mut outcome = DiscussionOutcome::new(topic.content(), roster_names, transcript);

    // Derived artifacts — both are functions of the completed transcript,
    // so they may run concurrently
    if cli.summary || cli.action_items {
        let summarizer = SummarizeDiscussionUseCase::new(gateway.clone());
        let extractor = ExtractActionItemsUseCase::new(gateway.clone());

        let summary_fut = async {
            if cli.summary {
                Some(
                    summarizer
                        .execute(SummarizeInput {
                            topic: topic.clone(),
                            utterances: outcome.utterances.clone(),
                            language: language.clone(),
                            params: defaults.analysis.clone(),
                        })
                        .await,
                )
            } else {
                None
            }
        };
        let action_items_fut = async {
            if cli.action_items {
                Some(
                    extractor
                        .execute(ExtractActionItemsInput {
                            utterances: outcome.utterances.clone(),
                            language: language.clone(),
                            params: defaults.analysis.clone(),
                        })
                        .await,
                )
            } else {
                None
            }
        };

        let (summary, action_items) = tokio::join!(summary_fut, action_items_fut);

        if let Some(result) = summary {
            outcome.summary = Some(result.context("generating summary")?);
        }
        if let Some(result) = action_items {
            outcome.action_items = Some(result.context("extracting action items")?);
        }
    }

    if let Some(save_path) = &cli.save {
        std::fs::write(save_path, ConsoleFormatter::format_json(&outcome))
            .with_context(|| format!("saving transcript to {}", save_path.display()))?;
        info!("Saved transcript to {}", save_path.display());
    }

    let rendered = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&outcome),
        OutputFormat::Transcript => ConsoleFormatter::format_transcript(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
        OutputFormat::Markdown => ConsoleFormatter::format_markdown(&outcome),
    };

    println!("{}", rendered);

    Ok(())
}

/// Parse repeated `--role` arguments into a roster; `None` when no roles
/// were given (continuation re-derives them from the transcript).
fn parse_roster(specs: &[String]) -> Result<Option<RoleRoster>> {
    if specs.is_empty() {
        return Ok(None);
    }
    let roles = specs
        .iter()
        .map(|s| Role::parse_spec(s))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(RoleRoster::new(roles)?))
}

/// Distinct non-pseudo roles of a transcript, in first-seen order.
fn distinct_roles(transcript: &[Utterance]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for utterance in transcript {
        if !utterance.is_pseudo_role() && !names.contains(&utterance.role) {
            names.push(utterance.role.clone());
        }
    }
    names
}

/// Extract, scan, and analyze an uploaded reference document.
async fn ingest_document(
    path: &std::path::Path,
    language: &Language,
    defaults: &GenerationDefaults,
    gateway: Arc<GeminiGateway>,
) -> Result<DocumentContext> {
    let text = extract_text(path).with_context(|| format!("extracting {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    info!("Extracted {} bytes from {}", text.len(), filename);

    let structure = analyze_structure(&text);
    let metadata = extract_metadata(&text, &filename);

    let mut document = DocumentContext::new(text.clone())
        .with_filename(filename)
        .with_structure(structure)
        .with_metadata(metadata);

    // Content analysis costs a model call; a failure degrades to grounding
    // on the raw text instead of blocking the discussion
    let analyzer = AnalyzeDocumentUseCase::new(gateway);
    match analyzer
        .execute(AnalyzeDocumentInput {
            text,
            language: language.clone(),
            params: defaults.analysis.clone(),
        })
        .await
    {
        Ok(analysis) => {
            document = document.with_analysis(analysis);
        }
        Err(e) => {
            warn!("Document analysis failed, grounding on raw text: {}", e);
        }
    }

    Ok(document)
}

/// Surface step errors with their classification intact — recovery
/// differs per class, so the class must reach the user.
fn step_error_to_anyhow(error: StepError) -> anyhow::Error {
    match &error {
        StepError::InvalidInput(e) => anyhow::anyhow!("Invalid input: {}", e),
        StepError::DocumentUnavailable => anyhow::anyhow!(
            "{} (upload a document or drop the grounding flag)",
            error
        ),
        StepError::Gateway(gateway_error) => {
            let hint = match gateway_error {
                GatewayError::Auth(_) => "check GEMINI_API_KEY",
                GatewayError::QuotaExceeded(_) => "wait for the quota window to reset",
                GatewayError::Transient(_) | GatewayError::Timeout => {
                    "transient; rerun to resume from the saved transcript"
                }
                GatewayError::InvalidResponse(_) | GatewayError::Other(_) => {
                    "unexpected backend response"
                }
            };
            anyhow::anyhow!("{} ({})", error, hint)
        }
    }
}
