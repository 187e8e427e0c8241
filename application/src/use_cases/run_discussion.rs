//! Run Discussion use case — the sequential driver.
//!
//! Drives the turn sequencer to completion for callers that want a whole
//! run: fresh generation, plain continuation, and guided continuation.
//! One step at a time, strictly sequential — each step's prompt depends
//! on every previously produced utterance, so there is nothing to
//! parallelize inside a single discussion.
//!
//! The driver owns the caller-side policies the sequencer refuses to:
//! the per-step timeout and the decision to stop. A mid-run failure
//! surfaces the classified error; utterances produced before the failure
//! were already reported through progress callbacks and remain valid, so
//! the caller can resume with a continuation.

use crate::config::generation_defaults::DEFAULT_STEP_TIMEOUT;
use crate::ports::discussion_logger::{DiscussionEvent, DiscussionLogger, NoDiscussionLogger};
use crate::ports::llm_gateway::GatewayError;
use crate::ports::progress::{DiscussionProgressNotifier, NoProgress};
use crate::use_cases::advance_discussion::{AdvanceDiscussionUseCase, StepError, StepInput};
use roundtable_domain::{
    Cursor, GenerationParams, GuidanceDirective, Language, RoleRoster, Topic, TurnWindow,
    Utterance,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Input for a fresh discussion run
#[derive(Debug, Clone)]
pub struct RunDiscussionInput {
    pub topic: Topic,
    pub roster: RoleRoster,
    /// Total turns, 1..=10
    pub total_turns: u32,
    pub language: Language,
    pub use_document: bool,
    pub session: String,
    pub params: GenerationParams,
}

/// Input for continuing an existing discussion
#[derive(Debug, Clone)]
pub struct ContinueDiscussionInput {
    pub topic: Topic,
    /// Roster for the continuation; when `None` it is re-derived from the
    /// transcript's distinct speaker roles in first-seen order
    pub roster: Option<RoleRoster>,
    /// The transcript so far
    pub prior: Vec<Utterance>,
    /// Additional turns, 1..=5
    pub additional_turns: u32,
    /// Optional steering instruction, injected once as a system utterance
    pub guidance: Option<String>,
    pub language: Language,
    pub use_document: bool,
    pub session: String,
    pub params: GenerationParams,
}

impl ContinueDiscussionInput {
    pub fn from_directive(
        topic: Topic,
        prior: Vec<Utterance>,
        directive: GuidanceDirective,
        language: Language,
        session: impl Into<String>,
        params: GenerationParams,
    ) -> Self {
        Self {
            topic,
            roster: None,
            prior,
            additional_turns: directive.additional_turns,
            guidance: Some(directive.instruction),
            language,
            use_document: false,
            session: session.into(),
            params,
        }
    }
}

/// Use case for driving a discussion run step by step
pub struct RunDiscussionUseCase {
    sequencer: AdvanceDiscussionUseCase,
    logger: Arc<dyn DiscussionLogger>,
    step_timeout: Duration,
}

impl RunDiscussionUseCase {
    pub fn new(sequencer: AdvanceDiscussionUseCase) -> Self {
        Self {
            sequencer,
            logger: Arc::new(NoDiscussionLogger),
            step_timeout: DEFAULT_STEP_TIMEOUT,
        }
    }

    /// Attach a structured discussion logger.
    pub fn with_logger(mut self, logger: Arc<dyn DiscussionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Override the per-step gateway timeout.
    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = timeout;
        self
    }

    /// Run a fresh discussion to completion. Returns the full transcript.
    pub async fn execute(&self, input: RunDiscussionInput) -> Result<Vec<Utterance>, StepError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Run a fresh discussion to completion with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: RunDiscussionInput,
        progress: &dyn DiscussionProgressNotifier,
    ) -> Result<Vec<Utterance>, StepError> {
        info!(
            "Starting discussion: {} roles, {} turns",
            input.roster.len(),
            input.total_turns
        );

        let step = StepInput {
            topic: input.topic,
            roster: input.roster,
            window: TurnWindow::fresh(input.total_turns),
            prior: Vec::new(),
            cursor: Cursor::start(),
            language: input.language,
            use_document: input.use_document,
            session: input.session,
            params: input.params,
        };

        self.drive(step, progress).await
    }

    /// Continue an existing discussion, optionally steered by a guidance
    /// instruction. Returns the full transcript (carried-in history, the
    /// injected directive if any, and the new utterances).
    pub async fn execute_continuation(
        &self,
        input: ContinueDiscussionInput,
        progress: &dyn DiscussionProgressNotifier,
    ) -> Result<Vec<Utterance>, StepError> {
        let roster = match input.roster {
            Some(roster) => roster,
            None => RoleRoster::from_transcript(&input.prior)?,
        };

        let mut prior = input.prior;
        if let Some(instruction) = input.guidance {
            info!("Injecting guidance directive before continuation");
            self.logger.log(DiscussionEvent::new(
                "guidance",
                serde_json::json!({ "instruction": instruction }),
            ));
            prior.push(Utterance::system(instruction));
        }

        info!(
            "Continuing discussion: {} roles, {} additional turns, {} prior utterances",
            roster.len(),
            input.additional_turns,
            prior.len()
        );

        // The continuation window counts its own turns from zero; the
        // carried-in transcript only contributes context.
        let step = StepInput {
            topic: input.topic,
            roster,
            window: TurnWindow::continuation(input.additional_turns),
            prior,
            cursor: Cursor::start(),
            language: input.language,
            use_document: input.use_document,
            session: input.session,
            params: input.params,
        };

        self.drive(step, progress).await
    }

    /// Issue steps sequentially until the window is complete.
    async fn drive(
        &self,
        mut input: StepInput,
        progress: &dyn DiscussionProgressNotifier,
    ) -> Result<Vec<Utterance>, StepError> {
        input.window.validate()?;

        let total_steps = input.roster.len() * input.window.turns() as usize;
        progress.on_run_start(total_steps);

        loop {
            let turn = input.cursor.turn;
            let output =
                match tokio::time::timeout(self.step_timeout, self.sequencer.execute(&input)).await
                {
                    Ok(result) => result.inspect_err(|e| {
                        warn!("Step {}/{} failed: {}", turn, input.cursor.role_index, e);
                        progress.on_step_complete("", turn, false);
                    })?,
                    Err(_) => {
                        warn!("Step {}/{} timed out", turn, input.cursor.role_index);
                        progress.on_step_complete("", turn, false);
                        return Err(StepError::Gateway(GatewayError::Timeout));
                    }
                };

            progress.on_step_complete(&output.utterance.role, turn, true);
            self.logger.log(DiscussionEvent::new(
                "utterance",
                serde_json::json!({
                    "role": output.utterance.role,
                    "turn": turn,
                    "content": output.utterance.content,
                }),
            ));

            input.prior.push(output.utterance);

            if output.is_complete {
                break;
            }
            match output.next_cursor {
                Some(next) => input.cursor = next,
                None => break,
            }
        }

        progress.on_run_complete();
        Ok(input.prior)
    }
}
