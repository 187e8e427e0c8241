//! Advance Discussion use case — the turn sequencer.
//!
//! Advances a discussion by exactly one utterance per invocation and
//! reports whether the run is complete. All discussion state (transcript
//! + cursor) is supplied by the caller and returned advanced; aside from
//! the document lookup, the use case is a pure function of its input, so
//! a failed step leaves nothing to undo and the same step can simply be
//! resubmitted.
//!
//! Steps must be issued sequentially: each step's prompt depends on every
//! previously produced utterance, so concurrent steps within one
//! discussion would respond to the same partial context and race on
//! ordering.

use crate::ports::document_store::DocumentStore;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use roundtable_domain::{
    Cursor, DomainError, GenerationParams, Language, PromptTemplate, RoleRoster, Topic,
    TurnWindow, Utterance,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while advancing a discussion
#[derive(Error, Debug)]
pub enum StepError {
    /// Input contract violation — no gateway call was made
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    /// Grounding was requested but the session has no stored document.
    /// Grounded and ungrounded generation are different contracts; this
    /// is a hard error, never a silent fallback.
    #[error("Grounding requested but no document is stored for this session")]
    DocumentUnavailable,

    /// Classified gateway failure, propagated unmodified
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for one step of a discussion
///
/// The caller holds the authoritative transcript and cursor and sends
/// both on every step.
#[derive(Debug, Clone)]
pub struct StepInput {
    pub topic: Topic,
    pub roster: RoleRoster,
    pub window: TurnWindow,
    /// Full prior utterance sequence, including any injected directives
    pub prior: Vec<Utterance>,
    /// Position of the utterance this step will produce
    pub cursor: Cursor,
    pub language: Language,
    pub use_document: bool,
    pub session: String,
    pub params: GenerationParams,
}

/// Result of one step
#[derive(Debug, Clone)]
pub struct StepOutput {
    /// The produced utterance
    pub utterance: Utterance,
    /// Cursor for the next step; `None` once the run is complete
    pub next_cursor: Option<Cursor>,
    pub is_complete: bool,
}

/// Use case for advancing a discussion by one utterance
pub struct AdvanceDiscussionUseCase {
    gateway: Arc<dyn LlmGateway>,
    documents: Arc<dyn DocumentStore>,
}

impl AdvanceDiscussionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, documents: Arc<dyn DocumentStore>) -> Self {
        Self { gateway, documents }
    }

    /// Produce the next utterance for the given discussion state.
    ///
    /// Validation and the grounding lookup both happen before the gateway
    /// call; on any error the input cursor remains the correct cursor to
    /// resubmit.
    pub async fn execute(&self, input: &StepInput) -> Result<StepOutput, StepError> {
        input.params.validate()?;
        input.window.validate()?;
        input
            .cursor
            .validate(input.roster.len(), input.window.turns())?;

        let speaker = input
            .roster
            .get(input.cursor.role_index)
            .ok_or(DomainError::InvalidCursor {
                turn: input.cursor.turn,
                role_index: input.cursor.role_index,
                role_count: input.roster.len(),
                total_turns: input.window.turns(),
            })?;

        let document = if input.use_document {
            match self.documents.get(&input.session) {
                Some(doc) => Some(doc),
                None => return Err(StepError::DocumentUnavailable),
            }
        } else {
            None
        };

        debug!(
            "Step {}/{}: {} speaking ({} prior utterances, grounded: {})",
            input.cursor.turn,
            input.cursor.role_index,
            speaker.name,
            input.prior.len(),
            document.is_some()
        );

        let prompt = PromptTemplate::speaker_prompt(
            &input.topic,
            &input.roster,
            &input.prior,
            speaker,
            &input.language,
            document.as_ref(),
        );

        let text = self.gateway.generate(&prompt, &input.params).await?;

        let utterance = Utterance::spoken(speaker.name.clone(), text);

        let next = input.cursor.advanced(input.roster.len());
        let is_complete = next.turn >= input.window.turns();

        if is_complete {
            info!(
                "Discussion window complete after turn {} ({} roles)",
                input.cursor.turn,
                input.roster.len()
            );
        }

        Ok(StepOutput {
            utterance,
            next_cursor: if is_complete { None } else { Some(next) },
            is_complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use roundtable_domain::{DocumentContext, Model, Role};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    /// Gateway that answers every prompt with a fixed string and counts
    /// how many calls it received.
    struct FixedGateway {
        response: String,
        calls: AtomicUsize,
    }

    impl FixedGateway {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmGateway for FixedGateway {
        async fn generate(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    /// Gateway that always fails with the given error.
    struct FailingGateway {
        error: GatewayError,
    }

    #[async_trait]
    impl LlmGateway for FailingGateway {
        async fn generate(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GatewayError> {
            Err(self.error.clone())
        }
    }

    struct FixedDocumentStore {
        document: Mutex<Option<DocumentContext>>,
    }

    impl FixedDocumentStore {
        fn empty() -> Self {
            Self {
                document: Mutex::new(None),
            }
        }

        fn with_document(doc: DocumentContext) -> Self {
            Self {
                document: Mutex::new(Some(doc)),
            }
        }
    }

    impl DocumentStore for FixedDocumentStore {
        fn get(&self, _session: &str) -> Option<DocumentContext> {
            self.document.lock().unwrap().clone()
        }

        fn set(&self, _session: &str, document: DocumentContext) {
            *self.document.lock().unwrap() = Some(document);
        }

        fn clear(&self, _session: &str) {
            *self.document.lock().unwrap() = None;
        }
    }

    fn roster(names: &[&str]) -> RoleRoster {
        RoleRoster::new(names.iter().map(|n| Role::new(*n)).collect()).unwrap()
    }

    fn step_input(roster: RoleRoster, window: TurnWindow) -> StepInput {
        StepInput {
            topic: Topic::new("Test topic").unwrap(),
            roster,
            window,
            prior: Vec::new(),
            cursor: Cursor::start(),
            language: Language::English,
            use_document: false,
            session: "test-session".to_string(),
            params: GenerationParams::default().with_model(Model::Gemini20FlashLite),
        }
    }

    fn use_case(gateway: impl LlmGateway + 'static) -> AdvanceDiscussionUseCase {
        AdvanceDiscussionUseCase::new(Arc::new(gateway), Arc::new(FixedDocumentStore::empty()))
    }

    /// Drive a full window, collecting the produced roles and cursors.
    async fn drive(
        use_case: &AdvanceDiscussionUseCase,
        mut input: StepInput,
    ) -> (Vec<String>, Vec<Cursor>, usize) {
        let mut roles = Vec::new();
        let mut cursors = vec![input.cursor];
        let mut steps = 0;
        loop {
            let output = use_case.execute(&input).await.unwrap();
            steps += 1;
            roles.push(output.utterance.role.clone());
            input.prior.push(output.utterance);
            if output.is_complete {
                assert!(output.next_cursor.is_none());
                break;
            }
            let next = output.next_cursor.unwrap();
            cursors.push(next);
            input.cursor = next;
        }
        (roles, cursors, steps)
    }

    // ==================== Ordering (P1, Scenario A) ====================

    #[tokio::test]
    async fn test_fresh_run_cycles_roles_in_roster_order() {
        let use_case = use_case(FixedGateway::new("reply"));
        let input = step_input(roster(&["Analyst", "Engineer"]), TurnWindow::fresh(2));

        let (roles, cursors, steps) = drive(&use_case, input).await;

        assert_eq!(roles, vec!["Analyst", "Engineer", "Analyst", "Engineer"]);
        assert_eq!(steps, 4);
        assert_eq!(
            cursors,
            vec![
                Cursor::new(0, 0),
                Cursor::new(0, 1),
                Cursor::new(1, 0),
                Cursor::new(1, 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_completion_exactly_on_last_step() {
        let gateway = Arc::new(FixedGateway::new("reply"));
        let use_case = AdvanceDiscussionUseCase::new(
            gateway.clone(),
            Arc::new(FixedDocumentStore::empty()),
        );
        let mut input = step_input(roster(&["A", "B", "C"]), TurnWindow::fresh(2));

        // 3 roles x 2 turns = 6 steps; is_complete only on the 6th
        for step in 1..=6 {
            let output = use_case.execute(&input).await.unwrap();
            assert_eq!(output.is_complete, step == 6, "step {}", step);
            input.prior.push(output.utterance);
            if let Some(next) = output.next_cursor {
                input.cursor = next;
            }
        }
        assert_eq!(gateway.call_count(), 6);
    }

    // ==================== Statelessness (P2) ====================

    #[tokio::test]
    async fn test_identical_input_gives_identical_advancement() {
        let use_case = use_case(FixedGateway::new("fixed"));
        let mut input = step_input(roster(&["A", "B"]), TurnWindow::fresh(1));
        input.prior.push(Utterance::spoken("A", "earlier"));
        input.cursor = Cursor::new(0, 1);

        let first = use_case.execute(&input).await.unwrap();
        let second = use_case.execute(&input).await.unwrap();

        assert_eq!(first.utterance, second.utterance);
        assert_eq!(first.next_cursor, second.next_cursor);
        assert_eq!(first.is_complete, second.is_complete);
    }

    // ==================== Error non-corruption (P3) ====================

    #[tokio::test]
    async fn test_gateway_failure_produces_no_utterance() {
        let use_case = use_case(FailingGateway {
            error: GatewayError::Transient("503".to_string()),
        });
        let input = step_input(roster(&["A", "B"]), TurnWindow::fresh(1));
        let cursor_before = input.cursor;

        let result = use_case.execute(&input).await;
        assert!(matches!(
            result,
            Err(StepError::Gateway(GatewayError::Transient(_)))
        ));
        // Input is untouched; the same cursor is the correct one to resubmit
        assert_eq!(input.cursor, cursor_before);
        assert!(input.prior.is_empty());
    }

    #[tokio::test]
    async fn test_quota_classification_preserved() {
        let use_case = use_case(FailingGateway {
            error: GatewayError::QuotaExceeded("retry in 7s".to_string()),
        });
        let input = step_input(roster(&["A", "B"]), TurnWindow::fresh(1));

        match use_case.execute(&input).await {
            Err(StepError::Gateway(GatewayError::QuotaExceeded(msg))) => {
                assert_eq!(msg, "retry in 7s");
            }
            other => panic!("Expected QuotaExceeded, got {:?}", other.map(|_| ())),
        }
    }

    // ==================== Grounding precondition (P4) ====================

    #[tokio::test]
    async fn test_grounding_without_document_fails_before_gateway() {
        let gateway = Arc::new(FixedGateway::new("reply"));
        let use_case = AdvanceDiscussionUseCase::new(
            gateway.clone(),
            Arc::new(FixedDocumentStore::empty()),
        );
        let mut input = step_input(roster(&["A", "B"]), TurnWindow::fresh(1));
        input.use_document = true;

        let result = use_case.execute(&input).await;
        assert!(matches!(result, Err(StepError::DocumentUnavailable)));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_grounded_step_succeeds_with_document() {
        let use_case = AdvanceDiscussionUseCase::new(
            Arc::new(FixedGateway::new("grounded reply")),
            Arc::new(FixedDocumentStore::with_document(DocumentContext::new(
                "reference text",
            ))),
        );
        let mut input = step_input(roster(&["A", "B"]), TurnWindow::fresh(1));
        input.use_document = true;

        let output = use_case.execute(&input).await.unwrap();
        assert_eq!(output.utterance.content, "grounded reply");
    }

    #[tokio::test]
    async fn test_document_cleared_between_steps_surfaces_as_unavailable() {
        let store = Arc::new(FixedDocumentStore::with_document(DocumentContext::new(
            "reference text",
        )));
        let use_case = AdvanceDiscussionUseCase::new(
            Arc::new(FixedGateway::new("reply")),
            store.clone(),
        );
        let mut input = step_input(roster(&["A", "B"]), TurnWindow::fresh(1));
        input.use_document = true;

        let output = use_case.execute(&input).await.unwrap();
        input.prior.push(output.utterance);
        input.cursor = output.next_cursor.unwrap();

        // Document vanishes mid-discussion — not an invariant violation,
        // just DocumentUnavailable on the next grounded step
        store.clear("test-session");
        let result = use_case.execute(&input).await;
        assert!(matches!(result, Err(StepError::DocumentUnavailable)));
    }

    // ==================== Input validation (Scenarios B, C) ====================

    #[test]
    fn test_single_role_roster_rejected_before_any_call() {
        // A one-role roster cannot even be constructed; the error maps to
        // the InvalidInput classification
        let err = RoleRoster::new(vec![Role::new("Solo")]).unwrap_err();
        let step_err = StepError::from(err);
        assert!(matches!(step_err, StepError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_eleven_turns_rejected() {
        let gateway = Arc::new(FixedGateway::new("reply"));
        let use_case = AdvanceDiscussionUseCase::new(
            gateway.clone(),
            Arc::new(FixedDocumentStore::empty()),
        );
        let input = step_input(roster(&["A", "B"]), TurnWindow::fresh(11));

        let result = use_case.execute(&input).await;
        assert!(matches!(
            result,
            Err(StepError::InvalidInput(DomainError::InvalidTurnCount {
                got: 11,
                ..
            }))
        ));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_continuation_turns_bound_is_five() {
        let use_case = use_case(FixedGateway::new("reply"));
        let input = step_input(roster(&["A", "B"]), TurnWindow::continuation(6));

        let result = use_case.execute(&input).await;
        assert!(matches!(result, Err(StepError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_out_of_range_cursor_rejected() {
        let use_case = use_case(FixedGateway::new("reply"));
        let mut input = step_input(roster(&["A", "B"]), TurnWindow::fresh(2));
        input.cursor = Cursor::new(0, 2);

        let result = use_case.execute(&input).await;
        assert!(matches!(
            result,
            Err(StepError::InvalidInput(DomainError::InvalidCursor { .. }))
        ));
    }

    #[tokio::test]
    async fn test_invalid_temperature_rejected() {
        let use_case = use_case(FixedGateway::new("reply"));
        let mut input = step_input(roster(&["A", "B"]), TurnWindow::fresh(1));
        input.params = input.params.with_temperature(2.0);

        let result = use_case.execute(&input).await;
        assert!(matches!(
            result,
            Err(StepError::InvalidInput(DomainError::InvalidTemperature(_)))
        ));
    }

    // ==================== Continuation (Scenario D) ====================

    #[tokio::test]
    async fn test_continuation_produces_exactly_additional_window() {
        let use_case = use_case(FixedGateway::new("more"));
        let mut input = step_input(roster(&["A", "B", "C"]), TurnWindow::continuation(2));
        // Continuation carries prior history; cursor starts fresh at {0,0}
        // for the additional-turns window, independent of transcript length
        input.prior = vec![
            Utterance::spoken("A", "old 1"),
            Utterance::spoken("B", "old 2"),
            Utterance::spoken("C", "old 3"),
        ];

        let (roles, _, steps) = drive(&use_case, input).await;
        assert_eq!(steps, 6);
        assert_eq!(roles, vec!["A", "B", "C", "A", "B", "C"]);
    }
}
