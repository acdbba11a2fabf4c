//! Submission flow state machine.
//!
//! Models the lifecycle of one lead-capture form instance:
//!
//! ```text
//! Idle --valid submit--> Submitting --write ok-----> Success --timer--> Idle
//!                                   \--write failed-> Error   --timer--> Idle
//! ```
//!
//! Invalid input never leaves `Idle`; it is reported as per-field errors and
//! the typed values stay in place. While a write is in flight further submit
//! attempts are ignored, so at most one write is ever outstanding per flow.
//! The timed return to `Idle` is a single-shot task that a new submission
//! cancels rather than races.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use validator::ValidationErrors;

use crate::application::services::LeadService;
use crate::domain::{Lead, LeadDraft};

/// How long `Success`/`Error` feedback stays visible before the flow returns
/// to `Idle`.
pub const DEFAULT_RESET_WINDOW: Duration = Duration::from_secs(3);

/// Submission status, used purely for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input failed validation; nothing was sent and the status is unchanged.
    Rejected(ValidationErrors),
    /// A write was already in flight; the attempt was dropped.
    Ignored,
    /// The store accepted the record.
    Accepted,
    /// The store write failed; the typed values are retained for a manual retry.
    Failed,
}

struct FlowState {
    status: SubmissionStatus,
    input: LeadDraft,
    reset_task: Option<JoinHandle<()>>,
}

impl FlowState {
    /// Timer-driven transition back to `Idle`. Idempotent: firing again once
    /// the flow is already `Idle` (or mid-submission) changes nothing.
    fn settle(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// One lead-capture form instance: its visible input fields and status.
///
/// Cloning is shallow; clones share the same state, like handles to one form.
#[derive(Clone)]
pub struct SubmissionFlow {
    service: Arc<LeadService>,
    reset_window: Duration,
    state: Arc<Mutex<FlowState>>,
}

impl SubmissionFlow {
    /// Creates a flow with the standard 3 second feedback window.
    pub fn new(service: Arc<LeadService>) -> Self {
        Self::with_reset_window(service, DEFAULT_RESET_WINDOW)
    }

    /// Creates a flow with a custom feedback window.
    pub fn with_reset_window(service: Arc<LeadService>, reset_window: Duration) -> Self {
        Self {
            service,
            reset_window,
            state: Arc::new(Mutex::new(FlowState {
                status: SubmissionStatus::Idle,
                input: LeadDraft::default(),
                reset_task: None,
            })),
        }
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.state.lock().await.status
    }

    /// The form's current visible field values.
    pub async fn input(&self) -> LeadDraft {
        self.state.lock().await.input.clone()
    }

    /// Attempts one submission.
    ///
    /// Validates the draft, and on success performs exactly one store write,
    /// transitioning `Submitting -> Success` (input cleared) or
    /// `Submitting -> Error` (input retained). Either terminal state schedules
    /// the timed return to `Idle`.
    pub async fn submit(&self, draft: LeadDraft) -> SubmitOutcome {
        let lead = {
            let mut state = self.state.lock().await;
            if state.status == SubmissionStatus::Submitting {
                return SubmitOutcome::Ignored;
            }

            state.input = draft.clone();
            let lead = match Lead::try_from(draft) {
                Ok(lead) => lead,
                Err(errors) => return SubmitOutcome::Rejected(errors),
            };

            // A submission started inside the feedback window supersedes the
            // pending reset instead of racing it.
            if let Some(pending) = state.reset_task.take() {
                pending.abort();
            }
            state.status = SubmissionStatus::Submitting;
            lead
        };

        // The write is awaited without holding the lock so status() keeps
        // answering (and reports Submitting) while the store call runs.
        let result = self.service.submit(lead).await;

        let mut state = self.state.lock().await;
        let outcome = match result {
            Ok(()) => {
                state.status = SubmissionStatus::Success;
                state.input = LeadDraft::default();
                SubmitOutcome::Accepted
            }
            Err(_) => {
                state.status = SubmissionStatus::Error;
                SubmitOutcome::Failed
            }
        };
        state.reset_task = Some(self.spawn_reset());
        outcome
    }

    /// Returns the flow to `Idle` if it is showing feedback. Idempotent.
    pub async fn reset_to_idle(&self) {
        self.state.lock().await.settle();
    }

    fn spawn_reset(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let window = self.reset_window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            state.lock().await.settle();
        })
    }
}
