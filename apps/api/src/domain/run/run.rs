use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::events::RunEvent;
use super::value_objects::RunStatus;
use crate::domain::prompt::{PromptId, ResolvedPrompt};
use crate::errors::{PrompterError, PrompterResult};

/// Response state of one card
///
/// Owns the response buffer and drives the run state machine. The network
/// side lives elsewhere; this type only decides which fragments are applied.
///
/// # Invariants
/// - At most one active run per card
/// - The buffer is reset when a run starts and only grows while it runs
/// - Fragments tagged with a stale run id are discarded
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use seo_prompter_api::domain::prompt::{PromptId, ResolvedPrompt};
/// use seo_prompter_api::domain::run::{CardRun, RunStatus};
///
/// let mut card = CardRun::new(PromptId::new(1).unwrap());
/// let prompt = ResolvedPrompt::resolve("Say hello", &HashMap::new());
/// let run_id = card.start(&prompt).unwrap().1;
///
/// card.append(run_id, "Hel");
/// card.append(run_id, "lo");
/// card.complete(run_id);
///
/// assert_eq!(card.response(), "Hello");
/// assert_eq!(card.status(), RunStatus::Idle);
/// ```
#[derive(Debug, Clone)]
pub struct CardRun {
    prompt_id: PromptId,
    status: RunStatus,
    response: String,
    last_error: Option<String>,
    active_run: Option<Uuid>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

/// Serializable view of a card's run state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSnapshot {
    pub prompt_id: PromptId,
    pub status: RunStatus,
    pub response: String,
    pub error: Option<String>,
    pub run_id: Option<Uuid>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CardRun {
    /// Creates an idle card with an empty buffer
    pub fn new(prompt_id: PromptId) -> Self {
        Self::restore(prompt_id, String::new())
    }

    /// Rebuilds an idle card around a previously persisted response
    pub fn restore(prompt_id: PromptId, response: String) -> Self {
        Self {
            prompt_id,
            status: RunStatus::Idle,
            response,
            last_error: None,
            active_run: None,
            started_at: None,
            finished_at: None,
        }
    }

    /// Starts a run for the fully resolved prompt
    ///
    /// # Returns
    /// * `Ok((RunEvent, Uuid))` - Started event and the id of the new run
    /// * `Err(UnresolvedPlaceholders)` - Placeholders remain; nothing changes
    /// * `Err(AlreadyRunning)` - A run is active; nothing changes
    pub fn start(&mut self, prompt: &ResolvedPrompt) -> PrompterResult<(RunEvent, Uuid)> {
        if prompt.has_unresolved() {
            return Err(PrompterError::UnresolvedPlaceholders(
                prompt.unresolved().to_vec(),
            ));
        }

        if !self.status.can_transition_to(RunStatus::Running) {
            return Err(PrompterError::AlreadyRunning(self.prompt_id.value()));
        }

        let run_id = Uuid::new_v4();
        self.status = RunStatus::Running;
        self.response.clear();
        self.last_error = None;
        self.active_run = Some(run_id);
        self.started_at = Some(Utc::now());
        self.finished_at = None;

        Ok((
            RunEvent::Started {
                prompt_id: self.prompt_id,
                run_id,
            },
            run_id,
        ))
    }

    /// Appends a fragment if `run_id` is still the active run
    ///
    /// Returns `None` when the fragment was discarded.
    pub fn append(&mut self, run_id: Uuid, fragment: &str) -> Option<RunEvent> {
        if !self.is_active(run_id) {
            return None;
        }

        self.response.push_str(fragment);

        Some(RunEvent::FragmentAppended {
            prompt_id: self.prompt_id,
            run_id,
            fragment: fragment.to_string(),
        })
    }

    /// Ends the active run normally, keeping the buffer
    pub fn complete(&mut self, run_id: Uuid) -> Option<RunEvent> {
        if !self.is_active(run_id) {
            return None;
        }

        self.finish(RunStatus::Idle);

        Some(RunEvent::Completed {
            prompt_id: self.prompt_id,
            run_id,
        })
    }

    /// Ends the active run with an error, keeping the partial buffer
    pub fn fail(&mut self, run_id: Uuid, reason: impl Into<String>) -> Option<RunEvent> {
        if !self.is_active(run_id) {
            return None;
        }

        let reason = reason.into();
        self.finish(RunStatus::Errored);
        self.last_error = Some(reason.clone());

        Some(RunEvent::Failed {
            prompt_id: self.prompt_id,
            run_id,
            reason,
        })
    }

    /// Stops applying fragments of the active run
    ///
    /// Returns `None` when nothing was running.
    pub fn cancel(&mut self) -> Option<RunEvent> {
        let run_id = self.active_run.filter(|_| self.status.is_running())?;

        self.finish(RunStatus::Idle);

        Some(RunEvent::Cancelled {
            prompt_id: self.prompt_id,
            run_id,
        })
    }

    /// Resets buffer and error from any status, cancelling a running stream
    pub fn clear(&mut self) -> RunEvent {
        if self.status.is_running() {
            self.finish(RunStatus::Idle);
        }

        self.status = RunStatus::Idle;
        self.response.clear();
        self.last_error = None;

        RunEvent::Cleared {
            prompt_id: self.prompt_id,
        }
    }

    fn is_active(&self, run_id: Uuid) -> bool {
        self.status.is_running() && self.active_run == Some(run_id)
    }

    fn finish(&mut self, status: RunStatus) {
        self.status = status;
        self.active_run = None;
        self.finished_at = Some(Utc::now());
    }

    // ===== Getters =====

    pub fn prompt_id(&self) -> PromptId {
        self.prompt_id
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn active_run(&self) -> Option<Uuid> {
        self.active_run
    }

    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            prompt_id: self.prompt_id,
            status: self.status,
            response: self.response.clone(),
            error: self.last_error.clone(),
            run_id: self.active_run,
            started_at: self.started_at,
            finished_at: self.finished_at,
        }
    }
}
