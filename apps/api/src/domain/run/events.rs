use serde::Serialize;
use uuid::Uuid;

use crate::domain::prompt::PromptId;

/// Events emitted by a card's run state machine
///
/// Every event corresponds to a change of the response buffer or of the
/// run status, so each one is persisted and pushed to listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunEvent {
    /// A run was accepted and the buffer was reset
    Started { prompt_id: PromptId, run_id: Uuid },
    /// A fragment was appended to the buffer
    FragmentAppended {
        prompt_id: PromptId,
        run_id: Uuid,
        fragment: String,
    },
    /// The stream ended normally
    Completed { prompt_id: PromptId, run_id: Uuid },
    /// The stream failed; the partial buffer is kept
    Failed {
        prompt_id: PromptId,
        run_id: Uuid,
        reason: String,
    },
    /// The user stopped the run
    Cancelled { prompt_id: PromptId, run_id: Uuid },
    /// The buffer and error were reset
    Cleared { prompt_id: PromptId },
}

impl RunEvent {
    /// Returns the prompt id for this event
    pub fn prompt_id(&self) -> PromptId {
        match self {
            RunEvent::Started { prompt_id, .. }
            | RunEvent::FragmentAppended { prompt_id, .. }
            | RunEvent::Completed { prompt_id, .. }
            | RunEvent::Failed { prompt_id, .. }
            | RunEvent::Cancelled { prompt_id, .. }
            | RunEvent::Cleared { prompt_id } => *prompt_id,
        }
    }

    /// Returns the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            RunEvent::Started { .. } => "started",
            RunEvent::FragmentAppended { .. } => "fragment_appended",
            RunEvent::Completed { .. } => "completed",
            RunEvent::Failed { .. } => "failed",
            RunEvent::Cancelled { .. } => "cancelled",
            RunEvent::Cleared { .. } => "cleared",
        }
    }
}
