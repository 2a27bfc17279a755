use serde::Serialize;

/// Run status of a single card
///
/// # Status Transitions
/// ```text
/// Idle -> Running -> Idle
///            └-----> Errored -> Running
/// ```
/// A clear is accepted from every status and always lands on Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// No stream active; the buffer holds the last response
    #[default]
    Idle,
    /// A stream is being applied to the buffer
    Running,
    /// The last stream failed; the buffer holds what arrived before the failure
    Errored,
}

impl RunStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Example
    /// ```
    /// use seo_prompter_api::domain::run::RunStatus;
    ///
    /// assert!(RunStatus::Errored.can_transition_to(RunStatus::Running));
    /// assert!(!RunStatus::Running.can_transition_to(RunStatus::Running));
    /// ```
    pub fn can_transition_to(&self, next: RunStatus) -> bool {
        use RunStatus::*;
        matches!(
            (self, next),
            (Idle, Running) | (Errored, Running) | (Running, Idle) | (Running, Errored)
        )
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "idle"),
            RunStatus::Running => write!(f, "running"),
            RunStatus::Errored => write!(f, "errored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        assert!(RunStatus::Idle.can_transition_to(RunStatus::Running));
        assert!(RunStatus::Errored.can_transition_to(RunStatus::Running));
        assert!(RunStatus::Running.can_transition_to(RunStatus::Idle));
        assert!(RunStatus::Running.can_transition_to(RunStatus::Errored));
    }

    #[test]
    fn invalid_transitions() {
        assert!(!RunStatus::Running.can_transition_to(RunStatus::Running));
        assert!(!RunStatus::Idle.can_transition_to(RunStatus::Errored));
        assert!(!RunStatus::Errored.can_transition_to(RunStatus::Idle));
    }

    #[test]
    fn status_display() {
        assert_eq!(RunStatus::Idle.to_string(), "idle");
        assert_eq!(RunStatus::Running.to_string(), "running");
        assert_eq!(RunStatus::Errored.to_string(), "errored");
    }

    #[test]
    fn status_serializes_like_display() {
        for status in [RunStatus::Idle, RunStatus::Running, RunStatus::Errored] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }
}
