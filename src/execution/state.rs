// ABOUTME: Execution and task-run state kinds mirrored from the orchestration engine
// ABOUTME: Fixed status set with terminal/failure predicates and wire-format serialization

use serde::{Deserialize, Serialize};

/// Status of an execution or a single task run, as reported by the
/// orchestration engine. Serialized in the engine's SCREAMING_SNAKE form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    Created,
    Running,
    Paused,
    Restarted,
    Killing,
    Success,
    Warning,
    Failed,
    Killed,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            State::Success | State::Warning | State::Failed | State::Killed
        )
    }

    pub fn is_failed(&self) -> bool {
        *self == State::Failed
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            State::Created => "CREATED",
            State::Running => "RUNNING",
            State::Paused => "PAUSED",
            State::Restarted => "RESTARTED",
            State::Killing => "KILLING",
            State::Success => "SUCCESS",
            State::Warning => "WARNING",
            State::Failed => "FAILED",
            State::Killed => "KILLED",
        };
        write!(f, "{}", name)
    }
}
