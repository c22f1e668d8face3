// ABOUTME: Read-only execution snapshot and task-run record types
// ABOUTME: Defines the ExecutionRef input accepted by the notification pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::State;

/// Default execution reference: the id of the execution that triggered the
/// current invocation, resolved from the invocation scope before lookup.
pub const CURRENT_EXECUTION_REF: &str = "{{ execution.id }}";

/// Read-only view of a finished or running execution, sourced from the
/// orchestration engine once per notification dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionSnapshot {
    pub id: String,
    pub namespace: String,
    pub flow_id: String,
    pub state: State,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    /// Task runs in chronological order of state transition, which is not
    /// necessarily the flow's declaration order.
    pub task_runs: Vec<TaskRunRecord>,
}

/// One step's execution record within an execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRunRecord {
    pub id: String,
    pub task_id: String,
    pub state: State,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attempts: u32,
}

/// Input accepted by the pipeline: either an execution id (possibly holding
/// `{{ ... }}` placeholders resolved against the invocation scope) or an
/// already-resolved snapshot.
#[derive(Debug, Clone)]
pub enum ExecutionRef {
    Id(String),
    Snapshot(ExecutionSnapshot),
}

impl ExecutionRef {
    /// Reference to the execution that triggered the current invocation.
    pub fn current() -> Self {
        ExecutionRef::Id(CURRENT_EXECUTION_REF.to_string())
    }
}

impl From<&str> for ExecutionRef {
    fn from(id: &str) -> Self {
        ExecutionRef::Id(id.to_string())
    }
}

impl From<String> for ExecutionRef {
    fn from(id: String) -> Self {
        ExecutionRef::Id(id)
    }
}

impl From<ExecutionSnapshot> for ExecutionRef {
    fn from(snapshot: ExecutionSnapshot) -> Self {
        ExecutionRef::Snapshot(snapshot)
    }
}

impl ExecutionSnapshot {
    pub fn new(id: &str, namespace: &str, flow_id: &str, state: State, start: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            namespace: namespace.to_string(),
            flow_id: flow_id.to_string(),
            state,
            start,
            end: None,
            task_runs: Vec::new(),
        }
    }

    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_task_run(mut self, task_run: TaskRunRecord) -> Self {
        self.task_runs.push(task_run);
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Fully qualified flow identifier, `namespace.flow_id`.
    pub fn qualified_flow(&self) -> String {
        format!("{}.{}", self.namespace, self.flow_id)
    }
}

impl TaskRunRecord {
    pub fn new(id: &str, task_id: &str, state: State) -> Self {
        Self {
            id: id.to_string(),
            task_id: task_id.to_string(),
            state,
            start: None,
            end: None,
            attempts: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_builder() {
        let start = Utc::now();
        let snapshot = ExecutionSnapshot::new("e1", "prod.billing", "invoice", State::Failed, start)
            .with_task_run(TaskRunRecord::new("t1", "extract", State::Success))
            .with_task_run(TaskRunRecord::new("t2", "load", State::Failed));

        assert_eq!(snapshot.task_runs.len(), 2);
        assert_eq!(snapshot.qualified_flow(), "prod.billing.invoice");
        assert!(snapshot.is_terminal());
        assert!(snapshot.end.is_none());
    }

    #[test]
    fn test_execution_ref_conversions() {
        let by_id: ExecutionRef = "e42".into();
        assert!(matches!(by_id, ExecutionRef::Id(ref id) if id == "e42"));

        let current = ExecutionRef::current();
        assert!(matches!(current, ExecutionRef::Id(ref id) if id == "{{ execution.id }}"));

        let snapshot = ExecutionSnapshot::new("e1", "ns", "flow", State::Success, Utc::now());
        let by_snapshot: ExecutionRef = snapshot.into();
        assert!(matches!(by_snapshot, ExecutionRef::Snapshot(_)));
    }
}
