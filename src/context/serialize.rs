// ABOUTME: Stable schema-walk serialization of execution snapshots
// ABOUTME: Builds the `execution` context value field by field so template paths stay stable

use chrono::{DateTime, Utc};
use serde_json::{Map, Value as JsonValue};

use super::duration;
use crate::execution::{ExecutionSnapshot, TaskRunRecord};

/// Version of the `execution` context value's shape. Templates dot-access
/// nested fields of this structure, so any field rename or removal is a
/// breaking change and must bump this version.
pub const EXECUTION_SCHEMA_VERSION: u32 = 1;

/// Serialize a snapshot into the `execution` context value.
///
/// This is an explicit field walk, not a derive-based dump of the struct:
/// the template-visible shape is a contract of its own and must not drift
/// when the internal types change.
pub fn execution_to_value(snapshot: &ExecutionSnapshot) -> JsonValue {
    let mut state = Map::new();
    state.insert("current".to_string(), JsonValue::String(snapshot.state.to_string()));
    state.insert("startDate".to_string(), timestamp(&snapshot.start));
    state.insert(
        "endDate".to_string(),
        snapshot.end.as_ref().map(timestamp).unwrap_or(JsonValue::Null),
    );
    state.insert(
        "duration".to_string(),
        match snapshot.end {
            Some(end) => JsonValue::String(duration::humanize(end - snapshot.start)),
            None => JsonValue::Null,
        },
    );

    let task_runs: Vec<JsonValue> = snapshot.task_runs.iter().map(task_run_to_value).collect();

    let mut root = Map::new();
    root.insert("id".to_string(), JsonValue::String(snapshot.id.clone()));
    root.insert("namespace".to_string(), JsonValue::String(snapshot.namespace.clone()));
    root.insert("flowId".to_string(), JsonValue::String(snapshot.flow_id.clone()));
    root.insert("state".to_string(), JsonValue::Object(state));
    root.insert("taskRunList".to_string(), JsonValue::Array(task_runs));

    JsonValue::Object(root)
}

/// Serialize one task-run record, used both inside `execution.taskRunList`
/// and as the `firstFailed` context value.
pub fn task_run_to_value(task_run: &TaskRunRecord) -> JsonValue {
    let mut map = Map::new();
    map.insert("id".to_string(), JsonValue::String(task_run.id.clone()));
    map.insert("taskId".to_string(), JsonValue::String(task_run.task_id.clone()));
    map.insert("state".to_string(), JsonValue::String(task_run.state.to_string()));
    map.insert(
        "startDate".to_string(),
        task_run.start.as_ref().map(timestamp).unwrap_or(JsonValue::Null),
    );
    map.insert(
        "endDate".to_string(),
        task_run.end.as_ref().map(timestamp).unwrap_or(JsonValue::Null),
    );
    map.insert("attempts".to_string(), JsonValue::from(task_run.attempts));

    JsonValue::Object(map)
}

fn timestamp(at: &DateTime<Utc>) -> JsonValue {
    JsonValue::String(at.to_rfc3339())
}
