// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides snapshot builders and an in-memory execution lookup

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;

use herald::execution::{ExecutionLookup, ExecutionSnapshot, LookupError, State, TaskRunRecord};

/// Fixed reference instant used across tests.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// A failed execution with one successful and one failed task run,
/// finished five minutes after start.
pub fn failed_execution(id: &str) -> ExecutionSnapshot {
    ExecutionSnapshot::new(id, "prod.billing", "invoice", State::Failed, t0())
        .with_end(t0() + chrono::Duration::minutes(5))
        .with_task_run(TaskRunRecord::new("t1", "extract", State::Success))
        .with_task_run(TaskRunRecord::new("t2", "load", State::Failed))
}

pub fn successful_execution(id: &str) -> ExecutionSnapshot {
    ExecutionSnapshot::new(id, "prod.billing", "invoice", State::Success, t0())
        .with_end(t0() + chrono::Duration::seconds(90))
        .with_task_run(TaskRunRecord::new("t1", "extract", State::Success))
        .with_task_run(TaskRunRecord::new("t2", "load", State::Success))
}

pub fn running_execution(id: &str) -> ExecutionSnapshot {
    ExecutionSnapshot::new(id, "prod.billing", "invoice", State::Running, t0())
        .with_task_run(TaskRunRecord::new("t1", "extract", State::Running))
}

/// Link resolver used by the tests.
pub fn host_link(snapshot: &ExecutionSnapshot) -> String {
    format!("https://host/{}", snapshot.id)
}

/// Execution lookup backed by a plain map.
#[derive(Default)]
pub struct MapLookup {
    executions: HashMap<String, ExecutionSnapshot>,
}

impl MapLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, snapshot: ExecutionSnapshot) -> Self {
        self.executions.insert(snapshot.id.clone(), snapshot);
        self
    }
}

#[async_trait]
impl ExecutionLookup for MapLookup {
    async fn find(&self, id: &str) -> Result<ExecutionSnapshot, LookupError> {
        self.executions
            .get(id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound { id: id.to_string() })
    }
}
