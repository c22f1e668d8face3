// ABOUTME: Context builder producing the rendering context from an execution reference
// ABOUTME: Owns identifier placeholder resolution, fact derivation, and the failed-run scan

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use tracing::debug;

use super::error::Result;
use super::serialize;
use super::value::{ContextValue, RenderingContext};
use super::{duration, ContextError};
use crate::execution::{ExecutionLookup, ExecutionRef, ExecutionSnapshot};
use crate::template::TemplateEngine;

/// Reserved context names owned by the builder. Caller-supplied entries
/// never override these.
pub const RESERVED_KEYS: [&str; 5] = ["duration", "startDate", "link", "execution", "firstFailed"];

/// Resolves the absolute URL of an execution in the orchestration UI.
pub trait LinkResolver: Send + Sync {
    fn execution_url(&self, snapshot: &ExecutionSnapshot) -> String;
}

impl<F> LinkResolver for F
where
    F: Fn(&ExecutionSnapshot) -> String + Send + Sync,
{
    fn execution_url(&self, snapshot: &ExecutionSnapshot) -> String {
        self(snapshot)
    }
}

/// Pure mapping from an execution reference to a rendering context. The only
/// I/O is the lookup call during `resolve`; `derive` never fails for a
/// well-formed snapshot.
#[derive(Clone)]
pub struct ContextBuilder {
    engine: TemplateEngine,
}

impl ContextBuilder {
    pub fn new(engine: TemplateEngine) -> Self {
        Self { engine }
    }

    /// Resolve a reference into a snapshot. Identifier references go through
    /// placeholder resolution against the invocation scope, then through the
    /// injected lookup; snapshot references pass through untouched.
    pub async fn resolve(
        &self,
        execution: &ExecutionRef,
        scope: &JsonValue,
        lookup: &dyn ExecutionLookup,
    ) -> Result<ExecutionSnapshot> {
        match execution {
            ExecutionRef::Snapshot(snapshot) => Ok(snapshot.clone()),
            ExecutionRef::Id(raw) => {
                let id = self.resolve_identifier_placeholders(raw, scope)?;
                debug!(execution_id = %id, "looking up execution");
                lookup.find(&id).await.map_err(ContextError::Lookup)
            }
        }
    }

    /// Resolve `{{ ... }}` placeholders embedded in a raw execution id, e.g.
    /// the default `{{ execution.id }}` reference. Ids without placeholders
    /// are returned as-is without touching the template engine.
    pub fn resolve_identifier_placeholders(&self, raw: &str, scope: &JsonValue) -> Result<String> {
        if !self.engine.has_placeholders(raw) {
            return Ok(raw.to_string());
        }

        let resolved = self.engine.render_inline(raw, scope)?;
        Ok(resolved)
    }

    /// Derive the rendering context using the current wall clock for
    /// still-running executions.
    pub fn derive(&self, snapshot: &ExecutionSnapshot, links: &dyn LinkResolver) -> RenderingContext {
        self.derive_at(snapshot, links, Utc::now())
    }

    /// Derive the rendering context against an explicit clock reading.
    pub fn derive_at(
        &self,
        snapshot: &ExecutionSnapshot,
        links: &dyn LinkResolver,
        now: DateTime<Utc>,
    ) -> RenderingContext {
        let elapsed = snapshot.end.unwrap_or(now) - snapshot.start;

        let mut context = RenderingContext::new();
        context.insert("duration", JsonValue::String(duration::humanize(elapsed)));
        context.insert("startDate", JsonValue::String(snapshot.start.to_rfc3339()));
        context.insert("link", JsonValue::String(links.execution_url(snapshot)));
        context.insert("execution", serialize::execution_to_value(snapshot));
        context.insert(
            "firstFailed",
            Self::last_failed(snapshot).into_template_value(),
        );

        context
    }

    /// The last task run in sequence order whose state is FAILED. The
    /// context name `firstFailed` is kept for template compatibility even
    /// though the scan keeps the last match.
    pub fn last_failed(snapshot: &ExecutionSnapshot) -> ContextValue {
        snapshot
            .task_runs
            .iter()
            .filter(|run| run.state.is_failed())
            .last()
            .map(serialize::task_run_to_value)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::{State, TaskRunRecord};
    use chrono::TimeZone;
    use serde_json::json;

    fn builder() -> ContextBuilder {
        ContextBuilder::new(TemplateEngine::new().unwrap())
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn link_to_host(snapshot: &ExecutionSnapshot) -> String {
        format!("https://host/{}", snapshot.id)
    }

    #[test]
    fn test_no_task_runs_yields_false() {
        let snapshot = ExecutionSnapshot::new("e1", "ns", "flow", State::Success, t0());
        assert_eq!(ContextBuilder::last_failed(&snapshot), ContextValue::Absent);

        let context = builder().derive_at(&snapshot, &link_to_host, t0());
        assert_eq!(context.get("firstFailed"), Some(&json!(false)));
    }

    #[test]
    fn test_last_failed_wins_over_earlier_failures() {
        // FAILED at positions 1 and 3 of 4: the position-3 record is kept.
        let snapshot = ExecutionSnapshot::new("e1", "ns", "flow", State::Failed, t0())
            .with_task_run(TaskRunRecord::new("t0", "step0", State::Success))
            .with_task_run(TaskRunRecord::new("t1", "step1", State::Failed))
            .with_task_run(TaskRunRecord::new("t2", "step2", State::Success))
            .with_task_run(TaskRunRecord::new("t3", "step3", State::Failed));

        let failed = ContextBuilder::last_failed(&snapshot);
        let value = failed.as_present().unwrap();
        assert_eq!(value["id"], "t3");
        assert_eq!(value["state"], "FAILED");
    }

    #[test]
    fn test_duration_of_finished_execution() {
        let snapshot = ExecutionSnapshot::new("e1", "ns", "flow", State::Success, t0())
            .with_end(t0() + chrono::Duration::seconds(90));

        // The injected clock is ignored once an end time is frozen.
        let context = builder().derive_at(&snapshot, &link_to_host, t0() + chrono::Duration::hours(9));
        assert_eq!(context.get("duration"), Some(&json!("1m 30s")));
    }

    #[test]
    fn test_duration_of_running_execution_uses_clock() {
        let snapshot = ExecutionSnapshot::new("e1", "ns", "flow", State::Running, t0());

        let context =
            builder().derive_at(&snapshot, &link_to_host, t0() + chrono::Duration::seconds(30));
        assert_eq!(context.get("duration"), Some(&json!("30s")));
    }

    #[test]
    fn test_derived_context_shape() {
        let snapshot = ExecutionSnapshot::new("e1", "ns", "flow", State::Failed, t0())
            .with_end(t0() + chrono::Duration::minutes(5))
            .with_task_run(TaskRunRecord::new("t2", "load", State::Failed));

        let context = builder().derive_at(&snapshot, &link_to_host, t0());

        let keys: Vec<&str> = context.keys().collect();
        assert_eq!(keys, RESERVED_KEYS.to_vec());
        assert_eq!(context.get("duration"), Some(&json!("5m")));
        assert_eq!(context.get("startDate"), Some(&json!("2024-03-01T12:00:00+00:00")));
        assert_eq!(context.get("link"), Some(&json!("https://host/e1")));
        assert_eq!(context.get("execution").unwrap()["id"], "e1");
        assert_eq!(context.get("firstFailed").unwrap()["id"], "t2");
    }

    #[test]
    fn test_placeholder_resolution() {
        let builder = builder();
        let scope = json!({ "execution": { "id": "e42" } });

        let resolved = builder
            .resolve_identifier_placeholders("{{ execution.id }}", &scope)
            .unwrap();
        assert_eq!(resolved, "e42");

        // Plain ids skip the template engine entirely.
        let passthrough = builder
            .resolve_identifier_placeholders("exec-2024-001", &json!({}))
            .unwrap();
        assert_eq!(passthrough, "exec-2024-001");
    }

    #[test]
    fn test_placeholder_resolution_fails_on_missing_scope() {
        let builder = builder();
        let result = builder.resolve_identifier_placeholders("{{ execution.id }}", &json!({}));
        assert!(matches!(result, Err(ContextError::Placeholder(_))));
    }
}
