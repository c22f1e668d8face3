// ABOUTME: Execution lookup collaborator trait consumed by the context builder
// ABOUTME: Implemented against the orchestration engine's repository or API

use async_trait::async_trait;

use super::error::Result;
use super::snapshot::ExecutionSnapshot;

/// Port into the orchestration engine's execution store. One call per
/// notification dispatch; the pipeline performs no retry of its own.
#[async_trait]
pub trait ExecutionLookup: Send + Sync {
    async fn find(&self, id: &str) -> Result<ExecutionSnapshot>;
}
