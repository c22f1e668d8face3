// ABOUTME: Execution data model consumed from the orchestration engine
// ABOUTME: Defines snapshot/task-run types, state kinds, and the lookup collaborator

pub mod error;
pub mod lookup;
pub mod snapshot;
pub mod state;

pub use error::{LookupError, Result};
pub use lookup::ExecutionLookup;
pub use snapshot::{ExecutionRef, ExecutionSnapshot, TaskRunRecord};
pub use state::State;
