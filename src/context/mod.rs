// ABOUTME: Context builder module turning execution snapshots into rendering contexts
// ABOUTME: Owns value derivation rules, duration humanization, and the stable execution schema

pub mod builder;
pub mod duration;
pub mod error;
pub mod serialize;
pub mod value;

pub use builder::{ContextBuilder, LinkResolver};
pub use duration::humanize;
pub use error::{ContextError, Result};
pub use serialize::{execution_to_value, task_run_to_value, EXECUTION_SCHEMA_VERSION};
pub use value::{ContextValue, RenderingContext};
