// ABOUTME: Main library module for the herald notification dispatcher
// ABOUTME: Exports all core modules and provides the public API

pub mod context;
pub mod execution;
pub mod notify;
pub mod template;
pub mod transport;

// Re-export commonly used types
pub use context::{ContextBuilder, ContextValue, LinkResolver, RenderingContext};
pub use execution::{ExecutionLookup, ExecutionRef, ExecutionSnapshot, State, TaskRunRecord};
pub use notify::{BodyKind, DispatchAck, Notifier, NotifyError, NotifyRequest, TransportMetadata};
pub use template::TemplateEngine;
pub use transport::Transport;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
