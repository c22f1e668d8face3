// ABOUTME: Error types for the notification pipeline
// ABOUTME: Surfaces context, template, and transport failures verbatim to the caller

use thiserror::Error;

use crate::context::ContextError;
use crate::execution::LookupError;
use crate::template::TemplateError;
use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl NotifyError {
    /// True when the failure was an unresolvable execution identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NotifyError::Context(ContextError::Lookup(LookupError::NotFound { .. }))
        )
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
