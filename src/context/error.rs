// ABOUTME: Error types for context builder operations
// ABOUTME: Wraps lookup failures and identifier placeholder resolution failures

use thiserror::Error;

use crate::execution::LookupError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("execution resolution failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("identifier placeholder resolution failed: {0}")]
    Placeholder(#[from] TemplateError),
}

pub type Result<T> = std::result::Result<T, ContextError>;
