// ABOUTME: Error types for execution lookup operations
// ABOUTME: Defines not-found and backend failure kinds surfaced by the lookup collaborator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("no execution found for id: {id}")]
    NotFound { id: String },

    #[error("execution lookup backend error: {message}")]
    Backend { message: String },
}

pub type Result<T> = std::result::Result<T, LookupError>;
