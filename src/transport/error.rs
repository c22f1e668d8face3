// ABOUTME: Error types for notification transports
// ABOUTME: Defines address, connection, and delivery failure kinds

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("invalid message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport configuration error: {message}")]
    Config { message: String },

    #[error("delivery failed: {message}")]
    Delivery { message: String },
}

pub type Result<T> = std::result::Result<T, TransportError>;
