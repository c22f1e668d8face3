// ABOUTME: Transport layer delivering rendered notifications to their destinations
// ABOUTME: Defines the Transport trait plus mail, webhook, and in-memory sinks

pub mod config;
pub mod error;
pub mod mail;
pub mod memory;
pub mod webhook;

use async_trait::async_trait;

pub use config::{MailConfig, TransportStrategy, WebhookConfig};
pub use error::{Result, TransportError};
pub use mail::MailTransport;
pub use memory::MemoryTransport;
pub use webhook::WebhookTransport;

use crate::notify::{DispatchAck, NotificationPayload};

/// Sink that actually delivers a rendered notification. One dispatch call
/// per payload, no internal retry; retry policy belongs to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, payload: &NotificationPayload) -> Result<DispatchAck>;

    fn name(&self) -> &'static str;
}
