// ABOUTME: In-memory transport capturing payloads instead of delivering them
// ABOUTME: Used by integration tests and as a dry-run sink

use async_trait::async_trait;
use std::sync::Mutex;
use tracing::debug;

use super::error::{Result, TransportError};
use super::Transport;
use crate::notify::{DispatchAck, NotificationPayload};

#[derive(Default)]
pub struct MemoryTransport {
    sent: Mutex<Vec<NotificationPayload>>,
    fail_with: Option<String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that rejects every dispatch, for exercising error paths.
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.lock().expect("memory transport lock poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().expect("memory transport lock poisoned").len()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn dispatch(&self, payload: &NotificationPayload) -> Result<DispatchAck> {
        if let Some(message) = &self.fail_with {
            return Err(TransportError::Delivery {
                message: message.clone(),
            });
        }

        debug!(payload_id = %payload.id, "capturing notification in memory");
        self.sent
            .lock()
            .expect("memory transport lock poisoned")
            .push(payload.clone());

        Ok(DispatchAck::new(self.name()))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
