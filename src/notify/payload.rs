// ABOUTME: Notification payload and transport metadata types
// ABOUTME: Immutable rendered-message structures consumed exactly once by a transport

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::RenderingContext;

/// Recipient/sender/subject metadata passed through to the transport. The
/// pipeline renders the subject but never validates addresses; that is the
/// transport's concern.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransportMetadata {
    pub recipients: Vec<String>,
    #[serde(default)]
    pub cc: Vec<String>,
    pub sender: String,
    pub subject: String,
}

impl TransportMetadata {
    pub fn new(recipients: Vec<String>, sender: &str, subject: &str) -> Self {
        Self {
            recipients,
            cc: Vec::new(),
            sender: sender.to_string(),
            subject: subject.to_string(),
        }
    }

    pub fn with_cc(mut self, cc: Vec<String>) -> Self {
        self.cc = cc;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Html,
    Text,
}

/// A fully rendered notification, ready for dispatch. Immutable once built;
/// consumed exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPayload {
    pub id: Uuid,
    pub template_ref: String,
    pub context: RenderingContext,
    pub body: String,
    pub body_kind: BodyKind,
    pub metadata: TransportMetadata,
    pub created_at: DateTime<Utc>,
}

impl NotificationPayload {
    pub fn new(
        template_ref: &str,
        context: RenderingContext,
        body: String,
        body_kind: BodyKind,
        metadata: TransportMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            template_ref: template_ref.to_string(),
            context,
            body,
            body_kind,
            metadata,
            created_at: Utc::now(),
        }
    }
}

/// Acknowledgement returned by a transport after a successful dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchAck {
    pub transport: String,
    pub message_id: Option<String>,
    pub dispatched_at: DateTime<Utc>,
}

impl DispatchAck {
    pub fn new(transport: &str) -> Self {
        Self {
            transport: transport.to_string(),
            message_id: None,
            dispatched_at: Utc::now(),
        }
    }

    pub fn with_message_id(mut self, message_id: String) -> Self {
        self.message_id = Some(message_id);
        self
    }
}
