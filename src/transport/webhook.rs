// ABOUTME: Webhook transport posting rendered notifications as JSON
// ABOUTME: Covers chat-style sinks that accept an HTTP POST per notification

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::config::WebhookConfig;
use super::error::{Result, TransportError};
use super::Transport;
use crate::notify::{DispatchAck, NotificationPayload};

pub struct WebhookTransport {
    config: WebhookConfig,
    http_client: Client,
}

impl WebhookTransport {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for WebhookTransport {
    async fn dispatch(&self, payload: &NotificationPayload) -> Result<DispatchAck> {
        let document = serde_json::json!({
            "id": payload.id,
            "template": payload.template_ref,
            "subject": payload.metadata.subject,
            "body": payload.body,
        });

        debug!(payload_id = %payload.id, url = %self.config.url, "posting notification webhook");

        let mut request = self.http_client.post(&self.config.url).json(&document);
        for (name, value) in &self.config.headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Delivery {
                message: format!("webhook failed with status {}: {}", status, body),
            });
        }

        info!(payload_id = %payload.id, "notification webhook delivered");

        Ok(DispatchAck::new(self.name()))
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}
