// ABOUTME: SMTP mail transport built on lettre
// ABOUTME: Maps payload metadata to a MIME message and sends it over the configured session

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, info};

use super::config::{MailConfig, TransportStrategy};
use super::error::{Result, TransportError};
use super::Transport;
use crate::notify::{BodyKind, DispatchAck, NotificationPayload};

pub struct MailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl MailTransport {
    pub fn new(config: &MailConfig) -> Result<Self> {
        let mut builder = match config.strategy {
            TransportStrategy::Smtps => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?,
            TransportStrategy::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            }
            TransportStrategy::Plain => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            }
        };

        builder = builder
            .port(config.port)
            .timeout(Some(Duration::from_secs(config.session_timeout_secs)));

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            mailer: builder.build(),
        })
    }

    fn build_message(payload: &NotificationPayload) -> Result<Message> {
        if payload.metadata.recipients.is_empty() {
            return Err(TransportError::Delivery {
                message: "no recipient addresses specified".to_string(),
            });
        }

        let mut builder = Message::builder()
            .from(payload.metadata.sender.parse::<Mailbox>()?)
            .subject(payload.metadata.subject.clone());

        for recipient in &payload.metadata.recipients {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }
        for cc in &payload.metadata.cc {
            builder = builder.cc(cc.parse::<Mailbox>()?);
        }

        let content_type = match payload.body_kind {
            BodyKind::Html => ContentType::TEXT_HTML,
            BodyKind::Text => ContentType::TEXT_PLAIN,
        };

        let message = builder.header(content_type).body(payload.body.clone())?;
        Ok(message)
    }
}

#[async_trait]
impl Transport for MailTransport {
    async fn dispatch(&self, payload: &NotificationPayload) -> Result<DispatchAck> {
        let message = Self::build_message(payload)?;

        debug!(
            payload_id = %payload.id,
            recipients = payload.metadata.recipients.len(),
            "sending notification mail"
        );

        let response = self.mailer.send(message).await?;

        info!(
            payload_id = %payload.id,
            subject = %payload.metadata.subject,
            "notification mail accepted by relay"
        );

        Ok(DispatchAck::new(self.name()).with_message_id(response.code().to_string()))
    }

    fn name(&self) -> &'static str {
        "mail"
    }
}
