// ABOUTME: Configuration types for mail and webhook transports
// ABOUTME: Serde structs passed through to the sinks, never validated by the core

use serde::{Deserialize, Serialize};

use super::error::{Result, TransportError};

/// TLS strategy for the SMTP session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportStrategy {
    /// Implicit TLS on connect (SMTPS).
    #[default]
    Smtps,
    /// Plain connection upgraded via STARTTLS.
    Starttls,
    /// No TLS. Only sensible against a local relay.
    Plain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub strategy: TransportStrategy,
    #[serde(default = "default_session_timeout")]
    pub session_timeout_secs: u64,
}

fn default_smtp_port() -> u16 {
    465
}

fn default_session_timeout() -> u64 {
    10
}

impl MailConfig {
    pub fn from_yaml(document: &str) -> Result<Self> {
        serde_yaml::from_str(document).map_err(|e| TransportError::Config {
            message: format!("invalid mail transport config: {}", e),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
}

impl WebhookConfig {
    pub fn from_yaml(document: &str) -> Result<Self> {
        serde_yaml::from_str(document).map_err(|e| TransportError::Config {
            message: format!("invalid webhook transport config: {}", e),
        })
    }
}
