// ABOUTME: Outbound transactional email for Sunward
// ABOUTME: One pluggable transport (SMTP relay or hosted API), no retries

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

pub mod config;
pub mod error;
mod http;
mod smtp;

pub use config::MailerConfig;
pub use error::NotifyError;
pub use http::HttpApiMailer;
pub use smtp::SmtpMailer;

/// One message ready to hand to a transport
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

/// A single outbound mail transport.
///
/// "Success" means the transport accepted the send request; nothing here
/// tracks delivery or whether a human ever reads the message.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError>;
}

/// The notifier: one configured transport, or none.
///
/// Unconfigured mailers fail every send with `NotConfigured`; the process
/// still serves traffic either way.
pub struct Mailer {
    transport: Option<Arc<dyn MailTransport>>,
}

impl Mailer {
    /// Build the mailer from the environment. An absent `MAIL_TRANSPORT`
    /// yields a disabled mailer; malformed settings are a startup error.
    pub fn from_env() -> Result<Self, NotifyError> {
        match MailerConfig::from_env()? {
            Some(config) => Self::from_config(config),
            None => {
                warn!("MAIL_TRANSPORT not set; outbound email is disabled");
                Ok(Self::disabled())
            }
        }
    }

    pub fn from_config(config: MailerConfig) -> Result<Self, NotifyError> {
        let transport: Arc<dyn MailTransport> = match config {
            MailerConfig::Smtp {
                host,
                port,
                username,
                password,
                from,
            } => {
                info!("Using SMTP mail transport via {}:{}", host, port);
                Arc::new(SmtpMailer::new(&host, port, username, password, &from)?)
            }
            MailerConfig::Api { endpoint, api_key, from } => {
                info!("Using hosted API mail transport via {}", endpoint);
                Arc::new(HttpApiMailer::new(endpoint, api_key, from))
            }
        };

        Ok(Self {
            transport: Some(transport),
        })
    }

    pub fn disabled() -> Self {
        Self { transport: None }
    }

    /// Wrap an explicit transport. Used by tests to inject fakes.
    pub fn with_transport(transport: Arc<dyn MailTransport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Send one HTML message to one or more recipients.
    ///
    /// Propagates transport errors to the caller; retry and queueing are
    /// deliberately absent.
    pub async fn send(
        &self,
        subject: &str,
        recipients: &[String],
        html_body: &str,
    ) -> Result<(), NotifyError> {
        let transport = self.transport.as_ref().ok_or(NotifyError::NotConfigured)?;

        if recipients.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        let email = OutgoingEmail {
            to: recipients.to_vec(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        };

        transport.send(&email).await
    }
}
