// ABOUTME: SMTP relay transport
// ABOUTME: STARTTLS submission through lettre's async tokio transport

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::{MailTransport, NotifyError, OutgoingEmail};

/// Sends through an SMTP relay with STARTTLS on the submission port.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        port: u16,
        username: Option<String>,
        password: Option<String>,
        from: &str,
    ) -> Result<Self, NotifyError> {
        let from = from.parse::<Mailbox>()?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?.port(port);
        if let (Some(username), Some(password)) = (username, password) {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML);

        for recipient in &email.to {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }

        let message = builder.body(email.html_body.clone())?;

        self.transport.send(message).await?;
        Ok(())
    }
}
