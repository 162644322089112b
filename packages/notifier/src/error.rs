use thiserror::Error;

/// Errors surfaced by the mail layer.
///
/// Callers on the notification paths catch and log these; they never roll
/// back the database write that triggered the send.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("mail transport is not configured")]
    NotConfigured,

    #[error("missing required mail setting: {0}")]
    MissingConfig(&'static str),

    #[error("invalid mail setting {name}: {value}")]
    InvalidConfig { name: &'static str, value: String },

    #[error("no recipients supplied")]
    NoRecipients,

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail API rejected the send ({status}): {body}")]
    Rejected { status: u16, body: String },
}
