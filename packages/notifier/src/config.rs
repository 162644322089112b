use std::env;

use crate::NotifyError;

/// Configuration for the single active mail transport.
///
/// Selected by `MAIL_TRANSPORT` (`smtp` | `api`). Exactly one transport is
/// active at a time; there is no fallback chain.
///
/// SMTP: `SMTP_HOST`, `SMTP_PORT` (default 587), `SMTP_USER`, `SMTP_PASS`,
/// `FROM_EMAIL`. Hosted API: `MAIL_API_URL`, `MAIL_API_KEY`, `FROM_EMAIL`.
#[derive(Debug, Clone)]
pub enum MailerConfig {
    Smtp {
        host: String,
        port: u16,
        username: Option<String>,
        password: Option<String>,
        from: String,
    },
    Api {
        endpoint: String,
        api_key: String,
        from: String,
    },
}

fn required(name: &'static str) -> Result<String, NotifyError> {
    env::var(name).map_err(|_| NotifyError::MissingConfig(name))
}

impl MailerConfig {
    /// Read the transport configuration from the environment.
    ///
    /// `Ok(None)` when `MAIL_TRANSPORT` is unset: the notifier stays
    /// unconfigured and every send fails with `NotConfigured`.
    pub fn from_env() -> Result<Option<Self>, NotifyError> {
        let transport = match env::var("MAIL_TRANSPORT") {
            Ok(value) => value,
            Err(_) => return Ok(None),
        };

        match transport.to_lowercase().as_str() {
            "smtp" => {
                let host = required("SMTP_HOST")?;
                let port = match env::var("SMTP_PORT") {
                    Ok(raw) => raw.parse::<u16>().map_err(|_| NotifyError::InvalidConfig {
                        name: "SMTP_PORT",
                        value: raw,
                    })?,
                    Err(_) => 587,
                };
                let from = required("FROM_EMAIL")?;

                Ok(Some(MailerConfig::Smtp {
                    host,
                    port,
                    username: env::var("SMTP_USER").ok(),
                    password: env::var("SMTP_PASS").ok(),
                    from,
                }))
            }
            "api" => Ok(Some(MailerConfig::Api {
                endpoint: required("MAIL_API_URL")?,
                api_key: required("MAIL_API_KEY")?,
                from: required("FROM_EMAIL")?,
            })),
            other => Err(NotifyError::InvalidConfig {
                name: "MAIL_TRANSPORT",
                value: other.to_string(),
            }),
        }
    }
}
