use std::env;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// Allowed cross-origin request origins; `*` allows any.
    pub cors_origins: Vec<String>,
    pub database_url: String,
    /// Operator address that receives admin notification copies.
    pub notify_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "4310".to_string());

        let port = port_str.parse::<u16>()?;
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:sunward.db".to_string());

        let notify_email =
            env::var("NOTIFY_EMAIL").map_err(|_| ConfigError::MissingVar("NOTIFY_EMAIL"))?;

        Ok(Config {
            port,
            cors_origins,
            database_url,
            notify_email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["PORT", "CORS_ORIGINS", "DATABASE_URL", "NOTIFY_EMAIL"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_with_notify_email_set() {
        clear_env();
        env::set_var("NOTIFY_EMAIL", "ops@example.com");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 4310);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.database_url, "sqlite:sunward.db");
        assert_eq!(config.notify_email, "ops@example.com");
    }

    #[test]
    #[serial]
    fn test_missing_notify_email_is_an_error() {
        clear_env();

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingVar("NOTIFY_EMAIL"))));
    }

    #[test]
    #[serial]
    fn test_cors_origins_parse_as_comma_list() {
        clear_env();
        env::set_var("NOTIFY_EMAIL", "ops@example.com");
        env::set_var(
            "CORS_ORIGINS",
            "https://sunward.example, https://www.sunward.example",
        );

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.cors_origins,
            vec![
                "https://sunward.example".to_string(),
                "https://www.sunward.example".to_string()
            ]
        );
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        env::set_var("NOTIFY_EMAIL", "ops@example.com");
        env::set_var("PORT", "not-a-port");

        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPort(_))
        ));

        env::set_var("PORT", "0");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::PortOutOfRange(0))
        ));
    }
}
