//! Core configuration.
//!
//! Supports configuration via environment variables:
//!
//! ```bash
//! # Comma-separated admin allowlist (emails, case-insensitive)
//! MATCHDAY_ADMIN_EMAILS=ref@example.com,desk@example.com
//!
//! # Password policy minimum length (default 6)
//! MATCHDAY_MIN_PASSWORD_LEN=8
//! ```

use std::env;

use thiserror::Error;

use matchday_identity::DEFAULT_MIN_PASSWORD_LEN;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid MATCHDAY_MIN_PASSWORD_LEN: {0}")]
    InvalidMinPasswordLen(String),
}

/// Core configuration
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Emails allowed to call the admin review operations (lower-cased).
    pub admin_emails: Vec<String>,
    /// Minimum password length the identity provider enforces.
    pub min_password_len: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            admin_emails: Vec::new(),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl CoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_emails = env::var("MATCHDAY_ADMIN_EMAILS")
            .map(|raw| {
                raw.split(',')
                    .map(|e| e.trim().to_lowercase())
                    .filter(|e| !e.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let min_password_len = match env::var("MATCHDAY_MIN_PASSWORD_LEN") {
            Err(_) => DEFAULT_MIN_PASSWORD_LEN,
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidMinPasswordLen(raw))?,
        };

        Ok(Self {
            admin_emails,
            min_password_len,
        })
    }

    /// Whether this email belongs to an administrative reviewer.
    pub fn is_admin(&self, email: &str) -> bool {
        let email = email.to_lowercase();
        self.admin_emails.iter().any(|a| a == &email)
    }
}
