use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// SMTP credentials and the fallback recipient are optional at startup: their
/// absence is reported per submission attempt, matching how the mail service
/// is probed at request time rather than at boot.
#[derive(Debug, Clone)]
pub struct Config {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// `true` selects an implicit-TLS relay (port 465 style); `false` uses
    /// STARTTLS on the submission port.
    pub smtp_secure: bool,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    /// Recipient used when a submission's location is not in the fixed
    /// location table.
    pub fallback_email: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            smtp_host: require_env("EMAIL_HOST")?,
            smtp_port: std::env::var("EMAIL_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse::<u16>()
                .context("EMAIL_PORT must be a valid port number")?,
            smtp_secure: std::env::var("EMAIL_SECURE")
                .map(|v| v == "true")
                .unwrap_or(false),
            smtp_user: optional_env("EMAIL_USER"),
            smtp_password: optional_env("EMAIL_PASSWORD"),
            fallback_email: optional_env("FALLBACK_EMAIL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Whether both SMTP credentials are present. Submissions fail with a
    /// processing error when they are not.
    pub fn has_smtp_credentials(&self) -> bool {
        self.smtp_user.is_some() && self.smtp_password.is_some()
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
