//! Mail transport seam.
//!
//! The submission pipeline only depends on the [`Mailer`] trait: a capability
//! that can confirm it is reachable and deliver one composed message. The
//! production implementation is [`SmtpMailer`] over lettre; tests swap in a
//! recording mock.

mod smtp;

pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

use crate::intake::compose::ComposedMail;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("missing required config: {0}")]
    MissingConfig(String),

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// One-shot delivery capability. No retries, no queueing: a failed `send`
/// surfaces directly as a failed submission.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Confirms the transport is reachable before anything is composed.
    async fn verify(&self) -> Result<(), MailError>;

    /// Delivers a single composed message with its attachments.
    async fn send(&self, mail: &ComposedMail) -> Result<(), MailError>;
}
