use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;
use crate::intake::compose::ComposedMail;
use crate::mailer::{MailError, Mailer};

/// SMTP delivery via lettre's async transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport from config. Fails when credentials are absent;
    /// the caller decides whether that is fatal or a per-request fault.
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        let user = config
            .smtp_user
            .clone()
            .ok_or_else(|| MailError::MissingConfig("EMAIL_USER".to_string()))?;
        let password = config
            .smtp_password
            .clone()
            .ok_or_else(|| MailError::MissingConfig("EMAIL_PASSWORD".to_string()))?;

        // secure=true means implicit TLS from the first byte; otherwise the
        // session upgrades via STARTTLS on the submission port.
        let builder = if config.smtp_secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        }
        .map_err(|e| MailError::Smtp(e.to_string()))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(user, password))
            .build();

        Ok(SmtpMailer { transport })
    }

    fn build_message(mail: &ComposedMail) -> Result<Message, MailError> {
        let from = Mailbox::new(
            Some(mail.from_name.to_string()),
            mail.from_address
                .parse::<Address>()
                .map_err(|e| MailError::InvalidAddress(format!("{}: {e}", mail.from_address)))?,
        );
        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|e| MailError::InvalidAddress(format!("{}: {e}", mail.to)))?;

        let mut parts = MultiPart::mixed().singlepart(SinglePart::plain(mail.body.clone()));
        for attachment in &mail.attachments {
            let content_type = ContentType::parse(&attachment.content_type)
                .map_err(|e| MailError::Build(format!("{}: {e}", attachment.content_type)))?;
            parts = parts.singlepart(
                Attachment::new(attachment.filename.clone())
                    .body(attachment.bytes.to_vec(), content_type),
            );
        }

        Message::builder()
            .from(from)
            .to(to)
            .subject(&mail.subject)
            .multipart(parts)
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<(), MailError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailError::Smtp("SMTP server rejected NOOP".to_string())),
            Err(e) => Err(MailError::Smtp(e.to_string())),
        }
    }

    async fn send(&self, mail: &ComposedMail) -> Result<(), MailError> {
        let message = Self::build_message(mail)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;
        tracing::info!(to = %mail.to, subject = %mail.subject, "application mail sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::compose::MailAttachment;
    use bytes::Bytes;

    fn composed(attachments: Vec<MailAttachment>) -> ComposedMail {
        ComposedMail {
            from_name: "Job Applications",
            from_address: "careers@batp.org".to_string(),
            to: "samantha.power@batp.org".to_string(),
            subject: "New Application for RBT - Philadelphia Office".to_string(),
            body: "Job Application Details:\n".to_string(),
            attachments,
        }
    }

    #[test]
    fn test_build_message_with_attachments() {
        let mail = composed(vec![MailAttachment {
            filename: "resume_cv.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.4 stub"),
        }]);

        let message = SmtpMailer::build_message(&mail).unwrap();
        let rendered = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(rendered.contains("resume_cv.pdf"));
        assert!(rendered.contains("application/pdf"));
        assert!(rendered.contains("New Application for RBT - Philadelphia Office"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let mut mail = composed(vec![]);
        mail.to = "not-an-address".to_string();

        match SmtpMailer::build_message(&mail) {
            Err(MailError::InvalidAddress(msg)) => assert!(msg.contains("not-an-address")),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("bad recipient accepted"),
        }
    }

    #[test]
    fn test_build_message_rejects_bad_media_type() {
        let mail = composed(vec![MailAttachment {
            filename: "resume_cv.pdf".to_string(),
            content_type: "definitely not a mime type".to_string(),
            bytes: Bytes::from_static(b"stub"),
        }]);

        assert!(matches!(
            SmtpMailer::build_message(&mail),
            Err(MailError::Build(_))
        ));
    }

    #[test]
    fn test_from_config_requires_credentials() {
        let config = Config {
            smtp_host: "smtp.example.org".to_string(),
            smtp_port: 587,
            smtp_secure: false,
            smtp_user: None,
            smtp_password: Some("secret".to_string()),
            fallback_email: None,
            port: 8080,
            rust_log: "info".to_string(),
        };

        match SmtpMailer::from_config(&config) {
            Err(MailError::MissingConfig(key)) => assert_eq!(key, "EMAIL_USER"),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("mailer built without credentials"),
        }
    }
}
