//! Email notification service
//!
//! One plain-text message per completed upload session, sent synchronously over SMTP.
//! No batching, no retry, no delivery confirmation beyond the transport's accept.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use dropgate_core::SmtpConfig;

/// Notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Mail transport error: {0}")]
    Transport(String),
}

/// Notification abstraction the orchestrator works against.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a single plain-text message.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// SMTP-backed notifier.
#[derive(Debug)]
pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn from_config(smtp: &SmtpConfig) -> Result<Self, NotifyError> {
        let builder = if smtp.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
                .map_err(|e| NotifyError::Transport(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
        };
        let mut builder = builder.port(smtp.port);
        if let (Some(user), Some(password)) = (&smtp.username, &smtp.password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        let from: Mailbox = smtp
            .from
            .parse()
            .map_err(|e| NotifyError::InvalidAddress(format!("Invalid SMTP_FROM: {}", e)))?;

        tracing::info!(
            host = %smtp.host,
            port = smtp.port,
            starttls = smtp.starttls,
            "SMTP notifier initialized"
        );

        Ok(Self {
            mailer: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let to_addr: Mailbox = to
            .parse()
            .map_err(|e| NotifyError::InvalidAddress(format!("Invalid recipient '{}': {}", to, e)))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to_addr)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        tracing::info!(recipient = %to, "Notification email sent");
        Ok(())
    }
}
