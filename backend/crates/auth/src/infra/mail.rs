//! Mail Transport Implementations
//!
//! SMTP delivery via lettre, plus a log-only transport for development
//! and tests.

use std::fmt;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use uuid::Uuid;

use crate::domain::repository::MailTransport;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// SMTP connection settings
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .finish()
    }
}

/// SMTP-backed mail transport
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    /// Create a transport from configuration
    pub fn new(config: &SmtpConfig) -> AuthResult<Self> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AuthError::Dispatch(format!("SMTP relay setup failed: {e}")))?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }
}

impl MailTransport for SmtpMailer {
    async fn send(&self, to: &Email, subject: &str, html_body: &str) -> AuthResult<String> {
        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| AuthError::Dispatch(format!(
                        "Invalid sender address: {}",
                        self.from_address
                    )))?,
            )
            .to(to
                .as_str()
                .parse()
                .map_err(|_| AuthError::Dispatch(format!("Invalid recipient address: {to}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| AuthError::Dispatch(format!("Failed to build message: {e}")))?;

        let response = self
            .mailer
            .send(message)
            .await
            .map_err(|e| AuthError::Dispatch(format!("SMTP send failed: {e}")))?;

        Ok(response.message().collect::<Vec<_>>().join(" "))
    }
}

/// Log-only mail transport for development
///
/// Writes the message to the log instead of delivering it and returns a
/// synthetic message id.
#[derive(Clone, Default)]
pub struct LogMailer;

impl MailTransport for LogMailer {
    async fn send(&self, to: &Email, subject: &str, html_body: &str) -> AuthResult<String> {
        let message_id = Uuid::new_v4().to_string();

        tracing::info!(
            to = %to,
            subject = %subject,
            body_len = html_body.len(),
            message_id = %message_id,
            "Mail dispatch (log transport)"
        );

        Ok(message_id)
    }
}
