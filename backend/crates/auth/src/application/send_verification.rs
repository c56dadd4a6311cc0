//! Send Verification Use Case
//!
//! Renders the verification email template and hands it to the mail
//! transport. Dispatch failures never roll back a registration; they
//! surface as their own error.

use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::application::config::AuthConfig;
use crate::domain::repository::MailTransport;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Template placeholder for the verification code
pub const CODE_PLACEHOLDER: &str = "{{CODE}}";
/// Template placeholder for the current year (footer)
pub const YEAR_PLACEHOLDER: &str = "{{YEAR}}";

/// Send verification input
pub struct SendVerificationInput {
    pub email: String,
    pub code: String,
}

/// Send verification output
#[derive(Debug)]
pub struct SendVerificationOutput {
    /// Transport-assigned message id
    pub message_id: String,
}

/// Send verification use case
pub struct SendVerificationUseCase<M>
where
    M: MailTransport,
{
    mailer: Arc<M>,
    config: Arc<AuthConfig>,
}

impl<M> SendVerificationUseCase<M>
where
    M: MailTransport,
{
    pub fn new(mailer: Arc<M>, config: Arc<AuthConfig>) -> Self {
        Self { mailer, config }
    }

    pub async fn execute(&self, input: SendVerificationInput) -> AuthResult<SendVerificationOutput> {
        let email = Email::new(&input.email).map_err(|v| AuthError::Validation(vec![v]))?;

        let body = self.render_template(&input.code).await?;

        let message_id = self
            .mailer
            .send(&email, &self.config.verification_subject, &body)
            .await?;

        tracing::info!(
            email = %email,
            message_id = %message_id,
            "Verification email dispatched"
        );

        Ok(SendVerificationOutput { message_id })
    }

    /// Load the HTML template and substitute the code and current year
    async fn render_template(&self, code: &str) -> AuthResult<String> {
        let template = tokio::fs::read_to_string(&self.config.verification_template)
            .await
            .map_err(|e| {
                AuthError::Dispatch(format!(
                    "Failed to read verification template {}: {e}",
                    self.config.verification_template.display()
                ))
            })?;

        Ok(template
            .replace(CODE_PLACEHOLDER, code)
            .replace(YEAR_PLACEHOLDER, &Utc::now().year().to_string()))
    }
}
