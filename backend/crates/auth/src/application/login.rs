//! Login Use Case
//!
//! Verifies an email/password pair against the stored hash. Every
//! failure mode past field validation collapses into the same
//! `InvalidCredentials` error so the response does not reveal whether
//! the account exists.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::validation::{LoginPayload, validate_login};
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Field validation only; no strength estimation at login
        let violations = validate_login(&LoginPayload {
            email: &input.email,
            password: &input.password,
        });
        if !violations.is_empty() {
            return Err(AuthError::Validation(violations));
        }

        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A password that cannot pass the pattern gate cannot be stored,
        // so it cannot match either
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        // Verification is CPU-bound like hashing
        let pepper = self.config.password_pepper.clone();
        let stored_hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            stored_hash.verify(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))?;

        if !password_valid {
            tracing::info!(email = %user.email, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(LoginOutput {
            user_id: user.user_id.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
        })
    }
}
