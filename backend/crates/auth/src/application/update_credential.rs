//! Update Credential Use Case
//!
//! Applies a partial update to an existing credential record. The
//! password gates and re-hash run only when the update actually carries
//! a new password; otherwise the stored hash is left byte-identical.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword, UserId, UserName, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Requested password change, both fields from user input
pub struct PasswordChange {
    pub new_password: String,
    pub confirm_password: String,
}

/// Partial credential update; `None` fields are left untouched
pub struct CredentialUpdate {
    pub user_id: UserId,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<PasswordChange>,
}

/// Update credential output
#[derive(Debug)]
pub struct UpdateCredentialOutput {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

/// Update credential use case
pub struct UpdateCredentialUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> UpdateCredentialUseCase<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, update: CredentialUpdate) -> AuthResult<UpdateCredentialOutput> {
        let mut user = self
            .repo
            .find_by_id(&update.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(username) = update.username {
            let username =
                UserName::new(username).map_err(|v| AuthError::Validation(vec![v]))?;
            user.set_username(username);
        }

        if let Some(email) = update.email {
            let email = Email::new(email).map_err(|v| AuthError::Validation(vec![v]))?;
            user.set_email(email);
        }

        // Password gates run only on an actual password change
        if let Some(change) = update.password {
            let raw_password = RawPassword::new(change.new_password.clone())?;

            let estimate = raw_password.estimate_strength();
            if !estimate.is_acceptable() {
                return Err(AuthError::WeakPassword {
                    warning: estimate.warning,
                });
            }

            if change.new_password != change.confirm_password {
                return Err(AuthError::ConfirmationMismatch);
            }

            let pepper = self.config.password_pepper.clone();
            let password_hash = tokio::task::spawn_blocking(move || {
                UserPassword::from_raw(&raw_password, pepper.as_deref())
            })
            .await
            .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))??;

            user.set_password_hash(password_hash);
        }

        self.repo.update(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "Credential updated"
        );

        Ok(UpdateCredentialOutput {
            user_id: user.user_id.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
        })
    }
}
