//! Register Use Case
//!
//! Creates a new user credential record. Gates run in a fixed order:
//! field validation, password pattern, strength estimate, confirmation
//! match, then hashing. A failure at any gate leaves no stored state and
//! sends no mail.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::UserCredential;
use crate::domain::repository::UserRepository;
use crate::domain::validation::{RegistrationPayload, validate_registration};
use crate::domain::value_object::{Email, RawPassword, UserName, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Field validation, every violation reported at once
        let mut violations = validate_registration(&RegistrationPayload {
            username: &input.username,
            email: &input.email,
            password: &input.password,
        });

        // Value object construction adds its own violations to the batch
        let username = match UserName::new(&input.username) {
            Ok(u) => Some(u),
            Err(v) => {
                if !violations.iter().any(|existing| existing.field == v.field) {
                    violations.push(v);
                }
                None
            }
        };
        let email = match Email::new(&input.email) {
            Ok(e) => Some(e),
            Err(v) => {
                if !violations.iter().any(|existing| existing.field == v.field) {
                    violations.push(v);
                }
                None
            }
        };

        if !violations.is_empty() {
            return Err(AuthError::Validation(violations));
        }

        // Both are Some once the batch is empty
        let (Some(username), Some(email)) = (username, email) else {
            return Err(AuthError::Internal(
                "Validated fields missing after rule evaluation".to_string(),
            ));
        };

        // Pattern gate (length, character classes)
        let raw_password = RawPassword::new(input.password.clone())?;

        // Strength gate, creation-time only
        let estimate = raw_password.estimate_strength();
        if !estimate.is_acceptable() {
            return Err(AuthError::WeakPassword {
                warning: estimate.warning,
            });
        }

        // Confirmation match on the plaintext, before any hashing
        if input.password != input.confirm_password {
            return Err(AuthError::ConfirmationMismatch);
        }

        // Hashing is CPU-bound; keep it off the async executor
        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))??;

        let user = UserCredential::new(username, email, password_hash);

        // Uniqueness is enforced by the repository on insert
        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
        })
    }
}
