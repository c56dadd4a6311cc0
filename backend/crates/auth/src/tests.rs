//! Use case tests against in-memory implementations
//!
//! The memory repository mirrors the database unique indexes so the
//! conflict paths are exercised without Postgres.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::application::{
    AuthConfig, CredentialUpdate, LoginInput, LoginUseCase, PasswordChange, RegisterInput,
    RegisterUseCase, SendVerificationInput, SendVerificationUseCase, UpdateCredentialUseCase,
};
use crate::domain::entity::UserCredential;
use crate::domain::repository::{MailTransport, UserRepository};
use crate::domain::value_object::{Email, UserId, UserName};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory test doubles
// ============================================================================

#[derive(Default)]
struct MemoryUserRepository {
    users: Mutex<HashMap<Uuid, UserCredential>>,
}

impl MemoryUserRepository {
    fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &UserCredential) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();

        if users
            .values()
            .any(|u| u.username.as_str() == user.username.as_str())
        {
            return Err(AuthError::UsernameTaken);
        }
        if users.values().any(|u| u.email.as_str() == user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }

        users.insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<UserCredential>> {
        Ok(self.users.lock().unwrap().get(user_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<UserCredential>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<UserCredential>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn update(&self, user: &UserCredential) -> AuthResult<()> {
        self.users
            .lock()
            .unwrap()
            .insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, String, String)>>,
}

impl RecordingMailer {
    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn last_body(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, _, b)| b.clone())
    }
}

impl MailTransport for RecordingMailer {
    async fn send(&self, to: &Email, subject: &str, html_body: &str) -> AuthResult<String> {
        self.sent.lock().unwrap().push((
            to.as_str().to_string(),
            subject.to_string(),
            html_body.to_string(),
        ));
        Ok(format!("msg-{}", Uuid::new_v4()))
    }
}

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::default())
}

fn register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> RegisterInput {
    RegisterInput {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    }
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_success() {
    let repo = Arc::new(MemoryUserRepository::default());
    let use_case = RegisterUseCase::new(repo.clone(), test_config());

    let output = use_case
        .execute(register_input(
            "alice1",
            "Alice@Example.COM",
            "Str0ng!Pass",
            "Str0ng!Pass",
        ))
        .await
        .unwrap();

    assert_eq!(output.username, "alice1");
    // Email stored lowercased
    assert_eq!(output.email, "alice@example.com");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_register_aggregates_field_violations() {
    let repo = Arc::new(MemoryUserRepository::default());
    let use_case = RegisterUseCase::new(repo.clone(), test_config());

    // Short username, invalid email, short password: all reported at once
    let err = use_case
        .execute(register_input("ab", "not-an-email", "short", "short"))
        .await
        .unwrap_err();

    match err {
        AuthError::Validation(violations) => {
            let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
            assert!(fields.contains(&"username"));
            assert!(fields.contains(&"email"));
            assert!(fields.contains(&"password"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }

    // Rejection is side-effect free
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_register_weak_password_is_not_a_field_violation() {
    let repo = Arc::new(MemoryUserRepository::default());
    let use_case = RegisterUseCase::new(repo.clone(), test_config());

    // Passes the pattern gate but fails the strength estimate
    let err = use_case
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "Aaaaaaa1!",
            "Aaaaaaa1!",
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::WeakPassword { .. }));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_register_pattern_failure_precedes_strength() {
    let repo = Arc::new(MemoryUserRepository::default());
    let use_case = RegisterUseCase::new(repo.clone(), test_config());

    // Fails the character-class pattern, so the strength estimate is
    // never consulted: the error is a field violation, not WeakPassword
    let err = use_case
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "aaaaaaaa",
            "aaaaaaaa",
        ))
        .await
        .unwrap_err();

    match err {
        AuthError::Validation(violations) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "password");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_register_confirmation_mismatch() {
    let repo = Arc::new(MemoryUserRepository::default());
    let use_case = RegisterUseCase::new(repo.clone(), test_config());

    let err = use_case
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "Str0ng!Pass",
            "Str0ng!Pass2",
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::ConfirmationMismatch));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let repo = Arc::new(MemoryUserRepository::default());
    let use_case = RegisterUseCase::new(repo.clone(), test_config());

    use_case
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "Str0ng!Pass",
            "Str0ng!Pass",
        ))
        .await
        .unwrap();

    let err = use_case
        .execute(register_input(
            "alice1",
            "other@example.com",
            "Str0ng!Pass",
            "Str0ng!Pass",
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UsernameTaken));
    assert_eq!(repo.len(), 1);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "Str0ng!Pass",
            "Str0ng!Pass",
        ))
        .await
        .unwrap();

    let output = LoginUseCase::new(repo, config)
        .execute(LoginInput {
            email: "alice@example.com".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.username, "alice1");
}

#[tokio::test]
async fn test_login_wrong_password_is_invalid_credentials() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "Str0ng!Pass",
            "Str0ng!Pass",
        ))
        .await
        .unwrap();

    let err = LoginUseCase::new(repo, config)
        .execute(LoginInput {
            email: "alice@example.com".to_string(),
            password: "Wr0ng!Pass99".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let repo = Arc::new(MemoryUserRepository::default());

    // Unknown account and bad password produce the same error
    let err = LoginUseCase::new(repo, test_config())
        .execute(LoginInput {
            email: "nobody@example.com".to_string(),
            password: "Str0ng!Pass".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_does_not_run_strength_gate() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    // A weak-but-patterned password never reaches storage, so a login
    // attempt with one must fail as InvalidCredentials, not WeakPassword
    let err = LoginUseCase::new(repo, config)
        .execute(LoginInput {
            email: "alice@example.com".to_string(),
            password: "Aaaaaaa1!".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
}

// ============================================================================
// Credential update
// ============================================================================

#[tokio::test]
async fn test_update_without_password_keeps_hash_identical() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "Str0ng!Pass",
            "Str0ng!Pass",
        ))
        .await
        .unwrap();

    let user = repo
        .find_by_email(&Email::new("alice@example.com").unwrap())
        .await
        .unwrap()
        .unwrap();
    let original_hash = user.password_hash.as_phc_string().to_string();

    // Two consecutive updates that never touch the password
    let update_use_case = UpdateCredentialUseCase::new(repo.clone(), config);
    update_use_case
        .execute(CredentialUpdate {
            user_id: user.user_id,
            username: Some("alice2".to_string()),
            email: None,
            password: None,
        })
        .await
        .unwrap();
    update_use_case
        .execute(CredentialUpdate {
            user_id: user.user_id,
            username: None,
            email: Some("alice2@example.com".to_string()),
            password: None,
        })
        .await
        .unwrap();

    let updated = repo.find_by_id(&user.user_id).await.unwrap().unwrap();
    assert_eq!(updated.username.as_str(), "alice2");
    assert_eq!(updated.email.as_str(), "alice2@example.com");
    assert_eq!(updated.password_hash.as_phc_string(), original_hash);
}

#[tokio::test]
async fn test_update_with_password_change_rehashes() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "Str0ng!Pass",
            "Str0ng!Pass",
        ))
        .await
        .unwrap();

    let user = repo
        .find_by_email(&Email::new("alice@example.com").unwrap())
        .await
        .unwrap()
        .unwrap();
    let original_hash = user.password_hash.as_phc_string().to_string();

    UpdateCredentialUseCase::new(repo.clone(), config.clone())
        .execute(CredentialUpdate {
            user_id: user.user_id,
            username: None,
            email: None,
            password: Some(PasswordChange {
                new_password: "N3w!Str0ngPass".to_string(),
                confirm_password: "N3w!Str0ngPass".to_string(),
            }),
        })
        .await
        .unwrap();

    let updated = repo.find_by_id(&user.user_id).await.unwrap().unwrap();
    assert_ne!(updated.password_hash.as_phc_string(), original_hash);

    // New password now logs in
    LoginUseCase::new(repo, config)
        .execute(LoginInput {
            email: "alice@example.com".to_string(),
            password: "N3w!Str0ngPass".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_unknown_user_not_found() {
    let repo = Arc::new(MemoryUserRepository::default());

    let err = UpdateCredentialUseCase::new(repo, test_config())
        .execute(CredentialUpdate {
            user_id: UserId::new(),
            username: Some("alice1".to_string()),
            email: None,
            password: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UserNotFound));
}

#[tokio::test]
async fn test_update_weak_password_rejected() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(register_input(
            "alice1",
            "alice@example.com",
            "Str0ng!Pass",
            "Str0ng!Pass",
        ))
        .await
        .unwrap();

    let user = repo
        .find_by_email(&Email::new("alice@example.com").unwrap())
        .await
        .unwrap()
        .unwrap();
    let original_hash = user.password_hash.as_phc_string().to_string();

    let err = UpdateCredentialUseCase::new(repo.clone(), config)
        .execute(CredentialUpdate {
            user_id: user.user_id,
            username: None,
            email: None,
            password: Some(PasswordChange {
                new_password: "Aaaaaaa1!".to_string(),
                confirm_password: "Aaaaaaa1!".to_string(),
            }),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::WeakPassword { .. }));

    let unchanged = repo.find_by_id(&user.user_id).await.unwrap().unwrap();
    assert_eq!(unchanged.password_hash.as_phc_string(), original_hash);
}

// ============================================================================
// Verification dispatch
// ============================================================================

fn write_temp_template(content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("verification-{}.html", Uuid::new_v4()));
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_send_verification_renders_template() {
    let template = write_temp_template(
        "<html><body><p>Your code is {{CODE}}</p><footer>&copy; {{YEAR}}</footer></body></html>",
    );
    let config = Arc::new(AuthConfig {
        verification_template: template.clone(),
        ..AuthConfig::default()
    });

    let mailer = Arc::new(RecordingMailer::default());
    let use_case = SendVerificationUseCase::new(mailer.clone(), config);

    let output = use_case
        .execute(SendVerificationInput {
            email: "alice@example.com".to_string(),
            code: "482913".to_string(),
        })
        .await
        .unwrap();

    assert!(output.message_id.starts_with("msg-"));
    assert_eq!(mailer.sent_count(), 1);

    let body = mailer.last_body().unwrap();
    assert!(body.contains("482913"));
    assert!(body.contains(&Utc::now().year().to_string()));
    assert!(!body.contains("{{CODE}}"));
    assert!(!body.contains("{{YEAR}}"));

    std::fs::remove_file(template).ok();
}

#[tokio::test]
async fn test_send_verification_missing_template_is_dispatch_error() {
    let config = Arc::new(AuthConfig {
        verification_template: std::path::PathBuf::from("/nonexistent/template.html"),
        ..AuthConfig::default()
    });

    let mailer = Arc::new(RecordingMailer::default());
    let err = SendVerificationUseCase::new(mailer.clone(), config)
        .execute(SendVerificationInput {
            email: "alice@example.com".to_string(),
            code: "482913".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Dispatch(_)));
    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn test_send_verification_invalid_email_rejected() {
    let mailer = Arc::new(RecordingMailer::default());
    let err = SendVerificationUseCase::new(mailer.clone(), test_config())
        .execute(SendVerificationInput {
            email: "not-an-email".to_string(),
            code: "482913".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
    assert_eq!(mailer.sent_count(), 0);
}
