//! Repository and Transport Traits
//!
//! Interfaces for data persistence and outbound mail. Implementations
//! live in the infrastructure layer.

use crate::domain::entity::UserCredential;
use crate::domain::value_object::{Email, UserId, UserName};
use crate::error::AuthResult;

/// User credential repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new credential record
    ///
    /// Uniqueness of username and email is enforced here; a collision
    /// surfaces as `UsernameTaken` or `EmailTaken`.
    async fn create(&self, user: &UserCredential) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<UserCredential>>;

    /// Find user by email (login lookup)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<UserCredential>>;

    /// Find user by user name
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<UserCredential>>;

    /// Update an existing credential record
    async fn update(&self, user: &UserCredential) -> AuthResult<()>;
}

/// Outbound mail transport trait
///
/// Returns a transport-assigned message id for logging.
#[trait_variant::make(MailTransport: Send)]
pub trait LocalMailTransport {
    /// Send an HTML message to the given recipient
    async fn send(&self, to: &Email, subject: &str, html_body: &str) -> AuthResult<String>;
}
