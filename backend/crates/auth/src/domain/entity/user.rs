//! User Credential Entity
//!
//! The authoritative credential record: identity fields plus the hashed
//! password. Plaintext never crosses this boundary.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Email, UserId, UserName, UserPassword};

/// User credential record
///
/// The password field always holds the Argon2id PHC hash, never the
/// plaintext.
#[derive(Debug, Clone)]
pub struct UserCredential {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, display and lookup)
    pub username: UserName,
    /// Email address (unique, lowercased)
    pub email: Email,
    /// Argon2id PHC hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl UserCredential {
    /// Create a new credential record
    pub fn new(username: UserName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update user name
    pub fn set_username(&mut self, username: UserName) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update email address
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Replace the stored password hash
    ///
    /// Callers must only invoke this when the password actually changed;
    /// updates that leave the password untouched keep the stored hash
    /// byte-identical.
    pub fn set_password_hash(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::RawPassword;

    fn sample_credential() -> UserCredential {
        let username = UserName::new("alice1").unwrap();
        let email = Email::new("alice@example.com").unwrap();
        let raw = RawPassword::new("Str0ng!Pass".to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw, None).unwrap();
        UserCredential::new(username, email, hash)
    }

    #[test]
    fn test_new_sets_matching_timestamps() {
        let user = sample_credential();
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_set_email_bumps_updated_at() {
        let mut user = sample_credential();
        let before = user.updated_at;
        user.set_email(Email::new("alice2@example.com").unwrap());
        assert_eq!(user.email.as_str(), "alice2@example.com");
        assert!(user.updated_at >= before);
    }

    #[test]
    fn test_updates_without_password_keep_hash_identical() {
        let mut user = sample_credential();
        let original = user.password_hash.as_phc_string().to_string();

        user.set_username(UserName::new("alice2").unwrap());
        user.set_email(Email::new("alice2@example.com").unwrap());

        assert_eq!(user.password_hash.as_phc_string(), original);
    }
}
