//! Username Value Object
//!
//! The unique public handle of a user. Trimmed, 3-20 characters, ASCII
//! alphanumeric only. Uniqueness is enforced by the storage layer, not
//! here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::validation::{USERNAME_PATTERN, Violation, messages};

/// Minimum length for a username (in characters)
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 20;

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new username with validation
    pub fn new(raw: impl Into<String>) -> Result<Self, Violation> {
        let trimmed = raw.into().trim().to_string();

        if trimmed.is_empty() {
            return Err(Violation::new("username", messages::USERNAME_REQUIRED));
        }

        let char_count = trimmed.chars().count();
        if char_count < USERNAME_MIN_LENGTH {
            return Err(Violation::new("username", messages::USERNAME_MIN));
        }
        if char_count > USERNAME_MAX_LENGTH {
            return Err(Violation::new("username", messages::USERNAME_MAX));
        }

        if !USERNAME_PATTERN.is_match(&trimmed) {
            return Err(Violation::new("username", messages::USERNAME_ALPHANUMERIC));
        }

        Ok(Self(trimmed))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
