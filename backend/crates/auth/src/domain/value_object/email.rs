//! Email Value Object
//!
//! Represents a validated email address.
//! Basic shape validation only - proving control of the address is done
//! via the verification email, out of band.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::validation::{EMAIL_PATTERN, Violation, messages};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object, trimmed and lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(raw: impl Into<String>) -> Result<Self, Violation> {
        let email = raw.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(Violation::new("email", messages::EMAIL_REQUIRED));
        }

        if email.len() > EMAIL_MAX_LENGTH || !EMAIL_PATTERN.is_match(&email) {
            return Err(Violation::new("email", messages::EMAIL_INVALID));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Violation> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
