//! User Password Value Object
//!
//! Domain wrappers around `platform::password`. `RawPassword` holds the
//! validated plaintext (zeroized on drop), `UserPassword` holds the
//! Argon2id hash that may be stored.
//!
//! The strength gate is deliberately separate from construction: it runs
//! only at credential creation/change, never at login. See
//! [`RawPassword::estimate_strength`].

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use platform::strength::{self, StrengthEstimate};
use std::fmt;

use crate::domain::validation::Violation;
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, enforcing the composed schema pattern
    ///
    /// ## Validation Rules
    /// - 8 to 25 characters, NFKC normalized
    /// - No control characters
    /// - At least one lowercase, one uppercase, one digit, one symbol
    ///
    /// ## Errors
    /// A policy failure is a single aggregated field violation on
    /// `password`.
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e: PasswordPolicyError| {
            AuthError::Validation(vec![Violation::new("password", e.to_string())])
        })?;

        Ok(Self(clear_text))
    }

    /// Run the heuristic strength estimator over the plaintext
    ///
    /// Only meaningful at credential creation/change; callers at login
    /// must not invoke this.
    pub fn estimate_strength(&self) -> StrengthEstimate {
        strength::estimate(self.0.as_str())
    }

    /// Access the inner ClearTextPassword
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores the password in Argon2id PHC string format. Safe to store and
/// to log the wrapper (the Debug output is redacted).
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Create from raw password by hashing
    ///
    /// CPU-bound; callers on an async executor should run this under
    /// `spawn_blocking`.
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AuthError::Internal(format!("Password hashing failed: {msg}"))
            }
            _ => AuthError::Internal("Unexpected error during password hashing".to_string()),
        })?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// Constant-time comparison inside argon2. Also CPU-bound; see
    /// [`UserPassword::from_raw`].
    ///
    /// ## Arguments
    /// * `raw` - The raw password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

// ============================================================================
// Tests
// ============================================================================
