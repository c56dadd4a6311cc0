//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::path::PathBuf;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Path to the verification email HTML template
    pub verification_template: PathBuf,
    /// Subject line for verification emails
    pub verification_subject: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_pepper: None,
            verification_template: PathBuf::from("templates/verification_email.html"),
            verification_subject: "Your verification code".to_string(),
        }
    }
}

impl AuthConfig {
    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
