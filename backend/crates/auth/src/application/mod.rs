//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod register;
pub mod send_verification;
pub mod update_credential;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use send_verification::{
    SendVerificationInput, SendVerificationOutput, SendVerificationUseCase,
};
pub use update_credential::{
    CredentialUpdate, PasswordChange, UpdateCredentialOutput, UpdateCredentialUseCase,
};
