//! Domain Layer
//!
//! Contains entities, value objects, field validation rules, and the
//! repository/transport traits.

pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::UserCredential;
pub use repository::{MailTransport, UserRepository};
pub use validation::{Violation, validate_login, validate_registration};
