//! Value Object Module

pub mod email;
pub mod user_password;
pub mod username;

pub use email::Email;
pub use kernel::id::UserId;
pub use user_password::{RawPassword, UserPassword};
pub use username::UserName;
