//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, optional pepper)
//! - Password strength estimation (ordinal 0-4 score)

pub mod password;
pub mod strength;
