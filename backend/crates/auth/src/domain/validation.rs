//! Declarative Field Validation
//!
//! Ordered rule tables evaluated against a request payload. Every rule in
//! a set is checked and all violations are aggregated, so a caller can
//! report everything at once instead of fixing fields one by one.
//!
//! An empty result means proceed; a non-empty result means the request
//! must be rejected before any side effect (no hashing, no persistence,
//! no email).

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use platform::password::MIN_PASSWORD_LENGTH;

use crate::domain::value_object::username::USERNAME_MIN_LENGTH;

// ============================================================================
// Patterns (process-wide, immutable, compiled once)
// ============================================================================

/// Basic `local@domain.tld` shape
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// ASCII alphanumeric only
pub static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("username pattern is valid"));

// ============================================================================
// Messages
// ============================================================================

/// User-facing rule messages, one per rule
pub mod messages {
    pub const USERNAME_REQUIRED: &str = "Username is required";
    pub const USERNAME_MIN: &str = "Username must be at least 3 characters long";
    pub const USERNAME_MAX: &str = "Username must not exceed 20 characters";
    pub const USERNAME_ALPHANUMERIC: &str = "Username can only contain letters and numbers";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_INVALID: &str = "Invalid email format";
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    pub const PASSWORD_MIN: &str = "Password must be at least 8 characters long";
}

// ============================================================================
// Violations and rules
// ============================================================================

/// A single field-level rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The offending field, as named in the request payload
    pub field: &'static str,
    /// User-facing message for this rule
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// One declarative rule: a predicate over a named field
struct Rule {
    field: &'static str,
    message: &'static str,
    check: fn(&str) -> bool,
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn min_username_chars(value: &str) -> bool {
    value.trim().chars().count() >= USERNAME_MIN_LENGTH
}

fn valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

fn min_password_chars(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Registration rule set.
///
/// The password minimum here matches the schema policy (8 characters);
/// the full pattern and strength gates run later in the pipeline.
const REGISTRATION_RULES: &[Rule] = &[
    Rule {
        field: "username",
        message: messages::USERNAME_REQUIRED,
        check: present,
    },
    Rule {
        field: "username",
        message: messages::USERNAME_MIN,
        check: min_username_chars,
    },
    Rule {
        field: "email",
        message: messages::EMAIL_REQUIRED,
        check: present,
    },
    Rule {
        field: "email",
        message: messages::EMAIL_INVALID,
        check: valid_email,
    },
    Rule {
        field: "password",
        message: messages::PASSWORD_REQUIRED,
        check: present,
    },
    Rule {
        field: "password",
        message: messages::PASSWORD_MIN,
        check: min_password_chars,
    },
];

/// Login rule set. No strength rules at login.
const LOGIN_RULES: &[Rule] = &[
    Rule {
        field: "email",
        message: messages::EMAIL_REQUIRED,
        check: present,
    },
    Rule {
        field: "email",
        message: messages::EMAIL_INVALID,
        check: valid_email,
    },
    Rule {
        field: "password",
        message: messages::PASSWORD_REQUIRED,
        check: present,
    },
];

/// Registration payload view for rule evaluation
pub struct RegistrationPayload<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Login payload view for rule evaluation
pub struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

fn run_rules<'a>(rules: &[Rule], value_of: impl Fn(&'static str) -> &'a str) -> Vec<Violation> {
    rules
        .iter()
        .filter(|rule| !(rule.check)(value_of(rule.field)))
        .map(|rule| Violation::new(rule.field, rule.message))
        .collect()
}

/// Evaluate the registration rule set, aggregating every violation.
pub fn validate_registration(payload: &RegistrationPayload<'_>) -> Vec<Violation> {
    run_rules(REGISTRATION_RULES, |field| match field {
        "username" => payload.username,
        "email" => payload.email,
        _ => payload.password,
    })
}

/// Evaluate the login rule set, aggregating every violation.
pub fn validate_login(payload: &LoginPayload<'_>) -> Vec<Violation> {
    run_rules(LOGIN_RULES, |field| match field {
        "email" => payload.email,
        _ => payload.password,
    })
}
