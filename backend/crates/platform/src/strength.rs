//! Password Strength Estimation
//!
//! Heuristic, entropy-style scoring on an ordinal 0-4 scale (weakest to
//! strongest). Character-class rules alone accept structurally weak
//! passwords such as `Aaaaaaa1!`; this estimator catches them.
//!
//! The estimate starts from a character-pool entropy guess and is pulled
//! down by predictable structure: repeated character runs, sequential
//! digits, keyboard walks, and dictionary words. Scores below
//! [`MIN_ACCEPTED_SCORE`] must be rejected at credential creation; the
//! estimator is never consulted at login.

/// Minimum acceptable score for credential creation or change
pub const MIN_ACCEPTED_SCORE: u8 = 3;

/// Keyboard walks that make a password predictable
const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty",
    "qwertyuiop",
    "asdfgh",
    "asdfghjkl",
    "zxcvbn",
    "qazwsx",
    "1qaz2wsx",
];

/// Extremely common passwords (compared case-insensitively, by containment)
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "password123",
    "12345678",
    "123456789",
    "1234567890",
    "abcdefgh",
    "letmein",
    "welcome",
    "admin123",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "monkey",
    "shadow",
    "master",
    "dragon",
    "baseball",
    "michael",
    "trustno1",
];

/// Result of a strength estimation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEstimate {
    /// Ordinal score, 0 (weakest) to 4 (strongest)
    pub score: u8,
    /// What made the password weak, when something specific was detected
    pub warning: Option<&'static str>,
}

impl StrengthEstimate {
    /// Whether the score clears the acceptance threshold
    pub fn is_acceptable(&self) -> bool {
        self.score >= MIN_ACCEPTED_SCORE
    }
}

/// Estimate the strength of a password.
///
/// Deterministic and CPU-cheap; safe to run on every credential write.
pub fn estimate(password: &str) -> StrengthEstimate {
    let lower = password.to_lowercase();

    // Exact dictionary hit is an immediate floor
    if COMMON_PASSWORDS.contains(&lower.as_str()) {
        return StrengthEstimate {
            score: 0,
            warning: Some("this is a commonly used password"),
        };
    }

    let bits = entropy_bits(password);
    let mut score = score_from_bits(bits);
    let mut warning = None;

    // Structural caps: predictable content bounds the score regardless
    // of length or character variety.
    if COMMON_PASSWORDS.iter().any(|p| lower.contains(p)) {
        score = score.min(1);
        warning = Some("contains a commonly used password");
    } else if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        score = score.min(1);
        warning = Some("keyboard patterns are easy to guess");
    } else if has_sequential_digit_run(&lower, 4) {
        score = score.min(1);
        warning = Some("sequences of digits are easy to guess");
    } else if longest_run(&lower) >= 3 && score < MIN_ACCEPTED_SCORE {
        warning = Some("repeated characters add little strength");
    }

    StrengthEstimate { score, warning }
}

/// Entropy guess in bits: effective length times log2 of the character pool.
///
/// Runs of the same character are collapsed to two occurrences so that
/// padding with repeats does not inflate the estimate.
fn entropy_bits(password: &str) -> f64 {
    let mut effective_len = 0usize;
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for ch in password.chars() {
        if prev == Some(ch) {
            run += 1;
        } else {
            run = 1;
            prev = Some(ch);
        }
        if run <= 2 {
            effective_len += 1;
        }
    }

    let mut pool = 0usize;
    if password.chars().any(|c| c.is_lowercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        pool += 33;
    }
    if pool == 0 {
        return 0.0;
    }

    effective_len as f64 * (pool as f64).log2()
}

/// Map an entropy guess to the ordinal scale.
fn score_from_bits(bits: f64) -> u8 {
    match bits {
        b if b < 28.0 => 0,
        b if b < 36.0 => 1,
        b if b < 60.0 => 2,
        b if b < 80.0 => 3,
        _ => 4,
    }
}

/// Longest run of one repeated character
fn longest_run(s: &str) -> usize {
    let mut longest = 0usize;
    let mut run = 0usize;
    let mut prev: Option<char> = None;

    for ch in s.chars() {
        if prev == Some(ch) {
            run += 1;
        } else {
            run = 1;
            prev = Some(ch);
        }
        longest = longest.max(run);
    }
    longest
}

/// Ascending or descending digit run of at least `min_len`
fn has_sequential_digit_run(s: &str, min_len: usize) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < min_len {
        return false;
    }

    digits.windows(min_len).any(|w| {
        w.windows(2).all(|p| p[1] == p[0] + 1 || (p[0] == 9 && p[1] == 0))
            || w.windows(2).all(|p| p[0] == p[1] + 1 || (p[0] == 0 && p[1] == 9))
    })
}
