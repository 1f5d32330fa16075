//! Form validation helpers
//!
//! Pure predicates; callers decide what to do with a failure.

use regex::Regex;
use std::sync::LazyLock;

/// Permissive email shape: non-empty local part and domain, no
/// whitespace, single '@', at least one '.' in the domain
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Student id: exactly 9 decimal digits
static NIM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9}$").unwrap());

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_nim(nim: &str) -> bool {
    NIM_REGEX.is_match(nim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_minimal_address() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("mahasiswa.220010001@kampus.ac.id"));
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a b@c.co"));
        assert!(!validate_email("a@b@c.co"));
        assert!(!validate_email("a@bco"));
        assert!(!validate_email("@b.co"));
    }

    #[test]
    fn test_validate_nim_requires_exactly_nine_digits() {
        assert!(validate_nim("123456789"));
        assert!(!validate_nim("12345"));
        assert!(!validate_nim("1234567890"));
        assert!(!validate_nim("12345678a"));
        assert!(!validate_nim(""));
    }
}
