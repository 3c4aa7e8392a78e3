//! Length section - tiered bonus for password length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

pub const MIN_LENGTH: usize = 8;
pub const LONG_LENGTH: usize = 12;

pub const MIN_LENGTH_WEIGHT: u8 = 1;
pub const LONG_LENGTH_WEIGHT: u8 = 2;

const SUGGESTION: &str = "Use at least 8 characters.";

/// Scores the password length in characters (not bytes).
///
/// # Returns
/// - `Passed(2)` for `LONG_LENGTH` characters or more
/// - `Passed(1)` for `MIN_LENGTH` characters or more
/// - `Failed(suggestion)` otherwise
pub fn length_section(password: &SecretString) -> SectionOutcome {
    let len = password.expose_secret().chars().count();
    if len >= LONG_LENGTH {
        SectionOutcome::Passed(LONG_LENGTH_WEIGHT)
    } else if len >= MIN_LENGTH {
        SectionOutcome::Passed(MIN_LENGTH_WEIGHT)
    } else {
        SectionOutcome::Failed(SUGGESTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.into())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            length_section(&secret("Short1!")),
            SectionOutcome::Failed("Use at least 8 characters.")
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&secret("12345678")), SectionOutcome::Passed(1));
    }

    #[test]
    fn test_length_section_just_below_long() {
        assert_eq!(length_section(&secret("12345678901")), SectionOutcome::Passed(1));
    }

    #[test]
    fn test_length_section_long() {
        assert_eq!(length_section(&secret("123456789012")), SectionOutcome::Passed(2));
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 characters, 14 bytes
        assert_eq!(
            length_section(&secret("ééééééé")),
            SectionOutcome::Failed("Use at least 8 characters.")
        );
    }
}
