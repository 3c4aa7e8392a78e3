//! Character variety sections - uppercase, lowercase, digits and special symbols.
//!
//! Letters and special symbols match fixed ASCII ranges only, so accented
//! letters count as neither case. Digits are any Unicode decimal digit
//! (general category Nd).

use secrecy::{ExposeSecret, SecretString};
use unicode_general_category::{get_general_category, GeneralCategory};
use super::SectionOutcome;

/// Symbols accepted by the special-character check.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A presence check for one class of characters.
#[derive(Clone, Copy)]
pub struct CharacterClass {
    pub name: &'static str,
    pub predicate: fn(char) -> bool,
    pub suggestion: &'static str,
    pub weight: u8,
}

impl CharacterClass {
    /// Passes when at least one character of `text` belongs to the class.
    pub fn check(&self, text: &str) -> SectionOutcome {
        if text.chars().any(self.predicate) {
            SectionOutcome::Passed(self.weight)
        } else {
            SectionOutcome::Failed(self.suggestion)
        }
    }
}

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

pub const UPPERCASE: CharacterClass = CharacterClass {
    name: "uppercase",
    predicate: is_upper,
    suggestion: "Add uppercase letters.",
    weight: 1,
};

pub const LOWERCASE: CharacterClass = CharacterClass {
    name: "lowercase",
    predicate: is_lower,
    suggestion: "Add lowercase letters.",
    weight: 1,
};

pub const DIGIT: CharacterClass = CharacterClass {
    name: "digit",
    predicate: is_digit,
    suggestion: "Include numbers.",
    weight: 1,
};

pub const SPECIAL: CharacterClass = CharacterClass {
    name: "special",
    predicate: is_special,
    suggestion: "Include special characters (!@#$...).",
    weight: 1,
};

pub const CHARACTER_CLASSES: [CharacterClass; 4] = [UPPERCASE, LOWERCASE, DIGIT, SPECIAL];

pub fn uppercase_section(password: &SecretString) -> SectionOutcome {
    UPPERCASE.check(password.expose_secret())
}

pub fn lowercase_section(password: &SecretString) -> SectionOutcome {
    LOWERCASE.check(password.expose_secret())
}

pub fn digit_section(password: &SecretString) -> SectionOutcome {
    DIGIT.check(password.expose_secret())
}

pub fn special_section(password: &SecretString) -> SectionOutcome {
    SPECIAL.check(password.expose_secret())
}
