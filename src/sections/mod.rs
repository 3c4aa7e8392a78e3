//! Password evaluation sections
//!
//! Each section runs one check of the scoring table and either awards points
//! or yields the suggestion tied to that check.

mod length;
mod variety;

use secrecy::SecretString;

pub use length::{length_section, LONG_LENGTH, LONG_LENGTH_WEIGHT, MIN_LENGTH, MIN_LENGTH_WEIGHT};
pub use variety::{
    digit_section, lowercase_section, special_section, uppercase_section, CharacterClass,
    CHARACTER_CLASSES, SPECIAL_CHARACTERS,
};

/// Outcome of a single section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    /// Check passed and awards this many points.
    Passed(u8),
    /// Check failed; the suggestion tells the user how to fix it.
    Failed(&'static str),
}

/// A named entry of the scoring table.
#[derive(Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub run: fn(&SecretString) -> SectionOutcome,
    /// Most points `run` can award.
    pub max_weight: u8,
}

/// Checks in evaluation order. The order fixes the order of suggestions.
pub const SCORING_TABLE: [Section; 5] = [
    Section { name: "length", run: length_section, max_weight: LONG_LENGTH_WEIGHT },
    Section { name: "uppercase", run: uppercase_section, max_weight: CHARACTER_CLASSES[0].weight },
    Section { name: "lowercase", run: lowercase_section, max_weight: CHARACTER_CLASSES[1].weight },
    Section { name: "digit", run: digit_section, max_weight: CHARACTER_CLASSES[2].weight },
    Section { name: "special", run: special_section, max_weight: CHARACTER_CLASSES[3].weight },
];

/// Highest score the table can award.
pub const MAX_SCORE: u8 = {
    let mut total = 0;
    let mut i = 0;
    while i < SCORING_TABLE.len() {
        total += SCORING_TABLE[i].max_weight;
        i += 1;
    }
    total
};
