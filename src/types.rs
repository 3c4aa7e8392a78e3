//! Result types produced by the evaluator.

use std::fmt;

/// Strength tier derived from the additive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Maps a score to its tier.
    ///
    /// Anything at or above `STRONG_THRESHOLD` is strong, anything at or above
    /// `MEDIUM_THRESHOLD` is medium, the rest is weak.
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_THRESHOLD {
            StrengthTier::Strong
        } else if score >= MEDIUM_THRESHOLD {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        }
    }

    /// Hex colour a front-end should paint the tier label with.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::Weak => WEAK_COLOR,
            StrengthTier::Medium => MEDIUM_COLOR,
            StrengthTier::Strong => STRONG_COLOR,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowest score classified as [`StrengthTier::Medium`].
pub const MEDIUM_THRESHOLD: u8 = 4;

/// Lowest score classified as [`StrengthTier::Strong`].
pub const STRONG_THRESHOLD: u8 = 6;

pub const WEAK_COLOR: &str = "#F44336";
pub const MEDIUM_COLOR: &str = "#FF9800";
pub const STRONG_COLOR: &str = "#4CAF50";

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub strength: StrengthTier,
    /// Additive score, `0..=MAX_SCORE`.
    pub score: u8,
    /// One entry per failed check, in check order. Always empty when strong.
    pub suggestions: Vec<String>,
}

impl EvaluationResult {
    pub fn strength(&self) -> StrengthTier {
        self.strength
    }

    pub fn is_strong(&self) -> bool {
        self.strength == StrengthTier::Strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_boundaries() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(3), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(4), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(5), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(6), StrengthTier::Strong);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(StrengthTier::Weak.color(), "#F44336");
        assert_eq!(StrengthTier::Medium.color(), "#FF9800");
        assert_eq!(StrengthTier::Strong.color(), "#4CAF50");
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(StrengthTier::Medium.to_string(), "Medium");
    }
}
