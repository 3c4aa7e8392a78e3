//! Heuristic password strength checker
//!
//! Scores a password with a fixed table of length and character-class checks
//! and returns a strength tier plus a suggestion for every failed check. A
//! toolkit-agnostic controller models the checker window around it.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{evaluate, StrengthTier};
//!
//! let evaluation = evaluate("Abcdefgh1");
//! assert_eq!(evaluation.strength(), StrengthTier::Medium);
//! assert_eq!(evaluation.suggestions, ["Include special characters (!@#$...)."]);
//!
//! let evaluation = evaluate("Abcdefghijk1!");
//! assert_eq!(evaluation.strength(), StrengthTier::Strong);
//! assert!(evaluation.suggestions.is_empty());
//! ```

mod controller;
mod evaluator;
mod sections;
mod types;

pub use controller::{
    render_suggestions, CheckerController, Clipboard, ClipboardError, ControllerError, StatusLine,
    NEUTRAL_COLOR, NO_SUGGESTIONS_TEXT, PLACEHOLDER_TEXT, TOO_SHORT_TEXT,
};
pub use evaluator::{evaluate, evaluate_password_strength, HeuristicEvaluator, StrengthEvaluator};
pub use sections::{
    CharacterClass, Section, SectionOutcome, CHARACTER_CLASSES, LONG_LENGTH, LONG_LENGTH_WEIGHT,
    MAX_SCORE, MIN_LENGTH, MIN_LENGTH_WEIGHT, SCORING_TABLE, SPECIAL_CHARACTERS,
};
pub use types::{
    EvaluationResult, StrengthTier, MEDIUM_COLOR, MEDIUM_THRESHOLD, STRONG_COLOR,
    STRONG_THRESHOLD, WEAK_COLOR,
};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};
