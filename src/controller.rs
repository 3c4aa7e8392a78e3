//! Checker window state.
//!
//! Owns everything the password window shows (entry text, placeholder,
//! masking, status line, suggestion pane) without depending on any toolkit.
//! A front-end forwards widget events to the controller and re-renders from
//! its accessors.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::{HeuristicEvaluator, StrengthEvaluator};
use crate::types::{EvaluationResult, WEAK_COLOR};

pub const PLACEHOLDER_TEXT: &str = "Enter your password...";
pub const TOO_SHORT_TEXT: &str = "Too short";
pub const NO_SUGGESTIONS_TEXT: &str = "Great password! No suggestions.";
pub const NEUTRAL_COLOR: &str = "#333";

const MASK_CHAR: char = '*';

#[derive(Error, Debug)]
#[error("Clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("There is no password to copy")]
    EmptyPassword,
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Destination for the copy action.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Status line text and the colour to paint it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub color: &'static str,
}

impl StatusLine {
    fn new(text: impl Into<String>, color: &'static str) -> Self {
        Self { text: text.into(), color }
    }
}

/// State of the checker window with an injected evaluator.
pub struct CheckerController<E = HeuristicEvaluator> {
    evaluator: E,
    input: SecretString,
    /// Placeholder state is tracked here, never inferred from the input text.
    placeholder_shown: bool,
    revealed: bool,
    status: StatusLine,
    suggestion_text: String,
}

impl Default for CheckerController<HeuristicEvaluator> {
    fn default() -> Self {
        Self::new(HeuristicEvaluator)
    }
}

impl<E: StrengthEvaluator> CheckerController<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            input: empty_secret(),
            placeholder_shown: true,
            revealed: false,
            status: StatusLine::new(TOO_SHORT_TEXT, WEAK_COLOR),
            suggestion_text: String::new(),
        }
    }

    /// The entry gained focus: drop the placeholder if it is showing.
    pub fn focus_in(&mut self) {
        if self.placeholder_shown {
            self.placeholder_shown = false;
            self.input = empty_secret();
            self.revealed = false;
        }
    }

    /// The entry lost focus: bring the placeholder back if nothing was typed.
    pub fn focus_out(&mut self) {
        if self.input.expose_secret().is_empty() {
            self.placeholder_shown = true;
            self.revealed = false;
        }
    }

    /// Replaces the typed text.
    pub fn set_input(&mut self, text: &str) {
        self.placeholder_shown = false;
        self.input = SecretString::new(text.into());
    }

    fn has_password(&self) -> bool {
        !self.placeholder_shown && !self.input.expose_secret().is_empty()
    }

    /// Evaluates the current input and refreshes the status line and pane.
    ///
    /// Returns `None` without calling the evaluator when the entry is empty or
    /// still shows the placeholder.
    pub fn check_strength(&mut self) -> Option<EvaluationResult> {
        if !self.has_password() {
            self.status = StatusLine::new(TOO_SHORT_TEXT, WEAK_COLOR);
            self.suggestion_text.clear();
            return None;
        }

        let result = self.evaluator.evaluate(&self.input);
        self.status = StatusLine::new(
            format!("Strength: {}", result.strength.label()),
            result.strength.color(),
        );
        self.suggestion_text = render_suggestions(&result.suggestions);

        #[cfg(feature = "tracing")]
        tracing::debug!(strength = result.strength.label(), "status line updated");

        Some(result)
    }

    /// Flips between masked and revealed display.
    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Copies the raw input to `clipboard`.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::EmptyPassword`] if nothing was typed
    /// - [`ControllerError::Clipboard`] if the clipboard refused the write
    pub fn copy_password<C: Clipboard>(&self, clipboard: &mut C) -> Result<(), ControllerError> {
        if !self.has_password() {
            return Err(ControllerError::EmptyPassword);
        }
        clipboard.set_text(self.input.expose_secret()).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password copy failed: {}", e);
            ControllerError::from(e)
        })
    }

    /// Resets the window to its idle state.
    pub fn clear(&mut self) {
        self.input = empty_secret();
        self.revealed = false;
        self.status = StatusLine::new(PLACEHOLDER_TEXT, NEUTRAL_COLOR);
        self.suggestion_text.clear();
        self.focus_out();
    }

    /// Text the entry widget should display.
    pub fn displayed_input(&self) -> String {
        if self.placeholder_shown {
            PLACEHOLDER_TEXT.to_string()
        } else if self.revealed {
            self.input.expose_secret().to_string()
        } else {
            std::iter::repeat_n(MASK_CHAR, self.input.expose_secret().chars().count()).collect()
        }
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn suggestion_text(&self) -> &str {
        &self.suggestion_text
    }

    pub fn is_placeholder_shown(&self) -> bool {
        self.placeholder_shown
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

fn empty_secret() -> SecretString {
    SecretString::new("".into())
}

/// Formats suggestions as a bulleted list, one per line.
pub fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return NO_SUGGESTIONS_TEXT.to_string();
    }
    suggestions.iter().map(|tip| format!("- {tip}\n")).collect()
}
