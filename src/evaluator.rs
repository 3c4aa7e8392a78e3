//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{SectionOutcome, SCORING_TABLE};
use crate::types::{EvaluationResult, StrengthTier};

/// Delay before an async evaluation runs, so fast typing only evaluates once.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Anything able to turn a password into an [`EvaluationResult`].
///
/// The controller takes one of these so front-ends and tests can swap the
/// scoring out.
pub trait StrengthEvaluator {
    fn evaluate(&self, password: &SecretString) -> EvaluationResult;
}

/// The fixed-weight heuristic scorer backed by [`SCORING_TABLE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl StrengthEvaluator for HeuristicEvaluator {
    fn evaluate(&self, password: &SecretString) -> EvaluationResult {
        evaluate_password_strength(password)
    }
}

/// Evaluates password strength.
///
/// Runs every section of the scoring table in order, adding up awarded points
/// and collecting the suggestion of each failed section. Never fails; the
/// empty string is simply weak.
pub fn evaluate_password_strength(password: &SecretString) -> EvaluationResult {
    let mut score: u8 = 0;
    let mut suggestions = Vec::new();

    for section in SCORING_TABLE {
        match (section.run)(password) {
            SectionOutcome::Passed(points) => score += points,
            SectionOutcome::Failed(suggestion) => suggestions.push(suggestion.to_string()),
        }
    }

    let strength = StrengthTier::from_score(score);
    if strength == StrengthTier::Strong {
        suggestions.clear();
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score,
        strength = strength.label(),
        suggestions = suggestions.len(),
        "password evaluated"
    );

    EvaluationResult { strength, score, suggestions }
}

/// Convenience wrapper over [`evaluate_password_strength`] for plain text.
pub fn evaluate(password: &str) -> EvaluationResult {
    evaluate_password_strength(&SecretString::new(password.into()))
}

/// Async version that sends the evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled during the wait nothing
/// is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
