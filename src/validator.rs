//! Security validator - combines the strength score and the breach lookup.

use std::time::Duration;

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachChecker, BreachError, HttpRangeSource, RangeSource};
use crate::config::BreachConfig;
use crate::evaluator::score_password;
use crate::types::SecurityResult;

/// Pause before validating in [`validate_password_tx`], so that keystrokes
/// arriving in quick succession only trigger one lookup.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// Produces a [`SecurityResult`] for a candidate password.
///
/// Stateless between calls: every `validate` scores the password, performs
/// exactly one breach lookup and builds a fresh result. No retries and no
/// rate limiting happen here.
#[derive(Debug, Clone)]
pub struct SecurityValidator<S = HttpRangeSource> {
    checker: BreachChecker<S>,
}

impl SecurityValidator<HttpRangeSource> {
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        Ok(Self::with_checker(BreachChecker::new(config)?))
    }

    /// Builds an HTTP-backed validator from `PWD_BREACH_*` variables.
    pub fn from_env() -> Result<Self, BreachError> {
        Ok(Self::with_checker(BreachChecker::from_env()?))
    }
}

impl<S: RangeSource> SecurityValidator<S> {
    pub fn with_checker(checker: BreachChecker<S>) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &BreachChecker<S> {
        &self.checker
    }

    /// Scores the password and checks it against the breach corpus.
    ///
    /// Never fails. An unreachable breach service leaves the result
    /// uncompromised; inspect [`SecurityResult::breach`] to tell that case
    /// apart from a clean lookup.
    pub async fn validate(&self, password: &SecretString) -> SecurityResult {
        let strength = score_password(password);
        let breach = self.checker.check(password).await;
        SecurityResult::new(strength, breach)
    }
}

/// Debounced validation that sends the result via channel.
///
/// Waits [`DEBOUNCE_INTERVAL`] first and gives up if `token` is cancelled in
/// the meantime. A lookup already in flight is not aborted; if the token is
/// cancelled before it completes, the result is dropped as stale.
pub async fn validate_password_tx<S: RangeSource>(
    validator: &SecurityValidator<S>,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<SecurityResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("validation cancelled during debounce");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE_INTERVAL) => {}
    }

    let result = validator.validate(password).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("discarding stale validation result");
        return;
    }

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send validation result: {}", _e);
    }
}
