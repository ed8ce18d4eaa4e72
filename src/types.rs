//! Result types returned by the scorer, the breach checker and the validator.

/// Highest score the scorer can assign.
pub const MAX_SCORE: u8 = 4;

/// Minimum score for a password to count as strong.
pub const STRONG_SCORE: u8 = 3;

/// Minimum length (in characters) for a password to count as strong.
pub const MIN_LENGTH: usize = 8;

/// Leading message in [`SecurityResult::errors`] when the password is weak.
pub const NOT_STRONG_ENOUGH: &str = "Password is not strong enough";

/// Message appended to [`SecurityResult::errors`] on a breach-corpus match.
pub const BREACH_WARNING: &str =
    "This password has appeared in a data breach and must not be used";

/// Outcome of the local strength heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    score: u8,
    feedback: Vec<String>,
    is_strong: bool,
}

impl PasswordStrength {
    /// Builds a strength value, clamping the score and deriving `is_strong`.
    pub(crate) fn new(score: i64, feedback: Vec<String>, length: usize) -> Self {
        let score = score.clamp(0, MAX_SCORE as i64) as u8;
        Self {
            score,
            feedback,
            is_strong: score >= STRONG_SCORE && length >= MIN_LENGTH,
        }
    }

    /// Score in `0..=4`, higher is stronger.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Remediation hints, in evaluation order.
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    pub fn is_strong(&self) -> bool {
        self.is_strong
    }
}

/// Outcome of a breach-corpus lookup.
///
/// `Unknown` means the lookup could not be completed. It is reported as
/// "not compromised" by [`BreachStatus::is_compromised`] (fail-open) but
/// stays distinguishable from a clean result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    Clean,
    Compromised { count: u64 },
    Unknown,
}

impl BreachStatus {
    pub fn is_compromised(&self) -> bool {
        matches!(self, BreachStatus::Compromised { .. })
    }

    /// Whether the remote lookup actually completed.
    pub fn is_checked(&self) -> bool {
        !matches!(self, BreachStatus::Unknown)
    }
}

/// Combined verdict of the strength scorer and the breach checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityResult {
    strength: PasswordStrength,
    breach: BreachStatus,
    errors: Vec<String>,
}

impl SecurityResult {
    pub fn new(strength: PasswordStrength, breach: BreachStatus) -> Self {
        let mut errors = Vec::new();
        if !strength.is_strong() {
            errors.push(NOT_STRONG_ENOUGH.to_string());
            errors.extend(strength.feedback().iter().cloned());
        }
        if breach.is_compromised() {
            errors.push(BREACH_WARNING.to_string());
        }

        Self {
            strength,
            breach,
            errors,
        }
    }

    /// True when the password is strong and no breach match was found.
    pub fn is_secure(&self) -> bool {
        self.strength.is_strong() && !self.is_compromised()
    }

    pub fn is_compromised(&self) -> bool {
        self.breach.is_compromised()
    }

    pub fn strength(&self) -> &PasswordStrength {
        &self.strength
    }

    pub fn breach(&self) -> BreachStatus {
        self.breach
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
