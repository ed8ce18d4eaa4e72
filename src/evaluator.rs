//! Password strength scorer - runs the sections and folds their results.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    character_variety_section, common_pattern_section, length_section, repetition_section,
    SectionResult,
};
use crate::types::PasswordStrength;

/// Scores a password on a `0..=4` scale and collects remediation hints.
///
/// Pure and synchronous: the same input always yields the same output,
/// and every string (including the empty one) gets a result.
///
/// Sections run in a fixed order: length, character variety, repetition,
/// common patterns. The score is floored at 0 after every section and
/// clamped to 4 at the end.
pub fn score_password(password: &SecretString) -> PasswordStrength {
    let mut score: i64 = 0;
    let mut feedback = Vec::new();

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("repetition", repetition_section),
        ("pattern", common_pattern_section),
    ];

    for (_section_name, section_fn) in sections {
        let result = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, delta = result.delta, "scored section");

        score = (score + result.delta).max(0);
        feedback.extend(result.feedback);
    }

    let length = password.expose_secret().chars().count();
    PasswordStrength::new(score, feedback, length)
}
