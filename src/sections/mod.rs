//! Password scoring sections
//!
//! Each section analyzes a specific aspect of password strength and
//! reports a score delta plus any remediation hints.

mod length;
mod pattern;
mod repetition;
mod variety;

pub use length::{length_section, TOO_SHORT};
pub use pattern::{common_pattern_section, COMMON_PATTERN};
pub use repetition::{repetition_section, REPEATED_CHARS};
pub use variety::{
    character_variety_section, MISSING_LOWERCASE, MISSING_NUMBERS, MISSING_SPECIAL,
    MISSING_UPPERCASE,
};

/// Outcome of a single section.
/// - `delta` - points added (bonus) or removed (penalty)
/// - `feedback` - remediation hints, in the order they were found
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub delta: i64,
    pub feedback: Vec<String>,
}

impl SectionResult {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn penalty(reason: &str) -> Self {
        Self {
            delta: -1,
            feedback: vec![reason.to_string()],
        }
    }
}
