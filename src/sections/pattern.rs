//! Common pattern section - detects well-known weak substrings.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Lowercase substrings that make a password predictable.
const COMMON_PATTERNS: &[&str] = &["123", "abc", "qwe", "password", "admin"];

pub const COMMON_PATTERN: &str = "Avoid common patterns and words";

/// Penalizes passwords containing (case-insensitive) a common pattern.
pub fn common_pattern_section(password: &SecretString) -> SectionResult {
    let lowered = password.expose_secret().to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        return SectionResult::penalty(COMMON_PATTERN);
    }
    SectionResult::pass()
}
