//! Repetition section - detects runs of the same character.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Run length at which a repeated character is penalized.
const MAX_RUN: usize = 3;

pub const REPEATED_CHARS: &str = "Avoid repeating characters";

/// Penalizes any character repeated 3 or more times in a row (e.g. "aaa").
pub fn repetition_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= MAX_RUN {
                return SectionResult::penalty(REPEATED_CHARS);
            }
        } else {
            repeated_count = 1;
        }
    }

    SectionResult::pass()
}
