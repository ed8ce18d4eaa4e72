//! Length section - minimum length feedback and long-password bonus.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::MIN_LENGTH;

/// Length from which a password earns the length bonus.
const LONG_LENGTH: usize = 12;

pub const TOO_SHORT: &str = "Password must be at least 8 characters long";

/// Checks the password length.
///
/// # Returns
/// - feedback without penalty if shorter than the minimum
/// - `+1` if at least 12 characters long
/// - nothing in between
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    if len < MIN_LENGTH {
        return SectionResult {
            delta: 0,
            feedback: vec![TOO_SHORT.to_string()],
        };
    }
    if len >= LONG_LENGTH {
        return SectionResult {
            delta: 1,
            feedback: Vec::new(),
        };
    }
    SectionResult::pass()
}
