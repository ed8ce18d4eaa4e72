//! Character variety section - lowercase, uppercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MISSING_LOWERCASE: &str = "Add lowercase letters";
pub const MISSING_UPPERCASE: &str = "Add uppercase letters";
pub const MISSING_NUMBERS: &str = "Add numbers";
pub const MISSING_SPECIAL: &str = "Add special characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Number,
    Special,
}

/// Puts every character in exactly one class. Caseless letters (CJK,
/// Arabic, ...) count as special, digits of any script as numbers.
fn classify(c: char) -> CharClass {
    if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Number
    } else {
        CharClass::Special
    }
}

/// Awards one point per character class present and one hint per class
/// missing, in the order lowercase, uppercase, numbers, special.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has = |class: CharClass| pwd.chars().any(|c| classify(c) == class);
    let classes = [
        (has(CharClass::Lower), MISSING_LOWERCASE),
        (has(CharClass::Upper), MISSING_UPPERCASE),
        (has(CharClass::Number), MISSING_NUMBERS),
        (has(CharClass::Special), MISSING_SPECIAL),
    ];

    let mut result = SectionResult::pass();
    for (present, hint) in classes {
        if present {
            result.delta += 1;
        } else {
            result.feedback.push(hint.to_string());
        }
    }
    result
}
