//! Password security evaluation library
//!
//! Combines a local strength heuristic with a privacy-preserving lookup
//! in a breach corpus (k-anonymity over SHA-1 digests).
//!
//! # Features
//!
//! - `async` (default): Enables the breach checker and the combined validator
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_API_URL`: Range endpoint
//!   (default: `https://api.pwnedpasswords.com/range`)
//! - `PWD_BREACH_USER_AGENT`: User agent sent with lookups
//! - `PWD_BREACH_PADDING`: Request padded responses (default: `false`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_security::score_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! // Synchronous, local-only scoring
//! let strength = score_password(&password);
//! println!("Score: {}", strength.score());
//! println!("Hints: {:?}", strength.feedback());
//!
//! // Scoring plus breach lookup
//! #[cfg(feature = "async")]
//! async fn check(password: &SecretString) {
//!     let validator = pwd_security::SecurityValidator::from_env()
//!         .expect("Failed to build validator");
//!     let result = validator.validate(password).await;
//!     println!("Secure: {}", result.is_secure());
//! }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

#[cfg(feature = "async")]
mod breach;
#[cfg(feature = "async")]
mod config;
#[cfg(feature = "async")]
mod validator;

// Public API
pub use evaluator::score_password;
pub use sections::{
    COMMON_PATTERN, MISSING_LOWERCASE, MISSING_NUMBERS, MISSING_SPECIAL, MISSING_UPPERCASE,
    REPEATED_CHARS, TOO_SHORT,
};
pub use types::{
    BreachStatus, PasswordStrength, SecurityResult, BREACH_WARNING, MAX_SCORE, MIN_LENGTH,
    NOT_STRONG_ENOUGH, STRONG_SCORE,
};

#[cfg(feature = "async")]
pub use breach::{
    find_suffix, hash_password, split_hash, BreachChecker, BreachError, HttpRangeSource,
    RangeSource, PREFIX_LEN,
};
#[cfg(feature = "async")]
pub use config::{BreachConfig, ConfigError, DEFAULT_API_URL};
#[cfg(feature = "async")]
pub use validator::{validate_password_tx, SecurityValidator, DEBOUNCE_INTERVAL};
