//! Breach corpus lookup using k-anonymity
//!
//! The password is hashed locally with SHA-1 and only the first five hex
//! characters of the digest are sent to the range service. The service
//! answers with every `SUFFIX:COUNT` record sharing that prefix and the
//! match is done locally.

mod http;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::config::{BreachConfig, ConfigError};
use crate::types::BreachStatus;

pub use http::HttpRangeSource;

/// Number of digest characters sent to the range service.
pub const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Range request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Range service answered with status {0}")]
    UnexpectedStatus(u16),
    #[error("Malformed range record: {0:?}")]
    MalformedRecord(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A service answering prefix queries over the breach corpus.
pub trait RangeSource {
    /// Returns the raw `SUFFIX:COUNT` body for every hash starting with
    /// `prefix` (5 uppercase hex characters).
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send;
}

/// SHA-1 hashes a password and returns the uppercase hex digest.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Splits a digest into the prefix sent remotely and the suffix kept local.
pub fn split_hash(hash: &str) -> (&str, &str) {
    hash.split_at(PREFIX_LEN)
}

/// Looks `suffix` up in a range response body.
///
/// # Returns
/// - `Ok(Some(count))` if a record with a non-zero count matches, even when
///   other lines of the body are malformed
/// - `Ok(None)` if nothing matches (padding records have count 0)
/// - `Err(MalformedRecord)` if nothing matches and some line is not
///   `SUFFIX:COUNT`
pub fn find_suffix(body: &str, suffix: &str) -> Result<Option<u64>, BreachError> {
    let mut malformed = None;
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let record = line
            .split_once(':')
            .and_then(|(candidate, count)| Some((candidate, count.trim().parse::<u64>().ok()?)));
        let Some((candidate, count)) = record else {
            malformed.get_or_insert_with(|| line.to_string());
            continue;
        };

        if count > 0 && candidate.trim().eq_ignore_ascii_case(suffix) {
            return Ok(Some(count));
        }
    }

    match malformed {
        Some(line) => Err(BreachError::MalformedRecord(line)),
        None => Ok(None),
    }
}

/// Checks passwords against the breach corpus.
///
/// Holds no per-call state; a single checker can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct BreachChecker<S = HttpRangeSource> {
    source: S,
}

impl BreachChecker<HttpRangeSource> {
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        Ok(Self::with_source(HttpRangeSource::new(config)?))
    }

    /// Builds an HTTP-backed checker from `PWD_BREACH_*` variables.
    pub fn from_env() -> Result<Self, BreachError> {
        Self::new(BreachConfig::from_env()?)
    }
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Checks the password against the corpus.
    ///
    /// Never fails: any error while looking up resolves to
    /// [`BreachStatus::Unknown`].
    pub async fn check(&self, password: &SecretString) -> BreachStatus {
        match self.lookup(password).await {
            Ok(Some(count)) => BreachStatus::Compromised { count },
            Ok(None) => BreachStatus::Clean,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach check unavailable, failing open: {}", _e);
                BreachStatus::Unknown
            }
        }
    }

    /// Fail-open boolean view of [`BreachChecker::check`]: `false` both when
    /// the password is clean and when the lookup could not be completed.
    pub async fn is_compromised(&self, password: &SecretString) -> bool {
        self.check(password).await.is_compromised()
    }

    async fn lookup(&self, password: &SecretString) -> Result<Option<u64>, BreachError> {
        let digest = hash_password(password.expose_secret());
        let (prefix, suffix) = split_hash(&digest);

        #[cfg(feature = "tracing")]
        tracing::debug!("Querying breach range {}", prefix);

        let body = self.source.fetch_range(prefix).await?;
        find_suffix(&body, suffix)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// In-memory range source that records every prefix it is asked for.
    #[derive(Default)]
    pub struct FakeRangeSource {
        pub body: Option<String>,
        pub requests: Mutex<Vec<String>>,
    }

    impl FakeRangeSource {
        pub fn answering(body: impl Into<String>) -> Self {
            Self {
                body: Some(body.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// A source whose every lookup fails.
        pub fn failing() -> Self {
            Self::default()
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl RangeSource for FakeRangeSource {
        async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
            self.requests.lock().unwrap().push(prefix.to_string());
            self.body.clone().ok_or(BreachError::UnexpectedStatus(503))
        }
    }

    /// Builds a body containing `password`'s suffix among decoys.
    pub fn body_containing(password: &str, count: u64) -> String {
        let digest = hash_password(password);
        let (_, suffix) = split_hash(&digest);
        format!(
            "0018A45C4D1DEF81644B54AB7F969B88D65:1\r\n{}:{}\r\nFFFFF0000000000000000000000000000FF:7\r\n",
            suffix, count
        )
    }
}
