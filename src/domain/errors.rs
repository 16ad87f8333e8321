// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration schema crate.
//!
//! Two levels of error exist. A [`ValueError`] is raised by a single value kind
//! when one raw value cannot be deserialized or fails a constraint. A
//! [`ConfigError`] is the aggregate produced by schema conversion: it collects
//! every [`Problem`] for every key of a section before anything is reported.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// An error raised while deserializing or validating a single value.
///
/// # Examples
///
/// ```
/// use cfgschema::domain::errors::ValueError;
///
/// let error = ValueError::InvalidBoolean { raw: "sure".to_string() };
/// assert_eq!(error.to_string(), "invalid value for boolean: \"sure\"");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The raw text is not a base-10 integer.
    #[error("invalid value for integer: {raw:?}")]
    InvalidInteger {
        /// The rejected raw text
        raw: String,
        /// The underlying parse error
        source: ParseIntError,
    },

    /// The raw text is not one of the recognized boolean spellings.
    #[error("invalid value for boolean: {raw:?}")]
    InvalidBoolean {
        /// The rejected raw text
        raw: String,
    },

    /// The raw text is not a known log level name.
    #[error("invalid log level: {raw:?}")]
    InvalidLogLevel {
        /// The rejected raw text
        raw: String,
    },

    /// The hostname could not be resolved to a network address.
    #[error("must be a resolvable hostname or valid IP, not {host:?}")]
    UnresolvableHost {
        /// The hostname that failed to resolve
        host: String,
        /// The resolver error
        source: std::io::Error,
    },

    /// The value is not one of the configured choices.
    #[error("must be one of {choices}, not {value}")]
    NotAChoice {
        /// The rejected value
        value: String,
        /// The permitted choices
        choices: String,
    },

    /// A choice constraint was configured with no choices at all.
    #[error("no valid choices configured")]
    EmptyChoices,

    /// The value is smaller than the configured minimum.
    #[error("{value} must be at least {minimum}")]
    BelowMinimum {
        /// The rejected value
        value: String,
        /// The inclusive lower bound
        minimum: String,
    },

    /// The value is larger than the configured maximum.
    #[error("{value} must be at most {maximum}")]
    AboveMaximum {
        /// The rejected value
        value: String,
        /// The inclusive upper bound
        maximum: String,
    },

    /// A typed value was accessed as a different type than it holds.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// The type that was requested
        expected: &'static str,
        /// The type that is actually held
        found: &'static str,
    },

    /// A value kind rejected the input for its own reasons.
    #[error("{0}")]
    Rejected(String),
}

/// A single problem recorded against one key during schema conversion.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Problem {
    /// The schema declares the key but no value was supplied for it.
    #[error("config key not found")]
    NotFound,

    /// A value was supplied for a key the schema does not declare.
    #[error("unknown config key")]
    Unknown,

    /// The supplied value failed to deserialize.
    #[error(transparent)]
    Invalid(#[from] ValueError),
}

/// The aggregated error produced by schema conversion.
///
/// `ConfigError` maps each offending key to every problem recorded for it, so
/// a caller can inspect all failures of a section in one pass. Keys are kept
/// in sorted order.
///
/// # Examples
///
/// ```
/// use cfgschema::domain::errors::{ConfigError, Problem};
///
/// let mut error = ConfigError::new();
/// error.push("port", Problem::NotFound);
/// error.push("extra", Problem::Unknown);
///
/// assert!(error.contains_key("port"));
/// assert_eq!(error.messages("extra"), vec!["unknown config key".to_string()]);
/// assert_eq!(error.to_string(), "extra: unknown config key\nport: config key not found");
/// ```
#[derive(Debug, Default)]
pub struct ConfigError {
    problems: BTreeMap<String, Vec<Problem>>,
}

impl ConfigError {
    /// Creates an empty error with no recorded problems.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a problem for `key`, keeping any problems already recorded.
    pub fn push(&mut self, key: impl Into<String>, problem: Problem) {
        self.problems.entry(key.into()).or_default().push(problem);
    }

    /// Returns `true` if no problems have been recorded.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Returns the number of keys with at least one problem.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Returns `true` if at least one problem is recorded for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.problems.contains_key(key)
    }

    /// Returns the problems recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&[Problem]> {
        self.problems.get(key).map(Vec::as_slice)
    }

    /// Returns the rendered messages for `key`, or an empty list if the key
    /// has no problems.
    pub fn messages(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|problems| problems.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Iterates over the keys that have problems, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.problems.keys().map(String::as_str)
    }

    /// Iterates over every key together with its problems.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Problem])> {
        self.problems
            .iter()
            .map(|(key, problems)| (key.as_str(), problems.as_slice()))
    }

    /// Returns `Ok(value)` if nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, problems) in &self.problems {
            for problem in problems {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{}: {}", key, problem)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

impl IntoIterator for ConfigError {
    type Item = (String, Vec<Problem>);
    type IntoIter = btree_map::IntoIter<String, Vec<Problem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.problems.into_iter()
    }
}

/// A specialized Result type for schema operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
