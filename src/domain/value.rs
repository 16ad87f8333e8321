// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration values.
//!
//! This module provides the [`Value`] type produced by value kinds when raw
//! configuration text is deserialized, along with the [`ConfigValues`]
//! mapping returned by schema conversion.

use crate::domain::errors::ValueError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The typed result of converting one configuration section.
///
/// Every declared key maps to `Some(value)`, or to `None` when the raw value
/// was blank.
pub type ConfigValues = BTreeMap<String, Option<Value>>;

/// A typed configuration value.
///
/// # Examples
///
/// ```
/// use cfgschema::domain::Value;
///
/// let value = Value::Integer(6600);
/// assert_eq!(value.as_integer().unwrap(), 6600);
/// assert!(value.as_bool().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// A text value.
    String(String),
    /// A signed integer value.
    Integer(i64),
    /// A boolean value.
    Boolean(bool),
    /// An ordered list of text entries.
    List(Vec<String>),
    /// A numeric log severity.
    LogLevel(u32),
}

impl Value {
    /// Returns the name of the type this value holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgschema::domain::Value;
    ///
    /// assert_eq!(Value::Boolean(true).type_name(), "boolean");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
            Value::LogLevel(_) => "log level",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }

    /// Returns the value as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgschema::domain::Value;
    ///
    /// let value = Value::String("localhost".to_string());
    /// assert_eq!(value.as_str().unwrap(), "localhost");
    /// ```
    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// Returns the value as an integer.
    pub fn as_integer(&self) -> Result<i64, ValueError> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(other.mismatch("integer")),
        }
    }

    /// Returns the value as a boolean.
    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Returns the value as a slice of list entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgschema::domain::Value;
    ///
    /// let value = Value::List(vec!["foo".to_string(), "bar".to_string()]);
    /// assert_eq!(value.as_list().unwrap(), ["foo", "bar"]);
    /// ```
    pub fn as_list(&self) -> Result<&[String], ValueError> {
        match self {
            Value::List(entries) => Ok(entries),
            other => Err(other.mismatch("list")),
        }
    }

    /// Returns the value as a numeric log severity.
    pub fn as_log_level(&self) -> Result<u32, ValueError> {
        match self {
            Value::LogLevel(level) => Ok(*level),
            other => Err(other.mismatch("log level")),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(entries: Vec<String>) -> Self {
        Value::List(entries)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::List(entries) => write!(f, "{}", entries.join(", ")),
            Value::LogLevel(level) => write!(f, "{}", level),
        }
    }
}
