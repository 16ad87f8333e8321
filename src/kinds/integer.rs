// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integer value kind.

use crate::domain::{validate_choice, validate_maximum, validate_minimum, Value, ValueError};
use crate::ports::ValueKind;

/// A base-10 signed integer with optional choices and inclusive bounds.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::Value;
/// use cfgschema::kinds::IntegerKind;
/// use cfgschema::ports::ValueKind;
///
/// let kind = IntegerKind::new().with_minimum(0).with_maximum(100);
/// assert_eq!(kind.deserialize("42").unwrap(), Value::Integer(42));
/// assert!(kind.deserialize("101").is_err());
/// assert!(kind.deserialize("3.14").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntegerKind {
    choices: Option<Vec<i64>>,
    minimum: Option<i64>,
    maximum: Option<i64>,
    secret: bool,
}

impl IntegerKind {
    /// Creates an unconstrained integer kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts values to the given choices.
    ///
    /// An empty set of choices rejects every value.
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = i64>) -> Self {
        self.choices = Some(choices.into_iter().collect());
        self
    }

    /// Sets the inclusive lower bound.
    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn with_maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Sets whether values are masked when formatted for display.
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    /// Returns the configured choices, if any.
    pub fn choices(&self) -> Option<&[i64]> {
        self.choices.as_deref()
    }

    /// Returns the inclusive lower bound, if any.
    pub fn minimum(&self) -> Option<i64> {
        self.minimum
    }

    /// Returns the inclusive upper bound, if any.
    pub fn maximum(&self) -> Option<i64> {
        self.maximum
    }

    /// Parses and validates `raw`, returning the bare integer.
    pub(crate) fn parse(&self, raw: &str) -> Result<i64, ValueError> {
        let raw = raw.trim();
        let value = raw
            .parse::<i64>()
            .map_err(|source| ValueError::InvalidInteger {
                raw: raw.to_string(),
                source,
            })?;
        validate_choice(&value, self.choices())?;
        validate_minimum(value, self.minimum)?;
        validate_maximum(value, self.maximum)?;
        Ok(value)
    }
}

impl ValueKind for IntegerKind {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
        self.parse(raw).map(Value::Integer)
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        value.as_integer().ok().map(|n| n.to_string())
    }

    fn is_secret(&self) -> bool {
        self.secret
    }
}
