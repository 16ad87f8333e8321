// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text value kind.

use crate::domain::{validate_choice, Value, ValueError};
use crate::ports::ValueKind;

/// A text value with surrounding whitespace removed.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::Value;
/// use cfgschema::kinds::StringKind;
/// use cfgschema::ports::ValueKind;
///
/// let kind = StringKind::new().with_choices(["fast", "slow"]);
/// assert_eq!(kind.deserialize(" fast ").unwrap(), Value::from("fast"));
/// assert!(kind.deserialize("medium").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringKind {
    choices: Option<Vec<String>>,
    secret: bool,
}

impl StringKind {
    /// Creates an unconstrained string kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts values to the given choices.
    ///
    /// An empty set of choices rejects every value.
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether values are masked when formatted for display.
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    /// Returns the configured choices, if any.
    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }
}

impl ValueKind for StringKind {
    fn name(&self) -> &'static str {
        "string"
    }

    fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
        let value = raw.trim().to_string();
        validate_choice(&value, self.choices())?;
        Ok(Value::String(value))
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        value.as_str().ok().map(str::to_string)
    }

    fn is_secret(&self) -> bool {
        self.secret
    }
}
