// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boolean value kind.

use crate::domain::{Value, ValueError};
use crate::ports::ValueKind;

/// A boolean accepting the usual configuration spellings.
///
/// Recognizes the following values (case-insensitive):
/// - `true`: "1", "yes", "true", "on"
/// - `false`: "0", "no", "false", "off"
///
/// Serialization always produces `true` or `false`.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::Value;
/// use cfgschema::kinds::BooleanKind;
/// use cfgschema::ports::ValueKind;
///
/// let kind = BooleanKind::new();
/// let value = kind.deserialize("Yes").unwrap();
/// assert_eq!(value, Value::Boolean(true));
/// assert_eq!(kind.serialize(&value).as_deref(), Some("true"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BooleanKind {
    secret: bool,
}

impl BooleanKind {
    /// Creates a boolean kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether values are masked when formatted for display.
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }
}

impl ValueKind for BooleanKind {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
        let raw = raw.trim();
        match raw.to_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => Ok(Value::Boolean(true)),
            "0" | "no" | "false" | "off" => Ok(Value::Boolean(false)),
            _ => Err(ValueError::InvalidBoolean {
                raw: raw.to_string(),
            }),
        }
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        value.as_bool().ok().map(|b| b.to_string())
    }

    fn is_secret(&self) -> bool {
        self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    #[test]
    fn test_deserialize_converts_to_bool() {
        let kind = BooleanKind::new();
        for spelling in ["1", "yes", "true", "on"] {
            for variant in [spelling.to_string(), spelling.to_uppercase(), capitalize(spelling)] {
                assert_eq!(
                    kind.deserialize(&variant).unwrap(),
                    Value::Boolean(true),
                    "Failed for value: {}",
                    variant
                );
            }
        }
        for spelling in ["0", "no", "false", "off"] {
            for variant in [spelling.to_string(), spelling.to_uppercase(), capitalize(spelling)] {
                assert_eq!(
                    kind.deserialize(&variant).unwrap(),
                    Value::Boolean(false),
                    "Failed for value: {}",
                    variant
                );
            }
        }
    }

    #[test]
    fn test_deserialize_fails_on_bad_data() {
        let kind = BooleanKind::new();
        assert!(matches!(
            kind.deserialize("nope"),
            Err(ValueError::InvalidBoolean { .. })
        ));
        assert!(kind.deserialize("sure").is_err());
    }

    #[test]
    fn test_serialize_normalises_strings() {
        let kind = BooleanKind::new();
        assert_eq!(kind.serialize(&Value::Boolean(true)).as_deref(), Some("true"));
        assert_eq!(kind.serialize(&Value::Boolean(false)).as_deref(), Some("false"));
    }

    #[test]
    fn test_format_masks_secrets() {
        let kind = BooleanKind::new().secret(true);
        assert_eq!(
            kind.format(Some(&Value::Boolean(true))).as_deref(),
            Some("********")
        );
    }
}
