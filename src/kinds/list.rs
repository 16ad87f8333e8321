// SPDX-License-Identifier: MIT OR Apache-2.0

//! List value kind.

use crate::domain::{Value, ValueError};
use crate::ports::ValueKind;

/// An ordered list of text entries.
///
/// Raw text containing a newline anywhere, even a leading or trailing one, is
/// split into lines; otherwise it is split on commas. Entries are trimmed and
/// empty entries are dropped, so a line may itself contain commas once the
/// value spans several lines.
///
/// Serialization writes every entry on its own indented line after a leading
/// newline, which reads naturally as a continued `key =` line.
///
/// Serializing and then deserializing normalizes a list: entries come back
/// trimmed, empty entries are gone, and an entry containing a newline comes
/// back as several entries.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::Value;
/// use cfgschema::kinds::ListKind;
/// use cfgschema::ports::ValueKind;
///
/// let kind = ListKind::new();
/// let value = kind.deserialize("foo, bar,baz").unwrap();
/// assert_eq!(value.as_list().unwrap(), ["foo", "bar", "baz"]);
/// assert_eq!(kind.serialize(&value).as_deref(), Some("\n  foo\n  bar\n  baz"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListKind {
    secret: bool,
}

impl ListKind {
    /// Creates a list kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether values are masked when formatted for display.
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }
}

impl ValueKind for ListKind {
    fn name(&self) -> &'static str {
        "list"
    }

    fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
        let separator = if raw.contains('\n') { '\n' } else { ',' };
        let entries = raw
            .split(separator)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Value::List(entries))
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        let entries = value.as_list().ok()?;
        Some(entries.iter().map(|entry| format!("\n  {}", entry)).collect())
    }

    fn is_secret(&self) -> bool {
        self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> Value {
        Value::List(entries.iter().map(|e| e.to_string()).collect())
    }

    #[test]
    fn test_deserialize_splits_commas() {
        let kind = ListKind::new();
        assert_eq!(
            kind.deserialize("foo, bar,baz").unwrap(),
            list(&["foo", "bar", "baz"])
        );
    }

    #[test]
    fn test_deserialize_splits_newlines() {
        let kind = ListKind::new();
        assert_eq!(
            kind.deserialize("foo,bar\nbar\nbaz").unwrap(),
            list(&["foo,bar", "bar", "baz"])
        );
    }

    #[test]
    fn test_deserialize_drops_empty_entries() {
        let kind = ListKind::new();
        assert_eq!(kind.deserialize("foo,,bar,").unwrap(), list(&["foo", "bar"]));
        assert_eq!(
            kind.deserialize("\n  foo\n\n  bar\n").unwrap(),
            list(&["foo", "bar"])
        );
    }

    #[test]
    fn test_serialize_joins_by_newlines() {
        let kind = ListKind::new();
        let text = kind.serialize(&list(&["foo", "bar", "baz"])).unwrap();
        assert_eq!(text, "\n  foo\n  bar\n  baz");
    }

    #[test]
    fn test_single_entry_with_comma_survives_serialization() {
        let kind = ListKind::new();
        let value = list(&["foo,bar"]);
        let text = kind.serialize(&value).unwrap();
        assert_eq!(kind.deserialize(&text).unwrap(), value);
    }

    #[test]
    fn test_serialization_normalizes_entries() {
        let kind = ListKind::new();
        let text = kind.serialize(&list(&[" a", "", "b ", "c\nd"])).unwrap();
        assert_eq!(kind.deserialize(&text).unwrap(), list(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_format_masks_secrets() {
        let kind = ListKind::new().secret(true);
        assert_eq!(kind.format(Some(&list(&["a"]))).as_deref(), Some("********"));
    }
}
