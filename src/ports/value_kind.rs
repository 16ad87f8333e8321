// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value kind trait definition.
//!
//! This module defines the `ValueKind` trait, the port every configuration
//! data type implements. A schema binds each key to one `ValueKind` and uses
//! it to turn raw text into a typed [`Value`] and back.

use crate::domain::{Value, ValueError};
use std::fmt;

/// The fixed placeholder shown instead of a secret value.
pub const SECRET_MASK: &str = "********";

/// A typed converter and validator for one configuration data type.
///
/// Implementations are immutable once constructed and are shared by every
/// conversion that uses the schema they belong to.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::{Value, ValueError};
/// use cfgschema::ports::ValueKind;
///
/// #[derive(Debug)]
/// struct Uppercase;
///
/// impl ValueKind for Uppercase {
///     fn name(&self) -> &'static str {
///         "uppercase"
///     }
///
///     fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
///         Ok(Value::String(raw.trim().to_uppercase()))
///     }
///
///     fn serialize(&self, value: &Value) -> Option<String> {
///         value.as_str().ok().map(str::to_string)
///     }
/// }
///
/// let kind = Uppercase;
/// assert_eq!(kind.deserialize(" abc ").unwrap(), Value::from("ABC"));
/// assert_eq!(kind.format(Some(&Value::from("ABC"))), Some("ABC".to_string()));
/// ```
pub trait ValueKind: fmt::Debug + Send + Sync {
    /// Returns a short name for this kind, such as `"integer"`.
    fn name(&self) -> &'static str;

    /// Converts raw configuration text into a typed value.
    ///
    /// Fails when the text cannot be converted to the kind's type or when the
    /// converted value violates a configured constraint.
    fn deserialize(&self, raw: &str) -> Result<Value, ValueError>;

    /// Renders a typed value in its canonical textual form.
    ///
    /// Returns `None` when the value has no textual form for this kind, for
    /// example an unknown log severity or a value of another kind's type.
    fn serialize(&self, value: &Value) -> Option<String>;

    /// Returns `true` if values of this kind must be masked for display.
    fn is_secret(&self) -> bool {
        false
    }

    /// Renders a value for display.
    ///
    /// Secret kinds always return [`SECRET_MASK`] without serializing, even
    /// for an unset value. Otherwise this is [`serialize`](Self::serialize),
    /// with an unset value rendering as `None`.
    fn format(&self, value: Option<&Value>) -> Option<String> {
        if self.is_secret() {
            return Some(SECRET_MASK.to_string());
        }
        value.and_then(|value| self.serialize(value))
    }
}
