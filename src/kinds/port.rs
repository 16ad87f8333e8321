// SPDX-License-Identifier: MIT OR Apache-2.0

//! Network port value kind.

use crate::domain::{Value, ValueError};
use crate::kinds::IntegerKind;
use crate::ports::ValueKind;

/// The lowest valid port number.
pub const MIN_PORT: i64 = 1;
/// The highest valid port number.
pub const MAX_PORT: i64 = 65535;

/// An integer restricted to the port range `1..=65535`.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::Value;
/// use cfgschema::kinds::PortKind;
/// use cfgschema::ports::ValueKind;
///
/// let kind = PortKind::new();
/// assert_eq!(kind.deserialize("6600").unwrap(), Value::Integer(6600));
/// assert!(kind.deserialize("0").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PortKind {
    inner: IntegerKind,
}

impl PortKind {
    /// Creates a port kind accepting any valid port.
    pub fn new() -> Self {
        Self {
            inner: IntegerKind::new()
                .with_minimum(MIN_PORT)
                .with_maximum(MAX_PORT),
        }
    }

    /// Restricts values to the given ports.
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = i64>) -> Self {
        self.inner = self.inner.with_choices(choices);
        self
    }

    /// Sets whether values are masked when formatted for display.
    pub fn secret(mut self, secret: bool) -> Self {
        self.inner = self.inner.secret(secret);
        self
    }
}

impl Default for PortKind {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueKind for PortKind {
    fn name(&self) -> &'static str {
        "port"
    }

    fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
        self.inner.parse(raw).map(Value::Integer)
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        self.inner.serialize(value)
    }

    fn is_secret(&self) -> bool {
        self.inner.is_secret()
    }
}
