// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration schema and its builder.
//!
//! A [`ConfigSchema`] declares, for one configuration section, which keys
//! exist and which [`ValueKind`] governs each of them. It converts raw
//! `(key, value)` pairs into typed values, collecting every problem across
//! the whole section into a single [`ConfigError`].

use crate::domain::{ConfigError, ConfigValues, Problem, Result};
use crate::ports::ValueKind;
use std::fmt;

/// An immutable, ordered mapping from key name to value kind.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::Value;
/// use cfgschema::kinds::{HostnameKind, PortKind, StringKind};
/// use cfgschema::schema::ConfigSchema;
///
/// let schema = ConfigSchema::builder()
///     .with_key("hostname", HostnameKind::new())
///     .with_key("port", PortKind::new())
///     .with_key("password", StringKind::new().secret(true))
///     .build();
///
/// let values = schema
///     .convert([("hostname", "127.0.0.1"), ("port", "6600"), ("password", "")])
///     .unwrap();
/// assert_eq!(values["port"], Some(Value::Integer(6600)));
/// assert_eq!(values["password"], None);
///
/// assert_eq!(
///     schema.format("server", &values),
///     "[server]\nhostname = 127.0.0.1\nport = 6600\npassword = ********"
/// );
/// ```
pub struct ConfigSchema {
    namespace: Option<String>,
    entries: Vec<(String, Box<dyn ValueKind>)>,
}

impl ConfigSchema {
    /// Creates a new schema builder.
    pub fn builder() -> ConfigSchemaBuilder {
        ConfigSchemaBuilder::new()
    }

    /// Returns the namespace prefixed to section names, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the value kind declared for `key`.
    pub fn get(&self, key: &str) -> Option<&dyn ValueKind> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, kind)| kind.as_ref())
    }

    /// Returns `true` if the schema declares `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of declared keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the schema declares no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the bracketed section header for `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfgschema::schema::ConfigSchema;
    ///
    /// assert_eq!(ConfigSchema::builder().build().section_header("audio"), "[audio]");
    /// ```
    pub fn section_header(&self, name: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("[{}.{}]", namespace, name),
            None => format!("[{}]", name),
        }
    }

    /// Converts raw `(key, value)` pairs into typed values.
    ///
    /// A blank value becomes `None` without being deserialized. A declared
    /// key with no pair is reported as not found; a pair for an undeclared
    /// key is reported as unknown and never deserialized; a failed
    /// deserialization is reported with its message. Every pair is processed
    /// before returning, so the error lists all problems of the section.
    ///
    /// When a key appears more than once, the last successfully converted
    /// value wins and the failures of every occurrence are reported. An
    /// undeclared key is reported as unknown once, however often it appears.
    pub fn convert<I, K, V>(&self, pairs: I) -> Result<ConfigValues>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values = ConfigValues::new();
        let mut errors = ConfigError::new();

        for (key, raw) in pairs {
            let (key, raw) = (key.as_ref(), raw.as_ref());
            let Some(kind) = self.get(key) else {
                // An undeclared key only ever collects `Unknown`.
                if !errors.contains_key(key) {
                    tracing::debug!("Unknown config key '{}'", key);
                    errors.push(key, Problem::Unknown);
                }
                continue;
            };

            if raw.trim().is_empty() {
                values.insert(key.to_string(), None);
                continue;
            }

            match kind.deserialize(raw) {
                Ok(value) => {
                    values.insert(key.to_string(), Some(value));
                }
                Err(e) => {
                    tracing::debug!("Failed to convert config key '{}': {}", key, e);
                    errors.push(key, Problem::Invalid(e));
                }
            }
        }

        for key in self.keys() {
            if !values.contains_key(key) && !errors.contains_key(key) {
                tracing::debug!("Config key '{}' not found", key);
                errors.push(key, Problem::NotFound);
            }
        }

        errors.into_result(values)
    }

    /// Renders `values` as a configuration section for display.
    ///
    /// Output starts with the section header, followed by one `key = value`
    /// line per declared key present in `values`, in declaration order.
    /// Values are rendered with [`ValueKind::format`], so secrets are masked.
    /// Unset values render as `key =`, as do values the kind has no textual
    /// form for. Keys not declared by the schema are left out.
    pub fn format(&self, name: &str, values: &ConfigValues) -> String {
        let mut lines = vec![self.section_header(name)];
        for (key, kind) in &self.entries {
            let Some(value) = values.get(key) else {
                continue;
            };
            let line = match kind.format(value.as_ref()) {
                Some(text) if text.is_empty() || text.starts_with('\n') => {
                    format!("{} ={}", key, text)
                }
                Some(text) => format!("{} = {}", key, text),
                None => {
                    if value.is_some() {
                        tracing::debug!(
                            "Config key '{}' has no textual form for kind '{}'",
                            key,
                            kind.name()
                        );
                    }
                    format!("{} =", key)
                }
            };
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl fmt::Debug for ConfigSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigSchema")
            .field("namespace", &self.namespace)
            .field(
                "keys",
                &self
                    .entries
                    .iter()
                    .map(|(name, kind)| (name.as_str(), kind.name()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for creating a [`ConfigSchema`].
///
/// Binding a key that is already declared replaces its kind and keeps its
/// position. Reserved keys cannot be rebound.
///
/// # Examples
///
/// ```rust
/// use cfgschema::kinds::{IntegerKind, StringKind};
/// use cfgschema::schema::ConfigSchemaBuilder;
///
/// let schema = ConfigSchemaBuilder::new()
///     .with_key("volume", StringKind::new())
///     .with_key("volume", IntegerKind::new().with_maximum(100))
///     .build();
///
/// assert_eq!(schema.len(), 1);
/// assert_eq!(schema.get("volume").map(|kind| kind.name()), Some("integer"));
/// ```
#[derive(Default)]
pub struct ConfigSchemaBuilder {
    namespace: Option<String>,
    entries: Vec<(String, Box<dyn ValueKind>)>,
    reserved: Vec<String>,
}

impl ConfigSchemaBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace prefixed to section names in headers.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Declares `key` with the given value kind.
    pub fn with_key(self, key: impl Into<String>, kind: impl ValueKind + 'static) -> Self {
        self.with_boxed_key(key, Box::new(kind))
    }

    /// Declares `key` with an already boxed value kind.
    pub fn with_boxed_key(mut self, key: impl Into<String>, kind: Box<dyn ValueKind>) -> Self {
        let key = key.into();
        if self.reserved.contains(&key) {
            tracing::warn!("Ignoring attempt to rebind reserved config key '{}'", key);
            return self;
        }
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => entry.1 = kind,
            None => self.entries.push((key, kind)),
        }
        self
    }

    /// Declares `key` with the given kind and prevents later rebinding.
    pub fn with_reserved_key(
        mut self,
        key: impl Into<String>,
        kind: impl ValueKind + 'static,
    ) -> Self {
        let key = key.into();
        self = self.with_key(key.clone(), kind);
        if !self.reserved.contains(&key) {
            self.reserved.push(key);
        }
        self
    }

    /// Builds the schema.
    pub fn build(self) -> ConfigSchema {
        ConfigSchema {
            namespace: self.namespace,
            entries: self.entries,
        }
    }
}
