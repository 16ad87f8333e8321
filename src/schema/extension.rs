// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema for extension configuration sections.

use crate::kinds::BooleanKind;
use crate::schema::{ConfigSchema, ConfigSchemaBuilder};

/// Factory for the schemas of pluggable extension sections.
///
/// Every extension section carries a boolean `enabled` toggle, and its
/// section header lives under the `ext` namespace.
///
/// # Examples
///
/// ```rust
/// use cfgschema::kinds::StringKind;
/// use cfgschema::schema::ExtensionConfigSchema;
///
/// let schema = ExtensionConfigSchema::builder()
///     .with_key("username", StringKind::new())
///     .build();
///
/// assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["enabled", "username"]);
/// assert_eq!(schema.section_header("spotify"), "[ext.spotify]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExtensionConfigSchema;

impl ExtensionConfigSchema {
    /// Namespace prefixed to extension section names.
    pub const NAMESPACE: &'static str = "ext";

    /// The key every extension section declares.
    pub const ENABLED_KEY: &'static str = "enabled";

    /// Creates a builder pre-populated with the `enabled` key.
    pub fn builder() -> ConfigSchemaBuilder {
        ConfigSchemaBuilder::new()
            .namespace(Self::NAMESPACE)
            .with_reserved_key(Self::ENABLED_KEY, BooleanKind::new())
    }

    /// Creates a schema that declares only the `enabled` key.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ConfigSchema {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigValues, Value};
    use crate::kinds::StringKind;

    #[test]
    fn test_schema_includes_enabled() {
        let schema = ExtensionConfigSchema::new();
        assert_eq!(schema.get("enabled").map(|k| k.name()), Some("boolean"));
    }

    #[test]
    fn test_enabled_stays_boolean() {
        let schema = ExtensionConfigSchema::builder()
            .with_key("enabled", StringKind::new())
            .build();
        assert_eq!(schema.get("enabled").map(|k| k.name()), Some("boolean"));
    }

    #[test]
    fn test_section_name_is_prefixed() {
        let schema = ExtensionConfigSchema::new();
        assert_eq!(schema.format("foo", &ConfigValues::new()), "[ext.foo]");
    }

    #[test]
    fn test_convert_enabled() {
        let values = ExtensionConfigSchema::new()
            .convert([("enabled", "off")])
            .unwrap();
        assert_eq!(values["enabled"], Some(Value::Boolean(false)));
    }
}
