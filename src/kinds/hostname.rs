// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hostname value kind.

use crate::adapters::SystemResolver;
use crate::domain::{Value, ValueError};
use crate::ports::{HostResolver, ValueKind};
use std::sync::Arc;

/// A host name or IP address that must resolve.
///
/// Resolution is delegated to a [`HostResolver`]; by default the shared
/// [`SystemResolver`]. Any resolver error fails deserialization.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::Value;
/// use cfgschema::kinds::HostnameKind;
/// use cfgschema::ports::ValueKind;
///
/// let kind = HostnameKind::new();
/// assert_eq!(kind.deserialize(" 127.0.0.1 ").unwrap(), Value::from("127.0.0.1"));
/// ```
#[derive(Debug, Clone)]
pub struct HostnameKind {
    resolver: Arc<dyn HostResolver>,
    secret: bool,
}

impl HostnameKind {
    /// Creates a hostname kind backed by the system resolver.
    pub fn new() -> Self {
        Self::with_resolver(SystemResolver::shared())
    }

    /// Creates a hostname kind backed by the given resolver.
    pub fn with_resolver(resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            resolver,
            secret: false,
        }
    }

    /// Sets whether values are masked when formatted for display.
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }
}

impl Default for HostnameKind {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueKind for HostnameKind {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
        let host = raw.trim();
        self.resolver.resolve(host).map_err(|source| {
            tracing::debug!("Failed to resolve hostname '{}': {}", host, source);
            ValueError::UnresolvableHost {
                host: host.to_string(),
                source,
            }
        })?;
        Ok(Value::String(host.to_string()))
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        value.as_str().ok().map(str::to_string)
    }

    fn is_secret(&self) -> bool {
        self.secret
    }
}
