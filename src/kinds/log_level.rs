// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log level value kind.
//!
//! Levels are stored as numeric severities on the conventional scale, with
//! higher numbers being more severe.

use crate::domain::{Value, ValueError};
use crate::ports::ValueKind;
use tracing::Level;

/// Severity of the `critical` level.
pub const CRITICAL: u32 = 50;
/// Severity of the `error` level.
pub const ERROR: u32 = 40;
/// Severity of the `warning` level.
pub const WARNING: u32 = 30;
/// Severity of the `info` level.
pub const INFO: u32 = 20;
/// Severity of the `debug` level.
pub const DEBUG: u32 = 10;

const LEVELS: [(&str, u32); 5] = [
    ("critical", CRITICAL),
    ("error", ERROR),
    ("warning", WARNING),
    ("info", INFO),
    ("debug", DEBUG),
];

/// Maps a numeric severity to the closest `tracing` level.
///
/// Returns `None` for severities that have no level name.
///
/// # Examples
///
/// ```rust
/// use cfgschema::kinds::log_level::{tracing_level, CRITICAL, WARNING};
/// use tracing::Level;
///
/// assert_eq!(tracing_level(WARNING), Some(Level::WARN));
/// assert_eq!(tracing_level(CRITICAL), Some(Level::ERROR));
/// assert_eq!(tracing_level(1337), None);
/// ```
pub fn tracing_level(severity: u32) -> Option<Level> {
    match severity {
        CRITICAL | ERROR => Some(Level::ERROR),
        WARNING => Some(Level::WARN),
        INFO => Some(Level::INFO),
        DEBUG => Some(Level::DEBUG),
        _ => None,
    }
}

/// A log level given by name and stored as a numeric severity.
///
/// Names are matched case-insensitively. Serializing a severity without a
/// name yields no value rather than an error.
///
/// # Examples
///
/// ```rust
/// use cfgschema::domain::Value;
/// use cfgschema::kinds::LogLevelKind;
/// use cfgschema::ports::ValueKind;
///
/// let kind = LogLevelKind::new();
/// assert_eq!(kind.deserialize("WARNING").unwrap(), Value::LogLevel(30));
/// assert_eq!(kind.serialize(&Value::LogLevel(30)).as_deref(), Some("warning"));
/// assert_eq!(kind.serialize(&Value::LogLevel(1337)), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogLevelKind {
    secret: bool,
}

impl LogLevelKind {
    /// Creates a log level kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether values are masked when formatted for display.
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }
}

impl ValueKind for LogLevelKind {
    fn name(&self) -> &'static str {
        "log level"
    }

    fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
        let raw = raw.trim();
        let name = raw.to_lowercase();
        LEVELS
            .iter()
            .find(|(level_name, _)| *level_name == name)
            .map(|(_, severity)| Value::LogLevel(*severity))
            .ok_or_else(|| ValueError::InvalidLogLevel {
                raw: raw.to_string(),
            })
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        let severity = value.as_log_level().ok()?;
        LEVELS
            .iter()
            .find(|(_, level)| *level == severity)
            .map(|(name, _)| name.to_string())
    }

    fn is_secret(&self) -> bool {
        self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_converts_to_numeric_loglevel() {
        let kind = LogLevelKind::new();
        for (name, severity) in LEVELS {
            let capitalized = format!("{}{}", name[..1].to_uppercase(), &name[1..]);
            for variant in [name.to_string(), name.to_uppercase(), capitalized] {
                assert_eq!(
                    kind.deserialize(&variant).unwrap(),
                    Value::LogLevel(severity),
                    "Failed for value: {}",
                    variant
                );
            }
        }
    }

    #[test]
    fn test_deserialize_fails_on_bad_data() {
        let kind = LogLevelKind::new();
        assert!(matches!(
            kind.deserialize("nope"),
            Err(ValueError::InvalidLogLevel { .. })
        ));
        assert!(kind.deserialize("sure").is_err());
    }

    #[test]
    fn test_serialize_converts_to_string() {
        let kind = LogLevelKind::new();
        for (name, severity) in LEVELS {
            assert_eq!(kind.serialize(&Value::LogLevel(severity)).as_deref(), Some(name));
        }
    }

    #[test]
    fn test_serialize_unknown_level() {
        let kind = LogLevelKind::new();
        assert_eq!(kind.serialize(&Value::LogLevel(1337)), None);
        assert_eq!(kind.format(Some(&Value::LogLevel(1337))), None);
    }

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(tracing_level(ERROR), Some(Level::ERROR));
        assert_eq!(tracing_level(INFO), Some(Level::INFO));
        assert_eq!(tracing_level(DEBUG), Some(Level::DEBUG));
        assert_eq!(tracing_level(0), None);
    }

    #[test]
    fn test_format_masks_secrets() {
        let kind = LogLevelKind::new().secret(true);
        assert_eq!(
            kind.format(Some(&Value::LogLevel(INFO))).as_deref(),
            Some("********")
        );
    }
}
