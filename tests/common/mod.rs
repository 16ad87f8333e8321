// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock value kinds and resolvers shared by the integration tests.

use cfgschema::domain::{Value, ValueError};
use cfgschema::ports::{HostResolver, ValueKind};
use std::io;
use std::sync::Mutex;

/// A value kind with scripted results.
///
/// Deserialization passes the raw text through as a string unless a failure
/// message is set. Serialization returns the scripted output if one is set.
#[derive(Debug, Clone, Default)]
pub struct MockKind {
    failure: Option<String>,
    output: Option<String>,
    secret: bool,
}

#[allow(dead_code)]
impl MockKind {
    /// Creates a mock that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every deserialization fail with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Makes serialization return `output`.
    pub fn formatting_as(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Marks the mock as secret.
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

impl ValueKind for MockKind {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn deserialize(&self, raw: &str) -> Result<Value, ValueError> {
        match &self.failure {
            Some(message) => Err(ValueError::Rejected(message.clone())),
            None => Ok(Value::from(raw)),
        }
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        Some(self.output.clone().unwrap_or_else(|| value.to_string()))
    }

    fn is_secret(&self) -> bool {
        self.secret
    }
}

/// A resolver that records every lookup and optionally fails it.
#[derive(Debug, Default)]
pub struct RecordingResolver {
    fail: bool,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingResolver {
    /// Creates a resolver that accepts every name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver that rejects every name.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns the names looked up so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HostResolver for RecordingResolver {
    fn resolve(&self, host: &str) -> io::Result<()> {
        self.calls.lock().unwrap().push(host.to_string());
        if self.fail {
            Err(io::Error::new(io::ErrorKind::NotFound, "lookup failed"))
        } else {
            Ok(())
        }
    }
}

/// Installs a test subscriber so `tracing` output shows up in failing tests.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
