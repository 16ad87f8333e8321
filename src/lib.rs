// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration value kinds and schemas.
//!
//! This crate turns flat raw `(key, value)` text pairs, as produced by any
//! configuration file parser, environment reader or command-line merger, into
//! well-typed, bounded values. Problems are never reported one at a time: a
//! conversion collects every missing, unknown and invalid key of a section
//! into a single [`ConfigError`](domain::ConfigError).
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Typed values, errors and validation predicates (`Value`, `ConfigError`)
//! - **Ports**: Trait definitions for collaborators (`ValueKind`, `HostResolver`)
//! - **Kinds**: One `ValueKind` per data type (string, integer, boolean, list, log level,
//!   hostname, port)
//! - **Adapters**: The operating system resolver used by the hostname kind
//! - **Schema**: `ConfigSchema`, which converts and formats whole sections
//!
//! # Quick Start
//!
//! ```rust
//! use cfgschema::prelude::*;
//!
//! let schema = ConfigSchema::builder()
//!     .with_key("port", PortKind::new())
//!     .with_key("mixer", StringKind::new().with_choices(["software", "hardware"]))
//!     .with_key("loglevel", LogLevelKind::new())
//!     .build();
//!
//! let error = schema
//!     .convert([("port", "70000"), ("mixer", "software"), ("colour", "blue")])
//!     .unwrap_err();
//!
//! assert!(error.contains_key("port"));
//! assert!(error.contains_key("colour"));
//! assert_eq!(error.messages("loglevel"), vec!["config key not found".to_string()]);
//! assert!(!error.contains_key("mixer"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod kinds;
pub mod ports;
pub mod schema;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, ConfigValues, Problem, Result, Value, ValueError};
    pub use crate::kinds::{
        BooleanKind, HostnameKind, IntegerKind, ListKind, LogLevelKind, PortKind, StringKind,
    };
    pub use crate::ports::{HostResolver, ValueKind};
    pub use crate::schema::{ConfigSchema, ConfigSchemaBuilder, ExtensionConfigSchema};
}
