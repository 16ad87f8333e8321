// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema layer mapping configuration keys to value kinds.
//!
//! This module contains the [`ConfigSchema`] that converts and formats whole
//! configuration sections, its builder, and the extension section variant.

pub mod config_schema;
pub mod extension;

pub use config_schema::{ConfigSchema, ConfigSchemaBuilder};
pub use extension::ExtensionConfigSchema;
