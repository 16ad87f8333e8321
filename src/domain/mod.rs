// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and validation logic.
//!
//! This module contains the typed values, the error types and the shared
//! validation predicates. It has no knowledge of individual value kinds or
//! of how raw configuration text is obtained.

pub mod errors;
pub mod validation;
pub mod value;

// Re-export commonly used types
pub use errors::{ConfigError, Problem, Result, ValueError};
pub use validation::{validate_choice, validate_maximum, validate_minimum};
pub use value::{ConfigValues, Value};
