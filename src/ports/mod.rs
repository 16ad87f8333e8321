// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module defines the interfaces between the schema and its
//! collaborators: the value kinds it dispatches to and the resolver the
//! hostname kind depends on.

pub mod resolver;
pub mod value_kind;

// Re-export traits
pub use resolver::HostResolver;
pub use value_kind::{ValueKind, SECRET_MASK};
