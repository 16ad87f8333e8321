// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of external collaborators.
//!
//! This module contains concrete implementations of the collaborator traits
//! defined in the ports layer.

pub mod system_resolver;

pub use system_resolver::SystemResolver;
