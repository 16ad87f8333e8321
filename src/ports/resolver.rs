// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host name resolution trait definition.
//!
//! The hostname value kind does not talk to the network itself. It asks a
//! `HostResolver` whether a name resolves, which keeps the lookup replaceable
//! in tests and in environments with their own resolver.

use std::fmt;
use std::io;

/// A trait for name-resolution facilities.
///
/// # Examples
///
/// ```rust
/// use cfgschema::ports::HostResolver;
/// use std::io;
///
/// #[derive(Debug)]
/// struct LocalOnly;
///
/// impl HostResolver for LocalOnly {
///     fn resolve(&self, host: &str) -> io::Result<()> {
///         if host == "localhost" {
///             Ok(())
///         } else {
///             Err(io::Error::new(io::ErrorKind::NotFound, "not local"))
///         }
///     }
/// }
///
/// assert!(LocalOnly.resolve("localhost").is_ok());
/// assert!(LocalOnly.resolve("example.com").is_err());
/// ```
pub trait HostResolver: fmt::Debug + Send + Sync {
    /// Checks that `host` resolves to at least one network address.
    ///
    /// No service or port is involved in the lookup. Any lookup failure is
    /// returned as an I/O error.
    fn resolve(&self, host: &str) -> io::Result<()>;
}
