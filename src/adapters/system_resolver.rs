// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operating system resolver adapter.
//!
//! This module provides the default [`HostResolver`], which asks the
//! platform resolver (`getaddrinfo` on Unix) for the addresses of a name.

use crate::ports::HostResolver;
use once_cell::sync::Lazy;
use std::io;
use std::net::ToSocketAddrs;
use std::sync::Arc;

/// The process-wide resolver used by hostname kinds that are not given one.
static SHARED: Lazy<Arc<SystemResolver>> = Lazy::new(|| Arc::new(SystemResolver::new()));

/// Resolves host names through the operating system.
///
/// IP literals resolve without a network lookup. Names may block on DNS;
/// no timeout is applied here.
///
/// # Examples
///
/// ```rust
/// use cfgschema::adapters::SystemResolver;
/// use cfgschema::ports::HostResolver;
///
/// let resolver = SystemResolver::new();
/// assert!(resolver.resolve("127.0.0.1").is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Creates a new system resolver.
    pub fn new() -> Self {
        SystemResolver
    }

    /// Returns the shared process-wide instance.
    pub fn shared() -> Arc<SystemResolver> {
        Arc::clone(&SHARED)
    }
}

impl HostResolver for SystemResolver {
    fn resolve(&self, host: &str) -> io::Result<()> {
        let mut addrs = (host, 0).to_socket_addrs()?;
        match addrs.next() {
            Some(addr) => {
                tracing::trace!("Resolved '{}' to {}", host, addr.ip());
                Ok(())
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses found for '{}'", host),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_ipv4_literal() {
        assert!(SystemResolver::new().resolve("127.0.0.1").is_ok());
    }

    #[test]
    fn test_resolves_ipv6_literal() {
        assert!(SystemResolver::new().resolve("::1").is_ok());
    }

    #[test]
    fn test_rejects_name_with_nul_byte() {
        assert!(SystemResolver::new().resolve("bad\0host").is_err());
    }

    #[test]
    fn test_shared_instance_is_reused() {
        let first = SystemResolver::shared();
        let second = SystemResolver::shared();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
