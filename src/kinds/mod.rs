// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value kinds for the supported configuration data types.
//!
//! Each kind implements the [`ValueKind`](crate::ports::ValueKind) port for
//! one data type and is configured through consuming builder methods.

pub mod boolean;
pub mod hostname;
pub mod integer;
pub mod list;
pub mod log_level;
pub mod port;
pub mod string;

pub use boolean::BooleanKind;
pub use hostname::HostnameKind;
pub use integer::IntegerKind;
pub use list::ListKind;
pub use log_level::LogLevelKind;
pub use port::PortKind;
pub use string::StringKind;
