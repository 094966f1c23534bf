//! Path and environment helpers for vendoring.
//!
//! This module handles:
//! - Longest common component suffix between a directory and an import path
//! - Reading variables out of `set NAME=VALUE` / `NAME="VALUE"` listings
//! - Escaping import paths for platforms with reserved path characters
//!
//! Nothing here touches the filesystem or reads global state; the separator and
//! platform are always passed in.

pub mod env;
pub mod escape;
pub mod separator;
pub mod suffix;

#[cfg(test)]
mod proptests;

pub use env::{EnvLine, EnvStyle, lookup_env, parse_env_line};
pub use escape::Platform;
pub use separator::Separator;
pub use suffix::{join_trimmed, trim_common_suffix, vendor_root};
