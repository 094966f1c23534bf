//! vendor-paths - path helpers for dependency vendoring tools.
//!
//! This library provides:
//! - Longest common component suffix trimming, used to find a vendor root
//! - Parsing of environment listings in `set NAME=VALUE` and `NAME="VALUE"` form
//! - Escaping of import paths for platforms with reserved path characters
//! - Configuration file parsing and cascade discovery for the CLI
//!
//! # Example
//!
//! ```
//! use vendor_paths::paths::{Platform, Separator, lookup_env, vendor_root};
//!
//! let listing = "set GOARCH=amd64\r\nset GOPATH=C:\\Users\\dev\\go\r\n";
//! let gopath = lookup_env("GOPATH", listing).unwrap();
//! assert_eq!(gopath, r"C:\Users\dev\go");
//!
//! let dir = r"C:\Users\dev\go\src\example.com\mod\pkg";
//! let root = vendor_root(dir, r"example.com\mod\pkg", Separator::Backslash);
//! assert_eq!(root, Some(r"C:\Users\dev\go\src"));
//!
//! // Slashes are plain text when splitting on backslashes.
//! assert_eq!(vendor_root(dir, "example.com/mod/pkg", Separator::Backslash), None);
//!
//! let escaped = Platform::Windows.escape_import("example.com:8080/mod");
//! assert_eq!(escaped, "example.com_8080/mod");
//! ```

pub mod config;
pub mod error;
pub mod paths;

pub use error::{Result, VendorPathError};
