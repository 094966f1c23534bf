use std::path::PathBuf;

/// Library-level structured errors for vendor-paths.
///
/// The path operations themselves never fail; these cover configuration and
/// value parsing. The CLI binary wraps them with `anyhow` for context chains.
#[derive(Debug, thiserror::Error)]
pub enum VendorPathError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid path separator: {value} (expected \"slash\" or \"backslash\")")]
	InvalidSeparator { value: String },

	#[error("Invalid platform: {value} (expected \"windows\" or \"unix\")")]
	InvalidPlatform { value: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using VendorPathError.
pub type Result<T> = std::result::Result<T, VendorPathError>;
