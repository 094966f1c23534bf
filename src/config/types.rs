use crate::paths::{Platform, Separator};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.vendorpath.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// If true, stop directory cascade and jump directly to ~/.vendorpath.toml.
	#[serde(default)]
	pub root: bool,

	/// Separator used to split paths when none is given on the command line.
	#[serde(default)]
	pub separator: Option<Separator>,

	/// Platform whose reserved characters import paths are escaped for.
	#[serde(default)]
	pub platform: Option<Platform>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Effective settings after merging the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub separator: Separator,
	pub platform: Platform,

	/// Config file the separator came from, if any.
	pub separator_source: Option<PathBuf>,

	/// Config file the platform came from, if any.
	pub platform_source: Option<PathBuf>,
}

impl Default for Settings {
	fn default() -> Self {
		let platform = Platform::host();
		Settings {
			separator: platform.separator(),
			platform,
			separator_source: None,
			platform_source: None,
		}
	}
}
