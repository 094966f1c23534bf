use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, Settings};
use crate::error::{Result, VendorPathError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the config file looked up in each directory.
pub const CONFIG_FILE_NAME: &str = ".vendorpath.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.vendorpath.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.vendorpath.toml
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			let config = parse_config_file(&config_path)?;
			let stop = config.root;
			debug!(path = %config_path.display(), root = stop, "found config");

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if stop {
				break;
			}
		}

		current_dir = dir.parent();
	}

	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load the user's ~/.vendorpath.toml if it exists and wasn't already found by the walk.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	let user_config_path = user_config_path()?;

	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.is_file() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Merge multiple configs into effective settings.
///
/// For each key the first config in cascade order that sets it wins. The
/// platform defaults to the host, and the separator to the platform's own.
pub fn merge_configs(configs: &[LoadedConfig]) -> Settings {
	let platform = configs
		.iter()
		.find_map(|loaded| loaded.config.platform.map(|p| (p, &loaded.path)));
	let separator = configs
		.iter()
		.find_map(|loaded| loaded.config.separator.map(|s| (s, &loaded.path)));

	let mut settings = Settings::default();
	if let Some((platform, source)) = platform {
		settings.platform = platform;
		settings.separator = platform.separator();
		settings.platform_source = Some(source.clone());
	}
	if let Some((separator, source)) = separator {
		settings.separator = separator;
		settings.separator_source = Some(source.clone());
	}

	settings
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_settings(start_dir: &Path) -> Result<Settings> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(VendorPathError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
