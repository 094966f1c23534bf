use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use vendor_paths::config::{
	Settings, discover_configs, load_settings, merge_configs, user_config_path,
};
use vendor_paths::paths::{Platform, Separator, lookup_env, trim_common_suffix, vendor_root};

#[derive(Parser)]
#[command(name = "vendorpath")]
#[command(
	author,
	version,
	about = "Path, environment and import-path helpers for dependency vendoring"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Split BASE into its own prefix and the trailing components it shares with SUFFIX
	Trim {
		base: String,
		suffix: String,

		/// Path separator: slash or backslash (defaults to config, then host)
		#[arg(long, value_name = "SEP")]
		separator: Option<Separator>,
	},

	/// Print the directory under which IMPORT_PATH is laid out in DIR
	Root {
		dir: String,
		import_path: String,

		/// Path separator: slash or backslash (defaults to config, then host)
		#[arg(long, value_name = "SEP")]
		separator: Option<Separator>,
	},

	/// Print the value of NAME from an environment listing read from stdin
	Env {
		name: String,

		/// Read the listing from a file instead of stdin
		#[arg(long, value_name = "PATH")]
		file: Option<PathBuf>,
	},

	/// Escape an import path so it can be used as a filesystem path
	Escape {
		path: String,

		/// Target platform: windows or unix (defaults to config, then host)
		#[arg(long)]
		platform: Option<Platform>,
	},

	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display config files in cascade order and the effective settings
	Show,
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Trim {
			base,
			suffix,
			separator,
		} => handle_trim(&base, &suffix, separator),
		Commands::Root {
			dir,
			import_path,
			separator,
		} => handle_root(&dir, &import_path, separator),
		Commands::Env { name, file } => handle_env(&name, file),
		Commands::Escape { path, platform } => handle_escape(&path, platform),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(),
		},
	}
}

fn current_settings() -> Result<Settings> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	load_settings(&cwd).context("Failed to load configuration")
}

fn resolve_separator(separator: Option<Separator>) -> Result<Separator> {
	match separator {
		Some(separator) => Ok(separator),
		None => Ok(current_settings()?.separator),
	}
}

fn handle_trim(base: &str, suffix: &str, separator: Option<Separator>) -> Result<ExitCode> {
	let separator = resolve_separator(separator)?;
	let (trimmed, common) = trim_common_suffix(base, suffix, separator);

	println!("trimmed: {}", trimmed);
	println!("common: {}", common);
	Ok(ExitCode::SUCCESS)
}

fn handle_root(dir: &str, import_path: &str, separator: Option<Separator>) -> Result<ExitCode> {
	let separator = resolve_separator(separator)?;

	match vendor_root(dir, import_path, separator) {
		Some(root) => {
			println!("{}", root);
			Ok(ExitCode::SUCCESS)
		}
		None => {
			eprintln!("{} does not end with import path {}", dir, import_path);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_env(name: &str, file: Option<PathBuf>) -> Result<ExitCode> {
	let listing = match file {
		Some(path) => std::fs::read_to_string(&path)
			.with_context(|| format!("Failed to read {}", path.display()))?,
		None => {
			let mut buffer = String::new();
			std::io::stdin()
				.read_to_string(&mut buffer)
				.context("Failed to read environment listing from stdin")?;
			buffer
		}
	};

	match lookup_env(name, &listing) {
		Some(value) => {
			println!("{}", value);
			Ok(ExitCode::SUCCESS)
		}
		None => {
			eprintln!("{} not found in environment listing", name);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_escape(path: &str, platform: Option<Platform>) -> Result<ExitCode> {
	let platform = match platform {
		Some(platform) => platform,
		None => current_settings()?.platform,
	};

	println!("{}", platform.escape_import(path));
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
	} else {
		println!("Configuration files (in cascade order):\n");
		for loaded in &configs {
			println!("# Source: {}", loaded.path.display());
			println!("# root: {}", loaded.config.root);
			if let Some(separator) = loaded.config.separator {
				println!("  separator: {}", separator);
			}
			if let Some(platform) = loaded.config.platform {
				println!("  platform: {}", platform);
			}
			println!();
		}
	}

	let settings = merge_configs(&configs);
	println!("Effective settings:");
	println!(
		"  separator: {} ({})",
		settings.separator,
		describe_source(settings.separator_source.as_ref(), "platform default")
	);
	println!(
		"  platform: {} ({})",
		settings.platform,
		describe_source(settings.platform_source.as_ref(), "host")
	);

	if let Ok(user_path) = user_config_path() {
		println!("\nUser config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn describe_source(source: Option<&PathBuf>, fallback: &str) -> String {
	match source {
		Some(path) => path.display().to_string(),
		None => fallback.to_string(),
	}
}
