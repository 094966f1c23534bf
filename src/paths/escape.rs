use crate::error::VendorPathError;
use crate::paths::Separator;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Filesystem convention whose reserved characters an import path must avoid.
///
/// Chosen explicitly by the caller, so escaping for one platform can be done
/// (and tested) on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	/// Drive-letter paths; `:` and `?` are reserved after the drive prefix.
	Windows,

	/// No reserved characters in import paths; escaping is the identity.
	#[serde(alias = "posix")]
	Unix,
}

impl Platform {
	/// The platform this binary was built for.
	pub fn host() -> Self {
		if cfg!(windows) {
			Platform::Windows
		} else {
			Platform::Unix
		}
	}

	/// Native path separator of the platform.
	pub fn separator(self) -> Separator {
		match self {
			Platform::Windows => Separator::Backslash,
			Platform::Unix => Separator::Slash,
		}
	}

	/// Characters legal in an import path but reserved in a path on this platform.
	pub fn reserved_chars(self) -> &'static [char] {
		match self {
			Platform::Windows => &[':', '?'],
			Platform::Unix => &[],
		}
	}

	/// Name used in config files and on the command line.
	pub fn as_str(self) -> &'static str {
		match self {
			Platform::Windows => "windows",
			Platform::Unix => "unix",
		}
	}

	/// Make `path` usable as a filesystem path on this platform.
	///
	/// On Windows a leading drive prefix (`C:`) is kept as is, and each `:` or
	/// `?` after it becomes `_`, one for one. On Unix the path is returned
	/// unchanged. Escaping an already escaped path changes nothing.
	///
	/// ```
	/// use vendor_paths::paths::Platform;
	///
	/// assert_eq!(
	///     Platform::Windows.escape_import(r"C:\Foo\Bar:Baz?Buzz"),
	///     r"C:\Foo\Bar_Baz_Buzz"
	/// );
	/// assert_eq!(Platform::Unix.escape_import("host:9000/pkg"), "host:9000/pkg");
	/// ```
	pub fn escape_import(self, path: &str) -> Cow<'_, str> {
		let reserved = match self {
			Platform::Unix => return Cow::Borrowed(path),
			Platform::Windows => self.reserved_chars(),
		};

		let (drive, rest) = split_drive(path);
		if !rest.contains(reserved) {
			return Cow::Borrowed(path);
		}

		let mut escaped = String::with_capacity(path.len());
		escaped.push_str(drive);
		escaped.extend(
			rest.chars()
				.map(|c| if reserved.contains(&c) { '_' } else { c }),
		);
		debug!(path, escaped = escaped.as_str(), platform = self.as_str(), "escaped import path");
		Cow::Owned(escaped)
	}
}

/// Split off a leading `<letter>:` drive prefix, if any.
fn split_drive(path: &str) -> (&str, &str) {
	match path.as_bytes() {
		[letter, b':', ..] if letter.is_ascii_alphabetic() => path.split_at(2),
		_ => ("", path),
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Platform {
	type Err = VendorPathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"windows" => Ok(Platform::Windows),
			"unix" | "posix" => Ok(Platform::Unix),
			_ => Err(VendorPathError::InvalidPlatform {
				value: s.to_string(),
			}),
		}
	}
}
