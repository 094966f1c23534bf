use crate::error::VendorPathError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Character that delimits path components.
///
/// Always passed explicitly: the paths being handled may follow a different
/// convention than the host running the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
	/// `/`
	#[serde(alias = "/")]
	Slash,

	/// `\`
	#[serde(alias = "\\")]
	Backslash,
}

impl Separator {
	/// The separator as a character.
	pub fn as_char(self) -> char {
		match self {
			Separator::Slash => '/',
			Separator::Backslash => '\\',
		}
	}

	/// Name used in config files and on the command line.
	pub fn as_str(self) -> &'static str {
		match self {
			Separator::Slash => "slash",
			Separator::Backslash => "backslash",
		}
	}
}

impl fmt::Display for Separator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Separator {
	type Err = VendorPathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"slash" | "/" => Ok(Separator::Slash),
			"backslash" | "\\" => Ok(Separator::Backslash),
			_ => Err(VendorPathError::InvalidSeparator {
				value: s.to_string(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_separator_names_and_symbols() {
		assert_eq!("slash".parse::<Separator>().unwrap(), Separator::Slash);
		assert_eq!("/".parse::<Separator>().unwrap(), Separator::Slash);
		assert_eq!("Backslash".parse::<Separator>().unwrap(), Separator::Backslash);
		assert_eq!(r"\".parse::<Separator>().unwrap(), Separator::Backslash);
	}

	#[test]
	fn test_parse_invalid_separator() {
		match "colon".parse::<Separator>().unwrap_err() {
			VendorPathError::InvalidSeparator { value } => assert_eq!(value, "colon"),
			_ => panic!("Expected InvalidSeparator error"),
		}
	}

	#[test]
	fn test_separator_chars() {
		assert_eq!(Separator::Slash.as_char(), '/');
		assert_eq!(Separator::Backslash.as_char(), '\\');
		assert_eq!(Separator::Backslash.to_string(), "backslash");
	}
}
