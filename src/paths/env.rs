use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// `set NAME=VALUE` (cmd.exe) or `NAME=VALUE`, with a shell-safe variable name.
static ENV_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(set )?([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("env line pattern is valid")
});

/// Output convention a line of an environment listing was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvStyle {
	/// `set NAME=VALUE`, value taken verbatim to end of line.
	CmdSet,

	/// `NAME="VALUE"` or `NAME='VALUE'`, surrounding quotes removed.
	Quoted,

	/// `NAME=VALUE` without quotes, value taken verbatim.
	Bare,
}

/// One parsed line of an environment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvLine<'a> {
	/// Variable name.
	pub name: &'a str,

	/// Value with form-specific decoration removed. May be empty.
	pub value: &'a str,

	/// Which convention the line used.
	pub style: EnvStyle,
}

impl<'a> EnvLine<'a> {
	/// Parse a single line. Returns `None` for lines without `=` or with an invalid name.
	pub fn parse(line: &'a str) -> Option<Self> {
		let captures = ENV_LINE.captures(line)?;
		let name = captures.get(2)?.as_str();
		let raw = captures.get(3).map_or("", |m| m.as_str());

		if captures.get(1).is_some() {
			return Some(EnvLine {
				name,
				value: raw,
				style: EnvStyle::CmdSet,
			});
		}

		let parsed = match unquote(raw) {
			Some(value) => EnvLine {
				name,
				value,
				style: EnvStyle::Quoted,
			},
			None => EnvLine {
				name,
				value: raw,
				style: EnvStyle::Bare,
			},
		};
		Some(parsed)
	}
}

/// Strip one pair of matching double or single quotes.
fn unquote(raw: &str) -> Option<&str> {
	['"', '\'']
		.into_iter()
		.find_map(|quote| raw.strip_prefix(quote)?.strip_suffix(quote))
}

/// Extract the value of `name` from one line of environment-listing output.
///
/// An empty value is still a match: `set GOROOT=` gives `Some("")`. A line for
/// another variable, or one that is not an assignment at all, gives `None`.
///
/// ```
/// use vendor_paths::paths::parse_env_line;
///
/// assert_eq!(parse_env_line("GOROOT", r"set GOROOT=C:\Go"), Some(r"C:\Go"));
/// assert_eq!(parse_env_line("GOROOT", r#"GOROOT="/usr/local/go""#), Some("/usr/local/go"));
/// assert_eq!(parse_env_line("GOROOT", "GOPATH=\"/go\""), None);
/// ```
pub fn parse_env_line<'a>(name: &str, line: &'a str) -> Option<&'a str> {
	let Some(parsed) = EnvLine::parse(line) else {
		trace!(line, "not an environment assignment");
		return None;
	};
	if parsed.name != name {
		return None;
	}
	Some(parsed.value)
}

/// Find `name` in a multi-line environment listing. The first matching line wins.
pub fn lookup_env<'a>(name: &str, listing: &'a str) -> Option<&'a str> {
	let value = listing
		.lines()
		.find_map(|line| parse_env_line(name, line));
	trace!(name, found = value.is_some(), "looked up environment variable");
	value
}
