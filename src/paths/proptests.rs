//! Property-based tests for the path helpers.

use crate::paths::{Platform, Separator, join_trimmed, parse_env_line, trim_common_suffix};
use proptest::prelude::*;

/// A path built from short, possibly empty components so that suffixes overlap often.
fn path_strategy(sep: char) -> impl Strategy<Value = String> {
	(
		any::<bool>(),
		prop::collection::vec("[ab]{0,2}", 0..6),
		any::<bool>(),
	)
		.prop_map(move |(absolute, parts, trailing)| {
			let mut path = String::new();
			if absolute {
				path.push(sep);
			}
			path.push_str(&parts.join(sep.to_string().as_str()));
			if trailing {
				path.push(sep);
			}
			path
		})
}

fn components(path: &str, sep: char) -> Vec<&str> {
	path.trim_end_matches(sep).split(sep).collect()
}

// ============================================================================
// trim_common_suffix
// ============================================================================

proptest! {
	/// Property: the two halves put back together give the original path
	#[test]
	fn trim_halves_rebuild_base(
		base in path_strategy('/'),
		suffix in path_strategy('/'),
	) {
		let (trimmed, common) = trim_common_suffix(&base, &suffix, Separator::Slash);
		let body = base.trim_end_matches('/');
		if common.is_empty() {
			prop_assert_eq!(trimmed, base.as_str());
		} else if trimmed.is_empty() {
			prop_assert!(body == common || body == format!("/{common}"), "base {:?}", base);
		} else {
			prop_assert_eq!(format!("{trimmed}/{common}"), body);
			prop_assert_eq!(join_trimmed(trimmed, common, Separator::Slash), body);
		}
	}

	/// Property: common is a component suffix of both inputs and cannot be extended
	#[test]
	fn trim_common_is_longest_shared_suffix(
		base in path_strategy('\\'),
		suffix in path_strategy('\\'),
	) {
		let (_, common) = trim_common_suffix(&base, &suffix, Separator::Backslash);
		let base_parts = components(&base, '\\');
		let suffix_parts = components(&suffix, '\\');
		let k = if common.is_empty() { 0 } else { common.split('\\').count() };

		prop_assert!(k <= base_parts.len() && k <= suffix_parts.len());
		let shared = &base_parts[base_parts.len() - k..];
		prop_assert_eq!(shared, &suffix_parts[suffix_parts.len() - k..]);
		prop_assert!(shared.iter().all(|part| !part.is_empty()));

		let next_base = base_parts.iter().rev().nth(k);
		let next_suffix = suffix_parts.iter().rev().nth(k);
		if let (Some(a), Some(b)) = (next_base, next_suffix) {
			prop_assert!(a.is_empty() || a != b, "suffix could be extended by {:?}", a);
		}
	}

	/// Property: a path always shares all of its components with itself
	#[test]
	fn trim_path_against_itself(parts in prop::collection::vec("[a-z]{1,5}", 1..6)) {
		let path = parts.join("/");
		prop_assert_eq!(trim_common_suffix(&path, &path, Separator::Slash), ("", path.as_str()));
	}
}

// ============================================================================
// Platform::escape_import
// ============================================================================

proptest! {
	/// Property: escaping twice is the same as escaping once
	#[test]
	fn escape_is_idempotent(path in ".*") {
		for platform in [Platform::Windows, Platform::Unix] {
			let once = platform.escape_import(&path).into_owned();
			let twice = platform.escape_import(&once).into_owned();
			prop_assert_eq!(once, twice);
		}
	}

	/// Property: no reserved characters survive after the drive prefix
	#[test]
	fn escape_windows_removes_reserved(path in "[a-zA-Z:?\\\\.0-9]{0,20}") {
		let escaped = Platform::Windows.escape_import(&path);
		let escaped: &str = &escaped;
		let has_drive = path.len() >= 2
			&& path.as_bytes()[0].is_ascii_alphabetic()
			&& path.as_bytes()[1] == b':';
		let body = if has_drive { &escaped[2..] } else { escaped };
		prop_assert!(!body.contains([':', '?']), "reserved char left in {:?}", escaped);
	}

	/// Property: substitution is one for one
	#[test]
	fn escape_preserves_char_count(path in ".*") {
		let escaped = Platform::Windows.escape_import(&path);
		prop_assert_eq!(escaped.chars().count(), path.chars().count());
	}

	/// Property: Unix escaping is the identity
	#[test]
	fn escape_unix_is_identity(path in ".*") {
		prop_assert_eq!(Platform::Unix.escape_import(&path), path.as_str());
	}
}

// ============================================================================
// parse_env_line
// ============================================================================

proptest! {
	/// Property: cmd.exe `set` lines give back the value verbatim
	#[test]
	fn env_cmd_set_value_verbatim(name in "[A-Z_][A-Z0-9_]{0,8}", value in "[^\r\n]*") {
		let line = format!("set {name}={value}");
		prop_assert_eq!(parse_env_line(&name, &line), Some(value.as_str()));
	}

	/// Property: double-quoted lines give back the text between the outer quotes
	#[test]
	fn env_quoted_value(name in "[A-Z_][A-Z0-9_]{0,8}", value in "[^\r\n]*") {
		let line = format!("{name}=\"{value}\"");
		prop_assert_eq!(parse_env_line(&name, &line), Some(value.as_str()));
	}

	/// Property: a line for another variable never matches
	#[test]
	fn env_other_name_never_matches(
		name in "[A-Z]{1,6}",
		other in "[a-z]{1,6}",
		value in "[^\r\n]*",
	) {
		let line = format!("set {other}={value}");
		prop_assert_eq!(parse_env_line(&name, &line), None);
	}
}
