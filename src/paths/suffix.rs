use crate::paths::Separator;
use tracing::{debug, trace};

/// Split `base` at the longest run of trailing components it shares with `suffix`.
///
/// Returns `(trimmed, common)`: `common` is the shared components of `base`
/// joined by `separator`, and `trimmed` is what precedes them without its
/// trailing separator. Components are compared whole and case-sensitively.
/// Trailing separators on either input are ignored, and matching stops at an
/// empty component, so the root of an absolute path is never part of `common`.
/// Exactly one separator sits between `trimmed` and `common` in `base`, so a
/// non-empty `trimmed` joined to `common` by `separator` gives back `base`.
///
/// When nothing matches, `common` is empty and `trimmed` is `base` unchanged.
/// Both values borrow from `base`.
///
/// ```
/// use vendor_paths::paths::{Separator, trim_common_suffix};
///
/// let (trimmed, common) = trim_common_suffix("/a/b/c", "/x/y/b/c", Separator::Slash);
/// assert_eq!(trimmed, "/a");
/// assert_eq!(common, "b/c");
/// ```
pub fn trim_common_suffix<'a>(
	base: &'a str,
	suffix: &str,
	separator: Separator,
) -> (&'a str, &'a str) {
	let sep = separator.as_char();
	let base_body = base.trim_end_matches(sep);
	let suffix_body = suffix.trim_end_matches(sep);

	// Byte offset in `base_body` where the matched components begin.
	let mut common_start = base_body.len();
	let mut matched = 0usize;

	for (left, right) in base_body.rsplit(sep).zip(suffix_body.rsplit(sep)) {
		if left.is_empty() || left != right {
			break;
		}
		let end = if matched == 0 {
			base_body.len()
		} else {
			common_start - sep.len_utf8()
		};
		common_start = end - left.len();
		matched += 1;
	}

	if matched == 0 {
		trace!(base, suffix, "no common suffix");
		return (base, "");
	}

	// Drop only the separator in front of the match; anything before it is content.
	let trimmed = if common_start == 0 {
		""
	} else {
		&base_body[..common_start - sep.len_utf8()]
	};
	let common = &base_body[common_start..];

	debug!(base, suffix, trimmed, common, components = matched, "trimmed common suffix");
	(trimmed, common)
}

/// Rebuild a path from the two halves returned by [`trim_common_suffix`].
///
/// When both halves are non-empty they are joined by one separator, which
/// yields `base` without trailing separators. An empty `trimmed` gives `common`
/// alone, so the leading separator of an absolute `base` is not restored.
pub fn join_trimmed(trimmed: &str, common: &str, separator: Separator) -> String {
	if common.is_empty() {
		return trimmed.to_string();
	}
	if trimmed.is_empty() {
		return common.to_string();
	}

	let mut joined = String::with_capacity(trimmed.len() + common.len() + 1);
	joined.push_str(trimmed);
	joined.push(separator.as_char());
	joined.push_str(common);
	joined
}

/// Find the directory under which `import_path` is laid out, given the package directory `dir`.
///
/// Returns `None` unless `dir` ends with every component of `import_path`.
/// When the import path covers all of `dir` (`"a/b"` or `"/a/b"` for import
/// path `"a/b"`) the root is `Some("")`, meaning the directory the path is
/// relative to.
pub fn vendor_root<'a>(dir: &'a str, import_path: &str, separator: Separator) -> Option<&'a str> {
	let wanted = import_path.trim_matches(separator.as_char());
	if wanted.is_empty() {
		return None;
	}

	let (root, common) = trim_common_suffix(dir, wanted, separator);
	if common == wanted {
		debug!(dir, import_path, root, "resolved vendor root");
		Some(root)
	} else {
		trace!(dir, import_path, common, "directory does not end with import path");
		None
	}
}
