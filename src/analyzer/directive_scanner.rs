//! Extraction of `+major`/`+minor`/`+patch` and `+meta=...` markers from free text.

use crate::domain::VersionBump;
use regex::Regex;
use std::sync::LazyLock;

static BUMP_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+(major|minor|patch)").expect("bump directive regex"));

static META_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+meta=([0-9A-Za-z\-.]+)").expect("meta directive regex"));

/// Find every bump directive in `text`, in order of occurrence.
///
/// Duplicates are kept: `"+minor ... +minor"` yields two entries.
pub fn scan_directives(text: &str) -> Vec<VersionBump> {
    BUMP_DIRECTIVE
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .filter_map(|keyword| VersionBump::from_keyword(keyword.as_str()))
        .collect()
}

/// Return the value of the first `+meta=<value>` marker in `text`.
pub fn scan_metadata(text: &str) -> Option<String> {
    META_DIRECTIVE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().to_string())
}
