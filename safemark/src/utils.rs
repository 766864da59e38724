//! Small shared helpers.
use std::sync::LazyLock;

use regex::Regex;

/// Characters removed from slug input: anything outside lowercase ASCII
/// letters, digits, whitespace and dashes.
static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[^a-z0-9\s-]").unwrap_or_else(|e| {
    log::error!("failed to compile NON_SLUG_RE regex: {e}");
    never_matching_regex()
  })
});

/// Runs of whitespace, collapsed to a single dash in slugs.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\s+").unwrap_or_else(|e| {
    log::error!("failed to compile WHITESPACE_RE regex: {e}");
    never_matching_regex()
  })
});

/// Slugify heading text for use as an anchor ID.
///
/// ASCII-only policy: the text is lowercased, everything outside
/// `[a-z0-9 -]` is removed (including non-ASCII letters), whitespace
/// runs collapse to a single `-` and leading/trailing dashes are
/// trimmed.
#[must_use]
pub fn slugify(text: &str) -> String {
  let lowered = text.to_lowercase();
  let stripped = NON_SLUG_RE.replace_all(&lowered, "");
  let dashed = WHITESPACE_RE.replace_all(&stripped, "-");
  dashed.trim_matches('-').to_string()
}

/// Regex that can never match, used as a fallback when a static pattern
/// fails to compile.
pub(crate) fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "the pattern [^\\s\\S] is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}
