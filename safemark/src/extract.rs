//! Structural extraction over raw Markdown source.
//!
//! Both scans here run on the original Markdown text, never on generated
//! HTML: ATX headings become table-of-contents entries and fenced blocks
//! become code records. The scans are independent, stateless and
//! tolerate any input; malformed structure yields fewer results, not
//! errors.
use std::sync::LazyLock;

use regex::Regex;

use crate::{
  types::{CodeBlock, TocEntry},
  utils,
};

/// ATX-style heading: 1-6 `#` at line start, at least one space or tab,
/// then the heading text to end of line. Setext (underlined) headings
/// are not recognized.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)$").unwrap_or_else(|e| {
    log::error!("failed to compile HEADING_RE regex: {e}");
    utils::never_matching_regex()
  })
});

/// Fenced code block: a line of three backticks with an optional
/// word-character info string, up to the next line starting with three
/// backticks.
static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?ms)^```(\w*)\n(.*?)^```").unwrap_or_else(|e| {
    log::error!("failed to compile CODE_BLOCK_RE regex: {e}");
    utils::never_matching_regex()
  })
});

/// Extract table-of-contents entries from ATX headings, in document
/// order. Nothing is skipped or deduplicated; two identical headings
/// produce two identical slugs.
#[must_use]
pub fn toc(source: &str) -> Vec<TocEntry> {
  HEADING_RE
    .captures_iter(source)
    .map(|caps| {
      let level = u8::try_from(caps[1].len()).unwrap_or(6);
      let text = caps[2].trim().to_string();
      let id = utils::slugify(&text);

      TocEntry { level, text, id }
    })
    .collect()
}

/// Extract fenced code blocks, matched greedily left to right.
///
/// An opening fence without a matching closing line yields no block;
/// its content is silently not extracted.
#[must_use]
pub fn code_blocks(source: &str) -> Vec<CodeBlock> {
  CODE_BLOCK_RE
    .captures_iter(source)
    .map(|caps| {
      let code = caps[2].to_string();
      let line_count = code.matches('\n').count() + 1;

      CodeBlock {
        language: caps[1].to_string(),
        code,
        line_count,
      }
    })
    .collect()
}
