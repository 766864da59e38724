//! Frontmatter splitting for Markdown documents.
//!
//! A frontmatter block is a leading region delimited by `---` lines
//! containing simple `key: value` pairs. This is a deliberately minimal
//! scanner, not a structured-data parser: no quoting, no escaping, no
//! nesting. Anything it cannot make sense of degrades to "no frontmatter
//! found" rather than an error, since extraction must never block
//! rendering.
use std::collections::HashMap;

/// Split a leading frontmatter block from a Markdown document.
///
/// The document must begin with a `---` line for a block to be
/// recognized; the block ends at the next line break immediately
/// followed by `---`. The returned body starts after the closing
/// delimiter line and its trailing line break, and is always a subslice
/// of the input. When no complete block is found the input is returned
/// unchanged with no metadata.
///
/// Within the block, each line splits on its first `:` into a
/// trimmed key/value pair. Lines without a `:` and empty keys are
/// ignored; a repeated key overwrites the earlier value.
///
/// ```
/// let (metadata, body) = safemark::frontmatter::split("---\ntitle: Hi\n---\nBody\n");
///
/// let metadata = metadata.expect("frontmatter present");
/// assert_eq!(metadata["title"], "Hi");
/// assert_eq!(body, "Body\n");
/// ```
#[must_use]
pub fn split(source: &str) -> (Option<HashMap<String, String>>, &str) {
  let Some(rest) = source.strip_prefix("---\n") else {
    return (None, source);
  };
  let Some(end) = rest.find("\n---") else {
    return (None, source);
  };

  let block = &rest[..end];
  let after = &rest[end + "\n---".len()..];
  let body = after.strip_prefix('\n').unwrap_or(after);

  let mut metadata = HashMap::new();
  for line in block.lines() {
    let Some((key, value)) = line.split_once(':') else {
      continue;
    };
    let key = key.trim();
    if key.is_empty() {
      continue;
    }
    metadata.insert(key.to_string(), value.trim().to_string());
  }

  if metadata.is_empty() {
    (None, body)
  } else {
    (Some(metadata), body)
  }
}
