//! Types for the safemark public API.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Options for configuring a render request.
///
/// `enable_mermaid` and `enable_math` are pass-through flags for the
/// conversion engine; the rendering core does not interpret them itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct RenderOptions {
  /// Run generated HTML through the allowlist sanitizer.
  pub sanitize_html: bool,

  /// Ask the conversion engine to support mermaid diagram fences.
  pub enable_mermaid: bool,

  /// Ask the conversion engine to render math notation.
  pub enable_math: bool,

  /// Extract table-of-contents entries from the source headings.
  pub enable_toc: bool,

  /// Syntax highlighting theme for fenced code blocks. Empty means the
  /// fixed default theme; see [`RenderOptions::resolved_code_theme`].
  pub code_theme: String,
}

impl RenderOptions {
  /// The syntax highlighting theme to use, falling back to
  /// [`crate::DEFAULT_CODE_THEME`] when unset.
  #[must_use]
  pub fn resolved_code_theme(&self) -> &str {
    if self.code_theme.is_empty() {
      crate::convert::DEFAULT_CODE_THEME
    } else {
      &self.code_theme
    }
  }
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      sanitize_html:  true,
      enable_mermaid: true,
      enable_math:    true,
      enable_toc:     true,
      code_theme:     String::new(),
    }
  }
}

/// Result of a full render: HTML plus the structural data extracted from
/// the original Markdown source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderResult {
  /// Rendered (and, unless disabled, sanitized) HTML output.
  pub html: String,

  /// Table-of-contents entries in document order. Empty when TOC
  /// extraction is disabled or the source has no ATX headings.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub toc: Vec<TocEntry>,

  /// Frontmatter key/value pairs, present only when a frontmatter block
  /// was found.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metadata: Option<HashMap<String, String>>,

  /// Fenced code blocks in document order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub code_blocks: Vec<CodeBlock>,
}

/// One heading in the table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocEntry {
  /// Heading level (1-6).
  pub level: u8,

  /// Trimmed heading text.
  pub text: String,

  /// Anchor ID slug derived from the text. Duplicate headings produce
  /// duplicate slugs; no disambiguation is applied.
  pub id: String,
}

/// One fenced code block extracted from Markdown source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeBlock {
  /// Info-string language tag, empty when the fence has none.
  pub language: String,

  /// Verbatim fenced content, without the fence lines themselves.
  pub code: String,

  /// Number of newline characters in `code`, plus one.
  pub line_count: usize,
}
