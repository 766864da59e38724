//! Error types for rendering operations.
//!
//! Only two conditions are observable errors: oversized input and a
//! failing conversion engine. Structural problems in the source, such as
//! an unterminated fence or a malformed frontmatter block, degrade
//! silently to "nothing extracted" instead, and the sanitizer never
//! fails at all.

/// Opaque failure reported by a Markdown conversion engine.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ConvertError(pub String);

impl ConvertError {
  /// Wrap an engine error message.
  #[must_use]
  pub fn new(message: impl Into<String>) -> Self {
    Self(message.into())
  }
}

/// Errors that can occur during rendering or extraction.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  /// Input byte length exceeds the configured maximum. Checked before
  /// any parsing work begins.
  #[error("input exceeds maximum size of {limit} bytes (got {actual})")]
  InputTooLarge {
    /// Configured maximum input size in bytes.
    limit:  usize,
    /// Actual input size in bytes.
    actual: usize,
  },

  /// The conversion engine reported an error; its message is passed
  /// through unchanged.
  #[error("markdown conversion failed: {0}")]
  ConversionFailed(#[from] ConvertError),
}
