//! The rendering pipeline: validate, convert, sanitize, extract,
//! assemble.
//!
//! Ordering contract: size validation happens before any parsing work;
//! sanitization only ever runs on the generated HTML; the structural
//! scans and the frontmatter splitter all read the original Markdown
//! source and are independent of each other.
use log::{debug, trace};

use crate::{
  convert::{ComrakConverter, Converter},
  error::RenderError,
  extract, frontmatter, sanitize,
  types::{CodeBlock, RenderOptions, RenderResult, TocEntry},
};

/// Default maximum input size in bytes (1 MiB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 1_048_576;

/// Markdown rendering pipeline.
///
/// Holds no per-request state: every call owns its working data, so a
/// single `Renderer` can serve any number of concurrent requests.
pub struct Renderer<C = ComrakConverter> {
  converter:      C,
  options:        RenderOptions,
  max_input_size: usize,
}

impl Renderer<ComrakConverter> {
  /// Create a renderer backed by the default comrak converter.
  #[must_use]
  pub fn new(options: RenderOptions) -> Self {
    Self::with_converter(ComrakConverter::new(), options)
  }
}

impl<C: Converter> Renderer<C> {
  /// Create a renderer with a custom conversion engine.
  #[must_use]
  pub fn with_converter(converter: C, options: RenderOptions) -> Self {
    Self {
      converter,
      options,
      max_input_size: DEFAULT_MAX_INPUT_SIZE,
    }
  }

  /// Set the maximum accepted input size in bytes. `0` disables the
  /// limit.
  #[must_use]
  pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
    self.max_input_size = max_input_size;
    self
  }

  /// Access the renderer options.
  #[must_use]
  pub const fn options(&self) -> &RenderOptions {
    &self.options
  }

  /// Render Markdown content through the full pipeline.
  ///
  /// Empty input short-circuits to an empty result without touching the
  /// conversion engine.
  ///
  /// # Errors
  ///
  /// [`RenderError::InputTooLarge`] when the input exceeds the
  /// configured maximum, [`RenderError::ConversionFailed`] when the
  /// conversion engine reports an error.
  pub fn render(&self, content: &str) -> Result<RenderResult, RenderError> {
    if content.is_empty() {
      return Ok(RenderResult::default());
    }
    self.check_input_size(content)?;

    let html = self.converter.convert(content, &self.options)?;
    trace!(
      "converted {} bytes of markdown into {} bytes of html",
      content.len(),
      html.len()
    );

    let html = if self.options.sanitize_html {
      sanitize::sanitize_html(&html)
    } else {
      html
    };

    let toc = if self.options.enable_toc {
      extract::toc(content)
    } else {
      Vec::new()
    };
    let code_blocks = extract::code_blocks(content);
    let (metadata, _body) = frontmatter::split(content);

    Ok(RenderResult {
      html,
      toc,
      metadata,
      code_blocks,
    })
  }

  /// Render and return only the HTML string.
  ///
  /// # Errors
  ///
  /// Same conditions as [`Renderer::render`].
  pub fn render_to_html(&self, content: &str) -> Result<String, RenderError> {
    Ok(self.render(content)?.html)
  }

  /// Extract table-of-contents entries without rendering. Subject to
  /// the same empty-input and size-limit rules as [`Renderer::render`].
  ///
  /// # Errors
  ///
  /// [`RenderError::InputTooLarge`] when the input exceeds the
  /// configured maximum.
  pub fn extract_toc(
    &self,
    content: &str,
  ) -> Result<Vec<TocEntry>, RenderError> {
    if content.is_empty() {
      return Ok(Vec::new());
    }
    self.check_input_size(content)?;
    Ok(extract::toc(content))
  }

  /// Extract fenced code blocks without rendering. Subject to the same
  /// empty-input and size-limit rules as [`Renderer::render`].
  ///
  /// # Errors
  ///
  /// [`RenderError::InputTooLarge`] when the input exceeds the
  /// configured maximum.
  pub fn extract_code_blocks(
    &self,
    content: &str,
  ) -> Result<Vec<CodeBlock>, RenderError> {
    if content.is_empty() {
      return Ok(Vec::new());
    }
    self.check_input_size(content)?;
    Ok(extract::code_blocks(content))
  }

  /// Fail fast on oversized input before any parsing work happens.
  fn check_input_size(&self, content: &str) -> Result<(), RenderError> {
    if self.max_input_size > 0 && content.len() > self.max_input_size {
      debug!(
        "rejecting input of {} bytes (limit {})",
        content.len(),
        self.max_input_size
      );
      return Err(RenderError::InputTooLarge {
        limit:  self.max_input_size,
        actual: content.len(),
      });
    }
    Ok(())
  }
}
