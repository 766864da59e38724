//! Markdown to HTML conversion adapters.
//!
//! The rendering core treats the Markdown grammar engine as an opaque
//! collaborator behind the [`Converter`] trait: failures pass through as
//! messages, successes are well-formed HTML that still goes through the
//! sanitizer downstream. [`ComrakConverter`] is the default engine;
//! tests substitute canned fakes.
use std::sync::LazyLock;

use comrak::{
  Plugins, options::Options, plugins::syntect::SyntectAdapter,
};
use syntect::highlighting::ThemeSet;

use crate::{error::ConvertError, types::RenderOptions};

/// Fixed fallback theme used when `RenderOptions::code_theme` is empty.
/// Must name a theme in syntect's stock theme set.
pub const DEFAULT_CODE_THEME: &str = "base16-ocean.dark";

/// Stock syntect themes, loaded once and used to validate requested
/// theme names before they reach the highlighter.
static STOCK_THEMES: LazyLock<ThemeSet> =
  LazyLock::new(ThemeSet::load_defaults);

/// A Markdown to HTML conversion engine.
pub trait Converter {
  /// Convert raw Markdown source to an HTML string.
  ///
  /// # Errors
  ///
  /// Returns [`ConvertError`] when the engine rejects the input; the
  /// message is surfaced to the caller unchanged.
  fn convert(
    &self,
    markdown: &str,
    options: &RenderOptions,
  ) -> Result<String, ConvertError>;
}

/// Default [`Converter`] backed by comrak with the GFM extension set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakConverter;

impl ComrakConverter {
  /// Create a comrak-backed converter.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }

  /// Resolve the requested theme to one the highlighter actually
  /// ships. comrak's syntect plugin indexes its theme set by name and
  /// panics on a miss, so unknown names (`code_theme` is an arbitrary
  /// caller-supplied string) fall back to [`DEFAULT_CODE_THEME`].
  fn resolve_theme(options: &RenderOptions) -> &str {
    let requested = options.resolved_code_theme();
    if STOCK_THEMES.themes.contains_key(requested) {
      requested
    } else {
      log::warn!(
        "unknown code theme {requested:?}, falling back to {DEFAULT_CODE_THEME}"
      );
      DEFAULT_CODE_THEME
    }
  }

  /// Build comrak options from the request options.
  fn comrak_options(options: &RenderOptions) -> Options<'static> {
    let mut comrak = Options::default();
    comrak.extension.table = true;
    comrak.extension.footnotes = true;
    comrak.extension.strikethrough = true;
    comrak.extension.tasklist = true;
    comrak.extension.superscript = true;
    comrak.extension.autolink = true;
    comrak.extension.description_lists = true;
    // Frontmatter is surfaced as structured metadata by the pipeline,
    // not rendered into the HTML body.
    comrak.extension.front_matter_delimiter = Some("---".to_owned());
    if options.enable_math {
      comrak.extension.math_dollars = true;
      comrak.extension.math_code = true;
    }
    // Raw HTML passes through here; the sanitizer downstream is the
    // trust boundary. Mermaid fences keep their language tag and are
    // rendered client-side, so `enable_mermaid` needs nothing from us.
    comrak.render.r#unsafe = true;
    comrak
  }
}

impl Converter for ComrakConverter {
  fn convert(
    &self,
    markdown: &str,
    options: &RenderOptions,
  ) -> Result<String, ConvertError> {
    let comrak_options = Self::comrak_options(options);

    let adapter = SyntectAdapter::new(Some(Self::resolve_theme(options)));
    let mut plugins = Plugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);

    Ok(comrak::markdown_to_html_with_plugins(
      markdown,
      &comrak_options,
      &plugins,
    ))
  }
}
