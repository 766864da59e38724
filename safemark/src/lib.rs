//! # safemark - safe Markdown rendering for untrusted content
//!
//! This crate converts author-supplied Markdown into safe, structured
//! output. It is built for semi-trusted input such as user comments or
//! documentation uploads: raw HTML, whether hand-written inside the
//! Markdown or produced by the conversion engine, is neutralized by a
//! DOM-based allowlist sanitizer before it can reach a browser, while
//! headings, fenced code blocks and frontmatter are extracted from the
//! original source with deterministic lexical rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use safemark::{RenderOptions, Renderer};
//!
//! let renderer = Renderer::new(RenderOptions::default());
//! let result = renderer
//!   .render("# Hello\n\n<script>alert('x')</script>")
//!   .expect("input is below the size limit");
//!
//! assert!(result.html.contains("<h1>Hello</h1>"));
//! assert!(!result.html.contains("script"));
//! assert_eq!(result.toc[0].id, "hello");
//! ```
//!
//! ## Architecture
//!
//! - [`sanitize`]: allowlist DOM walk over parsed HTML fragments
//! - [`extract`]: table-of-contents and fenced-code-block scans over the
//!   raw Markdown source
//! - [`frontmatter`]: minimal `key: value` metadata splitting
//! - [`convert`]: the [`Converter`] seam and the default comrak adapter
//! - [`render`]: the pipeline tying validation, conversion, sanitization
//!   and extraction together
//!
//! The Markdown grammar engine itself is an opaque collaborator behind
//! the [`Converter`] trait; swap in a fake for tests or a different
//! engine entirely without touching the trust boundary.
//!
//! Every call owns its working data and the crate holds no cross-request
//! state, so a single [`Renderer`] can serve any number of concurrent
//! requests.

pub mod convert;
pub mod error;
pub mod extract;
pub mod frontmatter;
pub mod render;
pub mod sanitize;
mod types;
pub mod utils;

pub use crate::{
  convert::{ComrakConverter, Converter, DEFAULT_CODE_THEME},
  error::{ConvertError, RenderError},
  render::{DEFAULT_MAX_INPUT_SIZE, Renderer},
  sanitize::sanitize_html,
  types::{CodeBlock, RenderOptions, RenderResult, TocEntry},
};
