//! Allowlist HTML sanitization.
//!
//! [`sanitize_html`] parses untrusted HTML into a DOM forest and rebuilds
//! it as a string, keeping only explicitly approved structure. Every
//! element falls into exactly one of three buckets:
//!
//! - **drop-subtree** tags are removed together with their entire
//!   subtree, text included;
//! - **allowed** tags are kept with filtered attributes and recursively
//!   cleaned children;
//! - **everything else** is unwrapped: the element goes away and its
//!   children take its place, so inline text survives unknown wrappers.
//!
//! Comments, doctypes and other non-element, non-text nodes are always
//! dropped. The walk never mutates the parsed tree; it emits into a
//! fresh output buffer, re-escaping all text and attribute values on the
//! way out. The function cannot fail: if the walk panics on pathological
//! input, the raw input is returned with every HTML metacharacter
//! escaped so it can never be interpreted as markup.
use std::{collections::HashSet, sync::LazyLock};

use kuchikikiki::{ElementData, NodeRef};
use tendril::TendrilSink;

/// Tags whose entire subtree is discarded. These carry executable or
/// opaque payloads where even the text content is unsafe to surface,
/// e.g. inline script source.
static DROP_SUBTREE_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
  [
    "script", "style", "iframe", "object", "embed", "applet", "noscript",
  ]
  .into_iter()
  .collect()
});

/// Tags that survive sanitization: structural and text-formatting
/// elements only. No forms, no scripting elements, no embeds.
static ALLOWED_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
  [
    "a", "abbr", "b", "blockquote", "br", "code", "dd", "del", "details",
    "div", "dl", "dt", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i",
    "img", "ins", "kbd", "li", "ol", "p", "pre", "q", "s", "samp", "small",
    "span", "strong", "sub", "summary", "sup", "table", "tbody", "td",
    "tfoot", "th", "thead", "tr", "u", "ul", "var",
  ]
  .into_iter()
  .collect()
});

/// Attributes kept on allowed tags.
static SAFE_ATTRIBUTES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
  [
    "href", "src", "alt", "title", "class", "id", "width", "height",
    "colspan", "rowspan", "align",
  ]
  .into_iter()
  .collect()
});

/// URL schemes rejected on `href`/`src` values.
const BLOCKED_URL_SCHEMES: &[&str] = &["javascript:", "data:"];

/// Void elements, serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Maximum element nesting depth the walk descends into. Content nested
/// deeper is dropped rather than risking stack exhaustion on adversarial
/// input.
const MAX_NESTING_DEPTH: usize = 1000;

/// Sanitize an HTML fragment, returning safe markup.
///
/// The output contains only allowlisted elements and attributes;
/// leading and trailing whitespace is trimmed. Sanitization is
/// idempotent: running it twice yields the same string as running it
/// once.
///
/// ```
/// let clean = safemark::sanitize_html(r#"<div onclick="alert('x')">Click</div>"#);
/// assert_eq!(clean, "<div>Click</div>");
/// ```
#[must_use]
pub fn sanitize_html(raw: &str) -> String {
  let cleaned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    clean_fragment(raw)
  }));

  match cleaned {
    Ok(clean) => clean,
    Err(_) => {
      log::error!("sanitizer panicked on malformed input, escaping instead");
      html_escape::encode_text(raw).trim().to_string()
    },
  }
}

/// Parse the fragment and emit the cleaned forest as a string.
///
/// The fragment is parsed in body context so stray top-level text is
/// legal. html5ever recovers from arbitrary malformed markup, so this
/// only fails by panicking, which the caller contains.
fn clean_fragment(raw: &str) -> String {
  let document = kuchikikiki::parse_html().one(raw);
  let mut out = String::with_capacity(raw.len());

  if let Ok(body) = document.select_first("body") {
    for child in body.as_node().children() {
      emit_node(&child, &mut out, 0);
    }
  }

  out.trim().to_string()
}

/// Apply the three-way element rule to one node and recurse.
fn emit_node(node: &NodeRef, out: &mut String, depth: usize) {
  if depth >= MAX_NESTING_DEPTH {
    return;
  }

  if let Some(element) = node.as_element() {
    let tag = element.name.local.as_ref().to_ascii_lowercase();

    if DROP_SUBTREE_TAGS.contains(tag.as_str()) {
      return;
    }

    if !ALLOWED_TAGS.contains(tag.as_str()) {
      // Unwrap: children are promoted into the element's position.
      for child in node.children() {
        emit_node(&child, out, depth + 1);
      }
      return;
    }

    out.push('<');
    out.push_str(&tag);
    emit_attributes(element, out);
    out.push('>');

    if VOID_TAGS.contains(&tag.as_str()) {
      return;
    }

    for child in node.children() {
      emit_node(&child, out, depth + 1);
    }

    out.push_str("</");
    out.push_str(&tag);
    out.push('>');
  } else if let Some(text) = node.as_text() {
    out.push_str(&html_escape::encode_text(text.borrow().as_str()));
  }
  // Comments, doctypes and processing instructions fall through and are
  // dropped.
}

/// Emit the attributes that pass the allowlist filter.
///
/// Attributes come out in name order: the parse stores them in a map
/// keyed by name, so source order is not retained. The ordering is
/// deterministic and stable under re-sanitization.
fn emit_attributes(element: &ElementData, out: &mut String) {
  for (name, attr) in element.attributes.borrow().map.iter() {
    let key = name.local.as_ref().to_ascii_lowercase();
    if !keep_attribute(&key, &attr.value) {
      continue;
    }

    out.push(' ');
    out.push_str(&key);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
    out.push('"');
  }
}

/// Decide whether a single attribute survives. `name` must already be
/// lowercased.
fn keep_attribute(name: &str, value: &str) -> bool {
  // Any on* name is rejected before the allowlist lookup, so inline
  // event handlers are blocked even if the allowlist ever grows one.
  if name.starts_with("on") {
    return false;
  }
  if !SAFE_ATTRIBUTES.contains(name) {
    return false;
  }
  if name == "href" || name == "src" {
    let normalized = value.trim().to_lowercase();
    if BLOCKED_URL_SCHEMES
      .iter()
      .any(|scheme| normalized.starts_with(scheme))
    {
      return false;
    }
  }

  true
}
