use safemark::sanitize_html;

#[test]
fn test_script_subtree_dropped_between_paragraphs() {
  let out =
    sanitize_html("<p>Hello</p><script>alert('x')</script><p>World</p>");

  assert!(out.contains("<p>Hello</p>"));
  assert!(out.contains("<p>World</p>"));
  assert!(!out.contains("script"));
  assert!(!out.contains("alert"));
}

#[test]
fn test_event_handler_attribute_stripped() {
  let out = sanitize_html(r#"<div onclick="alert('x')">Click</div>"#);

  assert!(out.contains("Click"));
  assert!(!out.contains("onclick"));
  assert_eq!(out, "<div>Click</div>");
}

#[test]
fn test_attributes_serialize_in_name_order() {
  // Kept attributes are re-emitted sorted by name regardless of their
  // order in the source, so output is deterministic.
  let out = sanitize_html(r#"<img width="5" src="/x.png" alt="x">"#);
  assert_eq!(out, r#"<img alt="x" src="/x.png" width="5">"#);
}

#[test]
fn test_drop_subtree_discards_text_content_too() {
  let out = sanitize_html("<style>p { color: red }</style>visible");
  assert_eq!(out, "visible");

  let out = sanitize_html("before<iframe src=\"https://evil.example\">inner</iframe>after");
  assert_eq!(out, "beforeafter");
}

#[test]
fn test_unknown_tag_unwrapped_children_promoted() {
  let out = sanitize_html("<custom-widget><b>bold</b> text</custom-widget>");
  assert_eq!(out, "<b>bold</b> text");

  // form controls are not allowlisted but their text survives
  let out = sanitize_html("<form><button>Send</button></form>");
  assert_eq!(out, "Send");
}

#[test]
fn test_javascript_and_data_urls_rejected() {
  let out = sanitize_html(r#"<a href="javascript:alert(1)">x</a>"#);
  assert_eq!(out, "<a>x</a>");

  // scheme check is case-insensitive and ignores surrounding whitespace
  let out = sanitize_html(r#"<a href="  JavaScript:alert(1)">x</a>"#);
  assert_eq!(out, "<a>x</a>");

  let out = sanitize_html(r#"<img src="data:text/html;base64,PHNjcmlwdD4=">"#);
  assert_eq!(out, "<img>");
}

#[test]
fn test_safe_urls_and_attributes_kept() {
  let out = sanitize_html(r#"<a href="https://example.com/page">link</a>"#);
  assert_eq!(out, r#"<a href="https://example.com/page">link</a>"#);

  let out =
    sanitize_html(r#"<table><tr><th colspan="2">wide</th></tr></table>"#);
  assert!(out.contains(r#"<th colspan="2">wide</th>"#));

  // unlisted attributes are dropped from kept elements
  let out = sanitize_html(r#"<p style="color:red" data-x="1" id="p1">t</p>"#);
  assert_eq!(out, r#"<p id="p1">t</p>"#);
}

#[test]
fn test_comments_dropped() {
  let out = sanitize_html("<p>a</p><!-- secret --><p>b</p>");
  assert_eq!(out, "<p>a</p><p>b</p>");
}

#[test]
fn test_plain_text_passes_through_escaped() {
  assert_eq!(sanitize_html("hello world"), "hello world");
  assert_eq!(sanitize_html("<p>5 < 6</p>"), "<p>5 &lt; 6</p>");
  assert_eq!(sanitize_html("<p>a &lt; b</p>"), "<p>a &lt; b</p>");
  assert_eq!(sanitize_html("fish &amp; chips"), "fish &amp; chips");
}

#[test]
fn test_empty_input() {
  assert_eq!(sanitize_html(""), "");
  assert_eq!(sanitize_html("   \n  "), "");
}

#[test]
fn test_nested_structure_preserved() {
  let out = sanitize_html(
    "<table><thead><tr><th>h</th></tr></thead><tbody><tr><td>c</td></tr></tbody></table>",
  );
  assert_eq!(
    out,
    "<table><thead><tr><th>h</th></tr></thead><tbody><tr><td>c</td></tr></tbody></table>"
  );

  let out = sanitize_html("<ul><li>one</li><li><em>two</em></li></ul>");
  assert_eq!(out, "<ul><li>one</li><li><em>two</em></li></ul>");
}

#[test]
fn test_sanitize_is_idempotent() {
  let fixtures = [
    "<p>Hello</p><script>alert('x')</script>",
    r#"<div onclick="alert('x')"><span class="ok">Click</span></div>"#,
    "<b>a & b</b> and 1 < 2",
    r#"<a href="javascript:x">l</a><a href="/ok" title="t &quot;q&quot;">m</a>"#,
    "<custom><pre><code>let x = &quot;s&quot;;</code></pre></custom>",
    "<<<not html>>>",
    "",
  ];

  for fixture in fixtures {
    let once = sanitize_html(fixture);
    let twice = sanitize_html(&once);
    assert_eq!(once, twice, "sanitize not idempotent for {fixture:?}");
  }
}

#[test]
fn test_no_dangerous_output_across_fixtures() {
  let fixtures = [
    "<script src=\"https://evil.example/x.js\"></script>",
    "<noscript><p>fallback</p></noscript>",
    "<object data=\"x.swf\"><param name=\"a\"></object>",
    "<embed src=\"x.swf\">",
    "<applet code=\"X.class\">legacy</applet>",
    r#"<img src="x.png" onerror="alert(1)" onload="alert(2)">"#,
    r#"<div ONCLICK="x()">shout</div>"#,
  ];

  for fixture in fixtures {
    let out = sanitize_html(fixture);
    for tag in ["script", "style", "iframe", "object", "embed", "applet"] {
      assert!(!out.contains(&format!("<{tag}")), "{tag} leaked in {out:?}");
    }
    assert!(!out.contains(" on"), "event handler leaked in {out:?}");
  }
}
