use safemark::{TocEntry, extract};

#[test]
fn test_toc_levels_and_slugs_in_document_order() {
  let toc = extract::toc("# Title\n## Section A\n### Sub A1\n");

  assert_eq!(
    toc,
    vec![
      TocEntry {
        level: 1,
        text:  "Title".to_string(),
        id:    "title".to_string(),
      },
      TocEntry {
        level: 2,
        text:  "Section A".to_string(),
        id:    "section-a".to_string(),
      },
      TocEntry {
        level: 3,
        text:  "Sub A1".to_string(),
        id:    "sub-a1".to_string(),
      },
    ]
  );
}

#[test]
fn test_toc_requires_whitespace_after_hashes() {
  assert!(extract::toc("#NotAHeading\n").is_empty());
  assert_eq!(extract::toc("#\tTabbed\n")[0].text, "Tabbed");
}

#[test]
fn test_toc_rejects_seven_hashes_and_setext() {
  assert!(extract::toc("####### too deep\n").is_empty());
  assert!(extract::toc("Title\n=====\n\nOther\n-----\n").is_empty());
}

#[test]
fn test_toc_trims_heading_text() {
  let toc = extract::toc("##   Spaced Out   \n");

  assert_eq!(toc.len(), 1);
  assert_eq!(toc[0].text, "Spaced Out");
  assert_eq!(toc[0].id, "spaced-out");
}

#[test]
fn test_toc_duplicate_headings_keep_duplicate_slugs() {
  let toc = extract::toc("## A\n\ntext\n\n## A\n");

  assert_eq!(toc.len(), 2);
  assert_eq!(toc[0].id, "a");
  assert_eq!(toc[1].id, "a");
}

#[test]
fn test_toc_all_six_levels() {
  let source = "# a\n## b\n### c\n#### d\n##### e\n###### f\n";
  let levels: Vec<u8> = extract::toc(source).iter().map(|e| e.level).collect();
  assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_toc_empty_input() {
  assert!(extract::toc("").is_empty());
  assert!(extract::toc("no headings here\n").is_empty());
}

#[test]
fn test_code_block_with_language() {
  let blocks = extract::code_blocks("```python\nprint('hi')\n```\n");

  assert_eq!(blocks.len(), 1);
  assert_eq!(blocks[0].language, "python");
  assert_eq!(blocks[0].code, "print('hi')\n");
  assert_eq!(blocks[0].line_count, blocks[0].code.matches('\n').count() + 1);
}

#[test]
fn test_code_block_without_info_string() {
  let blocks = extract::code_blocks("```\nplain\n```\n");

  assert_eq!(blocks.len(), 1);
  assert_eq!(blocks[0].language, "");
  assert_eq!(blocks[0].code, "plain\n");
}

#[test]
fn test_code_block_empty_body() {
  let blocks = extract::code_blocks("```\n```\n");

  assert_eq!(blocks.len(), 1);
  assert_eq!(blocks[0].code, "");
  assert_eq!(blocks[0].line_count, 1);
}

#[test]
fn test_code_block_line_count_formula() {
  let blocks = extract::code_blocks("```go\na\nb\nc\n```\n");

  assert_eq!(blocks.len(), 1);
  assert_eq!(blocks[0].code, "a\nb\nc\n");
  assert_eq!(blocks[0].line_count, 4);
}

#[test]
fn test_unterminated_fence_yields_no_block() {
  assert!(extract::code_blocks("```rust\nfn main() {}\n").is_empty());
}

#[test]
fn test_info_string_with_space_is_not_a_fence() {
  assert!(extract::code_blocks("``` rust\nfn main() {}\n```").is_empty());
}

#[test]
fn test_multiple_blocks_matched_left_to_right() {
  let source = "```a\none\n```\nprose\n```b\ntwo\n```\n";
  let blocks = extract::code_blocks(source);

  assert_eq!(blocks.len(), 2);
  assert_eq!(blocks[0].language, "a");
  assert_eq!(blocks[0].code, "one\n");
  assert_eq!(blocks[1].language, "b");
  assert_eq!(blocks[1].code, "two\n");
}

#[test]
fn test_code_blocks_empty_input() {
  assert!(extract::code_blocks("").is_empty());
}
