#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]
//! End-to-end tests for the rendering pipeline.

use mdpage_render::{Processor, RenderOptions};

/// Check if HTML output contains all expected substrings.
fn assert_html_contains(html: &str, expected: &[&str]) {
  for &needle in expected {
    assert!(
      html.contains(needle),
      "Expected HTML to contain '{needle}', but it did not.\nFull \
       HTML:\n{html}"
    );
  }
}

fn render(md: &str) -> String {
  let processor = Processor::new(RenderOptions::default()).unwrap();
  processor.render(md).html
}

fn render_with(md: &str, options: RenderOptions) -> String {
  Processor::new(options).unwrap().render(md).html
}

#[test]
fn test_admonition_from_directive() {
  let html = render("::: note\nThis is a note.\n:::");
  assert_html_contains(&html, &[
    r#"<div class="admonition admonition-note">"#,
    r#"<p class="admonition-title"><i class="fa fa-pencil"></i> Note</p>"#,
    r#"<div class="admonition-body">"#,
    "This is a note.",
  ]);
}

#[test]
fn test_admonition_title_from_directive_line() {
  let html = render("::: warning Mind the gap\nCareful.\n:::");
  assert_html_contains(&html, &[
    "admonition admonition-warning",
    r#"<i class="fa fa-exclamation-triangle"></i> Mind the gap</p>"#,
  ]);
}

#[test]
fn test_admonition_from_github_callout() {
  let html = render("> [!TIP]\n> Use the force.");
  assert_html_contains(&html, &[
    "admonition admonition-tip",
    r#"<i class="fa fa-lightbulb-o"></i> Tip</p>"#,
    "Use the force.",
  ]);
}

#[test]
fn test_unknown_directive_keeps_content() {
  let html = render("::: sidebar\nSome aside.\n:::");
  assert_html_contains(&html, &[
    r#"<div data-directive="sidebar">"#,
    "Some aside.",
  ]);
  assert!(!html.contains("admonition"));
}

#[test]
fn test_directive_markers_in_code_fences_are_literal() {
  let html = render("```\n::: note\n:::\n```");
  assert!(!html.contains("admonition"));
  assert_html_contains(&html, &[":::"]);
}

#[test]
fn test_language_icon_on_code_block() {
  let html = render("```python\nprint(1)\n```");
  assert_html_contains(&html, &[
    "has-language",
    r#"data-language="python""#,
    r#"<span class="code-lang-icon">"#,
    r#"<i class="devicon-python-plain" title="PYTHON">"#,
  ]);
}

#[test]
fn test_plain_code_block_gets_no_icon() {
  let html = render("```\nplain text\n```");
  assert!(!html.contains("code-lang-icon"));
  assert!(!html.contains("has-language"));
}

#[test]
fn test_code_block_is_highlighted() {
  let html = render("```rust\nlet x = 1;\n```");
  assert_html_contains(&html, &["highlight", "<span style=\"color:#"]);
}

#[test]
fn test_heading_slugs_deduplicated() {
  let html = render("## Setup\n\n## Setup\n\n## Setup");
  assert_html_contains(&html, &[
    r#"id="setup""#,
    r#"id="setup-1""#,
    r#"id="setup-2""#,
  ]);
}

#[test]
fn test_heading_anchor_injected() {
  let html = render("# Overview");
  assert_html_contains(&html, &[
    r##"<a class="anchor" href="#overview" aria-hidden="true" tabindex="-1">#</a>"##,
  ]);
}

#[test]
fn test_toc_replaces_placeholder_heading() {
  let md = "# Guide\n\n## Table of Contents\n\n## Install\n\n## Usage";
  let html = render(md);
  assert_html_contains(&html, &[
    r#"<ul class="toc">"#,
    r##"<a href="#install">Install</a>"##,
    r##"<a href="#usage">Usage</a>"##,
  ]);
}

#[test]
fn test_sectionize_wraps_headings() {
  let html = render("# One\n\ntext\n\n## Nested\n\nmore");
  assert_html_contains(&html, &[
    r#"<section class="section" aria-labelledby="one">"#,
    r#"<section class="section" aria-labelledby="nested">"#,
  ]);
}

#[test]
fn test_gfm_strikethrough_and_tables() {
  let html = render("~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |");
  assert_html_contains(&html, &[
    "<del>gone</del>",
    "<table>",
    "<th>a</th>",
    "<td>1</td>",
  ]);
}

#[test]
fn test_task_list() {
  let html = render("- [x] done\n- [ ] pending");
  assert_html_contains(&html, &[
    r#"<input type="checkbox" disabled="" checked="">"#,
    "done",
    "pending",
  ]);
}

#[test]
fn test_emoji_shortcode() {
  let html = render("hello :smile:");
  assert_html_contains(&html, &[
    r#"<span role="img" aria-label="smile">"#,
  ]);
}

#[test]
fn test_frontmatter_stripped() {
  let html = render("---\ndraft: true\n---\n\n# Doc");
  assert!(!html.contains("draft"));
  assert_html_contains(&html, &["Doc"]);
}

#[test]
fn test_title_and_outline() {
  let processor = Processor::new(RenderOptions::default()).unwrap();
  let result = processor.render("# The Title\n\n## Part One\n\n### Detail");

  assert_eq!(result.title.as_deref(), Some("The Title"));
  assert_eq!(result.headers.len(), 3);
  assert_eq!(result.headers[1].text, "Part One");
  assert_eq!(result.headers[1].level, 2);
  assert_eq!(result.headers[2].id, "detail");
}

#[test]
fn test_raw_html_passthrough_by_default() {
  let html = render("text\n\n<aside>raw block</aside>");
  assert_html_contains(&html, &["<aside>raw block</aside>"]);
}

#[test]
fn test_raw_html_dropped_when_disabled() {
  let html = render_with("text\n\n<aside>raw block</aside>", RenderOptions {
    raw_html_in_tree: false,
    ..RenderOptions::default()
  });
  assert!(!html.contains("aside"));
  assert_html_contains(&html, &["text"]);
}

#[test]
fn test_sectionize_disabled() {
  let html = render_with("# One\n\ntext", RenderOptions {
    sectionize: false,
    ..RenderOptions::default()
  });
  assert!(!html.contains("<section"));
}

#[test]
fn test_custom_icon_table() {
  use std::io::Write;

  let mut file = tempfile::NamedTempFile::new().unwrap();
  write!(file, r#"{{"python": "my-icon", "default": "generic-icon"}}"#)
    .unwrap();

  let options = RenderOptions {
    icon_table_path: Some(file.path().to_string_lossy().into_owned()),
    ..RenderOptions::default()
  };
  let html = render_with("```python\nx = 1\n```\n\n```ook\ny\n```", options);
  assert_html_contains(&html, &[
    r#"<i class="my-icon" title="PYTHON">"#,
    r#"<i class="generic-icon" title="OOK">"#,
  ]);
}

#[test]
fn test_empty_input() {
  let processor = Processor::new(RenderOptions::default()).unwrap();
  let result = processor.render("");
  assert_eq!(result.html, "");
  assert!(result.headers.is_empty());
  assert_eq!(result.title, None);
}
