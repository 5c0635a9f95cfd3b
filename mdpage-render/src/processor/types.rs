//! Configuration types for the rendering pipeline.

use crate::{decorate::AdmonitionIcons, syntax::Highlighter};

/// Heading texts recognized as a table-of-contents placeholder, by default.
pub const DEFAULT_TOC_HEADING: &str = r"^(table[ -]of[ -])?contents$|^toc$";

/// Frontmatter block style accepted at the top of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterStyle {
  /// `---` delimited YAML block.
  Yaml,
  /// `+++` delimited TOML block.
  Toml,
}

impl FrontmatterStyle {
  /// The delimiter line for this style.
  #[must_use]
  pub const fn delimiter(self) -> &'static str {
    match self {
      Self::Yaml => "---",
      Self::Toml => "+++",
    }
  }
}

/// Where a heading anchor link is placed relative to the heading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorBehavior {
  Prepend,
  Append,
}

/// Configuration for self-link anchors injected into headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOptions {
  pub behavior: AnchorBehavior,
  /// Class set on the anchor element.
  pub class:    String,
  /// Visible link content.
  pub content:  String,
}

impl Default for AnchorOptions {
  fn default() -> Self {
    Self {
      behavior: AnchorBehavior::Append,
      class:    "anchor".to_string(),
      content:  "#".to_string(),
    }
  }
}

/// Options controlling the Markdown rendering pipeline.
#[derive(Debug, Clone)]
pub struct RenderOptions {
  /// Enable GitHub-flavored extensions: tables, strikethrough, autolinks
  /// and task lists.
  pub gfm:              bool,
  /// Typographic replacements (smart quotes, dashes, ellipses).
  pub typographic:      bool,
  /// Expand `:emoji:` shortcodes.
  pub emoji_shortcodes: bool,
  /// Frontmatter style stripped from the document head, when enabled.
  pub frontmatter:      Option<FrontmatterStyle>,
  /// Regex matching a heading that marks where the table of contents is
  /// inserted. `None` disables TOC insertion.
  pub toc_heading:      Option<String>,
  /// Group heading-led runs of content into `<section>` elements.
  pub sectionize:       bool,
  /// Heading anchor injection. `None` disables anchors.
  pub anchors:          Option<AnchorOptions>,
  /// Highlight fenced code blocks with syntect.
  pub highlight_code:   bool,
  /// Theme name for code highlighting; `None` selects the default.
  pub highlight_theme:  Option<String>,
  /// Admit raw HTML from the source into the document tree.
  pub raw_html_in_tree:   bool,
  /// Emit raw HTML nodes verbatim during serialization.
  pub raw_html_in_output: bool,
  /// Icon classes for admonition kinds.
  pub admonition_icons: AdmonitionIcons,
  /// Path to a JSON file overriding the language icon table.
  pub icon_table_path:  Option<String>,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      gfm:                true,
      typographic:        true,
      emoji_shortcodes:   true,
      frontmatter:        Some(FrontmatterStyle::Yaml),
      toc_heading:        Some(DEFAULT_TOC_HEADING.to_string()),
      sectionize:         true,
      anchors:            Some(AnchorOptions::default()),
      highlight_code:     true,
      highlight_theme:    None,
      raw_html_in_tree:   true,
      raw_html_in_output: true,
      admonition_icons:   AdmonitionIcons::default(),
      icon_table_path:    None,
    }
  }
}

/// A configured Markdown processor.
///
/// Construction loads every external capability (icon tables, highlight
/// themes) so that [`Processor::render`](crate::Processor::render) itself
/// cannot fail.
#[derive(Debug)]
pub struct Processor {
  pub(crate) options:     RenderOptions,
  pub(crate) highlighter: Option<Highlighter>,
  pub(crate) lang_icons:  crate::decorate::IconTable,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let options = RenderOptions::default();
    assert!(options.gfm);
    assert_eq!(options.frontmatter, Some(FrontmatterStyle::Yaml));
    assert_eq!(options.toc_heading.as_deref(), Some(DEFAULT_TOC_HEADING));
    assert!(options.anchors.is_some());
  }

  #[test]
  fn test_frontmatter_delimiters() {
    assert_eq!(FrontmatterStyle::Yaml.delimiter(), "---");
    assert_eq!(FrontmatterStyle::Toml.delimiter(), "+++");
  }
}
