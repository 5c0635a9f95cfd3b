//! Syntect-based syntax highlighting, with extended grammars and themes
//! from two-face.
//!
//! Highlighting produces tree nodes rather than HTML strings: each styled
//! region becomes a `<span>` carrying only a foreground color, so the
//! result plugs directly into the document tree and the serializer handles
//! all escaping.

use std::sync::OnceLock;

use syntect::{
  easy::HighlightLines,
  highlighting::Theme,
  parsing::SyntaxSet,
  util::LinesWithEndings,
};
use thiserror::Error;
use two_face::{
  re_exports::syntect::highlighting::ThemeSet,
  theme::{EmbeddedLazyThemeSet, EmbeddedThemeName},
};

use crate::tree::{AttrValue, Node};

/// Errors from the highlighting backend.
#[derive(Debug, Error)]
pub enum SyntaxError {
  #[error("unknown highlight theme: {0}")]
  UnknownTheme(String),

  #[error("highlighting failed: {0}")]
  HighlightingFailed(String),
}

/// Result type for syntax highlighting operations.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// A configured highlighter bound to one theme.
#[derive(Debug)]
pub struct Highlighter {
  theme: &'static Theme,
}

impl Highlighter {
  /// Create a highlighter for the named theme.
  ///
  /// `None` selects the `InspiredGitHub` default. An unrecognized name is
  /// an error rather than a silent fallback.
  pub fn new(theme_name: Option<&str>) -> SyntaxResult<Self> {
    let name = theme_name.unwrap_or("InspiredGitHub");
    Ok(Self {
      theme: resolve_theme(name)?,
    })
  }

  /// Highlight `code` into a list of styled span and text nodes.
  ///
  /// An unknown language falls back to plain text rather than failing.
  pub fn highlight_spans(
    &self,
    code: &str,
    language: &str,
  ) -> SyntaxResult<Vec<Node>> {
    let syntax_set = syntax_set();
    let syntax = syntax_set
      .find_syntax_by_token(language)
      .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, self.theme);
    let mut nodes = Vec::new();
    for line in LinesWithEndings::from(code) {
      let regions = highlighter
        .highlight_line(line, syntax_set)
        .map_err(|e| SyntaxError::HighlightingFailed(e.to_string()))?;
      for (style, text) in regions {
        if text.is_empty() {
          continue;
        }
        let fg = style.foreground;
        let color = format!("color:#{:02x}{:02x}{:02x}", fg.r, fg.g, fg.b);
        nodes.push(Node::elem_with(
          "span",
          vec![("style", AttrValue::Text(color))],
          vec![Node::text(text)],
        ));
      }
    }
    Ok(nodes)
  }
}

fn syntax_set() -> &'static SyntaxSet {
  static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
  SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
}

fn theme_set() -> &'static EmbeddedLazyThemeSet {
  static THEME_SET: OnceLock<EmbeddedLazyThemeSet> = OnceLock::new();
  THEME_SET.get_or_init(two_face::theme::extra)
}

fn default_theme_set() -> &'static ThemeSet {
  static DEFAULT_THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
  DEFAULT_THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Resolve a theme name against the default syntect themes first, then the
/// extended two-face set.
fn resolve_theme(name: &str) -> SyntaxResult<&'static Theme> {
  if let Some(theme) = default_theme_set().themes.get(name) {
    return Ok(theme);
  }

  let embedded = match name {
    "Ansi" => Some(EmbeddedThemeName::Ansi),
    "Base16" => Some(EmbeddedThemeName::Base16),
    "Base16EightiesDark" => Some(EmbeddedThemeName::Base16EightiesDark),
    "Base16MochaDark" => Some(EmbeddedThemeName::Base16MochaDark),
    "Base16OceanDark" => Some(EmbeddedThemeName::Base16OceanDark),
    "Base16OceanLight" => Some(EmbeddedThemeName::Base16OceanLight),
    "Base16_256" => Some(EmbeddedThemeName::Base16_256),
    "ColdarkCold" => Some(EmbeddedThemeName::ColdarkCold),
    "ColdarkDark" => Some(EmbeddedThemeName::ColdarkDark),
    "DarkNeon" => Some(EmbeddedThemeName::DarkNeon),
    "Dracula" => Some(EmbeddedThemeName::Dracula),
    "Github" => Some(EmbeddedThemeName::Github),
    "GruvboxDark" => Some(EmbeddedThemeName::GruvboxDark),
    "GruvboxLight" => Some(EmbeddedThemeName::GruvboxLight),
    "InspiredGithub" => Some(EmbeddedThemeName::InspiredGithub),
    "Leet" => Some(EmbeddedThemeName::Leet),
    "MonokaiExtended" => Some(EmbeddedThemeName::MonokaiExtended),
    "MonokaiExtendedBright" => Some(EmbeddedThemeName::MonokaiExtendedBright),
    "MonokaiExtendedLight" => Some(EmbeddedThemeName::MonokaiExtendedLight),
    "MonokaiExtendedOrigin" => Some(EmbeddedThemeName::MonokaiExtendedOrigin),
    "Nord" => Some(EmbeddedThemeName::Nord),
    "OneHalfDark" => Some(EmbeddedThemeName::OneHalfDark),
    "OneHalfLight" => Some(EmbeddedThemeName::OneHalfLight),
    "SolarizedDark" => Some(EmbeddedThemeName::SolarizedDark),
    "SolarizedLight" => Some(EmbeddedThemeName::SolarizedLight),
    "SublimeSnazzy" => Some(EmbeddedThemeName::SublimeSnazzy),
    "TwoDark" => Some(EmbeddedThemeName::TwoDark),
    "VisualStudioDarkPlus" => Some(EmbeddedThemeName::VisualStudioDarkPlus),
    "Zenburn" => Some(EmbeddedThemeName::Zenburn),
    _ => None,
  };

  embedded
    .map(|name| theme_set().get(name))
    .ok_or_else(|| SyntaxError::UnknownTheme(name.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "fine in tests")]
mod tests {
  use super::*;
  use crate::tree::serialize::to_html;

  #[test]
  fn test_default_theme_resolves() {
    assert!(Highlighter::new(None).is_ok());
  }

  #[test]
  fn test_extended_theme_resolves() {
    assert!(Highlighter::new(Some("Dracula")).is_ok());
  }

  #[test]
  fn test_unknown_theme_is_an_error() {
    let err = Highlighter::new(Some("NoSuchTheme")).unwrap_err();
    assert!(matches!(err, SyntaxError::UnknownTheme(name) if name == "NoSuchTheme"));
  }

  #[test]
  fn test_highlight_preserves_code_text() {
    let highlighter = Highlighter::new(None).unwrap();
    let spans = highlighter.highlight_spans("let x = 1;\n", "rust").unwrap();
    assert!(!spans.is_empty());

    let text: String = spans.iter().map(Node::text_content).collect();
    assert_eq!(text, "let x = 1;\n");
  }

  #[test]
  fn test_spans_carry_color_styles() {
    let highlighter = Highlighter::new(None).unwrap();
    let spans = highlighter.highlight_spans("fn main() {}\n", "rust").unwrap();
    let root = Node::Root { children: spans };
    assert!(to_html(&root, true).contains("<span style=\"color:#"));
  }

  #[test]
  fn test_unknown_language_falls_back_to_plain() {
    let highlighter = Highlighter::new(None).unwrap();
    let spans = highlighter
      .highlight_spans("anything goes\n", "not-a-language")
      .unwrap();
    let text: String = spans.iter().map(Node::text_content).collect();
    assert_eq!(text, "anything goes\n");
  }
}
