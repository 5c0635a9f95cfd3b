//! Tree decorators and the icon tables that drive them.
//!
//! Decorators are [`TreePass`](crate::tree::TreePass) implementations that
//! run after parsing and structural passes, rewriting recognized subtrees
//! into their final presentational form. Each decorator is configured with
//! an icon table mapping domain keys (language names, admonition kinds) to
//! icon-font class strings.

mod admonitions;
mod lang_icons;

use std::collections::BTreeMap;

pub use admonitions::AdmonitionDecorator;
pub use lang_icons::LanguageIconDecorator;

/// Maps code block language names to icon-font class strings.
///
/// The reserved key `default` supplies the icon used for languages with no
/// entry of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTable {
  map:     BTreeMap<String, String>,
  default: String,
}

/// Fallback icon for languages without a table entry.
const DEFAULT_LANGUAGE_ICON: &str = "devicon-devicon-plain";

impl IconTable {
  /// Build a table from a raw key-to-class map.
  ///
  /// A `default` entry, when present, replaces the built-in fallback icon.
  #[must_use]
  pub fn from_map(mut map: BTreeMap<String, String>) -> Self {
    let default = map
      .remove("default")
      .unwrap_or_else(|| DEFAULT_LANGUAGE_ICON.to_string());
    Self { map, default }
  }

  /// Icon class string for a language, falling back to the default icon.
  #[must_use]
  pub fn get(&self, language: &str) -> &str {
    self.map.get(language).map_or(&self.default, String::as_str)
  }
}

impl Default for IconTable {
  /// The built-in devicon table covering common languages.
  fn default() -> Self {
    let entries = [
      ("bash", "devicon-bash-plain"),
      ("c", "devicon-c-plain"),
      ("cpp", "devicon-cplusplus-plain"),
      ("csharp", "devicon-csharp-plain"),
      ("css", "devicon-css3-plain"),
      ("go", "devicon-go-plain"),
      ("haskell", "devicon-haskell-plain"),
      ("html", "devicon-html5-plain"),
      ("java", "devicon-java-plain"),
      ("javascript", "devicon-javascript-plain"),
      ("js", "devicon-javascript-plain"),
      ("json", "devicon-json-plain"),
      ("kotlin", "devicon-kotlin-plain"),
      ("lua", "devicon-lua-plain"),
      ("markdown", "devicon-markdown-original"),
      ("nix", "devicon-nixos-plain"),
      ("php", "devicon-php-plain"),
      ("python", "devicon-python-plain"),
      ("ruby", "devicon-ruby-plain"),
      ("rust", "devicon-rust-original"),
      ("scala", "devicon-scala-plain"),
      ("sh", "devicon-bash-plain"),
      ("sql", "devicon-azuresqldatabase-plain"),
      ("swift", "devicon-swift-plain"),
      ("toml", "devicon-vscode-plain"),
      ("ts", "devicon-typescript-plain"),
      ("typescript", "devicon-typescript-plain"),
      ("yaml", "devicon-yaml-plain"),
      ("zig", "devicon-zig-original"),
    ];
    Self {
      map:     entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
      default: DEFAULT_LANGUAGE_ICON.to_string(),
    }
  }
}

/// Maps admonition kinds to icon-font class strings.
///
/// Only kinds present in the table are recognized as admonitions; other
/// directives pass through the decorator untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmonitionIcons {
  map: BTreeMap<String, String>,
}

impl AdmonitionIcons {
  /// Whether `kind` names a known admonition.
  #[must_use]
  pub fn recognizes(&self, kind: &str) -> bool {
    self.map.contains_key(kind)
  }

  /// Icon class string for a recognized kind.
  #[must_use]
  pub fn get(&self, kind: &str) -> Option<&str> {
    self.map.get(kind).map(String::as_str)
  }
}

impl Default for AdmonitionIcons {
  fn default() -> Self {
    let entries = [
      ("note", "fa fa-pencil"),
      ("tip", "fa fa-lightbulb-o"),
      ("important", "fa fa-exclamation-circle"),
      ("warning", "fa fa-exclamation-triangle"),
      ("caution", "fa fa-fire"),
      ("danger", "fa fa-bolt"),
      ("info", "fa fa-info-circle"),
    ];
    Self {
      map: entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    }
  }
}
