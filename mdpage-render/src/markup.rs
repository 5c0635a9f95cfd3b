//! Inline text-decoration markup.
//!
//! Rewrites three custom inline syntaxes into HTML:
//!
//! - `==text==` becomes `<mark>text</mark>`
//! - `^text^` becomes `<sup class="suptext">text</sup>`
//! - `_-text-_` becomes `<sub class="subtext">text</sub>`
//!
//! Rules run in that fixed order, each over the whole string, matching
//! non-greedily and pairing markers left to right without overlap. Unmatched
//! markers pass through verbatim. Captured content is inserted as-is: no
//! re-escaping and no recursive rewriting, so nesting is resolved purely by
//! rule order. The function is pure and idempotent on its own output.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::utils::never_matching_regex;

static HIGHLIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"==(.+?)==").unwrap_or_else(|e| {
    error!("Failed to compile HIGHLIGHT_RE regex: {e}");
    never_matching_regex()
  })
});

static SUPERSCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\^(.+?)\^").unwrap_or_else(|e| {
    error!("Failed to compile SUPERSCRIPT_RE regex: {e}");
    never_matching_regex()
  })
});

static SUBSCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"_-(.+?)-_").unwrap_or_else(|e| {
    error!("Failed to compile SUBSCRIPT_RE regex: {e}");
    never_matching_regex()
  })
});

/// Rewrite highlight, superscript and subscript markup in `text`.
///
/// Non-matching text is returned byte-for-byte identical.
#[must_use]
pub fn rewrite_markup(text: &str) -> String {
  let highlighted = HIGHLIGHT_RE.replace_all(text, "<mark>$1</mark>");
  let raised = SUPERSCRIPT_RE
    .replace_all(&highlighted, "<sup class=\"suptext\">$1</sup>");
  SUBSCRIPT_RE
    .replace_all(&raised, "<sub class=\"subtext\">$1</sub>")
    .into_owned()
}
