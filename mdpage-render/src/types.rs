//! Types for the mdpage-render public API.
use serde::{Deserialize, Serialize};

/// A heading in a rendered document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
  /// Heading text (inline content, no markup).
  pub text:  String,
  /// Heading level (1-6).
  pub level: u8,
  /// Generated anchor ID for the heading.
  pub id:    String,
}

/// Result of rendering one Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderResult {
  /// Rendered HTML fragment (body content, not a full page).
  pub html: String,

  /// Extracted headings, in document order.
  pub headers: Vec<Header>,

  /// Document title, if found (first level-1 heading).
  pub title: Option<String>,
}
