//! # mdpage-render
//!
//! Rendering pipeline for viewing a single Markdown file as a styled HTML
//! page. The heavy lifting of CommonMark parsing is delegated to `comrak`;
//! this crate owns everything around it:
//!
//! - a closed, tagged document tree ([`tree::Node`]) that parsed Markdown is
//!   converted into before serialization,
//! - tree decoration passes (heading slugs and anchors, table of contents,
//!   sectionizing, syntax highlighting, language icons on fenced code blocks,
//!   admonition blocks from container directives),
//! - an inline markup rewriter for `==highlight==`, `^superscript^` and
//!   `_-subscript-_` spans ([`markup`]),
//! - DOM-level post-processing of the rendered HTML: text-node rewriting and
//!   copy-button affordances ([`postprocess`]).
//!
//! ## Quick start
//!
//! ```rust
//! use mdpage_render::{Processor, RenderOptions};
//!
//! let processor = Processor::new(RenderOptions::default()).unwrap();
//! let result = processor.render("# Hello\n\nThis is ~~flavored~~ Markdown.");
//!
//! assert!(result.html.contains("<h1"));
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! ```
//!
//! ## Pipeline order
//!
//! `render` runs a fixed stage order: callout normalization, container
//! directive segmentation, comrak parsing with the configured extensions,
//! AST-to-tree conversion, heading slugs, table of contents, heading
//! anchors, sectionizing, syntax highlighting, the language-icon decorator,
//! the admonition decorator, and finally serialization. [`postprocess::apply`]
//! is a separate step intended to run over the serialized HTML.

pub mod decorate;
pub mod directive;
mod error;
pub mod markup;
pub mod postprocess;
pub mod processor;
pub mod syntax;
pub mod tree;
mod types;
pub mod utils;

pub use crate::{
  decorate::{AdmonitionDecorator, AdmonitionIcons, IconTable, LanguageIconDecorator},
  error::RenderError,
  markup::rewrite_markup,
  processor::{
    AnchorBehavior,
    AnchorOptions,
    FrontmatterStyle,
    Processor,
    RenderOptions,
  },
  tree::{AttrValue, Node, TreePass},
  types::{Header, RenderResult},
};
