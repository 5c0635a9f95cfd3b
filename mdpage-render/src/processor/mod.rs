//! Markdown rendering pipeline.
//!
//! [`Processor`] owns the configuration and runs the stages in a fixed
//! order; the structural passes live in [`extensions`] and the AST
//! conversion in [`convert`]. [`process::render_with_recovery`] adds a
//! panic guard for untrusted input.

mod convert;
mod core;
mod extensions;
pub mod process;
mod types;

pub use self::{
  convert::Converter,
  extensions::{
    assign_heading_slugs,
    inject_heading_anchors,
    insert_toc,
    sectionize,
  },
  process::{process_safe, render_with_recovery},
  types::{
    AnchorBehavior,
    AnchorOptions,
    FrontmatterStyle,
    Processor,
    RenderOptions,
    DEFAULT_TOC_HEADING,
  },
};
