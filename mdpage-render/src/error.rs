//! Top-level error type for the rendering pipeline.
use crate::{syntax::SyntaxError, utils::UtilError};

/// Errors raised while constructing a [`crate::Processor`].
///
/// All capability loading happens up front in [`crate::Processor::new`];
/// once a processor exists, rendering itself degrades gracefully instead of
/// failing.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  /// A custom icon table could not be loaded.
  #[error("failed to load icon table: {0}")]
  IconTable(#[from] UtilError),

  /// The syntax highlighting backend could not be set up.
  #[error(transparent)]
  Syntax(#[from] SyntaxError),
}
