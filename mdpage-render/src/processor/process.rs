//! Panic-guarded entry points for untrusted input.

use log::error;

use crate::{processor::types::Processor, types::RenderResult};

/// Render Markdown content with panic recovery.
///
/// Wraps [`Processor::render`] so a panic caused by pathological input
/// degrades to a placeholder document instead of taking the caller down.
#[must_use]
pub fn render_with_recovery(
  processor: &Processor,
  content: &str,
) -> RenderResult {
  match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor.render(content)
  })) {
    Ok(result) => result,
    Err(panic_err) => {
      error!("Panic during markdown rendering: {panic_err:?}");
      RenderResult {
        html:    "<div class=\"error\">Critical error rendering markdown \
                  content</div>"
          .to_string(),
        headers: Vec::new(),
        title:   None,
      }
    },
  }
}

/// Safely apply a string-to-string transformation with panic recovery.
///
/// Returns the transformed text, or `fallback` (the original content when
/// the fallback is empty) if the transformation panics.
pub fn process_safe<F>(content: &str, processor_fn: F, fallback: &str) -> String
where
  F: FnOnce(&str) -> String,
{
  if content.is_empty() {
    return String::new();
  }

  let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor_fn(content)
  }));

  match result {
    Ok(processed) => processed,
    Err(e) => {
      if let Some(message) = e.downcast_ref::<String>() {
        error!("Error processing markup: {message}");
      } else if let Some(message) = e.downcast_ref::<&str>() {
        error!("Error processing markup: {message}");
      } else {
        error!("Unknown error occurred while processing markup");
      }

      if fallback.is_empty() {
        content.to_string()
      } else {
        fallback.to_string()
      }
    },
  }
}
