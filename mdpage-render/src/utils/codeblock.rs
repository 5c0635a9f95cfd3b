//! Line-level tracking of fenced code blocks.
//!
//! Used by the preprocessing stages that scan Markdown source line by line
//! (callout normalization, container directive segmentation) so that fence
//! content is never mistaken for block syntax.

/// State tracking for code fence detection in Markdown source.
///
/// Tracks whether the scan is currently inside a fenced code block and
/// remembers the fence character and length so only a matching, long-enough
/// fence closes the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FenceTracker {
  open: Option<(char, usize)>,
}

impl FenceTracker {
  /// Create a new fence tracker.
  #[must_use]
  pub const fn new() -> Self {
    Self { open: None }
  }

  /// Check if currently inside a code block.
  #[must_use]
  pub const fn in_code_block(&self) -> bool {
    self.open.is_some()
  }

  /// Update fence state for one line. Call once per line, in order.
  ///
  /// The line that opens or closes a fence reports `in_code_block() == true`
  /// after observation; callers that dispatch on block syntax should observe
  /// first, then test.
  pub fn observe(&mut self, line: &str) {
    let trimmed = line.trim_start();
    let Some(fence_char) = trimmed.chars().next() else {
      return;
    };
    if fence_char != '`' && fence_char != '~' {
      return;
    }

    let run = trimmed.chars().take_while(|&c| c == fence_char).count();
    if run < 3 {
      return;
    }

    match self.open {
      None => self.open = Some((fence_char, run)),
      // A closing fence must use the same character and be at least as long
      Some((open_char, open_len)) if open_char == fence_char && run >= open_len => {
        self.open = None;
      },
      Some(_) => {},
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_basic_fence() {
    let mut tracker = FenceTracker::new();
    assert!(!tracker.in_code_block());

    tracker.observe("```rust");
    assert!(tracker.in_code_block());

    tracker.observe("fn main() {}");
    assert!(tracker.in_code_block());

    tracker.observe("```");
    assert!(!tracker.in_code_block());
  }

  #[test]
  fn test_tilde_fence() {
    let mut tracker = FenceTracker::new();

    tracker.observe("~~~");
    assert!(tracker.in_code_block());

    tracker.observe("code");
    tracker.observe("~~~");
    assert!(!tracker.in_code_block());
  }

  #[test]
  fn test_mismatched_fence_char() {
    let mut tracker = FenceTracker::new();

    tracker.observe("```");
    tracker.observe("~~~");
    assert!(tracker.in_code_block());

    tracker.observe("```");
    assert!(!tracker.in_code_block());
  }

  #[test]
  fn test_fence_length() {
    let mut tracker = FenceTracker::new();

    tracker.observe("````");
    assert!(tracker.in_code_block());

    // A shorter fence does not close a longer one
    tracker.observe("```");
    assert!(tracker.in_code_block());

    tracker.observe("`````");
    assert!(!tracker.in_code_block());
  }

  #[test]
  fn test_indented_fence() {
    let mut tracker = FenceTracker::new();

    tracker.observe("    ```");
    assert!(tracker.in_code_block());

    tracker.observe("    ```");
    assert!(!tracker.in_code_block());
  }

  #[test]
  fn test_short_runs_ignored() {
    let mut tracker = FenceTracker::new();

    tracker.observe("``not a fence``");
    assert!(!tracker.in_code_block());

    tracker.observe("~inline~");
    assert!(!tracker.in_code_block());
  }
}
