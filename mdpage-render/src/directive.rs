//! Container directives and callout normalization.
//!
//! Two line-oriented preprocessing steps that run before CommonMark parsing:
//!
//! 1. [`normalize_callouts`] rewrites GitHub-style callouts (`> [!NOTE]`)
//!    into container-directive form so a single downstream path handles
//!    both syntaxes.
//! 2. [`split_directives`] splits `::: name title` ... `:::` blocks out of
//!    the source. Directive bodies are returned as raw Markdown for the
//!    caller to parse; the directive name and title travel alongside.
//!
//! Both steps are code-fence aware: fence content is never interpreted as
//! block syntax.

use crate::utils::codeblock::FenceTracker;

/// Callout kinds accepted in the `> [!KIND]` syntax.
const CALLOUT_KINDS: [&str; 6] =
  ["NOTE", "TIP", "IMPORTANT", "WARNING", "CAUTION", "DANGER"];

/// One segment of a pre-split Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// Plain Markdown between directives.
  Markdown(String),
  /// A container directive with its body still in Markdown form.
  Directive {
    /// Directive name, lowercased.
    name:  String,
    /// Title text from the opening line; empty when none was given.
    title: String,
    /// Raw Markdown body.
    body:  String,
  },
}

/// Rewrite GitHub-style callouts into container-directive form.
///
/// `> [!NOTE]` followed by quoted lines becomes a `::: note` block holding
/// the unquoted content. Lines inside code fences are left alone.
#[must_use]
pub fn normalize_callouts(content: &str) -> String {
  let mut result: Vec<String> = Vec::new();
  let mut lines = content.lines().peekable();
  let mut tracker = FenceTracker::new();

  while let Some(line) = lines.next() {
    tracker.observe(line);

    if !tracker.in_code_block() {
      if let Some(kind) = parse_callout_start(line) {
        let mut body = Vec::new();
        while let Some(next) = lines.peek() {
          let trimmed = next.trim_start();
          if let Some(rest) = trimmed.strip_prefix('>') {
            body.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
            lines.next();
          } else {
            break;
          }
        }
        result.push(format!("::: {kind}"));
        result.extend(body);
        result.push(":::".to_string());
        continue;
      }
    }

    result.push(line.to_string());
  }

  result.join("\n")
}

/// Parse a callout opening line: `> [!KIND]`, returning the lowercased kind.
fn parse_callout_start(line: &str) -> Option<String> {
  let trimmed = line.trim_start();
  let rest = trimmed.strip_prefix("> [!")?;
  let close = rest.find(']')?;
  let kind = &rest[..close];
  if !CALLOUT_KINDS.contains(&kind) {
    return None;
  }
  // Only a bare marker line opens a callout; trailing text stays a quote
  if !rest[close + 1..].trim().is_empty() {
    return None;
  }
  Some(kind.to_lowercase())
}

/// Split Markdown source into plain segments and container directives.
///
/// A directive opens with `::: name` (optionally followed by a title) and
/// closes with a bare `:::`. An unterminated directive runs to the end of
/// the input. Directives do not nest; an inner `::: name` line is kept as
/// body content.
#[must_use]
pub fn split_directives(content: &str) -> Vec<Segment> {
  let mut segments = Vec::new();
  let mut markdown: Vec<&str> = Vec::new();
  let mut lines = content.lines();
  let mut tracker = FenceTracker::new();

  while let Some(line) = lines.next() {
    tracker.observe(line);

    if tracker.in_code_block() {
      markdown.push(line);
      continue;
    }

    let Some((name, title)) = parse_directive_start(line) else {
      markdown.push(line);
      continue;
    };

    if !markdown.is_empty() {
      segments.push(Segment::Markdown(markdown.join("\n")));
      markdown.clear();
    }

    let mut body: Vec<&str> = Vec::new();
    let mut body_tracker = FenceTracker::new();
    for body_line in lines.by_ref() {
      body_tracker.observe(body_line);
      if !body_tracker.in_code_block() && body_line.trim() == ":::" {
        break;
      }
      body.push(body_line);
    }

    segments.push(Segment::Directive {
      name,
      title,
      body: body.join("\n"),
    });
  }

  if !markdown.is_empty() {
    segments.push(Segment::Markdown(markdown.join("\n")));
  }

  segments
}

/// Parse a directive opening line: `::: name title...` or `:::name`.
fn parse_directive_start(line: &str) -> Option<(String, String)> {
  let trimmed = line.trim();
  let rest = trimmed.strip_prefix(":::")?;
  // A bare ::: is a (stray) closer, not an opener
  let rest = rest.trim_start();
  let mut parts = rest.splitn(2, char::is_whitespace);
  let name = parts.next().filter(|n| !n.is_empty())?;
  if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
    return None;
  }
  let title = parts.next().unwrap_or("").trim().to_string();
  Some((name.to_lowercase(), title))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "fine in tests")]
mod tests {
  use super::*;

  #[test]
  fn test_split_plain_markdown() {
    let segments = split_directives("# Title\n\nsome text");
    assert_eq!(segments, vec![Segment::Markdown(
      "# Title\n\nsome text".to_string()
    )]);
  }

  #[test]
  fn test_split_directive_with_title() {
    let source = "before\n\n::: warning Mind the gap\ncareful now\n:::\n\nafter";
    let segments = split_directives(source);
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1], Segment::Directive {
      name:  "warning".to_string(),
      title: "Mind the gap".to_string(),
      body:  "careful now".to_string(),
    });
    assert_eq!(segments[2], Segment::Markdown("\nafter".to_string()));
  }

  #[test]
  fn test_directive_name_lowercased() {
    let segments = split_directives("::: WARNING\nx\n:::");
    let Segment::Directive { name, .. } = &segments[0] else {
      panic!("expected directive");
    };
    assert_eq!(name, "warning");
  }

  #[test]
  fn test_fenced_colons_are_content() {
    let source = "```\n::: note\n:::\n```";
    let segments = split_directives(source);
    assert_eq!(segments, vec![Segment::Markdown(source.to_string())]);
  }

  #[test]
  fn test_fence_inside_body_shadows_closer() {
    let source = "::: note\n```\n:::\n```\nstill body\n:::";
    let segments = split_directives(source);
    assert_eq!(segments.len(), 1);
    let Segment::Directive { body, .. } = &segments[0] else {
      panic!("expected directive");
    };
    assert_eq!(body, "```\n:::\n```\nstill body");
  }

  #[test]
  fn test_unterminated_directive_runs_to_eof() {
    let segments = split_directives("::: tip\nno closer here");
    assert_eq!(segments, vec![Segment::Directive {
      name:  "tip".to_string(),
      title: String::new(),
      body:  "no closer here".to_string(),
    }]);
  }

  #[test]
  fn test_bare_closer_is_not_an_opener() {
    let segments = split_directives(":::\ntext");
    assert_eq!(segments, vec![Segment::Markdown(":::\ntext".to_string())]);
  }

  #[test]
  fn test_normalize_callout() {
    let source = "> [!NOTE]\n> first line\n> second line\n\nrest";
    let normalized = normalize_callouts(source);
    assert_eq!(normalized, "::: note\nfirst line\nsecond line\n\nrest");
  }

  #[test]
  fn test_callout_with_trailing_text_left_alone() {
    let source = "> [!NOTE] inline content";
    assert_eq!(normalize_callouts(source), source);
  }

  #[test]
  fn test_unknown_callout_kind_left_alone() {
    let source = "> [!BOGUS]\n> content";
    assert_eq!(normalize_callouts(source), source);
  }

  #[test]
  fn test_callout_inside_fence_left_alone() {
    let source = "```\n> [!NOTE]\n```";
    assert_eq!(normalize_callouts(source), source);
  }
}
