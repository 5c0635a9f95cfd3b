//! DOM-level post-processing of rendered HTML.
//!
//! Runs over the serialized page output, after the tree pipeline:
//!
//! - every visible text node is passed through the inline markup rewriter
//!   ([`crate::markup::rewrite_markup`]), skipping `script`, `style`,
//!   `code` and `pre` subtrees;
//! - every `<pre>` block gains a copy-to-clipboard button.
//!
//! The DOM is mutated collect-then-modify: candidate nodes are gathered
//! first, then replaced, so live iterators are never invalidated. A failed
//! rewrite reverts that one text node and is counted; it never fails the
//! document.

use kuchikikiki::NodeRef;
use log::warn;
use markup5ever::local_name;
use tendril::TendrilSink;

use crate::{markup::rewrite_markup, processor::process_safe};

/// Subtrees whose text is never rewritten.
const SKIP_TAGS: [&str; 4] = ["script", "style", "code", "pre"];

/// Result of a post-processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postprocessed {
  /// The transformed HTML.
  pub html:            String,
  /// Text nodes whose rewrite failed and was reverted.
  pub failed_rewrites: usize,
}

/// Post-process rendered HTML: rewrite inline markup in text nodes and
/// attach copy buttons to code blocks.
///
/// Panics in the underlying HTML machinery degrade to returning the input
/// unchanged.
#[must_use]
pub fn apply(html: &str) -> Postprocessed {
  let mut failed_rewrites = 0;
  let out = process_safe(
    html,
    |html| {
      let document = kuchikikiki::parse_html().one(html);
      failed_rewrites = rewrite_text_nodes(&document);
      attach_copy_buttons(&document);
      serialize_body(&document).unwrap_or_else(|| html.to_string())
    },
    html,
  );
  Postprocessed {
    html: out,
    failed_rewrites,
  }
}

/// Rewrite inline markup in every eligible text node.
///
/// Returns the number of nodes whose rewritten form could not be parsed
/// back into the DOM; those keep their original text.
fn rewrite_text_nodes(document: &NodeRef) -> usize {
  let mut candidates = Vec::new();
  for node in document.inclusive_descendants() {
    let Some(text) = node.as_text() else {
      continue;
    };
    if in_skipped_subtree(&node) {
      continue;
    }
    let original = text.borrow().clone();
    if original.trim().is_empty() {
      continue;
    }
    let rewritten = rewrite_markup(&original);
    if rewritten != original {
      candidates.push((node.clone(), rewritten));
    }
  }

  let mut failures = 0;
  for (node, rewritten) in candidates {
    // The wrapper div keeps leading whitespace out of the parser's
    // before-head mode, where it would be dropped
    let fragment =
      kuchikikiki::parse_html().one(format!("<div>{rewritten}</div>"));
    let Ok(wrapper) = fragment.select_first("div") else {
      warn!("Reverting text rewrite: fragment has no wrapper");
      failures += 1;
      continue;
    };
    let replacements: Vec<NodeRef> = wrapper.as_node().children().collect();
    if replacements.is_empty() {
      warn!("Reverting text rewrite: fragment parsed to nothing");
      failures += 1;
      continue;
    }
    for replacement in replacements {
      node.insert_before(replacement);
    }
    node.detach();
  }
  failures
}

/// Whether any ancestor of `node` is a tag whose text must stay verbatim.
fn in_skipped_subtree(node: &NodeRef) -> bool {
  node.ancestors().any(|ancestor| {
    ancestor.as_element().is_some_and(|element| {
      SKIP_TAGS.contains(&element.name.local.as_ref())
    })
  })
}

/// Append a copy button to every `<pre>` block that lacks one.
fn attach_copy_buttons(document: &NodeRef) {
  let Ok(pre_blocks) = document.select("pre") else {
    return;
  };
  let targets: Vec<NodeRef> = pre_blocks
    .filter(|pre| pre.as_node().select_first("button.copy-button").is_err())
    .map(|pre| pre.as_node().clone())
    .collect();

  for pre in targets {
    let button = NodeRef::new_element(
      markup5ever::QualName::new(
        None,
        markup5ever::ns!(html),
        local_name!("button"),
      ),
      vec![
        (
          kuchikikiki::ExpandedName::new("", "class"),
          kuchikikiki::Attribute {
            prefix: None,
            value:  "copy-button".into(),
          },
        ),
        (
          kuchikikiki::ExpandedName::new("", "type"),
          kuchikikiki::Attribute {
            prefix: None,
            value:  "button".into(),
          },
        ),
        (
          kuchikikiki::ExpandedName::new("", "aria-label"),
          kuchikikiki::Attribute {
            prefix: None,
            value:  "Copy code to clipboard".into(),
          },
        ),
      ],
    );
    button.append(NodeRef::new_text("Copy"));
    pre.append(button);
  }
}

/// Serialize only the body content, dropping the `html`/`head`/`body`
/// wrappers the parser adds around fragments.
fn serialize_body(document: &NodeRef) -> Option<String> {
  let body = document.select_first("body").ok()?;
  let mut out = Vec::new();
  for child in body.as_node().children() {
    child.serialize(&mut out).ok()?;
  }
  String::from_utf8(out).ok()
}
