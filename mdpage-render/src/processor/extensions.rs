//! Structural tree passes: heading slugs, anchors, table of contents and
//! sectionizing.

use std::collections::HashSet;

use log::warn;
use regex::RegexBuilder;

use crate::{
  processor::types::{AnchorBehavior, AnchorOptions},
  tree::{walk_mut, AttrValue, Node},
  types::Header,
  utils::{never_matching_regex, slugify},
};

/// Heading level from an element tag, for `h1` through `h6`.
fn heading_level(node: &Node) -> Option<u8> {
  match node.tag()? {
    "h1" => Some(1),
    "h2" => Some(2),
    "h3" => Some(3),
    "h4" => Some(4),
    "h5" => Some(5),
    "h6" => Some(6),
    _ => None,
  }
}

/// Assign a slug `id` to every heading and collect the document outline.
///
/// Headings that already carry an `id` keep it. Duplicate slugs are
/// disambiguated with a numeric suffix, in document order.
pub fn assign_heading_slugs(root: &mut Node) -> Vec<Header> {
  let mut used: HashSet<String> = HashSet::new();
  let mut headers = Vec::new();

  walk_mut(root, &mut |node| {
    let Some(level) = heading_level(node) else {
      return;
    };
    let text = node.text_content();

    let id = if let Some(existing) = node.attr("id") {
      existing.to_text()
    } else {
      let base = slugify(&text);
      let mut candidate = base.clone();
      let mut counter = 1;
      while used.contains(&candidate) {
        candidate = format!("{base}-{counter}");
        counter += 1;
      }
      node.set_attr("id", AttrValue::Text(candidate.clone()));
      candidate
    };
    used.insert(id.clone());

    headers.push(Header { text, level, id });
  });

  headers
}

/// Inject a self-link anchor into every heading that carries an `id`.
///
/// Headings that already contain an anchor with the configured class are
/// skipped, so the pass is safe to run more than once.
pub fn inject_heading_anchors(root: &mut Node, options: &AnchorOptions) {
  walk_mut(root, &mut |node| {
    if heading_level(node).is_none() {
      return;
    }
    let Some(id) = node.attr("id").map(AttrValue::to_text) else {
      return;
    };
    if node
      .children()
      .iter()
      .any(|child| child.is("a") && child.has_class(&options.class))
    {
      return;
    }

    let anchor = Node::elem_with(
      "a",
      vec![
        ("class", AttrValue::tokens_of(&options.class)),
        ("href", AttrValue::Text(format!("#{id}"))),
        ("aria-hidden", AttrValue::Text("true".to_string())),
        ("tabindex", AttrValue::Text("-1".to_string())),
      ],
      vec![Node::text(options.content.clone())],
    );
    let Some(children) = node.children_mut() else {
      return;
    };
    match options.behavior {
      AnchorBehavior::Prepend => children.insert(0, anchor),
      AnchorBehavior::Append => children.push(anchor),
    }
  });
}

/// Insert a table of contents after the first top-level heading whose text
/// matches `pattern` (case-insensitive).
///
/// The matched placeholder heading itself is excluded from the generated
/// list. Nothing happens when no heading matches.
pub fn insert_toc(root: &mut Node, pattern: &str, headers: &[Header]) {
  let re = RegexBuilder::new(pattern)
    .case_insensitive(true)
    .build()
    .unwrap_or_else(|e| {
      warn!("Invalid table-of-contents heading pattern {pattern:?}: {e}");
      never_matching_regex()
    });

  let Some(children) = root.children_mut() else {
    return;
  };
  let Some(position) = children.iter().position(|node| {
    heading_level(node).is_some() && re.is_match(node.text_content().trim())
  }) else {
    return;
  };

  let placeholder_id = children[position].attr("id").map(AttrValue::to_text);
  let entries: Vec<Node> = headers
    .iter()
    .filter(|header| Some(&header.id) != placeholder_id.as_ref())
    .map(|header| {
      let mut link = Node::elem("a", vec![Node::text(header.text.clone())]);
      link.set_attr("href", AttrValue::Text(format!("#{}", header.id)));
      Node::elem_with(
        "li",
        vec![(
          "class",
          AttrValue::Tokens(vec![
            "toc-entry".to_string(),
            format!("toc-level-{}", header.level),
          ]),
        )],
        vec![link],
      )
    })
    .collect();

  let toc = Node::elem_with(
    "ul",
    vec![("class", AttrValue::tokens_of("toc"))],
    entries,
  );
  children.insert(position + 1, toc);
}

/// Group top-level content into `<section>` elements led by headings.
///
/// Each heading opens a section that runs until the next heading of the
/// same or a higher level. Content before the first heading stays outside
/// any section.
pub fn sectionize(root: &mut Node) {
  let Some(children) = root.children_mut() else {
    return;
  };
  let nodes = std::mem::take(children);

  let mut result: Vec<Node> = Vec::new();
  // Open sections, innermost last, paired with their heading level
  let mut stack: Vec<(u8, Node)> = Vec::new();

  fn close_to(stack: &mut Vec<(u8, Node)>, result: &mut Vec<Node>, level: u8) {
    while stack.last().is_some_and(|(open, _)| *open >= level) {
      let Some((_, section)) = stack.pop() else {
        break;
      };
      append_into(stack, result, section);
    }
  }

  for node in nodes {
    if let Some(level) = heading_level(&node) {
      close_to(&mut stack, &mut result, level);
      let mut section = Node::elem_with(
        "section",
        vec![("class", AttrValue::tokens_of("section"))],
        vec![],
      );
      if let Some(id) = node.attr("id") {
        section.set_attr("aria-labelledby", AttrValue::Text(id.to_text()));
      }
      if let Some(section_children) = section.children_mut() {
        section_children.push(node);
      }
      stack.push((level, section));
    } else {
      append_into(&mut stack, &mut result, node);
    }
  }
  close_to(&mut stack, &mut result, 1);

  *children = result;
}

/// Append a node into the innermost open section, or the result list when
/// no section is open.
fn append_into(stack: &mut [(u8, Node)], result: &mut Vec<Node>, node: Node) {
  if let Some((_, section)) = stack.last_mut() {
    if let Some(children) = section.children_mut() {
      children.push(node);
      return;
    }
  }
  result.push(node);
}
