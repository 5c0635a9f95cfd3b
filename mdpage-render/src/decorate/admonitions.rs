//! Admonition rendering for container directives.

use std::mem;

use crate::{
  decorate::AdmonitionIcons,
  tree::{walk_mut, AttrValue, Node, TreePass},
  utils::capitalize_first,
};

/// Rewrites recognized directives into styled admonition blocks.
///
/// A directive whose name matches a known admonition kind becomes
///
/// ```html
/// <div class="admonition admonition-note">
///   <p class="admonition-title"><i class="fa fa-pencil"></i> Note</p>
///   <div class="admonition-body">...</div>
/// </div>
/// ```
///
/// The directive's first child, when it is a text node, supplies the title;
/// an empty or missing title falls back to the capitalized kind name.
/// Directives with unrecognized names are left for the serializer to handle.
#[derive(Debug, Clone, Default)]
pub struct AdmonitionDecorator {
  icons: AdmonitionIcons,
}

impl AdmonitionDecorator {
  #[must_use]
  pub fn new(icons: AdmonitionIcons) -> Self {
    Self { icons }
  }

  fn decorate(&self, node: &mut Node) {
    let Node::Directive { name, children } = node else {
      return;
    };
    let kind = name.to_lowercase();
    let Some(icon) = self.icons.get(&kind) else {
      return;
    };

    let mut body = mem::take(children);
    let title = match body.first() {
      Some(Node::Text(label)) => {
        let label = label.trim().to_string();
        body.remove(0);
        if label.is_empty() {
          capitalize_first(&kind)
        } else {
          label
        }
      },
      _ => capitalize_first(&kind),
    };

    let title_node = Node::elem_with(
      "p",
      vec![("class", AttrValue::tokens_of("admonition-title"))],
      vec![
        Node::elem_with("i", vec![("class", AttrValue::tokens_of(icon))], vec![]),
        Node::text(format!(" {title}")),
      ],
    );
    let body_node = Node::elem_with(
      "div",
      vec![("class", AttrValue::tokens_of("admonition-body"))],
      body,
    );

    *node = Node::elem_with(
      "div",
      vec![(
        "class",
        AttrValue::Tokens(vec![
          "admonition".to_string(),
          format!("admonition-{kind}"),
        ]),
      )],
      vec![title_node, body_node],
    );
  }
}

impl TreePass for AdmonitionDecorator {
  fn apply(&self, root: &mut Node) {
    walk_mut(root, &mut |node| self.decorate(node));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tree::serialize::to_html;

  fn directive(name: &str, title: &str, body: Vec<Node>) -> Node {
    let mut children = vec![Node::text(title)];
    children.extend(body);
    Node::Root {
      children: vec![Node::Directive {
        name: name.to_string(),
        children,
      }],
    }
  }

  #[test]
  fn test_note_with_explicit_title() {
    let mut tree = directive("note", "Heads up", vec![Node::elem(
      "p",
      vec![Node::text("body text")],
    )]);
    AdmonitionDecorator::default().apply(&mut tree);

    let html = to_html(&tree, true);
    assert!(html.contains(r#"<div class="admonition admonition-note">"#));
    assert!(html.contains(
      r#"<p class="admonition-title"><i class="fa fa-pencil"></i> Heads up</p>"#
    ));
    assert!(html.contains(r#"<div class="admonition-body"><p>body text</p></div>"#));
  }

  #[test]
  fn test_default_title_capitalizes_kind() {
    let mut tree = directive("warning", "", vec![Node::text("careful")]);
    AdmonitionDecorator::default().apply(&mut tree);

    let html = to_html(&tree, true);
    assert!(html.contains(r#"<i class="fa fa-exclamation-triangle"></i> Warning</p>"#));
  }

  #[test]
  fn test_mixed_case_kind_recognized() {
    let mut tree = directive("WARNING", "", vec![]);
    AdmonitionDecorator::default().apply(&mut tree);

    let html = to_html(&tree, true);
    assert!(html.contains(r#"admonition admonition-warning"#));
    assert!(html.contains("> Warning</p>"));
  }

  #[test]
  fn test_unrecognized_directive_left_alone() {
    let mut tree = directive("foobar", "", vec![Node::text("content")]);
    AdmonitionDecorator::default().apply(&mut tree);

    let html = to_html(&tree, true);
    assert!(html.contains(r#"<div data-directive="foobar">"#));
    assert!(!html.contains("admonition"));
  }

  #[test]
  fn test_non_text_first_child_stays_in_body() {
    let mut tree = Node::Root {
      children: vec![Node::Directive {
        name:     "tip".to_string(),
        children: vec![Node::elem("p", vec![Node::text("all body")])],
      }],
    };
    AdmonitionDecorator::default().apply(&mut tree);

    let html = to_html(&tree, true);
    assert!(html.contains("> Tip</p>"));
    assert!(html.contains(r#"<div class="admonition-body"><p>all body</p></div>"#));
  }
}
