//! Language icon decoration for fenced code blocks.

use crate::{
  decorate::IconTable,
  tree::{walk_mut, AttrValue, Node, TreePass},
};

/// Decorates `<pre>` blocks whose code child carries a `language-*` class.
///
/// Decorated blocks gain a `has-language` class, a `data-language`
/// attribute, and a prepended icon span. Blocks already carrying
/// `has-language` are skipped, so the pass can run repeatedly over the same
/// tree without stacking icons.
#[derive(Debug, Clone, Default)]
pub struct LanguageIconDecorator {
  icons: IconTable,
}

impl LanguageIconDecorator {
  #[must_use]
  pub fn new(icons: IconTable) -> Self {
    Self { icons }
  }

  fn decorate(&self, pre: &mut Node) {
    if pre.has_class("has-language") {
      return;
    }
    let Some(language) = code_language(pre) else {
      return;
    };

    pre.add_class("has-language");
    pre.set_attr("data-language", AttrValue::Text(language.clone()));

    let icon = Node::elem_with(
      "span",
      vec![("class", AttrValue::tokens_of("code-lang-icon"))],
      vec![Node::elem_with(
        "i",
        vec![
          ("class", AttrValue::tokens_of(self.icons.get(&language))),
          ("title", AttrValue::Text(language.to_uppercase())),
        ],
        vec![],
      )],
    );
    if let Some(children) = pre.children_mut() {
      children.insert(0, icon);
    }
  }
}

/// Lowercased language name from the first `language-*` token of a code
/// child, if any.
fn code_language(pre: &Node) -> Option<String> {
  pre
    .children()
    .iter()
    .find(|child| child.is("code"))
    .and_then(|code| {
      code
        .class_tokens()
        .iter()
        .find_map(|token| token.strip_prefix("language-").map(str::to_lowercase))
    })
}

impl TreePass for LanguageIconDecorator {
  fn apply(&self, root: &mut Node) {
    walk_mut(root, &mut |node| {
      if node.is("pre") {
        self.decorate(node);
      }
    });
  }
}
