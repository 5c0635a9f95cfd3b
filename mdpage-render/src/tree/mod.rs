//! HTML-oriented document tree.
//!
//! Parsed Markdown is converted into this closed node type so the decoration
//! passes can be written as exhaustive matches instead of stringly-typed
//! probing. Parents own their children by value; replacing a node means
//! constructing a new node at the same position, never aliasing.

pub mod serialize;

/// An attribute value: plain text or an ordered list of class-like tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
  Text(String),
  Tokens(Vec<String>),
}

impl AttrValue {
  /// Build a token-list value from a whitespace-separated string.
  #[must_use]
  pub fn tokens_of(s: &str) -> Self {
    Self::Tokens(s.split_whitespace().map(str::to_string).collect())
  }

  /// Render the value as attribute text (tokens joined with spaces).
  #[must_use]
  pub fn to_text(&self) -> String {
    match self {
      Self::Text(s) => s.clone(),
      Self::Tokens(tokens) => tokens.join(" "),
    }
  }
}

/// A node in the document tree.
///
/// `Raw` carries raw HTML passed through from the source document; it is
/// only emitted and serialized when the corresponding `raw_html` options
/// allow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Root {
    children: Vec<Node>,
  },
  Element {
    tag:      String,
    attrs:    Vec<(String, AttrValue)>,
    children: Vec<Node>,
  },
  Text(String),
  Directive {
    name:     String,
    children: Vec<Node>,
  },
  Raw(String),
}

impl Node {
  /// An element with no attributes.
  #[must_use]
  pub fn elem(tag: &str, children: Vec<Self>) -> Self {
    Self::Element {
      tag: tag.to_string(),
      attrs: Vec::new(),
      children,
    }
  }

  /// An element with attributes.
  #[must_use]
  pub fn elem_with(
    tag: &str,
    attrs: Vec<(&str, AttrValue)>,
    children: Vec<Self>,
  ) -> Self {
    Self::Element {
      tag:      tag.to_string(),
      attrs:    attrs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect(),
      children,
    }
  }

  /// A text node.
  #[must_use]
  pub fn text(content: impl Into<String>) -> Self {
    Self::Text(content.into())
  }

  /// The element tag name, if this is an element.
  #[must_use]
  pub fn tag(&self) -> Option<&str> {
    match self {
      Self::Element { tag, .. } => Some(tag),
      _ => None,
    }
  }

  /// Whether this node is an element with the given tag.
  #[must_use]
  pub fn is(&self, tag: &str) -> bool {
    self.tag() == Some(tag)
  }

  /// Child nodes; empty for leaves.
  #[must_use]
  pub fn children(&self) -> &[Self] {
    match self {
      Self::Root { children }
      | Self::Element { children, .. }
      | Self::Directive { children, .. } => children,
      Self::Text(_) | Self::Raw(_) => &[],
    }
  }

  /// Mutable child list; `None` for leaves.
  pub fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
    match self {
      Self::Root { children }
      | Self::Element { children, .. }
      | Self::Directive { children, .. } => Some(children),
      Self::Text(_) | Self::Raw(_) => None,
    }
  }

  /// Look up an attribute by name.
  #[must_use]
  pub fn attr(&self, name: &str) -> Option<&AttrValue> {
    match self {
      Self::Element { attrs, .. } => {
        attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
      },
      _ => None,
    }
  }

  /// Set an attribute, replacing an existing value or appending in order.
  pub fn set_attr(&mut self, name: &str, value: AttrValue) {
    let Self::Element { attrs, .. } = self else {
      return;
    };
    if let Some(entry) = attrs.iter_mut().find(|(n, _)| n == name) {
      entry.1 = value;
    } else {
      attrs.push((name.to_string(), value));
    }
  }

  /// Class tokens of this element, empty when absent.
  #[must_use]
  pub fn class_tokens(&self) -> Vec<String> {
    match self.attr("class") {
      Some(AttrValue::Tokens(tokens)) => tokens.clone(),
      Some(AttrValue::Text(s)) => {
        s.split_whitespace().map(str::to_string).collect()
      },
      None => Vec::new(),
    }
  }

  /// Whether this element carries the given class token.
  #[must_use]
  pub fn has_class(&self, token: &str) -> bool {
    self.class_tokens().iter().any(|t| t == token)
  }

  /// Add a class token, creating the attribute if needed.
  pub fn add_class(&mut self, token: &str) {
    if self.has_class(token) {
      return;
    }
    let mut tokens = self.class_tokens();
    tokens.push(token.to_string());
    self.set_attr("class", AttrValue::Tokens(tokens));
  }

  /// Concatenated text content of this node and its descendants.
  #[must_use]
  pub fn text_content(&self) -> String {
    let mut out = String::new();
    for node in self.preorder() {
      if let Self::Text(t) = node {
        out.push_str(t);
      }
    }
    out
  }

  /// Lazy pre-order traversal of this node and its descendants.
  #[must_use]
  pub fn preorder(&self) -> Preorder<'_> {
    Preorder { stack: vec![self] }
  }
}

/// Lazy pre-order iterator over a tree (see [`Node::preorder`]).
pub struct Preorder<'a> {
  stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
  type Item = &'a Node;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.stack.pop()?;
    for child in node.children().iter().rev() {
      self.stack.push(child);
    }
    Some(node)
  }
}

/// Apply `f` to every node in pre-order, with mutable access.
///
/// Unlike the live-DOM walker, the owned tree cannot invalidate an iterator
/// mid-walk; replacement happens by assigning a new node through the `&mut`.
pub fn walk_mut<F>(node: &mut Node, f: &mut F)
where
  F: FnMut(&mut Node),
{
  f(node);
  if let Some(children) = node.children_mut() {
    for child in children {
      walk_mut(child, f);
    }
  }
}

/// A tree-rewriting pass applied between parsing and serialization.
pub trait TreePass {
  fn apply(&self, root: &mut Node);
}
