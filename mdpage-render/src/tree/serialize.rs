//! Serialization of the document tree to an HTML string.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{AttrValue, Node};

/// HTML void elements: serialized without a closing tag.
const VOID_ELEMENTS: [&str; 14] = [
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
  "param", "source", "track", "wbr",
];

/// Serialize a tree to HTML.
///
/// `raw_allowed` gates [`Node::Raw`] pass-through; when false, raw payloads
/// are escaped and emitted as visible text instead.
#[must_use]
pub fn to_html(node: &Node, raw_allowed: bool) -> String {
  let mut out = String::new();
  write_node(node, raw_allowed, &mut out);
  out
}

fn write_node(node: &Node, raw_allowed: bool, out: &mut String) {
  match node {
    Node::Root { children } => {
      for child in children {
        write_node(child, raw_allowed, out);
      }
    },
    Node::Text(text) => out.push_str(&encode_text(text)),
    Node::Raw(html) => {
      if raw_allowed {
        out.push_str(html);
      } else {
        out.push_str(&encode_text(html));
      }
    },
    Node::Element {
      tag,
      attrs,
      children,
    } => {
      out.push('<');
      out.push_str(tag);
      write_attrs(attrs, out);
      out.push('>');
      if VOID_ELEMENTS.contains(&tag.as_str()) && children.is_empty() {
        return;
      }
      for child in children {
        write_node(child, raw_allowed, out);
      }
      out.push_str("</");
      out.push_str(tag);
      out.push('>');
    },
    // Directives that no decorator claimed keep their content, wrapped so
    // stylesheets can still target them by name.
    Node::Directive { name, children } => {
      out.push_str("<div data-directive=\"");
      out.push_str(&encode_double_quoted_attribute(name));
      out.push_str("\">");
      for child in children {
        write_node(child, raw_allowed, out);
      }
      out.push_str("</div>");
    },
  }
}

fn write_attrs(attrs: &[(String, AttrValue)], out: &mut String) {
  for (name, value) in attrs {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(&value.to_text()));
    out.push('"');
  }
}
