//! Conversion from the comrak AST to the document tree.
//!
//! Every AST node kind the pipeline cares about maps to an explicit
//! [`Node`]; anything unrecognized converts transparently to its children
//! so new comrak node kinds degrade to their content instead of vanishing.

use comrak::nodes::{
  AstNode,
  ListType,
  NodeValue,
  TableAlignment,
};

use crate::tree::{AttrValue, Node};

/// AST-to-tree converter.
pub struct Converter {
  /// Admit raw HTML from the source; when false, raw blocks are dropped.
  raw_html: bool,
}

impl Converter {
  #[must_use]
  pub const fn new(raw_html: bool) -> Self {
    Self { raw_html }
  }

  /// Convert a parsed document into a [`Node::Root`].
  #[must_use]
  pub fn convert_document<'a>(&self, root: &'a AstNode<'a>) -> Node {
    Node::Root {
      children: self.convert_children(root),
    }
  }

  fn convert_children<'a>(&self, node: &'a AstNode<'a>) -> Vec<Node> {
    let mut out = Vec::new();
    for child in node.children() {
      self.convert_node(child, &mut out);
    }
    out
  }

  #[allow(clippy::too_many_lines, reason = "one arm per AST node kind")]
  fn convert_node<'a>(&self, node: &'a AstNode<'a>, out: &mut Vec<Node>) {
    let data = node.data.borrow();
    match &data.value {
      NodeValue::FrontMatter(_) => {},
      NodeValue::Text(text) => out.push(Node::text(text.clone())),
      NodeValue::SoftBreak => out.push(Node::text("\n")),
      NodeValue::LineBreak => out.push(Node::elem("br", vec![])),
      NodeValue::ThematicBreak => out.push(Node::elem("hr", vec![])),

      NodeValue::Paragraph => {
        out.push(Node::elem("p", self.convert_children(node)));
      },
      NodeValue::Heading(heading) => {
        let tag = format!("h{}", heading.level);
        out.push(Node::Element {
          tag,
          attrs: Vec::new(),
          children: self.convert_children(node),
        });
      },
      NodeValue::BlockQuote => {
        out.push(Node::elem("blockquote", self.convert_children(node)));
      },

      NodeValue::Emph => out.push(Node::elem("em", self.convert_children(node))),
      NodeValue::Strong => {
        out.push(Node::elem("strong", self.convert_children(node)));
      },
      NodeValue::Strikethrough => {
        out.push(Node::elem("del", self.convert_children(node)));
      },
      NodeValue::Superscript => {
        out.push(Node::elem("sup", self.convert_children(node)));
      },
      NodeValue::Subscript => {
        out.push(Node::elem("sub", self.convert_children(node)));
      },
      NodeValue::Underline => {
        out.push(Node::elem("ins", self.convert_children(node)));
      },

      NodeValue::Code(code) => {
        out.push(Node::elem("code", vec![Node::text(code.literal.clone())]));
      },
      NodeValue::CodeBlock(block) => {
        let language = block.info.split_whitespace().next().unwrap_or("");
        let mut code =
          Node::elem("code", vec![Node::text(block.literal.clone())]);
        if !language.is_empty() {
          code.add_class(&format!("language-{language}"));
        }
        out.push(Node::elem("pre", vec![code]));
      },

      NodeValue::HtmlBlock(block) => {
        if self.raw_html {
          out.push(Node::Raw(block.literal.clone()));
        }
      },
      NodeValue::HtmlInline(html) => {
        if self.raw_html {
          out.push(Node::Raw(html.clone()));
        }
      },

      NodeValue::Link(link) => {
        let mut anchor = Node::elem("a", self.convert_children(node));
        anchor.set_attr("href", AttrValue::Text(link.url.clone()));
        if !link.title.is_empty() {
          anchor.set_attr("title", AttrValue::Text(link.title.clone()));
        }
        out.push(anchor);
      },
      NodeValue::Image(link) => {
        let alt = Node::Root {
          children: self.convert_children(node),
        }
        .text_content();
        let mut img = Node::elem("img", vec![]);
        img.set_attr("src", AttrValue::Text(link.url.clone()));
        img.set_attr("alt", AttrValue::Text(alt));
        if !link.title.is_empty() {
          img.set_attr("title", AttrValue::Text(link.title.clone()));
        }
        out.push(img);
      },

      NodeValue::List(list) => {
        let children = self.convert_children(node);
        match list.list_type {
          ListType::Bullet => out.push(Node::elem("ul", children)),
          ListType::Ordered => {
            let mut ol = Node::elem("ol", children);
            if list.start != 1 {
              ol.set_attr("start", AttrValue::Text(list.start.to_string()));
            }
            out.push(ol);
          },
        }
      },
      NodeValue::Item(_) => {
        out.push(Node::elem("li", self.convert_children(node)));
      },
      NodeValue::TaskItem(symbol) => {
        let mut checkbox = Node::elem("input", vec![]);
        checkbox.set_attr("type", AttrValue::Text("checkbox".to_string()));
        checkbox.set_attr("disabled", AttrValue::Text(String::new()));
        if symbol.symbol.is_some() {
          checkbox.set_attr("checked", AttrValue::Text(String::new()));
        }
        let mut children = vec![checkbox, Node::text(" ")];
        children.extend(self.convert_children(node));
        out.push(Node::elem("li", children));
      },

      NodeValue::Table(table) => {
        out.push(self.convert_table(node, &table.alignments));
      },
      // Rows and cells are handled by convert_table; reaching them here
      // means a malformed tree, so fall back to content
      NodeValue::TableRow(_) | NodeValue::TableCell => {
        out.extend(self.convert_children(node));
      },

      NodeValue::ShortCode(shortcode) => {
        out.push(Node::elem_with(
          "span",
          vec![
            ("role", AttrValue::Text("img".to_string())),
            ("aria-label", AttrValue::Text(shortcode.code.clone())),
          ],
          vec![Node::text(shortcode.emoji.clone())],
        ));
      },

      // Document is handled by convert_document; everything else converts
      // transparently to its children
      _ => out.extend(self.convert_children(node)),
    }
  }

  fn convert_table<'a>(
    &self,
    table: &'a AstNode<'a>,
    alignments: &[TableAlignment],
  ) -> Node {
    let mut head_rows = Vec::new();
    let mut body_rows = Vec::new();

    for row in table.children() {
      let NodeValue::TableRow(is_header) = row.data.borrow().value else {
        continue;
      };
      let cell_tag = if is_header { "th" } else { "td" };
      let mut cells = Vec::new();
      for (index, cell) in row.children().enumerate() {
        let mut converted = Node::elem(cell_tag, self.convert_children(cell));
        let align = match alignments.get(index) {
          Some(TableAlignment::Left) => Some("left"),
          Some(TableAlignment::Center) => Some("center"),
          Some(TableAlignment::Right) => Some("right"),
          Some(TableAlignment::None) | None => None,
        };
        if let Some(align) = align {
          converted.set_attr("align", AttrValue::Text(align.to_string()));
        }
        cells.push(converted);
      }
      let tr = Node::elem("tr", cells);
      if is_header {
        head_rows.push(tr);
      } else {
        body_rows.push(tr);
      }
    }

    let mut sections = Vec::new();
    if !head_rows.is_empty() {
      sections.push(Node::elem("thead", head_rows));
    }
    if !body_rows.is_empty() {
      sections.push(Node::elem("tbody", body_rows));
    }
    Node::elem("table", sections)
  }
}
