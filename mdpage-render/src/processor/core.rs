//! The rendering pipeline itself.

use comrak::{options::Options, parse_document, Arena};
use log::warn;

use crate::{
  decorate::{AdmonitionDecorator, IconTable, LanguageIconDecorator},
  directive::{normalize_callouts, split_directives, Segment},
  error::RenderError,
  processor::{
    convert::Converter,
    extensions::{
      assign_heading_slugs,
      inject_heading_anchors,
      insert_toc,
      sectionize,
    },
    types::{Processor, RenderOptions},
  },
  syntax::Highlighter,
  tree::{serialize::to_html, walk_mut, Node, TreePass},
  types::RenderResult,
  utils::load_icon_map,
};

impl Processor {
  /// Create a processor, loading every configured external capability.
  ///
  /// # Errors
  ///
  /// Returns an error when a custom icon table cannot be loaded or the
  /// requested highlight theme does not exist. Rendering itself never
  /// fails after construction succeeds.
  pub fn new(options: RenderOptions) -> Result<Self, RenderError> {
    let lang_icons = match &options.icon_table_path {
      Some(path) => IconTable::from_map(load_icon_map(path)?),
      None => IconTable::default(),
    };
    let highlighter = if options.highlight_code {
      Some(Highlighter::new(options.highlight_theme.as_deref())?)
    } else {
      None
    };
    Ok(Self {
      options,
      highlighter,
      lang_icons,
    })
  }

  /// The options this processor was built with.
  #[must_use]
  pub const fn options(&self) -> &RenderOptions {
    &self.options
  }

  /// Render Markdown source to HTML.
  ///
  /// Runs the full pipeline: callout normalization, directive
  /// segmentation, CommonMark parsing, structural passes, highlighting,
  /// decoration and serialization. Failures in individual stages degrade
  /// (a code block that cannot be highlighted stays plain) rather than
  /// failing the document.
  #[must_use]
  pub fn render(&self, source: &str) -> RenderResult {
    let normalized = normalize_callouts(source);
    let segments = split_directives(&normalized);

    let mut children = Vec::new();
    let mut first_markdown = true;
    for segment in segments {
      match segment {
        Segment::Markdown(text) => {
          // Frontmatter is only valid at the very top of the document
          let allow_frontmatter = first_markdown;
          first_markdown = false;
          children.extend(self.parse_fragment(&text, allow_frontmatter));
        },
        Segment::Directive { name, title, body } => {
          let mut directive_children = vec![Node::text(title)];
          directive_children.extend(self.parse_fragment(&body, false));
          children.push(Node::Directive {
            name,
            children: directive_children,
          });
        },
      }
    }
    let mut tree = Node::Root { children };

    let headers = assign_heading_slugs(&mut tree);
    // TOC runs before anchor injection so the placeholder heading still
    // matches on its bare text
    if let Some(pattern) = &self.options.toc_heading {
      insert_toc(&mut tree, pattern, &headers);
    }
    if let Some(anchors) = &self.options.anchors {
      inject_heading_anchors(&mut tree, anchors);
    }
    if self.options.sectionize {
      sectionize(&mut tree);
    }
    if let Some(highlighter) = &self.highlighter {
      highlight_code_blocks(&mut tree, highlighter);
    }
    LanguageIconDecorator::new(self.lang_icons.clone()).apply(&mut tree);
    AdmonitionDecorator::new(self.options.admonition_icons.clone())
      .apply(&mut tree);

    let title = headers
      .iter()
      .find(|header| header.level == 1)
      .map(|header| header.text.clone());
    let html = to_html(&tree, self.options.raw_html_in_output);

    RenderResult {
      html,
      headers,
      title,
    }
  }

  /// Parse one Markdown fragment into tree nodes.
  fn parse_fragment(&self, source: &str, allow_frontmatter: bool) -> Vec<Node> {
    let arena = Arena::new();
    let options = self.comrak_options(allow_frontmatter);
    let root = parse_document(&arena, source, &options);
    let converter = Converter::new(self.options.raw_html_in_tree);
    match converter.convert_document(root) {
      Node::Root { children } => children,
      other => vec![other],
    }
  }

  /// Build comrak options from the render configuration.
  fn comrak_options(&self, allow_frontmatter: bool) -> Options<'_> {
    let mut options = Options::default();

    if self.options.gfm {
      options.extension.table = true;
      options.extension.strikethrough = true;
      options.extension.autolink = true;
      options.extension.tasklist = true;
    }
    // Superscript and subscript stay off: those syntaxes belong to the
    // post-render text-node rewriter, which also tags them with classes
    options.extension.underline = true;
    if self.options.emoji_shortcodes {
      options.extension.shortcodes = true;
    }
    if allow_frontmatter {
      if let Some(style) = self.options.frontmatter {
        options.extension.front_matter_delimiter =
          Some(style.delimiter().to_string());
      }
    }

    options.parse.smart = self.options.typographic;
    // Raw HTML policy is enforced at conversion and serialization time,
    // not by comrak's tagfilter
    options.render.r#unsafe = true;

    options
  }
}

/// Replace the text of decorated code blocks with styled highlight spans.
///
/// Blocks whose language cannot be highlighted keep their plain text; the
/// failure is logged and counted against nothing.
fn highlight_code_blocks(root: &mut Node, highlighter: &Highlighter) {
  walk_mut(root, &mut |node| {
    if !node.is("pre") || node.has_class("highlight") {
      return;
    }
    let Some(code) = node
      .children_mut()
      .and_then(|children| children.iter_mut().find(|child| child.is("code")))
    else {
      return;
    };
    let Some(language) = code
      .class_tokens()
      .iter()
      .find_map(|token| token.strip_prefix("language-").map(str::to_string))
    else {
      return;
    };

    let source = code.text_content();
    match highlighter.highlight_spans(&source, &language) {
      Ok(spans) => {
        if let Some(children) = code.children_mut() {
          *children = spans;
        }
        node.add_class("highlight");
      },
      Err(e) => {
        warn!("Skipping highlight for {language} code block: {e}");
      },
    }
  });
}
