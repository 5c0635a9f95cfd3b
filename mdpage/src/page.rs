//! HTML page assembly around the rendered Markdown body.

use tera::Tera;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
const ERROR_TEMPLATE: &str = include_str!("../templates/error.html");
const STYLESHEET: &str = include_str!("../assets/mdpage.css");
const COPY_SCRIPT: &str = include_str!("../assets/copy.js");

/// Errors from page template rendering.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
  #[error("template rendering failed: {0}")]
  Template(#[from] tera::Error),
}

/// Render the full HTML page around a processed Markdown body.
///
/// The stylesheet and the copy-button script are inlined so the output is
/// a single self-contained file.
pub fn render_page(title: &str, body: &str) -> Result<String, PageError> {
  let mut tera = Tera::default();
  tera.add_raw_template("page.html", PAGE_TEMPLATE)?;

  let mut context = tera::Context::new();
  context.insert("title", title);
  context.insert("body", body);
  context.insert("style", STYLESHEET);
  context.insert("script", COPY_SCRIPT);

  Ok(tera.render("page.html", &context)?)
}

/// Render an error panel page for a fatal rendering failure.
///
/// Falls back to a bare preformatted page when even the error template
/// cannot be rendered.
#[must_use]
pub fn render_error_page(message: &str, details: &str) -> String {
  let attempt = || -> Result<String, PageError> {
    let mut tera = Tera::default();
    tera.add_raw_template("error.html", ERROR_TEMPLATE)?;

    let mut context = tera::Context::new();
    context.insert("message", message);
    context.insert("details", details);
    context.insert("style", STYLESHEET);

    Ok(tera.render("error.html", &context)?)
  };

  attempt().unwrap_or_else(|_| {
    format!(
      "<!doctype html><title>mdpage error</title><pre>{message}\n\n{details}</pre>"
    )
  })
}
