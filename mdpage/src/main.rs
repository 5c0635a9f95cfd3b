use std::{fs, io::Write, path::Path};

use color_eyre::eyre::{bail, Context, Result};
use log::{debug, info, warn, LevelFilter};
use mdpage_render::{
  postprocess,
  processor::render_with_recovery,
  utils::is_markdown_path,
  Processor,
  RenderOptions,
};

mod cli;
mod page;

use cli::Cli;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  run(&cli)
}

/// Render one input file per the parsed CLI, writing the page (or an
/// error page) to the configured destination.
fn run(cli: &Cli) -> Result<()> {
  if !is_markdown_path(&cli.input) {
    info!(
      "{} does not look like a Markdown file, nothing to do",
      cli.input.display()
    );
    return Ok(());
  }

  let source = fs::read_to_string(&cli.input)
    .wrap_err_with(|| format!("Failed to read {}", cli.input.display()))?;

  let processor = match Processor::new(render_options(cli)) {
    Ok(processor) => processor,
    Err(e) => {
      let page = page::render_error_page(
        "Could not configure the Markdown renderer",
        &e.to_string(),
      );
      write_output(cli.output.as_deref(), &page)?;
      bail!("Failed to configure renderer: {e}");
    },
  };
  debug!("Renderer options: {:?}", processor.options());

  let rendered = render_with_recovery(&processor, &source);
  let processed = postprocess::apply(&rendered.html);
  if processed.failed_rewrites > 0 {
    warn!(
      "{} text node(s) could not be rewritten and were left unchanged",
      processed.failed_rewrites
    );
  }

  let title = cli
    .title
    .clone()
    .or(rendered.title)
    .or_else(|| {
      cli
        .input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
    })
    .unwrap_or_else(|| "mdpage".to_string());

  let html = match page::render_page(&title, &processed.html) {
    Ok(html) => html,
    Err(e) => {
      let page =
        page::render_error_page("Could not assemble the page", &e.to_string());
      write_output(cli.output.as_deref(), &page)?;
      bail!("Failed to assemble page: {e}");
    },
  };

  write_output(cli.output.as_deref(), &html)?;
  if let Some(output) = &cli.output {
    info!("Wrote {}", output.display());
  }

  Ok(())
}

/// Translate CLI flags into renderer options.
fn render_options(cli: &Cli) -> RenderOptions {
  let defaults = RenderOptions::default();
  RenderOptions {
    highlight_code:  !cli.no_highlight,
    highlight_theme: cli.theme.clone(),
    toc_heading:     cli
      .toc_heading
      .clone()
      .or_else(|| defaults.toc_heading.clone()),
    icon_table_path: cli
      .icon_table
      .as_ref()
      .map(|path| path.to_string_lossy().into_owned()),
    ..defaults
  }
}

/// Write the page to the output file, or stdout when none was given.
fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
  match output {
    Some(path) => {
      fs::write(path, content)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    },
    None => {
      let stdout = std::io::stdout();
      let mut handle = stdout.lock();
      handle.write_all(content.as_bytes())?;
    },
  }
  Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "fine in tests")]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn cli_for(input: PathBuf, output: PathBuf) -> Cli {
    Cli {
      input,
      output: Some(output),
      title: None,
      theme: None,
      no_highlight: false,
      toc_heading: None,
      icon_table: None,
      verbose: false,
    }
  }

  #[test]
  fn test_non_markdown_input_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "# Looks like Markdown, named like it is not").unwrap();
    let output = dir.path().join("out.html");

    run(&cli_for(input, output.clone())).unwrap();
    assert!(!output.exists());
  }

  #[test]
  fn test_markdown_input_writes_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "# Hello\n\nBody text.").unwrap();
    let output = dir.path().join("out.html");

    run(&cli_for(input, output.clone())).unwrap();
    let page = fs::read_to_string(output).unwrap();
    assert!(page.contains("<title>Hello</title>"));
    assert!(page.contains(r#"<h1 id="hello">"#));
    assert!(page.contains("Body text."));
  }
}
