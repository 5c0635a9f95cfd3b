use std::path::PathBuf;

use clap::Parser;

/// Command line interface for mdpage
#[derive(Parser, Debug)]
#[command(author, version, about = "mdpage: view a Markdown file as a styled HTML page")]
pub struct Cli {
  /// Markdown file to render
  pub input: PathBuf,

  /// Write the page to this file instead of stdout
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Page title; defaults to the first level-1 heading, then the file name
  #[arg(short = 'T', long)]
  pub title: Option<String>,

  /// Syntax highlighting theme for code blocks
  #[arg(long)]
  pub theme: Option<String>,

  /// Disable syntax highlighting
  #[arg(long = "no-highlight", action = clap::ArgAction::SetTrue)]
  pub no_highlight: bool,

  /// Regex matching the heading where a table of contents is inserted
  #[arg(long = "toc-heading")]
  pub toc_heading: Option<String>,

  /// Path to a JSON file overriding the code-language icon table
  #[arg(long = "icon-table")]
  pub icon_table: Option<PathBuf>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
