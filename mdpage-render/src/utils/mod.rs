use std::{collections::BTreeMap, path::Path};

use regex::Regex;

pub mod codeblock;

/// Error type for utility operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
  #[error("failed to read {path}: {source}")]
  Io {
    path:   String,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid lookup table JSON: {0}")]
  Json(#[from] serde_json::Error),
}

/// Result type for utility operations.
pub type UtilResult<T> = Result<T, UtilError>;

/// File suffixes that activate the rendering pipeline.
pub const MARKDOWN_SUFFIXES: [&str; 3] = ["md", "markdown", "mdown"];

/// Whether a path ends in a recognized Markdown file suffix.
#[must_use]
pub fn is_markdown_path(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| {
      let ext = ext.to_lowercase();
      MARKDOWN_SUFFIXES.contains(&ext.as_str())
    })
}

/// Slugify a string for use as an anchor ID.
/// Converts to lowercase, replaces non-alphanumeric characters with dashes,
/// and trims leading/trailing dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
  text
    .to_lowercase()
    .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '_', "-")
    .trim_matches('-')
    .to_string()
}

/// Capitalize the first letter of a string.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  chars.next().map_or_else(String::new, |c| {
    c.to_uppercase().collect::<String>() + chars.as_str()
  })
}

/// Load a string-to-string lookup table from a JSON file.
///
/// Used for custom language-icon tables; the format is a flat JSON object
/// of `"language": "icon-class"` pairs.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if the JSON is invalid.
pub fn load_icon_map(path: &str) -> UtilResult<BTreeMap<String, String>> {
  let content =
    std::fs::read_to_string(path).map_err(|source| UtilError::Io {
      path: path.to_string(),
      source,
    })?;
  let mappings: BTreeMap<String, String> = serde_json::from_str(&content)?;
  Ok(mappings)
}

/// Create a regex that never matches anything.
///
/// This is used as a fallback pattern when a regex fails to compile.
/// It will never match any input, which is safer than using a trivial regex
/// like `^$` which would match empty strings.
#[must_use]
pub fn never_matching_regex() -> Regex {
  // This pattern asserts something impossible and is guaranteed to be valid
  #[allow(clippy::unwrap_used, reason = "pattern is a valid constant")]
  Regex::new(r"[^\s\S]").unwrap()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "fine in tests")]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn test_markdown_path_gate() {
    assert!(is_markdown_path(Path::new("README.md")));
    assert!(is_markdown_path(Path::new("/docs/guide.markdown")));
    assert!(is_markdown_path(Path::new("notes.mdown")));
    assert!(is_markdown_path(Path::new("UPPER.MD")));
    assert!(!is_markdown_path(Path::new("script.sh")));
    assert!(!is_markdown_path(Path::new("md")));
    assert!(!is_markdown_path(Path::new("archive.md.bak")));
  }

  #[test]
  fn test_slugify() {
    assert_eq!(slugify("Hello World"), "hello-world");
    assert_eq!(slugify("  Spaces  "), "spaces");
    assert_eq!(slugify("Already-slugged_ok"), "already-slugged_ok");
    assert_eq!(slugify("C'est l'été"), "c-est-l-été");
  }

  #[test]
  fn test_capitalize_first() {
    assert_eq!(capitalize_first("warning"), "Warning");
    assert_eq!(capitalize_first(""), "");
  }

  #[test]
  fn test_never_matching_regex() {
    let re = never_matching_regex();
    assert!(!re.is_match(""));
    assert!(!re.is_match("anything at all"));
  }

  #[test]
  fn test_load_icon_map() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"python": "devicon-python-plain"}}"#).unwrap();
    let map = load_icon_map(file.path().to_str().unwrap()).unwrap();
    assert_eq!(map.get("python").unwrap(), "devicon-python-plain");

    assert!(load_icon_map("/does/not/exist.json").is_err());
  }
}
