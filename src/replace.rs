// src/replace.rs
//! Literal find-and-replace over a single file.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::ScaffoldError;

/// An ordered literal substitution: every occurrence of `from` becomes `to`.
/// Later rules see the results of earlier rules.
pub struct Rule {
  pub from: String,
  pub to: String,
}

impl Rule {
  pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
    Rule {
      from: from.into(),
      to: to.into(),
    }
  }
}

/// Applies `rules` in declared order to the file at `path`.
///
/// The `from` side is always an exact substring, never a pattern, so names
/// containing `.` or other metacharacters are matched literally. The file is
/// rewritten once, at most, and only when at least one rule changed the
/// content. A missing file is skipped silently: templates differ in which
/// files exist per mode. Returns whether a write occurred.
pub fn replace_in_file(path: &Path, rules: &[Rule]) -> Result<bool, ScaffoldError> {
  if !path.is_file() {
    debug!("Skipping absent file: {}", path.display());
    return Ok(false);
  }

  let original = fs::read_to_string(path)?;
  let mut content = original.clone();
  for rule in rules {
    if rule.from.is_empty() {
      continue;
    }
    content = content.replace(&rule.from, &rule.to);
  }

  if content == original {
    return Ok(false);
  }

  fs::write(path, content)?;
  info!("Updated {}", path.display());
  Ok(true)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  fn rules(pairs: &[(&str, &str)]) -> Vec<Rule> {
    pairs.iter().map(|(f, t)| Rule::new(*f, *t)).collect()
  }

  #[test]
  fn replaces_every_occurrence() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "my-app and my-app-2").unwrap();

    let modified = replace_in_file(&file, &rules(&[("my-app", "foo-bar")])).unwrap();

    assert!(modified);
    assert_eq!(fs::read_to_string(&file).unwrap(), "foo-bar and foo-bar-2");
  }

  #[test]
  fn missing_file_is_silent_noop() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("nope.txt");

    let modified = replace_in_file(&file, &rules(&[("a", "b")])).unwrap();

    assert!(!modified);
    assert!(!file.exists());
  }

  #[test]
  fn untouched_file_is_not_rewritten() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "nothing to see").unwrap();

    let modified = replace_in_file(&file, &rules(&[("my-app", "foo")])).unwrap();

    assert!(!modified);
    assert_eq!(fs::read_to_string(&file).unwrap(), "nothing to see");
  }

  #[test]
  fn metacharacters_are_literal() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "myXappXcom my.app.com").unwrap();

    replace_in_file(&file, &rules(&[("my.app.com", "other.site")])).unwrap();

    // The dot must not act as a wildcard.
    assert_eq!(fs::read_to_string(&file).unwrap(), "myXappXcom other.site");
  }

  #[test]
  fn rules_apply_in_declared_order() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "example.com https://example.com").unwrap();

    // The bare-domain rule runs first, so the full-URL rule finds nothing.
    let modified = replace_in_file(
      &file,
      &rules(&[
        ("example.com", "my.site"),
        ("https://example.com", "https://WRONG"),
      ]),
    )
    .unwrap();

    assert!(modified);
    assert_eq!(fs::read_to_string(&file).unwrap(), "my.site https://my.site");
  }
}
