// src/desktop.rs
//! Customization for the desktop (Tauri) template.

use std::path::Path;

use log::{debug, info};

use crate::casing::{to_kebab_case, to_snake_case};
use crate::error::ScaffoldError;
use crate::question::AnswerSet;
use crate::replace::{replace_in_file, Rule};

/// Files the substitution pass visits. Nothing outside this list is touched;
/// entries missing from the clone are skipped.
const FILES: &[&str] = &[
  "package.json",
  "README.md",
  "index.html",
  "src-tauri/Cargo.toml",
  "src-tauri/Cargo.lock",
  "src-tauri/tauri.conf.json",
  "src-tauri/src/main.rs",
  "src-tauri/src/lib.rs",
  "scripts/release.sh",
  "scripts/bump-version.sh",
];

pub fn transform(project_dir: &Path, answers: &AnswerSet) -> Result<(), ScaffoldError> {
  let kebab = to_kebab_case(answers.text("app_name"));
  let snake = to_snake_case(answers.text("app_name"));
  let product_name = answers.text("product_name");
  let bundle_identifier = answers.text("bundle_identifier");
  debug!(
    "Desktop transform: kebab='{}', snake='{}', product='{}', bundle='{}'",
    kebab, snake, product_name, bundle_identifier
  );

  let rules = [
    Rule::new("my-app", kebab.as_str()),
    Rule::new("my_app", snake.as_str()),
    Rule::new("My App", product_name),
    Rule::new("com.myapp.dev", bundle_identifier),
    // Sidecar binary list in tauri.conf.json; kept last to match the
    // declared rule order of the template.
    Rule::new(
      "\"externalBin\": [\"binaries/my-app\"]",
      format!("\"externalBin\": [\"binaries/{}\"]", kebab),
    ),
  ];

  let mut touched = 0usize;
  for rel in FILES {
    if replace_in_file(&project_dir.join(rel), &rules)? {
      touched += 1;
    }
  }
  info!("Desktop template customized ({} files updated)", touched);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  fn answers() -> AnswerSet {
    let mut a = AnswerSet::new();
    a.insert_text("app_name", "Focus Hook");
    a.insert_text("product_name", "Focus Hook");
    a.insert_text("bundle_identifier", "io.focushook.app");
    a
  }

  #[test]
  fn substitutes_all_casings() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src-tauri/src")).unwrap();
    fs::write(
      dir.path().join("package.json"),
      "{\n  \"name\": \"my-app\",\n  \"productName\": \"My App\"\n}\n",
    )
    .unwrap();
    fs::write(
      dir.path().join("src-tauri/src/main.rs"),
      "fn main() {\n  my_app_lib::run();\n}\n",
    )
    .unwrap();
    fs::write(
      dir.path().join("src-tauri/tauri.conf.json"),
      "{\n  \"identifier\": \"com.myapp.dev\",\n  \"productName\": \"My App\"\n}\n",
    )
    .unwrap();

    transform(dir.path(), &answers()).unwrap();

    let pkg = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"focus-hook\""));
    assert!(pkg.contains("\"productName\": \"Focus Hook\""));

    let main_rs = fs::read_to_string(dir.path().join("src-tauri/src/main.rs")).unwrap();
    assert!(main_rs.contains("focus_hook_lib::run()"));

    let conf = fs::read_to_string(dir.path().join("src-tauri/tauri.conf.json")).unwrap();
    assert!(conf.contains("\"identifier\": \"io.focushook.app\""));
  }

  #[test]
  fn bundle_identifier_is_verbatim() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src-tauri")).unwrap();
    fs::write(
      dir.path().join("src-tauri/tauri.conf.json"),
      "\"identifier\": \"com.myapp.dev\"",
    )
    .unwrap();

    let mut a = answers();
    a.insert_text("bundle_identifier", "Com.Mixed.CASE");
    transform(dir.path(), &a).unwrap();

    let conf = fs::read_to_string(dir.path().join("src-tauri/tauri.conf.json")).unwrap();
    // No case normalization is applied to the identifier.
    assert!(conf.contains("Com.Mixed.CASE"));
  }

  #[test]
  fn missing_files_are_skipped() {
    let dir = tempdir().unwrap();
    // Empty tree: every file on the list is absent.
    transform(dir.path(), &answers()).unwrap();
  }
}
