// src/new.rs
//! The `new` command: drives the whole generation flow.
//!
//! Order is fixed: resolve the name and target directory, pick the template,
//! collect answers, clone, drop the package-manager pin, run the template's
//! transform, strip generator-only files and lockfiles, install
//! dependencies, print next steps. Each step completes before the next
//! begins; there is no rollback of a partially customized tree.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;

use crate::casing::to_kebab_case;
use crate::cli::NewArgs;
use crate::error::ScaffoldError;
use crate::fsops::remove_entry;
use crate::install::{self, PackageManager};
use crate::question::AnswerSet;
use crate::registry::Template;
use crate::{git, prompt};

/// Scripts and docs that only make sense inside the template repository
/// itself. They are stripped from every generated project.
const GENERATOR_FILES: &[&str] = &[
  "TEMPLATE.md",
  "scripts/check-template.mjs",
  "scripts/sync-template.mjs",
  ".github/workflows/template-ci.yml",
];

/// Lockfiles from the template repo are stale in the generated project and
/// would fight the user's package-manager choice.
const LOCK_FILES: &[&str] = &[
  "package-lock.json",
  "pnpm-lock.yaml",
  "yarn.lock",
  "bun.lockb",
  "bun.lock",
];

pub fn run_new(args: NewArgs) -> Result<(), ScaffoldError> {
  info!("Running new command...");
  debug!("Args: {:?}", args);

  // --- 1. Resolve project name and target directory ---
  let project_name = match args.name {
    Some(name) if !name.trim().is_empty() => name.trim().to_string(),
    _ => prompt::prompt_project_name()?,
  };

  let dir_name = to_kebab_case(&project_name);
  if dir_name.is_empty() {
    return Err(ScaffoldError::Cancelled(
      "Project name must contain at least one letter or digit.".to_string(),
    ));
  }
  let project_dir = PathBuf::from(&dir_name);
  if project_dir.exists() {
    return Err(ScaffoldError::ProjectDirExists(project_dir));
  }

  // --- 2. Pick template and collect answers ---
  let template = match &args.template {
    Some(key) => Template::from_key(key)?,
    None => prompt::select_template()?,
  };
  info!("Selected template: '{}'", template.name());

  let questions = template.questions();
  let mut answers = AnswerSet::new();
  answers.insert_text("project_name", &project_name);
  let answered = prompt::collect_answers(&questions, &mut answers)?;
  if answered != questions.len() {
    return Err(ScaffoldError::Cancelled(
      "Setup was interrupted before all questions were answered.".to_string(),
    ));
  }
  debug!("Collected answers: {:?}", answers);

  // --- 3. Clone and customize ---
  git::clone_template(template, &project_dir)?;
  strip_package_manager_pin(&project_dir)?;
  template.transform(&project_dir, &answers)?;

  // --- 4. Strip generator-only files and lockfiles ---
  for rel in GENERATOR_FILES.iter().chain(LOCK_FILES) {
    remove_entry(&project_dir, rel)?;
  }

  // --- 5. Install dependencies (soft failure) ---
  let package_manager = match &args.package_manager {
    Some(key) => PackageManager::from_key(key)?,
    None => prompt::select_package_manager()?,
  };
  let installed = if args.skip_install {
    info!("Skipping dependency installation (--skip-install).");
    false
  } else {
    install::install_dependencies(package_manager, &project_dir)
  };

  // --- 6. Next steps ---
  print_next_steps(template, &dir_name, package_manager, &answers, installed);
  Ok(())
}

/// Removes the `packageManager` pin from package.json so the generated
/// project is not locked to whatever the template repo was developed with.
/// Key order survives the round-trip (serde_json's preserve_order feature);
/// only the pinned field goes away.
fn strip_package_manager_pin(project_dir: &Path) -> Result<(), ScaffoldError> {
  let manifest_path = project_dir.join("package.json");
  if !manifest_path.is_file() {
    return Ok(());
  }

  let content = fs::read_to_string(&manifest_path)?;
  let mut manifest: Value = serde_json::from_str(&content)?;
  let Some(object) = manifest.as_object_mut() else {
    return Ok(());
  };

  if object.remove("packageManager").is_some() {
    let mut serialized = serde_json::to_string_pretty(&manifest)?;
    serialized.push('\n');
    fs::write(&manifest_path, serialized)?;
    debug!("Removed packageManager pin from {}", manifest_path.display());
  }
  Ok(())
}

fn print_next_steps(
  template: Template,
  dir_name: &str,
  pm: PackageManager,
  answers: &AnswerSet,
  installed: bool,
) {
  println!();
  println!("Done! '{}' is ready. Next steps:", dir_name);
  println!();
  println!("  cd {}", dir_name);
  if !installed {
    println!("  {}", pm.install_command());
  }
  match template {
    Template::Desktop => {
      println!("  {}", pm.run_command("tauri dev"));
    }
    Template::Web => {
      println!("  {}", pm.run_command("dev"));
      if !answers.flag("needs_api_routes") {
        println!();
        println!(
          "  Static mode: server-only code was parked under _server-template/."
        );
        println!(
          "  To re-enable API routes later, move it back and restore astro.config.server.mjs."
        );
      }
    }
  }
  println!();
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn pin_is_removed_and_rest_preserved() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join("package.json"),
      "{\n  \"name\": \"my-app\",\n  \"packageManager\": \"pnpm@9.1.0\",\n  \"private\": true\n}\n",
    )
    .unwrap();

    strip_package_manager_pin(dir.path()).unwrap();

    let manifest: Value =
      serde_json::from_str(&fs::read_to_string(dir.path().join("package.json")).unwrap()).unwrap();
    assert!(manifest.get("packageManager").is_none());
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(manifest["private"], true);
  }

  #[test]
  fn pin_removal_keeps_key_order() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join("package.json"),
      "{\n  \"name\": \"my-app\",\n  \"version\": \"1.0.0\",\n  \"packageManager\": \"pnpm@9.1.0\",\n  \"scripts\": {\"dev\": \"astro dev\"},\n  \"dependencies\": {\"astro\": \"^4.0.0\"}\n}\n",
    )
    .unwrap();

    strip_package_manager_pin(dir.path()).unwrap();

    // The manifest must not come back alphabetized: name stays first,
    // dependencies last, as the template authored it.
    let content = fs::read_to_string(dir.path().join("package.json")).unwrap();
    let pos = |key: &str| content.find(key).unwrap_or_else(|| panic!("missing {}", key));
    assert!(pos("\"name\"") < pos("\"version\""));
    assert!(pos("\"version\"") < pos("\"scripts\""));
    assert!(pos("\"scripts\"") < pos("\"dependencies\""));
    assert!(!content.contains("packageManager"));
  }

  #[test]
  fn manifest_without_pin_is_untouched() {
    let dir = tempdir().unwrap();
    let original = "{\"name\":\"my-app\"}";
    fs::write(dir.path().join("package.json"), original).unwrap();

    strip_package_manager_pin(dir.path()).unwrap();

    // Not even reformatted.
    assert_eq!(
      fs::read_to_string(dir.path().join("package.json")).unwrap(),
      original
    );
  }

  #[test]
  fn missing_manifest_is_fine() {
    let dir = tempdir().unwrap();
    strip_package_manager_pin(dir.path()).unwrap();
  }
}
