// src/git.rs
//! The cloning collaborator: materializes a template repository at the
//! target path via `git clone`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use duct::cmd;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::error::ScaffoldError;
use crate::registry::Template;

/// stderr fragments git emits when the template repository exists but the
/// current user cannot read it (private repo, missing invite, stale auth),
/// or when the ref cannot be resolved at all. These get a remediation
/// message instead of raw git output.
const ACCESS_MARKERS: &[&str] = &[
  "Repository not found",
  "access denied",
  "Authentication failed",
  "Permission denied",
  "could not read Username",
];

pub fn clone_template(template: Template, dest: &Path) -> Result<(), ScaffoldError> {
  let repo = template.repository();
  info!("Cloning '{}' into {}", repo, dest.display());

  let spinner = ProgressBar::new_spinner();
  spinner.set_style(
    ProgressStyle::default_spinner()
      .template("{spinner:.green} {msg}")
      .expect("Failed to set spinner style"),
  );
  spinner.set_message(format!("Cloning {} template...", template.name()));
  spinner.enable_steady_tick(Duration::from_millis(80));

  let output = cmd!("git", "clone", "--depth", "1", repo, dest)
    .stdout_capture()
    .stderr_capture()
    .unchecked()
    .run()?;

  spinner.finish_and_clear();

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    debug!("git clone failed. Stderr:\n{}", stderr);
    if ACCESS_MARKERS.iter().any(|marker| stderr.contains(marker)) {
      return Err(ScaffoldError::TemplateAccess {
        template: template.name().to_string(),
        repo: repo.to_string(),
      });
    }
    return Err(ScaffoldError::CloneFailed {
      repo: repo.to_string(),
      stderr,
    });
  }

  // The generated project starts with a clean history.
  let git_dir = dest.join(".git");
  if git_dir.is_dir() {
    fs::remove_dir_all(&git_dir)?;
    debug!("Removed template git history from {}", git_dir.display());
  }

  info!("Template cloned into {}", dest.display());
  Ok(())
}
