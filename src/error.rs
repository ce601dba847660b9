// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON Parsing Error: {0}")]
  JsonParse(#[from] serde_json::Error),

  #[error("User interaction failed: {0}")]
  Dialoguer(#[from] dialoguer::Error),

  /// User backed out (empty name, declined prompt, incomplete answers).
  /// Prints its message and exits 1 without producing a project.
  #[error("{0}")]
  Cancelled(String),

  #[error("Unknown template '{0}'. Run `blueprint list` to see what is available.")]
  UnknownTemplate(String),

  #[error("Unknown package manager '{0}'. Expected one of: npm, pnpm, yarn, bun.")]
  UnknownPackageManager(String),

  #[error("Target directory '{0}' already exists. Pick another name or remove it first.")]
  ProjectDirExists(PathBuf),

  #[error(
    "Could not access the '{template}' template repository ({repo}).\n\
     This usually means one of:\n\
       - you have not purchased this template yet,\n\
       - your account has not been granted access (check for a pending\n\
         repository invite),\n\
       - git is not authenticated for it.\n\
     Make sure `git` can reach the repository (try `git ls-remote {repo}`)."
  )]
  TemplateAccess { template: String, repo: String },

  #[error("Cloning '{repo}' failed:\n{stderr}")]
  CloneFailed { repo: String, stderr: String },
}
