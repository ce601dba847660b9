// src/fsops.rs
//! Filesystem primitives for tree restructuring and cleanup.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::ScaffoldError;

/// Relocates `from` to `to` (both relative to `root`), wholesale. Works for
/// files and directories alike. Destination parent directories are created as
/// needed. An absent source is a no-op, not an error: the move lists cover
/// every mode of a template and not every entry exists in every clone.
/// Returns whether anything moved.
pub fn move_entry(root: &Path, from: &str, to: &str) -> Result<bool, ScaffoldError> {
  let src = root.join(from);
  if !src.exists() {
    debug!("Skipping absent move source: {}", src.display());
    return Ok(false);
  }

  let dst = root.join(to);
  if let Some(parent) = dst.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::rename(&src, &dst)?;
  info!("Moved {} -> {}", from, to);
  Ok(true)
}

/// Removes the file or directory at `rel` under `root`, if present.
/// Returns whether anything was removed.
pub fn remove_entry(root: &Path, rel: &str) -> Result<bool, ScaffoldError> {
  let target = root.join(rel);
  if target.is_dir() {
    fs::remove_dir_all(&target)?;
  } else if target.is_file() {
    fs::remove_file(&target)?;
  } else {
    return Ok(false);
  }
  info!("Removed {}", rel);
  Ok(true)
}
