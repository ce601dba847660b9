// src/install.rs
//! Package-manager selection and dependency installation.

use std::path::Path;
use std::time::Duration;

use duct::cmd;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use crate::error::ScaffoldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
  Npm,
  Pnpm,
  Yarn,
  Bun,
}

impl PackageManager {
  pub const ALL: [PackageManager; 4] = [
    PackageManager::Npm,
    PackageManager::Pnpm,
    PackageManager::Yarn,
    PackageManager::Bun,
  ];

  pub fn from_key(key: &str) -> Result<PackageManager, ScaffoldError> {
    PackageManager::ALL
      .into_iter()
      .find(|pm| pm.key() == key)
      .ok_or_else(|| ScaffoldError::UnknownPackageManager(key.to_string()))
  }

  pub fn key(&self) -> &'static str {
    match self {
      PackageManager::Npm => "npm",
      PackageManager::Pnpm => "pnpm",
      PackageManager::Yarn => "yarn",
      PackageManager::Bun => "bun",
    }
  }

  /// The install command shown to the user (and run by us).
  pub fn install_command(&self) -> &'static str {
    match self {
      PackageManager::Npm => "npm install",
      PackageManager::Pnpm => "pnpm install",
      PackageManager::Yarn => "yarn",
      PackageManager::Bun => "bun install",
    }
  }

  /// How a package.json script is invoked with this manager.
  pub fn run_command(&self, script: &str) -> String {
    match self {
      PackageManager::Npm => format!("npm run {}", script),
      PackageManager::Pnpm => format!("pnpm {}", script),
      PackageManager::Yarn => format!("yarn {}", script),
      PackageManager::Bun => format!("bun {}", script),
    }
  }
}

/// Installs dependencies in `project_dir`. This is the one soft-failure
/// step: a failed install leaves the generated project intact and is
/// reported as a warning with manual instructions. Returns whether the
/// install succeeded.
pub fn install_dependencies(pm: PackageManager, project_dir: &Path) -> bool {
  info!(
    "Installing dependencies with {} in {}",
    pm.key(),
    project_dir.display()
  );

  let spinner = ProgressBar::new_spinner();
  spinner.set_style(
    ProgressStyle::default_spinner()
      .template("{spinner:.green} {msg}")
      .expect("Failed to set spinner style"),
  );
  spinner.set_message(format!("Running `{}`...", pm.install_command()));
  spinner.enable_steady_tick(Duration::from_millis(80));

  let mut parts = pm.install_command().split_whitespace();
  let program = parts.next().expect("install command is never empty");
  let args: Vec<&str> = parts.collect();

  let result = cmd(program, args)
    .dir(project_dir)
    .stdout_capture()
    .stderr_capture()
    .unchecked()
    .run();

  spinner.finish_and_clear();

  match result {
    Ok(output) if output.status.success() => {
      info!("Dependencies installed.");
      true
    }
    Ok(output) => {
      debug!(
        "{} install stderr:\n{}",
        pm.key(),
        String::from_utf8_lossy(&output.stderr)
      );
      warn!(
        "Dependency installation failed (status {:?}). Run `{}` inside the project manually.",
        output.status.code(),
        pm.install_command()
      );
      false
    }
    Err(e) => {
      warn!(
        "Could not run {} ({}). Run `{}` inside the project manually.",
        pm.key(),
        e,
        pm.install_command()
      );
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn key_roundtrip() {
    for pm in PackageManager::ALL {
      assert_eq!(PackageManager::from_key(pm.key()).unwrap(), pm);
    }
    assert!(matches!(
      PackageManager::from_key("cargo"),
      Err(ScaffoldError::UnknownPackageManager(_))
    ));
  }

  #[test]
  fn run_commands_differ_per_manager() {
    assert_eq!(PackageManager::Npm.run_command("dev"), "npm run dev");
    assert_eq!(PackageManager::Pnpm.run_command("dev"), "pnpm dev");
    assert_eq!(PackageManager::Yarn.run_command("dev"), "yarn dev");
    assert_eq!(PackageManager::Bun.run_command("dev"), "bun dev");
  }
}
