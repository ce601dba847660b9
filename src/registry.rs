// src/registry.rs
//! The fixed template registry.
//!
//! One variant per template, dispatched through shared methods. Descriptors
//! are static: key, display name, description, source repository, the
//! questions the template needs answered, and its transform.

use std::path::Path;

use regex::Regex;

use crate::casing::to_kebab_case;
use crate::error::ScaffoldError;
use crate::question::{AnswerSet, Question, QuestionKind};
use crate::{desktop, web};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
  /// Tauri desktop app starter.
  Desktop,
  /// Astro web starter (full-stack or static mode).
  Web,
}

impl Template {
  pub const ALL: [Template; 2] = [Template::Desktop, Template::Web];

  pub fn from_key(key: &str) -> Result<Template, ScaffoldError> {
    Template::ALL
      .into_iter()
      .find(|t| t.key() == key)
      .ok_or_else(|| ScaffoldError::UnknownTemplate(key.to_string()))
  }

  pub fn key(&self) -> &'static str {
    match self {
      Template::Desktop => "desktop",
      Template::Web => "web",
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      Template::Desktop => "Desktop App",
      Template::Web => "Web App",
    }
  }

  pub fn description(&self) -> &'static str {
    match self {
      Template::Desktop => "Cross-platform desktop app (Tauri + web frontend)",
      Template::Web => "Astro site with optional API routes and database",
    }
  }

  /// Repository the cloning collaborator resolves.
  pub fn repository(&self) -> &'static str {
    match self {
      Template::Desktop => "https://github.com/normano/blueprint-template-desktop.git",
      Template::Web => "https://github.com/normano/blueprint-template-web.git",
    }
  }

  /// Ordered questions to answer before the transform runs.
  pub fn questions(&self) -> Vec<Question> {
    match self {
      Template::Desktop => vec![
        Question {
          name: "app_name",
          prompt: "App name (used for package and binary names)",
          kind: QuestionKind::Text {
            default: Some(default_app_name),
            validate: Some(validate_app_name),
          },
        },
        Question {
          name: "product_name",
          prompt: "Product name (shown in window titles and menus)",
          kind: QuestionKind::Text {
            default: Some(default_product_name),
            validate: None,
          },
        },
        Question {
          name: "bundle_identifier",
          prompt: "Bundle identifier (reverse-DNS, e.g. com.acme.myapp)",
          kind: QuestionKind::Text {
            default: Some(default_bundle_identifier),
            validate: Some(validate_bundle_identifier),
          },
        },
      ],
      Template::Web => vec![
        Question {
          name: "app_name",
          prompt: "App name (used for package and directory names)",
          kind: QuestionKind::Text {
            default: Some(default_app_name),
            validate: Some(validate_app_name),
          },
        },
        Question {
          name: "product_name",
          prompt: "Product name (shown in titles and metadata)",
          kind: QuestionKind::Text {
            default: Some(default_product_name),
            validate: None,
          },
        },
        Question {
          name: "description",
          prompt: "Short site description",
          kind: QuestionKind::Text {
            default: None,
            validate: None,
          },
        },
        Question {
          name: "domain",
          prompt: "Production domain (e.g. myapp.com)",
          kind: QuestionKind::Text {
            default: Some(default_domain),
            validate: Some(validate_domain),
          },
        },
        Question {
          name: "needs_api_routes",
          prompt: "Will this site need API routes (auth, database, server code)?",
          kind: QuestionKind::Confirm { default: true },
        },
      ],
    }
  }

  /// Applies the template's customization to a freshly cloned tree.
  pub fn transform(&self, project_dir: &Path, answers: &AnswerSet) -> Result<(), ScaffoldError> {
    match self {
      Template::Desktop => desktop::transform(project_dir, answers),
      Template::Web => web::transform(project_dir, answers),
    }
  }
}

// --- Defaults ---

fn default_app_name(answers: &AnswerSet) -> String {
  answers.text("project_name").to_string()
}

fn default_product_name(answers: &AnswerSet) -> String {
  answers.text("app_name").to_string()
}

fn default_bundle_identifier(answers: &AnswerSet) -> String {
  let kebab = to_kebab_case(answers.text("app_name"));
  if kebab.is_empty() {
    String::new()
  } else {
    format!("com.{}.app", kebab.replace('-', ""))
  }
}

fn default_domain(answers: &AnswerSet) -> String {
  let kebab = to_kebab_case(answers.text("app_name"));
  if kebab.is_empty() {
    String::new()
  } else {
    format!("{}.com", kebab)
  }
}

// --- Validation predicates ---

fn validate_app_name(input: &str) -> Result<(), String> {
  let re = Regex::new(r"^[A-Za-z][A-Za-z0-9 _-]*$").expect("app name regex");
  if re.is_match(input.trim()) {
    Ok(())
  } else {
    Err("App name must start with a letter and use only letters, digits, spaces, '-' or '_'".to_string())
  }
}

fn validate_bundle_identifier(input: &str) -> Result<(), String> {
  let re = Regex::new(r"^[A-Za-z][A-Za-z0-9-]*(\.[A-Za-z][A-Za-z0-9-]*)+$").expect("bundle id regex");
  if re.is_match(input) {
    Ok(())
  } else {
    Err("Bundle identifier must be reverse-DNS, e.g. com.acme.myapp".to_string())
  }
}

fn validate_domain(input: &str) -> Result<(), String> {
  let re = Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$")
    .expect("domain regex");
  if re.is_match(input) {
    Ok(())
  } else {
    Err("Enter a bare domain such as myapp.com (no scheme, no path)".to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn key_roundtrip() {
    for template in Template::ALL {
      assert_eq!(Template::from_key(template.key()).unwrap(), template);
    }
    assert!(matches!(
      Template::from_key("mobile"),
      Err(ScaffoldError::UnknownTemplate(_))
    ));
  }

  #[test]
  fn bundle_identifier_validation() {
    assert!(validate_bundle_identifier("com.acme.myapp").is_ok());
    assert!(validate_bundle_identifier("io.focus-hook.app").is_ok());
    assert!(validate_bundle_identifier("nodots").is_err());
    assert!(validate_bundle_identifier("com..acme").is_err());
    assert!(validate_bundle_identifier("com.1acme.app").is_err());
  }

  #[test]
  fn domain_validation() {
    assert!(validate_domain("myapp.com").is_ok());
    assert!(validate_domain("sub.my-app.dev").is_ok());
    assert!(validate_domain("https://myapp.com").is_err());
    assert!(validate_domain("myapp").is_err());
  }

  #[test]
  fn defaults_derive_from_prior_answers() {
    let mut answers = AnswerSet::new();
    answers.insert_text("project_name", "Focus Hook");
    assert_eq!(default_app_name(&answers), "Focus Hook");

    answers.insert_text("app_name", "Focus Hook");
    assert_eq!(default_product_name(&answers), "Focus Hook");
    assert_eq!(default_bundle_identifier(&answers), "com.focushook.app");
    assert_eq!(default_domain(&answers), "focus-hook.com");
  }
}
