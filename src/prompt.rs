// src/prompt.rs
//! Interactive prompting. Everything dialoguer lives here so the
//! customization engine stays testable without a terminal.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use log::debug;

use crate::error::ScaffoldError;
use crate::install::PackageManager;
use crate::question::{AnswerSet, Question, QuestionKind};
use crate::registry::Template;

/// Asks for the project name when it was not passed on the command line.
/// An empty response is treated as the user backing out.
pub fn prompt_project_name() -> Result<String, ScaffoldError> {
  let name: String = Input::with_theme(&ColorfulTheme::default())
    .with_prompt("Project name")
    .allow_empty(true)
    .interact_text()?;

  let name = name.trim().to_string();
  if name.is_empty() {
    return Err(ScaffoldError::Cancelled(
      "No project name given. Nothing to do.".to_string(),
    ));
  }
  Ok(name)
}

pub fn select_template() -> Result<Template, ScaffoldError> {
  let items: Vec<String> = Template::ALL
    .iter()
    .map(|t| format!("{} - {}", t.name(), t.description()))
    .collect();

  let selection = Select::with_theme(&ColorfulTheme::default())
    .with_prompt("Which template?")
    .items(&items)
    .default(0)
    .interact()?;

  Ok(Template::ALL[selection])
}

pub fn select_package_manager() -> Result<PackageManager, ScaffoldError> {
  let items: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.key()).collect();

  let selection = Select::with_theme(&ColorfulTheme::default())
    .with_prompt("Which package manager should install dependencies?")
    .items(&items)
    .default(0)
    .interact()?;

  Ok(PackageManager::ALL[selection])
}

/// Walks the template's question list in order, storing each answer into
/// `answers`. Defaults may derive from answers already present (the seeded
/// project name included). Returns how many questions were answered so the
/// caller can verify completeness.
pub fn collect_answers(
  questions: &[Question],
  answers: &mut AnswerSet,
) -> Result<usize, ScaffoldError> {
  let theme = ColorfulTheme::default();
  let mut answered = 0usize;

  for question in questions {
    match &question.kind {
      QuestionKind::Text { default, validate } => {
        let mut input = Input::<String>::with_theme(&theme).with_prompt(question.prompt);

        if let Some(default_fn) = default {
          let default_value = default_fn(answers);
          if !default_value.is_empty() {
            input = input.default(default_value);
          }
        }

        if let Some(validate_fn) = *validate {
          input = input.validate_with(move |value: &String| -> Result<(), String> {
            validate_fn(value)
          });
        }

        let value = input.interact_text()?;
        debug!("Answer '{}' = '{}'", question.name, value);
        answers.insert_text(question.name, value);
      }
      QuestionKind::Confirm { default } => {
        let value = Confirm::with_theme(&theme)
          .with_prompt(question.prompt)
          .default(*default)
          .interact()?;
        debug!("Answer '{}' = {}", question.name, value);
        answers.insert_flag(question.name, value);
      }
    }
    answered += 1;
  }

  Ok(answered)
}
