// src/question.rs
//! Question specifications and the answer set they produce.
//!
//! Each template declares the ordered questions it needs answered before its
//! transform runs. The prompt collaborator (src/prompt.rs) walks that list;
//! the transform only ever sees the resulting read-only [`AnswerSet`].

use std::collections::HashMap;

/// Computes a default from the answers gathered so far (the project name is
/// seeded before any question runs, so defaults may derive from it).
pub type DefaultFn = fn(&AnswerSet) -> String;

/// Returns Ok(()) or a message shown to the user until the input passes.
pub type ValidateFn = fn(&str) -> Result<(), String>;

pub struct Question {
  /// Key the answer is stored under.
  pub name: &'static str,
  pub prompt: &'static str,
  pub kind: QuestionKind,
}

pub enum QuestionKind {
  Text {
    default: Option<DefaultFn>,
    validate: Option<ValidateFn>,
  },
  Confirm {
    default: bool,
  },
}

/// A single collected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
  Text(String),
  Flag(bool),
}

/// Read-only (by convention) mapping from question name to answer, fully
/// populated before any transform runs.
#[derive(Debug, Default)]
pub struct AnswerSet {
  values: HashMap<String, Answer>,
}

impl AnswerSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert_text(&mut self, name: &str, value: impl Into<String>) {
    self.values.insert(name.to_string(), Answer::Text(value.into()));
  }

  pub fn insert_flag(&mut self, name: &str, value: bool) {
    self.values.insert(name.to_string(), Answer::Flag(value));
  }

  /// Text answer for `name`, or "" when absent or not text.
  pub fn text(&self, name: &str) -> &str {
    match self.values.get(name) {
      Some(Answer::Text(s)) => s,
      _ => "",
    }
  }

  /// Boolean answer for `name`, or `false` when absent or not a flag.
  pub fn flag(&self, name: &str) -> bool {
    matches!(self.values.get(name), Some(Answer::Flag(true)))
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}
