// src/casing.rs
//! Case conversions for project names.
//!
//! Free-form names ("My App", "focusHook 2.0") are normalized into the
//! kebab-case and snake_case forms used for package names, directories and
//! file contents. Both functions are pure, total over any input, and
//! idempotent.

/// Converts a free-form name into kebab-case (e.g. "My App" -> "my-app").
pub fn to_kebab_case(input: &str) -> String {
  separate(input, '-')
}

/// Converts a free-form name into snake_case (e.g. "My App" -> "my_app").
pub fn to_snake_case(input: &str) -> String {
  separate(input, '_')
}

fn separate(input: &str, sep: char) -> String {
  let trimmed = input.trim();
  let mut out = String::with_capacity(trimmed.len() + 4);

  let mut prev_was_sep = true; // suppresses a leading separator
  let mut prev_lower_or_digit = false;
  for ch in trimmed.chars() {
    if ch.is_ascii_alphanumeric() {
      // camelCase boundary: lowercase-or-digit immediately followed by uppercase
      if ch.is_ascii_uppercase() && prev_lower_or_digit {
        out.push(sep);
      }
      out.push(ch.to_ascii_lowercase());
      prev_was_sep = false;
      prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    } else {
      // Any run of non-alphanumerics collapses into a single separator
      if !prev_was_sep {
        out.push(sep);
        prev_was_sep = true;
      }
      prev_lower_or_digit = false;
    }
  }

  // A trailing run of non-alphanumerics leaves a dangling separator
  if out.ends_with(sep) {
    out.pop();
  }
  out
}
