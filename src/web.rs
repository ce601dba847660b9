// src/web.rs
//! Customization for the web (Astro) template.
//!
//! Two steps: placeholder substitution over the declared file list, then,
//! when API routes were declined, a restructuring pass that swaps in the
//! static build config and relocates all server-only code into the
//! `_server-template/` quarantine subtree. The server code is preserved, not
//! deleted, so switching back later is a matter of reversing the moves.

use std::path::Path;

use log::{debug, info};

use crate::casing::{to_kebab_case, to_snake_case};
use crate::error::ScaffoldError;
use crate::fsops::move_entry;
use crate::question::AnswerSet;
use crate::replace::{replace_in_file, Rule};

/// Files the substitution pass visits. Nothing outside this list is touched;
/// entries missing from the clone are skipped.
const FILES: &[&str] = &[
  "package.json",
  "astro.config.mjs",
  "astro.config.static.mjs",
  "wrangler.toml",
  "src/config/site.ts",
  "src/lib/seo.ts",
  "src/lib/email.ts",
  "src/layouts/Layout.astro",
  ".env.example",
  "README.md",
];

/// Restructuring applied in static mode, in declared order. The config swap
/// pair must stay first and in this order (back up the active config before
/// the static one takes its path); the remaining pairs are disjoint.
const STATIC_MODE_MOVES: &[(&str, &str)] = &[
  ("astro.config.mjs", "astro.config.server.mjs"),
  ("astro.config.static.mjs", "astro.config.mjs"),
  ("src/pages/api", "_server-template/pages/api"),
  ("src/pages/blog/[slug].astro", "_server-template/pages/blog/[slug].astro"),
  ("src/lib/auth.ts", "_server-template/lib/auth.ts"),
  ("src/lib/db.ts", "_server-template/lib/db.ts"),
  ("src/lib/schema.ts", "_server-template/lib/schema.ts"),
  ("src/lib/email.ts", "_server-template/lib/email.ts"),
  ("src/actions", "_server-template/actions"),
  ("drizzle.config.ts", "_server-template/drizzle.config.ts"),
  ("drizzle", "_server-template/drizzle"),
];

pub fn transform(project_dir: &Path, answers: &AnswerSet) -> Result<(), ScaffoldError> {
  let kebab = to_kebab_case(answers.text("app_name"));
  let snake = to_snake_case(answers.text("app_name"));
  let product_name = answers.text("product_name");
  let description = answers.text("description");
  let domain = answers.text("domain");
  debug!(
    "Web transform: kebab='{}', snake='{}', product='{}', domain='{}'",
    kebab, snake, product_name, domain
  );

  // Declared order is load-bearing: the bare-domain rule runs before the
  // URL and email rules, which therefore match nothing in fresh template
  // content. Kept as declared rather than reordered.
  let rules = [
    Rule::new("my-app", kebab.as_str()),
    Rule::new("my_app", snake.as_str()),
    Rule::new("My App Starter", product_name),
    Rule::new("My App", product_name),
    Rule::new("An opinionated starter for content-driven sites.", description),
    Rule::new("example.com", domain),
    Rule::new("https://example.com", format!("https://{}", domain)),
    Rule::new("hello@example.com", format!("hello@{}", domain)),
  ];

  let mut touched = 0usize;
  for rel in FILES {
    if replace_in_file(&project_dir.join(rel), &rules)? {
      touched += 1;
    }
  }
  info!("Web template customized ({} files updated)", touched);

  if !answers.flag("needs_api_routes") {
    info!("API routes declined: switching to the static build configuration");
    for (from, to) in STATIC_MODE_MOVES {
      move_entry(project_dir, from, to)?;
    }
  }

  Ok(())
}
