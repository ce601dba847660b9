// src/cli.rs
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blueprint", // Command name users type
    author,
    version,
    about = "Spins up a customized project from a remote starter template.",
    long_about = None
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List available templates
  List,
  /// Generate a new project from a template
  New(NewArgs),
}

#[derive(Parser, Debug)]
pub struct NewArgs {
  /// Project name (prompted for when omitted)
  pub name: Option<String>,

  /// Template key (e.g. desktop, web); prompted for when omitted
  #[arg(short, long)]
  pub template: Option<String>,

  /// Package manager to install with (npm, pnpm, yarn, bun)
  #[arg(short, long)]
  pub package_manager: Option<String>,

  /// Skip dependency installation
  #[arg(long)]
  pub skip_install: bool,
}
