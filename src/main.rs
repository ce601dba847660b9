// src/main.rs
use blueprint_cli::cli::{Cli, Commands};
use blueprint_cli::{list, new};
use clap::Parser;
use log::LevelFilter;
use std::process;

fn main() {
  let cli = Cli::parse();

  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  let result = match cli.command {
    Commands::List => {
      list::run_list();
      Ok(())
    }
    Commands::New(args) => new::run_new(args),
  };

  if let Err(e) = result {
    eprintln!("{}", e);
    process::exit(1);
  }
}
