// src/lib.rs
//! Library surface of the blueprint CLI. The binary in main.rs is a thin
//! wrapper; keeping the engine here keeps it testable without a terminal.

pub mod casing;
pub mod cli;
pub mod desktop;
pub mod error;
pub mod fsops;
pub mod git;
pub mod install;
pub mod list;
pub mod new;
pub mod prompt;
pub mod question;
pub mod registry;
pub mod replace;
pub mod web;
