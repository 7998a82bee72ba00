//! CLI module for npmart
//!
//! This module contains the flag definitions, the interactive prompts and
//! the setup flow handler.

pub mod commands;
pub mod prompts;
pub mod setup;

pub use commands::Cli;
