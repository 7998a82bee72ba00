//! npmart - npm credentials setup for Artifactory
//!
//! This library fetches npm auth tokens from an Artifactory server and
//! merges them into the `.npmrc` of the working directory, keeping every
//! line it does not own intact. Configuration comes from an optional
//! `.npmartrc` file, CLI flags and interactive prompts.

pub mod artifactory;
pub mod cli;
pub mod core;
pub mod error;

pub use error::{NpmartError, Result};
