//! Core functionality for npmart
//!
//! This module contains the business logic shared by the CLI:
//! - Configuration resolution (file, flags, prompts)
//! - Registry mapping parsing
//! - `.npmrc` merge operations

pub mod config;
pub mod npmrc;
pub mod registry;

pub use config::{FileConfig, PartialConfig, RunConfig};
pub use registry::RegistryMapping;
