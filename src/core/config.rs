//! Run configuration resolution
//!
//! Configuration values come from three layers, lowest to highest
//! precedence:
//! - the optional `.npmartrc` JSON file in the working directory
//! - CLI flags
//! - interactive prompt answers (skipped entirely in quiet mode)

use std::fs;
use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;

use crate::core::registry;
use crate::error::{NpmartError, Result};

/// On-disk configuration file, read from the working directory
pub const CONFIG_FILE: &str = ".npmartrc";

/// Credentials file written by the setup flow
pub const OUTPUT_FILE: &str = ".npmrc";

/// Contents of the optional `.npmartrc` file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub hostname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub registries: Option<Vec<String>>,
}

impl FileConfig {
    /// Load `.npmartrc` from the working directory.
    ///
    /// A missing file is not an error. A file that exists but is not valid
    /// JSON is logged as a warning and ignored, so a stray file never
    /// blocks the run.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Working configuration while layers are still being merged
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub hostname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub registries: Option<Vec<String>>,
    pub skip_api_key: bool,
}

impl From<FileConfig> for PartialConfig {
    fn from(file: FileConfig) -> Self {
        Self {
            hostname: file.hostname,
            email: file.email,
            password: file.password,
            registries: file.registries,
            skip_api_key: false,
        }
    }
}

impl PartialConfig {
    /// Merge `overrides` on top of `self`. Present values win; blank
    /// strings do not count as present.
    pub fn overlay(self, overrides: PartialConfig) -> Self {
        Self {
            hostname: pick(overrides.hostname, self.hostname),
            email: pick(overrides.email, self.email),
            password: pick(overrides.password, self.password),
            registries: overrides
                .registries
                .filter(|r| !r.is_empty())
                .or(self.registries),
            skip_api_key: overrides.skip_api_key || self.skip_api_key,
        }
    }

    /// Names of required parameters that are still absent, in the order
    /// they are reported to the user.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.hostname) {
            missing.push("hostname");
        }
        if self.registries.as_deref().is_none_or(|r| r.is_empty()) {
            missing.push("registries");
        }
        if blank(&self.email) {
            missing.push("email");
        }
        if blank(&self.password) {
            missing.push("password");
        }
        missing
    }

    /// Finalize into a [`RunConfig`], rejecting incomplete configuration
    /// and malformed registry entries.
    pub fn into_run_config(self) -> Result<RunConfig> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(NpmartError::MissingParameters {
                missing: missing.iter().map(|name| name.to_string()).collect(),
            });
        }

        let registries: Vec<String> = self
            .registries
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.trim().to_string())
            .collect();
        for entry in &registries {
            if !registry::is_valid_entry(entry) {
                return Err(NpmartError::InvalidRegistrySpec(entry.clone()));
            }
        }

        Ok(RunConfig {
            hostname: self.hostname.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: SecretString::from(self.password.unwrap_or_default()),
            registries,
            use_api_key: !self.skip_api_key,
        })
    }
}

/// Fully resolved configuration for one setup run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub hostname: String,
    pub email: String,
    pub password: SecretString,
    /// Registry entries in configured order, already shape-checked
    pub registries: Vec<String>,
    pub use_api_key: bool,
}

fn pick(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred.filter(|v| !v.trim().is_empty()).or(fallback)
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
