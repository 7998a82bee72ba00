//! Registry mapping entries (`@scope=>repository`)
//!
//! Each entry binds an npm scope alias to the Artifactory repository that
//! serves it, e.g. `@fss=>ip-wfss-npm-virtual`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{NpmartError, Result};

/// Shape accepted for a registry entry. Anchored at the start only, so
/// trailing text after the repository name is tolerated.
static REGISTRY_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[\w-]+=>[\w-]+").expect("Invalid registry entry pattern"));

/// A parsed `@scope=>repository` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMapping {
    /// Scope alias including the leading `@`, e.g. `@fss`
    pub alias: String,
    /// Alias without the leading `@`, used in auth endpoint paths
    pub scope: String,
    /// Artifactory repository name, e.g. `ip-wfss-npm-virtual`
    pub repository: String,
}

impl RegistryMapping {
    /// Split an entry on the first `=>` and trim both parts.
    ///
    /// Shape validation happens before entries reach this point (prompt
    /// validators and quiet-mode checks), so this only rejects entries
    /// that cannot be split at all.
    pub fn parse(entry: &str) -> Result<Self> {
        let (alias, repository) = entry
            .split_once("=>")
            .ok_or_else(|| NpmartError::InvalidRegistrySpec(entry.to_string()))?;
        let alias = alias.trim();
        let repository = repository.trim();
        if !alias.starts_with('@') || alias.len() < 2 || repository.is_empty() {
            return Err(NpmartError::InvalidRegistrySpec(entry.to_string()));
        }
        Ok(Self {
            alias: alias.to_string(),
            scope: alias[1..].to_string(),
            repository: repository.to_string(),
        })
    }
}

/// Check whether an entry looks like `@<scope>=><repo>`.
pub fn is_valid_entry(entry: &str) -> bool {
    REGISTRY_ENTRY.is_match(entry.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_alias_and_repository() {
        let mapping = RegistryMapping::parse("@fss=>ip-wfss-npm-virtual").unwrap();
        assert_eq!(mapping.alias, "@fss");
        assert_eq!(mapping.scope, "fss");
        assert_eq!(mapping.repository, "ip-wfss-npm-virtual");
    }

    #[test]
    fn test_parse_trims_whitespace_around_parts() {
        let mapping = RegistryMapping::parse("  @tools => npm-local ").unwrap();
        assert_eq!(mapping.alias, "@tools");
        assert_eq!(mapping.scope, "tools");
        assert_eq!(mapping.repository, "npm-local");
    }

    #[test]
    fn test_parse_splits_on_first_arrow_only() {
        let mapping = RegistryMapping::parse("@a=>b=>c").unwrap();
        assert_eq!(mapping.alias, "@a");
        assert_eq!(mapping.repository, "b=>c");
    }

    #[test]
    fn test_parse_rejects_missing_arrow() {
        let err = RegistryMapping::parse("@fss").unwrap_err();
        assert!(matches!(err, NpmartError::InvalidRegistrySpec(_)));
    }

    #[test]
    fn test_parse_rejects_missing_scope_prefix() {
        assert!(RegistryMapping::parse("fss=>repo").is_err());
        assert!(RegistryMapping::parse("@=>repo").is_err());
        assert!(RegistryMapping::parse("@fss=>").is_err());
    }

    #[test]
    fn test_valid_entry_accepts_word_chars_and_dashes() {
        assert!(is_valid_entry("@fss=>ip-wfss-npm-virtual"));
        assert!(is_valid_entry("@my_scope=>repo_1"));
        assert!(is_valid_entry(" @fss=>repo "));
    }

    #[test]
    fn test_valid_entry_rejects_malformed_shapes() {
        assert!(!is_valid_entry("fss=>repo"));
        assert!(!is_valid_entry("@fss->repo"));
        assert!(!is_valid_entry("@fss=>"));
        assert!(!is_valid_entry("@=>repo"));
        assert!(!is_valid_entry(""));
        assert!(!is_valid_entry("@my scope=>repo"));
    }
}
