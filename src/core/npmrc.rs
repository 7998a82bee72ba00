//! Line-oriented merge logic for the `.npmrc` credentials file
//!
//! Every operation takes the current file text and returns the updated text,
//! so the steps compose and each stays testable on its own. The patterns
//! work on whole lines rather than a structured parse: entries this tool
//! does not own must survive byte-for-byte, comments and ordering included.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::core::registry::RegistryMapping;
use crate::error::{NpmartError, Result};

/// Matches an existing top-level `_auth` line.
static AUTH_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^_auth\s*=\s*\S*$").expect("Invalid _auth line pattern"));

/// Matches a run of blank lines: a newline, optional whitespace, a newline.
static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("Invalid blank run pattern"));

/// Slice the `_auth = <token>` line out of a general auth response.
///
/// The slice starts at the first `_auth` occurrence and ends before the
/// first newline after it, or at the end of the response when the line is
/// unterminated.
fn extract_auth_line(fragment: &str) -> Result<&str> {
    let start = fragment
        .find("_auth")
        .ok_or(NpmartError::MalformedAuthFragment)?;
    let rest = &fragment[start..];
    Ok(match rest.find('\n') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Merge the account-wide `_auth` line into the file text.
///
/// An existing `_auth` line is replaced in place (first one only, so the
/// rest of the file keeps its ordering); otherwise the line is appended on
/// a fresh line at the end.
pub fn merge_general_auth(existing: &str, fragment: &str) -> Result<String> {
    let auth_line = extract_auth_line(fragment)?;
    if AUTH_LINE.is_match(existing) {
        Ok(AUTH_LINE.replace(existing, NoExpand(auth_line)).into_owned())
    } else {
        Ok(format!("{}\n{}", existing, auth_line))
    }
}

/// Merge one registry's auth fragment into the file text.
///
/// Stale lines for this mapping are removed first, then the fragment the
/// server returned is appended verbatim. Removal is scoped to the exact
/// alias and to the exact hostname/repository credential path, so entries
/// for other registries are never touched. Running this twice for the same
/// registry converges on a single copy.
pub fn merge_registry_auth(
    existing: &str,
    mapping: &RegistryMapping,
    hostname: &str,
    fragment: &str,
) -> Result<String> {
    let mapping_line = Regex::new(&format!(
        r"(?m)^{}:registry\s*=.*$",
        regex::escape(&mapping.alias)
    ))?;
    let credentials_line = Regex::new(&format!(
        r"(?m)^//{}:443/artifactory/api/npm/{}/:.*$",
        regex::escape(hostname),
        regex::escape(&mapping.repository)
    ))?;

    let cleaned = mapping_line.replace_all(existing, "");
    let cleaned = credentials_line.replace_all(&cleaned, "");
    Ok(format!("{}\n{}\n", cleaned, fragment))
}

/// Collapse every run of blank lines left behind by the merge steps into a
/// single newline. Idempotent.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n").into_owned()
}
