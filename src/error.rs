//! Custom error types for npmart
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the npmart application
#[derive(Error, Debug)]
pub enum NpmartError {
    /// Required parameters absent in quiet mode
    #[error("Missing required parameters: {}.\n\n  → Supply them as flags or in .npmartrc, or drop -q to be prompted.", .missing.join(", "))]
    MissingParameters {
        /// Names of the absent parameters, in reporting order
        missing: Vec<String>,
    },

    /// A registry entry does not match the `@<scope>=><repo>` shape
    #[error("Invalid registry '{0}'.\n\n  → Values must be @<scope>=><repo>. Eg, @fss=>ip-wfss-npm-virtual")]
    InvalidRegistrySpec(String),

    /// The general npm auth response carried no `_auth` line
    #[error("The npm auth response did not contain an _auth line.\n\n  → The server may not expose the Artifactory npm API. Check the hostname.")]
    MalformedAuthFragment,

    /// Artifactory answered with a non-success status
    #[error("Artifactory request failed: {0}\n\n  → Check the hostname and your credentials.")]
    ArtifactoryApi(String),

    /// The configured hostname cannot form a valid base URL
    #[error("Invalid hostname '{0}'.\n\n  → Pass the bare hostname, without scheme, port or path. Eg, artifactory.example.com")]
    InvalidHostname(String),

    /// Operation cancelled by user
    #[error("Operation cancelled.")]
    Cancelled,

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Network request error
    #[error("Network request failed: {0}\n\n  → Check your connection and that the Artifactory host is reachable.")]
    Network(#[from] reqwest::Error),

    /// A request URL could not be assembled
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// A per-registry removal pattern failed to compile
    #[error("Failed to build removal pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias using NpmartError
pub type Result<T> = std::result::Result<T, NpmartError>;
