//! CLI definitions using clap
//!
//! Defines the flag surface for the `npmart` binary.

use clap::Parser;

/// npmart - npm credentials setup for Artifactory
///
/// Fetches npm auth tokens from an Artifactory server and merges them into
/// the `.npmrc` in the working directory, leaving unrelated entries alone.
/// Values missing from the flags and from `.npmartrc` are prompted for,
/// unless quiet mode is requested.
#[derive(Parser, Debug)]
#[command(name = "npmart", version, about, long_about = None)]
pub struct Cli {
    /// Artifactory hostname, without scheme or port
    #[arg(short = 'n', long)]
    pub hostname: Option<String>,

    /// Registries to set up, comma separated, each @<scope>=><repo>
    #[arg(short = 'r', long, value_delimiter = ',')]
    pub registries: Option<Vec<String>>,

    /// Email used for HTTP basic auth against Artifactory
    #[arg(short = 'e', long)]
    pub email: Option<String>,

    /// Password for HTTP basic auth (prefer the prompt or .npmartrc)
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Authenticate with the plain password instead of an Artifactory API key
    #[arg(short = 'x', long = "skipApiKey")]
    pub skip_api_key: bool,

    /// Quiet mode: never prompt, fail if required values are missing
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_registries_flag_splits_on_commas() {
        let cli = Cli::parse_from(["npmart", "-r", "@a=>one,@b=>two"]);
        assert_eq!(
            cli.registries,
            Some(vec!["@a=>one".to_string(), "@b=>two".to_string()])
        );
    }

    #[test]
    fn test_short_flags_map_to_fields() {
        let cli = Cli::parse_from([
            "npmart",
            "-n",
            "artifactory.example.com",
            "-e",
            "dev@example.com",
            "-p",
            "secret",
            "-x",
            "-q",
        ]);
        assert_eq!(cli.hostname.as_deref(), Some("artifactory.example.com"));
        assert_eq!(cli.email.as_deref(), Some("dev@example.com"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert!(cli.skip_api_key);
        assert!(cli.quiet);
    }

    #[test]
    fn test_skip_api_key_uses_camel_case_long_flag() {
        let cli = Cli::parse_from(["npmart", "--skipApiKey"]);
        assert!(cli.skip_api_key);
    }
}
