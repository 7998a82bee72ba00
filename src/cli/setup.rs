//! The end-to-end setup flow

use std::fs;
use std::path::Path;

use crate::artifactory::ArtifactoryClient;
use crate::cli::commands::Cli;
use crate::cli::prompts;
use crate::core::config::{FileConfig, PartialConfig, RunConfig, OUTPUT_FILE};
use crate::core::npmrc;
use crate::core::registry::RegistryMapping;
use crate::error::Result;

/// Resolve the configuration, fetch the auth material from Artifactory and
/// rewrite the credentials file. Nothing is written until every fetch has
/// succeeded.
pub async fn handle_setup(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    let mut client = ArtifactoryClient::new(
        &config.hostname,
        config.email.clone(),
        config.password.clone(),
    )?;

    if config.use_api_key {
        println!("Requesting an Artifactory API key...");
        match client.fetch_or_create_api_key().await {
            Some(api_key) => {
                println!("✓ Authenticating with an API key");
                client = client.with_password(api_key);
            }
            None => println!("No API key available, continuing with your password"),
        }
    }

    println!("Fetching npm auth from https://{}/artifactory...", config.hostname);
    let general_auth = client.fetch_general_auth().await?;

    let output_path = Path::new(OUTPUT_FILE);
    let existing = if output_path.exists() {
        fs::read_to_string(output_path)?
    } else {
        String::new()
    };

    let mut merged = npmrc::merge_general_auth(&existing, &general_auth)?;

    for entry in &config.registries {
        let mapping = RegistryMapping::parse(entry)?;
        println!(
            "Fetching credentials for {} ({})...",
            mapping.alias, mapping.repository
        );
        let fragment = client
            .fetch_registry_auth(&mapping.repository, &mapping.scope)
            .await?;
        merged = npmrc::merge_registry_auth(&merged, &mapping, &config.hostname, &fragment)?;
    }

    fs::write(output_path, npmrc::collapse_blank_lines(&merged))?;
    println!("✓ Credentials written to {}", output_path.display());

    Ok(())
}

/// Merge the configuration layers and finalize them.
///
/// Quiet mode skips the prompts and fails instead when required values are
/// missing.
fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let merged = PartialConfig::from(FileConfig::load()).overlay(flag_config(cli));
    let resolved = if cli.quiet {
        merged
    } else {
        prompts::fill_interactively(merged)?
    };
    resolved.into_run_config()
}

fn flag_config(cli: &Cli) -> PartialConfig {
    PartialConfig {
        hostname: cli.hostname.clone(),
        email: cli.email.clone(),
        password: cli.password.clone(),
        registries: cli.registries.clone(),
        skip_api_key: cli.skip_api_key,
    }
}
