//! npmart - npm credentials setup for Artifactory
//!
//! Fetches npm auth tokens from an Artifactory server and merges them into
//! the `.npmrc` of the working directory.
//!
//! Available as the `npmart` command.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use npmart::cli::commands::Cli;
use npmart::cli::setup;
use npmart::error::{NpmartError, Result};

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        handle_error(e);
        std::process::exit(1);
    }
}

/// Handle errors, with usage help when the configuration was incomplete
fn handle_error(e: NpmartError) {
    match &e {
        NpmartError::MissingParameters { .. } => {
            eprintln!("{}", e);
            eprintln!();
            Cli::command().print_help().ok();
        }
        _ => {
            eprintln!("Error: {}", e);
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match setup::handle_setup(cli).await {
        // A cancelled prompt is a deliberate exit, not a failure
        Err(NpmartError::Cancelled) => {
            tracing::info!("Setup cancelled at the prompt");
            println!("Aborted, nothing was written.");
            Ok(())
        }
        result => result,
    }
}
