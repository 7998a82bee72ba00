//! Interactive configuration prompts
//!
//! Asks for every value the flags and `.npmartrc` did not already provide.
//! Known values are offered as defaults so a plain Enter keeps them; only
//! the password cannot be echoed back, so there an empty answer keeps the
//! configured one.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};

use crate::core::config::PartialConfig;
use crate::core::registry;
use crate::error::{NpmartError, Result};

/// Ask for the full configuration, seeded with the already-known values.
///
/// Answers are collected in a fixed order: email, password, hostname,
/// registries, then the API key preference.
pub fn fill_interactively(known: PartialConfig) -> Result<PartialConfig> {
    let theme = ColorfulTheme::default();

    let email = required_text(&theme, "Enter your intranet email", known.email)?;
    let password = password_prompt(&theme, known.password)?;
    let hostname = required_text(&theme, "Artifactory hostname", known.hostname)?;
    let registries = registries_prompt(&theme, known.registries)?;
    let use_api_key = Confirm::with_theme(&theme)
        .with_prompt("Use an Artifactory API key instead of your password?")
        .default(!known.skip_api_key)
        .interact()
        .map_err(prompt_error)?;

    Ok(PartialConfig {
        hostname: Some(hostname),
        email: Some(email),
        password: Some(password),
        registries: Some(registries),
        skip_api_key: !use_api_key,
    })
}

/// Prompt for a non-empty line of text.
fn required_text(theme: &ColorfulTheme, prompt: &str, initial: Option<String>) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme);
    input.with_prompt(prompt).validate_with(|value: &String| {
        if value.trim().is_empty() {
            Err("a value is required")
        } else {
            Ok(())
        }
    });
    if let Some(initial) = initial.filter(|v| !v.trim().is_empty()) {
        input.default(initial);
    }
    input.interact().map_err(prompt_error)
}

/// Prompt for the password without echoing it.
///
/// A password from the flags or `.npmartrc` cannot be shown as a default,
/// so when one is known an empty answer keeps it.
fn password_prompt(theme: &ColorfulTheme, known: Option<String>) -> Result<String> {
    let known = known.filter(|v| !v.is_empty());
    let prompt = if known.is_some() {
        "Enter your intranet password (empty keeps the configured one)"
    } else {
        "Enter your intranet password"
    };

    let typed = Password::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty_password(known.is_some())
        .interact()
        .map_err(prompt_error)?;

    if typed.is_empty() {
        if let Some(known) = known {
            return Ok(known);
        }
    }
    Ok(typed)
}

/// Prompt for the comma-separated registry list.
fn registries_prompt(theme: &ColorfulTheme, initial: Option<Vec<String>>) -> Result<Vec<String>> {
    let mut input = Input::<String>::with_theme(theme);
    input
        .with_prompt("Enter registries (comma separated)")
        .validate_with(|value: &String| {
            let entries = split_entries(value);
            if entries.is_empty() {
                return Err("at least one registry is required".to_string());
            }
            match entries.iter().find(|entry| !registry::is_valid_entry(entry)) {
                Some(entry) => Err(format!(
                    "'{}' is invalid. Values must be @<scope>=><repo>. Eg, @fss=>ip-wfss-npm-virtual",
                    entry
                )),
                None => Ok(()),
            }
        });
    if let Some(initial) = initial.filter(|entries| !entries.is_empty()) {
        input.default(initial.join(","));
    }

    let raw = input.interact().map_err(prompt_error)?;
    Ok(split_entries(&raw))
}

fn split_entries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Ctrl-C surfaces as an interrupted read and a closed stdin as EOF; both
/// mean the user walked away. Everything else is a real terminal failure.
fn prompt_error(err: io::Error) -> NpmartError {
    match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => {
            tracing::debug!("Prompt aborted by user");
            NpmartError::Cancelled
        }
        _ => NpmartError::Io(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_entries_trims_and_drops_empties() {
        assert_eq!(
            split_entries(" @a=>one , @b=>two ,, "),
            vec!["@a=>one".to_string(), "@b=>two".to_string()]
        );
        assert!(split_entries("").is_empty());
        assert!(split_entries(" , ").is_empty());
    }

    #[test]
    fn test_aborted_reads_map_to_cancelled() {
        for kind in [io::ErrorKind::Interrupted, io::ErrorKind::UnexpectedEof] {
            let err = prompt_error(io::Error::new(kind, "read aborted"));
            assert!(matches!(err, NpmartError::Cancelled));
        }
    }

    #[test]
    fn test_other_read_failures_stay_io_errors() {
        let err = prompt_error(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(matches!(err, NpmartError::Io(_)));
    }
}
