//! End-to-end checks of the quiet-mode contract: no prompts, no writes
//! unless the configuration is complete.

use assert_cmd::Command;
use predicates::prelude::*;

fn npmart() -> Command {
    Command::cargo_bin("npmart").unwrap()
}

#[test]
fn quiet_mode_reports_missing_parameters_and_help() {
    let dir = tempfile::tempdir().unwrap();

    npmart()
        .current_dir(dir.path())
        .args(["-q", "-n", "artifactory.example.com", "-e", "dev@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required parameters: registries, password",
        ))
        .stdout(predicate::str::contains("Usage"));

    assert!(!dir.path().join(".npmrc").exists());
}

#[test]
fn quiet_mode_reports_every_missing_parameter_in_order() {
    let dir = tempfile::tempdir().unwrap();

    npmart()
        .current_dir(dir.path())
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required parameters: hostname, registries, email, password",
        ));
}

#[test]
fn quiet_mode_leaves_existing_credentials_untouched_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let npmrc = dir.path().join(".npmrc");
    std::fs::write(&npmrc, "registry=https://example.com\n").unwrap();

    npmart()
        .current_dir(dir.path())
        .args(["-q", "-e", "dev@example.com"])
        .assert()
        .failure();

    assert_eq!(
        std::fs::read_to_string(&npmrc).unwrap(),
        "registry=https://example.com\n"
    );
}

#[test]
fn quiet_mode_rejects_malformed_registry_entries() {
    let dir = tempfile::tempdir().unwrap();

    npmart()
        .current_dir(dir.path())
        .args([
            "-q",
            "-n",
            "artifactory.example.com",
            "-e",
            "dev@example.com",
            "-p",
            "secret",
            "-r",
            "not-a-mapping",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid registry 'not-a-mapping'"));

    assert!(!dir.path().join(".npmrc").exists());
}

#[test]
fn quiet_mode_reads_values_from_npmartrc() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".npmartrc"),
        r#"{"hostname": "artifactory.example.com", "registries": ["@fss=>ip-wfss-npm-virtual"]}"#,
    )
    .unwrap();

    // email and password are still missing, so the run must fail, but the
    // file-provided values must no longer be reported
    npmart()
        .current_dir(dir.path())
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required parameters: email, password",
        ));
}

#[test]
fn quiet_mode_ignores_malformed_npmartrc() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".npmartrc"), "{ not json").unwrap();

    npmart()
        .current_dir(dir.path())
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required parameters: hostname, registries, email, password",
        ));
}

#[test]
fn help_lists_the_flag_surface() {
    npmart()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--hostname")
                .and(predicate::str::contains("--registries"))
                .and(predicate::str::contains("--email"))
                .and(predicate::str::contains("--password"))
                .and(predicate::str::contains("--skipApiKey"))
                .and(predicate::str::contains("--quiet")),
        );
}
