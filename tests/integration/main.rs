//! Integration tests for the sitebake CLI
//!
//! These tests drive the real binary against complete site trees in
//! temporary directories, covering the full pipeline: validation,
//! transformation, bundling, media linking, and the auxiliary commands.

mod build_test;
mod check_test;
mod common;

use predicates::prelude::*;

use common::{Site, sitebake_in};

// =============================================================================
// INIT / CLEAN / VERSION
// =============================================================================

#[test]
fn test_init_writes_config() {
    let site = Site::empty();

    sitebake_in(&site)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sitebake.toml"));

    assert!(site.path().join("sitebake.toml").exists());
    let content = site.read("sitebake.toml");
    assert!(content.contains("css/normalize.css"));
    assert!(content.contains("[output]"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let site = Site::empty();
    site.write("sitebake.toml", "[output]\ndir = \"out\"\n");

    sitebake_in(&site)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    // Untouched without --force
    assert!(site.read("sitebake.toml").contains("dir = \"out\""));

    sitebake_in(&site).args(["init", "--force"]).assert().success();
    assert!(site.read("sitebake.toml").contains("css/normalize.css"));
}

#[test]
fn test_clean_removes_output_dir() {
    let site = Site::new();

    sitebake_in(&site).assert().success();
    assert!(site.path().join("dist").exists());

    sitebake_in(&site)
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed dist/"));
    assert!(!site.path().join("dist").exists());

    sitebake_in(&site)
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean."));
}

#[test]
fn test_version_subcommand() {
    let site = Site::empty();

    sitebake_in(&site)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitebake v"));
}

#[test]
fn test_version_json() {
    let site = Site::empty();

    let output = sitebake_in(&site).args(["--json", "version"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value["version"].is_string());
}
