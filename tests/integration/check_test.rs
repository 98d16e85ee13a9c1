//! Validation-only check command tests
//!
//! `sitebake check` walks every page and reports every violation, unlike
//! the fail-fast build.

use predicates::prelude::*;

use crate::common::{Site, sitebake_in};

#[test]
fn test_check_passes_on_clean_site() {
    let site = Site::new();

    sitebake_in(&site)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All asset references are approved."));
}

#[test]
fn test_check_writes_no_output() {
    let site = Site::new();

    sitebake_in(&site).arg("check").assert().success();
    assert!(!site.path().join("dist").exists());
}

#[test]
fn test_check_reports_violations_across_pages() {
    let site = Site::new();
    site.write(
        "index.html",
        r#"<html><head><link rel="stylesheet" href="b.css"></head></html>"#,
    );
    site.write(
        "about.html",
        r#"<html><body><script src="rogue.js"></script></body></html>"#,
    );

    sitebake_in(&site)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("b.css"))
        .stdout(predicate::str::contains("rogue.js"))
        .stdout(predicate::str::contains("FAILED: 2 violation(s)"));
}

#[test]
fn test_check_ignores_remote_references() {
    let site = Site::new();
    site.write(
        "index.html",
        r#"<html><head><link rel="stylesheet" href="https://cdn.example/x.css"></head>
<body><script src="https://cdn.example/x.js"></script></body></html>"#,
    );

    sitebake_in(&site).arg("check").assert().success();
}

#[test]
fn test_check_skips_pages_in_output_dir() {
    let site = Site::new();
    sitebake_in(&site).assert().success();

    // Built pages reference css/style.css, which is not in the manifest;
    // they must not be validated on the next check
    sitebake_in(&site).arg("check").assert().success();
}

#[test]
fn test_check_json_report() {
    let site = Site::new();
    site.write(
        "index.html",
        r#"<html><head><link rel="stylesheet" href="b.css"></head></html>"#,
    );

    let output = sitebake_in(&site).args(["--json", "check"]).assert().failure();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["passed"], false);
    assert_eq!(value["violations"][0]["kind"], "stylesheet");
    assert_eq!(value["violations"][0]["offending"][0], "b.css");
}

#[test]
fn test_check_empty_tree() {
    let site = Site::empty();

    sitebake_in(&site)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pages found."));
}
