//! End-to-end build tests
//!
//! The default invocation (no subcommand) runs the full pipeline. These
//! tests assert on the output tree: transformed pages, bundles, and media
//! links.

use predicates::prelude::*;

use crate::common::{Site, sitebake_in};

#[test]
fn test_build_writes_full_output_tree() {
    let site = Site::new();

    sitebake_in(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains("Build complete."));

    assert!(site.path().join("dist/index.html").exists());
    assert!(site.path().join("dist/css/style.css").exists());
    assert!(site.path().join("dist/js/webflow.js").exists());
    assert!(site.path().join("dist/fonts").exists());
}

#[test]
fn test_build_subcommand_matches_default() {
    let site = Site::new();

    sitebake_in(&site).arg("build").assert().success();
    assert!(site.path().join("dist/index.html").exists());
}

#[test]
fn test_pages_get_defer_and_bundle_link() {
    let site = Site::new();
    sitebake_in(&site).assert().success();

    let page = site.read("dist/index.html");
    assert!(page.contains("defer"));
    assert!(page.contains("css/style.css"));
    // Original local stylesheet links are gone
    assert!(!page.contains("normalize.css"));
    assert!(!page.contains("webflow.css"));
}

#[test]
fn test_remote_stylesheet_links_preserved() {
    let site = Site::new();
    sitebake_in(&site).assert().success();

    let page = site.read("dist/index.html");
    assert!(page.contains("https://cdn.example/remote.css"));
    // The injected bundle link is present alongside the remote one
    assert!(page.contains("css/style.css"));
}

#[test]
fn test_nested_page_gets_relative_prefix() {
    let site = Site::new();
    site.write(
        "blog/post.html",
        r#"<!DOCTYPE html>
<html>
<head>
  <link rel="stylesheet" href="../css/webflow.css">
</head>
<body>
  <script src="../js/webflow.js"></script>
</body>
</html>
"#,
    );

    sitebake_in(&site).assert().success();

    let page = site.read("dist/blog/post.html");
    assert!(page.contains("../css/style.css"));
}

#[test]
fn test_stylesheet_bundle_is_concatenated_and_minified() {
    let site = Site::new();
    sitebake_in(&site).assert().success();

    let bundle = site.read("dist/css/style.css");
    // Both inputs present, in order
    assert!(bundle.contains("margin"));
    assert!(bundle.contains("color:red"));
    let margin_pos = bundle.find("margin").unwrap();
    let color_pos = bundle.find("color:red").unwrap();
    assert!(margin_pos < color_pos);
}

#[cfg(unix)]
#[test]
fn test_media_dirs_are_relative_symlinks() {
    let site = Site::new();
    sitebake_in(&site).assert().success();

    for name in ["fonts", "images", "videos"] {
        let link = site.path().join("dist").join(name);
        let meta = std::fs::symlink_metadata(&link).unwrap();
        assert!(meta.file_type().is_symlink(), "{name} should be a symlink");
        let target = std::fs::read_link(&link).unwrap();
        assert_eq!(target, std::path::PathBuf::from("..").join(name));
    }
    // Links resolve into the source tree
    assert!(site.path().join("dist/fonts/icons.woff").exists());
}

#[test]
fn test_build_aborts_on_unapproved_stylesheet() {
    let site = Site::new();
    site.write(
        "index.html",
        r#"<html><head><link rel="stylesheet" href="b.css"></head><body></body></html>"#,
    );

    sitebake_in(&site)
        .assert()
        .failure()
        .stderr(predicate::str::contains("b.css"))
        .stderr(predicate::str::contains("stylesheet"));

    // No output was written for the failing page
    assert!(!site.path().join("dist/index.html").exists());
}

#[test]
fn test_build_aborts_on_unapproved_script() {
    let site = Site::new();
    site.write(
        "index.html",
        r#"<html><head></head><body><script src="js/rogue.js"></script></body></html>"#,
    );

    sitebake_in(&site)
        .assert()
        .failure()
        .stderr(predicate::str::contains("rogue.js"))
        .stderr(predicate::str::contains("script"));
}

#[test]
fn test_build_aborts_on_missing_manifest_stylesheet() {
    let site = Site::new();
    std::fs::remove_file(site.path().join("css/webflow.css")).unwrap();

    sitebake_in(&site)
        .assert()
        .failure()
        .stderr(predicate::str::contains("webflow.css"));
}

#[test]
fn test_build_aborts_on_js_syntax_error() {
    let site = Site::new();
    site.write("js/webflow.js", "function {{{");

    sitebake_in(&site)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to minify"));
}

#[test]
fn test_build_aborts_on_missing_media_dir() {
    let site = Site::new();
    std::fs::remove_dir_all(site.path().join("videos")).unwrap();

    sitebake_in(&site)
        .assert()
        .failure()
        .stderr(predicate::str::contains("media directory not found"));
}

#[test]
fn test_build_respects_custom_config() {
    let site = Site::new();
    site.write(
        "sitebake.toml",
        r#"[assets]
stylesheets = ["css/site.css"]
scripts = ["js/app.js"]

[output]
dir = "out"

[media]
dirs = ["fonts"]
"#,
    );
    site.write("css/site.css", "p { font-size: 14px; }\n");
    site.write("js/app.js", "var app = true;\n");
    site.write(
        "index.html",
        r#"<html><head><link rel="stylesheet" href="css/site.css"></head>
<body><script src="js/app.js"></script></body></html>"#,
    );

    sitebake_in(&site).assert().success();

    assert!(site.path().join("out/index.html").exists());
    assert!(site.path().join("out/css/style.css").exists());
    assert!(site.path().join("out/js/app.js").exists());
    assert!(!site.path().join("dist").exists());
}

#[test]
fn test_build_cleans_previous_output() {
    let site = Site::new();
    site.write("dist/stale.html", "<html></html>");

    sitebake_in(&site).assert().success();
    assert!(!site.path().join("dist/stale.html").exists());
}

#[test]
fn test_build_json_report() {
    let site = Site::new();

    let output = sitebake_in(&site).arg("--json").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["pages"][0], "index.html");
    assert_eq!(value["stylesheet_bundle"], "css/style.css");
    assert_eq!(value["stylesheet_inputs"], 2);
}
