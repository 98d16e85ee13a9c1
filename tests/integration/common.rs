//! Shared fixtures for integration tests

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use tempfile::TempDir;

/// A complete Webflow-style export in a temporary directory
pub struct Site {
    temp: TempDir,
}

/// The root page of the default fixture site
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Home</title>
  <link rel="stylesheet" href="css/normalize.css">
  <link rel="stylesheet" href="css/webflow.css">
  <link rel="stylesheet" href="https://cdn.example/remote.css">
</head>
<body>
  <h1>Home</h1>
  <script src="js/webflow.js"></script>
</body>
</html>
"#;

impl Site {
    /// A valid site: approved assets, media directories, one root page
    pub fn new() -> Self {
        let site = Self::empty();
        site.write("css/normalize.css", "html { margin: 0; padding: 0; }\n");
        site.write("css/webflow.css", ".w-container { color: red; }\n");
        site.write(
            "js/webflow.js",
            "var Webflow = { ready: function () { return 1 + 2; } };\n",
        );
        site.write("fonts/icons.woff", "woff");
        fs::create_dir_all(site.path().join("images")).unwrap();
        fs::create_dir_all(site.path().join("videos")).unwrap();
        site.write("index.html", INDEX_HTML);
        site
    }

    /// A bare temporary directory
    pub fn empty() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file under the site root, creating parent directories
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read a file under the site root
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }
}

/// Helper function to create a sitebake command running inside a site
pub fn sitebake_in(site: &Site) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("sitebake"));
    cmd.current_dir(site.path());
    cmd
}
