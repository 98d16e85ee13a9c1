//! Build configuration management
//!
//! Loads `sitebake.toml` from the project root. The file is optional: a
//! missing file yields the built-in defaults for a Webflow export. The
//! resulting config is immutable for the duration of a build and passed
//! explicitly into the validator and transformer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but cannot be read
    #[error("failed to read {0}")]
    Read(PathBuf, #[source] std::io::Error),

    /// Config file is not valid TOML
    #[error("failed to parse {0}")]
    Parse(PathBuf, #[source] toml::de::Error),
}

/// Build configuration for a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Approved asset lists
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Output tree settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Media directory settings
    #[serde(default)]
    pub media: MediaConfig,
}

/// The approved, ordered asset lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Stylesheets, concatenated into the bundle in this order
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
    /// Scripts, each minified independently
    #[serde(default = "default_scripts")]
    pub scripts: Vec<String>,
}

/// Output tree settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory name, relative to the project root
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

/// Media directory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Directories symlinked into the output tree
    #[serde(default = "default_media_dirs")]
    pub dirs: Vec<String>,
}

fn default_stylesheets() -> Vec<String> {
    vec!["css/normalize.css".to_string(), "css/webflow.css".to_string()]
}

fn default_scripts() -> Vec<String> {
    vec!["js/webflow.js".to_string()]
}

fn default_output_dir() -> String {
    paths::OUTPUT_DIR.to_string()
}

fn default_media_dirs() -> Vec<String> {
    vec!["fonts".to_string(), "images".to_string(), "videos".to_string()]
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            stylesheets: default_stylesheets(),
            scripts: default_scripts(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            dirs: default_media_dirs(),
        }
    }
}

impl Config {
    /// Load the config from `sitebake.toml` under the given project root.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(paths::CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ConfigError::Read(path.clone(), e))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(path, e))
    }

    /// The output directory as a path under the project root
    #[must_use]
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output.dir)
    }
}
