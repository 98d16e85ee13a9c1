//! Asset manifest model
//!
//! The manifest is the single source of truth for which local assets a page
//! may reference: one ordered list of stylesheets and one of scripts. It is
//! built once from the config, is immutable for the duration of a build, and
//! answers approval queries by basename. The filesystem is not consulted
//! here: a listed-but-missing file surfaces later as an I/O error, not a
//! manifest error.

use std::collections::BTreeSet;

use crate::config::Config;
use crate::reference;

/// The two kinds of approved assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A CSS file, part of the concatenated bundle
    Stylesheet,
    /// A JS file, minified independently
    Script,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stylesheet => write!(f, "stylesheet"),
            Self::Script => write!(f, "script"),
        }
    }
}

/// The approved local assets for a build
#[derive(Debug, Clone)]
pub struct AssetManifest {
    /// Stylesheet paths, in bundle concatenation order
    pub stylesheets: Vec<String>,
    /// Script paths, in processing order
    pub scripts: Vec<String>,
    stylesheet_names: BTreeSet<String>,
    script_names: BTreeSet<String>,
}

impl AssetManifest {
    /// Build a manifest from ordered stylesheet and script path lists
    #[must_use]
    pub fn new(stylesheets: Vec<String>, scripts: Vec<String>) -> Self {
        let stylesheet_names =
            stylesheets.iter().map(|p| reference::basename(p).to_string()).collect();
        let script_names = scripts.iter().map(|p| reference::basename(p).to_string()).collect();
        Self {
            stylesheets,
            scripts,
            stylesheet_names,
            script_names,
        }
    }

    /// Build the manifest from a loaded config
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.assets.stylesheets.clone(), config.assets.scripts.clone())
    }

    /// Check whether a basename is on the approved list for a kind
    #[must_use]
    pub fn is_approved(&self, kind: AssetKind, name: &str) -> bool {
        self.names(kind).contains(name)
    }

    /// The approved basenames for a kind
    #[must_use]
    pub const fn names(&self, kind: AssetKind) -> &BTreeSet<String> {
        match kind {
            AssetKind::Stylesheet => &self.stylesheet_names,
            AssetKind::Script => &self.script_names,
        }
    }
}
