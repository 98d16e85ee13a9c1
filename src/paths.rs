//! Centralized path definitions for sitebake
//!
//! This module provides a single source of truth for the filesystem layout
//! of a build: where the config file lives, where the output tree goes, and
//! how paths inside the output tree relate back to the project root.
//!
//! ## Output Layout
//!
//! ```text
//! project/
//! ├── sitebake.toml            # Build configuration (optional)
//! ├── index.html               # Source pages, mirrored into the output
//! ├── css/ js/                 # Approved source assets
//! ├── fonts/ images/ videos/   # Media, symlinked into the output
//! └── dist/                    # Output tree (default name)
//!     ├── index.html           # Transformed, minified pages
//!     ├── css/style.css        # Concatenated, minified stylesheet bundle
//!     ├── js/<name>.js         # Minified scripts, filenames preserved
//!     └── fonts -> ../fonts    # Relative directory symlinks
//! ```

use std::path::{Component, Path, PathBuf};

/// Default output directory name
pub const OUTPUT_DIR: &str = "dist";

/// Project configuration filename
pub const CONFIG_FILE: &str = "sitebake.toml";

/// Stylesheet directory inside the output tree
pub const CSS_DIR: &str = "css";

/// Script directory inside the output tree
pub const JS_DIR: &str = "js";

/// Filename of the concatenated stylesheet bundle
pub const STYLE_BUNDLE: &str = "style.css";

/// Path of the stylesheet bundle relative to the output root.
///
/// Every transformed page links to this path (prefixed per its depth).
#[must_use]
pub fn style_bundle_rel() -> PathBuf {
    Path::new(CSS_DIR).join(STYLE_BUNDLE)
}

/// Compute the href prefix from a page back up to the project root.
///
/// A page at the root gets `.`; a page one directory deep gets `..`, two
/// deep `../..`, and so on.
#[must_use]
pub fn relative_prefix(page: &Path) -> String {
    let depth = page.parent().map_or(0, |dir| dir.components().count());
    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

/// Compute a relative path from `base` to `target`.
///
/// Both paths must be relative to the same root. Used for symlink targets,
/// so that the output tree stays relocatable.
#[must_use]
pub fn relative_from(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<Component<'_>> = target.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[common..] {
        rel.push(part);
    }
    rel
}
