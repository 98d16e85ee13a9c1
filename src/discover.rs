//! Page discovery - finds the HTML pages of a project tree
//!
//! Walks the project root for `*.html` files, skipping the output directory
//! (pages from a previous build must never be re-transformed) and hidden
//! entries, which also covers tooling metadata directories like `.yarn` and
//! `.git`. Results are sorted for deterministic builds.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur during discovery
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// Root path does not exist
    #[error("project root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Error walking the directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Find all HTML pages under `root`, as paths relative to it.
///
/// `output_dir` is the directory name excluded from the walk.
pub fn find_pages(root: &Path, output_dir: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    if !root.exists() {
        return Err(DiscoverError::RootNotFound(root.to_path_buf()));
    }

    let out_path = root.join(output_dir);
    let mut pages = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| {
        // Don't filter the root directory itself
        if e.path() == root {
            return true;
        }
        !is_hidden(e) && e.path() != out_path
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "html") {
            let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            log::debug!("discovered page {}", relative.display());
            pages.push(relative);
        }
    }

    // Sort for deterministic output
    pages.sort();
    Ok(pages)
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
