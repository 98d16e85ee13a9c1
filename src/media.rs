//! Media linking - symlinks media directories into the output tree
//!
//! Media directories (fonts, images, videos) are not copied: each gets a
//! relative, directory-mode symlink inside the output directory, so the
//! output tree stays relocatable together with its sources. A missing
//! source directory is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::paths;

/// Errors that can occur while linking media
#[derive(Debug, Error)]
pub enum MediaError {
    /// A configured media directory does not exist
    #[error("media directory not found: {0}")]
    Missing(PathBuf),

    /// Creating a symlink failed
    #[error("failed to link {link}: {source}")]
    Link {
        /// The symlink path inside the output tree
        link: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// IO error preparing the output directory
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Symlink each media directory into `out_dir` with a relative target.
///
/// Returns the names of the linked directories.
pub fn link_media(root: &Path, out_dir: &Path, dirs: &[String]) -> Result<Vec<String>, MediaError> {
    fs::create_dir_all(out_dir)?;
    let out_rel = out_dir.strip_prefix(root).unwrap_or(out_dir);

    let mut linked = Vec::with_capacity(dirs.len());
    for name in dirs {
        let source = root.join(name);
        if !source.is_dir() {
            return Err(MediaError::Missing(source));
        }

        let link = out_dir.join(name);
        let target = paths::relative_from(Path::new(name), out_rel);
        symlink_dir(&target, &link).map_err(|e| MediaError::Link {
            link: link.clone(),
            source: e,
        })?;
        log::debug!("linked {} -> {}", link.display(), target.display());
        linked.push(name.clone());
    }
    Ok(linked)
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
