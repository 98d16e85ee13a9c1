//! Asset bundle builders
//!
//! Stylesheets are concatenated in manifest order into one buffer and
//! minified once; scripts are minified one file at a time with their
//! filenames preserved. Concatenation appends a single newline after every
//! file's content, including the last, so that files which end without a
//! trailing newline cannot merge with their successor.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use css_minify::optimizations::{Level, Minifier};
use minify_js::{Session, TopLevelMode};
use thiserror::Error;

use crate::manifest::AssetManifest;
use crate::paths;
use crate::reference;

/// Errors that can occur while building bundles
#[derive(Debug, Error)]
pub enum BundleError {
    /// A manifest source file is missing or unreadable
    #[error("failed to read {path}: {source}")]
    Read {
        /// The source path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An output artifact could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// The destination path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The CSS minifier rejected the concatenated stylesheet
    #[error("stylesheet bundle failed to minify: {0}")]
    CssMinify(String),

    /// The JS minifier rejected a script
    #[error("script {path} failed to minify: {message}")]
    JsMinify {
        /// The script that failed
        path: PathBuf,
        /// The minifier's diagnostic
        message: String,
    },
}

/// Concatenate sources in order, appending one newline after each
/// (including the last).
#[must_use]
pub fn concat(sources: &[String]) -> String {
    let mut out = String::with_capacity(sources.iter().map(|s| s.len() + 1).sum());
    for source in sources {
        out.push_str(source);
        out.push('\n');
    }
    out
}

/// Build the stylesheet bundle: read the manifest's CSS files in order,
/// concatenate, minify once, write `css/style.css` under `out_dir`.
///
/// Returns the bundle path relative to the output root.
pub fn build_stylesheets(
    root: &Path,
    out_dir: &Path,
    manifest: &AssetManifest,
) -> Result<String, BundleError> {
    let mut sources = Vec::with_capacity(manifest.stylesheets.len());
    for rel in &manifest.stylesheets {
        let path = root.join(rel);
        let content = fs::read_to_string(&path).map_err(|e| BundleError::Read {
            path,
            source: e,
        })?;
        sources.push(content);
    }

    let joined = concat(&sources);
    let minified = Minifier::default()
        .minify(&joined, Level::Three)
        .map_err(|e| BundleError::CssMinify(format!("{e:?}")))?;

    let rel = format!("{}/{}", paths::CSS_DIR, paths::STYLE_BUNDLE);
    write_artifact(&out_dir.join(paths::CSS_DIR).join(paths::STYLE_BUNDLE), minified.as_bytes())?;
    log::debug!("wrote {rel} ({} input stylesheet(s))", manifest.stylesheets.len());
    Ok(rel)
}

/// Minify each manifest script independently and write it under `js/` with
/// its basename preserved.
///
/// Returns the script paths relative to the output root.
pub fn build_scripts(
    root: &Path,
    out_dir: &Path,
    manifest: &AssetManifest,
) -> Result<Vec<String>, BundleError> {
    let mut written = Vec::with_capacity(manifest.scripts.len());
    for rel in &manifest.scripts {
        let path = root.join(rel);
        let content = fs::read(&path).map_err(|e| BundleError::Read {
            path: path.clone(),
            source: e,
        })?;

        let minified = minify_script(&content).map_err(|message| BundleError::JsMinify {
            path: path.clone(),
            message,
        })?;

        let name = reference::basename(rel);
        write_artifact(&out_dir.join(paths::JS_DIR).join(name), &minified)?;
        let out_rel = format!("{}/{name}", paths::JS_DIR);
        log::debug!("wrote {out_rel}");
        written.push(out_rel);
    }
    Ok(written)
}

/// Minify one script; a syntax error aborts the file
fn minify_script(source: &[u8]) -> Result<Vec<u8>, String> {
    let session = Session::new();
    let mut out = Vec::new();
    minify_js::minify(&session, TopLevelMode::Global, source, &mut out)
        .map_err(|e| format!("{e:?}"))?;
    Ok(out)
}

fn write_artifact(dest: &Path, bytes: &[u8]) -> Result<(), BundleError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| BundleError::Write {
            path: dest.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(dest, bytes).map_err(|e| BundleError::Write {
        path: dest.to_path_buf(),
        source: e,
    })
}
