//! Page validator - checks asset references against the manifest
//!
//! Pure logic, no I/O: remote references are ignored, local references are
//! reduced to unique basenames and must form a subset of the manifest's
//! approved names for their kind. Stylesheets are checked before scripts
//! and the first failing kind aborts.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::{AssetKind, AssetManifest};
use crate::reference;

use super::refs::PageRefs;

/// A page references local assets that are not on the approved list
#[derive(Debug, Error)]
#[error(
    "page {} references {kind}s outside the manifest: {}",
    .page.display(),
    .offending.join(", ")
)]
pub struct ValidationError {
    /// The asset kind that failed
    pub kind: AssetKind,
    /// The page that referenced the assets
    pub page: PathBuf,
    /// The unapproved basenames, sorted
    pub offending: Vec<String>,
}

/// Validate a page's references against the manifest.
///
/// Checks stylesheets first, then scripts; the script check never runs if
/// the stylesheet check already failed.
pub fn validate(
    page: &Path,
    refs: &PageRefs,
    manifest: &AssetManifest,
) -> Result<(), ValidationError> {
    check_kind(page, AssetKind::Stylesheet, &refs.stylesheets, manifest)?;
    check_kind(page, AssetKind::Script, &refs.scripts, manifest)?;
    Ok(())
}

/// Collect every violation of a page, without short-circuiting.
///
/// Used by the `check` command to report all problems at once; the build
/// itself stays fail-fast via [`validate`].
#[must_use]
pub fn violations(page: &Path, refs: &PageRefs, manifest: &AssetManifest) -> Vec<ValidationError> {
    let mut found = Vec::new();
    if let Err(err) = check_kind(page, AssetKind::Stylesheet, &refs.stylesheets, manifest) {
        found.push(err);
    }
    if let Err(err) = check_kind(page, AssetKind::Script, &refs.scripts, manifest) {
        found.push(err);
    }
    found
}

fn check_kind(
    page: &Path,
    kind: AssetKind,
    raw: &[String],
    manifest: &AssetManifest,
) -> Result<(), ValidationError> {
    // Remote references are out of scope; locals collapse to unique basenames
    let local: BTreeSet<String> = raw
        .iter()
        .filter_map(|r| reference::classify(r).basename().map(String::from))
        .collect();

    let offending: Vec<String> =
        local.into_iter().filter(|name| !manifest.is_approved(kind, name)).collect();

    if offending.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            kind,
            page: page.to_path_buf(),
            offending,
        })
    }
}
