//! Reference classifier - splits asset references into remote and local
//!
//! This module contains pure classification logic with no I/O dependencies.
//! A reference string taken from a page (`href` or `src`) is either a
//! well-formed absolute web URL, or a local path inside the project tree.
//! Local references are reduced to their basename: two local paths with the
//! same filename share one identity, both for validation and for
//! removal-matching during transformation.

use url::Url;

/// A classified asset reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// An absolute `http`/`https` URL, left untouched by the pipeline
    Remote(String),
    /// A local reference, reduced to its final path segment
    Local(String),
}

impl Reference {
    /// Whether this reference points outside the project tree
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// The local basename, if any
    #[must_use]
    pub fn basename(&self) -> Option<&str> {
        match self {
            Self::Local(name) => Some(name),
            Self::Remote(_) => None,
        }
    }
}

/// Classify a reference string as remote or local.
///
/// Remote means a well-formed absolute `http`/`https` URL with an authority.
/// Everything else is local, including scheme-only URIs like `data:` and
/// `mailto:`, and is reduced to its basename.
#[must_use]
pub fn classify(raw: &str) -> Reference {
    if is_web_url(raw) {
        Reference::Remote(raw.to_string())
    } else {
        Reference::Local(basename(raw).to_string())
    }
}

/// Check whether a string is a well-formed absolute web URL
#[must_use]
pub fn is_web_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// The final `/`-separated segment of a path string
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
