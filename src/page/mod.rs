//! Page processing - reference extraction, validation, transformation
//!
//! A page goes through three steps, in order: its asset references are
//! collected, validated against the manifest, and only then is the page
//! rewritten and minified. Validation is read-only; transformation never
//! runs for a page that failed validation.

use thiserror::Error;

pub mod refs;
pub mod transform;
pub mod validate;

pub use refs::{PageRefs, collect_refs};
pub use transform::{minify, rewrite, transform};
pub use validate::{ValidationError, validate, violations};

/// Errors that can occur while parsing or transforming a page
#[derive(Debug, Error)]
pub enum PageError {
    /// The HTML rewriter rejected the document
    #[error("html rewriting failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    /// The minifier produced output that is not valid UTF-8
    #[error("minified html is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
