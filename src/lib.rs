//! sitebake - A CLI tool to verify, bundle, and minify exported static sites
//!
//! This library provides the core functionality for the build pipeline:
//! asset manifest handling, page validation and transformation, bundle
//! building, and media linking.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bundle;
pub mod config;
pub mod discover;
pub mod manifest;
pub mod media;
pub mod output;
pub mod page;
pub mod paths;
pub mod reference;
