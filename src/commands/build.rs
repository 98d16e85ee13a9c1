//! Build command - the full pipeline
//!
//! Stage order: clean the output directory, transform every page, then run
//! the three independent output stages (media links, stylesheet bundle,
//! script bundle) as a parallel group. Any error aborts the run; files
//! already written stay where they are.

use std::fs;
use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;

use sitebake::bundle;
use sitebake::config::Config;
use sitebake::discover;
use sitebake::manifest::AssetManifest;
use sitebake::media;
use sitebake::output::{BuildReport, OutputMode};
use sitebake::page;
use sitebake::paths;

/// Run the full build in the current directory
pub fn build(mode: OutputMode) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let config = Config::load(&root)?;
    let manifest = AssetManifest::from_config(&config);
    let out_dir = config.output_dir(&root);

    // The output directory must be fully gone before anything is written
    if out_dir.exists() {
        fs::remove_dir_all(&out_dir)
            .with_context(|| format!("cleaning {}", out_dir.display()))?;
    }

    // Pages are independent of each other; fail-fast on the first error
    let pages = discover::find_pages(&root, &config.output.dir)?;
    log::info!("transforming {} page(s)", pages.len());
    pages
        .par_iter()
        .try_for_each(|rel| build_page(&root, &out_dir, rel, &manifest))?;

    // Media links and the two bundles are mutually independent
    let (media_result, bundle_results) = rayon::join(
        || media::link_media(&root, &out_dir, &config.media.dirs),
        || {
            rayon::join(
                || bundle::build_stylesheets(&root, &out_dir, &manifest),
                || bundle::build_scripts(&root, &out_dir, &manifest),
            )
        },
    );
    let linked = media_result.context("linking media directories")?;
    let (css_result, js_result) = bundle_results;
    let stylesheet_bundle = css_result.context("building the stylesheet bundle")?;
    let scripts = js_result.context("minifying scripts")?;

    let report = BuildReport {
        pages: pages.iter().map(|p| p.display().to_string()).collect(),
        stylesheet_bundle,
        stylesheet_inputs: manifest.stylesheets.len(),
        scripts,
        media: linked,
        output_dir: config.output.dir.clone(),
    };
    report.render(mode);

    Ok(())
}

/// Validate, transform, and write one page
fn build_page(
    root: &Path,
    out_dir: &Path,
    rel: &Path,
    manifest: &AssetManifest,
) -> anyhow::Result<()> {
    let source = fs::read_to_string(root.join(rel))
        .with_context(|| format!("reading {}", rel.display()))?;

    let refs = page::collect_refs(&source).with_context(|| format!("parsing {}", rel.display()))?;
    page::validate(rel, &refs, manifest)?;

    let prefix = paths::relative_prefix(rel);
    let transformed = page::transform(&source, &prefix)
        .with_context(|| format!("transforming {}", rel.display()))?;

    let dest = out_dir.join(rel);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, transformed).with_context(|| format!("writing {}", dest.display()))?;
    log::debug!("built {}", rel.display());

    Ok(())
}
