//! Check command - validate asset references without building
//!
//! Unlike the build (which aborts on the first bad page), the check walks
//! every page and reports every violation at once.

use std::fs;

use anyhow::Context;

use sitebake::config::Config;
use sitebake::discover;
use sitebake::manifest::AssetManifest;
use sitebake::output::{CheckReport, OutputMode, Violation};
use sitebake::page;

/// Validate every page's asset references against the manifest
pub fn check(mode: OutputMode) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let config = Config::load(&root)?;
    let manifest = AssetManifest::from_config(&config);

    let pages = discover::find_pages(&root, &config.output.dir)?;

    let mut violations = Vec::new();
    for rel in &pages {
        let source = fs::read_to_string(root.join(rel))
            .with_context(|| format!("reading {}", rel.display()))?;
        let refs =
            page::collect_refs(&source).with_context(|| format!("parsing {}", rel.display()))?;

        for err in page::violations(rel, &refs, &manifest) {
            violations.push(Violation {
                page: rel.display().to_string(),
                kind: err.kind.to_string(),
                offending: err.offending,
            });
        }
    }

    let passed = violations.is_empty();
    let report = CheckReport {
        passed,
        pages_checked: pages.len(),
        violations,
    };
    report.render(mode);

    if !passed {
        anyhow::bail!("unapproved asset references");
    }
    Ok(())
}
