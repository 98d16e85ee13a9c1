//! Clean command - remove the output directory

use std::fs;

use anyhow::Context;

use sitebake::config::Config;
use sitebake::output::{OperationResult, OutputMode};

/// Remove the output directory if it exists
pub fn clean(mode: OutputMode) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let config = Config::load(&root)?;
    let out_dir = config.output_dir(&root);

    let message = if out_dir.exists() {
        fs::remove_dir_all(&out_dir)
            .with_context(|| format!("removing {}", out_dir.display()))?;
        format!("Removed {}/", config.output.dir)
    } else {
        "Nothing to clean.".to_string()
    };

    OperationResult {
        success: true,
        message,
    }
    .render(mode);

    Ok(())
}
