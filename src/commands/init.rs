//! Initialize sitebake in a project

use std::fs;
use std::path::Path;

use sitebake::output::OutputMode;
use sitebake::paths;

/// Write a starter sitebake.toml in the current directory
pub fn init(force: bool, _mode: OutputMode) -> anyhow::Result<()> {
    let config_path = Path::new(paths::CONFIG_FILE);

    if config_path.exists() && !force {
        println!("Already initialized ({} exists).", paths::CONFIG_FILE);
        println!("Use --force to overwrite.");
        return Ok(());
    }

    let template = r#"# sitebake build configuration
#
# Pages may only reference local stylesheets and scripts listed here
# (matched by filename). Stylesheets are concatenated into css/style.css
# in list order; scripts are minified one by one.

[assets]
stylesheets = ["css/normalize.css", "css/webflow.css"]
scripts = ["js/webflow.js"]

[output]
dir = "dist"

[media]
dirs = ["fonts", "images", "videos"]
"#;
    fs::write(config_path, template)?;
    println!("Created {}", paths::CONFIG_FILE);
    println!("\nNext steps:");
    println!("  edit {} to match your asset lists", paths::CONFIG_FILE);
    println!("  sitebake        # run the build");

    Ok(())
}
