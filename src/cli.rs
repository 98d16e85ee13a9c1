//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use sitebake::output::OutputMode;

/// sitebake - Build pipeline for exported static sites
#[derive(Parser, Debug, Clone, Copy)]
#[command(
    name = "sitebake",
    version,
    about = "Verify, bundle, and minify an exported static site",
    long_about = "Build pipeline for exported static sites.\n\n\
                  Pages are validated against an approved asset manifest,\n\
                  transformed (deferred scripts, bundled stylesheet link),\n\
                  minified, and written to the output directory alongside\n\
                  the asset bundles and symlinked media."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run; defaults to a full build
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// Run the full build (the default when no command is given)
    Build,

    /// Validate every page's asset references without writing output
    Check,

    /// Remove the output directory
    Clean,

    /// Write a starter sitebake.toml
    Init {
        /// Overwrite an existing sitebake.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Build) | None => commands::build(output_mode),
        Some(Command::Check) => commands::check(output_mode),
        Some(Command::Clean) => commands::clean(output_mode),
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("sitebake v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
