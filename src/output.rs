//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a full build
#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Pages transformed, relative to the project root
    pub pages: Vec<String>,
    /// The stylesheet bundle path, relative to the output root
    pub stylesheet_bundle: String,
    /// How many source stylesheets went into the bundle
    pub stylesheet_inputs: usize,
    /// Minified scripts, relative to the output root
    pub scripts: Vec<String>,
    /// Media directories linked into the output tree
    pub media: Vec<String>,
    /// The output directory
    pub output_dir: String,
}

/// Result of a validation-only check
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether every page passed validation
    pub passed: bool,
    /// Number of pages checked
    pub pages_checked: usize,
    /// All violations found, across all pages
    pub violations: Vec<Violation>,
}

/// One validation violation
#[derive(Debug, Serialize)]
pub struct Violation {
    /// The page with the bad reference
    pub page: String,
    /// The asset kind ("stylesheet" or "script")
    pub kind: String,
    /// The unapproved basenames
    pub offending: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl BuildReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Built {} page(s) into {}/", self.pages.len(), self.output_dir);
        for page in &self.pages {
            println!("  {page}");
        }
        println!();
        println!(
            "  {} ({} stylesheet(s) concatenated)",
            self.stylesheet_bundle, self.stylesheet_inputs
        );
        for script in &self.scripts {
            println!("  {script}");
        }
        if !self.media.is_empty() {
            println!("  linked: {}", self.media.join(", "));
        }
        println!("\nBuild complete.");
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl CheckReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.pages_checked == 0 {
            println!("No pages found.");
            return;
        }

        println!("Checked {} page(s)...\n", self.pages_checked);

        if self.violations.is_empty() {
            println!("All asset references are approved.");
            return;
        }

        println!("Violations:");
        for v in &self.violations {
            println!("  [{}] {}", v.kind.to_uppercase(), v.page);
            println!("          {}\n", v.offending.join(", "));
        }
        println!("FAILED: {} violation(s)", self.violations.len());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
