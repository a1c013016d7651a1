//! Command-line interface definitions.
//!
//! Every argument is optional: running `partpage` with no arguments renders
//! the fragments in the current directory.

use clap::Parser;
use std::path::PathBuf;

/// Render `.part.html` template fragments into static html pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the fragments (also the template search root)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Config file name, relative to the root (default: partpage.toml)
    #[arg(short = 'C', long, default_value = "partpage.toml")]
    pub config: PathBuf,

    /// Suffix marking a template fragment
    #[arg(long)]
    pub fragment_suffix: Option<String>,

    /// Suffix that replaces the fragment suffix in written pages
    #[arg(long)]
    pub page_suffix: Option<String>,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}
