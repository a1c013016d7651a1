//! partpage - render `.part.html` template fragments into static html pages.

mod cli;
mod config;
mod logger;
mod minify;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::PageConfig;
use render::render_dir;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration and render every fragment under the root.
///
/// Stops at the first failing fragment; pages already written are kept.
fn run(cli: &Cli) -> Result<()> {
    let config = PageConfig::load(cli)?;
    let options = config.render_options();

    render_dir(&options, |page| logger::wrote(&page.path))
        .with_context(|| format!("Failed to render pages in {}", options.root.display()))?;

    Ok(())
}
