//! Configuration management for `partpage.toml`.
//!
//! The config file is optional. When it is missing every field takes its
//! default, which matches rendering `*.part.html` into `*.html`.
//!
//! # Example
//!
//! ```toml
//! [build]
//! fragment_suffix = ".part.html"
//! page_suffix = ".html"
//! minify = true
//! ```

mod build;
pub mod defaults;
mod error;

use build::BuildConfig;
use error::ConfigError;

use crate::cli::Cli;
use crate::render::RenderOptions;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing partpage.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Fragment directory and template search root (set from CLI)
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Rendering settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl PageConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: PageConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let config: PageConfig = toml::from_str(&content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        Ok(config)
    }

    /// Load configuration for a CLI invocation.
    ///
    /// Reads `<root>/<config>` when it exists, falls back to defaults
    /// otherwise, then applies CLI overrides and validates the result.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli.root.join(&cli.config);

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        self.root = Self::normalize_path(&cli.root);

        Self::update_option(&mut self.build.fragment_suffix, cli.fragment_suffix.as_ref());
        Self::update_option(&mut self.build.page_suffix, cli.page_suffix.as_ref());
        Self::update_option(&mut self.build.minify, cli.minify.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate suffixes and the root directory
    pub fn validate(&self) -> Result<()> {
        let fragment = &self.build.fragment_suffix;
        let page = &self.build.page_suffix;

        if fragment.is_empty() {
            bail!(ConfigError::Validation(
                "[build.fragment_suffix] must not be empty".into()
            ));
        }
        if page.is_empty() {
            bail!(ConfigError::Validation(
                "[build.page_suffix] must not be empty".into()
            ));
        }
        if fragment == page {
            bail!(ConfigError::Validation(
                "[build.fragment_suffix] and [build.page_suffix] must differ".into()
            ));
        }
        // A page named like a fragment would be picked up again on the next run
        if page.ends_with(fragment.as_str()) {
            bail!(ConfigError::Validation(
                "[build.page_suffix] must not end with [build.fragment_suffix]".into()
            ));
        }
        for (field, suffix) in [("fragment_suffix", fragment), ("page_suffix", page)] {
            if suffix.contains('/') || suffix.contains(MAIN_SEPARATOR) {
                bail!(ConfigError::Validation(format!(
                    "[build.{field}] must not contain a path separator"
                )));
            }
        }

        if !self.root.exists() {
            bail!(ConfigError::Validation(format!(
                "directory `{}` not found",
                self.root.display()
            )));
        }
        if !self.root.is_dir() {
            bail!(ConfigError::Validation(format!(
                "`{}` is not a directory",
                self.root.display()
            )));
        }

        Ok(())
    }

    /// Explicit options handed to the renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            root: self.root.clone(),
            fragment_suffix: self.build.fragment_suffix.clone(),
            page_suffix: self.build.page_suffix.clone(),
            minify: self.build.minify,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
