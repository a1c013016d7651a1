//! `[build]` section configuration.
//!
//! Controls which files count as fragments and how rendered pages are named.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[build]` section in partpage.toml - fragment rendering configuration.
///
/// # Example
/// ```toml
/// [build]
/// fragment_suffix = ".part.html"   # Files rendered as templates
/// page_suffix = ".html"            # Suffix of the written pages
/// minify = false                   # Minify rendered HTML
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Filename suffix marking a template fragment.
    #[serde(default = "defaults::build::fragment_suffix")]
    #[educe(Default = defaults::build::fragment_suffix())]
    pub fragment_suffix: String,

    /// Suffix that replaces `fragment_suffix` in the output filename.
    #[serde(default = "defaults::build::page_suffix")]
    #[educe(Default = defaults::build::page_suffix())]
    pub page_suffix: String,

    /// Minify rendered pages before writing.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub minify: bool,
}
