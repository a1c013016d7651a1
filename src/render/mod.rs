//! Fragment rendering.
//!
//! # Architecture
//!
//! ```text
//! render_dir()
//!     │
//!     ├── fragment::scan()  ──► sorted `*.part.html` entries of the root
//!     │
//!     └── for each fragment (stops at the first error)
//!             │
//!             ├── TemplateLoader::render()  ──► empty context, parents loaded lazily
//!             ├── minify (optional)
//!             └── fs::write()               ──► `<stem>.html`, then `on_written`
//! ```
//!
//! Pages written before a failure stay on disk; later fragments are skipped.

pub mod fragment;
pub mod loader;

use crate::minify::minify_html;
use fragment::{Fragment, page_name};
use loader::TemplateLoader;
use std::{fs, io, path::PathBuf};
use thiserror::Error;

/// Rendering errors. Every one of them aborts the run.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to list directory `{path}`")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template error in `{name}`")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("`{0}` is not a fragment")]
    NotFragment(PathBuf),

    #[error("failed to write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything the renderer needs, passed explicitly.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory scanned for fragments; also the template search root.
    pub root: PathBuf,
    pub fragment_suffix: String,
    pub page_suffix: String,
    pub minify: bool,
}

/// A page produced from one fragment.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub path: PathBuf,
    pub content: String,
}

/// Render every fragment in `options.root` and write the resulting pages.
///
/// `on_written` is called after each page hits the disk.
pub fn render_dir(
    options: &RenderOptions,
    mut on_written: impl FnMut(&RenderedPage),
) -> Result<(), RenderError> {
    let loader = TemplateLoader::new(&options.root);
    let fragments = fragment::scan(&options.root, &options.fragment_suffix)?;

    for fragment in &fragments {
        let page = render_fragment(&loader, fragment, options)?;
        write_page(&page, options.minify)?;
        on_written(&page);
    }

    Ok(())
}

/// Render a single fragment against an empty context.
pub fn render_fragment(
    loader: &TemplateLoader,
    fragment: &Fragment,
    options: &RenderOptions,
) -> Result<RenderedPage, RenderError> {
    let name = page_name(&fragment.name, &options.fragment_suffix, &options.page_suffix)
        .ok_or_else(|| RenderError::NotFragment(fragment.path.clone()))?;
    let path = fragment.path.with_file_name(name);

    let content = loader.render(&fragment.name)?;

    Ok(RenderedPage { path, content })
}

/// Write a page, truncating any previous content.
fn write_page(page: &RenderedPage, minify: bool) -> Result<(), RenderError> {
    let result = if minify {
        fs::write(&page.path, minify_html(page.content.as_bytes()))
    } else {
        fs::write(&page.path, &page.content)
    };

    result.map_err(|source| RenderError::Write {
        path: page.path.clone(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================
