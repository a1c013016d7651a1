//! HTML minification for rendered pages.
//!
//! Applied only when `[build] minify = true` or `--minify` is given.

/// Minify HTML content using `minify_html` crate.
///
/// Opening `<html>`/`<head>` tags and closing tags are kept so the output
/// stays a complete document.
pub fn minify_html(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}
