//! Fragment discovery and page naming.

use super::RenderError;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A template fragment found in the search root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// File name, also used as the template name.
    pub name: String,
    pub path: PathBuf,
}

/// Whether `name` is a fragment: it ends with `suffix` and has a non-empty stem.
#[inline]
pub fn is_fragment(name: &str, suffix: &str) -> bool {
    name.len() > suffix.len() && name.ends_with(suffix)
}

/// Output file name for a fragment: `index.part.html` → `index.html`.
///
/// Returns `None` if `name` is not a fragment.
pub fn page_name(name: &str, fragment_suffix: &str, page_suffix: &str) -> Option<String> {
    if !is_fragment(name, fragment_suffix) {
        return None;
    }
    let stem = &name[..name.len() - fragment_suffix.len()];
    Some(format!("{stem}{page_suffix}"))
}

/// List the fragments directly inside `root`, sorted by file name.
///
/// Subdirectories, non-UTF-8 names and non-matching files are skipped.
pub fn scan(root: &Path, suffix: &str) -> Result<Vec<Fragment>, RenderError> {
    let read_dir_err = |source| RenderError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut fragments = Vec::new();
    for entry in fs::read_dir(root).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_fragment(&name, suffix) || !entry.path().is_file() {
            continue;
        }
        fragments.push(Fragment {
            path: entry.path(),
            name,
        });
    }

    fragments.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PART: &str = ".part.html";

    #[test]
    fn test_is_fragment() {
        assert!(is_fragment("index.part.html", PART));
        assert!(is_fragment("a.part.html", PART));
        assert!(!is_fragment("index.html", PART));
        assert!(!is_fragment("base.html", PART));
        assert!(!is_fragment("index.part.html.bak", PART));
    }

    #[test]
    fn test_is_fragment_empty_stem() {
        assert!(!is_fragment(".part.html", PART));
    }

    #[test]
    fn test_page_name() {
        assert_eq!(
            page_name("index.part.html", PART, ".html").as_deref(),
            Some("index.html")
        );
        assert_eq!(
            page_name("screenshots.part.html", PART, ".html").as_deref(),
            Some("screenshots.html")
        );
    }

    #[test]
    fn test_page_name_keeps_inner_dots() {
        assert_eq!(
            page_name("v1.2.notes.part.html", PART, ".html").as_deref(),
            Some("v1.2.notes.html")
        );
    }

    #[test]
    fn test_page_name_custom_suffixes() {
        assert_eq!(
            page_name("index.frag", ".frag", ".htm").as_deref(),
            Some("index.htm")
        );
    }

    #[test]
    fn test_page_name_non_fragment() {
        assert_eq!(page_name("base.html", PART, ".html"), None);
        assert_eq!(page_name(".part.html", PART, ".html"), None);
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta.part.html", "base.html", "alpha.part.html", "notes.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("dir.part.html")).unwrap();

        let fragments = scan(dir.path(), PART).unwrap();
        let names: Vec<_> = fragments.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["alpha.part.html", "zeta.part.html"]);
        assert_eq!(fragments[0].path, dir.path().join("alpha.part.html"));
    }

    #[test]
    fn test_scan_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(scan(dir.path(), PART).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = scan(&dir.path().join("missing"), PART).unwrap_err();
        assert!(matches!(err, RenderError::ReadDir { .. }));
    }
}
