//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    pub fn fragment_suffix() -> String {
        ".part.html".into()
    }

    pub fn page_suffix() -> String {
        ".html".into()
    }
}
