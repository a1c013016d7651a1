//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `wrote` for the plain `Wrote <filename>` line printed per rendered page
//!
//! # Example
//!
//! ```ignore
//! log!("error"; "{:#}", err);
//! wrote(Path::new("index.html"));
//! ```

use colored::{ColoredString, Colorize};
use std::{
    io::{Write, stderr, stdout},
    path::Path,
};

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// `error` lines go to stderr, everything else to stdout.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let line = format_line(module, &module_lower, message);

    if module_lower == "error" {
        let mut stderr = stderr().lock();
        writeln!(stderr, "{line}").ok();
        stderr.flush().ok();
    } else {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();
    }
}

/// Print the confirmation line for a written page.
///
/// Only the file name is shown, the directory is always the fragment root.
pub fn wrote(path: &Path) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{}", wrote_line(path)).ok();
    stdout.flush().ok();
}

#[inline]
fn wrote_line(path: &Path) -> String {
    let name = path.file_name().unwrap_or(path.as_os_str());
    format!("Wrote {}", name.to_string_lossy())
}

#[inline]
fn format_line(module: &str, module_lower: &str, message: &str) -> String {
    format!("{} {message}", colorize_prefix(module, module_lower))
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

// ============================================================================
// Tests
// ============================================================================
