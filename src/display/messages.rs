//! One-line status messages printed around the rendered response. Errors go
//! straight to stderr; the other lines are written by the caller.

use super::style::{ACCENT, DANGER, PRIMARY, Palette};

pub fn error_line(message: &str, palette: Palette) -> String {
    format!("{} {message}", palette.bold_paint("✗ Error:", DANGER))
}

pub fn success_line(message: &str, palette: Palette) -> String {
    format!("{} {message}", palette.bold_paint("✓", PRIMARY))
}

pub fn info_line(message: &str, palette: Palette) -> String {
    format!("{} {message}", palette.paint("ℹ", ACCENT))
}

pub fn print_error(message: &str, palette: Palette) {
    eprintln!("{}", error_line(message, palette));
}
