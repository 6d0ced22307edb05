//! Terminal output helpers for human-facing commands.
//!
//! Status lines go to stdout and errors to stderr. Colors are applied only
//! when the target stream supports them, so piped output stays plain.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let label = format!("{label:<12}");
    println!(
        "  {} {}",
        label.if_supports_color(Stream::Stdout, |l| l.dimmed()),
        value
    );
}

/// Print a success message with a green check mark.
pub fn success(message: &str) {
    println!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green()),
        message
    );
}

/// Print an error message to stderr with a red cross.
pub fn error(message: &str) {
    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |s| s.red()),
        message
    );
}

/// Print a bold section header preceded by a blank line.
pub fn section(title: &str) {
    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}
