//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Every helper writes to the given writer so the session can be driven in tests.

use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix)
pub fn error(w: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}: {}", "error".red().bold(), msg)
}

/// Print success status (green checkmark)
pub fn success(w: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{} {}", "✓".green(), msg)
}

/// Print section header (cyan bold)
pub fn header(w: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}", msg.to_string().cyan().bold())
}

/// Print plain output (no color)
pub fn info(w: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}", msg)
}

/// Print prompt without newline (cyan)
pub fn prompt(w: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    write!(w, "{} ", msg.to_string().cyan())?;
    w.flush()
}
