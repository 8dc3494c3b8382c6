use colored::Colorize;
use serde::Serialize;

use crate::core::errors::Result;

// Status lines go to stderr so stdout carries only results.

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    eprintln!("\n{}", msg.bold());
}

/// Print a dimmed detail line (verbose mode).
pub fn detail(msg: &str) {
    eprintln!("    {}", msg.dimmed());
}

/// Result of one operation, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct OperationOutput<'a> {
    pub operation: &'a str,
    pub subject: &'a str,
    pub store: String,
    pub result: serde_json::Value,
}

/// Print `value` as pretty JSON on stdout.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
