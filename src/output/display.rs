//! Display functions for command results

use crate::core::report::Report;
use colored::Colorize;

/// Serialize a report as 2-space-indented JSON
///
/// # Errors
/// Returns a `serde_json` error; cannot occur for a report's plain data
/// but is propagated rather than swallowed.
pub fn report_to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Print a double-rule section header
pub fn print_section(title: &str) {
    println!("{}", "═".repeat(70).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());
}

/// Print the banner for one example puzzle run
pub fn print_example_header(index: usize, name: &str, puzzle: &str, context: &str, level: &str) {
    println!();
    print_section(&format!("Example {index}: {name}"));
    println!("Puzzle: {}", puzzle.bright_yellow());
    println!("Context: {context}");
    println!("Requested hint level: {level}");
    println!();
}
