//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;

pub use display::{print_example_header, print_section, report_to_json};
