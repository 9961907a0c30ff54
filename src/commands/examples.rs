//! Canned example puzzles
//!
//! Runs the demo puzzle set through the solver and prints each report as
//! JSON, banner first. Useful as a smoke test and a feature tour.

use crate::core::report::HintLevel;
use crate::output::display::{print_example_header, report_to_json};
use crate::solver::EscapeSolver;

/// (name, puzzle, context, requested hint level)
const EXAMPLES: &[(&str, &str, &str, &str)] = &[
    (
        "Caesar Cipher",
        "KHOOR ZRUOG",
        "Found on a stone tablet near the entrance",
        "full",
    ),
    (
        "Morse Code",
        ".... . .-.. .-.. --- / .-- --- .-. .-.. -..",
        "Heard from a mysterious radio",
        "full",
    ),
    (
        "Base64",
        "VGhlIGtleSBpcyB1bmRlciB0aGUgbWF0",
        "Found in a computer terminal",
        "full",
    ),
    (
        "Number Pattern",
        "What comes next in the sequence: 2, 4, 6, 8, ?",
        "Written on a chalkboard",
        "nudge",
    ),
    (
        "Simple Riddle",
        "I have keys but no locks. I have space but no room. You can enter but can't go outside. \
         What am I?",
        "Mysterious voice asks this question",
        "hint",
    ),
    (
        "Math Puzzle",
        "If the code is 15 + 27 = ?, what is the combination?",
        "Lock combination puzzle",
        "full",
    ),
    (
        "4-Digit Combination Lock",
        "4-digit combination lock with rotating wheels (0-9 on each wheel)",
        "Physical prop - needs code to unlock. Theme: General escape room",
        "full",
    ),
];

/// Run every canned example and print its report
///
/// # Errors
/// Returns a message if a solve or serialization fails; the canned set is
/// expected to always succeed.
pub fn run_examples() -> Result<(), String> {
    let solver = EscapeSolver::new();

    for (i, (name, puzzle, context, level)) in EXAMPLES.iter().enumerate() {
        print_example_header(i + 1, name, puzzle, context, level);

        let report = solver
            .solve(puzzle, context, HintLevel::from_name(level))
            .map_err(|e| format!("example '{name}' failed: {e}"))?;
        let json = report_to_json(&report).map_err(|e| e.to_string())?;
        println!("{json}");
    }

    Ok(())
}
