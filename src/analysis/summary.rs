//! Puzzle analysis summary

use crate::core::report::PuzzleType;

/// Compose the one-paragraph analysis
///
/// Deterministic, order-preserving concatenation with single-space
/// separators: detected types, a cipher remark, a riddle remark, the
/// supplied context verbatim, and the input's character length.
#[must_use]
pub fn analyze(puzzle: &str, types: &[PuzzleType], context: &str) -> String {
    let names: Vec<&str> = types.iter().map(|t| t.name()).collect();
    let mut parts = vec![format!("The puzzle appears to be: {}.", names.join(", "))];

    if types.iter().any(|t| t.is_cipher()) {
        parts.push("Encrypted text detected - requires decoding.".to_string());
    }

    if types.contains(&PuzzleType::Riddle) || types.contains(&PuzzleType::WordRiddle) {
        parts.push("This is a word-based puzzle requiring lateral thinking.".to_string());
    }

    if !context.is_empty() {
        parts.push(format!("Given context: {context}"));
    }

    parts.push(format!(
        "Puzzle length: {} characters.",
        puzzle.chars().count()
    ));

    parts.join(" ")
}
