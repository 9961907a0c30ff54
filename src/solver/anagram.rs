//! Anagram solver
//!
//! Does not actually unscramble anything: it restates the alphabetic
//! tokens with an instruction to rearrange them, at low confidence.

use crate::core::report::Solution;
use crate::core::text::alphabetic_words;

/// Restate the puzzle's word tokens as a rearrangement instruction
#[must_use]
pub fn solve_anagram(text: &str) -> Vec<Solution> {
    let words = alphabetic_words(text);
    if words.is_empty() {
        return Vec::new();
    }

    vec![Solution::new(
        "Anagram Puzzle",
        vec![
            "Identify scrambled letters or words".to_string(),
            "Rearrange letters to form valid words".to_string(),
            "Consider context for likely solutions".to_string(),
        ],
        format!("Rearrange the letters: {}", words.join(" ")),
        0.6,
    )]
}
