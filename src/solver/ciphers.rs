//! Cipher and encoding solvers
//!
//! Each solver attempts a concrete decode and emits zero or one candidate
//! solution. Decode failures are recovered locally: a solver that cannot
//! commit to an answer contributes nothing.

use crate::core::ciphers::{atbash, base64_to_text, caesar_shift};
use crate::core::report::Solution;
use crate::core::text::{letters_only, looks_like_english};
use rustc_hash::FxHashMap;

/// Common English words used to score Caesar rotations
const COMMON_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one", "our",
    "out", "has", "have",
];

/// Try all 26 rotations and keep the strictly best-scoring one
///
/// Scoring counts common-word substrings in the lower-cased decode. Ties
/// keep the earlier shift. No rotation scoring above zero means no
/// candidate.
#[must_use]
pub fn solve_caesar(text: &str) -> Vec<Solution> {
    let mut solutions = Vec::new();
    if letters_only(text).len() < 5 {
        return solutions;
    }

    let mut best: Option<(u8, usize, String)> = None;
    for shift in 0..26 {
        let decoded = caesar_shift(text, shift);
        let lower = decoded.to_lowercase();
        let score = COMMON_WORDS
            .iter()
            .filter(|word| lower.contains(*word))
            .count();

        if score > best.as_ref().map_or(0, |(_, s, _)| *s) {
            best = Some((shift, score, decoded));
        }
    }

    if let Some((shift, score, decoded)) = best {
        solutions.push(Solution::new(
            format!("Caesar Cipher (shift {shift})"),
            vec![
                "Identify text as potential Caesar cipher".to_string(),
                "Try all possible shifts (0-25)".to_string(),
                format!("Shift {shift} produces readable English text"),
            ],
            decoded,
            (score as f64 * 0.2).min(0.95),
        ));
    }

    solutions
}

/// Apply the Atbash mirror and keep it only if the result reads like
/// English (vowel ratio in [0.3, 0.5] over at least 5 letters)
#[must_use]
pub fn solve_atbash(text: &str) -> Vec<Solution> {
    let decoded = atbash(text);
    if !looks_like_english(&decoded) {
        return Vec::new();
    }

    vec![Solution::new(
        "Atbash Cipher",
        vec![
            "Recognize Atbash cipher pattern (A↔Z, B↔Y, etc.)".to_string(),
            "Apply reverse alphabet substitution".to_string(),
            "Decode to readable text".to_string(),
        ],
        decoded,
        0.8,
    )]
}

/// Decode the trimmed text as standard Base64 into UTF-8
///
/// Invalid alphabet, bad padding, or non-UTF-8 payloads are swallowed.
#[must_use]
pub fn solve_base64(text: &str) -> Vec<Solution> {
    let Some(decoded) = base64_to_text(text) else {
        return Vec::new();
    };

    vec![Solution::new(
        "Base64 Decoding",
        vec![
            "Identify base64 encoding pattern".to_string(),
            "Decode using base64 algorithm".to_string(),
            "Extract hidden message".to_string(),
        ],
        decoded,
        0.95,
    )]
}

/// Decode Morse: words split on '/', letter tokens on whitespace
///
/// Strict validation: one unmapped token discards the whole attempt.
#[must_use]
pub fn solve_morse(text: &str, table: &FxHashMap<&'static str, char>) -> Vec<Solution> {
    let decoded_words: Vec<String> = text
        .split('/')
        .map(|word| {
            word.split_whitespace()
                .map(|token| table.get(token).copied().unwrap_or('?'))
                .collect()
        })
        .collect();
    let decoded = decoded_words.join(" ");

    if decoded.contains('?') {
        return Vec::new();
    }

    vec![Solution::new(
        "Morse Code",
        vec![
            "Identify Morse code pattern (dots and dashes)".to_string(),
            "Separate letters by spaces, words by slashes".to_string(),
            "Translate using Morse code table".to_string(),
        ],
        decoded,
        0.9,
    )]
}
