//! Shared text heuristics
//!
//! Letter filtering, vowel ratios, and token extraction used by both the
//! detectors and the solvers.

use regex::Regex;
use std::sync::OnceLock;

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Za-z]+\b").unwrap())
}

/// Strip everything but ASCII letters
#[must_use]
pub fn letters_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Fraction of characters that are vowels; 0.0 for empty input
#[must_use]
pub fn vowel_ratio(letters: &str) -> f64 {
    if letters.is_empty() {
        return 0.0;
    }
    let vowels = letters
        .chars()
        .filter(|c| "aeiou".contains(c.to_ascii_lowercase()))
        .count();
    vowels as f64 / letters.chars().count() as f64
}

/// Whether decoded text plausibly reads as English
///
/// Requires at least 5 letters and a vowel ratio between 0.3 and 0.5.
#[must_use]
pub fn looks_like_english(text: &str) -> bool {
    let letters = letters_only(text);
    if letters.len() < 5 {
        return false;
    }
    let ratio = vowel_ratio(&letters);
    (0.3..=0.5).contains(&ratio)
}

/// All decimal digit runs in the text, in order of appearance
#[must_use]
pub fn numeric_tokens(text: &str) -> Vec<&str> {
    number_re().find_iter(text).map(|m| m.as_str()).collect()
}

/// Parse numeric tokens into integers
///
/// Returns `None` if any token overflows `i64`; callers skip candidate
/// generation in that case.
#[must_use]
pub fn parse_numbers(tokens: &[&str]) -> Option<Vec<i64>> {
    tokens.iter().map(|t| t.parse().ok()).collect()
}

/// Alphabetic word tokens
///
/// Word boundaries exclude runs adjacent to digits, matching the
/// `\b[A-Za-z]+\b` extraction.
#[must_use]
pub fn alphabetic_words(text: &str) -> Vec<&str> {
    word_re().find_iter(text).map(|m| m.as_str()).collect()
}
