//! Puzzle category detectors
//!
//! Each detector is an independent pure predicate over the raw text. All
//! detectors always run; categories are not mutually exclusive. The
//! registry order is fixed because it determines tag order everywhere
//! downstream (solution ordering and the next-puzzle lookup).

use crate::core::report::PuzzleType;
use crate::core::text::{letters_only, numeric_tokens, parse_numbers, vowel_ratio};
use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// A detector flags whether text shows one category's surface signals
pub type DetectorFn = fn(&str) -> bool;

/// Fixed-order detector registry
pub const DETECTORS: &[(PuzzleType, DetectorFn)] = &[
    (PuzzleType::CaesarCipher, detect_caesar),
    (PuzzleType::SubstitutionCipher, detect_substitution),
    (PuzzleType::AtbashCipher, detect_atbash),
    (PuzzleType::Base64, detect_base64),
    (PuzzleType::MorseCode, detect_morse),
    (PuzzleType::WordRiddle, detect_word_riddle),
    (PuzzleType::MathPuzzle, detect_math),
    (PuzzleType::LogicPuzzle, detect_logic),
    (PuzzleType::Anagram, detect_anagram),
    (PuzzleType::Pattern, detect_pattern),
    (PuzzleType::Wordplay, detect_wordplay),
];

/// Run every detector and collect matching tags in registry order
///
/// Never returns an empty set: when nothing fires, the sole tag is
/// [`PuzzleType::Riddle`].
#[must_use]
pub fn classify(text: &str) -> Vec<PuzzleType> {
    let mut types: Vec<PuzzleType> = DETECTORS
        .iter()
        .filter(|(_, detector)| detector(text))
        .map(|(tag, _)| *tag)
        .collect();

    if types.is_empty() {
        types.push(PuzzleType::Riddle);
    }
    types
}

/// Encrypted text tends toward a skewed vowel balance
fn detect_caesar(text: &str) -> bool {
    let letters = letters_only(text);
    if letters.len() < 10 {
        return false;
    }
    let ratio = vowel_ratio(&letters);
    ratio < 0.25 || ratio > 0.6
}

/// Substitution ciphers keep word structure (spaces) but scramble letters
fn detect_substitution(text: &str) -> bool {
    let letters = letters_only(text);
    if letters.len() < 15 {
        return false;
    }
    let distinct: FxHashSet<char> = letters.to_lowercase().chars().collect();
    text.contains(' ') && distinct.len() > 10
}

/// Deliberately permissive; overlaps with Caesar and substitution
fn detect_atbash(text: &str) -> bool {
    letters_only(text).len() >= 10
}

fn base64_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9+/]+=*$").unwrap())
}

fn detect_base64(text: &str) -> bool {
    let stripped = text.trim();
    base64_re().is_match(stripped) && stripped.len() % 4 == 0
}

fn detect_morse(text: &str) -> bool {
    let stripped = text.trim();
    !stripped.is_empty()
        && stripped.chars().all(|c| matches!(c, '.' | '-' | ' ' | '/'))
        && (text.contains('.') || text.contains('-'))
}

const RIDDLE_PHRASES: &[&str] = &[
    "what am i",
    "who am i",
    "i am",
    "i have",
    "find me",
    "what is",
    "riddle",
    "guess",
];

fn detect_word_riddle(text: &str) -> bool {
    let lower = text.to_lowercase();
    RIDDLE_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

const MATH_MARKERS: &[&str] = &[
    "+",
    "-",
    "=",
    "*",
    "/",
    "sum",
    "total",
    "calculate",
    "add",
    "multiply",
];

fn detect_math(text: &str) -> bool {
    if numeric_tokens(text).is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    MATH_MARKERS.iter().any(|marker| lower.contains(marker))
}

const LOGIC_KEYWORDS: &[&str] = &[
    "if", "then", "always", "never", "all", "none", "only", "each", "every", "must", "cannot",
    "either", "or", "and",
];

/// At least 3 logic keywords (substring matches) mark a logic puzzle
fn detect_logic(text: &str) -> bool {
    let lower = text.to_lowercase();
    LOGIC_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count()
        >= 3
}

const ANAGRAM_KEYWORDS: &[&str] = &["rearrange", "scrambled", "mixed up", "anagram", "letters"];

fn detect_anagram(text: &str) -> bool {
    let lower = text.to_lowercase();
    ANAGRAM_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

const PATTERN_KEYWORDS: &[&str] = &["sequence", "pattern", "next", "continues", "series"];

/// Fires on an arithmetic progression (first 5 numeric tokens) or on
/// sequence vocabulary
fn detect_pattern(text: &str) -> bool {
    let tokens = numeric_tokens(text);
    if tokens.len() >= 3 {
        let take = tokens.len().min(5);
        if let Some(nums) = parse_numbers(&tokens[..take]) {
            let diffs: Vec<i64> = nums.windows(2).map(|w| w[1] - w[0]).collect();
            if diffs.iter().all(|&d| d == diffs[0]) {
                return true;
            }
        }
    }

    let lower = text.to_lowercase();
    PATTERN_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

const WORDPLAY_KEYWORDS: &[&str] = &[
    "pun",
    "play on words",
    "sounds like",
    "homophone",
    "double meaning",
    "rhyme",
];

fn detect_wordplay(text: &str) -> bool {
    let lower = text.to_lowercase();
    WORDPLAY_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caesar_needs_skewed_vowel_ratio() {
        // "KHOOR ZRUOG" has a 0.4 vowel ratio: normal, so no Caesar flag
        assert!(!detect_caesar("KHOOR ZRUOG"));
        // Heavily consonant text flags
        assert!(detect_caesar("BCDFGHJKLMNPQRST"));
        // All-vowel text flags too
        assert!(detect_caesar("AEIOUAEIOUAEIOU"));
    }

    #[test]
    fn caesar_ignores_short_text() {
        assert!(!detect_caesar("BCDFG"));
    }

    #[test]
    fn substitution_needs_length_spaces_and_variety() {
        assert!(detect_substitution("XQZWVB MKLPTR JHGFDS"));
        assert!(!detect_substitution("XQZWVBMKLPTRJHGFDS")); // no space
        assert!(!detect_substitution("AAA BBB CCC DDD EEE")); // few distinct letters
        assert!(!detect_substitution("AB CD EF")); // too short
    }

    #[test]
    fn atbash_is_permissive() {
        assert!(detect_atbash("SVOOL DLIOW"));
        assert!(!detect_atbash("SVOOL"));
    }

    #[test]
    fn base64_shape_and_length() {
        assert!(detect_base64("VGhlIGtleSBpcyB1bmRlciB0aGUgbWF0"));
        assert!(detect_base64("  aGk=  ")); // trimmed before checking
        assert!(!detect_base64("aGk")); // length not a multiple of 4
        assert!(!detect_base64("not base64!"));
        assert!(!detect_base64(""));
    }

    #[test]
    fn morse_character_set() {
        assert!(detect_morse(".... . .-.. .-.. --- / .-- --- .-. .-.. -.."));
        assert!(detect_morse("..."));
        assert!(!detect_morse("... abc"));
        assert!(!detect_morse("   ")); // no dot or dash
        assert!(!detect_morse(""));
    }

    #[test]
    fn word_riddle_phrases() {
        assert!(detect_word_riddle("I have keys but no locks. What am I?"));
        assert!(detect_word_riddle("A RIDDLE for you"));
        assert!(!detect_word_riddle("XYZZY PLUGH"));
    }

    #[test]
    fn math_needs_digits_and_operator() {
        assert!(detect_math("15 + 27 = ?"));
        assert!(detect_math("calculate 5 and 3"));
        assert!(!detect_math("add things together")); // no digits
        assert!(!detect_math("42")); // no operator words
    }

    #[test]
    fn logic_requires_three_keywords() {
        assert!(detect_logic("If all doors are locked, then you must find every key"));
        assert!(!detect_logic("if only"));
    }

    #[test]
    fn anagram_keywords() {
        assert!(detect_anagram("Rearrange the letters of LISTEN"));
        assert!(detect_anagram("these words are scrambled"));
        assert!(!detect_anagram("plain sentence"));
    }

    #[test]
    fn pattern_arithmetic_progression() {
        assert!(detect_pattern("2, 4, 6, 8"));
        assert!(!detect_pattern("7, 9, 14")); // no progression, no keywords
    }

    #[test]
    fn pattern_keywords() {
        assert!(detect_pattern("what continues here?"));
        assert!(detect_pattern("find the next number"));
    }

    #[test]
    fn wordplay_keywords() {
        assert!(detect_wordplay("It sounds like a homophone"));
        assert!(!detect_wordplay("nothing special"));
    }

    #[test]
    fn classify_falls_back_to_riddle() {
        let types = classify("xyzzy");
        assert_eq!(types, vec![PuzzleType::Riddle]);
    }

    #[test]
    fn classify_never_empty() {
        for text in ["", "hello", "12345", "...---..."] {
            assert!(!classify(text).is_empty());
        }
    }

    #[test]
    fn classify_preserves_registry_order() {
        // Long consonant text with spaces trips Caesar, substitution, Atbash
        let types = classify("XQZWVB MKLPTR JHGFDS NBVCXZ");
        assert_eq!(
            types,
            vec![
                PuzzleType::CaesarCipher,
                PuzzleType::SubstitutionCipher,
                PuzzleType::AtbashCipher,
            ]
        );
    }

    #[test]
    fn detectors_are_independent() {
        // Satisfies the Morse character set and contains no digits:
        // morse_code must be tagged, math_puzzle must not
        let types = classify(".- -... / -.-.");
        assert!(types.contains(&PuzzleType::MorseCode));
        assert!(!types.contains(&PuzzleType::MathPuzzle));
    }
}
