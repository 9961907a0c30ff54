//! Result types for a solve run
//!
//! A solve produces a [`Report`]: detected puzzle types, a prose analysis,
//! candidate solutions, alternative interpretations, graded hints, and a
//! next-puzzle prediction. All types are plain data; JSON field order
//! follows declaration order.

use serde::Serialize;
use std::fmt;

/// Puzzle categories recognized by the detectors
///
/// A single input may carry any number of tags; detectors are independent.
/// `Riddle` is the fallback assigned when nothing else fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleType {
    CaesarCipher,
    SubstitutionCipher,
    AtbashCipher,
    Base64,
    MorseCode,
    WordRiddle,
    MathPuzzle,
    LogicPuzzle,
    Anagram,
    Pattern,
    Wordplay,
    /// Fallback when no detector matches
    Riddle,
}

impl PuzzleType {
    /// The snake_case name used in JSON output and prose
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CaesarCipher => "caesar_cipher",
            Self::SubstitutionCipher => "substitution_cipher",
            Self::AtbashCipher => "atbash_cipher",
            Self::Base64 => "base64",
            Self::MorseCode => "morse_code",
            Self::WordRiddle => "word_riddle",
            Self::MathPuzzle => "math_puzzle",
            Self::LogicPuzzle => "logic_puzzle",
            Self::Anagram => "anagram",
            Self::Pattern => "pattern",
            Self::Wordplay => "wordplay",
            Self::Riddle => "riddle",
        }
    }

    /// Whether the tag names an encryption scheme ("cipher" in the name)
    #[must_use]
    pub const fn is_cipher(self) -> bool {
        matches!(
            self,
            Self::CaesarCipher | Self::SubstitutionCipher | Self::AtbashCipher
        )
    }
}

impl fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Hint disclosure tiers, in increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HintLevel {
    Hint,
    Nudge,
    Full,
}

impl HintLevel {
    /// Parse from a CLI name
    ///
    /// Supported names: "hint", "nudge", "full". Defaults to `Hint` if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "nudge" => Self::Nudge,
            "full" | "full_explanation" => Self::Full,
            _ => Self::Hint,
        }
    }
}

/// The hint tiers every solution can be explained at
pub const HINT_LEVELS: [&str; 3] = ["hint", "nudge", "full_explanation"];

/// One solver's proposed answer with its explanation and confidence
///
/// Never mutated after creation. List position is the de facto ranking:
/// the first solution in a report is treated as best.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub label: String,
    pub steps: Vec<String>,
    pub final_answer: String,
    /// Heuristic self-assessment in [0, 1]; not a calibrated probability
    pub confidence: f64,
    pub hint_level_available: [&'static str; 3],
}

impl Solution {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        steps: Vec<String>,
        final_answer: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            label: label.into(),
            steps,
            final_answer: final_answer.into(),
            confidence,
            hint_level_available: HINT_LEVELS,
        }
    }
}

/// A lower-ranked reading of the puzzle
#[derive(Debug, Clone, Serialize)]
pub struct Alternative {
    pub description: String,
    pub confidence: f64,
}

/// All three hint tiers, always computed together
#[derive(Debug, Clone, Serialize)]
pub struct Hints {
    pub hint: String,
    pub nudge: String,
    pub full_explanation: String,
}

/// The full result bundle for one solve call
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub puzzle_types: Vec<PuzzleType>,
    pub analysis: String,
    pub solutions: Vec<Solution>,
    pub alternative_interpretations: Vec<Alternative>,
    pub hints: Hints,
    pub next_puzzle_prediction: String,
}

/// Error type for solve failures
///
/// Almost every solver failure is recovered locally (the solver simply
/// contributes no candidate). The one hard error is an explicit equation
/// that divides by zero: silently producing a wrong answer for it would
/// be worse than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    DivisionByZero { dividend: i64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "equation divides {dividend} by zero")
            }
        }
    }
}

impl std::error::Error for SolveError {}
