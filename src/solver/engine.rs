//! Solving engine
//!
//! Orchestrates one solve call: classify the text, run the gated solvers
//! in fixed category order, then assemble the analysis, alternatives,
//! hints, and next-puzzle prediction into a [`Report`].

use super::{anagram, ciphers, sequence};
use crate::analysis::{alternatives, hints, predict, summary};
use crate::core::ciphers::morse_table;
use crate::core::report::{HintLevel, PuzzleType, Report, Solution, SolveError};
use crate::detect;
use rustc_hash::FxHashMap;

/// Escape-room puzzle solver
///
/// Holds only the read-only registry built at construction; `solve` is a
/// pure function of its inputs, so one instance can be shared freely
/// across threads.
pub struct EscapeSolver {
    morse: FxHashMap<&'static str, char>,
}

impl EscapeSolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            morse: morse_table(),
        }
    }

    /// Analyze a puzzle and produce the full report
    ///
    /// `hint_level` is accepted for interface parity: the report always
    /// carries all three hint levels and callers pick which to display.
    ///
    /// # Errors
    /// Returns [`SolveError::DivisionByZero`] when the puzzle contains an
    /// explicit equation dividing by zero. Every other solver failure is
    /// recovered locally.
    pub fn solve(
        &self,
        puzzle: &str,
        context: &str,
        _hint_level: HintLevel,
    ) -> Result<Report, SolveError> {
        let puzzle_types = detect::classify(puzzle);
        let solutions = self.generate_solutions(puzzle, &puzzle_types)?;

        let analysis = summary::analyze(puzzle, &puzzle_types, context);
        let alternative_interpretations = alternatives::generate(&puzzle_types, &solutions);
        let hints = hints::generate(&solutions, &puzzle_types);
        let next_puzzle_prediction = predict::next_puzzle(&puzzle_types).to_string();

        Ok(Report {
            puzzle_types,
            analysis,
            solutions,
            alternative_interpretations,
            hints,
            next_puzzle_prediction,
        })
    }

    /// Run the solvers gated by detected types, in fixed category order
    ///
    /// The concatenation order is the de facto ranking: the hint
    /// generator treats the first entry as best.
    fn generate_solutions(
        &self,
        puzzle: &str,
        types: &[PuzzleType],
    ) -> Result<Vec<Solution>, SolveError> {
        let mut solutions = Vec::new();

        if types.contains(&PuzzleType::CaesarCipher) {
            solutions.extend(ciphers::solve_caesar(puzzle));
        }
        if types.contains(&PuzzleType::AtbashCipher) {
            solutions.extend(ciphers::solve_atbash(puzzle));
        }
        if types.contains(&PuzzleType::Base64) {
            solutions.extend(ciphers::solve_base64(puzzle));
        }
        if types.contains(&PuzzleType::MorseCode) {
            solutions.extend(ciphers::solve_morse(puzzle, &self.morse));
        }
        if types.contains(&PuzzleType::Anagram) {
            solutions.extend(anagram::solve_anagram(puzzle));
        }
        if types.contains(&PuzzleType::Pattern) {
            solutions.extend(sequence::solve_pattern(puzzle));
        }
        if types.contains(&PuzzleType::MathPuzzle) {
            solutions.extend(sequence::solve_math(puzzle)?);
        }

        if solutions.is_empty() {
            solutions.push(general_analysis());
        }
        Ok(solutions)
    }
}

impl Default for EscapeSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Fallback candidate when no solver produced anything
fn general_analysis() -> Solution {
    Solution::new(
        "General Analysis",
        vec![
            "Analyze the puzzle structure and key elements".to_string(),
            "Look for hidden meanings or wordplay".to_string(),
            "Consider the context and theme of the escape room".to_string(),
        ],
        "Multiple interpretations possible - see hints for guidance",
        0.3,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_never_empty() {
        let solver = EscapeSolver::new();
        for puzzle in ["", "plain text", "?!?!", "42"] {
            let report = solver.solve(puzzle, "", HintLevel::Hint).unwrap();
            assert!(!report.puzzle_types.is_empty(), "no tags for {puzzle:?}");
        }
    }

    #[test]
    fn solutions_never_empty() {
        let solver = EscapeSolver::new();
        for puzzle in ["", "plain text", "guess who"] {
            let report = solver.solve(puzzle, "", HintLevel::Hint).unwrap();
            assert!(!report.solutions.is_empty(), "no solutions for {puzzle:?}");
        }
    }

    #[test]
    fn unclassified_input_gets_fallback_candidate() {
        let solver = EscapeSolver::new();
        let report = solver.solve("xyzzy", "", HintLevel::Hint).unwrap();

        assert_eq!(report.puzzle_types, vec![PuzzleType::Riddle]);
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].label, "General Analysis");
        assert!((report.solutions[0].confidence - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn solve_is_idempotent() {
        let solver = EscapeSolver::new();
        let puzzle = "VGhlIGtleSBpcyB1bmRlciB0aGUgbWF0";

        let first = solver.solve(puzzle, "terminal", HintLevel::Full).unwrap();
        let second = solver.solve(puzzle, "terminal", HintLevel::Full).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn base64_puzzle_end_to_end() {
        let solver = EscapeSolver::new();
        let report = solver
            .solve("VGhlIGtleSBpcyB1bmRlciB0aGUgbWF0", "", HintLevel::Hint)
            .unwrap();

        assert!(report.puzzle_types.contains(&PuzzleType::Base64));
        let sol = report
            .solutions
            .iter()
            .find(|s| s.label == "Base64 Decoding")
            .expect("base64 candidate");
        assert_eq!(sol.final_answer, "The key is under the mat");
        assert!((sol.confidence - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn morse_puzzle_end_to_end() {
        let solver = EscapeSolver::new();
        let report = solver
            .solve(
                ".... . .-.. .-.. --- / .-- --- .-. .-.. -..",
                "",
                HintLevel::Hint,
            )
            .unwrap();

        assert!(report.puzzle_types.contains(&PuzzleType::MorseCode));
        assert_eq!(report.solutions[0].label, "Morse Code");
        assert_eq!(report.solutions[0].final_answer, "HELLO WORLD");
    }

    #[test]
    fn sequence_puzzle_end_to_end() {
        let solver = EscapeSolver::new();
        let report = solver
            .solve(
                "What comes next in the sequence: 2, 4, 6, 8, ?",
                "",
                HintLevel::Hint,
            )
            .unwrap();

        assert!(report.puzzle_types.contains(&PuzzleType::Pattern));
        let sol = report
            .solutions
            .iter()
            .find(|s| s.label == "Arithmetic Sequence")
            .expect("arithmetic candidate");
        assert_eq!(sol.final_answer, "10");
    }

    #[test]
    fn math_puzzle_end_to_end() {
        let solver = EscapeSolver::new();
        let report = solver
            .solve(
                "If the code is 15 + 27 = ?, what is the combination?",
                "",
                HintLevel::Full,
            )
            .unwrap();

        assert!(report.puzzle_types.contains(&PuzzleType::MathPuzzle));
        let sol = report
            .solutions
            .iter()
            .find(|s| s.label == "Mathematical Equation")
            .expect("math candidate");
        assert_eq!(sol.final_answer, "42");
        assert!((sol.confidence - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn division_by_zero_propagates() {
        let solver = EscapeSolver::new();
        let err = solver.solve("8 / 0 = ?", "", HintLevel::Hint).unwrap_err();
        assert_eq!(err, SolveError::DivisionByZero { dividend: 8 });
    }

    #[test]
    fn solver_order_is_fixed() {
        // Both an arithmetic progression and an equation are present; the
        // pattern solver's candidates must precede the math solver's.
        let solver = EscapeSolver::new();
        let report = solver
            .solve("sequence 2, 4, 6 and also 8 + 10 = ?", "", HintLevel::Hint)
            .unwrap();

        let labels: Vec<&str> = report.solutions.iter().map(|s| s.label.as_str()).collect();
        let pattern_pos = labels
            .iter()
            .position(|l| *l == "Arithmetic Sequence")
            .expect("pattern candidate");
        let math_pos = labels
            .iter()
            .position(|l| *l == "Mathematical Equation")
            .expect("math candidate");
        assert!(pattern_pos < math_pos);
    }
}
