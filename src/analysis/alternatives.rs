//! Alternative interpretation generation

use crate::core::report::{Alternative, PuzzleType, Solution};

/// Build the list of lower-ranked readings
///
/// Every solution past the first becomes an alternative with its
/// confidence copied. Riddle-tagged puzzles gain a fixed wordplay
/// possibility; an otherwise empty list gets a fixed "no strong
/// alternative" entry so the field is never empty.
#[must_use]
pub fn generate(types: &[PuzzleType], solutions: &[Solution]) -> Vec<Alternative> {
    let mut alternatives: Vec<Alternative> = solutions
        .iter()
        .skip(1)
        .map(|sol| Alternative {
            description: format!("{}: {}", sol.label, sol.final_answer),
            confidence: sol.confidence,
        })
        .collect();

    if types.contains(&PuzzleType::Riddle) {
        alternatives.push(Alternative {
            description: "Could be a play on words or pun".to_string(),
            confidence: 0.4,
        });
    }

    if alternatives.is_empty() {
        alternatives.push(Alternative {
            description: "No strong alternative interpretations found".to_string(),
            confidence: 0.1,
        });
    }

    alternatives
}
