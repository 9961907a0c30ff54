//! Graded hint generation
//!
//! Three disclosure tiers are always produced together: a vague hint, a
//! nudge naming the solver and its first step, and a full explanation
//! with the answer and every step.

use crate::core::report::{Hints, PuzzleType, Solution};

/// Produce all three hint tiers from the best-scoring solution
///
/// Falls back to a generic, non-committal triple when there is nothing
/// worth committing to: an empty solution list or a first entry with
/// confidence below 0.5.
#[must_use]
pub fn generate(solutions: &[Solution], types: &[PuzzleType]) -> Hints {
    let names: Vec<&str> = types.iter().map(|t| t.name()).collect();

    let Some(best) = solutions.first().filter(|s| s.confidence >= 0.5) else {
        return Hints {
            hint: "Look carefully at the structure and format of the text.".to_string(),
            nudge: "Consider what type of encoding or wordplay might be used. Look for patterns."
                .to_string(),
            full_explanation: format!(
                "This appears to be a {} puzzle. Without more context, multiple interpretations \
                 are possible. Examine each word and letter carefully.",
                names.join(", ")
            ),
        };
    };

    // Coarse category tip, checked in priority order
    let hint = if types.iter().any(|t| t.is_cipher()) {
        "The text appears to be encoded. Think about common encryption methods."
    } else if types.contains(&PuzzleType::Pattern) {
        "Look for a mathematical or sequential pattern."
    } else if types.contains(&PuzzleType::Riddle) {
        "Think about the literal and figurative meanings of the words."
    } else {
        "Pay attention to the way the text is formatted."
    };

    let first_step = best.steps.first().map_or("", String::as_str);
    let nudge = format!("This is a {}. {}", best.label, first_step);

    let numbered: Vec<String> = best
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect();
    let full_explanation = format!(
        "Solution: {}\n\nSteps:\n{}",
        best.final_answer,
        numbered.join("\n")
    );

    Hints {
        hint: hint.to_string(),
        nudge,
        full_explanation,
    }
}
