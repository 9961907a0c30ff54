//! Next-puzzle prediction
//!
//! Escape rooms chain puzzles; each recognized category maps to a canned
//! guess about what the decoded answer feeds into next.

use crate::core::report::PuzzleType;

/// Suggest what kind of puzzle likely comes next
///
/// Detected tags are checked in detection order; the first tag with a
/// canned prediction wins. Unmapped tags fall through to a generic
/// suggestion.
#[must_use]
pub fn next_puzzle(types: &[PuzzleType]) -> &'static str {
    for tag in types {
        let prediction = match tag {
            PuzzleType::CaesarCipher => Some(
                "Likely a more complex cipher (Vigenère, substitution) or a physical puzzle \
                 using the decoded answer as a key.",
            ),
            PuzzleType::Base64 => Some(
                "May lead to a URL, password, or another encoded message that needs further \
                 decoding.",
            ),
            PuzzleType::MorseCode => Some(
                "Could be followed by a numeric code, coordinates, or a physical location puzzle.",
            ),
            PuzzleType::Riddle => {
                Some("Probably leads to a physical object in the room or a combination lock code.")
            }
            PuzzleType::MathPuzzle => {
                Some("Answer may be used as a combination or lead to a sequence-based puzzle.")
            }
            PuzzleType::Pattern => {
                Some("Next puzzle likely involves using the sequence answer as a key or code.")
            }
            PuzzleType::Anagram => {
                Some("Decoded word probably references an object or location for the next clue.")
            }
            _ => None,
        };
        if let Some(text) = prediction {
            return text;
        }
    }

    "Next puzzle could involve physical objects in the room, a lock combination, or a \
     meta-puzzle connecting previous solutions."
}
