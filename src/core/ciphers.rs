//! Cipher and encoding primitives
//!
//! Pure building blocks for the solvers: Caesar rotation, Atbash mirror
//! substitution, Base64 text decoding, and the Morse token table. Letter
//! case is preserved and non-letters pass through unchanged.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rustc_hash::FxHashMap;

/// Rotate every ASCII letter forward by `shift` positions (mod 26)
#[must_use]
pub fn caesar_shift(text: &str, shift: u8) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                (((c as u8 - b'A' + shift) % 26) + b'A') as char
            } else if c.is_ascii_lowercase() {
                (((c as u8 - b'a' + shift) % 26) + b'a') as char
            } else {
                c
            }
        })
        .collect()
}

/// Apply the Atbash mirror substitution (A↔Z, B↔Y, ...)
///
/// Atbash is an involution: applying it twice restores the input.
#[must_use]
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                (b'Z' - (c as u8 - b'A')) as char
            } else if c.is_ascii_lowercase() {
                (b'z' - (c as u8 - b'a')) as char
            } else {
                c
            }
        })
        .collect()
}

/// Decode trimmed Base64 input into UTF-8 text
///
/// Returns `None` on an invalid alphabet, bad padding, or a payload that
/// is not valid UTF-8.
#[must_use]
pub fn base64_to_text(text: &str) -> Option<String> {
    let bytes = STANDARD.decode(text.trim()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Build the Morse token table (letters A-Z and digits 0-9)
#[must_use]
pub fn morse_table() -> FxHashMap<&'static str, char> {
    let entries: [(&str, char); 36] = [
        (".-", 'A'),
        ("-...", 'B'),
        ("-.-.", 'C'),
        ("-..", 'D'),
        (".", 'E'),
        ("..-.", 'F'),
        ("--.", 'G'),
        ("....", 'H'),
        ("..", 'I'),
        (".---", 'J'),
        ("-.-", 'K'),
        (".-..", 'L'),
        ("--", 'M'),
        ("-.", 'N'),
        ("---", 'O'),
        (".--.", 'P'),
        ("--.-", 'Q'),
        (".-.", 'R'),
        ("...", 'S'),
        ("-", 'T'),
        ("..-", 'U'),
        ("...-", 'V'),
        (".--", 'W'),
        ("-..-", 'X'),
        ("-.--", 'Y'),
        ("--..", 'Z'),
        ("-----", '0'),
        (".----", '1'),
        ("..---", '2'),
        ("...--", '3'),
        ("....-", '4'),
        (".....", '5'),
        ("-....", '6'),
        ("--...", '7'),
        ("---..", '8'),
        ("----.", '9'),
    ];
    entries.into_iter().collect()
}
