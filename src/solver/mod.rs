//! Puzzle solving engine
//!
//! Category-specific solvers produce candidate solutions; the engine runs
//! them behind the detectors and assembles the final report.

pub mod anagram;
pub mod ciphers;
mod engine;
pub mod sequence;

pub use engine::EscapeSolver;
