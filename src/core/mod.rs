//! Core domain types and primitives
//!
//! Fundamental types for puzzle reports plus the pure cipher/encoding and
//! text heuristics everything else is built on.

pub mod ciphers;
pub mod report;
pub mod text;

pub use report::{HintLevel, PuzzleType, Report, Solution, SolveError};
