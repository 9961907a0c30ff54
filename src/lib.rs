//! Escape Room Puzzle Solver
//!
//! Classifies free-text escape-room puzzle fragments (ciphers, encodings,
//! sequences, riddles, wordplay), attempts automatic decoding, and emits
//! graded hints plus a prediction of the next puzzle type.
//!
//! # Quick Start
//!
//! ```rust
//! use escape_solver::core::HintLevel;
//! use escape_solver::solver::EscapeSolver;
//!
//! let solver = EscapeSolver::new();
//! let report = solver
//!     .solve(".... . .-.. .-.. ---", "", HintLevel::Hint)
//!     .unwrap();
//! assert_eq!(report.solutions[0].final_answer, "HELLO");
//! ```

// Core domain types and cipher primitives
pub mod core;

// Category detectors
pub mod detect;

// Solving engine and category solvers
pub mod solver;

// Analysis, hints, alternatives, prediction
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
