//! Single-puzzle solve command
//!
//! Thin wrapper over the engine for the primary CLI surface.

use crate::core::report::{HintLevel, Report, SolveError};
use crate::solver::EscapeSolver;

/// Solve one puzzle and return the full report
///
/// # Errors
/// Propagates the engine's division-by-zero error.
pub fn run_solve(puzzle: &str, context: &str, hint_level: HintLevel) -> Result<Report, SolveError> {
    let solver = EscapeSolver::new();
    solver.solve(puzzle, context, hint_level)
}
