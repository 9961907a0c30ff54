//! Report composition
//!
//! Pure functions that turn detected types and candidate solutions into
//! the report's prose fields: summary, graded hints, alternatives, and
//! the next-puzzle prediction.

pub mod alternatives;
pub mod hints;
pub mod predict;
pub mod summary;
