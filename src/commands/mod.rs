//! Command implementations

pub mod examples;
pub mod guide;
pub mod solve;

pub use examples::run_examples;
pub use guide::run_guide;
pub use solve::run_solve;
