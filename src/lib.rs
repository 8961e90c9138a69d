//! Trigsolve: completes partially specified triangles
//!
//! Supply any workable mix of the three vertex angles and the three
//! opposite sides; the solver picks a strategy, validates the input
//! against the geometry of a triangle, fills in the missing values and
//! derives an auxiliary right triangle used to lay the result out.
//!
//! ```rust
//! use trigsolve::solver::{ErrorSet, TriangleSolver};
//!
//! // Angle B between sides a and c.
//! let mut triangle = TriangleSolver::from_values([(0.0, 5.0), (60.0, 0.0), (0.0, 5.0)]);
//! let mut errors = ErrorSet::new();
//! triangle.solve(&mut errors)?;
//!
//! assert!(triangle.is_complete());
//! assert!((triangle.b().side.value() - 5.0).abs() < 1e-9);
//! # Ok::<(), trigsolve::TrigsolveError>(())
//! ```

use thiserror::Error;

pub mod constants;
pub mod input;
pub mod layout;
pub mod measure;
pub mod report;
pub mod solver;
pub mod synthetic;

// Re-export commonly used types
pub use measure::{Angle, Length};
pub use solver::{
    ErrorKind, ErrorSet, OpposingPair, PairStatus, SolveOptions, Strategy, TriangleSolver, Vertex,
};

/// Main error type for the trigsolve library
///
/// Rejected user input is reported through [`ErrorSet`] instead; these
/// variants are for misuse and for callers that want a hard failure.
#[derive(Debug, Error)]
pub enum TrigsolveError {
    #[error("Cannot divide by an empty {what}")]
    DivideByZero { what: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Triangle could not be solved: {0}")]
    Unsolvable(ErrorSet),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for trigsolve operations
pub type Result<T> = std::result::Result<T, TrigsolveError>;
