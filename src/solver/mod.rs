//! Triangle solving
//!
//! A [`TriangleSolver`] holds three [`OpposingPair`]s, A, B and C, each an
//! angle and the side opposite it. Given any workable mix of known values
//! it fills in the rest using one of four strategies:
//!
//! - SSA: two sides and an angle that is not between them
//! - ASA/AAS: two angles and any side (or none, giving a nominal size)
//! - SAS: two sides and the angle between them
//! - SSS: three sides
//!
//! Invalid input never panics or returns `Err`; it leaves the triangle
//! unsolved and records the reasons in an [`ErrorSet`].

pub mod errors;
pub mod options;
pub mod pair;
pub mod strategies;
pub mod triangle;

pub use errors::{ErrorKind, ErrorSet};
pub use options::{SolveOptions, Strategy};
pub use pair::{OpposingPair, PairStatus};
pub use triangle::{TriangleSolver, Vertex};
