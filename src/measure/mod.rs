//! Measured quantities: vertex angles and side lengths
//!
//! Both types treat a zero value as empty (unknown).

pub mod angle;
pub mod length;

pub use angle::Angle;
pub use length::Length;
