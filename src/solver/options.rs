//! Solving strategies and the options that steer them

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{NOMINAL_SIDE, RIGHT_ANGLE_TOLERANCE};

/// The classical triangle-solving cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Two sides and an angle that is not between them
    Ssa,
    /// Two angles and any side (also covers AAS)
    Asa,
    /// Two sides and the angle between them
    Sas,
    /// Three sides
    Sss,
}

impl Strategy {
    /// Priority order used by [`SolveOptions::default`]
    pub const DEFAULT_ORDER: [Strategy; 4] =
        [Strategy::Ssa, Strategy::Asa, Strategy::Sas, Strategy::Sss];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Ssa => "side-side-angle",
            Strategy::Asa => "angle-side-angle",
            Strategy::Sas => "side-angle-side",
            Strategy::Sss => "side-side-side",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for [`TriangleSolver::solve_with`](super::TriangleSolver::solve_with)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Side length assigned by ASA when no side is known
    pub nominal_side: f64,
    /// How far from 90 degrees, in degrees, still counts as a right angle
    pub right_angle_tolerance: f64,
    /// Strategies in the order they are attempted
    pub order: Vec<Strategy>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            nominal_side: NOMINAL_SIDE,
            right_angle_tolerance: RIGHT_ANGLE_TOLERANCE,
            order: Strategy::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl SolveOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the side assigned when only angles are known
    pub fn with_nominal_side(mut self, nominal_side: f64) -> Self {
        self.nominal_side = nominal_side;
        self
    }

    /// Set the right-angle tolerance in degrees
    pub fn with_right_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.right_angle_tolerance = tolerance;
        self
    }

    /// Set the strategy priority order
    pub fn with_order(mut self, order: impl Into<Vec<Strategy>>) -> Self {
        self.order = order.into();
        self
    }
}
