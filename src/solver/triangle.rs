//! Triangle state, status queries, the alternate triangle and scaling
//!
//! Vertices are labelled A, B and C. Each vertex owns an [`OpposingPair`]:
//! the angle at that vertex and the side across from it. When a layout
//! draws the triangle, side c is the base, A sits at its right end and B
//! at its left end.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{ErrorKind, ErrorSet};
use super::options::SolveOptions;
use super::pair::{OpposingPair, PairStatus};
use crate::constants::{RIGHT_ANGLE, RIGHT_ANGLE_TOLERANCE, STRAIGHT_ANGLE};
use crate::{Result, TrigsolveError};

/// Names one of the three vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    pub(crate) fn index(self) -> usize {
        match self {
            Vertex::A => 0,
            Vertex::B => 1,
            Vertex::C => 2,
        }
    }

    /// The two remaining vertices, in label order
    pub fn others(self) -> (Vertex, Vertex) {
        match self {
            Vertex::A => (Vertex::B, Vertex::C),
            Vertex::B => (Vertex::A, Vertex::C),
            Vertex::C => (Vertex::A, Vertex::B),
        }
    }
}

/// Three opposing pairs plus an optional auxiliary right triangle
///
/// A solver is filled from user input, completed in place by one of the
/// solving strategies, and can then be rescaled any number of times. The
/// side lengths present right after input or after a successful solve are
/// kept as the baseline for [`scale`](Self::scale), so repeated scaling
/// never compounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSolver {
    pub(super) pairs: [OpposingPair; 3],
    original_sides: [f64; 3],
    alt: Option<Box<TriangleSolver>>,
    right_angle_tolerance: f64,
}

impl Default for TriangleSolver {
    fn default() -> Self {
        Self::new(
            OpposingPair::empty(),
            OpposingPair::empty(),
            OpposingPair::empty(),
        )
    }
}

impl TriangleSolver {
    /// Creates a solver from three pairs
    pub fn new(a: OpposingPair, b: OpposingPair, c: OpposingPair) -> Self {
        let mut triangle = TriangleSolver {
            pairs: [a, b, c],
            original_sides: [0.0; 3],
            alt: None,
            right_angle_tolerance: RIGHT_ANGLE_TOLERANCE,
        };
        triangle.capture_original_sides();
        triangle
    }

    /// Creates a solver from `(angle in degrees, side)` for A, B and C
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trigsolve::solver::{PairStatus, TriangleSolver, Vertex};
    ///
    /// let triangle = TriangleSolver::from_values([(0.0, 3.0), (0.0, 4.0), (90.0, 0.0)]);
    /// assert_eq!(triangle.status(Vertex::C), PairStatus::AngleOnly);
    /// ```
    pub fn from_values(values: [(f64, f64); 3]) -> Self {
        let [a, b, c] = values.map(|(angle, side)| OpposingPair::new(angle, side));
        Self::new(a, b, c)
    }

    /// Overwrites all six slots with freshly read input
    ///
    /// The alternate triangle belongs to the previous values and is dropped.
    pub fn set_values(&mut self, values: [(f64, f64); 3]) {
        self.pairs = values.map(|(angle, side)| OpposingPair::new(angle, side));
        self.alt = None;
        self.capture_original_sides();
    }

    /// Current `(angle in degrees, side)` for A, B and C; empty reads as 0
    pub fn values(&self) -> [(f64, f64); 3] {
        self.pairs.map(|p| (p.angle.degrees(), p.side.value()))
    }

    pub fn pair(&self, vertex: Vertex) -> &OpposingPair {
        &self.pairs[vertex.index()]
    }

    /// Replaces one pair
    pub fn set_pair(&mut self, vertex: Vertex, pair: OpposingPair) {
        self.pairs[vertex.index()] = pair;
    }

    pub fn a(&self) -> &OpposingPair {
        self.pair(Vertex::A)
    }

    pub fn b(&self) -> &OpposingPair {
        self.pair(Vertex::B)
    }

    pub fn c(&self) -> &OpposingPair {
        self.pair(Vertex::C)
    }

    pub fn status(&self, vertex: Vertex) -> PairStatus {
        self.pair(vertex).status()
    }

    /// Auxiliary right triangle from the last successful solve
    pub fn alt_triangle(&self) -> Option<&TriangleSolver> {
        self.alt.as_deref()
    }

    /// Side lengths that [`scale`](Self::scale) multiplies
    pub fn original_sides(&self) -> [f64; 3] {
        self.original_sides
    }

    /// Right-angle tolerance of the last successful solve
    pub fn right_angle_tolerance(&self) -> f64 {
        self.right_angle_tolerance
    }

    /// Rejects values no triangle can hold: negative or non-finite
    /// angles and sides
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::InvalidInput`] naming the first bad value.
    pub fn validate_values(&self) -> Result<()> {
        for (vertex, (angle, side)) in Vertex::ALL.into_iter().zip(self.values()) {
            if !angle.is_finite() || angle < 0.0 {
                return Err(TrigsolveError::InvalidInput(format!(
                    "angle {:?} must be a non-negative number, got {}",
                    vertex, angle
                )));
            }
            if !side.is_finite() || side < 0.0 {
                return Err(TrigsolveError::InvalidInput(format!(
                    "side {:?} must be a non-negative number, got {}",
                    vertex, side
                )));
            }
        }
        Ok(())
    }

    /// Whether enough values are present to attempt a solve
    ///
    /// Any three values, or any two angles, are enough to try. This says
    /// nothing about whether the values describe a real triangle.
    pub fn is_sufficient(&self) -> bool {
        let angles = self.pairs.iter().filter(|p| !p.angle.is_empty()).count();
        let sides = self.pairs.iter().filter(|p| !p.side.is_empty()).count();
        angles + sides > 2 || angles > 1
    }

    /// Whether every angle and side is known
    pub fn is_complete(&self) -> bool {
        self.pairs.iter().all(OpposingPair::is_complete)
    }

    /// Rejects known angles that cannot belong to one triangle
    pub fn check_angles(&self, errors: &mut ErrorSet) -> bool {
        let [a, b, c] = self.pairs.map(|p| p.angle);

        if [a, b, c].iter().any(|angle| !angle.less_than(STRAIGHT_ANGLE)) {
            errors.insert(ErrorKind::OneAngle180);
            return false;
        }

        if a.add_degrees(&b) >= STRAIGHT_ANGLE
            || b.add_degrees(&c) >= STRAIGHT_ANGLE
            || a.add_degrees(&c) >= STRAIGHT_ANGLE
        {
            errors.insert(ErrorKind::TwoAngle180);
            return false;
        }

        true
    }

    /// Resets every pair to empty and drops the alternate triangle
    pub fn clear(&mut self) {
        self.pairs.iter_mut().for_each(OpposingPair::clear);
        self.original_sides = [0.0; 3];
        self.alt = None;
        self.right_angle_tolerance = RIGHT_ANGLE_TOLERANCE;
    }

    /// Sets each side to its baseline length times `factor`
    ///
    /// Angles are untouched and the alternate triangle is scaled by the
    /// same factor. Nothing happens while any baseline side is missing.
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::InvalidInput`] for a factor that is not a
    /// positive finite number.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TrigsolveError::InvalidInput(format!(
                "scale factor must be positive and finite, got {}",
                factor
            )));
        }

        if self.original_sides.iter().any(|&side| side <= 0.0) {
            log::debug!("scale skipped, baseline sides incomplete");
            return Ok(());
        }

        for (pair, original) in self.pairs.iter_mut().zip(self.original_sides) {
            pair.side.set(original * factor);
        }
        log::debug!("scaled triangle by {}", factor);

        if let Some(alt) = self.alt.as_mut() {
            alt.scale(factor)?;
        }
        Ok(())
    }

    /// Deep copy whose scaling baseline is the current side lengths
    pub fn snapshot(&self) -> TriangleSolver {
        let mut copy = TriangleSolver {
            pairs: self.pairs,
            original_sides: [0.0; 3],
            alt: self.alt.as_ref().map(|alt| Box::new(alt.snapshot())),
            right_angle_tolerance: self.right_angle_tolerance,
        };
        copy.capture_original_sides();
        copy
    }

    /// Solved values formatted to two decimals, followed by the alternate
    /// triangle (as D, E, F) after a blank line when one exists
    pub fn result_list(&self) -> Vec<String> {
        let mut lines = labelled_values(&self.pairs, ['A', 'B', 'C']);
        if let Some(alt) = &self.alt {
            lines.push(String::new());
            lines.extend(labelled_values(&alt.pairs, ['D', 'E', 'F']));
        }
        lines
    }

    pub(super) fn capture_original_sides(&mut self) {
        self.original_sides = self.pairs.map(|p| p.side.value());
    }

    /// Builds the right triangle formed by the altitude onto side c
    ///
    /// There is none when A or B is already a right angle. Otherwise the
    /// altitude either falls inside the base (A and B both at most 90
    /// degrees) or outside it, beyond the obtuse vertex.
    pub(super) fn derive_alt_triangle(&mut self, options: &SolveOptions, errors: &mut ErrorSet) {
        let [a, b, _] = self.pairs;
        let tolerance = options.right_angle_tolerance;
        self.right_angle_tolerance = tolerance;

        if a.angle.is_right(tolerance) || b.angle.is_right(tolerance) {
            log::debug!("right angle at A or B, no alternate triangle");
            self.alt = None;
            return;
        }

        let mut d = OpposingPair::empty();
        let mut e = OpposingPair::empty();
        d.angle.set_degrees(RIGHT_ANGLE);

        if !a.angle.greater_than(RIGHT_ANGLE) && !b.angle.greater_than(RIGHT_ANGLE) {
            e.angle = b.angle;
            d.side = a.side;
        } else if a.angle > b.angle {
            d.side = b.side;
            e.angle.set_degrees(STRAIGHT_ANGLE - a.angle.degrees());
        } else {
            d.side = a.side;
            e.angle.set_degrees(STRAIGHT_ANGLE - b.angle.degrees());
        }

        let mut alt = TriangleSolver::new(d, e, OpposingPair::empty());
        if alt.asa_steps(options.nominal_side, errors) {
            alt.capture_original_sides();
            log::debug!("alternate triangle {}", alt);
            self.alt = Some(Box::new(alt));
        } else {
            log::debug!("alternate triangle could not be solved");
            self.alt = None;
        }
    }
}

fn labelled_values(pairs: &[OpposingPair; 3], labels: [char; 3]) -> Vec<String> {
    pairs
        .iter()
        .zip(labels)
        .flat_map(|(pair, label)| {
            [
                format!("{}° {}", label, pair.angle),
                format!("{}  {}", label.to_ascii_lowercase(), pair.side),
            ]
        })
        .collect()
}

impl fmt::Display for TriangleSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A: {}  B: {}  C: {}",
            self.pairs[0], self.pairs[1], self.pairs[2]
        )
    }
}
