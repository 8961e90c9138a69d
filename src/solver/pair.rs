//! An angle together with the side opposite it
//!
//! Every deduction here is one application of the angle-sum rule, the law
//! of sines or the law of cosines. A deduction either writes the derived
//! value and returns `true`, or leaves the pair untouched and returns
//! `false`, recording at most one [`ErrorKind`] on the way.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{ErrorKind, ErrorSet};
use crate::constants::STRAIGHT_ANGLE;
use crate::measure::{Angle, Length};
use crate::Result;

/// Which halves of an [`OpposingPair`] are known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairStatus {
    Neither,
    SideOnly,
    AngleOnly,
    Both,
}

/// A vertex angle and the length of the side opposite it
///
/// Pairs are plain values: copying a pair copies both measures, so pairs
/// held by different triangles never alias.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OpposingPair {
    pub angle: Angle,
    pub side: Length,
}

impl OpposingPair {
    /// Creates a pair from raw values; zeros are empty
    pub fn new(angle_degrees: f64, side: f64) -> Self {
        OpposingPair {
            angle: Angle::from_degrees(angle_degrees),
            side: Length::new(side),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PairStatus {
        match (self.side.is_empty(), self.angle.is_empty()) {
            (true, true) => PairStatus::Neither,
            (false, true) => PairStatus::SideOnly,
            (true, false) => PairStatus::AngleOnly,
            (false, false) => PairStatus::Both,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == PairStatus::Both
    }

    pub fn clear(&mut self) {
        self.angle.clear();
        self.side.clear();
    }

    /// Sets this angle to `180 - first - second`
    ///
    /// Does nothing unless both angles are known. Records
    /// [`ErrorKind::TwoAngle180`] when they leave no room for a third.
    pub fn deduce_angle_from_others(
        &mut self,
        first: &Angle,
        second: &Angle,
        errors: &mut ErrorSet,
    ) -> bool {
        if first.is_empty() || second.is_empty() {
            return false;
        }

        let sum = first.add_degrees(second);
        if sum < STRAIGHT_ANGLE {
            self.angle.set_degrees(STRAIGHT_ANGLE - sum);
            true
        } else {
            errors.insert(ErrorKind::TwoAngle180);
            false
        }
    }

    /// Law of sines, solving for this angle from a complete pair
    ///
    /// Requires this side and both halves of `other`. Always yields the
    /// principal value of `asin`; the supplementary angle is never
    /// considered.
    pub fn deduce_angle_from_pair(
        &mut self,
        other: &OpposingPair,
        errors: &mut ErrorSet,
    ) -> Result<bool> {
        if self.side.is_empty() || !other.is_complete() {
            return Ok(false);
        }

        let sine = other.side.div_into(self.side.value() * other.angle.sin())?;
        if !(-1.0..=1.0).contains(&sine) {
            errors.insert(ErrorKind::AngleTooLarge);
            return Ok(false);
        }

        let angle = Angle::from_radians(sine.asin());
        if !angle.is_interior() {
            errors.insert(ErrorKind::AngleTooLarge);
            return Ok(false);
        }

        self.angle = angle;
        Ok(true)
    }

    /// Law of cosines, solving for this angle from all three sides
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::DivideByZero`](crate::TrigsolveError) when
    /// either adjacent side is empty.
    pub fn deduce_angle_from_adjacent_sides(
        &mut self,
        side_b: &Length,
        side_c: &Length,
    ) -> Result<bool> {
        if self.side.is_empty() {
            return Ok(false);
        }

        let numerator = side_b.squared() + side_c.squared() - self.side.squared();
        let cosine = side_c.div_into(side_b.div_into(numerator)?)? / 2.0;

        // Rounding can push a valid near-degenerate cosine just past +-1.
        let angle = Angle::from_radians(cosine.clamp(-1.0, 1.0).acos());
        if !angle.is_interior() {
            return Ok(false);
        }

        self.angle = angle;
        Ok(true)
    }

    /// Law of sines, solving for this side from a complete pair
    ///
    /// Requires this angle and both halves of `other`. Records
    /// [`ErrorKind::OneAngle180`] when this angle is not below 180 degrees.
    pub fn deduce_side_from_pair(&mut self, other: &OpposingPair, errors: &mut ErrorSet) -> bool {
        if self.angle.is_empty() || !other.is_complete() {
            return false;
        }

        if !self.angle.less_than(STRAIGHT_ANGLE) {
            errors.insert(ErrorKind::OneAngle180);
            return false;
        }

        let side = other.side.value() * self.angle.sin() / other.angle.sin();
        if !side.is_finite() || side <= 0.0 {
            return false;
        }

        self.side.set(side);
        true
    }

    /// Law of cosines, solving for this side from the two sides enclosing
    /// this angle
    pub fn deduce_side_from_adjacent_sides(
        &mut self,
        side_b: &Length,
        side_c: &Length,
        errors: &mut ErrorSet,
    ) -> bool {
        if self.angle.is_empty() || side_b.is_empty() || side_c.is_empty() {
            return false;
        }

        if !self.angle.less_than(STRAIGHT_ANGLE) {
            errors.insert(ErrorKind::OneAngle180);
            return false;
        }

        let squared = side_b.squared() + side_c.squared()
            - 2.0 * side_b.value() * side_c.value() * self.angle.cos();
        self.side.set_squared(squared);
        true
    }

    /// Triangle inequality for this side
    ///
    /// Records [`ErrorKind::OneSide`] when this side is at least as long as
    /// the other two together. A side equal to the sum would flatten the
    /// triangle into a line.
    pub fn check_against_other_sides(
        &self,
        side_b: &Length,
        side_c: &Length,
        errors: &mut ErrorSet,
    ) -> bool {
        if self.side.at_least(side_b.plus(side_c)) {
            errors.insert(ErrorKind::OneSide);
            return false;
        }
        true
    }
}

impl fmt::Display for OpposingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Side: {} Angle: {}", self.side, self.angle)
    }
}
