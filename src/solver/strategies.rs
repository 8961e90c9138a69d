//! The four classical solving strategies
//!
//! Callers normally use [`TriangleSolver::solve`], which tries each
//! strategy in priority order and stops at the first success. Each strategy
//! checks whether the known values have its shape, then fills in the
//! missing ones. A failing step ends the strategy, but values written by
//! earlier steps of the same attempt stay in place.

use super::errors::{ErrorKind, ErrorSet};
use super::options::{SolveOptions, Strategy};
use super::pair::PairStatus;
use super::triangle::{TriangleSolver, Vertex};
use crate::constants::{ANGLE_SUM_TOLERANCE, STRAIGHT_ANGLE};
use crate::measure::Angle;
use crate::{Result, TrigsolveError};

/// Angle between two sides, and the sides enclosing it
const SAS_LAYOUTS: [(Vertex, Vertex, Vertex); 3] = [
    (Vertex::A, Vertex::B, Vertex::C),
    (Vertex::A, Vertex::C, Vertex::B),
    (Vertex::B, Vertex::A, Vertex::C),
];

impl TriangleSolver {
    /// Validates and solves using the default [`SolveOptions`]
    ///
    /// Returns the strategy that completed the triangle, or `None` with the
    /// reasons collected in `errors`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trigsolve::solver::{ErrorSet, Strategy, TriangleSolver};
    ///
    /// let mut triangle = TriangleSolver::from_values([(0.0, 3.0), (0.0, 4.0), (0.0, 5.0)]);
    /// let mut errors = ErrorSet::new();
    /// let strategy = triangle.solve(&mut errors).unwrap();
    ///
    /// assert_eq!(strategy, Some(Strategy::Sss));
    /// assert!((triangle.c().angle.degrees() - 90.0).abs() < 1e-9);
    /// ```
    ///
    /// # Errors
    ///
    /// Only internal faults surface as `Err`; invalid input does not.
    pub fn solve(&mut self, errors: &mut ErrorSet) -> Result<Option<Strategy>> {
        self.solve_with(&SolveOptions::default(), errors)
    }

    /// Validates and solves, trying strategies in `options.order`
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::InvalidInput`] before anything is written
    /// when a value is negative or not finite.
    pub fn solve_with(
        &mut self,
        options: &SolveOptions,
        errors: &mut ErrorSet,
    ) -> Result<Option<Strategy>> {
        self.validate_values()?;

        if !self.is_sufficient() {
            log::debug!("not enough values to solve");
            return Ok(None);
        }

        if !self.check_angles(errors) {
            return Ok(None);
        }

        for &strategy in &options.order {
            if self.solve_using(strategy, options, errors)? {
                return Ok(Some(strategy));
            }
        }

        log::debug!("no strategy solved {}", self);
        Ok(None)
    }

    /// Like [`solve`](Self::solve), but an unsolvable triangle is an error
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::Unsolvable`] carrying the collected
    /// messages when every strategy fails.
    pub fn solve_checked(&mut self) -> Result<Strategy> {
        let mut errors = ErrorSet::new();
        self.solve(&mut errors)?
            .ok_or(TrigsolveError::Unsolvable(errors))
    }

    /// Runs one strategy; on success derives the alternate triangle and
    /// records the solved sides as the scaling baseline
    pub fn solve_using(
        &mut self,
        strategy: Strategy,
        options: &SolveOptions,
        errors: &mut ErrorSet,
    ) -> Result<bool> {
        let solved = match strategy {
            Strategy::Ssa => self.ssa_steps(errors)?,
            Strategy::Asa => self.asa_steps(options.nominal_side, errors),
            Strategy::Sas => self.sas_steps(errors)?,
            Strategy::Sss => self.sss_steps(errors)?,
        };

        if solved {
            log::debug!("solved {}", strategy);
            self.derive_alt_triangle(options, errors);
            self.capture_original_sides();
        }
        Ok(solved)
    }

    /// Two sides and a non-included angle
    pub fn solve_ssa(&mut self, errors: &mut ErrorSet) -> Result<bool> {
        self.solve_using(Strategy::Ssa, &SolveOptions::default(), errors)
    }

    /// Two angles and any side; with no side a nominal one is assigned
    pub fn solve_asa(&mut self, errors: &mut ErrorSet) -> Result<bool> {
        self.solve_using(Strategy::Asa, &SolveOptions::default(), errors)
    }

    /// Two sides and the angle between them
    pub fn solve_sas(&mut self, errors: &mut ErrorSet) -> Result<bool> {
        self.solve_using(Strategy::Sas, &SolveOptions::default(), errors)
    }

    /// Three sides
    pub fn solve_sss(&mut self, errors: &mut ErrorSet) -> Result<bool> {
        self.solve_using(Strategy::Sss, &SolveOptions::default(), errors)
    }

    fn sss_steps(&mut self, errors: &mut ErrorSet) -> Result<bool> {
        if self.pairs.iter().any(|p| p.side.is_empty()) {
            return Ok(false);
        }

        let [a, b, c] = self.pairs.map(|p| p.side);
        let [pa, pb, pc] = &mut self.pairs;

        if !(pa.check_against_other_sides(&b, &c, errors)
            && pb.check_against_other_sides(&a, &c, errors)
            && pc.check_against_other_sides(&a, &b, errors))
        {
            return Ok(false);
        }

        Ok(pa.deduce_angle_from_adjacent_sides(&b, &c)?
            && pb.deduce_angle_from_adjacent_sides(&a, &c)?
            && pc.deduce_angle_from_adjacent_sides(&a, &b)?)
    }

    pub(super) fn asa_steps(&mut self, nominal_side: f64, errors: &mut ErrorSet) -> bool {
        if !self.complete_angles(errors) {
            return false;
        }

        if self.pairs.iter().all(|p| p.side.is_empty()) {
            // Angles alone fix the shape but not the size.
            self.pairs[Vertex::C.index()].side.set(nominal_side);
        }

        let Some(known) = Vertex::ALL
            .into_iter()
            .find(|&v| self.status(v) == PairStatus::Both)
        else {
            return false;
        };

        let reference = *self.pair(known);
        let (first, second) = known.others();
        self.pairs[first.index()].deduce_side_from_pair(&reference, errors)
            && self.pairs[second.index()].deduce_side_from_pair(&reference, errors)
    }

    /// Fills in the one missing angle from the other two
    ///
    /// Three known angles are kept as given, but must total 180 degrees.
    fn complete_angles(&mut self, errors: &mut ErrorSet) -> bool {
        if !self.check_angles(errors) {
            return false;
        }

        let angles = self.pairs.map(|p| p.angle);
        let mut missing = Vertex::ALL
            .into_iter()
            .filter(|&v| angles[v.index()].is_empty());

        match (missing.next(), missing.next()) {
            (None, _) => {
                let sum: f64 = angles.iter().map(Angle::degrees).sum();
                if (sum - STRAIGHT_ANGLE).abs() <= ANGLE_SUM_TOLERANCE {
                    true
                } else {
                    errors.insert(ErrorKind::TwoAngle180);
                    false
                }
            }
            (Some(vertex), None) => {
                let (first, second) = vertex.others();
                self.pairs[vertex.index()].deduce_angle_from_others(
                    &angles[first.index()],
                    &angles[second.index()],
                    errors,
                )
            }
            _ => false,
        }
    }

    fn sas_steps(&mut self, errors: &mut ErrorSet) -> Result<bool> {
        for (first, angle, second) in SAS_LAYOUTS {
            if !self.pair(first).side.is_empty()
                && !self.pair(angle).angle.is_empty()
                && !self.pair(second).side.is_empty()
            {
                return self.sas_around(first, angle, second, errors);
            }
        }
        Ok(false)
    }

    fn sas_around(
        &mut self,
        first: Vertex,
        angle: Vertex,
        second: Vertex,
        errors: &mut ErrorSet,
    ) -> Result<bool> {
        let first_side = self.pair(first).side;
        let second_side = self.pair(second).side;

        if !self.pairs[angle.index()].deduce_side_from_adjacent_sides(
            &first_side,
            &second_side,
            errors,
        ) {
            return Ok(false);
        }

        // Only the angle opposite the shorter side is certain to be acute,
        // so it is the one safe to take from asin. The other comes from the
        // angle sum.
        let (shorter, longer) = if first_side <= second_side {
            (first, second)
        } else {
            (second, first)
        };

        let reference = *self.pair(angle);
        if !self.pairs[shorter.index()].deduce_angle_from_pair(&reference, errors)? {
            return Ok(false);
        }

        let shorter_angle = self.pair(shorter).angle;
        Ok(self.pairs[longer.index()].deduce_angle_from_others(
            &reference.angle,
            &shorter_angle,
            errors,
        ))
    }

    /// Locates a complete pair with one side-only and one empty partner
    fn ssa_layout(&self) -> Option<(Vertex, Vertex, Vertex)> {
        Vertex::ALL.into_iter().find_map(|complete| {
            if self.status(complete) != PairStatus::Both {
                return None;
            }
            let (first, second) = complete.others();
            match (self.status(first), self.status(second)) {
                (PairStatus::SideOnly, PairStatus::Neither) => Some((complete, first, second)),
                (PairStatus::Neither, PairStatus::SideOnly) => Some((complete, second, first)),
                _ => None,
            }
        })
    }

    /// The ambiguous case: asin yields its principal value and the
    /// supplementary solution is discarded.
    fn ssa_steps(&mut self, errors: &mut ErrorSet) -> Result<bool> {
        let Some((complete, incomplete, empty)) = self.ssa_layout() else {
            return Ok(false);
        };

        let reference = *self.pair(complete);
        if !self.pairs[incomplete.index()].deduce_angle_from_pair(&reference, errors)? {
            return Ok(false);
        }

        let incomplete_angle = self.pair(incomplete).angle;
        let target = &mut self.pairs[empty.index()];
        Ok(
            target.deduce_angle_from_others(&reference.angle, &incomplete_angle, errors)
                && target.deduce_side_from_pair(&reference, errors),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn angle_sum(triangle: &TriangleSolver) -> f64 {
        triangle.values().iter().map(|(angle, _)| angle).sum()
    }

    #[test]
    fn test_sss_right_triangle() {
        let mut triangle = TriangleSolver::from_values([(0.0, 3.0), (0.0, 4.0), (0.0, 5.0)]);
        let mut errors = ErrorSet::new();
        assert!(triangle.solve_sss(&mut errors).unwrap());

        assert_abs_diff_eq!(triangle.a().angle.degrees(), 36.869_897_645_844, epsilon = 1e-9);
        assert_abs_diff_eq!(triangle.b().angle.degrees(), 53.130_102_354_156, epsilon = 1e-9);
        assert_abs_diff_eq!(triangle.c().angle.degrees(), 90.0, epsilon = 1e-9);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_sss_rejects_long_side() {
        let mut triangle = TriangleSolver::from_values([(0.0, 10.0), (0.0, 3.0), (0.0, 4.0)]);
        let mut errors = ErrorSet::new();
        assert!(!triangle.solve_sss(&mut errors).unwrap());
        assert!(errors.contains(ErrorKind::OneSide));
        assert!(triangle.a().angle.is_empty());
    }

    #[test]
    fn test_sss_needs_three_sides() {
        let mut triangle = TriangleSolver::from_values([(0.0, 3.0), (0.0, 4.0), (90.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert!(!triangle.solve_sss(&mut errors).unwrap());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_asa_with_side() {
        let mut triangle = TriangleSolver::from_values([(50.0, 0.0), (60.0, 0.0), (0.0, 10.0)]);
        let mut errors = ErrorSet::new();
        assert!(triangle.solve_asa(&mut errors).unwrap());

        assert_eq!(triangle.c().angle.degrees(), 70.0);
        let ratio = 10.0 / 70f64.to_radians().sin();
        assert_abs_diff_eq!(triangle.a().side.value(), ratio * 50f64.to_radians().sin(), epsilon = 1e-9);
        assert_abs_diff_eq!(triangle.b().side.value(), ratio * 60f64.to_radians().sin(), epsilon = 1e-9);
    }

    #[test]
    fn test_aas_side_opposite_known_angle() {
        // Side a is opposite a known angle; the third angle is deduced at C.
        let mut triangle = TriangleSolver::from_values([(30.0, 4.0), (45.0, 0.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert!(triangle.solve_asa(&mut errors).unwrap());
        assert_eq!(triangle.c().angle.degrees(), 105.0);
        assert!(triangle.is_complete());
    }

    #[test]
    fn test_asa_deduces_missing_angle_at_a() {
        let mut triangle = TriangleSolver::from_values([(0.0, 0.0), (45.0, 6.0), (45.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert!(triangle.solve_asa(&mut errors).unwrap());
        assert_eq!(triangle.a().angle.degrees(), 90.0);
        assert_abs_diff_eq!(triangle.c().side.value(), 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(triangle.a().side.value(), 6.0 * 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_asa_nominal_side() {
        let mut triangle = TriangleSolver::from_values([(50.0, 0.0), (60.0, 0.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();
        let options = SolveOptions::new().with_nominal_side(1.0);
        assert!(triangle.solve_using(Strategy::Asa, &options, &mut errors).unwrap());
        assert_eq!(triangle.c().side.value(), 1.0);
    }

    #[test]
    fn test_asa_rejects_large_angles() {
        let mut triangle = TriangleSolver::from_values([(100.0, 0.0), (90.0, 5.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert!(!triangle.solve_asa(&mut errors).unwrap());
        assert!(errors.contains(ErrorKind::TwoAngle180));
    }

    #[test]
    fn test_asa_keeps_three_given_angles() {
        let mut triangle = TriangleSolver::from_values([(50.0, 0.0), (60.0, 0.0), (70.0, 10.0)]);
        let mut errors = ErrorSet::new();
        assert_eq!(triangle.solve(&mut errors).unwrap(), Some(Strategy::Asa));
        assert_eq!(triangle.c().angle.degrees(), 70.0);
        assert_abs_diff_eq!(triangle.a().side.value(), 8.152_074_69, epsilon = 1e-6);
    }

    #[test]
    fn test_three_angles_must_total_180() {
        let mut triangle = TriangleSolver::from_values([(50.0, 0.0), (60.0, 0.0), (80.0, 10.0)]);
        let mut errors = ErrorSet::new();
        assert_eq!(triangle.solve(&mut errors).unwrap(), None);
        assert!(errors.contains(ErrorKind::TwoAngle180));
        assert_eq!(triangle.c().angle.degrees(), 80.0);
        assert!(triangle.a().side.is_empty());
    }

    #[rstest]
    #[case([(-30.0, 0.0), (60.0, 0.0), (0.0, 0.0)])]
    #[case([(30.0, 0.0), (60.0, -4.0), (0.0, 0.0)])]
    #[case([(f64::NAN, 3.0), (0.0, 4.0), (0.0, 5.0)])]
    #[case([(0.0, 3.0), (0.0, f64::INFINITY), (0.0, 5.0)])]
    fn test_solve_rejects_negative_or_non_finite(#[case] values: [(f64, f64); 3]) {
        let mut triangle = TriangleSolver::from_values(values);
        let before = triangle.values();
        let mut errors = ErrorSet::new();

        assert!(matches!(
            triangle.solve(&mut errors),
            Err(TrigsolveError::InvalidInput(_))
        ));
        assert!(errors.is_empty());
        assert_eq!(format!("{:?}", triangle.values()), format!("{:?}", before));
    }

    #[test]
    fn test_failed_step_keeps_earlier_writes() {
        // SSA finds B, then no room is left for C.
        let mut triangle = TriangleSolver::from_values([(120.0, 10.0), (0.0, 11.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();

        assert_eq!(triangle.solve(&mut errors).unwrap(), None);
        assert!(errors.contains(ErrorKind::TwoAngle180));
        assert_abs_diff_eq!(triangle.b().angle.degrees(), 72.293_680_94, epsilon = 1e-6);
        assert!(triangle.c().angle.is_empty());
        assert!(triangle.c().side.is_empty());
    }

    #[rstest]
    #[case([(0.0, 5.0), (60.0, 0.0), (0.0, 5.0)])]
    #[case([(0.0, 5.0), (0.0, 5.0), (60.0, 0.0)])]
    #[case([(60.0, 0.0), (0.0, 5.0), (0.0, 5.0)])]
    fn test_sas_equilateral(#[case] values: [(f64, f64); 3]) {
        let mut triangle = TriangleSolver::from_values(values);
        let mut errors = ErrorSet::new();
        assert!(triangle.solve_sas(&mut errors).unwrap());

        for (angle, side) in triangle.values() {
            assert_abs_diff_eq!(angle, 60.0, epsilon = 1e-9);
            assert_abs_diff_eq!(side, 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sas_obtuse_angle_opposite_longer_side() {
        // b = 50 and a = 15 enclose C = 60; A is acute, B is obtuse.
        let mut triangle = TriangleSolver::from_values([(0.0, 15.0), (0.0, 50.0), (60.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert!(triangle.solve_sas(&mut errors).unwrap());

        assert!(triangle.b().angle.greater_than(90.0));
        assert_abs_diff_eq!(angle_sum(&triangle), 180.0, epsilon = 1e-9);

        // Cross-check side c with the law of sines.
        let (a, c) = (triangle.a(), triangle.c());
        assert_abs_diff_eq!(
            a.side.value() / a.angle.sin(),
            c.side.value() / c.angle.sin(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sas_rejects_straight_angle() {
        let mut triangle = TriangleSolver::from_values([(0.0, 5.0), (180.0, 0.0), (0.0, 5.0)]);
        let mut errors = ErrorSet::new();
        assert!(!triangle.solve_sas(&mut errors).unwrap());
        assert!(errors.contains(ErrorKind::OneAngle180));
    }

    #[test]
    fn test_ssa_principal_solution() {
        let mut triangle = TriangleSolver::from_values([(35.0, 7.0), (0.0, 10.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert!(triangle.solve_ssa(&mut errors).unwrap());

        let expected_b = (10.0 * 35f64.to_radians().sin() / 7.0).asin().to_degrees();
        assert_abs_diff_eq!(triangle.b().angle.degrees(), expected_b, epsilon = 1e-9);
        assert!(triangle.b().angle.less_than(90.0));
        assert_abs_diff_eq!(triangle.c().angle.degrees(), 180.0 - 35.0 - expected_b, epsilon = 1e-9);
    }

    #[test]
    fn test_ssa_without_intersection() {
        let mut triangle = TriangleSolver::from_values([(60.0, 2.0), (0.0, 10.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert!(!triangle.solve_ssa(&mut errors).unwrap());
        assert!(errors.contains(ErrorKind::AngleTooLarge));
        assert!(triangle.c().side.is_empty());
    }

    #[test]
    fn test_ssa_with_complete_pair_at_c() {
        let mut triangle = TriangleSolver::from_values([(0.0, 0.0), (0.0, 4.0), (90.0, 5.0)]);
        let mut errors = ErrorSet::new();
        assert!(triangle.solve_ssa(&mut errors).unwrap());
        assert_abs_diff_eq!(triangle.a().side.value(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ssa_ignores_included_angle() {
        let mut triangle = TriangleSolver::from_values([(0.0, 5.0), (60.0, 0.0), (0.0, 5.0)]);
        let mut errors = ErrorSet::new();
        assert!(!triangle.solve_ssa(&mut errors).unwrap());
        assert!(errors.is_empty());
    }

    #[rstest]
    #[case([(0.0, 3.0), (0.0, 4.0), (0.0, 5.0)], Strategy::Sss)]
    #[case([(0.0, 5.0), (60.0, 0.0), (0.0, 5.0)], Strategy::Sas)]
    #[case([(50.0, 0.0), (60.0, 0.0), (0.0, 0.0)], Strategy::Asa)]
    #[case([(35.0, 7.0), (0.0, 10.0), (0.0, 0.0)], Strategy::Ssa)]
    #[case([(30.0, 4.0), (45.0, 0.0), (0.0, 0.0)], Strategy::Asa)]
    fn test_solve_picks_strategy(#[case] values: [(f64, f64); 3], #[case] expected: Strategy) {
        let mut triangle = TriangleSolver::from_values(values);
        let mut errors = ErrorSet::new();
        assert_eq!(triangle.solve(&mut errors).unwrap(), Some(expected));
        assert!(triangle.is_complete());
        assert_abs_diff_eq!(angle_sum(&triangle), 180.0, epsilon = 1e-9);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_solve_insufficient_input() {
        let mut triangle = TriangleSolver::from_values([(40.0, 3.0), (0.0, 0.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert_eq!(triangle.solve(&mut errors).unwrap(), None);
        assert!(errors.is_empty());
        assert_eq!(triangle.values(), [(40.0, 3.0), (0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_solve_rejects_straight_angle_up_front() {
        let mut triangle = TriangleSolver::from_values([(190.0, 3.0), (0.0, 4.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();
        assert_eq!(triangle.solve(&mut errors).unwrap(), None);
        assert!(errors.contains(ErrorKind::OneAngle180));
    }

    #[test]
    fn test_solve_collects_messages() {
        let mut triangle = TriangleSolver::from_values([(0.0, 10.0), (0.0, 3.0), (0.0, 4.0)]);
        let mut errors = ErrorSet::new();
        assert_eq!(triangle.solve(&mut errors).unwrap(), None);
        assert_eq!(errors.messages(), ["One side cannot be longer than the other two sides."]);
    }

    #[test]
    fn test_solve_checked_reports_unsolvable() {
        let mut triangle = TriangleSolver::from_values([(60.0, 2.0), (0.0, 10.0), (0.0, 0.0)]);
        match triangle.solve_checked() {
            Err(TrigsolveError::Unsolvable(errors)) => {
                assert!(errors.contains(ErrorKind::AngleTooLarge))
            }
            other => panic!("expected unsolvable, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_order() {
        let mut triangle = TriangleSolver::from_values([(0.0, 3.0), (0.0, 4.0), (0.0, 5.0)]);
        let mut errors = ErrorSet::new();
        let options = SolveOptions::new().with_order([Strategy::Sas, Strategy::Asa]);
        assert_eq!(triangle.solve_with(&options, &mut errors).unwrap(), None);
    }

    #[test]
    fn test_solve_records_baseline() {
        let mut triangle = TriangleSolver::from_values([(50.0, 0.0), (60.0, 0.0), (0.0, 0.0)]);
        let mut errors = ErrorSet::new();
        triangle.solve(&mut errors).unwrap();
        assert_eq!(
            triangle.original_sides(),
            triangle.values().map(|(_, side)| side)
        );
    }
}
