//! Synthetic triangle generator
//!
//! Produces reproducible batches of valid triangles for property tests and
//! benchmarks. Sides are drawn uniformly from a range; draws that violate
//! the triangle inequality by less than a small margin are rejected so that
//! no generated triangle is close to flat.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::solver::{ErrorSet, TriangleSolver};
use crate::{Result, TrigsolveError};

/// Configuration for synthetic triangle generation
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticTriangleConfig {
    /// Number of triangles to generate
    pub count: usize,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Shortest side that may be drawn
    pub min_side: f64,
    /// Longest side that may be drawn
    pub max_side: f64,
    /// Fraction of the two shorter sides the longest must stay below
    pub flatness_margin: f64,
}

impl Default for SyntheticTriangleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 42,
            min_side: 1.0,
            max_side: 100.0,
            flatness_margin: 0.01,
        }
    }
}

impl SyntheticTriangleConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of triangles to generate
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the range sides are drawn from
    pub fn with_side_range(mut self, min: f64, max: f64) -> Self {
        self.min_side = min;
        self.max_side = max;
        self
    }

    /// Generate side triples `[a, b, c]` that form valid triangles
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::InvalidInput`] for an empty or negative
    /// side range.
    pub fn generate(&self) -> Result<Vec<[f64; 3]>> {
        if !(self.min_side > 0.0 && self.min_side < self.max_side) {
            return Err(TrigsolveError::InvalidInput(format!(
                "side range {}..{} is empty",
                self.min_side, self.max_side
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let dist = Uniform::new(self.min_side, self.max_side);
        let mut triples = Vec::with_capacity(self.count);

        while triples.len() < self.count {
            let sides = [dist.sample(&mut rng), dist.sample(&mut rng), dist.sample(&mut rng)];
            if self.is_comfortably_valid(&sides) {
                triples.push(sides);
            }
        }

        Ok(triples)
    }

    /// Generate triangles and solve each from its three sides
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::Unsolvable`] if any generated triple fails
    /// to solve, which a negative flatness margin allows.
    pub fn solved(&self) -> Result<Vec<TriangleSolver>> {
        self.generate()?
            .into_iter()
            .map(|[a, b, c]| {
                let mut triangle = TriangleSolver::from_values([(0.0, a), (0.0, b), (0.0, c)]);
                let mut errors = ErrorSet::new();
                if triangle.solve_sss(&mut errors)? {
                    Ok(triangle)
                } else {
                    Err(TrigsolveError::Unsolvable(errors))
                }
            })
            .collect()
    }

    fn is_comfortably_valid(&self, sides: &[f64; 3]) -> bool {
        let mut sorted = *sides;
        sorted.sort_by(f64::total_cmp);
        sorted[2] < (sorted[0] + sorted[1]) * (1.0 - self.flatness_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ErrorKind;

    #[test]
    fn test_generation_is_reproducible() {
        let config = SyntheticTriangleConfig::new().with_count(20).with_seed(7);
        assert_eq!(config.generate().unwrap(), config.generate().unwrap());

        let other = config.clone().with_seed(8);
        assert_ne!(config.generate().unwrap(), other.generate().unwrap());
    }

    #[test]
    fn test_generated_sides_in_range() {
        let config = SyntheticTriangleConfig::new()
            .with_count(50)
            .with_side_range(2.0, 3.0);
        for sides in config.generate().unwrap() {
            assert!(sides.iter().all(|&s| (2.0..3.0).contains(&s)));
        }
    }

    #[test]
    fn test_solved_triangles_are_complete() {
        let triangles = SyntheticTriangleConfig::new().with_count(25).solved().unwrap();
        assert_eq!(triangles.len(), 25);
        assert!(triangles.iter().all(TriangleSolver::is_complete));
    }

    #[test]
    fn test_flat_draws_are_reported_unsolvable() {
        // A negative margin admits triples that break the triangle inequality.
        let config = SyntheticTriangleConfig {
            flatness_margin: -1.0,
            ..SyntheticTriangleConfig::new().with_count(200)
        };
        assert!(matches!(
            config.solved(),
            Err(TrigsolveError::Unsolvable(errors)) if errors.contains(ErrorKind::OneSide)
        ));
    }

    #[test]
    fn test_rejects_empty_range() {
        let config = SyntheticTriangleConfig::new().with_side_range(5.0, 5.0);
        assert!(matches!(
            config.generate(),
            Err(TrigsolveError::InvalidInput(_))
        ));
    }
}
