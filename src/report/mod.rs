//! Plain snapshots of a solve for printing or JSON output

use serde::{Deserialize, Serialize};

use crate::layout::Extents;
use crate::solver::{ErrorSet, Strategy, TriangleSolver};
use crate::Result;

/// One angle and its opposite side; empty values are 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    pub angle: f64,
    pub side: f64,
}

/// Outcome of one solve attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleReport {
    pub solved: bool,
    pub strategy: Option<Strategy>,
    pub pairs: [PairReport; 3],
    pub alt: Option<[PairReport; 3]>,
    pub extents: Option<Extents>,
    pub messages: Vec<String>,
}

fn pair_reports(triangle: &TriangleSolver) -> [PairReport; 3] {
    triangle
        .values()
        .map(|(angle, side)| PairReport { angle, side })
}

impl TriangleReport {
    pub fn new(triangle: &TriangleSolver, strategy: Option<Strategy>, errors: &ErrorSet) -> Self {
        Self {
            solved: strategy.is_some(),
            strategy,
            pairs: pair_reports(triangle),
            alt: triangle.alt_triangle().map(pair_reports),
            extents: Extents::of(triangle),
            messages: errors.messages().into_iter().map(String::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_of_solved_triangle() {
        let mut triangle = TriangleSolver::from_values([(0.0, 3.0), (0.0, 4.0), (0.0, 5.0)]);
        let mut errors = ErrorSet::new();
        let strategy = triangle.solve(&mut errors).unwrap();

        let report = TriangleReport::new(&triangle, strategy, &errors);
        assert!(report.solved);
        assert_eq!(report.strategy, Some(Strategy::Sss));
        assert_eq!(report.pairs[2].side, 5.0);
        assert!(report.extents.is_some());
        assert!(report.messages.is_empty());

        let json = report.to_json().unwrap();
        assert!(json.contains("\"strategy\": \"Sss\""));
        let parsed: TriangleReport = serde_json::from_str(&json).unwrap();
        assert!(parsed.solved);
        assert_eq!(parsed.pairs[0].side, 3.0);
    }

    #[test]
    fn test_report_of_failed_triangle() {
        let mut triangle = TriangleSolver::from_values([(0.0, 10.0), (0.0, 3.0), (0.0, 4.0)]);
        let mut errors = ErrorSet::new();
        let strategy = triangle.solve(&mut errors).unwrap();

        let report = TriangleReport::new(&triangle, strategy, &errors);
        assert!(!report.solved);
        assert_eq!(report.alt, None);
        assert_eq!(report.extents, None);
        assert_eq!(
            report.messages,
            vec!["One side cannot be longer than the other two sides.".to_string()]
        );
    }
}
