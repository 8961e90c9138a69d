//! Constants module for triangle calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// A right angle in degrees
pub const RIGHT_ANGLE: f64 = 90.0;
/// A straight angle in degrees; also the interior angle sum of a triangle
pub const STRAIGHT_ANGLE: f64 = 180.0;

// Solving defaults
/// Side length assigned when only angles are known (scale is unconstrained)
pub const NOMINAL_SIDE: f64 = 100.0;
/// Distance from 90 degrees, in degrees, still treated as a right angle
pub const RIGHT_ANGLE_TOLERANCE: f64 = 1e-9;
/// Allowed distance from 180 degrees when all three angles are given
pub const ANGLE_SUM_TOLERANCE: f64 = 1e-9;

// Presentation
/// Decimal places used when formatting solved values
pub const DISPLAY_PRECISION: usize = 2;
/// Inset kept clear on each edge of a workarea when fitting a triangle
pub const DEFAULT_INSET: f64 = 30.0;
