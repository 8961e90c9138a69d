//! # Angle Representation Module
//!
//! An [`Angle`] holds one vertex angle of a triangle. The value is kept in
//! degrees together with its radian view, and both views are refreshed
//! whenever either one is set, so the trigonometric code can read radians
//! without converting on every call.
//!
//! ## Empty angles
//!
//! An angle is either known or empty. Setting an angle to exactly zero
//! leaves it empty: a triangle never has a zero-degree vertex, so a literal
//! `0` from user input and "not supplied" mean the same thing here.
//!
//! ## Examples
//!
//! ```rust
//! use trigsolve::measure::Angle;
//!
//! let angle = Angle::from_degrees(90.0);
//! assert_eq!(angle.degrees(), 90.0);
//! assert!((angle.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//!
//! assert!(Angle::from_degrees(0.0).is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::constants::{DEG2RAD, DISPLAY_PRECISION, RAD2DEG, RIGHT_ANGLE, STRAIGHT_ANGLE};
use crate::{Result, TrigsolveError};

/// Both views of a known angle
#[derive(Debug, Clone, Copy)]
struct Views {
    degrees: f64,
    radians: f64,
}

/// A vertex angle that may be empty
///
/// Equality and ordering compare the degree value, with an empty angle
/// comparing as zero degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Angle {
    views: Option<Views>,
}

impl Angle {
    /// Creates an empty angle
    pub fn empty() -> Self {
        Angle { views: None }
    }

    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trigsolve::measure::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.get(), Some(90.0));
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        let mut angle = Angle::empty();
        angle.set_degrees(degrees);
        angle
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        let mut angle = Angle::empty();
        angle.set_radians(radians);
        angle
    }

    /// Sets the angle in degrees and refreshes the radian view
    pub fn set_degrees(&mut self, degrees: f64) {
        self.views = (degrees != 0.0).then(|| Views {
            degrees,
            radians: degrees * DEG2RAD,
        });
    }

    /// Sets the angle in radians and refreshes the degree view
    pub fn set_radians(&mut self, radians: f64) {
        self.views = (radians != 0.0).then(|| Views {
            degrees: radians * RAD2DEG,
            radians,
        });
    }

    /// Returns the angle in degrees, or `0.0` when empty
    pub fn degrees(&self) -> f64 {
        self.views.map_or(0.0, |v| v.degrees)
    }

    /// Returns the angle in radians, or `0.0` when empty
    pub fn radians(&self) -> f64 {
        self.views.map_or(0.0, |v| v.radians)
    }

    /// Returns the angle in degrees if it is known
    pub fn get(&self) -> Option<f64> {
        self.views.map(|v| v.degrees)
    }

    /// Whether the angle is unknown
    pub fn is_empty(&self) -> bool {
        self.views.is_none()
    }

    /// Resets the angle to empty
    pub fn clear(&mut self) {
        self.views = None;
    }

    /// Sine of the angle
    pub fn sin(&self) -> f64 {
        self.radians().sin()
    }

    /// Cosine of the angle
    pub fn cos(&self) -> f64 {
        self.radians().cos()
    }

    /// Sum of two angles in degrees
    pub fn add_degrees(&self, other: &Angle) -> f64 {
        self.degrees() + other.degrees()
    }

    /// Whether this angle is smaller than `degrees`
    pub fn less_than(&self, degrees: f64) -> bool {
        self.degrees() < degrees
    }

    /// Whether this angle is larger than `degrees`
    pub fn greater_than(&self, degrees: f64) -> bool {
        self.degrees() > degrees
    }

    /// Whether the angle lies strictly between 0 and 180 degrees
    pub fn is_interior(&self) -> bool {
        self.greater_than(0.0) && self.less_than(STRAIGHT_ANGLE)
    }

    /// Whether the angle is within `tolerance` degrees of a right angle
    pub fn is_right(&self, tolerance: f64) -> bool {
        !self.is_empty() && (self.degrees() - RIGHT_ANGLE).abs() <= tolerance
    }

    /// Divides this angle by another, in degrees
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::DivideByZero`] when `divisor` is empty.
    pub fn checked_div(&self, divisor: &Angle) -> Result<f64> {
        divisor.div_into(self.degrees())
    }

    /// Computes `numerator / self` in degrees
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::DivideByZero`] when this angle is empty.
    pub fn div_into(&self, numerator: f64) -> Result<f64> {
        match self.get() {
            Some(degrees) => Ok(numerator / degrees),
            None => Err(TrigsolveError::DivideByZero { what: "Angle" }),
        }
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.degrees() == other.degrees()
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.degrees().partial_cmp(&other.degrees())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", DISPLAY_PRECISION, self.degrees())
    }
}
