//! Side lengths with an empty state and a squared view

use std::cmp::Ordering;
use std::fmt;

use crate::constants::DISPLAY_PRECISION;
use crate::{Result, TrigsolveError};

/// A side length that may be empty
///
/// Like [`Angle`](super::Angle), a zero value is treated as "not known".
#[derive(Debug, Clone, Copy, Default)]
pub struct Length {
    value: Option<f64>,
}

impl Length {
    /// Creates an empty length
    pub fn empty() -> Self {
        Length { value: None }
    }

    /// Creates a length; zero yields an empty length
    pub fn new(value: f64) -> Self {
        let mut length = Length::empty();
        length.set(value);
        length
    }

    /// Replaces the value
    pub fn set(&mut self, value: f64) {
        self.value = (value != 0.0).then_some(value);
    }

    /// Returns the value, or `0.0` when empty
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Returns the value if it is known
    pub fn get(&self) -> Option<f64> {
        self.value
    }

    /// The value raised to the power of two
    pub fn squared(&self) -> f64 {
        self.value().powi(2)
    }

    /// Sets the length from its square
    pub fn set_squared(&mut self, squared: f64) {
        self.set(squared.sqrt());
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Sum of two lengths
    pub fn plus(&self, other: &Length) -> f64 {
        self.value() + other.value()
    }

    /// Whether this length is at least as long as `other`
    pub fn at_least(&self, other: f64) -> bool {
        self.value() >= other
    }

    /// Divides this length by another
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::DivideByZero`] when `divisor` is empty.
    pub fn checked_div(&self, divisor: &Length) -> Result<f64> {
        divisor.div_into(self.value())
    }

    /// Computes `numerator / self`
    ///
    /// # Errors
    ///
    /// Returns [`TrigsolveError::DivideByZero`] when this length is empty.
    pub fn div_into(&self, numerator: f64) -> Result<f64> {
        match self.value {
            Some(value) => Ok(numerator / value),
            None => Err(TrigsolveError::DivideByZero { what: "Length" }),
        }
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", DISPLAY_PRECISION, self.value())
    }
}
