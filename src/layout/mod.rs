//! Extents of a solved triangle and the factor that fits it into a region
//!
//! Side c is laid along the bottom edge. The height comes from the side
//! standing on the base when A or B is a right angle, and from the
//! alternate triangle otherwise. When A or B is obtuse the apex overhangs
//! the base, and the overhang is added to the width.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INSET, RIGHT_ANGLE};
use crate::solver::TriangleSolver;
use crate::Result;

/// Bounding width and height of a solved triangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub width: f64,
    pub height: f64,
}

impl Extents {
    /// Measures a complete triangle; `None` until it is solved
    ///
    /// Right angles are judged with the tolerance the triangle was solved
    /// with, so the result agrees with whether it has an alternate triangle.
    pub fn of(triangle: &TriangleSolver) -> Option<Extents> {
        Self::with_tolerance(triangle, triangle.right_angle_tolerance())
    }

    /// Like [`of`](Self::of), with an explicit right-angle tolerance
    pub fn with_tolerance(triangle: &TriangleSolver, tolerance: f64) -> Option<Extents> {
        if !triangle.is_complete() {
            return None;
        }

        let (a, b, c) = (triangle.a(), triangle.b(), triangle.c());
        let base = c.side.value();

        if a.angle.is_right(tolerance) {
            return Some(Extents {
                width: base,
                height: b.side.value(),
            });
        }
        if b.angle.is_right(tolerance) {
            return Some(Extents {
                width: base,
                height: a.side.value(),
            });
        }

        let alt = triangle.alt_triangle();
        let height = alt.map_or(0.0, |alt| alt.b().side.value());
        let overhang = alt.map_or(0.0, |alt| alt.c().side.value());

        if !a.angle.greater_than(RIGHT_ANGLE) && !b.angle.greater_than(RIGHT_ANGLE) {
            Some(Extents {
                width: base,
                height,
            })
        } else {
            Some(Extents {
                width: base + overhang,
                height,
            })
        }
    }
}

/// A rectangular region a triangle is fitted into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workarea {
    pub width: f64,
    pub height: f64,
    /// Margin kept clear on every edge
    pub inset: f64,
}

impl Workarea {
    /// Create a workarea with the default inset
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            inset: DEFAULT_INSET,
        }
    }

    /// Set the inset kept clear on each edge
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    pub fn available_width(&self) -> f64 {
        self.width - 2.0 * self.inset
    }

    pub fn available_height(&self) -> f64 {
        self.height - 2.0 * self.inset
    }

    /// Largest factor at which `extents` still fits inside the inset
    ///
    /// `None` when the extents are degenerate or no space is left.
    pub fn fit_factor(&self, extents: &Extents) -> Option<f64> {
        let (width, height) = (self.available_width(), self.available_height());
        if width <= 0.0 || height <= 0.0 || extents.width <= 0.0 || extents.height <= 0.0 {
            return None;
        }
        Some((width / extents.width).min(height / extents.height))
    }

    /// Copy of `triangle` scaled to fit this workarea
    ///
    /// The copy's baseline is the triangle's current sides, so calling this
    /// again after a resize starts from the same lengths.
    pub fn fit(&self, triangle: &TriangleSolver) -> Result<Option<TriangleSolver>> {
        let Some(factor) = Extents::of(triangle).and_then(|e| self.fit_factor(&e)) else {
            return Ok(None);
        };

        log::debug!(
            "fit factor {} for {}x{} workarea",
            factor,
            self.width,
            self.height
        );
        let mut copy = triangle.snapshot();
        copy.scale(factor)?;
        Ok(Some(copy))
    }
}
