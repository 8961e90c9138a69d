//! Raw input handling for the six angle and side slots
//!
//! A front end collects text for each slot, converts it with
//! [`parse_slot`] or [`parse_slot_strict`], and can use [`RecentSlots`] to
//! keep only the three values the user entered most recently, which is
//! exactly enough to define a triangle.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::solver::TriangleSolver;
use crate::{Result, TrigsolveError};

/// One of the six input slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    AngleA,
    SideA,
    AngleB,
    SideB,
    AngleC,
    SideC,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::AngleA,
        Slot::SideA,
        Slot::AngleB,
        Slot::SideB,
        Slot::AngleC,
        Slot::SideC,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Numeric values for all six slots; zero means empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotValues([f64; 6]);

impl SlotValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values as `(angle, side)` for A, B and C
    pub fn pairs(&self) -> [(f64, f64); 3] {
        let v = self.0;
        [(v[0], v[1]), (v[2], v[3]), (v[4], v[5])]
    }

    pub fn from_pairs(pairs: [(f64, f64); 3]) -> Self {
        let [(aa, sa), (ab, sb), (ac, sc)] = pairs;
        SlotValues([aa, sa, ab, sb, ac, sc])
    }

    /// Number of slots holding a value
    pub fn filled(&self) -> usize {
        self.0.iter().filter(|&&v| v != 0.0).count()
    }
}

impl Index<Slot> for SlotValues {
    type Output = f64;

    fn index(&self, slot: Slot) -> &f64 {
        &self.0[slot.index()]
    }
}

impl IndexMut<Slot> for SlotValues {
    fn index_mut(&mut self, slot: Slot) -> &mut f64 {
        &mut self.0[slot.index()]
    }
}

impl From<SlotValues> for TriangleSolver {
    fn from(values: SlotValues) -> Self {
        TriangleSolver::from_values(values.pairs())
    }
}

impl From<&TriangleSolver> for SlotValues {
    fn from(triangle: &TriangleSolver) -> Self {
        SlotValues::from_pairs(triangle.values())
    }
}

/// Converts slot text to a number; blank or unreadable text is empty
pub fn parse_slot(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Converts slot text to a number, rejecting anything that is not a
/// finite, non-negative number
///
/// # Errors
///
/// Returns [`TrigsolveError::InvalidInput`] naming the offending text.
pub fn parse_slot_strict(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(TrigsolveError::InvalidInput(format!(
            "'{}' is not a non-negative number",
            trimmed
        ))),
    }
}

/// Slots ordered from most to least recently entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSlots {
    order: Vec<Slot>,
}

impl Default for RecentSlots {
    /// Starts with angles A and B and side c in front, an ASA set
    fn default() -> Self {
        Self {
            order: vec![
                Slot::AngleA,
                Slot::AngleB,
                Slot::SideC,
                Slot::SideA,
                Slot::SideB,
                Slot::AngleC,
            ],
        }
    }
}

impl RecentSlots {
    /// Number of slots kept when solving
    pub const RETAINED: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Notes that `slot` was edited to `value`
    ///
    /// A positive value moves the slot to the front; anything else sends
    /// it to the back.
    pub fn touch(&mut self, slot: Slot, value: f64) {
        self.order.retain(|&s| s != slot);
        if value > 0.0 {
            self.order.insert(0, slot);
        } else {
            self.order.push(slot);
        }
    }

    /// Slots from most to least recent
    pub fn order(&self) -> &[Slot] {
        &self.order
    }

    /// The slots kept when solving
    pub fn retained(&self) -> &[Slot] {
        &self.order[..Self::RETAINED]
    }

    /// Empties every slot outside the most recent three
    pub fn apply(&self, values: &mut SlotValues) {
        for &slot in &self.order[Self::RETAINED..] {
            values[slot] = 0.0;
        }
    }
}
