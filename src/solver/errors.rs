//! Validation messages for the solver
//!
//! Invalid user input is an expected outcome, not a fault. Each failed
//! deduction records one [`ErrorKind`] into a caller-owned [`ErrorSet`],
//! which keeps every kind at most once.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reason a deduction rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A single known angle is 180 degrees or more
    OneAngle180,
    /// Two known angles total 180 degrees or more
    TwoAngle180,
    /// A known side is at least as long as the other two combined
    OneSide,
    /// The law of sines has no solution for the requested angle
    AngleTooLarge,
}

impl ErrorKind {
    /// User-facing message for this kind
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::OneAngle180 => "One angle cannot be greater than 180 degrees.",
            ErrorKind::TwoAngle180 => "Two angles cannot total greater than 180 degrees.",
            ErrorKind::OneSide => "One side cannot be longer than the other two sides.",
            ErrorKind::AngleTooLarge => "Angle is too large. No intersection could be found.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Duplicate-free collection of [`ErrorKind`]s for one solve attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSet {
    kinds: BTreeSet<ErrorKind>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a kind; returns `false` if it was already present
    pub fn insert(&mut self, kind: ErrorKind) -> bool {
        log::trace!("recorded {:?}", kind);
        self.kinds.insert(kind)
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    pub fn iter(&self) -> btree_set::Iter<'_, ErrorKind> {
        self.kinds.iter()
    }

    /// Message text for every recorded kind
    pub fn messages(&self) -> Vec<&'static str> {
        self.kinds.iter().map(ErrorKind::message).collect()
    }

    /// All messages joined with `separator`, for a single aggregated warning
    pub fn joined(&self, separator: &str) -> String {
        self.messages().join(separator)
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined(" "))
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a ErrorKind;
    type IntoIter = btree_set::Iter<'a, ErrorKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinds.iter()
    }
}

impl FromIterator<ErrorKind> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = ErrorKind>>(iter: I) -> Self {
        ErrorSet {
            kinds: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates() {
        let mut errors = ErrorSet::new();
        assert!(errors.insert(ErrorKind::OneSide));
        assert!(!errors.insert(ErrorKind::OneSide));
        assert!(errors.insert(ErrorKind::AngleTooLarge));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(ErrorKind::OneSide));
        assert!(!errors.contains(ErrorKind::TwoAngle180));
    }

    #[test]
    fn test_joined_messages_are_ordered() {
        let errors: ErrorSet = [ErrorKind::AngleTooLarge, ErrorKind::OneAngle180]
            .into_iter()
            .collect();
        assert_eq!(
            errors.joined("\n"),
            "One angle cannot be greater than 180 degrees.\n\
             Angle is too large. No intersection could be found."
        );
    }

    #[test]
    fn test_clear() {
        let mut errors = ErrorSet::new();
        errors.insert(ErrorKind::TwoAngle180);
        errors.clear();
        assert!(errors.is_empty());
        assert_eq!(errors.joined("\n"), "");
    }
}
