//! The nine literal corrections of the fine-tuned table
//!
//! These entries deviate by one from the generated value and follow no known
//! rule. They are kept as data.

use crate::domain::{cell_index, nibble, normalize};
use serde::Serialize;

/// A fixed ±1 adjustment of one Protracker cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub note: u8,
    pub tune: i8,
    pub delta: i8,
}

impl Correction {
    const fn new(note: u8, tune: i8, delta: i8) -> Self {
        Self { note, tune, delta }
    }

    /// Normalized (note2, tune2) shared by the corrected cell and its mirror
    pub fn mirror(&self) -> (u8, u8) {
        normalize(self.note, self.tune)
    }

    /// Row of the corrected cell in the bulk tables
    pub fn row(&self) -> usize {
        nibble(self.tune)
    }

    /// Slot of the corrected cell in a row-major [16][36] layout
    pub fn index(&self) -> usize {
        cell_index(self.note, self.tune)
    }

    /// Apply the delta to a rounded period
    pub fn apply(&self, period: u16) -> u16 {
        period.wrapping_add_signed(self.delta as i16)
    }
}

/// Corrections in Protracker table order
pub const CORRECTIONS: [Correction; 9] = [
    Correction::new(4, 1, -1),
    Correction::new(22, 1, 1),
    Correction::new(24, 1, 1),
    Correction::new(23, 2, 1),
    Correction::new(9, 4, 1),
    Correction::new(24, 7, 1),
    Correction::new(6, -7, -1),
    Correction::new(26, -7, -1),
    Correction::new(34, -4, -1),
];

/// Correction for a cell, if it is one of the nine
pub fn correction(note: u8, tune: i8) -> Option<Correction> {
    CORRECTIONS
        .into_iter()
        .find(|c| c.note == note && c.tune == tune)
}

/// Delta applied to a cell (zero for all but nine cells)
pub fn correction_delta(note: u8, tune: i8) -> i8 {
    correction(note, tune).map_or(0, |c| c.delta)
}

/// Whether a normalized (note2, tune2) pair is one of the nine mirror pairs
pub fn is_mystery_pair(note2: u8, tune2: u8) -> bool {
    CORRECTIONS.iter().any(|c| c.mirror() == (note2, tune2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_pairs() {
        let pairs: Vec<(u8, u8)> = CORRECTIONS.iter().map(Correction::mirror).collect();
        assert_eq!(
            pairs,
            vec![(5, 1), (23, 1), (25, 1), (24, 2), (10, 4), (25, 7), (6, 1), (26, 1), (34, 4)]
        );
    }

    #[test]
    fn test_packed_indices() {
        let indices: Vec<usize> = CORRECTIONS.iter().map(Correction::index).collect();
        assert_eq!(indices, vec![40, 58, 60, 95, 153, 276, 330, 350, 466]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(correction_delta(4, 1), -1);
        assert_eq!(correction_delta(9, 4), 1);
        assert_eq!(correction_delta(34, -4), -1);
        // Mirror cell of (4, 1) is not corrected itself
        assert_eq!(correction_delta(5, -7), 0);
        assert_eq!(correction_delta(0, 0), 0);
        assert!(correction(24, 7).is_some());
        assert!(correction(24, 6).is_none());
    }

    #[test]
    fn test_apply() {
        assert_eq!(CORRECTIONS[0].apply(675), 674);
        assert_eq!(CORRECTIONS[1].apply(238), 239);
    }

    #[test]
    fn test_mystery_pairs() {
        assert!(is_mystery_pair(5, 1));
        assert!(is_mystery_pair(34, 4));
        assert!(!is_mystery_pair(5, 2));
        assert!(!is_mystery_pair(0, 0));
    }
}
