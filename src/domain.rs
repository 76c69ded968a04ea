//! Note and fine-tune domain of the period table

use crate::constants::{NOTE_COUNT, TUNE_STEPS};
use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// Valid note indices (note 0 = lowest C)
pub const NOTES: RangeInclusive<u8> = 0..=35;

/// Valid fine-tune values, in ascending pitch order
pub const TUNES: RangeInclusive<i8> = -8..=7;

/// Fine-tune value stored in each table row (Protracker row order)
pub const ROW_TUNES: [i8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, -8, -7, -6, -5, -4, -3, -2, -1];

/// Validate a note index
pub fn check_note(note: i32) -> Result<u8> {
    u8::try_from(note)
        .ok()
        .filter(|n| NOTES.contains(n))
        .ok_or(Error::NoteOutOfRange(note))
}

/// Validate a fine-tune value
pub fn check_tune(tune: i32) -> Result<i8> {
    i8::try_from(tune)
        .ok()
        .filter(|t| TUNES.contains(t))
        .ok_or(Error::TuneOutOfRange(tune))
}

/// Convert a MOD sample finetune nibble (0..=15, 8..=15 meaning -8..=-1) to a tune
pub fn tune_from_nibble(nibble: u8) -> Result<i8> {
    if nibble > 15 {
        return Err(Error::NibbleOutOfRange(nibble));
    }
    Ok(ROW_TUNES[nibble as usize])
}

/// Finetune nibble of a tune; this is also its row in the bulk tables
pub fn nibble(tune: i8) -> usize {
    (tune & 15) as usize
}

/// Panic unless (note, tune) lies inside the table
pub(crate) fn assert_domain(note: u8, tune: i8) {
    assert!(NOTES.contains(&note), "note {} out of range 0..=35", note);
    assert!(TUNES.contains(&tune), "tune {} out of range -8..=7", tune);
}

/// Map (note, tune) onto (note2, tune2) with tune2 in 0..8.
///
/// Negative tunes are the previous note tuned upwards, so (5, -7) and (4, 1)
/// both land on (5, 1).
pub(crate) fn normalize(note: u8, tune: i8) -> (u8, u8) {
    let shifted = tune as i32 + TUNE_STEPS as i32;
    let note2 = note as i32 + shifted / TUNE_STEPS as i32;
    let tune2 = shifted % TUNE_STEPS as i32;
    (note2 as u8, tune2 as u8)
}

/// Index of a cell in a row-major [16][36] layout
pub(crate) fn cell_index(note: u8, tune: i8) -> usize {
    nibble(tune) * NOTE_COUNT + note as usize
}
