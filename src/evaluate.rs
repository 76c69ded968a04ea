//! Single-entry period evaluation
//!
//! Every cell starts from a normalized period (1.0 at note 0, tune 0). Cells
//! inherited from Ultimate Soundtracker are scaled by the UST reference and,
//! below the range the AHRM lists, rebuilt as twice the value one octave up.
//! All other cells are scaled by the Protracker reference and may carry one
//! of the nine literal corrections.

use crate::classify::{classify, PeriodKind};
use crate::constants::{round_period, PT_REFERENCE_PERIOD, UST_REFERENCE_PERIOD};
use crate::corrections::correction_delta;
use crate::domain::{check_note, check_tune};
use crate::error::Result;

/// Period of a cell. Panics if (note, tune) is outside the table.
pub fn evaluate(note: u8, tune: i8) -> u16 {
    let kind = classify(note, tune);
    let period = unrounded(note, tune, kind);

    if kind.is_ust() {
        round_period(period)
    } else {
        round_period(period + correction_delta(note, tune) as f64)
    }
}

/// Checked variant of [`evaluate`]
pub fn try_evaluate(note: i32, tune: i32) -> Result<u16> {
    Ok(evaluate(check_note(note)?, check_tune(tune)?))
}

/// Period of a cell as the formula gives it, ignoring the nine corrections
pub fn evaluate_uncorrected(note: u8, tune: i8) -> u16 {
    round_period(unrounded(note, tune, classify(note, tune)))
}

fn unrounded(note: u8, tune: i8, kind: PeriodKind) -> f64 {
    let period = normalized(note, tune);

    match kind {
        PeriodKind::Doubled => {
            // Twice the rounded value one octave up
            let period = period * UST_REFERENCE_PERIOD;
            ((period + 1.0) / 2.0).trunc() * 2.0
        }
        PeriodKind::Ahrm | PeriodKind::Halved => period * UST_REFERENCE_PERIOD,
        PeriodKind::Pt | PeriodKind::PtMystery => period * PT_REFERENCE_PERIOD,
    }
}

fn normalized(note: u8, tune: i8) -> f64 {
    let period = 2.0_f64.powf(-(tune as f64) / 8.0 / 12.0);
    period * 2.0_f64.powf(-(note as f64) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrections::CORRECTIONS;
    use crate::domain::{NOTES, TUNES};
    use crate::error::Error;

    #[test]
    fn test_reference_cells() {
        assert_eq!(evaluate(0, 0), 856);
        assert_eq!(evaluate(0, -8), 907);
        assert_eq!(evaluate(35, 7), 108);
        assert_eq!(evaluate(9, 0), 508);
        assert_eq!(evaluate(12, 0), 428);
        assert_eq!(evaluate(35, 0), 113);
    }

    #[test]
    fn test_doubled_cells() {
        // 907 would be 906 had it been doubled from 453
        assert_eq!(evaluate(0, -8), 907);
        for note in 0..9 {
            assert_eq!(evaluate(note, 0), evaluate(note + 12, 0) * 2);
        }
    }

    #[test]
    fn test_corrections_differ_by_delta() {
        for c in &CORRECTIONS {
            let raw = evaluate_uncorrected(c.note, c.tune) as i32;
            let corrected = evaluate(c.note, c.tune) as i32;
            assert_eq!(corrected - raw, c.delta as i32, "{:?}", c);
        }
    }

    #[test]
    fn test_uncorrected_elsewhere() {
        let mut differing = 0;
        for note in NOTES {
            for tune in TUNES {
                if evaluate(note, tune) != evaluate_uncorrected(note, tune) {
                    differing += 1;
                }
            }
        }
        assert_eq!(differing, CORRECTIONS.len());
    }

    #[test]
    fn test_try_evaluate() {
        assert_eq!(try_evaluate(0, -8).unwrap(), 907);
        assert!(matches!(try_evaluate(-1, 0), Err(Error::NoteOutOfRange(-1))));
        assert!(matches!(try_evaluate(0, 8), Err(Error::TuneOutOfRange(8))));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_evaluate_out_of_domain() {
        evaluate(36, 0);
    }
}
