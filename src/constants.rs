//! Reference constants shared by the evaluator and the table generators

/// Amiga NTSC colour clock (Hz)
pub const NTSC_CLOCK: f64 = 3_579_545.0;

/// Reference period of the fine-tuned (Protracker) table: note 0, tune 0
pub const PT_REFERENCE_PERIOD: f64 = 856.0;

/// Reference period of the inherited (Ultimate Soundtracker / AHRM) values,
/// derived from a C of 523.3 Hz and an 8-byte sample
pub const UST_REFERENCE_PERIOD: f64 = NTSC_CLOCK / 523.3 / 8.0;

/// Scale factor from a Protracker period to the matching UST period
pub const UST_TO_PT_RATIO: f64 = UST_REFERENCE_PERIOD / PT_REFERENCE_PERIOD;

/// Number of notes (3 octaves of C..B)
pub const NOTE_COUNT: usize = 36;

/// Number of fine-tune rows (-8..=7)
pub const TUNE_COUNT: usize = 16;

/// Fine-tune steps per semitone
pub const TUNE_STEPS: usize = 8;

/// Period ratio of one semitone up
pub fn semitone_step() -> f64 {
    2.0_f64.powf(-1.0 / 12.0)
}

/// Period ratio of one fine-tune step up
pub fn tune_step() -> f64 {
    2.0_f64.powf(-1.0 / 8.0 / 12.0)
}

/// Round a period the way the historical tables were rounded (add half, truncate)
pub(crate) fn round_period(period: f64) -> u16 {
    (period + 0.5) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ust_reference_period() {
        // 3579545 / 523.3 / 8 = 855.04...
        assert_eq!(round_period(UST_REFERENCE_PERIOD), 855);
        assert!(UST_TO_PT_RATIO < 1.0);
    }

    #[test]
    fn test_steps() {
        let octave = semitone_step().powi(12);
        assert!((octave - 0.5).abs() < 1e-12);
        let semitone = tune_step().powi(TUNE_STEPS as i32);
        assert!((semitone - semitone_step()).abs() < 1e-12);
    }

    #[test]
    fn test_round_period() {
        assert_eq!(round_period(906.5), 907);
        assert_eq!(round_period(906.49), 906);
        assert_eq!(round_period(108.0), 108);
    }
}
