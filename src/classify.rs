//! Classification of table cells by origin

use crate::corrections::is_mystery_pair;
use crate::domain::{assert_domain, check_note, check_tune, normalize};
use crate::error::Result;
use serde::Serialize;

/// Which numeric tradition produced a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Ultimate Soundtracker value taken from the AHRM (periods 135..=508)
    Ahrm,
    /// Ultimate Soundtracker value doubled from one octave up (538..=856)
    Doubled,
    /// Ultimate Soundtracker value halved from one octave down (113..=127)
    Halved,
    /// Generated Protracker fine-tune value
    Pt,
    /// Protracker value belonging to one of the nine irregular mirror pairs
    PtMystery,
}

impl PeriodKind {
    /// Inherited from Ultimate Soundtracker, i.e. computed from the UST reference
    pub fn is_ust(self) -> bool {
        matches!(self, Self::Ahrm | Self::Doubled | Self::Halved)
    }

    /// Short label used by the classification grid
    pub fn label(self) -> &'static str {
        match self {
            Self::Ahrm => "AHRM",
            Self::Doubled => "x2",
            Self::Halved => "/2",
            Self::Pt => "PT",
            Self::PtMystery => "!PT!",
        }
    }
}

/// Classify a cell. Panics if (note, tune) is outside the table.
pub fn classify(note: u8, tune: i8) -> PeriodKind {
    assert_domain(note, tune);

    let (note2, tune2) = normalize(note, tune);

    if tune2 == 0 && note2 != 0 {
        if note2 < 10 {
            return PeriodKind::Doubled;
        }
        if note2 > 33 {
            return PeriodKind::Halved;
        }
        return PeriodKind::Ahrm;
    }

    if is_mystery_pair(note2, tune2) {
        PeriodKind::PtMystery
    } else {
        PeriodKind::Pt
    }
}

/// Checked variant of [`classify`]
pub fn try_classify(note: i32, tune: i32) -> Result<PeriodKind> {
    Ok(classify(check_note(note)?, check_tune(tune)?))
}
