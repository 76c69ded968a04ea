//! JSON serialization types for period tables

use crate::classify::{classify, PeriodKind};
use crate::corrections::{Correction, CORRECTIONS};
use crate::domain::{NOTES, ROW_TUNES};
use crate::evaluate::{evaluate, evaluate_uncorrected};
use crate::generate::{DenseTable, PackedTable};
use serde::Serialize;

/// Layout a table was generated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Dense,
    Packed,
    /// Every cell evaluated on its own
    Evaluated,
    /// Origin of every cell, alongside the dense periods
    Classified,
}

/// JSON representation of a full period table
#[derive(Debug, Clone, Serialize)]
pub struct TableJson {
    /// Layout the table came from
    pub layout: Layout,
    /// Tune of each row (finetune-nibble order)
    pub tunes: Vec<i8>,
    /// 16 rows of 36 periods
    pub rows: Vec<Vec<u16>>,
    /// Classification of each cell, same shape as `rows`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<Vec<PeriodKind>>>,
    /// Raw packed slots, including the trailing duplicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<u16>>,
}

/// JSON representation of a single evaluated cell
#[derive(Debug, Clone, Serialize)]
pub struct CellJson {
    pub note: u8,
    pub tune: i8,
    pub period: u16,
    pub kind: PeriodKind,
}

/// JSON representation of one of the nine corrections
#[derive(Debug, Clone, Serialize)]
pub struct CorrectionJson {
    #[serde(flatten)]
    pub correction: Correction,
    /// Value the formula gives before the correction
    pub uncorrected: u16,
    /// Value in the table
    pub period: u16,
}

impl TableJson {
    fn new(layout: Layout, table: &DenseTable) -> Self {
        Self {
            layout,
            tunes: ROW_TUNES.to_vec(),
            rows: table.rows().iter().map(|row| row.to_vec()).collect(),
            kinds: None,
            slots: None,
        }
    }

    /// Build from a dense table
    pub fn dense(table: &DenseTable) -> Self {
        Self::new(Layout::Dense, table)
    }

    /// Build from a table of individually evaluated cells
    pub fn evaluated(table: &DenseTable) -> Self {
        Self::new(Layout::Evaluated, table)
    }

    /// Classification grid of a dense table; `kinds` is always present
    pub fn classified(table: &DenseTable) -> Self {
        Self::new(Layout::Classified, table).with_kinds()
    }

    /// Build from a packed table; rows are the extracted logical table
    pub fn packed(table: &PackedTable) -> Self {
        Self {
            slots: Some(table.slots().to_vec()),
            ..Self::new(Layout::Packed, &table.extract())
        }
    }

    /// Attach the classification of every cell
    pub fn with_kinds(mut self) -> Self {
        self.kinds = Some(
            ROW_TUNES
                .iter()
                .map(|&tune| NOTES.map(|note| classify(note, tune)).collect())
                .collect(),
        );
        self
    }
}

impl CellJson {
    /// Evaluate and classify one cell. Panics if (note, tune) is outside the table.
    pub fn new(note: u8, tune: i8) -> Self {
        Self {
            note,
            tune,
            period: evaluate(note, tune),
            kind: classify(note, tune),
        }
    }
}

impl From<&Correction> for CorrectionJson {
    fn from(correction: &Correction) -> Self {
        Self {
            correction: *correction,
            uncorrected: evaluate_uncorrected(correction.note, correction.tune),
            period: evaluate(correction.note, correction.tune),
        }
    }
}

/// All nine corrections with their before/after values
pub fn corrections() -> Vec<CorrectionJson> {
    CORRECTIONS.iter().map(CorrectionJson::from).collect()
}
