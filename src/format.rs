//! Plain-text rendering of period tables
//!
//! Every grid has one line per note and one column per tune.

use crate::classify::{classify, PeriodKind};
use crate::corrections::CORRECTIONS;
use crate::domain::{NOTES, ROW_TUNES, TUNES};
use crate::evaluate::{evaluate, evaluate_uncorrected};
use crate::generate::{DenseTable, PackedTable};
use std::fmt::Write;

/// Width of one grid column
const COLUMN: usize = 5;

/// Column header for the given tunes
pub fn header(tunes: impl IntoIterator<Item = i8>) -> String {
    let mut out = String::new();
    for tune in tunes {
        let _ = write!(out, "{:>width$}", tune, width = COLUMN);
    }
    out.push('\n');
    out
}

fn grid(tunes: &[i8], mut cell: impl FnMut(u8, i8) -> String) -> String {
    let mut out = header(tunes.iter().copied());
    for note in NOTES {
        for &tune in tunes {
            let _ = write!(out, "{:>width$}", cell(note, tune), width = COLUMN);
        }
        out.push('\n');
    }
    out
}

/// Classification of every cell, tunes ascending
pub fn classification() -> String {
    let tunes: Vec<i8> = TUNES.collect();
    grid(&tunes, |note, tune| classify(note, tune).label().to_string())
}

/// Evaluated period of every cell, tunes ascending; irregular cells marked with `!`
pub fn evaluated() -> String {
    let tunes: Vec<i8> = TUNES.collect();
    grid(&tunes, |note, tune| {
        let period = evaluate(note, tune);
        match classify(note, tune) {
            PeriodKind::PtMystery => format!("{}!", period),
            _ => format!("{} ", period),
        }
    })
}

/// Dense table in row order (0..=7, -8..=-1)
pub fn dense(table: &DenseTable) -> String {
    grid(&ROW_TUNES, |note, tune| table.get(note, tune).to_string())
}

/// Packed table in row order, followed by the trailing duplicate slot
pub fn packed(table: &PackedTable) -> String {
    let mut out = grid(&ROW_TUNES, |note, tune| table.get(note, tune).to_string());
    let slots = table.slots();
    let _ = writeln!(out, "slot {}: {}", slots.len() - 1, slots[slots.len() - 1]);
    out
}

/// The nine corrections with their uncorrected and final values
pub fn corrections() -> String {
    let mut out = String::from(" note tune delta  formula  table\n");
    for c in &CORRECTIONS {
        let _ = writeln!(
            out,
            "{:>5}{:>5}{:>6}{:>9}{:>7}",
            c.note,
            c.tune,
            format!("{:+}", c.delta),
            evaluate_uncorrected(c.note, c.tune),
            evaluate(c.note, c.tune)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_dense, generate_packed};

    #[test]
    fn test_header() {
        assert_eq!(header([-8, 0, 7]), "   -8    0    7\n");
    }

    #[test]
    fn test_dense_first_line() {
        let text = dense(&generate_dense());
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "    0    1    2    3    4    5    6    7   -8   -7   -6   -5   -4   -3   -2   -1"
        );
        assert_eq!(
            lines.next().unwrap(),
            "  856  850  844  838  832  826  820  814  907  900  894  887  881  875  868  862"
        );
        assert_eq!(text.lines().count(), 37);
    }

    #[test]
    fn test_packed_trailer() {
        let text = packed(&generate_packed());
        assert_eq!(text.lines().last().unwrap(), "slot 576: 108");
    }

    #[test]
    fn test_classification_row() {
        let text = classification();
        let row: Vec<&str> = text.lines().nth(1).unwrap().split_whitespace().collect();
        assert_eq!(row[0], "PT");
        assert_eq!(row[8], "x2");
        assert_eq!(text.lines().nth(6).unwrap().split_whitespace().nth(1), Some("!PT!"));
    }

    #[test]
    fn test_evaluated_marks() {
        let text = evaluated();
        // Note 4, tune 1
        let row: Vec<&str> = text.lines().nth(5).unwrap().split_whitespace().collect();
        assert_eq!(row[9], "674!");
        assert_eq!(row[8], "678");
    }

    #[test]
    fn test_corrections_listing() {
        let text = corrections();
        assert_eq!(text.lines().count(), 10);
        assert_eq!(text.lines().nth(1).unwrap(), "    4    1    -1      675    674");
    }
}
