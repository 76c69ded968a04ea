//! Bulk period table generation
//!
//! Both layouts are filled from one incremental sweep: eight groups, one per
//! canonical tune 0..7, each stepping 36 semitones down from its seed. A
//! group's running value before a step is the negative tune (t - 8) at that
//! note, after the step the positive tune t. Tune 0 takes UST values instead,
//! then the inherited fix-ups and the nine corrections are applied.

use crate::constants::{
    round_period, semitone_step, tune_step, NOTE_COUNT, PT_REFERENCE_PERIOD, TUNE_COUNT,
    TUNE_STEPS, UST_TO_PT_RATIO,
};
use crate::corrections::CORRECTIONS;
use crate::domain::{assert_domain, cell_index, nibble, ROW_TUNES};
use crate::evaluate::evaluate;

/// Number of slots in the packed layout (one overlapping slot at the end)
pub const PACKED_LEN: usize = NOTE_COUNT * TUNE_COUNT + 1;

/// First slot of the negative-tune half of the packed layout
const NEGATIVE_HALF: usize = NOTE_COUNT * TUNE_STEPS;

/// Lowest notes of tune 0 that are doubled from one octave up
const DOUBLED_NOTES: usize = 9;

/// Full period table indexed [row][note], rows in finetune-nibble order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseTable {
    rows: [[u16; NOTE_COUNT]; TUNE_COUNT],
}

impl DenseTable {
    /// Period of a cell. Panics if (note, tune) is outside the table.
    pub fn get(&self, note: u8, tune: i8) -> u16 {
        assert_domain(note, tune);
        self.rows[nibble(tune)][note as usize]
    }

    /// All 36 periods of one tune
    pub fn row(&self, tune: i8) -> &[u16; NOTE_COUNT] {
        assert_domain(0, tune);
        &self.rows[nibble(tune)]
    }

    /// Rows in finetune-nibble order (0..=7, -8..=-1)
    pub fn rows(&self) -> &[[u16; NOTE_COUNT]; TUNE_COUNT] {
        &self.rows
    }

    /// Iterate over (tune, row) pairs in finetune-nibble order
    pub fn iter_rows(&self) -> impl Iterator<Item = (i8, &[u16; NOTE_COUNT])> {
        ROW_TUNES.into_iter().zip(self.rows.iter())
    }
}

/// Period table packed into one contiguous run of [`PACKED_LEN`] slots.
///
/// Slots 0..576 are the dense table in row-major order. Slot 576 repeats
/// the last positive cell (tune 7, note 35) and only exists because each
/// sweep group writes one slot past its end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackedTable {
    slots: [u16; PACKED_LEN],
}

impl PackedTable {
    /// Period of a cell. Panics if (note, tune) is outside the table.
    pub fn get(&self, note: u8, tune: i8) -> u16 {
        assert_domain(note, tune);
        self.slots[cell_index(note, tune)]
    }

    /// Raw slots, including the trailing duplicate
    pub fn slots(&self) -> &[u16; PACKED_LEN] {
        &self.slots
    }

    /// Copy the 576 logical entries out into the dense layout
    pub fn extract(&self) -> DenseTable {
        let mut rows = [[0u16; NOTE_COUNT]; TUNE_COUNT];
        for (row, chunk) in rows.iter_mut().zip(self.slots.chunks_exact(NOTE_COUNT)) {
            row.copy_from_slice(chunk);
        }
        DenseTable { rows }
    }
}

/// Run the incremental sweep, calling `visit(group, step, period)` for every
/// step 0..=36 of every group 0..8
fn sweep(mut visit: impl FnMut(usize, usize, f64)) {
    let semitone = semitone_step();
    let tune = tune_step();

    // Starts one semitone below note 0, i.e. 907
    let mut seed = PT_REFERENCE_PERIOD / semitone;

    for group in 0..TUNE_STEPS {
        let mut period = seed;
        visit(group, 0, period);

        for step in 1..=NOTE_COUNT {
            period *= semitone;
            visit(group, step, period);
        }

        seed *= tune;
    }
}

/// Rounded value of the sweep at a given position, UST-scaled for tune 0
fn swept_period(group: usize, step: usize, period: f64) -> u16 {
    if group == 0 && step > 0 {
        round_period(period * UST_TO_PT_RATIO)
    } else {
        round_period(period)
    }
}

/// Generate the full table in the dense layout
pub fn generate_dense() -> DenseTable {
    let mut rows = [[0u16; NOTE_COUNT]; TUNE_COUNT];

    sweep(|group, step, period| {
        if step < NOTE_COUNT {
            rows[group + TUNE_STEPS][step] = round_period(period);
        }
        if step > 0 {
            rows[group][step - 1] = swept_period(group, step, period);
        }
    });

    for note in 0..DOUBLED_NOTES {
        rows[0][note] = rows[0][note + 12] * 2;
    }

    // Tune -8 reuses the UST value of the previous note; note 0 keeps 907
    for note in 1..NOTE_COUNT {
        rows[TUNE_STEPS][note] = rows[0][note - 1];
    }

    for c in &CORRECTIONS {
        rows[c.row()][c.note as usize] = c.apply(rows[c.row()][c.note as usize]);
    }

    tracing::debug!(
        layout = "dense",
        entries = NOTE_COUNT * TUNE_COUNT,
        "generated period table"
    );

    DenseTable { rows }
}

/// Build the dense table by evaluating every cell on its own
pub fn evaluate_all() -> DenseTable {
    let mut rows = [[0u16; NOTE_COUNT]; TUNE_COUNT];
    for (row, tune) in rows.iter_mut().zip(ROW_TUNES) {
        for (note, period) in row.iter_mut().enumerate() {
            *period = evaluate(note as u8, tune);
        }
    }
    DenseTable { rows }
}

/// Generate the full table in the packed layout
pub fn generate_packed() -> PackedTable {
    let mut slots = [0u16; PACKED_LEN];

    sweep(|group, step, period| {
        let slot = NEGATIVE_HALF + group * NOTE_COUNT + step;
        slots[slot] = swept_period(group, step, period);
        if step > 0 {
            slots[slot - NEGATIVE_HALF - 1] = slots[slot];
        }
    });

    for note in 0..DOUBLED_NOTES {
        let doubled = slots[note + 12] * 2;
        slots[note] = doubled;
        slots[NEGATIVE_HALF + note + 1] = doubled;
    }

    for c in &CORRECTIONS {
        slots[c.index()] = c.apply(slots[c.index()]);
    }

    tracing::debug!(layout = "packed", slots = PACKED_LEN, "generated period table");

    PackedTable { slots }
}
