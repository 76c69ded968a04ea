pub mod classify;
pub mod constants;
pub mod corrections;
pub mod domain;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod generate;
pub mod json;
pub mod report;

pub use classify::{classify, try_classify, PeriodKind};
pub use corrections::{Correction, CORRECTIONS};
pub use error::{Error, Result};
pub use evaluate::{evaluate, evaluate_uncorrected, try_evaluate};
pub use generate::{
    evaluate_all, generate_dense, generate_packed, DenseTable, PackedTable, PACKED_LEN,
};
