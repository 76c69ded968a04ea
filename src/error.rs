use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Note {0} out of range (expected 0..=35)")]
    NoteOutOfRange(i32),

    #[error("Tune {0} out of range (expected -8..=7)")]
    TuneOutOfRange(i32),

    #[error("Finetune nibble {0} out of range (expected 0..=15)")]
    NibbleOutOfRange(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
