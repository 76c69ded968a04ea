//! Report assembly for the command-line front end

use crate::domain::{check_note, check_tune};
use crate::error::Result;
use crate::format;
use crate::generate::{evaluate_all, generate_dense, generate_packed};
use crate::json::{self, CellJson, TableJson};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Which table(s) to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    /// Origin of every cell
    Classify,
    /// Every cell evaluated on its own
    Evaluate,
    /// Bulk-generated dense table
    Dense,
    /// Bulk-generated packed table
    Packed,
    /// The nine literal corrections
    Corrections,
    /// Everything above
    All,
}

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json { compact: bool },
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let mut out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    out.push('\n');
    Ok(out)
}

fn titled(title: &str, body: &str) -> String {
    format!("{}\n{}\n{}", title, "-".repeat(title.len()), body)
}

/// Render a table view
pub fn render_view(view: View, output: Format) -> Result<String> {
    let compact = match output {
        Format::Text => return Ok(render_text(view)),
        Format::Json { compact } => compact,
    };

    match view {
        View::Classify => to_json(&TableJson::classified(&generate_dense()), compact),
        View::Evaluate => to_json(&TableJson::evaluated(&evaluate_all()), compact),
        View::Dense => to_json(&TableJson::dense(&generate_dense()), compact),
        View::Packed => to_json(&TableJson::packed(&generate_packed()), compact),
        View::Corrections => to_json(&json::corrections(), compact),
        View::All => to_json(
            &serde_json::json!({
                "evaluated": TableJson::evaluated(&evaluate_all()).with_kinds(),
                "dense": TableJson::dense(&generate_dense()),
                "packed": TableJson::packed(&generate_packed()),
                "corrections": json::corrections(),
            }),
            compact,
        ),
    }
}

fn render_text(view: View) -> String {
    match view {
        View::Classify => titled("Table entry classification", &format::classification()),
        View::Evaluate => titled("Table evaluated per entry", &format::evaluated()),
        View::Dense => titled("Dense table", &format::dense(&generate_dense())),
        View::Packed => titled("Packed table", &format::packed(&generate_packed())),
        View::Corrections => titled("Corrections", &format::corrections()),
        View::All => [
            View::Classify,
            View::Evaluate,
            View::Dense,
            View::Packed,
            View::Corrections,
        ]
        .into_iter()
        .map(render_text)
        .collect::<Vec<_>>()
        .join("\n"),
    }
}

/// Render a single cell. Fails if (note, tune) is outside the table.
pub fn render_cell(note: i32, tune: i32, output: Format) -> Result<String> {
    let cell = CellJson::new(check_note(note)?, check_tune(tune)?);

    match output {
        Format::Text => Ok(format!(
            "note {} tune {}: {} ({})\n",
            cell.note,
            cell.tune,
            cell.period,
            cell.kind.label()
        )),
        Format::Json { compact } => to_json(&cell, compact),
    }
}

/// Write a report to a file, or stdout if no path is given
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote report");
        }
        None => write_to(std::io::stdout().lock(), text)?,
    }
    Ok(())
}

fn write_to(mut writer: impl Write, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_render_cell_text() {
        let text = render_cell(0, -8, Format::Text).unwrap();
        assert_eq!(text, "note 0 tune -8: 907 (PT)\n");
    }

    #[test]
    fn test_render_cell_out_of_range() {
        assert!(matches!(
            render_cell(40, 0, Format::Text),
            Err(Error::NoteOutOfRange(40))
        ));
        assert!(matches!(
            render_cell(0, -9, Format::Json { compact: true }),
            Err(Error::TuneOutOfRange(-9))
        ));
    }

    #[test]
    fn test_titled() {
        assert_eq!(titled("Dense", "x\n"), "Dense\n-----\nx\n");
    }

    #[test]
    fn test_all_text_has_every_section() {
        let text = render_view(View::All, Format::Text).unwrap();
        for title in [
            "Table entry classification",
            "Table evaluated per entry",
            "Dense table",
            "Packed table",
            "Corrections",
        ] {
            assert!(text.contains(title), "missing {}", title);
        }
    }

    #[test]
    fn test_classify_json_is_labelled() {
        let text = render_view(View::Classify, Format::Json { compact: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["layout"], "classified");
        assert_eq!(value["kinds"][0][0], "doubled");

        let dense = render_view(View::Dense, Format::Json { compact: true }).unwrap();
        assert_ne!(text, dense);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_closed_pipe_is_an_error() {
        let result = write_to(ClosedPipe, "856\n");
        assert!(matches!(
            result,
            Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_to(&mut buf, "907\n").unwrap();
        assert_eq!(buf, b"907\n");
    }

    #[test]
    fn test_compact_json_is_one_line() {
        let text = render_view(View::Corrections, Format::Json { compact: true }).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 9);
    }
}
