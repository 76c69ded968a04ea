use clap::Parser;
use ptperiods::report::{self, Format, View};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "ptperiods")]
#[command(version = "0.1.0")]
#[command(about = "Protracker period table generator", long_about = None)]
struct Args {
    /// Table to print
    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,

    /// Print a single note (0..=35) instead of a table
    #[arg(short, long, requires = "tune")]
    note: Option<i32>,

    /// Fine-tune of the single note (-8..=7)
    #[arg(short, long, requires = "note", allow_hyphen_values = true)]
    tune: Option<i32>,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,

    /// Output compact JSON (default is pretty-printed)
    #[arg(short, long, requires = "json")]
    compact: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// `-v` forces debug; otherwise `RUST_LOG` applies, falling back to warn
fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<(), ptperiods::Error> {
    let args = Args::parse();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(args.verbose, directives.as_deref()))
        .init();

    let format = if args.json {
        Format::Json {
            compact: args.compact,
        }
    } else {
        Format::Text
    };

    let text = match (args.note, args.tune) {
        (Some(note), Some(tune)) => report::render_cell(note, tune, format)?,
        _ => report::render_view(args.view, format)?,
    };

    report::write_output(args.output.as_deref(), &text)
}
