use clap::Parser;
use recsort::{sort_file, Config, ParseMode, Printer, Record, SortedIter};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Sort `;`-separated integer records by their first field.
#[derive(Parser)]
#[command(name = "recsort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file, one `left;right;size;rate` record per line
    input: PathBuf,

    /// Write the sorted records to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sort by descending first field
    #[arg(short, long)]
    reverse: bool,

    /// Reject non-integer fields and short lines instead of reading them as 0
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print<W: Write>(mut printer: Printer<W>, records: SortedIter<Record>) -> recsort::Result<usize> {
    printer.print_all(records)?;
    let count = printer.written();
    printer.finish()?;
    Ok(count)
}

fn run(cli: Cli) -> recsort::Result<()> {
    let config = Config {
        mode: if cli.strict { ParseMode::Strict } else { ParseMode::Lenient },
        reverse: cli.reverse,
    };
    let sorted = sort_file(&cli.input, config)?;
    let count = match &cli.output {
        Some(path) => print(Printer::create(path)?, sorted)?,
        None => print(Printer::stdout(), sorted)?,
    };
    debug!(count, "done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
