//! Sorting of `;`-delimited integer records by their first field.
//!
//! The pipeline is load → parse → sort → print. Everything is parsed before
//! anything is printed, so a failure while loading produces no output.

mod error;
mod lines;
mod load;
mod print;
mod record;
mod sort;

pub use error::{Error, Result};
pub use lines::{FromLine, IntoLine, ParseMode};
pub use load::{open, Loader};
pub use print::Printer;
pub use record::{lenient_int, Record, FIELDS, SEPARATOR};
pub use sort::{Config, Sort, SortKey, SortedIter};

use std::path::Path;

/// Loads the file at `input` and returns its records in sorted order.
///
/// Fails without producing anything if the file cannot be opened or read, or
/// if a line is rejected in strict mode.
pub fn sort_file(input: &Path, config: Config) -> Result<SortedIter<Record>> {
    let lines = open(input)?;
    Sort::new(config).sort(lines)
}
