use crate::error::{Error, Result};
use crate::lines::IntoLine;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes items one per line through a buffered writer.
pub struct Printer<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl<W: Write> Printer<W> {
    pub fn new(inner: W) -> Self {
        Printer { writer: BufWriter::new(inner), written: 0 }
    }

    pub fn print<T: IntoLine>(&mut self, item: T) -> Result<()> {
        let line = item.into_line();
        self.writer.write_all(line.as_bytes()).map_err(Error::Write)?;
        self.writer.write_all(b"\n").map_err(Error::Write)?;
        self.written += 1;
        Ok(())
    }

    /// Prints every item of `items` in order.
    pub fn print_all<T, Iter>(&mut self, items: Iter) -> Result<()>
    where
        T: IntoLine,
        Iter: IntoIterator<Item = T>,
    {
        for item in items {
            self.print(item)?;
        }
        Ok(())
    }

    /// Number of lines printed so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes buffered output and returns the inner writer.
    pub fn finish(self) -> Result<W> {
        self.writer.into_inner().map_err(|err| Error::Write(err.into_error()))
    }
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Printer::new(io::stdout())
    }
}

impl Printer<File> {
    /// Creates (or truncates) the file at `path` for output.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::Create { path: path.to_path_buf(), source })?;
        Ok(Printer::new(file))
    }
}
