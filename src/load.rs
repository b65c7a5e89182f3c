use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::debug;

/// Iterator over the numbered lines of an input source.
///
/// Lines are numbered from 1 and come without their terminator. A read error
/// is yielded once and then the iterator is exhausted.
pub struct Loader<R> {
    lines: Lines<R>,
    line_no: usize,
    failed: bool,
}

impl<R: BufRead> Loader<R> {
    pub fn new(reader: R) -> Self {
        Loader { lines: reader.lines(), line_no: 0, failed: false }
    }
}

impl<R: BufRead> Iterator for Loader<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let maybe_line = self.lines.next()?;
        self.line_no += 1;
        Some(match maybe_line {
            Ok(line) => Ok((self.line_no, line)),
            Err(source) => {
                self.failed = true;
                Err(Error::Read { line: self.line_no, source })
            }
        })
    }
}

/// Opens `path` for reading. Fails if the file is missing or unreadable.
pub fn open(path: &Path) -> Result<Loader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| Error::Open { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), "opened input");
    Ok(Loader::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_numbered_lines() {
        let loader = Loader::new(Cursor::new("a\r\nb\n\nc"));
        let lines: Vec<(usize, String)> = loader.map(|l| l.unwrap()).collect();
        assert_eq!(
            lines,
            vec![
                (1, "a".to_string()),
                (2, "b".to_string()),
                (3, String::new()),
                (4, "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_stops() {
        let mut loader = Loader::new(Cursor::new(&b"1;2;3;4\n\xff\xfe\n5;6;7;8\n"[..]));
        assert!(loader.next().unwrap().is_ok());
        match loader.next() {
            Some(Err(Error::Read { line, .. })) => assert_eq!(line, 2),
            _ => panic!("expected a read error on line 2"),
        }
        assert!(loader.next().is_none());
    }

    #[test]
    fn test_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        File::create(&path).unwrap().write_all(b"1;2;3;4\n").unwrap();
        let lines: Vec<_> = open(&path).unwrap().map(|l| l.unwrap().1).collect();
        assert_eq!(lines, vec!["1;2;3;4".to_string()]);

        match open(&dir.path().join("missing.txt")) {
            Err(Error::Open { path, .. }) => assert!(path.ends_with("missing.txt")),
            _ => panic!("expected an open error"),
        }
    }
}
