use crate::error::{Error, Result};
use crate::lines::{FromLine, IntoLine, ParseMode};
use crate::sort::SortKey;
use std::fmt;

/// Field separator used both on input and on output.
pub const SEPARATOR: char = ';';

/// Number of fields a record is built from. Extra fields on a line are ignored.
pub const FIELDS: usize = 4;

/// One input line: `left;right;size;rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Record {
    pub left: i64,
    pub right: i64,
    pub size: i64,
    pub rate: i64,
}

impl Record {
    pub fn new(left: i64, right: i64, size: i64, rate: i64) -> Self {
        Record { left, right, size, rate }
    }

    /// Builds a record from `line`, coercing every malformed or missing
    /// field to zero.
    pub fn parse_lenient(line: &str) -> Self {
        let mut fields = [0i64; FIELDS];
        for (slot, token) in fields.iter_mut().zip(line.split(SEPARATOR)) {
            *slot = lenient_int(token);
        }
        Record::from(fields)
    }

    /// Builds a record from `line`, rejecting short lines and fields that are
    /// not integers.
    pub fn parse_strict(line: &str, line_no: usize) -> Result<Self> {
        let tokens: Vec<&str> = line.split(SEPARATOR).collect();
        if tokens.len() < FIELDS {
            return Err(Error::ShortLine { line: line_no, found: tokens.len() });
        }
        let mut fields = [0i64; FIELDS];
        for (slot, token) in fields.iter_mut().zip(tokens) {
            *slot = strict_int(token, line_no)?;
        }
        Ok(Record::from(fields))
    }
}

impl From<[i64; FIELDS]> for Record {
    fn from(f: [i64; FIELDS]) -> Self {
        Record::new(f[0], f[1], f[2], f[3])
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.left,
            self.right,
            self.size,
            self.rate,
            sep = SEPARATOR
        )
    }
}

/// Records are ordered by their first field only.
impl SortKey for Record {
    type Key = i64;

    #[inline]
    fn sort_key(&self) -> i64 {
        self.left
    }
}

impl IntoLine for Record {
    fn into_line(self) -> String {
        self.to_string()
    }
}

impl FromLine for Record {
    fn from_line(line: &str, line_no: usize, mode: ParseMode) -> Result<Self> {
        match mode {
            ParseMode::Lenient => Ok(Record::parse_lenient(line)),
            ParseMode::Strict => Record::parse_strict(line, line_no),
        }
    }
}

/// Reads the leading integer of `token`, yielding zero when there is none.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// decimal digits is taken (a single `_` between two digits is skipped).
/// Whatever follows the run is ignored, so `"12abc"` reads as 12 and `"abc"`
/// as 0. Values outside the `i64` range saturate.
pub fn lenient_int(token: &str) -> i64 {
    let bytes = token.as_bytes();
    let mut i = 0;
    while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == 0x0b) {
        i += 1;
    }
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut after_digit = false;
    while let Some(&b) = bytes.get(i) {
        if b.is_ascii_digit() {
            let digit = i64::from(b - b'0');
            // Accumulate with the final sign so that i64::MIN is reachable.
            value = if negative {
                value.saturating_mul(10).saturating_sub(digit)
            } else {
                value.saturating_mul(10).saturating_add(digit)
            };
            after_digit = true;
        } else if b == b'_' && after_digit && bytes.get(i + 1).map_or(false, u8::is_ascii_digit) {
            after_digit = false;
        } else {
            break;
        }
        i += 1;
    }
    value
}

fn strict_int(token: &str, line_no: usize) -> Result<i64> {
    token.trim().parse::<i64>().map_err(|err| Error::Parse {
        line: line_no,
        token: token.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("42"), 42);
        assert_eq!(lenient_int("-17"), -17);
        assert_eq!(lenient_int("+8"), 8);
        assert_eq!(lenient_int("  12\n"), 12);
        assert_eq!(lenient_int("12abc"), 12);
        assert_eq!(lenient_int("1_000"), 1000);
        assert_eq!(lenient_int("1__0"), 1);
        assert_eq!(lenient_int("_1"), 0);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("-"), 0);
        assert_eq!(lenient_int("- 3"), 0);
        assert_eq!(lenient_int("3.9"), 3);
    }

    #[test]
    fn test_lenient_int_saturates() {
        assert_eq!(lenient_int("9223372036854775807"), i64::MAX);
        assert_eq!(lenient_int("99999999999999999999999"), i64::MAX);
        assert_eq!(lenient_int("-9223372036854775808"), i64::MIN);
        assert_eq!(lenient_int("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Record::parse_lenient("3;10;100;5"), Record::new(3, 10, 100, 5));
        assert_eq!(Record::parse_lenient("5;x;1;1"), Record::new(5, 0, 1, 1));
        assert_eq!(Record::parse_lenient("7;8"), Record::new(7, 8, 0, 0));
        assert_eq!(Record::parse_lenient(""), Record::default());
        assert_eq!(Record::parse_lenient("1;2;3;4;5;6"), Record::new(1, 2, 3, 4));
        assert_eq!(Record::parse_lenient("1;2;3;4\r"), Record::new(1, 2, 3, 4));
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(Record::parse_strict("1; 2 ;3;4;junk", 1).unwrap(), Record::new(1, 2, 3, 4));
        match Record::parse_strict("5;x;1;1", 3) {
            Err(Error::Parse { line, token, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match Record::parse_strict("5;6", 9) {
            Err(Error::ShortLine { line, found }) => {
                assert_eq!(line, 9);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_into_line() {
        let rec = Record::new(-1, 20, 200, 7);
        let line = rec.into_line();
        assert_eq!(line, "-1;20;200;7");
        assert_eq!(Record::from_line(&line, 1, ParseMode::Strict).unwrap(), rec);
    }
}
