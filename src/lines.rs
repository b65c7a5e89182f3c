use crate::error::Result;
use std::marker::Sized;

/// How a line is turned into a value when some of its fields are malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Malformed or missing fields become zero. Never fails.
    #[default]
    Lenient,
    /// Malformed fields and short lines are rejected with an error.
    Strict,
}

/// Converts the value into a single line for output.
///
/// The conversion must be revertible, so that
/// `T::from_line(&value.into_line(), n, ParseMode::Strict)` gives back
/// `value`.
pub trait IntoLine {
    /// Performs the conversion from `Self` to the line. The resulting line
    /// must not contain `'\r'`, `'\n'` and `'\0'` characters.
    fn into_line(self) -> String;
}

/// Converts the line back into a value.
pub trait FromLine
where
    Self: Sized,
{
    /// Performs the conversion from `line` to `Self`. `line_no` is the
    /// 1-based position of the line in its source, used for diagnostics.
    fn from_line(line: &str, line_no: usize, mode: ParseMode) -> Result<Self>;
}
