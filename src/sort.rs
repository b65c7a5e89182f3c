use crate::error::Result;
use crate::lines::{FromLine, ParseMode};
use std::vec;
use tracing::debug;

/// Extracts the value that items are ordered by.
pub trait SortKey {
    type Key: Ord;

    fn sort_key(&self) -> Self::Key;
}

/// Sort configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// How lines are turned into items.
    pub mode: ParseMode,
    /// Non-increasing order instead of non-decreasing.
    pub reverse: bool,
}

/// In-memory sort of line-based items.
///
/// All lines are parsed before anything is returned, so a strict-mode parse
/// error aborts the sort without yielding a single item. Items with equal
/// keys keep their input order.
pub struct Sort {
    config: Config,
}

/// Iterator over the sorted items.
pub struct SortedIter<T> {
    items: vec::IntoIter<T>,
}

impl<T> Iterator for SortedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for SortedIter<T> {}

impl Sort {
    pub fn new(config: Config) -> Sort {
        Sort { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses every numbered line from `lines` and sorts the result by key.
    pub fn sort<T, Iter>(&self, lines: Iter) -> Result<SortedIter<T>>
    where
        Iter: Iterator<Item = Result<(usize, String)>>,
        T: FromLine + SortKey,
    {
        let mut items = Vec::new();
        for maybe_line in lines {
            let (line_no, line) = maybe_line?;
            items.push(T::from_line(&line, line_no, self.config.mode)?);
        }
        debug!(count = items.len(), reverse = self.config.reverse, "sorting");
        self.sort_items(&mut items);
        Ok(SortedIter { items: items.into_iter() })
    }

    /// Sorts already parsed items in place.
    pub fn sort_items<T: SortKey>(&self, items: &mut [T]) {
        if self.config.reverse {
            items.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        } else {
            items.sort_by_key(T::sort_key);
        }
    }
}
