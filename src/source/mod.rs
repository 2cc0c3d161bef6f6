//! Bulk construction of sorted lists from record sources.
//!
//! A [`RecordSource`] yields decoded elements one at a time. The
//! `build_from*` constructors on [`SortedList`] drain a source into a list,
//! dropping duplicates through [`SortedList::insert`]:
//!
//! - [`SortedList::build_from`]: any [`RecordSource`]
//! - [`SortedList::build_from_reader`]: whitespace-separated tokens from a
//!   [`BufRead`]
//! - [`SortedList::build_from_path`]: whitespace-separated tokens from a file
//!
//! Each returns `true` if at least one element was inserted.
//!
//! # Examples
//!
//! ```rust
//! use sorted_list::prelude::*;
//!
//! let mut list: SortedList<i32> = SortedList::new();
//! assert!(list.build_from_reader("5 3\n5 1".as_bytes()));
//! assert_eq!(list.to_string(), "135");
//!
//! let mut empty: SortedList<i32> = SortedList::new();
//! assert!(!empty.build_from_reader("".as_bytes()));
//! ```

mod error;
mod whitespace;

pub use error::SourceError;
pub use whitespace::WhitespaceRecords;

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::collection::SortedList;

/// A sequence of decoded records.
///
/// `Ok(Some(element))` yields the next element, `Ok(None)` signals that the
/// source is exhausted and `Err` that it has failed. Callers stop reading
/// after the first `Ok(None)` or `Err`.
pub trait RecordSource<T> {
    /// Reads the next record.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the underlying input cannot be read or the
    /// record cannot be decoded.
    fn read_record(&mut self) -> Result<Option<T>, SourceError>;
}

impl<T, S: RecordSource<T> + ?Sized> RecordSource<T> for &mut S {
    fn read_record(&mut self) -> Result<Option<T>, SourceError> {
        (**self).read_record()
    }
}

impl<T: Ord> SortedList<T> {
    /// Inserts every record of `source` until it is exhausted or fails.
    ///
    /// Returns `true` if at least one record was inserted. Duplicates, an
    /// empty source and a source that fails before yielding anything all
    /// leave the result `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_list::prelude::*;
    ///
    /// let mut list: SortedList<i32> = [1, 2].into_iter().collect();
    /// let mut records = WhitespaceRecords::new("2 1".as_bytes());
    /// assert!(!list.build_from(&mut records));
    /// ```
    pub fn build_from<S: RecordSource<T>>(&mut self, mut source: S) -> bool {
        let mut inserted = 0_usize;
        let mut rejected = 0_usize;

        loop {
            match source.read_record() {
                Ok(Some(element)) => {
                    if self.insert(element) {
                        inserted += 1;
                    } else {
                        rejected += 1;
                    }
                }
                Ok(None) => break,
                Err(error) => {
                    warn!(%error, inserted, "record source failed; stopping");
                    break;
                }
            }
        }

        debug!(inserted, rejected, "built sorted list from record source");
        inserted > 0
    }

    /// Builds from whitespace-separated tokens read from `reader`.
    pub fn build_from_reader<R>(&mut self, reader: R) -> bool
    where
        R: BufRead,
        T: FromStr,
        T::Err: Display,
    {
        self.build_from(WhitespaceRecords::new(reader))
    }

    /// Builds from whitespace-separated tokens stored in the file at `path`.
    ///
    /// Returns `false` without touching the list if the file cannot be
    /// opened.
    pub fn build_from_path<P>(&mut self, path: P) -> bool
    where
        P: AsRef<Path>,
        T: FromStr,
        T::Err: Display,
    {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => self.build_from_reader(BufReader::new(file)),
            Err(error) => {
                warn!(path = %path.display(), %error, "record file could not be opened");
                false
            }
        }
    }
}
