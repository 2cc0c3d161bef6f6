//! Whitespace-separated token reader.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use super::{RecordSource, SourceError};

/// Reads whitespace-separated tokens and decodes each with [`FromStr`].
///
/// Tokens may span any number of lines; blank lines are skipped. The first
/// token that fails to decode is reported as [`SourceError::Parse`] and the
/// remaining input is not consumed.
///
/// # Examples
///
/// ```rust
/// use sorted_list::source::{RecordSource, WhitespaceRecords};
///
/// let mut records = WhitespaceRecords::new("3 1\n\n2".as_bytes());
/// let first: Option<i32> = records.read_record().unwrap();
/// assert_eq!(first, Some(3));
/// ```
pub struct WhitespaceRecords<R> {
    reader: R,
    pending: VecDeque<String>,
    line: usize,
}

impl<R: BufRead> WhitespaceRecords<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: 0,
        }
    }

    /// Returns the number of lines read so far.
    pub const fn line(&self) -> usize {
        self.line
    }

    fn next_token(&mut self) -> Result<Option<String>, SourceError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut buffer = String::new();
            if self.reader.read_line(&mut buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending
                .extend(buffer.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R, T> RecordSource<T> for WhitespaceRecords<R>
where
    R: BufRead,
    T: FromStr,
    T::Err: Display,
{
    fn read_record(&mut self) -> Result<Option<T>, SourceError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        match token.parse() {
            Ok(element) => Ok(Some(element)),
            Err(error) => Err(SourceError::Parse {
                line: self.line,
                message: error.to_string(),
                token,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn drain(input: &str) -> (Vec<i32>, Option<SourceError>) {
        let mut records = WhitespaceRecords::new(input.as_bytes());
        let mut decoded = Vec::new();
        loop {
            match records.read_record() {
                Ok(Some(element)) => decoded.push(element),
                Ok(None) => return (decoded, None),
                Err(error) => return (decoded, Some(error)),
            }
        }
    }

    #[rstest]
    #[case::empty("", vec![])]
    #[case::blank_lines("\n\n  \n", vec![])]
    #[case::single_line("1 2 3", vec![1, 2, 3])]
    #[case::multiple_lines("4\n5 6\n\n7\n", vec![4, 5, 6, 7])]
    #[case::tabs_and_crlf("8\t9\r\n10", vec![8, 9, 10])]
    fn test_reads_all_tokens(#[case] input: &str, #[case] expected: Vec<i32>) {
        let (decoded, error) = drain(input);
        assert_eq!(decoded, expected);
        assert!(error.is_none());
    }

    #[rstest]
    fn test_stops_at_first_bad_token() {
        let (decoded, error) = drain("1 2\nthree 4");
        assert_eq!(decoded, vec![1, 2]);
        match error {
            Some(SourceError::Parse { line, token, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "three");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[rstest]
    fn test_line_counter_tracks_reads() {
        let mut records = WhitespaceRecords::new("1\n2\n".as_bytes());
        let _: Option<i32> = records.read_record().unwrap();
        assert_eq!(records.line(), 1);
        let _: Option<i32> = records.read_record().unwrap();
        assert_eq!(records.line(), 2);
    }

    #[rstest]
    fn test_decodes_strings() {
        let mut records = WhitespaceRecords::new("pear fig".as_bytes());
        let first: Option<String> = records.read_record().unwrap();
        assert_eq!(first.as_deref(), Some("pear"));
    }
}
