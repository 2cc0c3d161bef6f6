//! Error types for record sources.

/// Errors reported by a [`RecordSource`](super::RecordSource).
///
/// A source that returns an error is treated as failed: building stops at
/// the first error and keeps whatever was inserted before it.
///
/// # Examples
///
/// ```rust
/// use sorted_list::source::SourceError;
///
/// let error = SourceError::Parse {
///     line: 3,
///     token: "x7".to_string(),
///     message: "invalid digit found in string".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "line 3: cannot decode \"x7\": invalid digit found in string"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The underlying reader failed.
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),

    /// A token could not be decoded into an element.
    #[error("line {line}: cannot decode {token:?}: {message}")]
    Parse {
        /// One-based line number of the token.
        line: usize,
        /// The raw token.
        token: String,
        /// The decoder's error message.
        message: String,
    },
}
