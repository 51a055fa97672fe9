//! Error type for the checked view and buffer operations.
//!
//! The core operations never fail: they report inexact results through
//! `bool`/`Option` returns and treat caller logic bugs as panics. The
//! `try_*` and `checked_*` companions convert those outcomes into an
//! [`Error`] for callers that prefer `?` propagation.

/// Errors produced by the checked operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The end index precedes the start index.
    #[error("invalid range: end {end} precedes start {start}")]
    InvalidRange {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
    },
    /// The requested range extends past the end of the view.
    #[error("range {start}..{end} out of bounds for view of length {len}")]
    OutOfBounds {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
        /// Length of the view that was sliced.
        len: usize,
    },
    /// A view does not start inside the parent it was measured against.
    #[error("view at relative address {offset} is not inside parent of length {len}")]
    NotASubstring {
        /// Address difference between the child and the parent start.
        offset: isize,
        /// Length of the parent view.
        len: usize,
    },
    /// The value is not a Unicode codepoint.
    #[error("codepoint {0:#x} is outside the Unicode range")]
    InvalidCodepoint(u32),
}

/// Result alias for the checked operations.
pub type Result<T> = std::result::Result<T, Error>;
