//! Error types for lazy list operations.
//!
//! Every failure is a local precondition violation reported synchronously to
//! the caller that forced the offending cell. A failure produced while a cell
//! is being forced is cached in that cell, so forcing it again reports the
//! same error.

use std::fmt;

use thiserror::Error;

/// Errors raised by [`LazyList`](crate::list::LazyList) operations.
///
/// # Examples
///
/// ```rust
/// use lazylist::error::ListError;
///
/// let error = ListError::DifferentListSize("map2");
/// assert_eq!(format!("{error}"), "map2: lists have different sizes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The first or last element of an empty list was requested.
    #[error("the list is empty")]
    EmptyList,

    /// A position or count exceeds the length of the list.
    #[error("invalid index: {0}")]
    InvalidIndex(usize),

    /// A strict search found no matching element.
    #[error("no matching element found")]
    NotFound,

    /// A lockstep operation reached the end of one list before the other.
    #[error("{0}: lists have different sizes")]
    DifferentListSize(&'static str),

    /// A constructor received an argument outside its domain.
    #[error("{operation}: {message}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// The output of a printer refused a write.
    #[error("failed to write list output")]
    Format(#[from] fmt::Error),
}

/// Result alias used throughout the crate.
pub type ListResult<T> = Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ListError::EmptyList, "the list is empty")]
    #[case(ListError::InvalidIndex(10), "invalid index: 10")]
    #[case(ListError::NotFound, "no matching element found")]
    #[case(ListError::DifferentListSize("fold_left2"), "fold_left2: lists have different sizes")]
    #[case(
        ListError::InvalidArgument { operation: "repeat", message: "negative length -1".to_string() },
        "repeat: negative length -1"
    )]
    fn test_display(#[case] error: ListError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_format_error_converts() {
        let error: ListError = fmt::Error.into();
        assert_eq!(error, ListError::Format(fmt::Error));
    }
}
