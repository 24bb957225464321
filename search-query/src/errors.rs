use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for query building operations.
///
/// Every failure raised while assembling a query falls in one of these
/// categories. Each is raised synchronously at the call that violates the
/// rule, before the builder is touched.
///
/// # Examples
///
/// ```rust,ignore
/// use search_query::errors::{ErrorKind, QueryError, QueryResult};
///
/// fn example() -> QueryResult<()> {
///     Err(QueryError::new("Substring too short", ErrorKind::SubstringTooShort))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A `contains` value shorter than the minimum substring length
    SubstringTooShort,
    /// An `AND` was requested on an `OR` query, or the other way around
    MixedConnective,
    /// An integer does not fit the numeric range of a clause value
    NumberOutOfRange,
    /// A clause whose operator does not accept its value
    InvalidClause,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::SubstringTooShort => write!(f, "Substring too short"),
            ErrorKind::MixedConnective => write!(f, "Mixed connective"),
            ErrorKind::NumberOutOfRange => write!(f, "Number out of range"),
            ErrorKind::InvalidClause => write!(f, "Invalid clause"),
        }
    }
}

/// Custom query error type.
///
/// `QueryError` carries the error message, its kind, an optional cause and
/// the backtrace captured where it was raised.
///
/// # Examples
///
/// ```rust,ignore
/// use search_query::errors::{ErrorKind, QueryError};
///
/// let err = QueryError::new("Cannot mix AND with OR", ErrorKind::MixedConnective);
/// assert_eq!(err.kind(), &ErrorKind::MixedConnective);
/// ```
///
/// # Type alias
///
/// `QueryResult<T>` is equivalent to `Result<T, QueryError>` and is returned
/// by every fallible builder operation.
#[derive(Clone)]
pub struct QueryError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<QueryError>>,
    backtrace: Atomic<Backtrace>,
}

impl QueryError {
    /// Creates a new `QueryError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        QueryError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `QueryError` wrapping the error that caused it.
    ///
    /// Presets use this to report which preset rejected the input while
    /// keeping the original builder error in the chain.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: QueryError) -> Self {
        QueryError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&QueryError> {
        self.cause.as_deref()
    }
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for query building operations.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_new_creates_error() {
        let error = QueryError::new("too short", ErrorKind::SubstringTooShort);
        assert_eq!(error.message, "too short");
        assert_eq!(error.error_kind, ErrorKind::SubstringTooShort);
        assert!(error.cause.is_none());
    }

    #[test]
    fn query_error_new_with_cause_keeps_cause() {
        let cause = QueryError::new("cannot mix", ErrorKind::MixedConnective);
        let error = QueryError::new_with_cause(
            "charge preset rejected input",
            ErrorKind::MixedConnective,
            cause,
        );
        assert_eq!(error.message(), "charge preset rejected input");
        assert_eq!(error.cause().map(|c| c.message()), Some("cannot mix"));
        assert!(error.source().is_some());
    }

    #[test]
    fn query_error_source_returns_none_when_no_cause() {
        let error = QueryError::new("cannot mix", ErrorKind::MixedConnective);
        assert!(error.source().is_none());
        assert!(error.cause().is_none());
    }

    #[test]
    fn query_error_display_prints_message_only() {
        let error = QueryError::new("cannot mix", ErrorKind::MixedConnective);
        assert_eq!(format!("{}", error), "cannot mix");
    }

    #[test]
    fn query_error_debug_formats_with_cause() {
        let error = QueryError::new_with_cause(
            "outer",
            ErrorKind::SubstringTooShort,
            QueryError::new("inner", ErrorKind::SubstringTooShort),
        );
        let formatted = format!("{:?}", error);
        assert!(formatted.contains("outer"));
        assert!(formatted.contains("Caused by:"));
        assert!(formatted.contains("inner"));
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::SubstringTooShort.to_string(), "Substring too short");
        assert_eq!(ErrorKind::MixedConnective.to_string(), "Mixed connective");
        assert_eq!(ErrorKind::NumberOutOfRange.to_string(), "Number out of range");
        assert_eq!(ErrorKind::InvalidClause.to_string(), "Invalid clause");
    }

    #[test]
    fn query_error_clone_shares_kind() {
        let error = QueryError::new("too short", ErrorKind::SubstringTooShort);
        let cloned = error.clone();
        assert_eq!(cloned.kind(), error.kind());
        assert_eq!(cloned.message(), error.message());
    }
}
