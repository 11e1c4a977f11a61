//! Error types for console reporting.
//!
//! Absent input is never an error (a read at EOF yields `None`). What is left
//! are output failures, malformed templates and host query failures.

use std::fmt;
use std::io;

/// Errors raised by the console provider, the formatter and host queries.
#[derive(Debug)]
pub enum BasicsError {
    /// Writing to the output stream failed.
    Io(io::Error),
    /// A template could not be interpolated.
    Template {
        /// The offending template.
        template: String,
        /// What went wrong.
        reason: String,
    },
    /// A numeric format specifier is unknown or does not apply to the value.
    Format(String),
    /// A character index is past the end of the string.
    IndexOutOfRange {
        /// Requested character index.
        index: usize,
        /// Number of characters in the string.
        len: usize,
    },
    /// A host environment query failed.
    HostQuery {
        /// Which fact was being queried.
        query: &'static str,
        /// Underlying failure.
        message: String,
    },
}

impl BasicsError {
    pub(crate) fn template(template: &str, reason: impl Into<String>) -> Self {
        Self::Template {
            template: template.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn host(query: &'static str, err: impl fmt::Display) -> Self {
        Self::HostQuery {
            query,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for BasicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasicsError::Io(e) => write!(f, "I/O error: {e}"),
            BasicsError::Template { template, reason } => {
                write!(f, "Invalid template {template:?}: {reason}")
            }
            BasicsError::Format(msg) => write!(f, "Format error: {msg}"),
            BasicsError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for string of length {len}")
            }
            BasicsError::HostQuery { query, message } => {
                write!(f, "Failed to query {query}: {message}")
            }
        }
    }
}

impl std::error::Error for BasicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BasicsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BasicsError {
    fn from(err: io::Error) -> Self {
        BasicsError::Io(err)
    }
}

/// Result alias used throughout the crate.
pub type BasicsResult<T> = Result<T, BasicsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_has_source() {
        let err = BasicsError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_host_query_display() {
        let err = BasicsError::host("processor count", "not supported");
        assert_eq!(
            err.to_string(),
            "Failed to query processor count: not supported"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = BasicsError::IndexOutOfRange { index: 20, len: 11 };
        assert_eq!(
            err.to_string(),
            "Index 20 out of range for string of length 11"
        );
    }

    #[test]
    fn test_template_display_quotes_template() {
        let err = BasicsError::template("Hello {0", "unterminated placeholder");
        assert_eq!(
            err.to_string(),
            "Invalid template \"Hello {0\": unterminated placeholder"
        );
    }
}
