//! Error types for SQS queue URL parsing.

use std::fmt;

/// Errors that can occur when parsing a queue URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Wrong number of `/`-separated segments after the scheme
    SegmentCount {
        /// Required segment count
        expected: usize,
        /// Segments found
        actual: usize,
    },
    /// Endpoint host does not start with `sqs`
    NotSqsEndpoint {
        /// The endpoint that was found
        endpoint: String,
    },
    /// Account id segment failed validation
    InvalidAccountId(AccountIdError),
    /// Queue name segment failed validation
    InvalidQueueName(QueueNameError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse queue URL '{}': ", self.input)?;
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SegmentCount { expected, actual } => {
                write!(
                    f,
                    "expected {expected} path segments (endpoint/account/queue), found {actual}"
                )
            }
            Self::NotSqsEndpoint { endpoint } => {
                write!(f, "endpoint '{endpoint}' does not start with 'sqs'")
            }
            Self::InvalidAccountId(e) => write!(f, "invalid account id: {e}"),
            Self::InvalidQueueName(e) => write!(f, "invalid queue name: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidAccountId(e) => Some(e),
            ParseErrorKind::InvalidQueueName(e) => Some(e),
            ParseErrorKind::SegmentCount { .. } | ParseErrorKind::NotSqsEndpoint { .. } => None,
        }
    }
}

/// Errors for account id parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountIdError {
    /// Account id is not exactly 12 characters
    WrongLength {
        /// Required length
        expected: usize,
        /// Actual length
        actual: usize,
    },
    /// Non-digit character
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for AccountIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "account id must be {expected} digits, found {actual} characters")
            }
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; only decimal digits allowed"
                )
            }
        }
    }
}

impl std::error::Error for AccountIdError {}

/// Errors for queue name parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueNameError {
    /// Queue name is empty
    Empty,
    /// Queue name exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Character outside letters, digits, hyphen and underscore
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for QueueNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "queue name cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "queue name length {actual} exceeds maximum {max}")
            }
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; \
                     allowed: letters, digits, hyphen, underscore"
                )
            }
        }
    }
}

impl std::error::Error for QueueNameError {}
