//! Error types for URI parsing and the relational operations.

use std::fmt;

/// Errors that can occur when parsing a URI.
///
/// Raised only at construction: a [`UriValue`](crate::UriValue) either
/// parses completely or not at all.
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
    /// An authority was introduced (e.g. by `//`) but its host is empty
    EmptyHost,
    /// A colon with no port digits after it ends the input
    MissingPort,
    /// Host has an unclosed `[`, a stray `]`, or text other than a port
    /// after its closing `]`
    UnbalancedBrackets {
        /// The offending host
        host: String,
    },
    /// Port has more characters than a port can have
    PortTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Port is not a number or is out of range
    InvalidPort {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::EmptyHost => write!(f, "authority has an empty host"),
            ParseErrorKind::MissingPort => write!(f, "expected port digits after ':'"),
            ParseErrorKind::UnbalancedBrackets { host } => {
                write!(f, "host '{host}' has unbalanced brackets")
            }
            ParseErrorKind::PortTooLong { max, actual } => {
                write!(f, "port is {actual} chars, max is {max}")
            }
            ParseErrorKind::InvalidPort { value, reason } => {
                write!(f, "invalid port '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors returned by [`UriValue::absolute_uri`](crate::UriValue::absolute_uri)
/// and [`UriValue::relative_uri`](crate::UriValue::relative_uri).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The base URI is relative where an absolute one is required
    BaseNotAbsolute {
        /// The offending base
        base: String,
    },
    /// The URI is absolute where a relative one is required
    SelfNotRelative {
        /// The offending URI
        uri: String,
    },
    /// The URI is relative where an absolute one is required
    SelfNotAbsolute {
        /// The offending URI
        uri: String,
    },
    /// The URI does not lie under the base
    NotUnder {
        /// The URI being relativized
        uri: String,
        /// The base it was expected under
        base: String,
    },
    /// The derived URI text could not be parsed
    Malformed(ParseError),
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseNotAbsolute { base } => {
                write!(f, "base URI '{base}' is not absolute")
            }
            Self::SelfNotRelative { uri } => write!(f, "URI '{uri}' is not relative"),
            Self::SelfNotAbsolute { uri } => write!(f, "URI '{uri}' is not absolute"),
            Self::NotUnder { uri, base } => {
                write!(f, "URI '{uri}' is not under '{base}'")
            }
            Self::Malformed(e) => write!(f, "derived URI is malformed: {e}"),
        }
    }
}

impl std::error::Error for UriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for UriError {
    fn from(e: ParseError) -> Self {
        Self::Malformed(e)
    }
}
