//! Parse error types.
//!
//! Failures in this crate are ordinary values carried on the returned
//! [`ParseState`](crate::ParseState), never panics or any other non-local
//! escape. This holds uniformly across all combinators, which is what makes
//! a failing [`sequence`](crate::combinator::sequence) recoverable when it
//! is nested inside a [`choice`](crate::combinator::choice).

use core::fmt;

/// The reason a parse step failed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// The remaining input was empty when a match was attempted.
    EndOfInput,
    /// The remaining input does not start with the expected text.
    LiteralMismatch {
        /// The text the literal parser was looking for.
        expected: String,
    },
    /// The expected character class is absent at the current position.
    NoMatch {
        /// A short description of the expected pattern.
        expected: &'static str,
    },
    /// Every branch of a `choice` failed.
    NoAlternativeMatched,
    /// A `sequence` aborted at one of its sub-parsers.
    SequenceStepFailed {
        /// The zero-based position of the failing sub-parser within the
        /// sequence.
        step: usize,
        /// The failing sub-parser's own error, preserved verbatim.
        cause: Box<Error>,
    },
}

/// A parse error, locating an [`ErrorKind`] at the input position where the
/// failure occurred.
///
/// A run only ever reports its *first* failure: once a state has failed,
/// every remaining step passes it through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Error {
    index: usize,
    kind: ErrorKind,
}

impl Error {
    /// Create a new error at the given input position.
    pub fn at(index: usize, kind: ErrorKind) -> Self {
        Self { index, kind }
    }

    /// The byte offset at which the failure occurred.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The reason for the failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::EndOfInput => {
                write!(f, "unexpected end of input at {}", self.index)
            }
            ErrorKind::LiteralMismatch { expected } => {
                write!(f, "expected {:?} at {}", expected, self.index)
            }
            ErrorKind::NoMatch { expected } => {
                write!(f, "expected {} at {}", expected, self.index)
            }
            ErrorKind::NoAlternativeMatched => {
                write!(f, "no alternative matched at {}", self.index)
            }
            ErrorKind::SequenceStepFailed { step, cause } => {
                write!(f, "sequence step {} failed: {}", step, cause)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::SequenceStepFailed { cause, .. } => Some(&**cause),
            _ => None,
        }
    }
}
