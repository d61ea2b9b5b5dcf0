//! Error types used in the library.
//!
//! - A single public error, [TranslationError], is returned by both translation entry points.
//! - Component errors (e.g. [RegistryError]) are noted close to where they arise and converted into a [TranslationError] with `?`.
//!
//! Note, inputs which are malformed but translate without fault (unbalanced parentheses, overlapping connectives, etc.) are *not* errors.
//! These produce a degraded translation instead.
//
// As elsewhere, err::{self} is often used to prefix use of the types with `err::`.

use std::fmt;

/// The cause of a failed translation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorCause {
    /// A component of the registry failed.
    Registry(RegistryError),

    /// After normalisation, some proposition was the empty string.
    EmptyProposition,

    /// After removing whitespace, the formula was the empty string.
    EmptyFormula,

    /// Recursion when splitting a sentence went past the configured limit.
    DepthExceeded(usize),
}

/// Errors from the [registry](crate::db::registry).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// There are no more fresh variables under the overflow policy of the registry.
    VariablesExhausted,
}

/// The error returned when translation of some input fails.
///
/// No partial result accompanies the error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TranslationError {
    cause: ErrorCause,
}

impl TranslationError {
    pub fn new(cause: ErrorCause) -> Self {
        TranslationError { cause }
    }

    /// The underlying cause.
    pub fn cause(&self) -> &ErrorCause {
        &self.cause
    }
}

impl From<ErrorCause> for TranslationError {
    fn from(cause: ErrorCause) -> Self {
        TranslationError::new(cause)
    }
}

impl From<RegistryError> for TranslationError {
    fn from(e: RegistryError) -> Self {
        TranslationError::new(ErrorCause::Registry(e))
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VariablesExhausted => write!(f, "no propositional variables remain"),
        }
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(e) => write!(f, "{e}"),
            Self::EmptyProposition => write!(f, "empty proposition"),
            Self::EmptyFormula => write!(f, "empty formula"),
            Self::DepthExceeded(limit) => write!(f, "nesting deeper than {limit}"),
        }
    }
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translation failed: {}", self.cause)
    }
}

impl std::error::Error for TranslationError {}
