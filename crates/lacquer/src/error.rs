//! Error types for template resolution.
//!
//! This module provides [`ResolveError`], the error type for single-template
//! resolution, and [`ResolveErrors`], the collection returned by
//! [`validate_template`](crate::validate_template) so that a startup check
//! can report every problem in a template at once.

use std::fmt;

/// Error type for template resolution.
///
/// All resolution failures are surfaced synchronously to the caller; a failed
/// resolution produces no partial output. Resolution is deterministic, so
/// there is no retry path: the same template and theme always fail the same
/// way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A placeholder references a color role absent from the theme.
    UnknownRole {
        /// The missing role name.
        role: String,
        /// Identifier of the theme that was searched.
        theme: String,
    },

    /// A placeholder invokes a transform function the resolver does not know.
    UnknownFunction {
        /// The unrecognized function name.
        function: String,
    },

    /// A placeholder's syntax could not be parsed, or its arguments do not
    /// fit the invoked transform (wrong arity, wrong type, out-of-range
    /// percent or alpha).
    MalformedPlaceholder {
        /// The placeholder body as it appeared in the template.
        placeholder: String,
        /// Description of what was wrong.
        message: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownRole { role, theme } => {
                write!(f, "unknown color role '{}' in theme '{}'", role, theme)
            }
            ResolveError::UnknownFunction { function } => {
                write!(f, "unknown transform function '{}'", function)
            }
            ResolveError::MalformedPlaceholder {
                placeholder,
                message,
            } => {
                write!(f, "malformed placeholder '{{{{ {} }}}}': {}", placeholder, message)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// A collection of resolution errors from validating a whole template.
///
/// Unlike [`resolve`](crate::resolve), which stops at the first failure,
/// [`validate_template`](crate::validate_template) keeps scanning and returns
/// everything it found, so one validation pass reports all problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveErrors {
    /// The individual errors, in template order.
    pub errors: Vec<ResolveError>,
}

impl ResolveErrors {
    /// Wraps a non-empty list of errors.
    pub fn new(errors: Vec<ResolveError>) -> Self {
        Self { errors }
    }

    /// Returns the number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors were collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ResolveErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} template error(s)", self.errors.len())?;
        for err in &self.errors {
            write!(f, "\n  - {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolveErrors {}
