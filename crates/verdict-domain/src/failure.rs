use std::fmt;

use crate::error::DomainError;

/// Failed outcome carrying one or more errors in order
///
/// Structurally non-empty: the primary error is stored apart from any
/// additional ones, so a `Failure` can never exist without at least one
/// error. Status mapping only consults [`Failure::primary`]; additional
/// errors travel along for logging and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    primary: DomainError,
    additional: Vec<DomainError>,
}

impl Failure {
    /// Fail with a single primary error
    pub const fn new(primary: DomainError) -> Self {
        Self { primary, additional: Vec::new() }
    }

    /// Append a secondary error, preserving order
    #[must_use]
    pub fn with_error(mut self, error: DomainError) -> Self {
        self.additional.push(error);
        self
    }

    /// First error in the sequence, the one that drives status mapping
    pub const fn primary(&self) -> &DomainError {
        &self.primary
    }

    /// All errors in order, primary first
    pub fn errors(&self) -> impl Iterator<Item = &DomainError> {
        std::iter::once(&self.primary).chain(self.additional.iter())
    }

    /// Number of errors carried, always at least one
    pub fn len(&self) -> usize {
        1 + self.additional.len()
    }

    /// Never true; present to satisfy the `len` convention
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl From<DomainError> for Failure {
    fn from(error: DomainError) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)
    }
}

impl std::error::Error for Failure {}
