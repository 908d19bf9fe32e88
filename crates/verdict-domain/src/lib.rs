//! Domain error taxonomy and result values
//!
//! Business logic returns [`DomainResult`] instead of panicking or bubbling
//! opaque errors. The HTTP layer decides what a [`Failure`] means on the
//! wire; this crate stays free of transport concerns.

mod error;
mod failure;
pub mod keys;

pub use error::{DomainError, ErrorTag};
pub use failure::Failure;

/// Outcome of a business operation: a value or a non-empty set of errors
pub type DomainResult<T> = Result<T, Failure>;
