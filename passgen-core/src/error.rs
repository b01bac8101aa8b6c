//! Error types for the checked generation and validation APIs.

use thiserror::Error;

/// Errors surfaced by the checked APIs.
///
/// The boolean [`crate::validator::validate_password`] contract never
/// produces an error; a failed validation there is an ordinary `false`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A random draw was requested over an empty range.
    #[error("random bound must be at least 1")]
    InvalidBound,

    /// A candidate password failed one or more policy requirements.
    #[error("password does not meet the minimum requirements")]
    InvalidPasswordRequirements,
}
