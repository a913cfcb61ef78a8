//! Error type shared by the crate.

use thiserror::Error;

/// Shorthand for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input sequence has no elements.
    #[error("input sequence cannot be empty")]
    EmptyInput,
}
