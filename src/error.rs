//! `error` defines the recoverable failures of the containers.
//!
//! Only the checked access paths, the fallible constructors and assignments
//! and `try_reserve` return these errors. The unchecked paths (`Index`,
//! `element`, `Span::get`) treat out-of-range input as a contract violation
//! and panic instead.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Flat index past the end of the storage.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Coordinate outside the extents of the container.
    #[error("position {position:?} out of range for extents {extents:?}")]
    PositionOutOfRange {
        position: Vec<usize>,
        extents: Vec<usize>,
    },

    #[error("container is empty")]
    Empty,

    /// The input holds more elements than the shape can receive.
    ///
    /// Inputs are read only up to the first surplus element, so `got` is a
    /// lower bound unless the input length was known up front.
    #[error("expected at most {expected} elements, got at least {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;
