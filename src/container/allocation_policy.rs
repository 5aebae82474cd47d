use std::collections::TryReserveError;
use std::fmt;

/// This trait defines how a dynamic container obtains storage.
///
/// The policy is stored in the container, copied to clones made with
/// `clone_in` and kept by `take`. Every reservation of the container goes
/// through it.
pub trait AllocationPolicy: Clone + fmt::Debug {
    /// Ensures `storage` can hold `required` elements in total.
    fn reserve<T>(&self, storage: &mut Vec<T>, required: usize);

    /// Reserves room for `additional` more elements, reporting failure
    /// instead of aborting.
    fn try_reserve<T>(&self, storage: &mut Vec<T>, additional: usize) -> Result<(), TryReserveError>;

    /// Called once the storage has reached its final length.
    #[inline]
    fn settle<T>(&self, _storage: &mut Vec<T>) {}
}

/// Amortized growth, as `Vec` does.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct DefaultPolicy;

/// Exact growth. Storage is shrunk to fit after every resize.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct ExactPolicy;

impl AllocationPolicy for DefaultPolicy {
    #[inline]
    fn reserve<T>(&self, storage: &mut Vec<T>, required: usize) {
        storage.reserve(required.saturating_sub(storage.len()));
    }

    #[inline]
    fn try_reserve<T>(&self, storage: &mut Vec<T>, additional: usize) -> Result<(), TryReserveError> {
        storage.try_reserve(additional)
    }
}

impl AllocationPolicy for ExactPolicy {
    #[inline]
    fn reserve<T>(&self, storage: &mut Vec<T>, required: usize) {
        storage.reserve_exact(required.saturating_sub(storage.len()));
    }

    #[inline]
    fn try_reserve<T>(&self, storage: &mut Vec<T>, additional: usize) -> Result<(), TryReserveError> {
        storage.try_reserve_exact(additional)
    }

    fn settle<T>(&self, storage: &mut Vec<T>) {
        storage.shrink_to_fit();
    }
}
