use std::fmt;

/// This trait defines how an element is reached once the mapping has
/// turned its coordinates into a flat offset.
///
/// The default accessor indexes the storage. Custom accessors can remap
/// offsets or add checks; they must stay within `data`.
pub trait Accessor<T>: Clone + fmt::Debug + Default {
    fn access<'a>(&self, data: &'a [T], offset: usize) -> &'a T;

    fn access_mut<'a>(&self, data: &'a mut [T], offset: usize) -> &'a mut T;

    /// # Safety
    ///
    /// `offset` must be lower than `data.len()`.
    #[inline]
    unsafe fn access_unchecked<'a>(&self, data: &'a [T], offset: usize) -> &'a T {
        data.get_unchecked(offset)
    }

    /// # Safety
    ///
    /// `offset` must be lower than `data.len()`.
    #[inline]
    unsafe fn access_unchecked_mut<'a>(&self, data: &'a mut [T], offset: usize) -> &'a mut T {
        data.get_unchecked_mut(offset)
    }
}

/// Plain reference access to the storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultAccessor;

impl<T> Accessor<T> for DefaultAccessor {
    #[inline]
    fn access<'a>(&self, data: &'a [T], offset: usize) -> &'a T {
        &data[offset]
    }

    #[inline]
    fn access_mut<'a>(&self, data: &'a mut [T], offset: usize) -> &'a mut T {
        &mut data[offset]
    }
}
