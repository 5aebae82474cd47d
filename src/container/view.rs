//! `view` contains the shaped view every container carries over its storage.
//!
//! A `View` is made of a `Mapping` and an `Accessor`. It never stores a
//! pointer to the storage: moving a fixed container copies its inline
//! elements to a new address, so the view is bound to the storage only for
//! the duration of an access. `bind` and `bind_mut` borrow the storage and
//! return a `Span` or a `SpanMut` that perform the accesses.

use super::accessor::Accessor;
use super::layout::{LayoutPolicy, Mapping};
use super::shape::Position;
use crate::error::{Error, Result};
use generic_array::ArrayLength;
use std::fmt;

pub struct View<R, L, A>
where
    R: ArrayLength<usize>,
{
    mapping: Mapping<R, L>,
    accessor: A,
}

impl<R, L, A> View<R, L, A>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
{
    pub fn new(extents: Position<R>, accessor: A) -> Self {
        View {
            mapping: Mapping::new(extents),
            accessor,
        }
    }

    /// Replaces the mapping, keeping the accessor.
    pub(crate) fn rebuild(&mut self, extents: Position<R>) {
        self.mapping = Mapping::new(extents);
        log::trace!("view rebuilt: {:?}", self.mapping);
    }
}

impl<R, L, A> View<R, L, A>
where
    R: ArrayLength<usize>,
{
    #[inline]
    pub fn mapping(&self) -> &Mapping<R, L> {
        &self.mapping
    }

    #[inline]
    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    #[inline]
    pub fn extents(&self) -> &Position<R> {
        self.mapping.extents()
    }

    /// Binds the view to `data` for reading.
    #[inline]
    pub fn bind<'a, T>(&'a self, data: &'a [T]) -> Span<'a, T, R, L, A>
    where
        A: Accessor<T>,
    {
        Span { data, view: self }
    }

    /// Binds the view to `data` for reading and writing.
    #[inline]
    pub fn bind_mut<'a, T>(&'a self, data: &'a mut [T]) -> SpanMut<'a, T, R, L, A>
    where
        A: Accessor<T>,
    {
        SpanMut { data, view: self }
    }
}

impl<R, L, A> Default for View<R, L, A>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Default,
{
    fn default() -> Self {
        View {
            mapping: Mapping::empty(),
            accessor: A::default(),
        }
    }
}

impl<R, L, A> Clone for View<R, L, A>
where
    R: ArrayLength<usize>,
    A: Clone,
{
    fn clone(&self) -> Self {
        View {
            mapping: self.mapping.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<R, L, A> fmt::Debug for View<R, L, A>
where
    R: ArrayLength<usize>,
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("mapping", &self.mapping)
            .field("accessor", &self.accessor)
            .finish()
    }
}

fn out_of_range<R>(position: &[usize], extents: &Position<R>) -> Error
where
    R: ArrayLength<usize>,
{
    Error::PositionOutOfRange {
        position: position.to_vec(),
        extents: extents.to_vec(),
    }
}

/// A view bound to a shared borrow of the storage.
pub struct Span<'a, T, R, L, A>
where
    R: ArrayLength<usize>,
{
    data: &'a [T],
    view: &'a View<R, L, A>,
}

impl<'a, T, R, L, A> Span<'a, T, R, L, A>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    /// Element at `position`.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the storage. A position
    /// outside the extents whose offset still lands in the storage is only
    /// caught in debug builds.
    #[inline]
    pub fn get<P: Into<Position<R>>>(&self, position: P) -> &'a T {
        let position = position.into();
        debug_assert!(
            self.view.mapping.contains(&position),
            "position {:?} out of range for extents {:?}",
            position.as_slice(),
            self.view.extents().as_slice()
        );
        self.view
            .accessor
            .access(self.data, self.view.mapping.offset(&position))
    }

    pub fn get_checked<P: Into<Position<R>>>(&self, position: P) -> Result<&'a T> {
        let position = position.into();
        if self.view.mapping.contains(&position) {
            Ok(self
                .view
                .accessor
                .access(self.data, self.view.mapping.offset(&position)))
        } else {
            Err(out_of_range(&position, self.view.extents()))
        }
    }

    /// # Safety
    ///
    /// `position` must lie within the extents.
    #[inline]
    pub unsafe fn get_unchecked<P: Into<Position<R>>>(&self, position: P) -> &'a T {
        let offset = self.view.mapping.offset(&position.into());
        self.view.accessor.access_unchecked(self.data, offset)
    }

    #[inline]
    pub fn extents(&self) -> &'a Position<R> {
        self.view.extents()
    }

    #[inline]
    pub fn mapping(&self) -> &'a Mapping<R, L> {
        &self.view.mapping
    }

    #[inline]
    pub fn rank(&self) -> usize {
        R::USIZE
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Iterates over the elements in storage order, along with their positions.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Position<R>, &'a T)> + 'a
    where
        T: 'a,
        L: 'a,
        A: 'a,
    {
        let data = self.data;
        let view = self.view;
        (0..data.len()).map(move |offset| {
            (
                view.mapping.position_of_unchecked(offset),
                view.accessor.access(data, offset),
            )
        })
    }
}

impl<'a, T, R, L, A> Clone for Span<'a, T, R, L, A>
where
    R: ArrayLength<usize>,
{
    fn clone(&self) -> Self {
        Span {
            data: self.data,
            view: self.view,
        }
    }
}

impl<'a, T, R, L, A> Copy for Span<'a, T, R, L, A> where R: ArrayLength<usize> {}

/// A view bound to an exclusive borrow of the storage.
pub struct SpanMut<'a, T, R, L, A>
where
    R: ArrayLength<usize>,
{
    data: &'a mut [T],
    view: &'a View<R, L, A>,
}

impl<'a, T, R, L, A> SpanMut<'a, T, R, L, A>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    #[inline]
    pub fn get<P: Into<Position<R>>>(&self, position: P) -> &T {
        self.as_span().get(position)
    }

    #[inline]
    pub fn get_mut<P: Into<Position<R>>>(&mut self, position: P) -> &mut T {
        let position = position.into();
        debug_assert!(
            self.view.mapping.contains(&position),
            "position {:?} out of range for extents {:?}",
            position.as_slice(),
            self.view.extents().as_slice()
        );
        let offset = self.view.mapping.offset(&position);
        self.view.accessor.access_mut(self.data, offset)
    }

    pub fn get_checked_mut<P: Into<Position<R>>>(&mut self, position: P) -> Result<&mut T> {
        let position = position.into();
        if self.view.mapping.contains(&position) {
            let offset = self.view.mapping.offset(&position);
            Ok(self.view.accessor.access_mut(self.data, offset))
        } else {
            Err(out_of_range(&position, self.view.extents()))
        }
    }

    /// Consumes the span and returns the element at `position` for the
    /// whole lifetime of the borrow.
    pub fn into_mut<P: Into<Position<R>>>(self, position: P) -> &'a mut T {
        let position = position.into();
        debug_assert!(
            self.view.mapping.contains(&position),
            "position {:?} out of range for extents {:?}",
            position.as_slice(),
            self.view.extents().as_slice()
        );
        let SpanMut { data, view } = self;
        view.accessor.access_mut(data, view.mapping.offset(&position))
    }

    pub fn into_checked_mut<P: Into<Position<R>>>(self, position: P) -> Result<&'a mut T> {
        let position = position.into();
        let SpanMut { data, view } = self;
        if view.mapping.contains(&position) {
            Ok(view.accessor.access_mut(data, view.mapping.offset(&position)))
        } else {
            Err(out_of_range(&position, view.extents()))
        }
    }

    /// # Safety
    ///
    /// `position` must lie within the extents.
    pub unsafe fn into_unchecked_mut<P: Into<Position<R>>>(self, position: P) -> &'a mut T {
        let SpanMut { data, view } = self;
        view.accessor
            .access_unchecked_mut(data, view.mapping.offset(&position.into()))
    }

    #[inline]
    pub fn as_span(&self) -> Span<'_, T, R, L, A> {
        Span {
            data: &*self.data,
            view: self.view,
        }
    }

    #[inline]
    pub fn extents(&self) -> &Position<R> {
        self.view.extents()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::accessor::DefaultAccessor;
    use crate::container::layout::{ColumnMajor, RowMajor};
    use typenum::{U2, U3};

    /// Reads the storage back to front.
    #[derive(Debug, Clone, Default)]
    struct Reversed;

    impl<T> Accessor<T> for Reversed {
        fn access<'a>(&self, data: &'a [T], offset: usize) -> &'a T {
            &data[data.len() - 1 - offset]
        }

        fn access_mut<'a>(&self, data: &'a mut [T], offset: usize) -> &'a mut T {
            let last = data.len() - 1;
            &mut data[last - offset]
        }
    }

    #[test]
    fn span_get() {
        let data = [0, 1, 2, 3, 4, 5];
        let view: View<U2, RowMajor, DefaultAccessor> = View::new([2, 3].into(), DefaultAccessor);
        let span = view.bind(&data);

        assert_eq!(*span.get([1, 0]), 3);
        assert_eq!(*span.get([0, 2]), 2);
        assert_eq!(span.get_checked([2, 0]), Err(Error::PositionOutOfRange {
            position: vec![2, 0],
            extents: vec![2, 3],
        }));
        assert_eq!(span.rank(), 2);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn column_major_span() {
        let data = [0, 1, 2, 3, 4, 5];
        let view: View<U2, ColumnMajor, DefaultAccessor> = View::new([2, 3].into(), DefaultAccessor);
        let span = view.bind(&data);

        assert_eq!(*span.get([1, 0]), 1);
        assert_eq!(*span.get([0, 1]), 2);
        assert_eq!(*span.get([1, 2]), 5);
    }

    #[test]
    fn span_mut() {
        let mut data = [0; 6];
        let view: View<U2, RowMajor, DefaultAccessor> = View::new([3, 2].into(), DefaultAccessor);

        let mut span = view.bind_mut(&mut data);
        *span.get_mut([2, 1]) = 7;
        assert!(span.get_checked_mut([3, 0]).is_err());
        *span.into_mut([0, 1]) = 4;

        assert_eq!(data, [0, 4, 0, 0, 0, 7]);
    }

    #[test]
    fn custom_accessor() {
        let mut data = [0, 1, 2, 3];
        let view: View<U2, RowMajor, Reversed> = View::new([2, 2].into(), Reversed);

        assert_eq!(*view.bind(&data).get([0, 0]), 3);
        *view.bind_mut(&mut data).get_mut([1, 1]) = 9;
        assert_eq!(data, [9, 1, 2, 3]);
    }

    #[test]
    fn indexed_iter() {
        let data = [10, 11, 12, 13, 14, 15];
        let view: View<U3, RowMajor, DefaultAccessor> = View::new([1, 2, 3].into(), DefaultAccessor);
        let items: Vec<(Vec<usize>, i32)> = view
            .bind(&data)
            .indexed_iter()
            .map(|(position, x)| (position.to_vec(), *x))
            .collect();

        assert_eq!(items[0], (vec![0, 0, 0], 10));
        assert_eq!(items[4], (vec![0, 1, 1], 14));
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn rebuild_keeps_accessor() {
        let mut view: View<U2, RowMajor, DefaultAccessor> = View::default();
        assert_eq!(view.extents().as_slice(), &[0, 0]);

        view.rebuild([4, 5].into());
        assert_eq!(view.extents().as_slice(), &[4, 5]);
        assert_eq!(view.mapping().strides().as_slice(), &[5, 1]);
    }
}
