//! `vector` contains the dynamic-shape container.
//!
//! The rank of a `Vector` is a type-level integer but its extents are
//! runtime values. Elements live in a heap-allocated `Vec` that grows and
//! shrinks with the shape. Every operation that touches the storage or the
//! extents ends by rebuilding the view, so the mapping always describes the
//! current buffer.

use super::accessor::{Accessor, DefaultAccessor};
use super::allocation_policy::{AllocationPolicy, DefaultPolicy};
use super::layout::{LayoutPolicy, Mapping, RowMajor};
use super::shape::{linear_size, Position};
use super::view::{Span, SpanMut, View};
use crate::error::{Error, Result};
use generic_array::ArrayLength;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use typenum::{U1, U2, U3, U4, U5, U6};

/// Dynamic-shape multi-dimensional container.
///
/// `Vector` is parametrized by:
/// * T the element type,
/// * R the type-level rank, e.g. `U2` for a matrix,
/// * L the layout policy mapping coordinates to flat offsets,
/// * A the accessor policy reaching the element at an offset,
/// * P the allocation policy steering the growth of the storage.
///
/// An empty vector has all-zero extents. Resizing is a flat
/// reallocate-and-refill: the first elements of the storage are kept in
/// place, not the elements at the same coordinates.
///
/// ```
/// use multi::prelude::*;
/// use multi::typenum::U2;
///
/// let mut v: Vector<i32, U2> = Vector::from_slice([2, 2], &[0, 1, 2, 3]).unwrap();
/// assert_eq!(v[[1, 0]], 2);
///
/// v.resize([3, 3], 9);
/// assert_eq!(v.as_slice(), &[0, 1, 2, 3, 9, 9, 9, 9, 9]);
/// ```
pub struct Vector<T, R, L = RowMajor, A = DefaultAccessor, P = DefaultPolicy>
where
    R: ArrayLength<usize>,
{
    storage: Vec<T>,
    view: View<R, L, A>,
    policy: P,
}

/// Truncates the storage back to its original length when dropped.
///
/// Growth runs user code (`Clone`, fill closures). If that code panics the
/// storage shrinks back to the elements the old extents describe.
struct TruncateOnUnwind<'a, T> {
    storage: &'a mut Vec<T>,
    len: usize,
}

impl<'a, T> TruncateOnUnwind<'a, T> {
    fn new(storage: &'a mut Vec<T>) -> Self {
        let len = storage.len();
        TruncateOnUnwind { storage, len }
    }

    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl<T> Drop for TruncateOnUnwind<'_, T> {
    fn drop(&mut self) {
        self.storage.truncate(self.len);
    }
}

impl<T, R, L, A, P> Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy,
{
    fn from_parts(previous: *const T, storage: Vec<T>, extents: Position<R>, accessor: A, policy: P) -> Self {
        let mut vector = Vector {
            storage,
            view: View::new(Position::default(), accessor),
            policy,
        };
        vector.rebuild_view(previous, extents);

        vector
    }

    /// Binds the view to the current storage and `extents`.
    ///
    /// `previous` is the address of the storage before the mutation that
    /// triggered the rebuild.
    fn rebuild_view(&mut self, previous: *const T, extents: Position<R>) {
        let current = self.storage.as_ptr();
        if previous != current {
            log::debug!(
                "storage relocated from {:p} to {:p} ({} elements, capacity {})",
                previous,
                current,
                self.storage.len(),
                self.storage.capacity()
            );
        }
        self.view.rebuild(extents);

        debug_assert_eq!(self.storage.len(), self.view.mapping().required_span_size());
    }

    fn resize_storage<F>(&mut self, previous: *const T, extents: Position<R>, f: F)
    where
        F: FnMut() -> T,
    {
        let required = linear_size(&extents);
        self.policy.reserve(&mut self.storage, required);

        let mut guard = TruncateOnUnwind::new(&mut self.storage);
        guard.storage.resize_with(required, f);
        guard.disarm();
        self.policy.settle(&mut self.storage);

        self.rebuild_view(previous, extents);
    }

    /// Installs `staged` as the storage of a vector of the given extents.
    /// `staged` must already hold exactly one element per position.
    fn replace_storage(&mut self, staged: Vec<T>, extents: Position<R>) {
        let previous = self.storage.as_ptr();
        self.storage = staged;
        self.policy.settle(&mut self.storage);

        self.rebuild_view(previous, extents);
    }

    /// Empty vector.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::new_in(P::default())
    }

    /// Empty vector using `policy` for its allocations.
    pub fn new_in(policy: P) -> Self {
        let storage = Vec::new();
        Self::from_parts(storage.as_ptr(), storage, Position::default(), A::default(), policy)
    }

    /// Default-filled vector of the given extents.
    pub fn with_dimensions<D: Into<Position<R>>>(dimensions: D) -> Self
    where
        T: Default,
        P: Default,
    {
        Self::with_dimensions_in(dimensions, P::default())
    }

    pub fn with_dimensions_in<D: Into<Position<R>>>(dimensions: D, policy: P) -> Self
    where
        T: Default,
    {
        let mut vector = Self::new_in(policy);
        vector.resize_default(dimensions);

        vector
    }

    /// Vector of the given extents with every element set to `value`.
    pub fn from_elem<D: Into<Position<R>>>(dimensions: D, value: T) -> Self
    where
        T: Clone,
        P: Default,
    {
        Self::from_elem_in(dimensions, value, P::default())
    }

    pub fn from_elem_in<D: Into<Position<R>>>(dimensions: D, value: T, policy: P) -> Self
    where
        T: Clone,
    {
        let mut vector = Self::new_in(policy);
        vector.resize(dimensions, value);

        vector
    }

    /// Builds a vector of the given extents from the elements of `iter`
    /// in storage order.
    ///
    /// Missing trailing elements are default-initialized. An iterator
    /// yielding more elements than the extents address is rejected with
    /// `Error::LengthMismatch`.
    pub fn try_from_iter<D, I>(dimensions: D, iter: I) -> Result<Self>
    where
        T: Default,
        P: Default,
        D: Into<Position<R>>,
        I: IntoIterator<Item = T>,
    {
        let mut vector = Self::new();
        vector.assign_iter(dimensions, iter)?;

        Ok(vector)
    }

    pub fn from_slice<D: Into<Position<R>>>(dimensions: D, slice: &[T]) -> Result<Self>
    where
        T: Clone + Default,
        P: Default,
    {
        Self::try_from_iter(dimensions, slice.iter().cloned())
    }

    /// Takes ownership of `vec` as the storage of a vector of the given
    /// extents, with the padding rules of `try_from_iter`.
    pub fn from_vec<D: Into<Position<R>>>(dimensions: D, vec: Vec<T>) -> Result<Self>
    where
        T: Default,
        P: Default,
    {
        let extents = dimensions.into();
        let required = linear_size(&extents);
        if vec.len() > required {
            return Err(Error::LengthMismatch {
                expected: required,
                got: vec.len(),
            });
        }

        let mut vector = Self::new();
        let previous = vec.as_ptr();
        vector.storage = vec;
        vector.resize_storage(previous, extents, T::default);

        Ok(vector)
    }

    /// Clones the vector into a new one using `policy` for its allocations.
    pub fn clone_in<Q>(&self, policy: Q) -> Vector<T, R, L, A, Q>
    where
        T: Clone,
        Q: AllocationPolicy,
    {
        let mut storage = Vec::new();
        policy.reserve(&mut storage, self.storage.len());
        storage.extend_from_slice(&self.storage);
        policy.settle(&mut storage);

        Vector::from_parts(
            self.storage.as_ptr(),
            storage,
            self.dimensions().clone(),
            self.view.accessor().clone(),
            policy,
        )
    }

    /// Resizes the vector to `dimensions`, filling new trailing slots with `value`.
    pub fn resize<D: Into<Position<R>>>(&mut self, dimensions: D, value: T)
    where
        T: Clone,
    {
        let previous = self.storage.as_ptr();
        self.resize_storage(previous, dimensions.into(), || value.clone());
    }

    pub fn resize_default<D: Into<Position<R>>>(&mut self, dimensions: D)
    where
        T: Default,
    {
        let previous = self.storage.as_ptr();
        self.resize_storage(previous, dimensions.into(), T::default);
    }

    pub fn resize_with<D, F>(&mut self, dimensions: D, f: F)
    where
        D: Into<Position<R>>,
        F: FnMut() -> T,
    {
        let previous = self.storage.as_ptr();
        self.resize_storage(previous, dimensions.into(), f);
    }

    /// Replaces the contents with `value` repeated over `dimensions`.
    pub fn assign<D: Into<Position<R>>>(&mut self, dimensions: D, value: T)
    where
        T: Clone,
    {
        let extents = dimensions.into();
        let required = linear_size(&extents);

        let mut staged = Vec::new();
        self.policy.reserve(&mut staged, required);
        staged.resize(required, value);

        self.replace_storage(staged, extents);
    }

    /// Replaces the contents with the elements of `iter`, with the padding
    /// rules of `try_from_iter`. The vector is left unchanged on error.
    pub fn assign_iter<D, I>(&mut self, dimensions: D, iter: I) -> Result<()>
    where
        T: Default,
        D: Into<Position<R>>,
        I: IntoIterator<Item = T>,
    {
        let extents = dimensions.into();
        let required = linear_size(&extents);

        let mut iter = iter.into_iter();
        let mut staged = Vec::new();
        self.policy.reserve(&mut staged, required);
        staged.extend(iter.by_ref().take(required));

        // The input may be unbounded, so stop at the first surplus element.
        if iter.next().is_some() {
            return Err(Error::LengthMismatch {
                expected: required,
                got: required.saturating_add(1),
            });
        }
        staged.resize_with(required, T::default);

        self.replace_storage(staged, extents);

        Ok(())
    }

    pub fn assign_slice<D: Into<Position<R>>>(&mut self, dimensions: D, slice: &[T]) -> Result<()>
    where
        T: Clone + Default,
    {
        self.assign_iter(dimensions, slice.iter().cloned())
    }

    /// Removes every element. The extents become all zero.
    pub fn clear(&mut self) {
        let previous = self.storage.as_ptr();
        self.storage.clear();
        self.policy.settle(&mut self.storage);

        self.rebuild_view(previous, Position::default());
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.storage.fill(value);
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let previous = self.storage.as_ptr();
        let required = self.storage.len().saturating_add(additional);
        self.policy.reserve(&mut self.storage, required);

        let extents = self.dimensions().clone();
        self.rebuild_view(previous, extents);
    }

    /// Like `reserve`, but reports allocation failure as `Error::Allocation`.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let previous = self.storage.as_ptr();
        self.policy.try_reserve(&mut self.storage, additional)?;

        let extents = self.dimensions().clone();
        self.rebuild_view(previous, extents);

        Ok(())
    }

    pub fn shrink_to_fit(&mut self) {
        let previous = self.storage.as_ptr();
        self.storage.shrink_to_fit();

        let extents = self.dimensions().clone();
        self.rebuild_view(previous, extents);
    }

    /// Exchanges storage, extents, accessor and policy with `other`.
    pub fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);

        for vector in [self, other] {
            let previous = vector.storage.as_ptr();
            let extents = vector.dimensions().clone();
            vector.rebuild_view(previous, extents);
        }
    }

    /// Moves the contents out, leaving an empty vector with the same
    /// accessor and policy behind.
    pub fn take(&mut self) -> Self {
        let storage = Vec::new();
        let empty = Self::from_parts(
            storage.as_ptr(),
            storage,
            Position::default(),
            self.view.accessor().clone(),
            self.policy.clone(),
        );

        std::mem::replace(self, empty)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Splits the vector into its extents and its storage.
    pub fn into_parts(self) -> (Position<R>, Vec<T>) {
        let extents = self.dimensions().clone();

        (extents, self.storage)
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        self.storage.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.storage.len(),
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.storage.len();
        self.storage
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn at_position<D: Into<Position<R>>>(&self, position: D) -> Result<&T> {
        self.span().get_checked(position)
    }

    pub fn at_position_mut<D: Into<Position<R>>>(&mut self, position: D) -> Result<&mut T> {
        self.span_mut().into_checked_mut(position)
    }

    /// Element at `position`, the call form of `v[position]`.
    ///
    /// # Panics
    ///
    /// Panics if the offset of `position` falls outside the storage.
    #[inline]
    pub fn element<D: Into<Position<R>>>(&self, position: D) -> &T {
        self.span().get(position)
    }

    #[inline]
    pub fn element_mut<D: Into<Position<R>>>(&mut self, position: D) -> &mut T {
        self.span_mut().into_mut(position)
    }

    /// # Safety
    ///
    /// `position` must lie within the extents.
    #[inline]
    pub unsafe fn element_unchecked<D: Into<Position<R>>>(&self, position: D) -> &T {
        self.span().get_unchecked(position)
    }

    /// # Safety
    ///
    /// `position` must lie within the extents.
    #[inline]
    pub unsafe fn element_unchecked_mut<D: Into<Position<R>>>(&mut self, position: D) -> &mut T {
        self.span_mut().into_unchecked_mut(position)
    }

    pub fn front(&self) -> Result<&T> {
        self.storage.first().ok_or(Error::Empty)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.storage.first_mut().ok_or(Error::Empty)
    }

    pub fn back(&self) -> Result<&T> {
        self.storage.last().ok_or(Error::Empty)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.storage.last_mut().ok_or(Error::Empty)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Largest number of elements a vector of `T` can hold.
    #[inline]
    pub fn max_size(&self) -> usize {
        isize::MAX as usize / std::mem::size_of::<T>().max(1)
    }

    #[inline]
    pub fn rank(&self) -> usize {
        R::USIZE
    }

    #[inline]
    pub fn dimensions(&self) -> &Position<R> {
        self.view.extents()
    }

    #[inline]
    pub fn mapping(&self) -> &Mapping<R, L> {
        self.view.mapping()
    }

    #[inline]
    pub fn view(&self) -> &View<R, L, A> {
        &self.view
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[inline]
    pub fn storage(&self) -> &[T] {
        &self.storage
    }

    #[inline]
    pub fn span(&self) -> Span<'_, T, R, L, A> {
        self.view.bind(self.storage.as_slice())
    }

    #[inline]
    pub fn span_mut(&mut self) -> SpanMut<'_, T, R, L, A> {
        self.view.bind_mut(self.storage.as_mut_slice())
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    /// Iterates over `(position, element)` pairs in storage order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Position<R>, &T)> + '_ {
        self.span().indexed_iter()
    }
}

/// Flat conveniences of rank-1 vectors.
impl<T, L, A, P> Vector<T, U1, L, A, P>
where
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy,
{
    /// Replaces the contents with every element of `iter`; the single
    /// extent becomes the number of elements.
    pub fn assign_flat<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let staged: Vec<T> = iter.into_iter().collect();
        let len = staged.len();

        self.replace_storage(staged, [len].into());
    }

    pub fn resize_flat(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.resize([len], value);
    }
}

/// Exchanges the contents of two vectors.
pub fn swap<T, R, L, A, P>(a: &mut Vector<T, R, L, A, P>, b: &mut Vector<T, R, L, A, P>)
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy,
{
    a.swap_with(b);
}

impl<T, R, L, A, P> Default for Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R, L, A, P> Clone for Vector<T, R, L, A, P>
where
    T: Clone,
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy,
{
    fn clone(&self) -> Self {
        self.clone_in(self.policy.clone())
    }

    /// Copies the elements and the view of `source`, keeping the policy of `self`.
    fn clone_from(&mut self, source: &Self) {
        let mut staged = Vec::new();
        self.policy.reserve(&mut staged, source.len());
        staged.extend_from_slice(&source.storage);
        let view = source.view.clone();

        self.view = view;
        self.replace_storage(staged, source.dimensions().clone());
    }
}

impl<T, L, A, P> From<Vec<T>> for Vector<T, U1, L, A, P>
where
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy + Default,
{
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        Self::from_parts(vec.as_ptr(), vec, [len].into(), A::default(), P::default())
    }
}

impl<'a, T, L, A, P> From<&'a [T]> for Vector<T, U1, L, A, P>
where
    T: Clone,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy + Default,
{
    fn from(slice: &'a [T]) -> Self {
        Self::from(slice.to_vec())
    }
}

impl<T, L, A, P> FromIterator<T> for Vector<T, U1, L, A, P>
where
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T, R, L, A, P> PartialEq for Vector<T, R, L, A, P>
where
    T: PartialEq,
    R: ArrayLength<usize>,
{
    fn eq(&self, other: &Self) -> bool {
        self.view.mapping() == other.view.mapping() && self.storage == other.storage
    }
}

impl<T, R, L, A, P> Eq for Vector<T, R, L, A, P>
where
    T: Eq,
    R: ArrayLength<usize>,
{
}

impl<T, R, L, A, P> PartialOrd for Vector<T, R, L, A, P>
where
    T: PartialOrd,
    R: ArrayLength<usize>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.storage.partial_cmp(&other.storage) {
            Some(Ordering::Equal) => Some(
                self.view
                    .extents()
                    .as_slice()
                    .cmp(other.view.extents().as_slice()),
            ),
            ordering => ordering,
        }
    }
}

impl<T, R, L, A, P> Ord for Vector<T, R, L, A, P>
where
    T: Ord,
    R: ArrayLength<usize>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.storage.cmp(&other.storage).then_with(|| {
            self.view
                .extents()
                .as_slice()
                .cmp(other.view.extents().as_slice())
        })
    }
}

impl<T, R, L, A, P> Hash for Vector<T, R, L, A, P>
where
    T: Hash,
    R: ArrayLength<usize>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.view.mapping().hash(state);
        self.storage.hash(state);
    }
}

impl<T, R, L, A, P> fmt::Debug for Vector<T, R, L, A, P>
where
    T: fmt::Debug,
    R: ArrayLength<usize>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("dimensions", &self.view.extents().as_slice())
            .field("data", &self.storage.as_slice())
            .finish()
    }
}

impl<T, R, L, A, P> Deref for Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
{
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.storage.as_slice()
    }
}

impl<T, R, L, A, P> DerefMut for Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.storage.as_mut_slice()
    }
}

impl<T, R, L, A, P> IntoIterator for Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, R, L, A, P> IntoIterator for &'a Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<'a, T, R, L, A, P> IntoIterator for &'a mut Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
{
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter_mut()
    }
}

impl<T, R, L, A, P> Index<usize> for Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T, R, L, A, P> IndexMut<usize> for Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

impl<T, R, L, A, P> Index<Position<R>> for Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy,
{
    type Output = T;

    #[inline]
    fn index(&self, position: Position<R>) -> &T {
        self.element(position)
    }
}

impl<T, R, L, A, P> IndexMut<Position<R>> for Vector<T, R, L, A, P>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy,
{
    #[inline]
    fn index_mut(&mut self, position: Position<R>) -> &mut T {
        self.element_mut(position)
    }
}

macro_rules! vector_index_impls {
    ($($rank:ty => $len:literal),*) => {
        $(
            impl<T, L, A, P> Index<[usize; $len]> for Vector<T, $rank, L, A, P>
            where
                L: LayoutPolicy,
                A: Accessor<T>,
                P: AllocationPolicy,
            {
                type Output = T;

                #[inline]
                fn index(&self, position: [usize; $len]) -> &T {
                    self.element(position)
                }
            }

            impl<T, L, A, P> IndexMut<[usize; $len]> for Vector<T, $rank, L, A, P>
            where
                L: LayoutPolicy,
                A: Accessor<T>,
                P: AllocationPolicy,
            {
                #[inline]
                fn index_mut(&mut self, position: [usize; $len]) -> &mut T {
                    self.element_mut(position)
                }
            }
        )*
    };
}

vector_index_impls!(U1 => 1, U2 => 2, U3 => 3, U4 => 4, U5 => 5, U6 => 6);
