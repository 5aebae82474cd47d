//! `array` contains the fixed-shape container.
//!
//! The shape of an `Array` is a type-level `TArr` of `typenum` unsigned
//! integers; its elements are stored inline in a `GenericArray` whose
//! length is the product of the dimensions. Neither the shape nor the
//! number of elements can change after construction.

use super::accessor::{Accessor, DefaultAccessor};
use super::layout::{LayoutPolicy, Mapping, RowMajor};
use super::shape::{NumElements, Position, StaticShape, TRUE};
use super::view::{Span, SpanMut, View};
use crate::error::{Error, Result};
use generic_array::iter::GenericArrayIter;
use generic_array::sequence::GenericSequence;
use generic_array::{ArrayLength, GenericArray};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use typenum::operator_aliases::Le;
use typenum::type_operators::IsLess;
use typenum::{Unsigned, U1, U2, U3, U4, U5, U6};

type Storage<T, S> = GenericArray<T, <S as NumElements<T>>::Output>;

/// Fixed-shape multi-dimensional container.
///
/// `Array` is parametrized by:
/// * T the element type,
/// * S the type-level shape, e.g. `Shape2D<U2, U3>`,
/// * L the layout policy mapping coordinates to flat offsets,
/// * A the accessor policy reaching the element at an offset.
///
/// Elements can be reached by flat index (`a[3]`, `at(3)`) or by
/// coordinates (`a[[1, 0]]`, `at_position([1, 0])`). Both paths address
/// the same storage.
pub struct Array<T, S, L = RowMajor, A = DefaultAccessor>
where
    S: StaticShape + NumElements<T>,
{
    storage: Storage<T, S>,
    view: View<S::Rank, L, A>,
}

impl<T, S, L, A> Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    /// Number of elements, the product of the dimensions of `S`.
    pub const SIZE: usize = S::NUM_ELEMENTS;

    fn with_storage(storage: Storage<T, S>, accessor: A) -> Self {
        let mut array = Array {
            storage,
            view: View::new(Position::default(), accessor),
        };
        array.rebuild_view();

        array
    }

    #[inline]
    fn rebuild_view(&mut self) {
        self.view.rebuild(S::extents());
    }

    /// Default-filled array.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::with_accessor(A::default())
    }

    pub fn with_accessor(accessor: A) -> Self
    where
        T: Default,
    {
        Self::with_storage(GenericArray::default(), accessor)
    }

    /// Array with every element set to `value`.
    pub fn from_elem(value: T) -> Self
    where
        T: Clone,
    {
        Self::with_storage(GenericArray::generate(|_| value.clone()), A::default())
    }

    /// Builds an array from the elements of `iter` in storage order.
    ///
    /// Missing trailing elements are default-initialized. An iterator
    /// yielding more than `SIZE` elements is rejected with
    /// `Error::LengthMismatch`, whose `got` is then `SIZE + 1` whatever the
    /// actual surplus.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        T: Default,
        I: IntoIterator<Item = T>,
    {
        Ok(Self::with_storage(storage_from_iter(iter)?, A::default()))
    }

    pub fn from_slice(slice: &[T]) -> Result<Self>
    where
        T: Clone + Default,
    {
        Self::try_from_iter(slice.iter().cloned())
    }

    pub fn assign_elem(&mut self, value: T)
    where
        T: Clone,
    {
        self.fill(value);
    }

    /// Replaces the elements with those of `iter`, with the padding rules of
    /// `try_from_iter`. The array is left unchanged on error.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<()>
    where
        T: Default,
        I: IntoIterator<Item = T>,
    {
        self.storage = storage_from_iter(iter)?;

        Ok(())
    }

    pub fn assign_slice(&mut self, slice: &[T]) -> Result<()>
    where
        T: Clone + Default,
    {
        self.assign_iter(slice.iter().cloned())
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.storage.as_mut_slice().fill(value);
    }

    /// Exchanges the elements of `self` and `other`. Accessors stay in place.
    pub fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.storage, &mut other.storage);
        self.rebuild_view();
        other.rebuild_view();
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        self.storage.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: Self::SIZE,
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.storage.get_mut(index).ok_or(Error::IndexOutOfRange {
            index,
            len: Self::SIZE,
        })
    }

    pub fn at_position<P: Into<Position<S::Rank>>>(&self, position: P) -> Result<&T> {
        self.span().get_checked(position)
    }

    pub fn at_position_mut<P: Into<Position<S::Rank>>>(&mut self, position: P) -> Result<&mut T> {
        self.span_mut().into_checked_mut(position)
    }

    /// Element at `position`, the call form of `a[position]`.
    ///
    /// # Panics
    ///
    /// Panics if the offset of `position` falls outside the storage.
    #[inline]
    pub fn element<P: Into<Position<S::Rank>>>(&self, position: P) -> &T {
        self.span().get(position)
    }

    #[inline]
    pub fn element_mut<P: Into<Position<S::Rank>>>(&mut self, position: P) -> &mut T {
        self.span_mut().into_mut(position)
    }

    /// # Safety
    ///
    /// `position` must lie within the extents.
    #[inline]
    pub unsafe fn element_unchecked<P: Into<Position<S::Rank>>>(&self, position: P) -> &T {
        self.span().get_unchecked(position)
    }

    /// # Safety
    ///
    /// `position` must lie within the extents.
    #[inline]
    pub unsafe fn element_unchecked_mut<P: Into<Position<S::Rank>>>(&mut self, position: P) -> &mut T {
        self.span_mut().into_unchecked_mut(position)
    }

    /// Flat access checked at compile time: `I` must be lower than `SIZE`.
    #[inline]
    pub fn get_static<I>(&self) -> &T
    where
        I: Unsigned + IsLess<<S as NumElements<T>>::Output>,
        Le<I, <S as NumElements<T>>::Output>: TRUE,
    {
        &self.storage[I::USIZE]
    }

    #[inline]
    pub fn get_static_mut<I>(&mut self) -> &mut T
    where
        I: Unsigned + IsLess<<S as NumElements<T>>::Output>,
        Le<I, <S as NumElements<T>>::Output>: TRUE,
    {
        &mut self.storage[I::USIZE]
    }

    #[inline]
    pub fn front(&self) -> &T {
        &self.storage[0]
    }

    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.storage[0]
    }

    #[inline]
    pub fn back(&self) -> &T {
        &self.storage[Self::SIZE - 1]
    }

    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.storage[Self::SIZE - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        Self::SIZE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        Self::SIZE == 0
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        Self::SIZE
    }

    #[inline]
    pub fn rank(&self) -> usize {
        S::LEN
    }

    #[inline]
    pub fn dimensions(&self) -> &Position<S::Rank> {
        self.view.extents()
    }

    #[inline]
    pub fn mapping(&self) -> &Mapping<S::Rank, L> {
        self.view.mapping()
    }

    #[inline]
    pub fn view(&self) -> &View<S::Rank, L, A> {
        &self.view
    }

    #[inline]
    pub fn storage(&self) -> &Storage<T, S> {
        &self.storage
    }

    #[inline]
    pub fn span(&self) -> Span<'_, T, S::Rank, L, A> {
        self.view.bind(self.storage.as_slice())
    }

    #[inline]
    pub fn span_mut(&mut self) -> SpanMut<'_, T, S::Rank, L, A> {
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
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Position<S::Rank>, &T)> + '_ {
        self.span().indexed_iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_iter().collect()
    }
}

fn storage_from_iter<T, N, I>(iter: I) -> Result<GenericArray<T, N>>
where
    T: Default,
    N: ArrayLength<T>,
    I: IntoIterator<Item = T>,
{
    let mut iter = iter.into_iter();
    let storage: GenericArray<T, N> = GenericArray::generate(|_| iter.next().unwrap_or_default());

    // The input may be unbounded, so stop at the first surplus element.
    if iter.next().is_some() {
        return Err(Error::LengthMismatch {
            expected: N::USIZE,
            got: N::USIZE.saturating_add(1),
        });
    }

    Ok(storage)
}

/// Exchanges the elements of two arrays.
pub fn swap<T, S, L, A>(a: &mut Array<T, S, L, A>, b: &mut Array<T, S, L, A>)
where
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    a.swap_with(b);
}

impl<T, S, L, A> Default for Array<T, S, L, A>
where
    T: Default,
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, L, A> Clone for Array<T, S, L, A>
where
    T: Clone,
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    fn clone(&self) -> Self {
        Self::with_storage(self.storage.clone(), self.view.accessor().clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from_slice(&source.storage);
        self.view = source.view.clone();
        self.rebuild_view();
    }
}

impl<T, S, L, A> TryFrom<Vec<T>> for Array<T, S, L, A>
where
    T: Default,
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    type Error = Error;

    fn try_from(v: Vec<T>) -> Result<Self> {
        Self::try_from_iter(v)
    }
}

impl<'a, T, S, L, A> TryFrom<&'a [T]> for Array<T, S, L, A>
where
    T: Clone + Default,
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    type Error = Error;

    fn try_from(slice: &'a [T]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl<T, S, L, A> PartialEq for Array<T, S, L, A>
where
    T: PartialEq,
    S: StaticShape + NumElements<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.view.mapping() == other.view.mapping()
            && self.storage.as_slice() == other.storage.as_slice()
    }
}

impl<T, S, L, A> Eq for Array<T, S, L, A>
where
    T: Eq,
    S: StaticShape + NumElements<T>,
{
}

impl<T, S, L, A> PartialOrd for Array<T, S, L, A>
where
    T: PartialOrd,
    S: StaticShape + NumElements<T>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.storage.as_slice().partial_cmp(other.storage.as_slice())
    }
}

impl<T, S, L, A> Ord for Array<T, S, L, A>
where
    T: Ord,
    S: StaticShape + NumElements<T>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.storage.as_slice().cmp(other.storage.as_slice())
    }
}

impl<T, S, L, A> Hash for Array<T, S, L, A>
where
    T: Hash,
    S: StaticShape + NumElements<T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.as_slice().hash(state);
    }
}

impl<T, S, L, A> fmt::Debug for Array<T, S, L, A>
where
    T: fmt::Debug,
    S: StaticShape + NumElements<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("dimensions", &self.view.mapping().extents().as_slice())
            .field("data", &self.storage.as_slice())
            .finish()
    }
}

impl<T, S, L, A> Deref for Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
{
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.storage.as_slice()
    }
}

impl<T, S, L, A> DerefMut for Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.storage.as_mut_slice()
    }
}

impl<T, S, L, A> IntoIterator for Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
{
    type Item = T;
    type IntoIter = GenericArrayIter<T, <S as NumElements<T>>::Output>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, S, L, A> IntoIterator for &'a Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<'a, T, S, L, A> IntoIterator for &'a mut Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
{
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter_mut()
    }
}

impl<T, S, L, A> Index<usize> for Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T, S, L, A> IndexMut<usize> for Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

impl<T, S, L, A> Index<Position<S::Rank>> for Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    type Output = T;

    #[inline]
    fn index(&self, position: Position<S::Rank>) -> &T {
        self.element(position)
    }
}

impl<T, S, L, A> IndexMut<Position<S::Rank>> for Array<T, S, L, A>
where
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    #[inline]
    fn index_mut(&mut self, position: Position<S::Rank>) -> &mut T {
        self.element_mut(position)
    }
}

macro_rules! array_index_impls {
    ($($rank:ty => $len:literal),*) => {
        $(
            impl<T, S, L, A> Index<[usize; $len]> for Array<T, S, L, A>
            where
                S: StaticShape<Rank = $rank> + NumElements<T>,
                L: LayoutPolicy,
                A: Accessor<T>,
            {
                type Output = T;

                #[inline]
                fn index(&self, position: [usize; $len]) -> &T {
                    self.element(position)
                }
            }

            impl<T, S, L, A> IndexMut<[usize; $len]> for Array<T, S, L, A>
            where
                S: StaticShape<Rank = $rank> + NumElements<T>,
                L: LayoutPolicy,
                A: Accessor<T>,
            {
                #[inline]
                fn index_mut(&mut self, position: [usize; $len]) -> &mut T {
                    self.element_mut(position)
                }
            }
        )*
    };
}

array_index_impls!(U1 => 1, U2 => 2, U3 => 3, U4 => 4, U5 => 5, U6 => 6);
