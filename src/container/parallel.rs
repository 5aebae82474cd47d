//! Parallel iteration over the containers with `rayon`.
//!
//! `&Array`, `&mut Array`, `&Vector` and `&mut Vector` implement
//! `IntoParallelIterator`, which also provides `par_iter` and
//! `par_iter_mut` through `rayon`'s blanket implementations.

use super::accessor::Accessor;
use super::allocation_policy::AllocationPolicy;
use super::array::Array;
use super::layout::LayoutPolicy;
use super::shape::{NumElements, Position, StaticShape};
use super::vector::Vector;
use super::view::View;
use generic_array::ArrayLength;
use rayon::prelude::*;

fn par_indexed<'a, T, R, L, A>(
    view: &'a View<R, L, A>,
    data: &'a [T],
) -> impl IndexedParallelIterator<Item = (Position<R>, &'a T)> + 'a
where
    T: Sync,
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T> + Sync,
{
    (0..data.len()).into_par_iter().map(move |offset| {
        (
            view.mapping().position_of_unchecked(offset),
            view.accessor().access(data, offset),
        )
    })
}

impl<'a, T, S, L, A> IntoParallelIterator for &'a Array<T, S, L, A>
where
    T: Sync + 'a,
    S: StaticShape + NumElements<T>,
{
    type Iter = rayon::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_par_iter(self) -> Self::Iter {
        let slice: &'a [T] = self;
        slice.into_par_iter()
    }
}

impl<'a, T, S, L, A> IntoParallelIterator for &'a mut Array<T, S, L, A>
where
    T: Send + 'a,
    S: StaticShape + NumElements<T>,
{
    type Iter = rayon::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_par_iter(self) -> Self::Iter {
        let slice: &'a mut [T] = self;
        slice.into_par_iter()
    }
}

impl<'a, T, R, L, A, P> IntoParallelIterator for &'a Vector<T, R, L, A, P>
where
    T: Sync + 'a,
    R: ArrayLength<usize>,
{
    type Iter = rayon::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_par_iter(self) -> Self::Iter {
        let slice: &'a [T] = self;
        slice.into_par_iter()
    }
}

impl<'a, T, R, L, A, P> IntoParallelIterator for &'a mut Vector<T, R, L, A, P>
where
    T: Send + 'a,
    R: ArrayLength<usize>,
{
    type Iter = rayon::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_par_iter(self) -> Self::Iter {
        let slice: &'a mut [T] = self;
        slice.into_par_iter()
    }
}

impl<T, S, L, A> Array<T, S, L, A>
where
    T: Send + Sync,
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T> + Sync,
{
    pub fn par_fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice()
            .par_iter_mut()
            .for_each(|x| *x = value.clone());
    }

    /// Parallel counterpart of `indexed_iter`.
    pub fn par_indexed_iter(&self) -> impl IndexedParallelIterator<Item = (Position<S::Rank>, &T)> + '_ {
        par_indexed(self.view(), self.as_slice())
    }
}

impl<T, R, L, A, P> Vector<T, R, L, A, P>
where
    T: Send + Sync,
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T> + Sync,
    P: AllocationPolicy,
{
    pub fn par_fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice()
            .par_iter_mut()
            .for_each(|x| *x = value.clone());
    }

    /// Parallel counterpart of `indexed_iter`.
    pub fn par_indexed_iter(&self) -> impl IndexedParallelIterator<Item = (Position<R>, &T)> + '_ {
        par_indexed(self.view(), self.as_slice())
    }
}
