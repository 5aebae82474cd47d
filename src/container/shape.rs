//! `shape` complements the `typenum` crate with the type-level shapes
//! of fixed containers and the runtime extents shared by both container
//! variants.
//!
//! As in `typenum`, this module contains two kinds of unsafe traits:
//! * type operators that act like type-level functions on type-level entities,
//! * marker traits that provide functions to interact with type-level entities at runtime.
//!
//! A type-level shape is a `typenum` `TArr` of non-zero type-level unsigned
//! integers. Because `TArr` is a recursive structure, dimensions are stored in
//! reverse order; use the `ShapeND` aliases to write them in natural order.

use generic_array::{ArrayLength, GenericArray};
use std::ops::{Add, Mul};
use typenum::operator_aliases::{Add1, Prod};
use typenum::{ATerm, Bit, TArr, UInt, Unsigned, B1, U0, U1};

/// Runtime coordinates (or extents) of a container of rank `R`.
///
/// The length of the array is the type-level rank so that indexing a
/// container with the wrong number of coordinates is a compile-time error.
/// Plain arrays convert into positions: `[1, 0].into()`.
pub type Position<R> = GenericArray<usize, R>;

/// This trait "aliases" B1 (type-level bit one) for use in trait bounds.
/// It is especially useful with type-level binary operators.
///
/// # Example
///
/// ```
/// use multi::container::shape::TRUE;
/// use multi::typenum::operator_aliases::Le;
/// use multi::typenum::type_operators::IsLess;
///
/// fn test<I, N>()
/// where
///     I: IsLess<N>,
///     Le<I, N>: TRUE, // Constrains "I < N" to hold (Output = B1)
/// {}
/// ```
pub unsafe trait TRUE {}
unsafe impl TRUE for B1 {}

/// Marker trait implemented on non-zero type-level unsigned integers,
/// the only valid dimensions of a static shape.
pub unsafe trait StaticDim: Unsigned {}
unsafe impl<U, B> StaticDim for UInt<U, B>
where
    U: Unsigned,
    B: Bit,
{
}

/// Marker trait implemented on `typenum`'s `TArr` containing a collection
/// of type-level unsigned integers. Provides means of conversion for
/// runtime use.
pub unsafe trait StaticShape {
    /// Number of axes in the shape, i.e. the rank of the container.
    const LEN: usize;
    /// Number of elements in the container, i.e. product of all dimensions of the shape.
    const NUM_ELEMENTS: usize;
    /// Type-level rank, used as the length of `Position`.
    type Rank: ArrayLength<usize>;

    /// Outputs a `Vec` containing the runtime version of the shape.
    fn to_vec() -> Vec<usize>;

    /// Writes the dimensions into the first `LEN` slots of `extents`.
    fn fill_extents(extents: &mut [usize]);

    /// Outputs the runtime version of the shape as a `Position`, without
    /// allocating.
    fn extents() -> Position<Self::Rank> {
        let mut extents = Position::<Self::Rank>::default();
        Self::fill_extents(&mut extents);

        extents
    }
}

unsafe impl StaticShape for ATerm {
    const LEN: usize = 0;
    const NUM_ELEMENTS: usize = 1;
    type Rank = U0;

    #[inline]
    fn to_vec() -> Vec<usize> {
        Vec::new()
    }

    #[inline]
    fn fill_extents(_extents: &mut [usize]) {}
}

unsafe impl<D, A> StaticShape for TArr<D, A>
where
    A: StaticShape,
    D: StaticDim,
    <A as StaticShape>::Rank: Add<B1>,
    Add1<<A as StaticShape>::Rank>: ArrayLength<usize>,
{
    const LEN: usize = A::LEN + 1;
    const NUM_ELEMENTS: usize = D::USIZE * A::NUM_ELEMENTS;
    type Rank = Add1<<A as StaticShape>::Rank>;

    #[inline]
    fn to_vec() -> Vec<usize> {
        let mut vec = A::to_vec();
        vec.push(D::USIZE);

        vec
    }

    #[inline]
    fn fill_extents(extents: &mut [usize]) {
        A::fill_extents(&mut extents[..A::LEN]);
        extents[A::LEN] = D::USIZE;
    }
}

/// Marker trait implemented on static shapes that provides
/// a type-level number of elements and its runtime counterpart.
///
/// Fixed containers store their elements inline and require
/// the number of elements to be known at compile time.
pub unsafe trait NumElements<T> {
    type Output: Unsigned + ArrayLength<T>;

    fn num_elements() -> usize {
        <Self::Output as Unsigned>::to_usize()
    }
}

unsafe impl<T> NumElements<T> for ATerm {
    type Output = U1;
}

unsafe impl<T, S, A> NumElements<T> for TArr<S, A>
where
    A: NumElements<T>,
    S: StaticDim + Mul<<A as NumElements<T>>::Output>,
    Prod<S, <A as NumElements<T>>::Output>: Unsigned + ArrayLength<T>,
{
    type Output = Prod<S, <A as NumElements<T>>::Output>;
}

/// Number of elements addressed by `extents`, `None` if it overflows `usize`.
pub fn checked_linear_size(extents: &[usize]) -> Option<usize> {
    if extents.contains(&0) {
        return Some(0);
    }
    extents
        .iter()
        .try_fold(1_usize, |product, extent| product.checked_mul(*extent))
}

/// Number of elements addressed by `extents`.
///
/// # Panics
///
/// Panics if the product overflows `usize`, like `Vec` does on capacity overflow.
pub fn linear_size(extents: &[usize]) -> usize {
    match checked_linear_size(extents) {
        Some(size) => size,
        None => panic!("capacity overflow: extents {:?} address more than usize::MAX elements", extents),
    }
}

/// 1D shape alias.
pub type Shape1D<S0> = TArr<S0, ATerm>;
/// 2D shape alias.
pub type Shape2D<S0, S1> = TArr<S1, TArr<S0, ATerm>>;
/// 3D shape alias.
pub type Shape3D<S0, S1, S2> = TArr<S2, TArr<S1, TArr<S0, ATerm>>>;
/// 4D shape alias.
pub type Shape4D<S0, S1, S2, S3> = TArr<S3, TArr<S2, TArr<S1, TArr<S0, ATerm>>>>;
/// 5D shape alias.
pub type Shape5D<S0, S1, S2, S3, S4> = TArr<S4, TArr<S3, TArr<S2, TArr<S1, TArr<S0, ATerm>>>>>;
/// 6D shape alias.
pub type Shape6D<S0, S1, S2, S3, S4, S5> =
    TArr<S5, TArr<S4, TArr<S3, TArr<S2, TArr<S1, TArr<S0, ATerm>>>>>>;
