use super::shape::{linear_size, Position};
use generic_array::sequence::GenericSequence;
use generic_array::ArrayLength;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// This trait defines how the coordinates of a container are laid out
/// in its linear storage.
///
/// A layout policy is a zero-sized marker type: it only knows how to derive
/// the strides of a shape. It is a type parameter of the containers so that
/// two containers with different layouts can never be mixed up.
pub trait LayoutPolicy:
    Copy + Clone + fmt::Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Writes the strides of `extents` into `strides`. Both slices have the
    /// length of the rank.
    fn strides_in_place(extents: &[usize], strides: &mut [usize]);
}

/// Row-major layout: the last dimension varies fastest.
///
/// `stride[last] = 1` and `stride[i] = stride[i + 1] * extent[i + 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

/// Column-major layout: the first dimension varies fastest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl LayoutPolicy for RowMajor {
    fn strides_in_place(extents: &[usize], strides: &mut [usize]) {
        let mut product = 1_usize;
        for (stride, extent) in strides.iter_mut().zip(extents).rev() {
            *stride = product;
            product = product.saturating_mul(*extent);
        }
    }
}

impl LayoutPolicy for ColumnMajor {
    fn strides_in_place(extents: &[usize], strides: &mut [usize]) {
        let mut product = 1_usize;
        for (stride, extent) in strides.iter_mut().zip(extents) {
            *stride = product;
            product = product.saturating_mul(*extent);
        }
    }
}

/// Mapping from the coordinates of a shape to flat offsets.
///
/// The mapping stores the extents and the strides the layout policy `L`
/// derives from them. It does not refer to any storage: two mappings are
/// equal when their extents are equal, whatever buffer they are applied to.
pub struct Mapping<R, L>
where
    R: ArrayLength<usize>,
{
    extents: Position<R>,
    strides: Position<R>,
    _layout: PhantomData<L>,
}

impl<R, L> Mapping<R, L>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
{
    pub fn new(extents: Position<R>) -> Self {
        let mut strides = Position::<R>::default();
        L::strides_in_place(&extents, &mut strides);

        Mapping {
            extents,
            strides,
            _layout: PhantomData,
        }
    }

    /// Mapping of an empty container, all extents are zero.
    pub fn empty() -> Self {
        Self::new(Position::<R>::default())
    }
}

impl<R, L> Mapping<R, L>
where
    R: ArrayLength<usize>,
{
    #[inline]
    pub fn extents(&self) -> &Position<R> {
        &self.extents
    }

    #[inline]
    pub fn strides(&self) -> &Position<R> {
        &self.strides
    }

    #[inline]
    pub fn rank(&self) -> usize {
        R::USIZE
    }

    /// Number of elements the mapped storage must hold.
    #[inline]
    pub fn required_span_size(&self) -> usize {
        linear_size(&self.extents)
    }

    /// Flat offset of `position`: the sum of the coordinates weighted by the strides.
    ///
    /// The position is not checked against the extents.
    #[inline]
    pub fn offset(&self, position: &[usize]) -> usize {
        position
            .iter()
            .zip(self.strides.iter())
            .fold(0, |acc, (x, y)| acc + x * y)
    }

    pub fn contains(&self, position: &[usize]) -> bool {
        position.len() == R::USIZE
            && position
                .iter()
                .zip(self.extents.iter())
                .all(|(x, extent)| x < extent)
    }

    /// Position mapped to `offset`, the inverse of `offset`.
    pub fn position_of(&self, offset: usize) -> Option<Position<R>> {
        if offset < self.required_span_size() {
            Some(self.position_of_unchecked(offset))
        } else {
            None
        }
    }

    /// Inverse of `offset` for an offset known to be lower than `required_span_size`.
    pub(crate) fn position_of_unchecked(&self, offset: usize) -> Position<R> {
        Position::<R>::generate(|axis| (offset / self.strides[axis]) % self.extents[axis])
    }
}

impl<R, L> Default for Mapping<R, L>
where
    R: ArrayLength<usize>,
    L: LayoutPolicy,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<R, L> Clone for Mapping<R, L>
where
    R: ArrayLength<usize>,
{
    fn clone(&self) -> Self {
        Mapping {
            extents: self.extents.clone(),
            strides: self.strides.clone(),
            _layout: PhantomData,
        }
    }
}

impl<R, L> PartialEq for Mapping<R, L>
where
    R: ArrayLength<usize>,
{
    fn eq(&self, other: &Self) -> bool {
        self.extents == other.extents
    }
}

impl<R, L> Eq for Mapping<R, L> where R: ArrayLength<usize> {}

impl<R, L> Hash for Mapping<R, L>
where
    R: ArrayLength<usize>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.extents.as_slice().hash(state);
    }
}

impl<R, L> fmt::Debug for Mapping<R, L>
where
    R: ArrayLength<usize>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("extents", &self.extents.as_slice())
            .field("strides", &self.strides.as_slice())
            .finish()
    }
}
