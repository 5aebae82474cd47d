pub use super::accessor::{Accessor, DefaultAccessor};
pub use super::allocation_policy::{AllocationPolicy, DefaultPolicy, ExactPolicy};
pub use super::array::Array;
pub use super::layout::{ColumnMajor, LayoutPolicy, Mapping, RowMajor};
pub use super::shape::{
    NumElements, Position, Shape1D, Shape2D, Shape3D, Shape4D, Shape5D, Shape6D, StaticShape,
};
pub use super::vector::Vector;
pub use super::view::{Span, SpanMut, View};
pub use crate::error::Error;

/// Fixed-shape matrix with `M` rows and `N` columns.
pub type Matrix<T, M, N> = Array<T, Shape2D<M, N>>;
