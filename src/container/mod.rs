//! `container` provides fixed-shape and dynamic-shape multidimensional
//! containers. Each container owns a single contiguous storage and a view
//! that maps coordinates to flat offsets in that storage, so that every
//! element can be reached either by flat index or by coordinates.
//!
//! The fixed container, `Array`, carries its whole shape at the type level
//! thanks to type-level integers from the `typenum` crate and stores its
//! elements inline. The dynamic container, `Vector`, only carries its rank
//! at the type level and stores its elements on the heap.

pub mod accessor;
pub mod allocation_policy;
pub mod array;
pub mod layout;
#[cfg(feature = "rayon")]
pub mod parallel;
pub mod prelude;
#[cfg(feature = "serde")]
pub mod serde_impl;
pub mod shape;
pub mod vector;
pub mod view;
