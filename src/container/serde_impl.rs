//! `serde` support for the containers.
//!
//! Both containers serialize as `{ "dimensions": [...], "data": [...] }`.
//! The view is not serialized; it is rebuilt from the dimensions when
//! deserializing. Deserialization is strict: the dimensions must be valid
//! for the container type and the data must hold exactly one element per
//! position.

use super::accessor::Accessor;
use super::allocation_policy::AllocationPolicy;
use super::array::Array;
use super::layout::LayoutPolicy;
use super::shape::{checked_linear_size, NumElements, Position, StaticShape};
use super::vector::Vector;
use generic_array::sequence::GenericSequence;
use generic_array::ArrayLength;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct Repr<'a, T> {
    dimensions: &'a [usize],
    data: &'a [T],
}

#[derive(Deserialize)]
struct OwnedRepr<T> {
    dimensions: Vec<usize>,
    data: Vec<T>,
}

impl<T, S, L, A> Serialize for Array<T, S, L, A>
where
    T: Serialize,
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        Repr {
            dimensions: self.dimensions(),
            data: self.as_slice(),
        }
        .serialize(serializer)
    }
}

impl<'de, T, S, L, A> Deserialize<'de> for Array<T, S, L, A>
where
    T: Deserialize<'de> + Default,
    S: StaticShape + NumElements<T>,
    L: LayoutPolicy,
    A: Accessor<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = OwnedRepr::<T>::deserialize(deserializer)?;

        let expected = S::to_vec();
        if repr.dimensions != expected {
            return Err(D::Error::custom(format!(
                "expected dimensions {:?}, got {:?}",
                expected, repr.dimensions
            )));
        }
        if repr.data.len() != S::NUM_ELEMENTS {
            return Err(D::Error::invalid_length(
                repr.data.len(),
                &format!("{} elements", S::NUM_ELEMENTS).as_str(),
            ));
        }

        Self::try_from_iter(repr.data).map_err(D::Error::custom)
    }
}

impl<T, R, L, A, P> Serialize for Vector<T, R, L, A, P>
where
    T: Serialize,
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        Repr {
            dimensions: self.dimensions(),
            data: self.as_slice(),
        }
        .serialize(serializer)
    }
}

impl<'de, T, R, L, A, P> Deserialize<'de> for Vector<T, R, L, A, P>
where
    T: Deserialize<'de> + Default,
    R: ArrayLength<usize>,
    L: LayoutPolicy,
    A: Accessor<T>,
    P: AllocationPolicy + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = OwnedRepr::<T>::deserialize(deserializer)?;

        if repr.dimensions.len() != R::USIZE {
            return Err(D::Error::invalid_length(
                repr.dimensions.len(),
                &format!("{} dimensions", R::USIZE).as_str(),
            ));
        }
        let required = checked_linear_size(&repr.dimensions)
            .ok_or_else(|| D::Error::custom(format!("dimensions {:?} overflow usize", repr.dimensions)))?;
        if repr.data.len() != required {
            return Err(D::Error::invalid_length(
                repr.data.len(),
                &format!("{} elements", required).as_str(),
            ));
        }

        let dimensions = &repr.dimensions;
        let extents = Position::<R>::generate(|axis| dimensions[axis]);

        Self::from_vec(extents, repr.data).map_err(D::Error::custom)
    }
}
