//! `multi` provides fixed-shape and dynamic-shape multidimensional
//! containers over a single contiguous storage.
//!
//! Elements are reached either by flat index or by coordinates. The
//! mapping between the two is given by a layout policy (row-major by
//! default) and the final element access by an accessor policy.
//!
//! ```
//! use multi::prelude::*;
//! use multi::typenum::U2;
//!
//! let a: Matrix<i32, U2, U2> = Array::try_from_iter(0..4).unwrap();
//! assert_eq!(a[[1, 0]], 2);
//! assert_eq!(a[2], 2);
//! ```

#[cfg(test)]
mod tests {
    use super::container::{array, vector};
    use super::prelude::*;
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::iter;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;
    use typenum::{U0, U1, U2, U3, U4};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

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
    fn array_access() {
        let a: Matrix<i32, U2, U2> = Array::try_from_iter(0..4).unwrap();

        assert_eq!(a[[1, 0]], 2);
        assert_eq!(a[[0, 1]], 1);
        assert_eq!(*a.at(2).unwrap(), 2);
        assert_eq!(a[2], 2);
        assert_eq!(*a.element([1, 1]), 3);
        assert_eq!(*a.at_position([1, 0]).unwrap(), 2);
        assert_eq!(a[Position::<U2>::from([0, 1])], 1);
        assert_eq!(unsafe { *a.element_unchecked([1, 1]) }, 3);
        assert_eq!(*a.get_static::<U3>(), 3);
        assert_eq!(*a.front(), 0);
        assert_eq!(*a.back(), 3);

        assert_eq!(a.at(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(
            a.at_position([2, 0]),
            Err(Error::PositionOutOfRange {
                position: vec![2, 0],
                extents: vec![2, 2],
            })
        );
    }

    #[test]
    fn array_properties() {
        type Cube = Array<u8, Shape3D<U2, U3, U4>>;
        let a: Cube = Array::new();

        assert_eq!(Cube::SIZE, 24);
        assert_eq!(a.len(), 24);
        assert_eq!(a.max_size(), 24);
        assert!(!a.is_empty());
        assert_eq!(a.rank(), 3);
        assert_eq!(a.dimensions().as_slice(), &[2, 3, 4]);
        assert_eq!(a.mapping().strides().as_slice(), &[12, 4, 1]);
        assert!(a.iter().all(|x| *x == 0));
        assert_eq!(a.as_ptr(), a.as_slice().as_ptr());
    }

    #[test]
    fn array_mutation() {
        let mut a: Matrix<i32, U2, U3> = Array::default();

        a[[1, 2]] = 5;
        *a.element_mut([0, 1]) = 1;
        *a.at_mut(3).unwrap() = 3;
        *a.at_position_mut([0, 2]).unwrap() = 2;
        *a.get_static_mut::<U0>() = 7;
        assert_eq!(a.as_slice(), &[7, 1, 2, 3, 0, 5]);
        assert!(a.at_position_mut([2, 0]).is_err());

        a.fill(4);
        assert!(a.iter().all(|x| *x == 4));
        a.assign_elem(6);
        assert_eq!(a.into_vec(), vec![6; 6]);
    }

    #[test]
    fn array_construction() {
        let a: Array<u8, Shape1D<U4>> = Array::try_from_iter(vec![1, 2]).unwrap();
        assert_eq!(a.as_slice(), &[1, 2, 0, 0]);

        let b: Result<Array<u8, Shape1D<U4>>, Error> = Array::try_from_iter(0..6);
        assert_eq!(b.unwrap_err(), Error::LengthMismatch { expected: 4, got: 5 });

        let c: Array<u8, Shape1D<U4>> = Array::try_from(vec![4, 3, 2, 1]).unwrap();
        assert_eq!(c[[0]], 4);
        let d: Array<u8, Shape1D<U4>> = Array::try_from(&[4, 3, 2, 1][..]).unwrap();
        assert_eq!(c, d);

        let e: Array<u8, Shape1D<U4>> = Array::from_elem(9);
        assert_eq!(e.as_slice(), &[9; 4]);
        let f: Array<u8, Shape1D<U4>> = Array::from_slice(&[9, 9, 9, 9]).unwrap();
        assert_eq!(e, f);
    }

    #[test]
    fn array_assignment() {
        let mut a: Matrix<i32, U2, U2> = Array::from_elem(1);

        assert_eq!(
            a.assign_iter(0..5),
            Err(Error::LengthMismatch { expected: 4, got: 5 })
        );
        assert_eq!(a.as_slice(), &[1, 1, 1, 1]);

        a.assign_slice(&[3, 4]).unwrap();
        assert_eq!(a.as_slice(), &[3, 4, 0, 0]);

        let b: Matrix<i32, U2, U2> = Array::try_from_iter(10..14).unwrap();
        a.clone_from(&b);
        assert_eq!(a, b);
        assert_eq!(a[[1, 1]], 13);
    }

    #[test]
    fn array_unbounded_input() {
        let a: Result<Array<i32, Shape1D<U4>>, Error> = Array::try_from_iter(iter::repeat(1));
        let err = a.unwrap_err();
        assert_eq!(err, Error::LengthMismatch { expected: 4, got: 5 });
        assert_eq!(err.to_string(), "expected at most 4 elements, got at least 5");

        let mut b: Matrix<i32, U2, U2> = Array::from_elem(3);
        assert_eq!(
            b.assign_iter(0..),
            Err(Error::LengthMismatch { expected: 4, got: 5 })
        );
        assert_eq!(b.as_slice(), &[3; 4]);
    }

    #[test]
    fn array_swap() {
        let mut a: Matrix<i32, U2, U3> = Array::try_from_iter(0..6).unwrap();
        let mut b: Matrix<i32, U2, U3> = Array::from_elem(7);
        let a0 = a.clone();
        let b0 = b.clone();

        a.swap_with(&mut b);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(a[[i, j]], b0[[i, j]]);
                assert_eq!(b[[i, j]], a0[[i, j]]);
            }
        }

        array::swap(&mut a, &mut b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);

        std::mem::swap(&mut a, &mut b);
        assert_eq!(a, b0);
        assert_eq!(b[[1, 2]], 5);
    }

    #[test]
    fn array_ordering() {
        let a: Array<i32, Shape1D<U3>> = Array::try_from_iter(vec![1, 2, 3]).unwrap();
        let b: Array<i32, Shape1D<U3>> = Array::try_from_iter(vec![1, 3, 0]).unwrap();

        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);
        assert_eq!(a.clone().max(b.clone()), b);

        let set: HashSet<_> = vec![a.clone(), b.clone(), a.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn array_iteration() {
        let mut a: Matrix<i32, U3, U2> = Array::try_from_iter(0..6).unwrap();

        assert_eq!(a.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1, 0]);
        for x in &mut a {
            *x *= 2;
        }
        assert_eq!((&a).into_iter().sum::<i32>(), 30);

        for (position, x) in a.indexed_iter() {
            assert_eq!(a[position], *x);
        }
        let last = a.indexed_iter().last().unwrap();
        assert_eq!(last.0.as_slice(), &[2, 1]);

        assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn array_column_major() {
        let a: Array<i32, Shape2D<U2, U3>, ColumnMajor> = Array::try_from_iter(0..6).unwrap();

        assert_eq!(a.mapping().strides().as_slice(), &[1, 2]);
        assert_eq!(a[[1, 0]], 1);
        assert_eq!(a[[0, 1]], 2);
        assert_eq!(a[[1, 2]], 5);
        assert_eq!(a[3], 3);
    }

    #[test]
    fn array_custom_accessor() {
        let a: Array<i32, Shape2D<U2, U2>, RowMajor, Reversed> = Array::try_from_iter(0..4).unwrap();

        assert_eq!(a[0], 0);
        assert_eq!(a[[0, 0]], 3);
        assert_eq!(a[[1, 1]], 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn array_flat_index_out_of_bounds() {
        let a: Matrix<i32, U2, U2> = Array::new();
        assert_eq!(a[4], 0);
    }

    #[test]
    #[should_panic(expected = "out of")]
    fn array_position_out_of_bounds() {
        let a: Matrix<i32, U2, U2> = Array::new();
        assert_eq!(a[[2, 1]], 0);
    }

    #[test]
    fn vector_resize() {
        init_logger();
        let mut v: Vector<i32, U2> = Vector::from_slice([2, 2], &[0, 1, 2, 3]).unwrap();
        v.resize([3, 3], 9);

        assert_eq!(v.len(), 9);
        assert_eq!(v.dimensions().as_slice(), &[3, 3]);
        assert_eq!(&v.as_slice()[..4], &[0, 1, 2, 3]);
        assert!(v.as_slice()[4..].iter().all(|x| *x == 9));
        assert_eq!(v[[1, 0]], 3);

        v.resize_with([1, 2], || unreachable!());
        assert_eq!(v.as_slice(), &[0, 1]);
        assert_eq!(v.dimensions().as_slice(), &[1, 2]);
    }

    #[test]
    fn vector_clear() {
        let mut v: Vector<i32, U2> = Vector::from_elem([3, 1], 5);

        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.dimensions().as_slice(), &[0, 0]);
        assert_eq!(v.front(), Err(Error::Empty));

        v.resize_default([2, 2]);
        assert_eq!(v, Vector::with_dimensions([2, 2]));
    }

    #[test]
    fn vector_take() {
        let mut a: Vector<i32, U2> = Vector::from_slice([2, 3], &[0, 1, 2, 3, 4, 5]).unwrap();

        let mut b = std::mem::take(&mut a);
        assert_eq!(a.len(), 0);
        assert_eq!(a.dimensions().as_slice(), &[0, 0]);
        assert_eq!(b.dimensions().as_slice(), &[2, 3]);
        assert_eq!(b[[1, 2]], 5);

        let c = b.clone();
        let d = b.take();
        assert!(b.is_empty());
        assert_eq!(b, Vector::new());
        assert_eq!(c, d);
    }

    #[test]
    fn vector_swap() {
        let mut a: Vector<i32, U2> = Vector::from_slice([2, 3], &[0, 1, 2, 3, 4, 5]).unwrap();
        let mut b: Vector<i32, U2> = Vector::from_elem([1, 2], 8);
        let a0 = a.clone();
        let b0 = b.clone();

        a.swap_with(&mut b);
        assert_eq!(a.dimensions(), b0.dimensions());
        assert_eq!(b.dimensions(), a0.dimensions());
        for (position, x) in a0.indexed_iter() {
            assert_eq!(b[position], *x);
        }
        for (position, x) in b0.indexed_iter() {
            assert_eq!(a[position], *x);
        }

        vector::swap(&mut a, &mut b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn vector_equality() {
        let a: Vector<i32, U2> = Vector::from_slice([2, 3], &[0, 1, 2, 3, 4, 5]).unwrap();
        let b: Vector<i32, U2> = Vector::from_slice([3, 2], &[0, 1, 2, 3, 4, 5]).unwrap();
        let c: Vector<i32, U2> = Vector::from_slice([3, 2], &[0, 1, 2, 3, 4, 6]).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);

        let set: HashSet<_> = vec![a.clone(), b.clone(), a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn vector_assignment() {
        let mut v: Vector<i32, U2> = Vector::from_elem([2, 2], 1);
        let before = v.clone();

        assert_eq!(
            v.assign_iter([1, 3], 0..5),
            Err(Error::LengthMismatch { expected: 3, got: 4 })
        );
        assert_eq!(v, before);

        v.assign_iter([1, 3], 0..2).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 0]);
        assert_eq!(v.dimensions().as_slice(), &[1, 3]);

        v.assign([2, 1], 4);
        assert_eq!(v.as_slice(), &[4, 4]);

        v.assign_slice([1, 1], &[6]).unwrap();
        assert_eq!(v[[0, 0]], 6);

        let w: Vector<i32, U2> = Vector::from_vec([2, 2], vec![1, 2]).unwrap();
        assert_eq!(w.as_slice(), &[1, 2, 0, 0]);
        let too_long: Result<Vector<i32, U2>, Error> = Vector::from_vec([1, 1], vec![1, 2]);
        assert_eq!(too_long, Err(Error::LengthMismatch { expected: 1, got: 2 }));
        let too_long: Result<Vector<i32, U2>, Error> = Vector::try_from_iter([2, 1], 0..3);
        assert!(too_long.is_err());
    }

    #[test]
    fn vector_unbounded_input() {
        let v: Result<Vector<i32, U2>, Error> = Vector::try_from_iter([2, 2], 0..);
        assert_eq!(v, Err(Error::LengthMismatch { expected: 4, got: 5 }));

        let mut w: Vector<i32, U2> = Vector::from_elem([1, 3], 7);
        let before = w.clone();
        assert_eq!(
            w.assign_iter([2, 2], iter::repeat(8)),
            Err(Error::LengthMismatch { expected: 4, got: 5 })
        );
        assert_eq!(w, before);

        assert_eq!(
            w.assign_iter([0, 3], 0..),
            Err(Error::LengthMismatch { expected: 0, got: 1 })
        );
        assert_eq!(w, before);
    }

    #[test]
    fn vector_checked_access() {
        let mut v: Vector<i32, U3> = Vector::with_dimensions([2, 3, 4]);

        v[[1, 2, 3]] = 1;
        assert_eq!(v[23], 1);
        *v.at_mut(0).unwrap() = 2;
        *v.at_position_mut([0, 0, 1]).unwrap() = 3;
        *v.element_mut([0, 1, 0]) = 4;
        assert_eq!(&v.as_slice()[..5], &[2, 3, 0, 0, 4]);

        assert_eq!(v.at(24), Err(Error::IndexOutOfRange { index: 24, len: 24 }));
        assert_eq!(
            v.at_position([0, 3, 0]),
            Err(Error::PositionOutOfRange {
                position: vec![0, 3, 0],
                extents: vec![2, 3, 4],
            })
        );
        assert_eq!(*v.front().unwrap(), 2);
        assert_eq!(*v.back().unwrap(), 1);
        *v.back_mut().unwrap() = 7;
        assert_eq!(unsafe { *v.element_unchecked([1, 2, 3]) }, 7);
    }

    #[test]
    fn vector_round_trip() {
        let v: Vector<usize, U3> = Vector::try_from_iter([3, 1, 4], 0..12).unwrap();
        let mapping = v.mapping();

        for (position, x) in v.indexed_iter() {
            let offset = mapping.offset(&position);
            assert_eq!(v[offset], *x);
            assert_eq!(v[offset], v[position.clone()]);
            assert_eq!(mapping.position_of(offset), Some(position));
        }
        assert_eq!(v.len(), mapping.required_span_size());
    }

    #[test]
    fn vector_rank_one() {
        let mut v: Vector<i32, U1> = (1..=3).collect();
        assert_eq!(v.dimensions().as_slice(), &[3]);
        assert_eq!(v[[2]], 3);

        v.resize_flat(5, 0);
        assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0]);

        v.assign_flat(vec![9, 8]);
        assert_eq!(v.dimensions().as_slice(), &[2]);
        assert_eq!(v, Vector::from(vec![9, 8]));
        assert_eq!(v, Vector::from(&[9, 8][..]));

        let (dimensions, data) = v.into_parts();
        assert_eq!(dimensions.as_slice(), &[2]);
        assert_eq!(data, vec![9, 8]);

        let e: Vector<i32, U1> = Vector::new();
        assert_eq!(e.back(), Err(Error::Empty));
    }

    #[test]
    fn vector_capacity() {
        init_logger();
        let mut v: Vector<u8, U2> = Vector::new();

        v.reserve(16);
        assert!(v.capacity() >= 16);
        assert!(v.is_empty());

        v.resize([2, 2], 1);
        v.shrink_to_fit();
        assert!(v.capacity() >= 4);
        assert_eq!(v.as_slice(), &[1; 4]);

        assert!(matches!(v.try_reserve(usize::MAX), Err(Error::Allocation(_))));
        assert_eq!(v.as_slice(), &[1; 4]);
        v.try_reserve(4).unwrap();
        assert!(v.capacity() >= 8);

        assert_eq!(v.rank(), 2);
        assert_eq!(v.max_size(), isize::MAX as usize);
    }

    #[test]
    fn vector_allocation_policy() {
        init_logger();
        let mut v: Vector<u8, U2, RowMajor, DefaultAccessor, ExactPolicy> =
            Vector::with_dimensions_in([4, 4], ExactPolicy);
        assert_eq!(v.policy(), &ExactPolicy);

        v.resize([1, 2], 0);
        assert_eq!(v.len(), 2);
        assert!(v.capacity() < 16);

        let w: Vector<u8, U2> = v.clone_in(DefaultPolicy);
        assert_eq!(w.as_slice(), v.as_slice());
        assert_eq!(w.dimensions(), v.dimensions());

        let mut x: Vector<u8, U2, RowMajor, DefaultAccessor, ExactPolicy> =
            Vector::from_elem_in([3, 3], 2, ExactPolicy);
        x.clone_from(&v);
        assert_eq!(x, v);
        assert_eq!(x.take().policy(), &ExactPolicy);
        assert_eq!(x.policy(), &ExactPolicy);
    }

    #[test]
    fn vector_iteration() {
        let mut v: Vector<i32, U2> = Vector::from_slice([2, 2], &[1, 2, 3, 4]).unwrap();

        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        for x in v.iter_mut() {
            *x += 1;
        }
        for x in &mut v {
            *x *= 2;
        }
        assert_eq!((&v).into_iter().copied().collect::<Vec<_>>(), vec![4, 6, 8, 10]);

        let positions: Vec<Vec<usize>> = v.indexed_iter().map(|(position, _)| position.to_vec()).collect();
        assert_eq!(positions, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);

        v.fill(0);
        assert_eq!(v.into_iter().sum::<i32>(), 0);
    }

    #[test]
    fn vector_layout_and_accessor() {
        let a: Vector<i32, U2, ColumnMajor> = Vector::from_slice([2, 3], &[0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(a[[1, 0]], 1);
        assert_eq!(a[[0, 1]], 2);
        assert_eq!(a.mapping().strides().as_slice(), &[1, 2]);

        let mut b: Vector<i32, U2, RowMajor, Reversed> =
            Vector::from_slice([2, 2], &[0, 1, 2, 3]).unwrap();
        assert_eq!(b[[0, 0]], 3);
        assert_eq!(b[0], 0);
        b[[1, 1]] = 7;
        assert_eq!(b.as_slice(), &[7, 1, 2, 3]);

        let span = b.span();
        assert_eq!(*span.get([0, 1]), 2);
        assert_eq!(span.extents().as_slice(), &[2, 2]);
    }

    #[test]
    fn vector_debug() {
        let v: Vector<i32, U2> = Vector::from_slice([1, 2], &[1, 2]).unwrap();
        assert_eq!(format!("{:?}", v), "Vector { dimensions: [1, 2], data: [1, 2] }");

        let a: Matrix<i32, U1, U2> = Array::try_from_iter(vec![1, 2]).unwrap();
        assert_eq!(format!("{:?}", a), "Array { dimensions: [1, 2], data: [1, 2] }");
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn vector_resize_overflow() {
        let mut v: Vector<u8, U2> = Vector::new();
        v.resize([usize::MAX, 2], 0);
    }

    /// Panics once its shared clone budget runs out.
    struct CloneBudget(Rc<Cell<usize>>);

    impl Clone for CloneBudget {
        fn clone(&self) -> Self {
            let left = self.0.get();
            if left == 0 {
                panic!("clone budget exhausted");
            }
            self.0.set(left - 1);

            CloneBudget(Rc::clone(&self.0))
        }
    }

    fn assert_consistent<T, R: generic_array::ArrayLength<usize>>(v: &Vector<T, R>) {
        assert_eq!(v.len(), v.dimensions().iter().product::<usize>());
    }

    #[test]
    fn vector_resize_unwind() {
        init_logger();
        let mut v: Vector<i32, U2> = Vector::from_slice([1, 2], &[1, 2]).unwrap();

        let mut calls = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            v.resize_with([3, 3], || {
                calls += 1;
                if calls == 3 {
                    panic!("fill failed");
                }
                calls
            })
        }));

        assert!(result.is_err());
        assert_consistent(&v);
        assert_eq!(v.dimensions().as_slice(), &[1, 2]);
        assert_eq!(v.as_slice(), &[1, 2]);

        v.resize([2, 2], 0);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0]);
    }

    #[test]
    fn vector_clone_unwind() {
        init_logger();
        let budget = Rc::new(Cell::new(usize::MAX));
        let token = CloneBudget(Rc::clone(&budget));
        let mut v: Vector<CloneBudget, U2> = Vector::from_elem([1, 2], token.clone());
        let source: Vector<CloneBudget, U2> = Vector::from_elem([2, 2], token.clone());

        budget.set(3);
        let result = catch_unwind(AssertUnwindSafe(|| v.assign([3, 3], token.clone())));
        assert!(result.is_err());
        assert_consistent(&v);
        assert_eq!(v.dimensions().as_slice(), &[1, 2]);

        budget.set(1);
        let result = catch_unwind(AssertUnwindSafe(|| v.clone_from(&source)));
        assert!(result.is_err());
        assert_consistent(&v);
        assert_eq!(v.dimensions().as_slice(), &[1, 2]);

        budget.set(1);
        let result = catch_unwind(AssertUnwindSafe(|| v.resize([3, 1], token.clone())));
        assert!(result.is_err());
        assert_consistent(&v);
        assert_eq!(v.dimensions().as_slice(), &[1, 2]);

        let mut flat: Vector<i32, U1> = vec![1, 2, 3].into();
        let result = catch_unwind(AssertUnwindSafe(|| {
            flat.assign_flat((0..5).map(|x| if x == 3 { panic!("read failed") } else { x }))
        }));
        assert!(result.is_err());
        assert_eq!(flat.dimensions().as_slice(), &[3]);
        assert_eq!(flat.as_slice(), &[1, 2, 3]);
    }
}

pub mod container;
pub mod error;
pub mod prelude;

pub use generic_array;
pub use typenum;
