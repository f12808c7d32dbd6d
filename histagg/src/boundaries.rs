// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Bucket boundaries shared by a group of aggregators.

use std::ops::Deref;
use std::sync::Arc;

use ordered_float::OrderedFloat;

use crate::Error;

/// An immutable, ascending list of bucket boundaries.
///
/// `B` boundaries partition the number line into `B + 1` buckets:
///
/// | bucket  | interval                 |
/// |---------|--------------------------|
/// | `0`     | `(-inf, b[0])`           |
/// | `i`     | `[b[i-1], b[i])`         |
/// | `B`     | `[b[B-1], +inf)`         |
///
/// A value equal to a boundary belongs to the bucket above it. Cloning is
/// cheap; every clone shares the same allocation.
#[derive(Clone, Debug)]
pub struct BoundarySet {
    values: Arc<[f64]>,
}

impl BoundarySet {
    /// Sort `values` ascending and freeze them.
    ///
    /// Duplicates are kept (they produce an empty bucket) and infinities are
    /// accepted. Returns [`Error::InvalidBoundary`] if any value is NaN.
    ///
    /// ```
    /// use histagg::BoundarySet;
    ///
    /// let bounds = BoundarySet::new(&[500.0, 250.0, 750.0]).unwrap();
    /// assert_eq!(&*bounds, &[250.0, 500.0, 750.0]);
    /// assert_eq!(bounds.locate(500.0), 2);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, Error> {
        if let Some(index) = values.iter().position(|v| v.is_nan()) {
            return Err(Error::InvalidBoundary { index });
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable_by_key(|v| OrderedFloat(*v));
        Ok(Self {
            values: sorted.into(),
        })
    }

    /// Index of the bucket `value` falls into: the number of boundaries `<= value`.
    ///
    /// `-inf` maps to bucket `0` and `+inf` to the last bucket. NaN is also
    /// routed to the last bucket, though aggregators reject NaN before it gets here.
    pub fn locate(&self, value: f64) -> usize {
        if value.is_nan() {
            return self.values.len();
        }
        self.values.partition_point(|boundary| *boundary <= value)
    }

    /// Number of buckets, always one more than the number of boundaries
    pub fn bucket_count(&self) -> usize {
        self.values.len() + 1
    }

    /// The sorted boundaries
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn same_allocation(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

impl Deref for BoundarySet {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl PartialEq for BoundarySet {
    fn eq(&self, other: &Self) -> bool {
        self.same_allocation(other) || self.values == other.values
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BoundarySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use rstest::rstest;

    use super::BoundarySet;
    use crate::Error;

    #[test]
    fn sorts_once_on_construction() {
        let bounds = BoundarySet::new(&[500.0, 250.0, 750.0]).unwrap();
        check!(bounds.as_slice() == [250.0, 500.0, 750.0]);
        check!(bounds.bucket_count() == 4);
    }

    #[rstest]
    #[case(100.0, 0)]
    #[case(249.999, 0)]
    #[case(250.0, 1)]
    #[case(400.0, 1)]
    #[case(500.0, 2)]
    #[case(750.0, 3)]
    #[case(999.0, 3)]
    #[case(-1e12, 0)]
    #[case(f64::NEG_INFINITY, 0)]
    #[case(f64::INFINITY, 3)]
    #[case(f64::NAN, 3)]
    fn locate(#[case] value: f64, #[case] bucket: usize) {
        let bounds = BoundarySet::new(&[250.0, 500.0, 750.0]).unwrap();
        check!(bounds.locate(value) == bucket);
    }

    #[test]
    fn duplicates_make_an_empty_bucket() {
        let bounds = BoundarySet::new(&[10.0, 5.0, 10.0]).unwrap();
        check!(bounds.as_slice() == [5.0, 10.0, 10.0]);
        check!(bounds.locate(9.0) == 1);
        // nothing can land in [10, 10)
        check!(bounds.locate(10.0) == 3);
    }

    #[test]
    fn empty_set_has_one_bucket() {
        let bounds = BoundarySet::new(&[]).unwrap();
        check!(bounds.bucket_count() == 1);
        check!(bounds.locate(-5.0) == 0);
        check!(bounds.locate(5.0) == 0);
    }

    #[test]
    fn infinite_boundaries_are_allowed() {
        let bounds = BoundarySet::new(&[f64::INFINITY, 0.0, f64::NEG_INFINITY]).unwrap();
        check!(bounds.as_slice() == [f64::NEG_INFINITY, 0.0, f64::INFINITY]);
        check!(bounds.locate(f64::NEG_INFINITY) == 1);
        check!(bounds.locate(f64::INFINITY) == 3);
    }

    #[test]
    fn rejects_nan() {
        let_assert!(Err(Error::InvalidBoundary { index }) = BoundarySet::new(&[1.0, f64::NAN]));
        check!(index == 1);
    }

    #[test]
    fn equality_is_by_value() {
        let a = BoundarySet::new(&[1.0, 2.0]).unwrap();
        let b = BoundarySet::new(&[2.0, 1.0]).unwrap();
        let c = BoundarySet::new(&[1.0, 3.0]).unwrap();
        check!(a == a.clone());
        check!(a.same_allocation(&a.clone()));
        check!(a == b);
        check!(!a.same_allocation(&b));
        check!(a != c);
    }
}
