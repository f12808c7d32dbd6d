// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use histagg_core::{Number, NumberKind};
use smallvec::SmallVec;

/// Inline bucket capacity before the counts spill to the heap. Covers the
/// usual latency layouts of a dozen or so boundaries.
const INLINE_BUCKETS: usize = 16;

/// The mutable part of an aggregator: running sum, count and per-bucket counts.
///
/// Invariant: `buckets.iter().sum() == count` whenever the owning lock is released.
/// Counts wrap on overflow like integer sums, so no update can panic halfway.
#[derive(Debug, PartialEq)]
pub(crate) struct State {
    pub(crate) sum: Number,
    pub(crate) count: u64,
    pub(crate) buckets: SmallVec<[u64; INLINE_BUCKETS]>,
}

impl State {
    pub(crate) fn new(kind: NumberKind, bucket_count: usize) -> Self {
        Self {
            sum: kind.zero(),
            count: 0,
            buckets: SmallVec::from_elem(0, bucket_count),
        }
    }

    pub(crate) fn record(&mut self, bucket: usize, number: Number) {
        self.buckets[bucket] = self.buckets[bucket].wrapping_add(1);
        self.sum += number;
        self.count = self.count.wrapping_add(1);
    }

    /// Zero every field in place, keeping the bucket allocation.
    pub(crate) fn clear(&mut self) {
        self.sum = self.sum.kind().zero();
        self.count = 0;
        self.buckets.fill(0);
    }

    pub(crate) fn merge(&mut self, other: &State) {
        debug_assert_eq!(self.buckets.len(), other.buckets.len());
        self.sum += other.sum;
        self.count = self.count.wrapping_add(other.count);
        for (mine, theirs) in self.buckets.iter_mut().zip(&other.buckets) {
            *mine = mine.wrapping_add(*theirs);
        }
    }

    /// Merge with itself.
    pub(crate) fn double(&mut self) {
        let sum = self.sum;
        self.sum += sum;
        self.count = self.count.wrapping_add(self.count);
        for bucket in self.buckets.iter_mut() {
            *bucket = bucket.wrapping_add(*bucket);
        }
    }
}
