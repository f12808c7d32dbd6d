// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Owned views of an aggregator's state, handed to exporters.

use histagg_core::Number;

use crate::BoundarySet;

/// Bucket boundaries together with the count of measurements in each bucket.
///
/// `counts.len() == boundaries.len() + 1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Buckets {
    /// Sorted bucket boundaries
    pub boundaries: BoundarySet,
    /// Per-bucket counts, lowest bucket first
    pub counts: Vec<u64>,
}

impl Buckets {
    /// Sum of all bucket counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// A mutually consistent copy of everything an aggregator has accumulated.
///
/// Produced by [`Aggregator::snapshot`](crate::Aggregator::snapshot), which
/// reads all fields under a single lock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// Sum of every recorded measurement
    pub sum: Number,
    /// Number of recorded measurements
    pub count: u64,
    /// Per-bucket distribution
    pub buckets: Buckets,
}

impl Snapshot {
    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
