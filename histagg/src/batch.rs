// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use histagg_core::Descriptor;

use crate::{Aggregator, BoundarySet, Error};

/// Build `n` zeroed aggregators for one instrument.
///
/// The boundaries are validated and sorted once; every returned aggregator
/// shares the same [`BoundarySet`] and [`Descriptor`] allocation. Use the
/// shards as independent recording paths (for example one per worker thread)
/// and as checkpoint destinations, then [`merge`](Aggregator::merge) them.
///
/// Fails with [`Error::InvalidBoundary`] if a boundary is NaN.
pub fn allocate(
    n: usize,
    descriptor: impl Into<Arc<Descriptor>>,
    boundaries: &[f64],
) -> Result<Vec<Aggregator>, Error> {
    let descriptor = descriptor.into();
    let boundaries = match BoundarySet::new(boundaries) {
        Ok(boundaries) => boundaries,
        Err(err) => {
            tracing::debug!(?err, instrument = descriptor.name(), "invalid histogram boundaries");
            return Err(err);
        }
    };
    tracing::debug!(
        instrument = descriptor.name(),
        shards = n,
        buckets = boundaries.bucket_count(),
        "allocated histogram aggregators"
    );
    Ok((0..n)
        .map(|_| Aggregator::new(descriptor.clone(), boundaries.clone()))
        .collect())
}
