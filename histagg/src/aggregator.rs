// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The histogram aggregator: concurrent recording, synchronized checkpointing and merging.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use histagg_core::{Descriptor, Number, NumberKind};

use crate::snapshot::{Buckets, Snapshot};
use crate::state::State;
use crate::{BoundarySet, Error};

/// Accumulates measurements into fixed buckets.
///
/// Any number of threads may call [`record`](Self::record) concurrently. A single
/// collector periodically calls [`checkpoint`](Self::checkpoint) to move the
/// accumulated state into another aggregator of the same group and start over
/// from zero. Checkpointed aggregators can then be combined with
/// [`merge`](Self::merge) and read by an exporter.
///
/// # Atomicity
///
/// The whole state sits behind one short-held mutex. `record` and `checkpoint`
/// each run entirely inside it, so every measurement lands wholly before or
/// wholly after a checkpoint; no measurement is ever split across the two.
/// Recording threads contend on that mutex; shard hot instruments across
/// several aggregators with [`allocate`](crate::allocate) to spread contention.
///
/// Only one collector may checkpoint a given aggregator at a time. This is
/// the caller's responsibility and is not arbitrated here.
///
/// # Example
///
/// ```
/// use histagg::{Descriptor, InstrumentKind, Number, NumberKind};
///
/// let desc = Descriptor::new("latency", InstrumentKind::ValueRecorder, NumberKind::Int64);
/// let batch = histagg::allocate(2, desc, &[500.0, 250.0, 750.0]).unwrap();
/// let (live, ckpt) = (&batch[0], &batch[1]);
///
/// for v in [100, 250, 400, 500, 999] {
///     live.record(Number::Int64(v)).unwrap();
/// }
/// live.checkpoint(ckpt).unwrap();
///
/// assert_eq!(live.count(), 0);
/// assert_eq!(ckpt.count(), 5);
/// assert_eq!(ckpt.sum(), Number::Int64(2249));
/// assert_eq!(ckpt.histogram().counts, [1, 2, 1, 1]);
/// ```
#[derive(Debug)]
pub struct Aggregator {
    descriptor: Arc<Descriptor>,
    boundaries: BoundarySet,
    state: Mutex<State>,
}

impl Aggregator {
    /// Create a zeroed aggregator over an existing boundary set.
    ///
    /// Prefer [`allocate`](crate::allocate) when building several aggregators
    /// for the same instrument.
    pub fn new(descriptor: impl Into<Arc<Descriptor>>, boundaries: BoundarySet) -> Self {
        let descriptor = descriptor.into();
        let state = State::new(descriptor.number_kind(), boundaries.bucket_count());
        Self {
            descriptor,
            boundaries,
            state: Mutex::new(state),
        }
    }

    /// A fresh, zeroed aggregator sharing this one's descriptor and boundaries.
    ///
    /// Useful as a checkpoint destination or as the target of a merge.
    pub fn sibling(&self) -> Self {
        Self::new(self.descriptor.clone(), self.boundaries.clone())
    }

    /// The instrument this aggregator was built for
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// The shared bucket boundaries
    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    /// Numeric kind of the running sum
    pub fn number_kind(&self) -> NumberKind {
        self.descriptor.number_kind()
    }

    /// Record one measurement.
    ///
    /// Fails with [`Error::Input`] if `number` does not pass the descriptor's
    /// [range test](Descriptor::range_test); nothing is recorded in that case.
    pub fn record(&self, number: Number) -> Result<(), Error> {
        self.descriptor.range_test(number)?;
        let bucket = self.boundaries.locate(number.as_f64());
        self.lock().record(bucket, number);
        Ok(())
    }

    /// Move the accumulated state into `destination` and reset `self` to zero.
    ///
    /// Whatever `destination` held before is discarded. Both aggregators must
    /// come from the same group: on [`Error::BoundaryMismatch`] or
    /// [`Error::NumberKindMismatch`] neither is modified.
    pub fn checkpoint(&self, destination: &Aggregator) -> Result<(), Error> {
        if std::ptr::eq(self, destination) {
            return Err(Error::SelfCheckpoint);
        }
        if let Err(err) = self.check_compatible(destination) {
            tracing::debug!(?err, instrument = self.descriptor.name(), "checkpoint rejected");
            return Err(err);
        }
        let (mut source, mut dest) = lock_pair(self, destination);
        // the destination's old buffers become our new zero state
        std::mem::swap(&mut *source, &mut *dest);
        source.clear();
        Ok(())
    }

    /// Discard the accumulated state without keeping it anywhere.
    pub fn reset(&self) {
        self.lock().clear();
    }

    /// Add `other`'s state into `self`. `other` is left untouched.
    ///
    /// Both operands should be quiesced (no concurrent `record`), typically
    /// because both are checkpoint destinations. Merging an aggregator with
    /// itself doubles it.
    pub fn merge(&self, other: &Aggregator) -> Result<(), Error> {
        if std::ptr::eq(self, other) {
            self.lock().double();
            return Ok(());
        }
        if let Err(err) = self.check_compatible(other) {
            tracing::debug!(?err, instrument = self.descriptor.name(), "merge rejected");
            return Err(err);
        }
        let (mut mine, theirs) = lock_pair(self, other);
        mine.merge(&theirs);
        Ok(())
    }

    /// Sum of all recorded measurements
    pub fn sum(&self) -> Number {
        self.lock().sum
    }

    /// Number of recorded measurements
    pub fn count(&self) -> u64 {
        self.lock().count
    }

    /// Boundaries and per-bucket counts
    pub fn histogram(&self) -> Buckets {
        let counts = self.lock().buckets.to_vec();
        Buckets {
            boundaries: self.boundaries.clone(),
            counts,
        }
    }

    /// Sum, count and buckets, all read at the same instant
    pub fn snapshot(&self) -> Snapshot {
        let state = self.lock();
        Snapshot {
            sum: state.sum,
            count: state.count,
            buckets: Buckets {
                boundaries: self.boundaries.clone(),
                counts: state.buckets.to_vec(),
            },
        }
    }

    fn check_compatible(&self, other: &Aggregator) -> Result<(), Error> {
        if self.boundaries != other.boundaries {
            return Err(Error::BoundaryMismatch {
                expected: self.boundaries.to_vec(),
                actual: other.boundaries.to_vec(),
            });
        }
        if self.number_kind() != other.number_kind() {
            return Err(Error::NumberKindMismatch {
                expected: self.number_kind(),
                actual: other.number_kind(),
            });
        }
        Ok(())
    }

    // No critical section can panic halfway through an update, so a poisoned
    // lock still guards a consistent state.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Lock two distinct aggregators in address order, returning the guards as `(a, b)`.
fn lock_pair<'a>(
    a: &'a Aggregator,
    b: &'a Aggregator,
) -> (MutexGuard<'a, State>, MutexGuard<'a, State>) {
    debug_assert!(!std::ptr::eq(a, b));
    if (a as *const Aggregator) < (b as *const Aggregator) {
        let first = a.lock();
        (first, b.lock())
    } else {
        let second = b.lock();
        (a.lock(), second)
    }
}
