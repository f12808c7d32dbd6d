// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Utilities for testing code that records into or exports from aggregators.
//!
//! [`Profile`] generates seeded random measurements of one numeric kind and
//! [`Numbers`] keeps every generated value so the expected sum, count and
//! bucket counts can be computed independently of the aggregator under test.

use histagg_core::{Number, NumberKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const MAGNITUDE: i64 = 100_000;

/// Sign of the values a [`Profile`] produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Values in `[0, 100_000)`
    Positive,
    /// Values in `(-100_000, 0]`
    Negative,
    /// Either sign with equal probability
    Mixed,
}

/// A seeded source of random measurements of one [`NumberKind`].
pub struct Profile {
    kind: NumberKind,
    rng: ChaCha8Rng,
}

impl Profile {
    /// A generator of `kind` measurements, reproducible for a given `seed`
    pub fn new(kind: NumberKind, seed: u64) -> Self {
        Self {
            kind,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// One profile per numeric kind, all seeded identically
    pub fn all(seed: u64) -> [Profile; 2] {
        [
            Profile::new(NumberKind::Int64, seed),
            Profile::new(NumberKind::Float64, seed),
        ]
    }

    /// Draw one measurement following `policy`
    pub fn random(&mut self, policy: Policy) -> Number {
        let negative = match policy {
            Policy::Positive => false,
            Policy::Negative => true,
            Policy::Mixed => self.rng.random_bool(0.5),
        };
        let sign = if negative { -1 } else { 1 };
        match self.kind {
            NumberKind::Int64 => Number::Int64(sign * self.rng.random_range(0..MAGNITUDE)),
            NumberKind::Float64 => {
                Number::Float64(sign as f64 * self.rng.random::<f64>() * MAGNITUDE as f64)
            }
        }
    }
}

/// Every measurement handed to an aggregator, kept for computing expected results.
#[derive(Clone, Debug)]
pub struct Numbers {
    kind: NumberKind,
    values: Vec<Number>,
}

impl Numbers {
    /// An empty collection of `kind` measurements
    pub fn new(kind: NumberKind) -> Self {
        Self {
            kind,
            values: Vec::new(),
        }
    }

    /// Remember one measurement
    pub fn push(&mut self, number: Number) {
        self.values.push(number);
    }

    /// Number of measurements
    pub fn count(&self) -> u64 {
        self.values.len() as u64
    }

    /// Sum in this collection's numeric kind
    pub fn sum(&self) -> Number {
        let mut sum = self.kind.zero();
        for value in &self.values {
            sum += *value;
        }
        sum
    }

    /// Expected per-bucket counts for `sorted_boundaries`, computed by a linear
    /// scan over the sorted measurements.
    pub fn bucket_counts(&self, sorted_boundaries: &[f64]) -> Vec<u64> {
        let mut points: Vec<f64> = self.values.iter().map(Number::as_f64).collect();
        points.sort_by(f64::total_cmp);

        let mut counts = vec![0; sorted_boundaries.len() + 1];
        let mut idx = 0;
        for p in points {
            while idx < sorted_boundaries.len() && p >= sorted_boundaries[idx] {
                idx += 1;
            }
            counts[idx] += 1;
        }
        counts
    }
}

/// True when `a` and `b` differ by at most `epsilon` relative to the larger magnitude.
pub fn within_relative(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= epsilon * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use histagg_core::{Number, NumberKind};

    use super::{Numbers, Policy, Profile, within_relative};

    #[test]
    fn policies_respect_sign() {
        for mut profile in Profile::all(7) {
            for _ in 0..200 {
                check!(!profile.random(Policy::Positive).is_negative());
                let n = profile.random(Policy::Negative).as_f64();
                check!(n <= 0.0);
            }
        }
    }

    #[test]
    fn same_seed_same_values() {
        let mut a = Profile::new(NumberKind::Float64, 3);
        let mut b = Profile::new(NumberKind::Float64, 3);
        for _ in 0..10 {
            check!(a.random(Policy::Mixed) == b.random(Policy::Mixed));
        }
    }

    #[test]
    fn oracle_buckets_match_boundary_semantics() {
        let mut all = Numbers::new(NumberKind::Int64);
        for v in [999, 100, 500, 250, 400] {
            all.push(Number::Int64(v));
        }
        check!(all.bucket_counts(&[250.0, 500.0, 750.0]) == [1, 2, 1, 1]);
        check!(all.sum() == Number::Int64(2249));
        check!(all.count() == 5);
    }

    #[test]
    fn relative_tolerance() {
        check!(within_relative(1e9, 1e9 + 0.5, 1e-9));
        check!(!within_relative(1.0, 1.1, 1e-9));
        check!(within_relative(0.0, 0.0, 1e-9));
    }
}
