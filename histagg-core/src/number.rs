// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::AddAssign;

/// The representation a [`Number`] is recorded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NumberKind {
    /// 64-bit signed integer measurements
    Int64,
    /// 64-bit floating point measurements
    Float64,
}

impl NumberKind {
    /// The additive identity for this kind
    pub const fn zero(self) -> Number {
        match self {
            NumberKind::Int64 => Number::Int64(0),
            NumberKind::Float64 => Number::Float64(0.0),
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Int64 => f.write_str("int64"),
            NumberKind::Float64 => f.write_str("float64"),
        }
    }
}

/// A single measurement, tagged with its [`NumberKind`].
///
/// Equality is structural: an `Int64` never equals a `Float64`, even when both
/// hold the same magnitude. Use [`Number::as_f64`] to compare across kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// An integer measurement
    Int64(i64),
    /// A floating point measurement
    Float64(f64),
}

impl Number {
    /// The kind tag of this number
    pub const fn kind(&self) -> NumberKind {
        match self {
            Number::Int64(_) => NumberKind::Int64,
            Number::Float64(_) => NumberKind::Float64,
        }
    }

    /// Coerce to `f64`. Integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int64(v) => v as f64,
            Number::Float64(v) => v,
        }
    }

    /// Convert into the given kind. Floats are truncated toward zero and
    /// saturate at the `i64` range; NaN becomes 0.
    pub fn coerce_to(self, kind: NumberKind) -> Number {
        match (self, kind) {
            (Number::Int64(v), NumberKind::Float64) => Number::Float64(v as f64),
            (Number::Float64(v), NumberKind::Int64) => Number::Int64(v as i64),
            (n, _) => n,
        }
    }

    /// True for a float NaN; integers are never NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float64(v) if v.is_nan())
    }

    /// True when strictly below zero. `-0.0` is not negative.
    pub fn is_negative(&self) -> bool {
        match *self {
            Number::Int64(v) => v < 0,
            Number::Float64(v) => v < 0.0,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int64(0)
    }
}

/// Adds in the receiver's kind, coercing the right-hand side first.
/// Integer addition wraps on overflow.
impl AddAssign for Number {
    fn add_assign(&mut self, other: Number) {
        let other = other.coerce_to(self.kind());
        match (self, other) {
            (Number::Int64(acc), Number::Int64(v)) => *acc = acc.wrapping_add(v),
            (Number::Float64(acc), Number::Float64(v)) => *acc += v,
            _ => unreachable!("coerce_to returns the receiver's kind"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int64(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float64(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int64(v) => fmt::Display::fmt(v, f),
            Number::Float64(v) => fmt::Display::fmt(v, f),
        }
    }
}
