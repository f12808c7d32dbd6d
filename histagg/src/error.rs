// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use histagg_core::{InputError, NumberKind};

/// The error cases for constructing, recording into, checkpointing and merging
/// [`Aggregator`](crate::Aggregator)s.
///
/// Every variant except [`Error::Input`] is a configuration error: the operands
/// were not built from the same group. No operation mutates any state before
/// returning an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A boundary value was NaN
    InvalidBoundary {
        /// Position of the offending value in the caller-supplied list
        index: usize,
    },
    /// Two aggregators do not share the same boundary values
    BoundaryMismatch {
        /// Boundaries of the aggregator the operation was called on
        expected: Vec<f64>,
        /// Boundaries of the other operand
        actual: Vec<f64>,
    },
    /// Two aggregators accumulate different numeric kinds
    NumberKindMismatch {
        /// Kind of the aggregator the operation was called on
        expected: NumberKind,
        /// Kind of the other operand
        actual: NumberKind,
    },
    /// An aggregator was used as its own checkpoint destination
    SelfCheckpoint,
    /// A measurement failed the instrument's range test
    Input(InputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoundary { index } => {
                write!(f, "histogram boundary #{index} is NaN")
            }
            Self::BoundaryMismatch { expected, actual } => {
                write!(
                    f,
                    "inconsistent histogram boundaries: {expected:?} != {actual:?}"
                )
            }
            Self::NumberKindMismatch { expected, actual } => {
                write!(f, "inconsistent number kinds: {expected} != {actual}")
            }
            Self::SelfCheckpoint => f.write_str("cannot checkpoint an aggregator into itself"),
            Self::Input(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for Error {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}
