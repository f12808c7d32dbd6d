// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::NumberKind;

/// Why a measurement was refused by [`Descriptor::range_test`](crate::Descriptor::range_test).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputError {
    /// A float measurement was NaN
    NaN,
    /// A monotonic instrument received a negative measurement
    Negative,
    /// The measurement's kind does not match the instrument's
    NumberKindMismatch {
        /// Kind declared by the instrument
        expected: NumberKind,
        /// Kind of the rejected measurement
        actual: NumberKind,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NaN => f.write_str("NaN value is an invalid input"),
            Self::Negative => f.write_str("negative value is out of range for this instrument"),
            Self::NumberKindMismatch { expected, actual } => {
                write!(f, "expected a {expected} measurement, got {actual}")
            }
        }
    }
}

impl std::error::Error for InputError {}
