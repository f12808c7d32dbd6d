// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use crate::{InputError, Number, NumberKind};

/// The kind of instrument that produces measurements for an aggregator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InstrumentKind {
    /// Synchronous recorder of arbitrary values (latencies, sizes)
    ValueRecorder,
    /// Asynchronous observer of arbitrary values
    ValueObserver,
    /// Synchronous monotonic counter
    Counter,
    /// Synchronous non-monotonic counter
    UpDownCounter,
    /// Asynchronous monotonic sum
    SumObserver,
    /// Asynchronous non-monotonic sum
    UpDownSumObserver,
}

impl InstrumentKind {
    /// Whether measurements must never be negative
    pub const fn monotonic(self) -> bool {
        matches!(self, InstrumentKind::Counter | InstrumentKind::SumObserver)
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Metadata describing the instrument behind a group of aggregators.
///
/// Supplied by the instrument layer when a batch is allocated; the aggregators
/// only use it to interpret and validate incoming [`Number`]s.
///
/// ```
/// use histagg_core::{Descriptor, InstrumentKind, NumberKind};
///
/// let desc = Descriptor::new("request.latency", InstrumentKind::ValueRecorder, NumberKind::Float64)
///     .with_unit("ms")
///     .with_description("time spent serving a request");
/// assert_eq!(desc.unit(), Some("ms"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Descriptor {
    name: Cow<'static, str>,
    instrument_kind: InstrumentKind,
    number_kind: NumberKind,
    description: Option<Cow<'static, str>>,
    unit: Option<Cow<'static, str>>,
}

impl Descriptor {
    /// Create a descriptor with no description or unit
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        instrument_kind: InstrumentKind,
        number_kind: NumberKind,
    ) -> Self {
        Self {
            name: name.into(),
            instrument_kind,
            number_kind,
            description: None,
            unit: None,
        }
    }

    /// Attach a human readable description
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a unit string, e.g. `ms` or `By`
    pub fn with_unit(mut self, unit: impl Into<Cow<'static, str>>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Instrument name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instrument kind
    pub fn instrument_kind(&self) -> InstrumentKind {
        self.instrument_kind
    }

    /// Numeric kind of every measurement from this instrument
    pub fn number_kind(&self) -> NumberKind {
        self.number_kind
    }

    /// Description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Unit, if any
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Check that `number` is acceptable input for this instrument.
    ///
    /// Rejects numbers of the wrong kind, NaN, and negative values on monotonic
    /// instruments. Infinities pass.
    pub fn range_test(&self, number: Number) -> Result<(), InputError> {
        if number.kind() != self.number_kind {
            return Err(InputError::NumberKindMismatch {
                expected: self.number_kind,
                actual: number.kind(),
            });
        }
        if number.is_nan() {
            return Err(InputError::NaN);
        }
        if self.instrument_kind.monotonic() && number.is_negative() {
            return Err(InputError::Negative);
        }
        Ok(())
    }
}
