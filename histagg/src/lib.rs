// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregator;
mod batch;
pub mod boundaries;
mod error;
pub mod snapshot;
mod state;
#[cfg(feature = "test-util")]
pub mod test_util;

pub use aggregator::Aggregator;
pub use batch::allocate;
pub use boundaries::BoundarySet;
pub use error::Error;
pub use snapshot::{Buckets, Snapshot};

pub use histagg_core::{Descriptor, InputError, InstrumentKind, Number, NumberKind};
