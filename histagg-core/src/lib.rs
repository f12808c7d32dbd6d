// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! This crate contains the numeric and descriptor types for the `histagg` set of
//! libraries. Generally, you should not depend on this crate directly. Instead, use `histagg`

mod descriptor;
mod error;
mod number;

pub use descriptor::{Descriptor, InstrumentKind};
pub use error::InputError;
pub use number::{Number, NumberKind};
