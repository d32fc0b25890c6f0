// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Render and read amounts of time as text: ISO-8601, word-based forms such
//! as `1 year, 2 months and 3 days`, and unit-based durations such as
//! `1h 30m`.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::module_name_repetitions)]

mod error;
mod iso;
mod locale;
mod unit_based;
mod word;

pub use crate::error::FormatError;
pub use crate::iso::iso8601;
pub use crate::locale::{UnitWords, WordLocale};
pub use crate::unit_based::parse_unit_based_duration;
pub use crate::word::{word_based, word_based_duration, word_based_period};
