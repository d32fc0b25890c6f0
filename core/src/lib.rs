// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and time values that complement `jiff`: amounts bound to a single
//! unit, combined period and duration amounts, half-open intervals, closed
//! date-time ranges, and calendar positions such as year-weeks.
//!
//! Every type is an immutable `Copy` value. Arithmetic is exact and reports
//! overflow as [`Error::Arithmetic`] instead of wrapping.

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
#![allow(
    clippy::module_name_repetitions,
    clippy::should_implement_trait,
    clippy::wrong_self_convention
)]

mod amount;
mod calendar;
mod day_of_year;
mod error;
mod interval;
pub mod math;
mod parser;
mod period;
mod period_duration;
mod quarter;
mod range;
mod serde_str;
mod unit;
mod year_week;

pub use crate::amount::{Days, Hours, Minutes, Months, Seconds, Weeks, Years};
pub use crate::calendar::{MAX_YEAR, MIN_YEAR};
pub use crate::day_of_year::{AmPm, DayOfYear};
pub use crate::error::{ArithmeticError, Error, Result};
pub use crate::interval::Interval;
pub use crate::period::Period;
pub use crate::period_duration::PeriodDuration;
pub use crate::quarter::{Quarter, YearQuarter};
pub use crate::range::LocalDateTimeRange;
pub use crate::unit::{Temporal, TemporalAmount, TemporalUnit};
pub use crate::year_week::YearWeek;
