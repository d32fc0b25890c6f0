// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Units of time, the generic amount abstraction and the points in time that
//! amounts can be added to.

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Span, Timestamp};

use crate::error::{Error, Result};
use crate::math::{Exact, to_long_exact};
use crate::period::Period;

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// A unit of date or time, ordered from the shortest to the longest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
pub enum TemporalUnit {
    /// Nanoseconds
    Nanos,
    /// Microseconds
    Micros,
    /// Milliseconds
    Millis,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Twelve hours, as in AM/PM
    HalfDays,
    /// Days
    Days,
    /// Weeks of seven days
    Weeks,
    /// Months
    Months,
    /// Years
    Years,
    /// Ten years
    Decades,
    /// A hundred years
    Centuries,
    /// A thousand years
    Millennia,
    /// Eras
    Eras,
    /// An infinite unit
    Forever,
}

impl TemporalUnit {
    /// Whether this unit is a calendar unit (days and longer, except forever).
    #[must_use]
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
                | Self::Eras
        )
    }

    /// Whether this unit is an exact clock unit (half-days and shorter).
    #[must_use]
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::Nanos
                | Self::Micros
                | Self::Millis
                | Self::Seconds
                | Self::Minutes
                | Self::Hours
                | Self::HalfDays
        )
    }

    /// Exact length in nanoseconds, for clock units.
    #[must_use]
    pub const fn nanos(self) -> Option<i64> {
        match self {
            Self::Nanos => Some(1),
            Self::Micros => Some(1_000),
            Self::Millis => Some(1_000_000),
            Self::Seconds => Some(NANOS_PER_SECOND),
            Self::Minutes => Some(60 * NANOS_PER_SECOND),
            Self::Hours => Some(3_600 * NANOS_PER_SECOND),
            Self::HalfDays => Some(43_200 * NANOS_PER_SECOND),
            _ => None,
        }
    }

    const fn days(self) -> Option<i64> {
        match self {
            Self::Days => Some(1),
            Self::Weeks => Some(7),
            _ => None,
        }
    }

    const fn months(self) -> Option<i64> {
        match self {
            Self::Months => Some(1),
            Self::Years => Some(12),
            Self::Decades => Some(120),
            Self::Centuries => Some(1_200),
            Self::Millennia => Some(12_000),
            _ => None,
        }
    }

    /// Convert `amount` of `self` into `to`, returning the whole amount and the
    /// remainder that could not be expressed in `to`.
    ///
    /// Conversion only happens within a family of fixed-ratio units: months
    /// and longer, days and weeks, or clock units. Mixing families fails,
    /// since calendar and clock units have no fixed ratio without a
    /// reference point.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] when the units cannot be converted, and
    /// [`Error::Arithmetic`] on overflow.
    pub fn convert_amount(self, amount: i64, to: Self) -> Result<(i64, i64)> {
        if self == to {
            return Ok((amount, 0));
        }

        let factors = match (self, to) {
            (a, b) if a.months().is_some() && b.months().is_some() => a.months().zip(b.months()),
            (a, b) if a.days().is_some() && b.days().is_some() => a.days().zip(b.days()),
            (a, b) => a.nanos().zip(b.nanos()),
        };
        let Some((from_factor, to_factor)) = factors else {
            return Err(Error::date_time(format!(
                "Unable to convert between units: {self} to {to}"
            )));
        };

        if from_factor >= to_factor {
            let whole = amount.multiply_exact(from_factor / to_factor)?;
            Ok((whole, 0))
        } else {
            let multiple = to_factor / from_factor;
            Ok((amount / multiple, amount % multiple))
        }
    }
}

/// An amount of time expressed as signed values per unit.
///
/// This is the common view over the fixed-unit amounts, [`Period`],
/// [`SignedDuration`], [`Span`] and [`crate::PeriodDuration`], used to
/// convert between them.
pub trait TemporalAmount {
    /// The units this amount is expressed in.
    fn units(&self) -> &'static [TemporalUnit];

    /// The signed value for `unit`.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] when `unit` is not one of [`Self::units`].
    fn get(&self, unit: TemporalUnit) -> Result<i64>;
}

pub(crate) fn unsupported_unit(unit: TemporalUnit) -> Error {
    Error::date_time(format!("Unsupported unit: {unit}"))
}

impl TemporalAmount for SignedDuration {
    fn units(&self) -> &'static [TemporalUnit] {
        &[TemporalUnit::Seconds, TemporalUnit::Nanos]
    }

    /// Seconds are floored so that nanos are always in `0..1_000_000_000`.
    fn get(&self, unit: TemporalUnit) -> Result<i64> {
        match unit {
            TemporalUnit::Seconds => Ok(normalized_seconds(*self)),
            TemporalUnit::Nanos => Ok(normalized_nanos(*self)),
            _ => Err(unsupported_unit(unit)),
        }
    }
}

impl TemporalAmount for Span {
    fn units(&self) -> &'static [TemporalUnit] {
        use TemporalUnit::{Days, Hours, Micros, Millis, Minutes, Months, Nanos, Seconds, Weeks, Years};
        &[Years, Months, Weeks, Days, Hours, Minutes, Seconds, Millis, Micros, Nanos]
    }

    fn get(&self, unit: TemporalUnit) -> Result<i64> {
        match unit {
            TemporalUnit::Years => Ok(i64::from(self.get_years())),
            TemporalUnit::Months => Ok(i64::from(self.get_months())),
            TemporalUnit::Weeks => Ok(i64::from(self.get_weeks())),
            TemporalUnit::Days => Ok(i64::from(self.get_days())),
            TemporalUnit::Hours => Ok(i64::from(self.get_hours())),
            TemporalUnit::Minutes => Ok(self.get_minutes()),
            TemporalUnit::Seconds => Ok(self.get_seconds()),
            TemporalUnit::Millis => Ok(self.get_milliseconds()),
            TemporalUnit::Micros => Ok(self.get_microseconds()),
            TemporalUnit::Nanos => Ok(self.get_nanoseconds()),
            _ => Err(unsupported_unit(unit)),
        }
    }
}

/// Seconds of `duration`, floored.
pub(crate) fn normalized_seconds(duration: SignedDuration) -> i64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() < 0 {
        secs - 1
    } else {
        secs
    }
}

/// Nanosecond-of-second of `duration`, always in `0..1_000_000_000`.
pub(crate) fn normalized_nanos(duration: SignedDuration) -> i64 {
    i64::from(duration.subsec_nanos()).rem_euclid(NANOS_PER_SECOND)
}

/// Build a duration from a total nanosecond count, failing when the seconds
/// overflow `i64`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn duration_from_nanos(total: i128) -> Result<SignedDuration> {
    let per_second = i128::from(NANOS_PER_SECOND);
    let secs = to_long_exact(total / per_second)?;
    // |total % 1e9| < 1e9, always fits
    let nanos = (total % per_second) as i32;
    Ok(SignedDuration::new(secs, nanos))
}

/// A point in time to which periods and durations can be added.
pub trait Temporal: Sized {
    /// Add a calendar period, months first and then days.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] when the period cannot be applied to this kind of
    /// point or the result is out of range.
    fn plus_period(self, period: &Period) -> Result<Self>;

    /// Add an exact duration.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] when the duration cannot be applied to this kind of
    /// point or the result is out of range.
    fn plus_duration(self, duration: SignedDuration) -> Result<Self>;

    /// The calendar date of this point, if it has one.
    fn date(&self) -> Option<Date>;

    /// The time of day of this point, if it has one.
    fn time(&self) -> Option<Time>;

    /// Subtract a calendar period.
    ///
    /// # Errors
    ///
    /// As [`Temporal::plus_period`], and on overflow negating the period.
    fn minus_period(self, period: &Period) -> Result<Self> {
        self.plus_period(&period.negated()?)
    }

    /// Subtract an exact duration.
    ///
    /// # Errors
    ///
    /// As [`Temporal::plus_duration`], and on overflow negating the duration.
    fn minus_duration(self, duration: SignedDuration) -> Result<Self> {
        let negated = duration
            .checked_neg()
            .ok_or(crate::ArithmeticError::Overflow)?;
        self.plus_duration(negated)
    }
}

impl Temporal for Date {
    fn plus_period(self, period: &Period) -> Result<Self> {
        let mut date = self;
        let months = period.to_total_months();
        if months != 0 {
            date = date.checked_add(Span::new().try_months(months)?)?;
        }
        if period.days() != 0 {
            date = date.checked_add(Span::new().try_days(period.days())?)?;
        }
        Ok(date)
    }

    fn plus_duration(self, duration: SignedDuration) -> Result<Self> {
        if duration.is_zero() {
            Ok(self)
        } else {
            Err(Error::date_time(format!(
                "Unsupported unit: {}, a date cannot be moved by an exact duration",
                TemporalUnit::Seconds
            )))
        }
    }

    fn date(&self) -> Option<Date> {
        Some(*self)
    }

    fn time(&self) -> Option<Time> {
        None
    }
}

impl Temporal for Time {
    fn plus_period(self, period: &Period) -> Result<Self> {
        if period.is_zero() {
            Ok(self)
        } else {
            Err(Error::date_time(format!(
                "Unsupported unit: {}, a time of day cannot be moved by a calendar period",
                TemporalUnit::Days
            )))
        }
    }

    fn plus_duration(self, duration: SignedDuration) -> Result<Self> {
        Ok(self.wrapping_add(duration))
    }

    fn date(&self) -> Option<Date> {
        None
    }

    fn time(&self) -> Option<Time> {
        Some(*self)
    }
}

impl Temporal for DateTime {
    fn plus_period(self, period: &Period) -> Result<Self> {
        let mut dt = self;
        let months = period.to_total_months();
        if months != 0 {
            dt = dt.checked_add(Span::new().try_months(months)?)?;
        }
        if period.days() != 0 {
            dt = dt.checked_add(Span::new().try_days(period.days())?)?;
        }
        Ok(dt)
    }

    fn plus_duration(self, duration: SignedDuration) -> Result<Self> {
        Ok(self.checked_add(duration)?)
    }

    fn date(&self) -> Option<Date> {
        Some(DateTime::date(*self))
    }

    fn time(&self) -> Option<Time> {
        Some(DateTime::time(*self))
    }
}

/// Calendar periods are applied to the UTC date-time of the instant.
impl Temporal for Timestamp {
    fn plus_period(self, period: &Period) -> Result<Self> {
        if period.is_zero() {
            return Ok(self);
        }
        let dt = self.to_zoned(TimeZone::UTC).datetime().plus_period(period)?;
        Ok(dt.to_zoned(TimeZone::UTC)?.timestamp())
    }

    fn plus_duration(self, duration: SignedDuration) -> Result<Self> {
        Ok(self.checked_add(duration)?)
    }

    fn date(&self) -> Option<Date> {
        Some(self.to_zoned(TimeZone::UTC).date())
    }

    fn time(&self) -> Option<Time> {
        Some(self.to_zoned(TimeZone::UTC).time())
    }
}

/// Nanoseconds elapsed since midnight.
pub(crate) fn nanos_of_day(time: Time) -> i64 {
    let seconds = i64::from(time.hour()) * 3_600
        + i64::from(time.minute()) * 60
        + i64::from(time.second());
    seconds * NANOS_PER_SECOND + i64::from(time.subsec_nanosecond())
}
