// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! An amount combining a calendar [`Period`] with an exact [`SignedDuration`].

use std::fmt;
use std::str::FromStr;

use jiff::SignedDuration;

use crate::error::{ArithmeticError, Error, Result};
use crate::math::{Exact, to_int_exact, to_long_exact};
use crate::parser::{FieldLayout, IsoAmount, Part};
use crate::period::Period;
use crate::unit::{
    NANOS_PER_SECOND, SECONDS_PER_DAY, Temporal, TemporalAmount, TemporalUnit, duration_from_nanos,
    nanos_of_day, normalized_nanos, normalized_seconds, unsupported_unit,
};

const LAYOUT: FieldLayout = &[
    (Part::Date, 'Y'),
    (Part::Date, 'M'),
    (Part::Date, 'W'),
    (Part::Date, 'D'),
    (Part::Time, 'H'),
    (Part::Time, 'M'),
    (Part::Time, 'S'),
];

/// A period and a duration, such as '2 months, 3 days and 4 hours'.
///
/// The two parts are kept apart: calendar amounts depend on the point they are
/// added to, exact amounts do not. For that reason there is no ordering, only
/// equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PeriodDuration {
    period: Period,
    duration: SignedDuration,
}

impl PeriodDuration {
    /// Zero period and zero duration.
    pub const ZERO: Self = Self::of(Period::ZERO, SignedDuration::ZERO);

    /// Combine a period and a duration.
    #[must_use]
    pub const fn of(period: Period, duration: SignedDuration) -> Self {
        Self { period, duration }
    }

    /// A period with a zero duration.
    #[must_use]
    pub const fn of_period(period: Period) -> Self {
        Self::of(period, SignedDuration::ZERO)
    }

    /// A duration with a zero period.
    #[must_use]
    pub const fn of_duration(duration: SignedDuration) -> Self {
        Self::of(Period::ZERO, duration)
    }

    /// The amount of time between two points.
    ///
    /// The period is the calendar difference of the dates when both points
    /// have one. The duration is the difference of the times of day, with
    /// midnight standing in for a missing time.
    ///
    /// # Errors
    ///
    /// Propagates calendar failures from `jiff`.
    pub fn between<S: Temporal, E: Temporal>(start: &S, end: &E) -> Result<Self> {
        let period = match (start.date(), end.date()) {
            (Some(start), Some(end)) => Period::between(start, end)?,
            _ => Period::ZERO,
        };
        let start_nanos = start.time().map_or(0, nanos_of_day);
        let end_nanos = end.time().map_or(0, nanos_of_day);
        let duration = SignedDuration::from_nanos(end_nanos - start_nanos);
        Ok(Self::of(period, duration))
    }

    /// Obtain an instance from any amount.
    ///
    /// Calendar units fold into the period, decades and longer as years and
    /// weeks as seven days. Clock units fold into the duration.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] for eras and other units without a fixed meaning,
    /// [`Error::Arithmetic`] on overflow.
    pub fn from<A: TemporalAmount + ?Sized>(amount: &A) -> Result<Self> {
        let mut years = 0_i64;
        let mut months = 0_i64;
        let mut days = 0_i64;
        let mut nanos = 0_i128;
        for &unit in amount.units() {
            let value = amount.get(unit)?;
            if value == 0 {
                continue;
            }
            match unit {
                TemporalUnit::Days => days = days.add_exact(value)?,
                TemporalUnit::Weeks => days = days.add_exact(value.multiply_exact(7)?)?,
                TemporalUnit::Months => months = months.add_exact(value)?,
                TemporalUnit::Years
                | TemporalUnit::Decades
                | TemporalUnit::Centuries
                | TemporalUnit::Millennia => {
                    let (converted, _) = unit.convert_amount(value, TemporalUnit::Years)?;
                    years = years.add_exact(converted)?;
                }
                _ => {
                    let Some(factor) = unit.nanos() else {
                        return Err(Error::date_time(format!("Unknown unit: {unit}")));
                    };
                    nanos = nanos.add_exact(i128::from(value) * i128::from(factor))?;
                }
            }
        }

        let period = Period::of(
            to_int_exact(years)?,
            to_int_exact(months)?,
            to_int_exact(days)?,
        );
        Ok(Self::of(period, duration_from_nanos(nanos)?))
    }

    /// Parse `[+-]?P(nY)?(nM)?(nW)?(nD)?(T(nH)?(nM)?(n[.,f]S)?)?` where each
    /// `n` may carry its own sign.
    ///
    /// Weeks are added to days. A fraction of up to nine digits is allowed on
    /// the seconds and shares their sign. A leading `-` negates every field.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on a grammar violation or an overflowing field.
    pub fn parse(text: &str) -> Result<Self> {
        let amount = IsoAmount::parse(text, LAYOUT)?;
        Self::from_iso(&amount)
            .map_err(|e| e.into_parse(text, "Text cannot be parsed to a PeriodDuration"))
    }

    fn from_iso(amount: &IsoAmount) -> Result<Self> {
        let period = Period::from_iso(amount)?;

        let mut nanos = 0_i128;
        for field in amount.fields().iter().filter(|f| f.part == Part::Time) {
            let seconds = match field.designator {
                'H' => 3_600,
                'M' => 60,
                _ => 1,
            };
            let whole = i128::from(field.to_i64()?) * seconds * i128::from(NANOS_PER_SECOND);
            nanos += whole + i128::from(field.fraction_nanos());
        }
        if amount.is_negative() {
            nanos = -nanos;
        }
        Ok(Self::of(period, duration_from_nanos(nanos)?))
    }

    /// The period part.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// The duration part.
    #[must_use]
    pub const fn duration(&self) -> SignedDuration {
        self.duration
    }

    /// Copy with the period replaced.
    #[must_use]
    pub const fn with_period(self, period: Period) -> Self {
        Self { period, ..self }
    }

    /// Copy with the duration replaced.
    #[must_use]
    pub const fn with_duration(self, duration: SignedDuration) -> Self {
        Self { duration, ..self }
    }

    /// Whether both parts are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.period.is_zero() && self.duration.is_zero()
    }

    /// Add any amount, part by part.
    ///
    /// # Errors
    ///
    /// As [`PeriodDuration::from`], and [`Error::Arithmetic`] on overflow.
    pub fn plus<A: TemporalAmount + ?Sized>(self, amount: &A) -> Result<Self> {
        let other = Self::from(amount)?;
        let duration = self
            .duration
            .checked_add(other.duration)
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self::of(self.period.plus(other.period)?, duration))
    }

    /// Subtract any amount, part by part.
    ///
    /// # Errors
    ///
    /// As [`PeriodDuration::from`], and [`Error::Arithmetic`] on overflow.
    pub fn minus<A: TemporalAmount + ?Sized>(self, amount: &A) -> Result<Self> {
        let other = Self::from(amount)?;
        let duration = self
            .duration
            .checked_sub(other.duration)
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self::of(self.period.minus(other.period)?, duration))
    }

    /// Multiply every field by `scalar`.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if any field overflows.
    pub fn multiplied_by(self, scalar: i32) -> Result<Self> {
        if scalar == 1 {
            return Ok(self);
        }
        let duration = self
            .duration
            .checked_mul(scalar)
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self::of(self.period.multiplied_by(scalar)?, duration))
    }

    /// Negate every field.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if any field overflows.
    pub fn negated(self) -> Result<Self> {
        self.multiplied_by(-1)
    }

    /// Fold months into years, leaving days and the duration alone.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if the years overflow.
    pub fn normalized_years(self) -> Result<Self> {
        Ok(self.with_period(self.period.normalized()?))
    }

    /// Move whole standard days of 24 hours between the duration and the
    /// days of the period.
    ///
    /// Days and duration seconds are summed and split again, so the day count
    /// and the remaining duration end up with the sign of the total.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if the days overflow.
    pub fn normalized_standard_days(self) -> Result<Self> {
        let seconds = normalized_seconds(self.duration);
        let total = i128::from(self.period.days()) * i128::from(SECONDS_PER_DAY)
            + i128::from(seconds);
        let days = to_int_exact(to_long_exact(total / i128::from(SECONDS_PER_DAY))?)?;
        let remainder = total % i128::from(SECONDS_PER_DAY);
        if days == self.period.days() && remainder == i128::from(seconds) {
            return Ok(self);
        }

        let nanos = remainder * i128::from(NANOS_PER_SECOND)
            + i128::from(normalized_nanos(self.duration));
        Ok(Self::of(
            self.period.with_days(days),
            duration_from_nanos(nanos)?,
        ))
    }

    /// Truncate the duration toward zero to a multiple of `unit`.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if `unit` is a date-based unit or has no exact
    /// length.
    pub fn truncated_to(self, unit: TemporalUnit) -> Result<Self> {
        if unit.is_date_based() {
            return Err(Error::date_time(format!(
                "Unit must not be a date unit: {unit}"
            )));
        }
        let Some(unit_nanos) = unit.nanos() else {
            return Err(unsupported_unit(unit));
        };

        let unit_nanos = i128::from(unit_nanos);
        let total = self.duration.as_nanos();
        let truncated = total / unit_nanos * unit_nanos;
        if truncated == total {
            return Ok(self);
        }
        Ok(self.with_duration(duration_from_nanos(truncated)?))
    }

    /// Add to a point in time, the period first and then the duration.
    ///
    /// # Errors
    ///
    /// Whatever the point in time reports.
    pub fn add_to<T: Temporal>(&self, temporal: T) -> Result<T> {
        temporal
            .plus_period(&self.period)?
            .plus_duration(self.duration)
    }

    /// Subtract from a point in time, the period first and then the duration.
    ///
    /// # Errors
    ///
    /// Whatever the point in time reports.
    pub fn subtract_from<T: Temporal>(&self, temporal: T) -> Result<T> {
        temporal
            .minus_period(&self.period)?
            .minus_duration(self.duration)
    }
}

impl FromStr for PeriodDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// ISO-8601 form. A zero part is omitted, so `P1Y2M3DT5S`, `P1Y2M3D` and
/// `PT5S`; zero is `PT0S`.
impl fmt::Display for PeriodDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duration.is_zero() && !self.period.is_zero() {
            return write!(f, "{}", self.period);
        }
        if self.period.is_zero() {
            f.write_str("P")?;
            return write_time(f, self.duration);
        }
        write!(f, "{}", self.period)?;
        write_time(f, self.duration)
    }
}

/// Write `T<h>H<m>M<s>.<f>S`, each field carrying the sign of the duration.
/// Hours and minutes are skipped when zero, seconds only when something was
/// written before them.
fn write_time(f: &mut fmt::Formatter<'_>, duration: SignedDuration) -> fmt::Result {
    let total = duration.as_secs();
    let nanos = duration.subsec_nanos();
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    f.write_str("T")?;
    if hours != 0 {
        write!(f, "{hours}H")?;
    }
    if minutes != 0 {
        write!(f, "{minutes}M")?;
    }
    if seconds == 0 && nanos == 0 && (hours != 0 || minutes != 0) {
        return Ok(());
    }

    if seconds == 0 && nanos < 0 {
        f.write_str("-0")?;
    } else {
        write!(f, "{seconds}")?;
    }
    if nanos != 0 {
        let fraction = format!("{:09}", nanos.unsigned_abs());
        write!(f, ".{}", fraction.trim_end_matches('0'))?;
    }
    f.write_str("S")
}

impl TemporalAmount for PeriodDuration {
    fn units(&self) -> &'static [TemporalUnit] {
        &[
            TemporalUnit::Years,
            TemporalUnit::Months,
            TemporalUnit::Days,
            TemporalUnit::Seconds,
            TemporalUnit::Nanos,
        ]
    }

    fn get(&self, unit: TemporalUnit) -> Result<i64> {
        match unit {
            TemporalUnit::Years | TemporalUnit::Months | TemporalUnit::Days => {
                self.period.get(unit)
            }
            TemporalUnit::Seconds => Ok(normalized_seconds(self.duration)),
            TemporalUnit::Nanos => Ok(normalized_nanos(self.duration)),
            _ => Err(unsupported_unit(unit)),
        }
    }
}

crate::serde_str::string_serde!(PeriodDuration);

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;
    use crate::{Days, Hours, Weeks};

    fn pd(years: i32, months: i32, days: i32, secs: i64, nanos: i32) -> PeriodDuration {
        PeriodDuration::of(Period::of(years, months, days), SignedDuration::new(secs, nanos))
    }

    #[test]
    fn formats_iso() {
        #[rustfmt::skip]
        let cases = [
            (pd(1, 2, 3, 5, 0),            "P1Y2M3DT5S"),
            (pd(1, 2, 3, 0, 0),            "P1Y2M3D"),
            (pd(0, 0, 0, 5, 0),            "PT5S"),
            (PeriodDuration::ZERO,         "PT0S"),
            (pd(0, 0, 0, 3_600, 0),        "PT1H"),
            (pd(0, 0, 0, 3_661, 0),        "PT1H1M1S"),
            (pd(0, 0, 0, -3_661, -500_000_000), "PT-1H-1M-1.5S"),
            (pd(0, 0, 0, 0, -500_000_000), "PT-0.5S"),
            (pd(0, 0, 0, 1, 1),            "PT1.000000001S"),
            (pd(0, 1, 0, 90, 0),           "P1MT1M30S"),
            (pd(0, 0, -2, -7_200, 0),      "P-2DT-2H"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn parses_iso() {
        #[rustfmt::skip]
        let success_cases = [
            ("P1Y2M3DT5S",   pd(1, 2, 3, 5, 0)),
            ("PT5S",         pd(0, 0, 0, 5, 0)),
            ("P2W1D",        pd(0, 0, 15, 0, 0)),
            ("PT1H-30M",     pd(0, 0, 0, 1_800, 0)),
            ("-P1DT2H",      pd(0, 0, -1, -7_200, 0)),
            ("-P-1DT-2H",    pd(0, 0, 1, 7_200, 0)),
            ("PT1.5S",       pd(0, 0, 0, 1, 500_000_000)),
            ("PT-1,5S",      pd(0, 0, 0, -1, -500_000_000)),
            ("-PT0.5S",      pd(0, 0, 0, 0, -500_000_000)),
            ("pt0.000000001s", pd(0, 0, 0, 0, 1)),
            ("P0D",          PeriodDuration::ZERO),
        ];
        for (src, expected) in success_cases {
            assert_eq!(PeriodDuration::parse(src).unwrap(), expected, "Failed to parse: {src}");
        }

        let fail_cases = ["", "P", "PT", "P1DT", "PT1S2M", "PT1.5M", "P1.5D", "T1H", "P1Y 2M"];
        for src in fail_cases {
            let err = PeriodDuration::parse(src).unwrap_err();
            assert!(err.is_parse(), "Parse {src} should fail: {err}");
        }
    }

    #[test]
    fn round_trips_through_text() {
        for value in [
            pd(1, 2, 3, 5, 0),
            pd(-1, 0, 7, -3_661, -250_000_000),
            pd(0, 0, 0, 86_399, 999_999_999),
            PeriodDuration::ZERO,
        ] {
            assert_eq!(PeriodDuration::parse(&value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn exposes_supported_units_only() {
        let value = pd(1, 2, 3, -1, -500_000_000);
        assert_eq!(value.get(TemporalUnit::Years).unwrap(), 1);
        assert_eq!(value.get(TemporalUnit::Months).unwrap(), 2);
        assert_eq!(value.get(TemporalUnit::Days).unwrap(), 3);
        assert_eq!(value.get(TemporalUnit::Seconds).unwrap(), -2);
        assert_eq!(value.get(TemporalUnit::Nanos).unwrap(), 500_000_000);
        for unit in [TemporalUnit::Eras, TemporalUnit::Weeks, TemporalUnit::Hours] {
            assert!(value.get(unit).unwrap_err().is_date_time(), "{unit}");
        }
    }

    #[test]
    fn converts_from_other_amounts() {
        assert_eq!(
            PeriodDuration::from(&Weeks::of(2)).unwrap(),
            PeriodDuration::of_period(Period::of_days(14))
        );
        assert_eq!(
            PeriodDuration::from(&Hours::of(25)).unwrap(),
            PeriodDuration::of_duration(SignedDuration::from_hours(25))
        );
        assert_eq!(
            PeriodDuration::from(&Period::of(1, 14, 3)).unwrap(),
            PeriodDuration::of_period(Period::of(1, 14, 3))
        );
        let span = jiff::Span::new().years(1).days(2).hours(3).milliseconds(4);
        assert_eq!(
            PeriodDuration::from(&span).unwrap(),
            pd(1, 0, 2, 10_800, 4_000_000)
        );
        let value = pd(1, 0, 2, 5, 0);
        assert_eq!(PeriodDuration::from(&value).unwrap(), value);
    }

    #[test]
    fn combines_parts() {
        let value = pd(0, 1, 1, 60, 0);
        assert_eq!(value.plus(&Days::of(2)).unwrap(), pd(0, 1, 3, 60, 0));
        assert_eq!(value.plus(&Hours::ONE).unwrap(), pd(0, 1, 1, 3_660, 0));
        assert_eq!(value.plus(&value).unwrap(), pd(0, 2, 2, 120, 0));
        assert_eq!(value.minus(&value).unwrap(), PeriodDuration::ZERO);
        assert_eq!(value.multiplied_by(3).unwrap(), pd(0, 3, 3, 180, 0));
        assert_eq!(value.negated().unwrap(), pd(0, -1, -1, -60, 0));
        assert!(
            PeriodDuration::of_period(Period::of_days(i32::MAX))
                .plus(&Days::ONE)
                .unwrap_err()
                .is_arithmetic()
        );
    }

    #[test]
    fn normalizes() {
        assert_eq!(pd(1, 14, 0, 5, 0).normalized_years().unwrap(), pd(2, 2, 0, 5, 0));
        assert_eq!(pd(0, -14, 0, 0, 0).normalized_years().unwrap(), pd(-1, -2, 0, 0, 0));

        #[rustfmt::skip]
        let cases = [
            (pd(0, 0, 1, 90_000, 0),   pd(0, 0, 2, 3_600, 0)),
            (pd(0, 0, 0, -90_000, 0),  pd(0, 0, -1, -3_600, 0)),
            (pd(0, 0, 1, -3_600, 0),   pd(0, 0, 0, 82_800, 0)),
            (pd(1, 2, 0, 86_400, 5),   pd(1, 2, 1, 0, 5)),
            (pd(0, 0, 0, 3_600, 0),    pd(0, 0, 0, 3_600, 0)),
        ];
        for (value, expected) in cases {
            assert_eq!(value.normalized_standard_days().unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn truncates_duration_only() {
        let value = pd(1, 0, 0, 61, 500);
        assert_eq!(value.truncated_to(TemporalUnit::Minutes).unwrap(), pd(1, 0, 0, 60, 0));
        assert_eq!(value.truncated_to(TemporalUnit::Seconds).unwrap(), pd(1, 0, 0, 61, 0));
        assert_eq!(value.truncated_to(TemporalUnit::Nanos).unwrap(), value);
        assert_eq!(
            pd(0, 0, 0, -61, 0).truncated_to(TemporalUnit::Minutes).unwrap(),
            pd(0, 0, 0, -60, 0)
        );
        for unit in [TemporalUnit::Days, TemporalUnit::Months, TemporalUnit::Forever] {
            assert!(value.truncated_to(unit).unwrap_err().is_date_time(), "{unit}");
        }
    }

    #[test]
    fn measures_between_points() {
        assert_eq!(
            PeriodDuration::between(&date(2024, 1, 15), &date(2025, 3, 20)).unwrap(),
            pd(1, 2, 5, 0, 0)
        );
        assert_eq!(
            PeriodDuration::between(&time(10, 0, 0, 0), &time(12, 30, 0, 0)).unwrap(),
            pd(0, 0, 0, 9_000, 0)
        );
        assert_eq!(
            PeriodDuration::between(
                &date(2024, 1, 1).at(10, 0, 0, 0),
                &date(2024, 1, 3).at(9, 0, 0, 0)
            )
            .unwrap(),
            pd(0, 0, 2, -3_600, 0)
        );
        assert_eq!(
            PeriodDuration::between(&date(2024, 1, 1), &date(2024, 1, 2).at(6, 0, 0, 0)).unwrap(),
            pd(0, 0, 1, 21_600, 0)
        );
    }

    #[test]
    fn applies_period_before_duration() {
        let value = pd(0, 1, 0, 3_600, 0);
        let start = date(2024, 1, 31).at(23, 30, 0, 0);
        assert_eq!(value.add_to(start).unwrap(), date(2024, 3, 1).at(0, 30, 0, 0));
        assert_eq!(
            value.subtract_from(date(2024, 3, 31).at(0, 30, 0, 0)).unwrap(),
            date(2024, 2, 28).at(23, 30, 0, 0)
        );
        assert!(value.add_to(date(2024, 1, 1)).is_err());
    }
}
