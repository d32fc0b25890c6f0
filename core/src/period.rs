// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A calendar amount of years, months and days.

use std::fmt;
use std::str::FromStr;

use jiff::Unit;
use jiff::civil::Date;

use crate::error::{Error, Result};
use crate::math::{Exact, to_int_exact};
use crate::parser::{FieldLayout, IsoAmount, Part};
use crate::unit::{TemporalAmount, TemporalUnit, unsupported_unit};

/// A date-based amount of time, such as '2 years, 3 months and 4 days'.
///
/// Unlike [`jiff::Span`], every field covers the full `i32` range. The fields
/// are independent: '15 months' stays 15 months until [`Period::normalized`]
/// is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

const LAYOUT: FieldLayout = &[
    (Part::Date, 'Y'),
    (Part::Date, 'M'),
    (Part::Date, 'W'),
    (Part::Date, 'D'),
];

impl Period {
    /// A period of zero.
    pub const ZERO: Self = Self::of(0, 0, 0);

    /// Obtain a period from years, months and days.
    #[must_use]
    pub const fn of(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A period of whole years.
    #[must_use]
    pub const fn of_years(years: i32) -> Self {
        Self::of(years, 0, 0)
    }

    /// A period of whole months.
    #[must_use]
    pub const fn of_months(months: i32) -> Self {
        Self::of(0, months, 0)
    }

    /// A period of whole weeks, stored as days.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if the number of days overflows.
    pub fn of_weeks(weeks: i32) -> Result<Self> {
        Ok(Self::of(0, 0, weeks.multiply_exact(7)?))
    }

    /// A period of whole days.
    #[must_use]
    pub const fn of_days(days: i32) -> Self {
        Self::of(0, 0, days)
    }

    /// The calendar difference from `start` (inclusive) to `end` (exclusive),
    /// in years, months and days.
    ///
    /// # Errors
    ///
    /// Propagates calendar failures from `jiff`.
    pub fn between(start: Date, end: Date) -> Result<Self> {
        let span = start.until((Unit::Year, end))?;
        Ok(Self::of(
            i32::from(span.get_years()),
            span.get_months(),
            span.get_days(),
        ))
    }

    /// Years field.
    #[must_use]
    pub const fn years(&self) -> i32 {
        self.years
    }

    /// Months field.
    #[must_use]
    pub const fn months(&self) -> i32 {
        self.months
    }

    /// Days field.
    #[must_use]
    pub const fn days(&self) -> i32 {
        self.days
    }

    /// Whether all three fields are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Whether any field is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Years and months as a month count; never overflows `i64`.
    #[must_use]
    pub const fn to_total_months(&self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }

    /// Copy with the years field replaced.
    #[must_use]
    pub const fn with_years(self, years: i32) -> Self {
        Self { years, ..self }
    }

    /// Copy with the months field replaced.
    #[must_use]
    pub const fn with_months(self, months: i32) -> Self {
        Self { months, ..self }
    }

    /// Copy with the days field replaced.
    #[must_use]
    pub const fn with_days(self, days: i32) -> Self {
        Self { days, ..self }
    }

    /// Field-wise sum.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if any field overflows.
    pub fn plus(self, other: Self) -> Result<Self> {
        Ok(Self::of(
            self.years.add_exact(other.years)?,
            self.months.add_exact(other.months)?,
            self.days.add_exact(other.days)?,
        ))
    }

    /// Field-wise difference.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if any field overflows.
    pub fn minus(self, other: Self) -> Result<Self> {
        Ok(Self::of(
            self.years.subtract_exact(other.years)?,
            self.months.subtract_exact(other.months)?,
            self.days.subtract_exact(other.days)?,
        ))
    }

    /// Every field multiplied by `scalar`.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if any field overflows.
    pub fn multiplied_by(self, scalar: i32) -> Result<Self> {
        if scalar == 1 {
            return Ok(self);
        }
        Ok(Self::of(
            self.years.multiply_exact(scalar)?,
            self.months.multiply_exact(scalar)?,
            self.days.multiply_exact(scalar)?,
        ))
    }

    /// Every field negated.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if any field is `i32::MIN`.
    pub fn negated(self) -> Result<Self> {
        self.multiplied_by(-1)
    }

    /// Fold months into years so that both carry the same sign and
    /// `|months| < 12`. Days are untouched.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if the years no longer fit in `i32`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn normalized(self) -> Result<Self> {
        let total = self.to_total_months();
        let years = to_int_exact(total / 12)?;
        // |total % 12| < 12
        let months = (total % 12) as i32;
        if years == self.years && months == self.months {
            return Ok(self);
        }
        Ok(Self::of(years, months, self.days))
    }

    /// Parse `[+-]?P([+-]?nY)?([+-]?nM)?([+-]?nW)?([+-]?nD)?`, case-insensitive.
    /// Weeks are added to days as seven days each.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on a grammar violation or an overflowing field.
    pub fn parse(text: &str) -> Result<Self> {
        let amount = IsoAmount::parse(text, LAYOUT)?;
        Self::from_iso(&amount).map_err(|e| e.into_parse(text, "Text cannot be parsed to a Period"))
    }

    pub(crate) fn from_iso(amount: &IsoAmount) -> Result<Self> {
        let mut period = Self::ZERO;
        for field in amount.fields().iter().filter(|f| f.part == Part::Date) {
            let value = field.to_i32()?;
            match field.designator {
                'Y' => period.years = value,
                'M' => period.months = value,
                'W' => period.days = period.days.add_exact(value.multiply_exact(7)?)?,
                _ => period.days = period.days.add_exact(value)?,
            }
        }
        if amount.is_negative() {
            period = period.negated()?;
        }
        Ok(period)
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// ISO-8601 form such as `P1Y2M3D`; zero is `P0D`.
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl TemporalAmount for Period {
    fn units(&self) -> &'static [TemporalUnit] {
        &[TemporalUnit::Years, TemporalUnit::Months, TemporalUnit::Days]
    }

    fn get(&self, unit: TemporalUnit) -> Result<i64> {
        match unit {
            TemporalUnit::Years => Ok(i64::from(self.years)),
            TemporalUnit::Months => Ok(i64::from(self.months)),
            TemporalUnit::Days => Ok(i64::from(self.days)),
            _ => Err(unsupported_unit(unit)),
        }
    }
}

crate::serde_str::string_serde!(Period);
