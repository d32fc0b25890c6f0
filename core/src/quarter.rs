// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Quarters of the year and year-quarters such as `2024-Q3`.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use jiff::{Span, Zoned};

use crate::calendar::{DisplayYear, check_year, is_leap_year};
use crate::error::{Error, Result};
use crate::math::Exact;
use crate::parser::parse_year_and_value;

/// A quarter of the year.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Quarter {
    /// January to March
    Q1,
    /// April to June
    Q2,
    /// July to September
    Q3,
    /// October to December
    Q4,
}

impl Quarter {
    /// Obtain a quarter from its value, 1 to 4.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] outside `1..=4`.
    pub fn of(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::Q1),
            2 => Ok(Self::Q2),
            3 => Ok(Self::Q3),
            4 => Ok(Self::Q4),
            _ => Err(Error::date_time(format!(
                "Invalid value for quarter (valid values 1 - 4): {value}"
            ))),
        }
    }

    /// The quarter containing a month, 1 to 12.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] outside `1..=12`.
    pub fn from_month(month: i8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::date_time(format!(
                "Invalid value for month (valid values 1 - 12): {month}"
            )));
        }
        Self::of(i32::from((month - 1) / 3 + 1))
    }

    /// The value of this quarter, 1 to 4.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32 + 1
    }

    /// The first month of this quarter.
    #[must_use]
    pub const fn first_month(self) -> i8 {
        self as i8 * 3 + 1
    }

    /// Days in this quarter.
    #[must_use]
    pub const fn length(self, leap_year: bool) -> i16 {
        match self {
            Self::Q1 if leap_year => 91,
            Self::Q1 => 90,
            Self::Q2 => 91,
            Self::Q3 | Self::Q4 => 92,
        }
    }

    /// The quarter a number of quarters later, wrapping around the year.
    #[must_use]
    pub fn plus(self, quarters: i64) -> Self {
        match (i64::from(self.value() - 1) + quarters.rem_euclid(4)).rem_euclid(4) {
            0 => Self::Q1,
            1 => Self::Q2,
            2 => Self::Q3,
            _ => Self::Q4,
        }
    }

    /// The quarter a number of quarters earlier, wrapping around the year.
    #[must_use]
    pub fn minus(self, quarters: i64) -> Self {
        self.plus(-quarters.rem_euclid(4))
    }
}

crate::serde_str::string_serde!(Quarter);

/// A quarter within a year, such as `2024-Q3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearQuarter {
    year: i32,
    quarter: Quarter,
}

impl YearQuarter {
    /// Obtain a year-quarter.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the year is outside `±999_999_999`.
    pub fn of(year: i32, quarter: Quarter) -> Result<Self> {
        let year = check_year(i64::from(year))?;
        Ok(Self { year, quarter })
    }

    /// The year-quarter containing a date.
    #[must_use]
    pub fn from(date: Date) -> Self {
        let quarter = match date.month() {
            1..=3 => Quarter::Q1,
            4..=6 => Quarter::Q2,
            7..=9 => Quarter::Q3,
            _ => Quarter::Q4,
        };
        Self {
            year: i32::from(date.year()),
            quarter,
        }
    }

    /// The current year-quarter in the system time zone.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Zoned::now().date())
    }

    /// Parse `yyyy-Qn`, with a sign for years above 9999 or below zero.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on a grammar violation or an invalid quarter.
    pub fn parse(text: &str) -> Result<Self> {
        let (year, quarter) = parse_year_and_value(text, 'Q', 1)?;
        let quarter = i32::try_from(quarter).unwrap_or(i32::MAX);
        check_year(year)
            .and_then(|year| Self::of(year, Quarter::of(quarter)?))
            .map_err(|e| e.into_parse(text, "Text cannot be parsed to a YearQuarter"))
    }

    /// The year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The quarter.
    #[must_use]
    pub const fn quarter(&self) -> Quarter {
        self.quarter
    }

    /// Whether the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(i64::from(self.year))
    }

    /// Days in this quarter, 90 to 92.
    #[must_use]
    pub fn length_of_quarter(&self) -> i16 {
        self.quarter.length(self.is_leap_year())
    }

    /// Copy with the year replaced.
    ///
    /// # Errors
    ///
    /// As [`YearQuarter::of`].
    pub fn with_year(self, year: i32) -> Result<Self> {
        Self::of(year, self.quarter)
    }

    /// Copy with the quarter replaced.
    #[must_use]
    pub const fn with_quarter(self, quarter: Quarter) -> Self {
        Self { quarter, ..self }
    }

    /// Move by a number of quarters.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] on overflow, [`Error::DateTime`] if the year
    /// leaves its range.
    pub fn plus_quarters(self, quarters: i64) -> Result<Self> {
        if quarters == 0 {
            return Ok(self);
        }
        let index = i64::from(self.year)
            .multiply_exact(4)?
            .add_exact(i64::from(self.quarter.value() - 1))?
            .add_exact(quarters)?;
        let year = check_year(index.div_euclid(4))?;
        Ok(Self {
            year,
            quarter: Quarter::Q1.plus(index.rem_euclid(4)),
        })
    }

    /// Move back by a number of quarters.
    ///
    /// # Errors
    ///
    /// As [`YearQuarter::plus_quarters`].
    pub fn minus_quarters(self, quarters: i64) -> Result<Self> {
        self.plus_quarters(quarters.negate_exact()?)
    }

    /// Move by a number of years.
    ///
    /// # Errors
    ///
    /// As [`YearQuarter::plus_quarters`].
    pub fn plus_years(self, years: i64) -> Result<Self> {
        if years == 0 {
            return Ok(self);
        }
        let year = check_year(i64::from(self.year).add_exact(years)?)?;
        Ok(Self { year, ..self })
    }

    /// Move back by a number of years.
    ///
    /// # Errors
    ///
    /// As [`YearQuarter::plus_quarters`].
    pub fn minus_years(self, years: i64) -> Result<Self> {
        self.plus_years(years.negate_exact()?)
    }

    /// The date of a day within this quarter, from 1.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the day is outside the quarter or the year is
    /// outside the range of [`jiff::civil::Date`].
    pub fn at_day(&self, day: i16) -> Result<Date> {
        let length = self.length_of_quarter();
        if !(1..=length).contains(&day) {
            return Err(Error::date_time(format!(
                "Invalid value for day of quarter (valid values 1 - {length}): {day}"
            )));
        }
        let year = i16::try_from(self.year)
            .map_err(|_| Error::date_time(format!("Year {} is out of range for a date", self.year)))?;
        let first = Date::new(year, self.quarter.first_month(), 1)?;
        Ok(first.checked_add(Span::new().try_days(day - 1)?)?)
    }

    /// The last date of this quarter.
    ///
    /// # Errors
    ///
    /// As [`YearQuarter::at_day`].
    pub fn at_end_of_quarter(&self) -> Result<Date> {
        self.at_day(self.length_of_quarter())
    }
}

impl FromStr for YearQuarter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for YearQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", DisplayYear(self.year), self.quarter)
    }
}

crate::serde_str::string_serde!(YearQuarter);
