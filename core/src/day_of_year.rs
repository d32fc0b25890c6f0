// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Day-of-year and half-day values.

use jiff::Zoned;
use jiff::civil::{Date, Time};

use crate::error::{Error, Result};

/// A day of the year, from 1 to 366.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(i16);

impl DayOfYear {
    /// Obtain a day-of-year.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] outside `1..=366`.
    pub fn of(day: i16) -> Result<Self> {
        if !(1..=366).contains(&day) {
            return Err(Error::date_time(format!(
                "Invalid value for day of year (valid values 1 - 365/366): {day}"
            )));
        }
        Ok(Self(day))
    }

    /// The day-of-year of a date.
    #[must_use]
    pub fn from(date: Date) -> Self {
        Self(date.day_of_year())
    }

    /// The current day-of-year in the system time zone.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Zoned::now().date())
    }

    /// The day, from 1 to 366.
    #[must_use]
    pub const fn value(&self) -> i16 {
        self.0
    }

    /// Whether this day exists in `year`; day 366 only exists in leap years.
    #[must_use]
    pub fn is_valid_year(&self, year: i16) -> bool {
        self.0 < 366 || Date::new(year, 1, 1).is_ok_and(|d| d.in_leap_year())
    }

    /// The date of this day in `year`.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] for day 366 of a common year, or a year outside
    /// the range of [`jiff::civil::Date`].
    pub fn at_year(&self, year: i16) -> Result<Date> {
        if !self.is_valid_year(year) {
            return Err(Error::date_time(format!(
                "Invalid date 'DayOfYear 366' as '{year}' is not a leap year"
            )));
        }
        Ok(Date::new(year, 1, 1)?.with().day_of_year(self.0).build()?)
    }
}

/// Before or after midday.
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
pub enum AmPm {
    /// Hours 0 to 11
    #[strum(serialize = "AM")]
    Am,
    /// Hours 12 to 23
    #[strum(serialize = "PM")]
    Pm,
}

impl AmPm {
    /// Obtain from its value, 0 for AM and 1 for PM.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] for any other value.
    pub fn of(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Am),
            1 => Ok(Self::Pm),
            _ => Err(Error::date_time(format!(
                "Invalid value for AM/PM (valid values 0 - 1): {value}"
            ))),
        }
    }

    /// The half of the day an hour falls in.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] outside `0..=23`.
    pub fn of_hour(hour: i32) -> Result<Self> {
        if !(0..=23).contains(&hour) {
            return Err(Error::date_time(format!(
                "Invalid value for hour of day (valid values 0 - 23): {hour}"
            )));
        }
        Ok(if hour < 12 { Self::Am } else { Self::Pm })
    }

    /// The half of the day a time falls in.
    #[must_use]
    pub fn from(time: Time) -> Self {
        if time.hour() < 12 { Self::Am } else { Self::Pm }
    }

    /// 0 for AM, 1 for PM.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }
}

crate::serde_str::string_serde!(AmPm);
