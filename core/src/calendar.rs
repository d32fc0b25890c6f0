// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Year bounds, year display and the proleptic ISO calendar for years that
//! [`jiff::civil::Date`] cannot represent.
//!
//! Years within `-9999..=9999` are answered by jiff; the epoch-day helpers
//! below only cover the years outside it. Days are counted from 1970-01-01 as
//! `i64`, weekdays from Monday as `0`.

use std::fmt;

use jiff::civil::Date;

use crate::error::{Error, Result};

/// Smallest year accepted by the year-based types.
pub const MIN_YEAR: i32 = -999_999_999;

/// Largest year accepted by the year-based types.
pub const MAX_YEAR: i32 = 999_999_999;

pub(crate) fn check_year(year: i64) -> Result<i32> {
    match i32::try_from(year) {
        Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(year),
        _ => Err(Error::date_time(format!(
            "Invalid value for year (valid values {MIN_YEAR} - {MAX_YEAR}): {year}"
        ))),
    }
}

/// The year as a [`Date`] year, when jiff can represent it.
pub(crate) fn civil_year(year: i64) -> Option<i16> {
    i16::try_from(year)
        .ok()
        .filter(|year| (-9_999..=9_999).contains(year))
}

pub(crate) fn is_leap_year(year: i64) -> bool {
    match civil_year(year).and_then(|y| Date::new(y, 1, 1).ok()) {
        Some(date) => date.in_leap_year(),
        None => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
    }
}

/// Days since 1970-01-01 of a proleptic Gregorian date.
pub(crate) const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian year of a day count since 1970-01-01.
pub(crate) const fn year_from_days(days: i64) -> i64 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let year = yoe + era * 400;
    if mp >= 10 { year + 1 } else { year }
}

/// Weekday of a day count, Monday is `0`.
pub(crate) const fn weekday_from_days(days: i64) -> i64 {
    (days + 3).rem_euclid(7)
}

/// Display a year as at least four digits, with a `+` above 9999.
pub(crate) struct DisplayYear(pub i32);

impl fmt::Display for DisplayYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            year if year > 9_999 => write!(f, "+{year}"),
            year if year < 0 => write!(f, "-{:04}", year.unsigned_abs()),
            year => write!(f, "{year:04}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_days_from_epoch() {
        #[rustfmt::skip]
        let cases = [
            ((1970, 1, 1),   0),
            ((2000, 3, 1),   11_017),
            ((1969, 12, 31), -1),
            ((2024, 2, 29),  19_782),
        ];
        for ((y, m, d), days) in cases {
            assert_eq!(days_from_civil(y, m, d), days, "{y}-{m}-{d}");
            assert_eq!(year_from_days(days), y, "{days}");
        }
        assert_eq!(year_from_days(days_from_civil(-999_999_999, 1, 1)), -999_999_999);
        assert_eq!(year_from_days(days_from_civil(999_999_999, 12, 31)), 999_999_999);
    }

    #[test]
    fn knows_weekdays_and_leap_years() {
        assert_eq!(weekday_from_days(0), 3); // Thursday
        assert_eq!(weekday_from_days(days_from_civil(2024, 1, 1)), 0);
        assert!(is_leap_year(2000));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(12_000));
        assert!(!is_leap_year(-10_100));
    }

    #[test]
    fn hands_representable_years_to_jiff() {
        assert_eq!(civil_year(2024), Some(2024));
        assert_eq!(civil_year(-9_999), Some(-9_999));
        assert_eq!(civil_year(10_000), None);
        assert_eq!(civil_year(i64::from(MIN_YEAR)), None);
    }

    #[test]
    fn formats_years() {
        #[rustfmt::skip]
        let cases = [
            (2015,   "2015"),
            (5,      "0005"),
            (10_000, "+10000"),
            (-1,     "-0001"),
            (-12_345, "-12345"),
        ];
        for (year, expected) in cases {
            assert_eq!(DisplayYear(year).to_string(), expected);
        }
    }

    #[test]
    fn checks_year_range() {
        assert_eq!(check_year(2024).unwrap(), 2024);
        assert!(check_year(i64::from(MAX_YEAR) + 1).unwrap_err().is_date_time());
        assert!(check_year(i64::from(MIN_YEAR) - 1).is_err());
    }
}
