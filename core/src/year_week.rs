// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A week in the ISO week-based calendar, such as `2015-W53`.

use std::fmt;
use std::str::FromStr;

use jiff::civil::{Date, ISOWeekDate, Weekday};
use jiff::{Span, Zoned};

use crate::calendar::{
    DisplayYear, check_year, civil_year, days_from_civil, weekday_from_days, year_from_days,
};
use crate::error::{Error, Result};
use crate::math::Exact;
use crate::parser::parse_year_and_value;

/// More days than separate the first and last supported years.
const MAX_SPAN_DAYS: u64 = 2 * 1_000_000_000 * 366;

/// A week-based year and a week within it.
///
/// Weeks run from Monday to Sunday and week 1 is the week containing the first
/// Thursday of the year, so a week-based year has either 52 or 53 weeks.
/// Years range over `±999_999_999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearWeek {
    year: i32,
    week: i32,
}

impl YearWeek {
    /// Obtain a year-week.
    ///
    /// Week 53 of a year with only 52 weeks is week 1 of the next year.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the year is out of range or the week is not in
    /// `1..=53`.
    pub fn of(year: i32, week: i32) -> Result<Self> {
        let year = check_year(i64::from(year))?;
        if !(1..=53).contains(&week) {
            return Err(Error::date_time(format!(
                "Invalid value for week (valid values 1 - 52/53): {week}"
            )));
        }
        if week == 53 && !is_long_year(year) {
            let year = check_year(i64::from(year) + 1)?;
            return Ok(Self { year, week: 1 });
        }
        Ok(Self { year, week })
    }

    /// The week containing a date.
    #[must_use]
    pub fn from(date: Date) -> Self {
        let week_date = date.iso_week_date();
        Self {
            year: i32::from(week_date.year()),
            week: i32::from(week_date.week()),
        }
    }

    /// The current week in the system time zone.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Zoned::now().date())
    }

    /// Parse `yyyy-Www`, with a sign for years above 9999 or below zero.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on a grammar violation or an invalid week.
    pub fn parse(text: &str) -> Result<Self> {
        const MESSAGE: &str = "Text cannot be parsed to a YearWeek";

        let (year, week) = parse_year_and_value(text, 'W', 2)?;
        let year = check_year(year).map_err(|e| e.into_parse(text, MESSAGE))?;
        let week = i32::try_from(week).unwrap_or(i32::MAX);
        if week == 53 && !is_long_year(year) {
            return Err(Error::parse(
                text,
                0,
                format!("Week 53 does not exist in week-based year {year}"),
            ));
        }
        Self::of(year, week).map_err(|e| e.into_parse(text, MESSAGE))
    }

    /// The week-based year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The week, from 1 to 53.
    #[must_use]
    pub const fn week(&self) -> i32 {
        self.week
    }

    /// Whether the week-based year has 53 weeks.
    #[must_use]
    pub fn is_53_week_year(&self) -> bool {
        is_long_year(self.year)
    }

    /// Number of weeks in the week-based year.
    #[must_use]
    pub fn length_of_year(&self) -> i32 {
        if self.is_53_week_year() { 53 } else { 52 }
    }

    /// Copy with the year replaced.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the year is out of range, or the week is 53 and
    /// the new year only has 52 weeks.
    pub fn with_year(self, year: i32) -> Result<Self> {
        let year = check_year(i64::from(year))?;
        if self.week == 53 && !is_long_year(year) {
            return Err(Error::date_time(format!(
                "Week 53 does not exist in week-based year {year}"
            )));
        }
        Ok(Self { year, ..self })
    }

    /// Copy with the week replaced, following the rules of [`YearWeek::of`].
    ///
    /// # Errors
    ///
    /// As [`YearWeek::of`].
    pub fn with_week(self, week: i32) -> Result<Self> {
        Self::of(self.year, week)
    }

    /// Move by a number of weeks.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] on overflow, [`Error::DateTime`] if the year
    /// leaves its range.
    pub fn plus_weeks(self, weeks: i64) -> Result<Self> {
        if weeks == 0 {
            return Ok(self);
        }
        let days = weeks.multiply_exact(7)?;
        if days.unsigned_abs() > MAX_SPAN_DAYS {
            return Err(Error::date_time(format!(
                "Week-based year out of range after adding {weeks} weeks"
            )));
        }
        let shifted = self.at_day(Weekday::Monday).ok().and_then(|monday| {
            let span = Span::new().try_weeks(weeks).ok()?;
            monday.checked_add(span).ok()
        });
        match shifted {
            Some(monday) => Ok(Self::from(monday)),
            None => Self::from_monday(self.monday() + days),
        }
    }

    /// Move back by a number of weeks.
    ///
    /// # Errors
    ///
    /// As [`YearWeek::plus_weeks`].
    pub fn minus_weeks(self, weeks: i64) -> Result<Self> {
        self.plus_weeks(weeks.negate_exact()?)
    }

    /// Move by a number of week-based years, keeping the week.
    ///
    /// # Errors
    ///
    /// As [`YearWeek::with_year`], and [`Error::Arithmetic`] on overflow.
    pub fn plus_years(self, years: i64) -> Result<Self> {
        if years == 0 {
            return Ok(self);
        }
        let year = check_year(i64::from(self.year).add_exact(years)?)?;
        self.with_year(year)
    }

    /// Move back by a number of week-based years.
    ///
    /// # Errors
    ///
    /// As [`YearWeek::plus_years`].
    pub fn minus_years(self, years: i64) -> Result<Self> {
        self.plus_years(years.negate_exact()?)
    }

    /// The date of a weekday within this week.
    ///
    /// # Errors
    ///
    /// [`Error::DateTime`] if the date is outside the range of
    /// [`jiff::civil::Date`].
    pub fn at_day(&self, weekday: Weekday) -> Result<Date> {
        let year = i16::try_from(self.year)
            .map_err(|_| Error::date_time(format!("Year {} is out of range for a date", self.year)))?;
        // 1..=53 always fits
        #[allow(clippy::cast_possible_truncation)]
        let week = self.week as i8;
        Ok(ISOWeekDate::new(year, week, weekday)?.date())
    }

    /// Days since 1970-01-01 of the Monday of this week, for weeks beyond
    /// the range of [`Date`].
    fn monday(&self) -> i64 {
        week_one_monday(i64::from(self.year)) + i64::from(self.week - 1) * 7
    }

    fn from_monday(monday: i64) -> Result<Self> {
        let thursday = monday + 3;
        let year = year_from_days(thursday);
        // 1..=53
        #[allow(clippy::cast_possible_truncation)]
        let week = ((thursday - week_one_monday(year)) / 7 + 1) as i32;
        Ok(Self {
            year: check_year(year)?,
            week,
        })
    }
}

/// Days since 1970-01-01 of the Monday of week 1.
fn week_one_monday(year: i64) -> i64 {
    let january_4th = days_from_civil(year, 1, 4);
    january_4th - weekday_from_days(january_4th)
}

/// Whether a week-based year has 53 weeks: it starts on a Thursday, or it is a
/// leap year starting on a Wednesday.
fn is_long_year(year: i32) -> bool {
    // December 28th always falls in the last week of its week-based year.
    match civil_year(i64::from(year)).and_then(|y| Date::new(y, 12, 28).ok()) {
        Some(december_28th) => december_28th.iso_week_date().week() == 53,
        None => is_long_year_direct(year),
    }
}

fn is_long_year_direct(year: i32) -> bool {
    let p = |y: i64| (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)).rem_euclid(7);
    let year = i64::from(year);
    p(year) == 4 || p(year - 1) == 3
}

impl FromStr for YearWeek {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// `2015-W01`, `+10000-W01`, `-0001-W01`.
impl fmt::Display for YearWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", DisplayYear(self.year), self.week)
    }
}

crate::serde_str::string_serde!(YearWeek);

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::calendar::{MAX_YEAR, MIN_YEAR};

    fn yw(year: i32, week: i32) -> YearWeek {
        YearWeek::of(year, week).unwrap()
    }

    #[test]
    fn detects_53_week_years() {
        let long = [1976, 1981, 1987, 1992, 1998, 2004, 2009, 2015, 2020, 2026, 2032];
        for year in 1975..=2035 {
            assert_eq!(
                yw(year, 1).is_53_week_year(),
                long.contains(&year),
                "{year}"
            );
        }
        assert_eq!(yw(2015, 1).length_of_year(), 53);
        assert_eq!(yw(2014, 1).length_of_year(), 52);

        assert_eq!(yw(9_998, 1).length_of_year(), 53);
        assert_eq!(yw(9_999, 1).length_of_year(), 52);
        assert_eq!(yw(10_000, 1).length_of_year(), 52);
        assert_eq!(yw(10_004, 1).length_of_year(), 53);
    }

    #[test]
    fn long_year_rule_matches_jiff() {
        for year in -9_999..=9_999 {
            assert_eq!(is_long_year(year), is_long_year_direct(year), "{year}");
        }
    }

    #[test]
    fn rolls_week_53_of_short_years() {
        assert_eq!(yw(2014, 53), yw(2015, 1));
        assert_eq!(yw(2015, 53).week(), 53);
        assert!(YearWeek::of(2015, 0).unwrap_err().is_date_time());
        assert!(YearWeek::of(2015, 54).unwrap_err().is_date_time());
        assert!(YearWeek::of(MAX_YEAR + 1, 1).is_err());
        assert!(YearWeek::of(MIN_YEAR, 1).is_ok());
    }

    #[test]
    fn agrees_with_jiff_on_dates() {
        #[rustfmt::skip]
        let cases = [
            (date(2014, 12, 29), (2015, 1)),
            (date(2015, 12, 31), (2015, 53)),
            (date(2016, 1, 3),   (2015, 53)),
            (date(2016, 1, 4),   (2016, 1)),
            (date(2024, 6, 15),  (2024, 24)),
        ];
        for (d, (year, week)) in cases {
            assert_eq!(YearWeek::from(d), yw(year, week), "{d}");
        }

        let mut d = date(2010, 1, 1);
        while d < date(2030, 1, 1) {
            let week = YearWeek::from(d);
            assert_eq!(week.at_day(d.weekday()).unwrap(), d);
            assert_eq!(YearWeek::from_monday(week.monday()).unwrap(), week, "{d}");
            d = d.tomorrow().unwrap();
        }
    }

    #[test]
    fn moves_by_weeks_and_years() {
        assert_eq!(yw(2015, 52).plus_weeks(1).unwrap(), yw(2015, 53));
        assert_eq!(yw(2015, 52).plus_weeks(2).unwrap(), yw(2016, 1));
        assert_eq!(yw(2016, 1).minus_weeks(1).unwrap(), yw(2015, 53));
        assert_eq!(yw(2015, 10).plus_weeks(-520).unwrap().plus_weeks(520).unwrap(), yw(2015, 10));
        assert_eq!(yw(2014, 10).plus_years(1).unwrap(), yw(2015, 10));
        assert_eq!(yw(2015, 53).plus_years(5).unwrap(), yw(2020, 53));
        assert!(yw(2015, 53).plus_years(1).unwrap_err().is_date_time());
        assert!(yw(2015, 53).with_year(2014).is_err());
        assert_eq!(yw(2015, 1).with_week(53).unwrap(), yw(2015, 53));
        assert!(yw(MAX_YEAR, 52).plus_weeks(60).is_err());
        assert_eq!(yw(9_999, 50).plus_weeks(4).unwrap(), yw(10_000, 2));
        assert_eq!(yw(10_000, 2).minus_weeks(4).unwrap(), yw(9_999, 50));
        assert!(yw(2015, 1).plus_weeks(i64::MAX).unwrap_err().is_arithmetic());
    }

    #[test]
    fn resolves_days_of_week() {
        assert_eq!(yw(2015, 1).at_day(Weekday::Monday).unwrap(), date(2014, 12, 29));
        assert_eq!(yw(2015, 53).at_day(Weekday::Sunday).unwrap(), date(2016, 1, 3));
        assert!(yw(10_000, 1).at_day(Weekday::Monday).is_err());
    }

    #[test]
    fn parses_and_formats() {
        #[rustfmt::skip]
        let cases = [
            ("2015-W01",    yw(2015, 1)),
            ("2015-W53",    yw(2015, 53)),
            ("+10000-W01",  yw(10_000, 1)),
            ("-0001-W10",   yw(-1, 10)),
            ("0000-W05",    yw(0, 5)),
        ];
        for (text, value) in cases {
            assert_eq!(YearWeek::parse(text).unwrap(), value, "Failed to parse: {text}");
            assert_eq!(value.to_string(), text);
        }
        assert_eq!(YearWeek::parse("2015-w02").unwrap(), yw(2015, 2));

        for text in ["2014-W53", "2015-W54", "2015-W00", "2015-W1", "15-W01", "+1000000000-W01"] {
            let err = YearWeek::parse(text).unwrap_err();
            assert!(err.is_parse(), "Parse {text} should fail: {err}");
        }
    }

    #[test]
    fn orders_by_year_then_week() {
        assert!(yw(2015, 53) < yw(2016, 1));
        assert!(yw(-1, 52) < yw(0, 1));
        assert!(yw(2016, 2) > yw(2016, 1));
    }
}
