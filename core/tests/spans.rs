// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Half-open intervals against closed ranges.

use jiff::Timestamp;
use jiff::civil::{DateTime, date};
use timex_core::{Interval, LocalDateTimeRange, YearWeek};

fn instant(seconds: i64) -> Timestamp {
    Timestamp::from_second(1_700_000_000 + seconds).unwrap()
}

fn civil(hour: i8) -> DateTime {
    date(2024, 3, 10).at(hour, 0, 0, 0)
}

#[test]
fn empty_interval_contains_nothing() {
    for t in [-1, 0, 1, 3_600] {
        let empty = Interval::of(instant(t), instant(t)).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.contains(instant(t)));
        assert!(!empty.contains(instant(t + 1)));
    }
}

#[test]
fn interval_contains_start_but_not_end() {
    let (a, b) = (instant(0), instant(60));
    let interval = Interval::of(a, b).unwrap();
    assert!(interval.contains(a));
    assert!(interval.contains(instant(59)));
    assert!(!interval.contains(b));
}

#[test]
fn adjacent_intervals_abut() {
    let points = [0, 10, 10, 20, 35];
    for window in points.windows(3) {
        let [a, b, c] = window else { unreachable!() };
        let first = Interval::of(instant(*a), instant(*b)).unwrap();
        let second = Interval::of(instant(*b), instant(*c)).unwrap();
        if a == b && b == c {
            continue;
        }
        assert!(first.abuts(&second), "{first} abuts {second}");
        assert!(!first.overlaps(&second) || first.is_empty() || second.is_empty());
    }
}

#[test]
fn closed_range_keeps_its_end() {
    let (a, b, c) = (civil(1), civil(2), civil(3));
    let range = LocalDateTimeRange::of(a, b).unwrap();
    assert!(range.contains(b));
    assert!(!range.is_before(b));
    assert!(range.is_before(c));
    assert!(!range.is_after(a));

    let intersection = range
        .intersection(&LocalDateTimeRange::of(b, c).unwrap())
        .unwrap();
    assert_eq!(intersection, LocalDateTimeRange::of(b, b).unwrap());
    assert!(intersection.contains(b));

    // the same endpoints as a half-open interval share nothing
    let utc = |dt: DateTime| dt.to_zoned(jiff::tz::TimeZone::UTC).unwrap().timestamp();
    let first = Interval::of(utc(a), utc(b)).unwrap();
    let second = Interval::of(utc(b), utc(c)).unwrap();
    assert!(!first.overlaps(&second));
    assert_eq!(first.intersection(&second).unwrap().to_duration().as_secs(), 0);
}

#[test]
fn parses_spans_with_relative_sides() {
    let interval: Interval = "2024-03-10T00:00:00Z/PT1H30M".parse().unwrap();
    assert_eq!(interval.to_duration().as_mins(), 90);

    let range: LocalDateTimeRange = "P1D/2024-03-10T03:00".parse().unwrap();
    assert_eq!(range.start(), date(2024, 3, 9).at(3, 0, 0, 0));
    assert_eq!(range.end(), civil(3));
}

#[test]
fn applies_calendar_amounts_in_the_written_offset() {
    let ts = |text: &str| text.parse::<Timestamp>().unwrap();

    // 2024-03-01T00:30+01:00 minus one month is 2024-02-01T00:30+01:00
    let before: Interval = "P1M/2024-03-01T00:30:00+01:00".parse().unwrap();
    assert_eq!(before.start(), ts("2024-01-31T23:30:00Z"));
    assert_eq!(before.end(), ts("2024-02-29T23:30:00Z"));

    // 2024-01-31T00:30+01:00 plus one month clamps to 2024-02-29T00:30+01:00
    let after: Interval = "2024-01-31T00:30:00+01:00/P1M".parse().unwrap();
    assert_eq!(after.end(), ts("2024-02-28T23:30:00Z"));

    let days: Interval = "2024-03-31T23:00:00-02:00/P1D".parse().unwrap();
    assert_eq!(days.end(), ts("2024-04-02T01:00:00Z"));
}

#[test]
fn year_week_rolls_over_short_years() {
    assert_eq!(YearWeek::of(2014, 53).unwrap(), YearWeek::of(2015, 1).unwrap());
    assert_eq!(YearWeek::of(2015, 53).unwrap().to_string(), "2015-W53");
    assert!(YearWeek::of(2015, 54).unwrap_err().is_date_time());
}
