// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Values survive a JSON round trip as their text form.

#![cfg(feature = "serde")]

use jiff::SignedDuration;
use timex_core::{
    AmPm, Interval, Period, PeriodDuration, Quarter, Weeks, YearQuarter, YearWeek,
};

#[test]
fn writes_text_forms() {
    assert_eq!(serde_json::to_string(&Weeks::of(-3)).unwrap(), r#""P-3W""#);
    assert_eq!(
        serde_json::to_string(&PeriodDuration::of(Period::of_months(1), SignedDuration::from_secs(5)))
            .unwrap(),
        r#""P1MT5S""#
    );
    assert_eq!(serde_json::to_string(&Quarter::Q2).unwrap(), r#""Q2""#);
    assert_eq!(serde_json::to_string(&AmPm::Pm).unwrap(), r#""PM""#);
}

#[test]
fn reads_back_the_same_values() {
    let weeks: Vec<Weeks> = serde_json::from_str(r#"["P0W", "P1W", "P12W"]"#).unwrap();
    assert_eq!(weeks, vec![Weeks::ZERO, Weeks::ONE, Weeks::of(12)]);

    let week: YearWeek = serde_json::from_str(r#""2015-W53""#).unwrap();
    assert_eq!(week, YearWeek::of(2015, 53).unwrap());

    let quarter: YearQuarter = serde_json::from_str(r#""2024-Q3""#).unwrap();
    assert_eq!(quarter, YearQuarter::of(2024, Quarter::Q3).unwrap());

    let interval = Interval::parse("2024-01-01T00:00:00Z/P1D").unwrap();
    let json = serde_json::to_string(&interval).unwrap();
    assert_eq!(serde_json::from_str::<Interval>(&json).unwrap(), interval);
}

#[test]
fn rejects_invalid_text() {
    let err = serde_json::from_str::<Weeks>(r#""P1D""#).unwrap_err();
    assert!(err.to_string().contains("could not be parsed"), "{err}");
    assert!(serde_json::from_str::<Weeks>("12").is_err());
}
