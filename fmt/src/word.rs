// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Word-based formats such as `1 year, 2 months and 3 days`.

use jiff::SignedDuration;
use timex_core::Period;

use crate::locale::{UnitWords, WordLocale};

/// Format a period in words: years, months, then weeks when the days are a
/// whole number of weeks, days otherwise.
///
/// Months are folded into years when the two have opposite signs. A zero
/// period renders as `0 days`.
#[must_use]
pub fn word_based_period(period: &Period, locale: &WordLocale) -> String {
    let [year, month, week, day, ..] = locale.units();
    let units = [year, month, week, day];
    format_values(&period_values(period).into_iter().zip(units).collect::<Vec<_>>(), locale)
}

/// Format a duration in words: hours, minutes, seconds and milliseconds.
/// Smaller units are dropped; zero renders as `0 milliseconds`.
#[must_use]
pub fn word_based_duration(duration: SignedDuration, locale: &WordLocale) -> String {
    let [.., hour, minute, second, millisecond] = locale.units();
    let units = [hour, minute, second, millisecond];
    format_values(&duration_values(duration).into_iter().zip(units).collect::<Vec<_>>(), locale)
}

/// Format a period followed by a duration in words.
#[must_use]
pub fn word_based(period: &Period, duration: SignedDuration, locale: &WordLocale) -> String {
    let values = period_values(period)
        .into_iter()
        .chain(duration_values(duration));
    format_values(&values.zip(locale.units()).collect::<Vec<_>>(), locale)
}

/// Years, months, weeks, days.
fn period_values(period: &Period) -> [i64; 4] {
    let (mut years, mut months) = (i64::from(period.years()), i64::from(period.months()));
    if (years < 0 && months > 0) || (years > 0 && months < 0) {
        let total = years * 12 + months;
        years = total / 12;
        months = total % 12;
    }
    let days = i64::from(period.days());
    if days % 7 == 0 {
        [years, months, days / 7, 0]
    } else {
        [years, months, 0, days]
    }
}

/// Hours, minutes, seconds, milliseconds.
fn duration_values(duration: SignedDuration) -> [i64; 4] {
    let seconds = duration.as_secs();
    [
        seconds / 3_600,
        seconds / 60 % 60,
        seconds % 60,
        i64::from(duration.subsec_millis()),
    ]
}

/// Join the non-zero values with the locale's separators. When every value
/// is zero, the last unit is written with `0`.
fn format_values(values: &[(i64, &UnitWords)], locale: &WordLocale) -> String {
    let non_zero = values.iter().filter(|(value, _)| *value != 0).count();
    let mut buf = String::with_capacity(32);
    let mut count = 0;
    for (i, (value, words)) in values.iter().enumerate() {
        if *value == 0 && !(count == 0 && i + 1 == values.len()) {
            continue;
        }

        buf.push_str(&format!("{value} {}", words.select(*value)));
        if count + 2 < non_zero {
            buf.push_str(&locale.separator);
        } else if count + 2 == non_zero {
            buf.push_str(&locale.last_separator);
        }
        count += 1;
    }
    buf
}
