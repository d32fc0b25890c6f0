// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::SignedDuration;
use timex_core::{Period, PeriodDuration};
use timex_fmt::{
    WordLocale, iso8601, parse_unit_based_duration, word_based, word_based_duration,
};

#[test]
fn iso_form_matches_period_duration() {
    for text in ["P1Y2M3DT4H5M6.5S", "P2W", "PT-0.5S", "PT0S"] {
        let value = PeriodDuration::parse(text).unwrap();
        let formatted = iso8601(&value.period(), value.duration());
        assert_eq!(formatted, value.to_string());
        assert_eq!(PeriodDuration::parse(&formatted).unwrap(), value);
    }
}

#[test]
fn words_follow_unit_based_input() {
    let en = WordLocale::english();
    let duration = parse_unit_based_duration("1d 2h 3m 4.005s").unwrap();
    assert_eq!(
        word_based_duration(duration, &en),
        "26 hours, 3 minutes, 4 seconds and 5 milliseconds"
    );
}

#[test]
fn custom_locale_from_toml() {
    let locale: WordLocale = r#"
separator = " / "
last_separator = " + "

[day]
one = "jour"
other = "jours"

[hour]
one = "heure"
other = "heures"
"#
    .parse()
    .unwrap();

    let text = word_based(&Period::of_days(2), SignedDuration::from_secs(3_601), &locale);
    assert_eq!(text, "2 jours / 1 heure + 1 second");
}
