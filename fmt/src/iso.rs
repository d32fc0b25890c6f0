// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::SignedDuration;
use timex_core::{Period, PeriodDuration};

/// Format a period and a duration as a single ISO-8601 amount.
///
/// A zero part is left out; when both are zero the result is `PT0S`.
#[must_use]
pub fn iso8601(period: &Period, duration: SignedDuration) -> String {
    PeriodDuration::of(*period, duration).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_period_and_duration() {
        #[rustfmt::skip]
        let cases = [
            (Period::of(1, 2, 3), SignedDuration::from_secs(3_661),  "P1Y2M3DT1H1M1S"),
            (Period::of_days(3),  SignedDuration::ZERO,              "P3D"),
            (Period::ZERO,        SignedDuration::from_millis(-1_500), "PT-1.5S"),
            (Period::ZERO,        SignedDuration::ZERO,              "PT0S"),
        ];
        for (period, duration, expected) in cases {
            assert_eq!(iso8601(&period, duration), expected);
        }
    }
}
