// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Write, str::FromStr};

use clap::{ArgMatches, Command};
use jiff::civil::{Date, DateTime, Time};
use timex_core::PeriodDuration;
use timex_fmt::{WordLocale, word_based};

use crate::arg::CommonArgs;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdBetween {
    pub start: String,
    pub end: String,
    pub verbose: bool,
}

impl CmdBetween {
    pub const NAME: &str = "between";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Measure the period and duration between two dates, times or date-times")
            .arg(CommonArgs::text("start", "The start, like 2024-01-31, 10:30 or 2024-01-31T10:30"))
            .arg(CommonArgs::text("end", "The end, in any of the start's forms"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            start: CommonArgs::get_text(matches, "start"),
            end: CommonArgs::get_text(matches, "end"),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "measuring between two points...");
        let locale = config.locale(None)?;
        println!("{}", self.render(&locale)?);
        Ok(())
    }

    #[rustfmt::skip]
    pub fn render(&self, locale: &WordLocale) -> Result<String, Box<dyn Error>> {
        use Point::{Date as D, DateTime as DT, Time as T};

        let start: Point = self.start.parse()?;
        let end: Point = self.end.parse()?;
        let value = match (start, end) {
            (D(s),  D(e))  => PeriodDuration::between(&s, &e),
            (D(s),  T(e))  => PeriodDuration::between(&s, &e),
            (D(s),  DT(e)) => PeriodDuration::between(&s, &e),
            (T(s),  D(e))  => PeriodDuration::between(&s, &e),
            (T(s),  T(e))  => PeriodDuration::between(&s, &e),
            (T(s),  DT(e)) => PeriodDuration::between(&s, &e),
            (DT(s), D(e))  => PeriodDuration::between(&s, &e),
            (DT(s), T(e))  => PeriodDuration::between(&s, &e),
            (DT(s), DT(e)) => PeriodDuration::between(&s, &e),
        }?;

        let mut out = value.to_string();
        if self.verbose {
            write!(out, "\n  {}", word_based(&value.period(), value.duration(), locale))?;
        }
        Ok(out)
    }
}

/// A civil date, time of day, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Point {
    Date(Date),
    Time(Time),
    DateTime(DateTime),
}

impl FromStr for Point {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let point = if s.contains(['T', 't', ' ']) {
            Point::DateTime(s.parse()?)
        } else if s.contains(':') {
            Point::Time(s.parse()?)
        } else {
            Point::Date(s.parse()?)
        };
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(start: &str, end: &str) -> String {
        let cmd = CmdBetween {
            start: start.to_string(),
            end: end.to_string(),
            verbose: false,
        };
        cmd.render(&WordLocale::english()).unwrap()
    }

    #[test]
    fn parses_points() {
        assert!(matches!("2024-01-31".parse::<Point>().unwrap(), Point::Date(_)));
        assert!(matches!("10:30".parse::<Point>().unwrap(), Point::Time(_)));
        assert!(matches!("2024-01-31T10:30".parse::<Point>().unwrap(), Point::DateTime(_)));
        assert!("yesterday".parse::<Point>().is_err());
    }

    #[test]
    fn measures_between_points() {
        #[rustfmt::skip]
        let cases = [
            ("2024-01-15",       "2024-03-16",       "P2M1D"),
            ("2024-03-15",       "2024-01-15",       "P-2M"),
            ("10:00",            "11:30",            "PT1H30M"),
            ("2024-01-01T10:00", "2024-01-02T09:00", "P1DT-1H"),
            ("2024-01-01",       "2024-01-01T06:00", "PT6H"),
            ("06:00",            "2024-01-01",       "PT-6H"),
        ];
        for (start, end, expected) in cases {
            assert_eq!(render(start, end), expected, "{start} {end}");
        }
    }

    #[test]
    fn verbose_adds_words() {
        let cmd = CmdBetween {
            start: "2024-01-01".to_string(),
            end: "2024-01-15".to_string(),
            verbose: true,
        };
        assert_eq!(cmd.render(&WordLocale::english()).unwrap(), "P14D\n  2 weeks");
    }
}
