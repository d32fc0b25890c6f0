// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Display, fmt::Write};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use jiff::SignedDuration;
use jiff::civil::Weekday;
use timex_core::{
    Days, Hours, Interval, LocalDateTimeRange, Minutes, Months, Period, PeriodDuration, Seconds,
    TemporalAmount, Weeks, YearQuarter, YearWeek, Years,
};
use timex_fmt::{iso8601, parse_unit_based_duration};

use crate::arg::CommonArgs;

#[derive(Debug, Clone)]
pub struct CmdParse {
    pub kind: Kind,
    pub text: String,
    pub verbose: bool,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Parse a value and print its canonical form")
            .arg(arg!(kind: <KIND> "The kind of value").value_parser(value_parser!(Kind)))
            .arg(CommonArgs::text("text", "The text to parse"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            kind: matches.get_one::<Kind>("kind").copied().unwrap_or(Kind::PeriodDuration),
            text: CommonArgs::get_text(matches, "text"),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing value...");
        println!("{}", self.render()?);
        Ok(())
    }

    #[rustfmt::skip]
    pub fn render(&self) -> Result<String, Box<dyn Error>> {
        let text = self.text.as_str();
        match self.kind {
            Kind::Years          => self.amount(&Years::parse(text)?),
            Kind::Months         => self.amount(&Months::parse(text)?),
            Kind::Weeks          => self.amount(&Weeks::parse(text)?),
            Kind::Days           => self.amount(&Days::parse(text)?),
            Kind::Hours          => self.amount(&Hours::parse(text)?),
            Kind::Minutes        => self.amount(&Minutes::parse(text)?),
            Kind::Seconds        => self.amount(&Seconds::parse(text)?),
            Kind::Period         => self.amount(&Period::parse(text)?),
            Kind::PeriodDuration => self.amount(&PeriodDuration::parse(text)?),
            Kind::Duration       => self.duration(parse_unit_based_duration(text)?),
            Kind::Interval       => self.interval(Interval::parse(text)?),
            Kind::Range          => self.range(LocalDateTimeRange::parse(text)?),
            Kind::YearWeek       => self.year_week(YearWeek::parse(text)?),
            Kind::YearQuarter    => self.year_quarter(YearQuarter::parse(text)?),
        }
    }

    fn amount<A: TemporalAmount + Display>(&self, value: &A) -> Result<String, Box<dyn Error>> {
        self.units(value, value.to_string())
    }

    fn duration(&self, value: SignedDuration) -> Result<String, Box<dyn Error>> {
        self.units(&value, iso8601(&Period::ZERO, value))
    }

    fn units(&self, value: &dyn TemporalAmount, mut out: String) -> Result<String, Box<dyn Error>> {
        if self.verbose {
            for &unit in value.units() {
                write!(out, "\n  {unit}: {}", value.get(unit)?)?;
            }
        }
        Ok(out)
    }

    fn interval(&self, value: Interval) -> Result<String, Box<dyn Error>> {
        let mut out = value.to_string();
        if self.verbose {
            write!(out, "\n  duration: {}", iso8601(&Period::ZERO, value.to_duration()))?;
            write!(out, "\n  unbounded start: {}", value.is_unbounded_start())?;
            write!(out, "\n  unbounded end: {}", value.is_unbounded_end())?;
        }
        Ok(out)
    }

    fn range(&self, value: LocalDateTimeRange) -> Result<String, Box<dyn Error>> {
        let mut out = value.to_string();
        if self.verbose {
            write!(out, "\n  duration: {}", iso8601(&Period::ZERO, value.to_duration()))?;
        }
        Ok(out)
    }

    fn year_week(&self, value: YearWeek) -> Result<String, Box<dyn Error>> {
        let mut out = value.to_string();
        if self.verbose {
            write!(out, "\n  weeks in year: {}", value.length_of_year())?;
            write!(out, "\n  monday: {}", value.at_day(Weekday::Monday)?)?;
            write!(out, "\n  sunday: {}", value.at_day(Weekday::Sunday)?)?;
        }
        Ok(out)
    }

    fn year_quarter(&self, value: YearQuarter) -> Result<String, Box<dyn Error>> {
        let mut out = value.to_string();
        if self.verbose {
            write!(out, "\n  days in quarter: {}", value.length_of_quarter())?;
            write!(out, "\n  first day: {}", value.at_day(1)?)?;
            write!(out, "\n  last day: {}", value.at_end_of_quarter()?)?;
        }
        Ok(out)
    }
}

/// The kinds of value the `parse` command understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Period,
    PeriodDuration,
    /// Unit-based duration such as `1h 30m`
    Duration,
    Interval,
    Range,
    YearWeek,
    YearQuarter,
}
