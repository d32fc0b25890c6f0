// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Display, fmt::Write};

use clap::{ArgMatches, Command, arg};
use timex_core::{Interval, LocalDateTimeRange};

use crate::arg::CommonArgs;

#[derive(Debug, Clone)]
pub struct CmdSpan {
    pub first: String,
    pub second: String,
    pub closed: bool,
}

impl CmdSpan {
    pub const NAME: &str = "span";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Compare two spans of time, like 2024-01-01T00:00:00Z/PT1H")
            .arg(CommonArgs::text("first", "The first span"))
            .arg(CommonArgs::text("second", "The second span"))
            .arg(arg!(--closed "Read the spans as closed ranges of local date-times"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            first: CommonArgs::get_text(matches, "first"),
            second: CommonArgs::get_text(matches, "second"),
            closed: matches.get_flag("closed"),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "comparing spans...");
        println!("{}", self.render()?);
        Ok(())
    }

    pub fn render(&self) -> Result<String, Box<dyn Error>> {
        if self.closed {
            let a = LocalDateTimeRange::parse(&self.first)?;
            let b = LocalDateTimeRange::parse(&self.second)?;
            Self::ranges(&a, &b)
        } else {
            let a = Interval::parse(&self.first)?;
            let b = Interval::parse(&self.second)?;
            Self::intervals(&a, &b)
        }
    }

    fn intervals(a: &Interval, b: &Interval) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        line(&mut out, "encloses", a.encloses(b))?;
        line(&mut out, "enclosed by", b.encloses(a))?;
        line(&mut out, "overlaps", a.overlaps(b))?;
        line(&mut out, "abuts", a.abuts(b))?;
        line(&mut out, "connected", a.is_connected(b))?;
        line(&mut out, "before", a.is_before_interval(b))?;
        line(&mut out, "after", a.is_after_interval(b))?;
        line(&mut out, "intersection", or_none(a.intersection(b).ok()))?;
        line(&mut out, "union", or_none(a.union(b).ok()))?;
        line(&mut out, "span", a.span(b))?;
        Ok(out.trim_end().to_owned())
    }

    fn ranges(a: &LocalDateTimeRange, b: &LocalDateTimeRange) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        line(&mut out, "encloses", a.encloses(b))?;
        line(&mut out, "enclosed by", b.encloses(a))?;
        line(&mut out, "intersects", a.intersects(b))?;
        line(&mut out, "abuts", a.abuts(b))?;
        line(&mut out, "before", a.is_before_range(b))?;
        line(&mut out, "after", a.is_after_range(b))?;
        line(&mut out, "intersection", or_none(a.intersection(b)))?;
        line(&mut out, "union", or_none(a.union(b).ok()))?;
        line(&mut out, "span", a.span(b))?;
        Ok(out.trim_end().to_owned())
    }
}

fn line(out: &mut String, label: &str, value: impl Display) -> std::fmt::Result {
    writeln!(out, "{label:<12} {value}")
}

fn or_none(value: Option<impl Display>) -> String {
    value.map_or_else(|| "-".to_owned(), |a| a.to_string())
}
