// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Write};

use clap::{ArgMatches, Command};
use timex_core::PeriodDuration;

use crate::arg::CommonArgs;

#[derive(Debug, Clone)]
pub struct CmdNormalize {
    pub text: String,
    pub verbose: bool,
}

impl CmdNormalize {
    pub const NAME: &str = "normalize";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Fold 24-hour days into days and months into years")
            .arg(CommonArgs::text("text", "An ISO-8601 period and duration, like P1Y14MT25H"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            text: CommonArgs::get_text(matches, "text"),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "normalizing amount...");
        println!("{}", self.render()?);
        Ok(())
    }

    pub fn render(&self) -> Result<String, Box<dyn Error>> {
        let value = PeriodDuration::parse(&self.text)?;
        let days = value.normalized_standard_days()?;
        let years = days.normalized_years()?;

        let mut out = years.to_string();
        if self.verbose {
            write!(out, "\n  parsed: {value}")?;
            write!(out, "\n  standard days: {days}")?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        let cmd = CmdNormalize {
            text: text.to_string(),
            verbose: false,
        };
        cmd.render().unwrap()
    }

    #[test]
    fn normalizes_days_and_years() {
        #[rustfmt::skip]
        let cases = [
            ("P1Y14MT25H",   "P2Y2M1DT1H"),
            ("P1DT-1H",      "PT23H"),
            ("PT48H",        "P2D"),
            ("P-1Y2M",       "P-10M"),
            ("PT0S",         "PT0S"),
        ];
        for (text, expected) in cases {
            assert_eq!(render(text), expected, "{text}");
        }
    }

    #[test]
    fn verbose_shows_steps() {
        let cmd = CmdNormalize {
            text: "P14MT25H".to_string(),
            verbose: true,
        };
        assert_eq!(
            cmd.render().unwrap(),
            "P1Y2M1DT1H\n  parsed: P14MT25H\n  standard days: P14M1DT1H"
        );
    }
}
