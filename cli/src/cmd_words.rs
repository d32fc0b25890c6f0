// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use jiff::SignedDuration;
use timex_core::{Period, PeriodDuration};
use timex_fmt::{
    WordLocale, parse_unit_based_duration, word_based, word_based_duration, word_based_period,
};

use crate::arg::CommonArgs;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdWords {
    pub text: String,
    pub language: Option<String>,
}

impl CmdWords {
    pub const NAME: &str = "words";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Write an amount of time in words")
            .arg(CommonArgs::text(
                "text",
                "An ISO-8601 amount like P1Y2M3D, or a duration like 1h 30m",
            ))
            .arg(CommonArgs::language())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            text: CommonArgs::get_text(matches, "text"),
            language: CommonArgs::get_language(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "writing amount in words...");
        let locale = config.locale(self.language.as_deref())?;
        println!("{}", self.render(&locale)?);
        Ok(())
    }

    pub fn render(&self, locale: &WordLocale) -> Result<String, Box<dyn Error>> {
        let (period, duration) = self.amount()?;
        let text = match (period.is_zero(), duration.is_zero()) {
            (true, _) => word_based_duration(duration, locale),
            (false, true) => word_based_period(&period, locale),
            (false, false) => word_based(&period, duration, locale),
        };
        Ok(text)
    }

    /// The text as an ISO-8601 amount, or else as a unit-based duration.
    fn amount(&self) -> Result<(Period, SignedDuration), Box<dyn Error>> {
        match PeriodDuration::parse(&self.text) {
            Ok(value) => Ok((value.period(), value.duration())),
            Err(iso) => match parse_unit_based_duration(&self.text) {
                Ok(duration) => Ok((Period::ZERO, duration)),
                Err(e) => {
                    tracing::debug!(%e, "not a unit-based duration either");
                    Err(iso.into())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        let cmd = CmdWords {
            text: text.to_string(),
            language: None,
        };
        cmd.render(&WordLocale::english()).unwrap()
    }

    #[test]
    fn test_parse_words() {
        let cmd = Command::new("test").subcommand(CmdWords::command());
        let matches = cmd
            .try_get_matches_from(["test", "words", "P1D", "--language", "de"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdWords::NAME).unwrap();
        let parsed = CmdWords::from(sub_matches);
        assert_eq!(parsed.text, "P1D");
        assert_eq!(parsed.language.as_deref(), Some("de"));
    }

    #[test]
    fn writes_words() {
        #[rustfmt::skip]
        let cases = [
            ("P1Y2M3D",     "1 year, 2 months and 3 days"),
            ("P14D",        "2 weeks"),
            ("PT1H30M",     "1 hour and 30 minutes"),
            ("P1DT12H",     "1 day and 12 hours"),
            ("1h 30m",      "1 hour and 30 minutes"),
            ("PT0S",        "0 milliseconds"),
        ];
        for (text, expected) in cases {
            assert_eq!(render(text), expected, "{text}");
        }
    }

    #[test]
    fn reports_iso_error() {
        let cmd = CmdWords {
            text: "P1X".to_string(),
            language: None,
        };
        let err = cmd.render(&WordLocale::english()).unwrap_err();
        assert!(err.to_string().contains("'P1X'"), "{err}");
    }
}
