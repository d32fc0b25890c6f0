// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::arg::CommonArgs;
use crate::cmd_between::CmdBetween;
use crate::cmd_normalize::CmdNormalize;
use crate::cmd_parse::CmdParse;
use crate::cmd_span::CmdSpan;
use crate::cmd_words::CmdWords;
use crate::config::{APP_NAME, Config, parse_config};

/// Run the timex command-line interface.
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = Cli::parse().and_then(Cli::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Parse, normalize and compare amounts and spans of time")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $TIMEX_CONFIG, then timex/config.toml in the user \
configuration directory.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(CommonArgs::verbose())
            .subcommand(CmdParse::command())
            .subcommand(CmdNormalize::command())
            .subcommand(CmdWords::command())
            .subcommand(CmdBetween::command())
            .subcommand(CmdSpan::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdParse::NAME, matches)) => Parse(CmdParse::from(matches)),
            Some((CmdNormalize::NAME, matches)) => Normalize(CmdNormalize::from(matches)),
            Some((CmdWords::NAME, matches)) => Words(CmdWords::from(matches)),
            Some((CmdBetween::NAME, matches)) => Between(CmdBetween::from(matches)),
            Some((CmdSpan::NAME, matches)) => Span(CmdSpan::from(matches)),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("A command is required".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Parse a value and print its canonical form
    Parse(CmdParse),

    /// Normalize a period and duration
    Normalize(CmdNormalize),

    /// Write an amount in words
    Words(CmdWords),

    /// Measure between two points
    Between(CmdBetween),

    /// Compare two spans
    Span(CmdSpan),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Parse(a)     => a.run(),
            Normalize(a) => a.run(),
            Span(a)      => a.run(),
            Words(a)     => a.run(&Self::config(config)?),
            Between(a)   => a.run(&Self::config(config)?),
        }
    }

    fn config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        parse_config(path)
    }
}
