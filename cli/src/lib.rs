// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for timex.

mod arg;
mod cli;
mod cmd_between;
mod cmd_normalize;
mod cmd_parse;
mod cmd_span;
mod cmd_words;
mod config;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_between::CmdBetween;
pub use crate::cmd_normalize::CmdNormalize;
pub use crate::cmd_parse::{CmdParse, Kind};
pub use crate::cmd_span::CmdSpan;
pub use crate::cmd_words::CmdWords;
pub use crate::config::{APP_NAME, Config, parse_config};
