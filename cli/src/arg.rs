// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information").global(true)
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches
            .try_get_one::<bool>("verbose")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    pub fn language() -> Arg {
        arg!(-l --language [LANG] "Language of the words, overriding the configuration")
    }

    pub fn get_language(matches: &ArgMatches) -> Option<String> {
        matches
            .try_get_one::<String>("language")
            .ok()
            .flatten()
            .cloned()
    }

    /// A positional text argument that may start with a sign, like `-P1D`.
    pub fn text(id: &'static str, help: &'static str) -> Arg {
        Arg::new(id)
            .help(help)
            .required(true)
            .allow_hyphen_values(true)
    }

    pub fn get_text(matches: &ArgMatches, id: &str) -> String {
        matches.get_one::<String>(id).cloned().unwrap_or_default()
    }
}
