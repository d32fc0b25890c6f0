// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while formatting or reading formatted amounts.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A locale mapping could not be loaded.
    #[error("Invalid word locale: {message}")]
    Locale {
        /// What was wrong with the mapping
        message: String,
    },

    /// A unit-based duration could not be parsed.
    #[error("Text '{text}' could not be parsed at index {index}: {message}")]
    Parse {
        /// The complete input text
        text: String,
        /// Character index of the failure
        index: usize,
        /// What went wrong
        message: String,
    },

    /// The value does not fit the target type.
    #[error(transparent)]
    Core(#[from] timex_core::Error),
}

impl FormatError {
    pub(crate) fn parse(text: &str, index: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            text: text.to_owned(),
            index,
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for FormatError {
    fn from(e: toml::de::Error) -> Self {
        Self::Locale {
            message: e.to_string(),
        }
    }
}
