// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by every value type in this crate.

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures of the checked integer primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The mathematical result does not fit the target integer type.
    #[error("integer overflow")]
    Overflow,

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors produced by amount, period, interval and calendar operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Well-formed input that is semantically invalid: unit mismatch, start
    /// after end, out-of-range calendar field, unsupported unit.
    #[error("{message}")]
    DateTime {
        /// Human readable description
        message: String,
    },

    /// A checked arithmetic primitive overflowed or divided by zero.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Grammar violation while parsing text.
    #[error("Text '{text}' could not be parsed at index {index}: {message}")]
    Parse {
        /// The complete input text
        text: String,
        /// Character index of the failure
        index: usize,
        /// What went wrong
        message: String,
        /// Arithmetic failure that occurred while parsing, if any
        #[source]
        cause: Option<ArithmeticError>,
    },
}

impl Error {
    pub(crate) fn date_time(message: impl Into<String>) -> Self {
        Self::DateTime {
            message: message.into(),
        }
    }

    pub(crate) fn parse(text: &str, index: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            text: text.to_owned(),
            index,
            message: message.into(),
            cause: None,
        }
    }

    /// Re-report an error raised while parsing `text` as a parse error,
    /// keeping arithmetic failures as the cause.
    pub(crate) fn into_parse(self, text: &str, message: impl Into<String>) -> Self {
        match self {
            Self::Parse { .. } => self,
            Self::Arithmetic(cause) => Self::Parse {
                text: text.to_owned(),
                index: 0,
                message: message.into(),
                cause: Some(cause),
            },
            Self::DateTime { message: reason } => Self::Parse {
                text: text.to_owned(),
                index: 0,
                message: format!("{}: {reason}", message.into()),
                cause: None,
            },
        }
    }

    /// Whether this is an [`Error::Arithmetic`] failure.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Arithmetic(_))
    }

    /// Whether this is an [`Error::Parse`] failure.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Whether this is an [`Error::DateTime`] failure.
    #[must_use]
    pub const fn is_date_time(&self) -> bool {
        matches!(self, Self::DateTime { .. })
    }
}

impl From<jiff::Error> for Error {
    fn from(e: jiff::Error) -> Self {
        Self::date_time(e.to_string())
    }
}
