// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Words used by the word-based formats.
//!
//! A [`WordLocale`] is a plain mapping that can be written in TOML:
//!
//! ```toml
//! separator = ", "
//! last_separator = " und "
//!
//! [year]
//! one = "Jahr"
//! other = "Jahre"
//! ```
//!
//! Missing keys fall back to English.

use std::str::FromStr;

use crate::error::FormatError;

/// The singular and plural word for one unit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnitWords {
    /// Used when the value is 1 or -1
    pub one: String,
    /// Used for every other value, zero included
    pub other: String,
}

impl UnitWords {
    fn new(one: &str, other: &str) -> Self {
        Self {
            one: one.to_owned(),
            other: other.to_owned(),
        }
    }

    /// The word to use after `value`.
    #[must_use]
    pub fn select(&self, value: i64) -> &str {
        if value.unsigned_abs() == 1 {
            &self.one
        } else {
            &self.other
        }
    }
}

/// Words and separators for one language.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WordLocale {
    /// Placed between all but the last two units
    pub separator: String,
    /// Placed between the last two units
    pub last_separator: String,
    /// Years
    pub year: UnitWords,
    /// Months
    pub month: UnitWords,
    /// Weeks
    pub week: UnitWords,
    /// Days
    pub day: UnitWords,
    /// Hours
    pub hour: UnitWords,
    /// Minutes
    pub minute: UnitWords,
    /// Seconds
    pub second: UnitWords,
    /// Milliseconds
    pub millisecond: UnitWords,
}

impl WordLocale {
    /// The built-in English words.
    #[must_use]
    pub fn english() -> Self {
        Self::builtin(", ", " and ", [
            ("year", "years"),
            ("month", "months"),
            ("week", "weeks"),
            ("day", "days"),
            ("hour", "hours"),
            ("minute", "minutes"),
            ("second", "seconds"),
            ("millisecond", "milliseconds"),
        ])
    }

    /// The built-in words for a language tag such as `de` or `fr-CA`; only the
    /// primary language subtag is considered.
    #[must_use]
    pub fn for_language(tag: &str) -> Option<Self> {
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        let locale = match language.to_ascii_lowercase().as_str() {
            "en" => Self::english(),
            "de" => Self::builtin(", ", " und ", [
                ("Jahr", "Jahre"),
                ("Monat", "Monate"),
                ("Woche", "Wochen"),
                ("Tag", "Tage"),
                ("Stunde", "Stunden"),
                ("Minute", "Minuten"),
                ("Sekunde", "Sekunden"),
                ("Millisekunde", "Millisekunden"),
            ]),
            "es" => Self::builtin(", ", " y ", [
                ("año", "años"),
                ("mes", "meses"),
                ("semana", "semanas"),
                ("día", "días"),
                ("hora", "horas"),
                ("minuto", "minutos"),
                ("segundo", "segundos"),
                ("milisegundo", "milisegundos"),
            ]),
            "fr" => Self::builtin(", ", " et ", [
                ("an", "ans"),
                ("mois", "mois"),
                ("semaine", "semaines"),
                ("jour", "jours"),
                ("heure", "heures"),
                ("minute", "minutes"),
                ("seconde", "secondes"),
                ("milliseconde", "millisecondes"),
            ]),
            _ => return None,
        };
        Some(locale)
    }

    /// Load a mapping from TOML text; missing keys fall back to English.
    ///
    /// # Errors
    ///
    /// [`FormatError::Locale`] if the text is not a valid mapping.
    pub fn from_toml_str(text: &str) -> Result<Self, FormatError> {
        let locale = toml::from_str(text)?;
        tracing::debug!(?locale, "loaded word locale");
        Ok(locale)
    }

    /// Words for years, months, weeks, days, hours, minutes, seconds and
    /// milliseconds, in that order.
    pub(crate) fn units(&self) -> [&UnitWords; 8] {
        [
            &self.year,
            &self.month,
            &self.week,
            &self.day,
            &self.hour,
            &self.minute,
            &self.second,
            &self.millisecond,
        ]
    }

    fn builtin(separator: &str, last_separator: &str, words: [(&str, &str); 8]) -> Self {
        let [year, month, week, day, hour, minute, second, millisecond] =
            words.map(|(one, other)| UnitWords::new(one, other));
        Self {
            separator: separator.to_owned(),
            last_separator: last_separator.to_owned(),
            year,
            month,
            week,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }
}

impl Default for WordLocale {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for WordLocale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_singular_for_one() {
        let words = WordLocale::english().day;
        assert_eq!(words.select(1), "day");
        assert_eq!(words.select(-1), "day");
        assert_eq!(words.select(0), "days");
        assert_eq!(words.select(2), "days");
    }

    #[test]
    fn finds_builtin_languages() {
        assert_eq!(WordLocale::for_language("en-GB"), Some(WordLocale::english()));
        assert_eq!(WordLocale::for_language("DE").unwrap().last_separator, " und ");
        assert_eq!(WordLocale::for_language("fr_CA").unwrap().year.other, "ans");
        assert_eq!(WordLocale::for_language("xx"), None);
    }

    #[test]
    fn loads_partial_mapping() {
        let locale = WordLocale::from_toml_str(
            r#"
last_separator = " & "

[week]
one = "wk"
other = "wks"
"#,
        )
        .unwrap();
        assert_eq!(locale.separator, ", ");
        assert_eq!(locale.last_separator, " & ");
        assert_eq!(locale.week, UnitWords::new("wk", "wks"));
        assert_eq!(locale.day, WordLocale::english().day);
    }

    #[test]
    fn rejects_invalid_mapping() {
        let err = "[year]\none = 1".parse::<WordLocale>().unwrap_err();
        assert!(matches!(err, FormatError::Locale { .. }), "{err}");
    }
}
