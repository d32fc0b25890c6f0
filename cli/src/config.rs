// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use timex_fmt::WordLocale;

/// The name of the application, used for the configuration directory.
pub const APP_NAME: &str = "timex";

const TIMEX_CONFIG_ENV: &str = "TIMEX_CONFIG";

/// Load the configuration from `--config`, then `$TIMEX_CONFIG`, then the
/// user configuration directory.
///
/// An explicitly given file must exist; a missing default file yields the
/// default configuration.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let env = std::env::var(TIMEX_CONFIG_ENV).ok();
    let Some((path, explicit)) = config_path(path, env) else {
        tracing::debug!("no configuration directory, using defaults");
        return Ok(Config::default());
    };

    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e).into())
}

/// Resolve the config file and whether it was given explicitly.
fn config_path(flag: Option<PathBuf>, env: Option<String>) -> Option<(PathBuf, bool)> {
    if let Some(path) = flag {
        Some((path, true))
    } else if let Some(path) = env.filter(|a| !a.is_empty()) {
        Some((PathBuf::from(path), true))
    } else {
        let dir = dirs::config_dir()?;
        Some((dir.join(APP_NAME).join("config.toml"), false))
    }
}

/// Configuration for the timex command-line interface.
///
/// ```toml
/// language = "de"
///
/// [words]
/// last_separator = " & "
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language of the built-in words, such as `en` or `fr`.
    pub language: Option<String>,

    /// Custom words, taking precedence over `language`. Missing keys fall
    /// back to English.
    pub words: Option<WordLocale>,
}

impl Config {
    /// The words to use for word-based output, `language` overriding the
    /// configured language.
    pub fn locale(&self, language: Option<&str>) -> Result<WordLocale, Box<dyn Error>> {
        if let Some(language) = language {
            return builtin(language);
        }

        match (&self.words, &self.language) {
            (Some(words), _) => Ok(words.clone()),
            (None, Some(language)) => builtin(language),
            (None, None) => Ok(WordLocale::english()),
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn builtin(language: &str) -> Result<WordLocale, Box<dyn Error>> {
    WordLocale::for_language(language)
        .ok_or_else(|| format!("No built-in words for language '{language}'").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cli_flag_overrides_env_var() {
        let (path, explicit) = config_path(
            Some(PathBuf::from("/tmp/flag.toml")),
            Some("/tmp/env.toml".to_string()),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.toml"));
        assert!(explicit);
    }

    #[test]
    fn env_var_overrides_default() {
        let (path, explicit) = config_path(None, Some("/tmp/env.toml".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/env.toml"));
        assert!(explicit);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        if let Some((path, explicit)) = config_path(None, Some(String::new())) {
            assert!(path.ends_with("timex/config.toml"));
            assert!(!explicit);
        }
    }

    #[test]
    fn reads_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
language = "fr"

[words]
separator = "; "
"#,
        )
        .unwrap();

        let config = parse_config(Some(path)).unwrap();
        assert_eq!(config.language.as_deref(), Some("fr"));
        assert_eq!(config.locale(None).unwrap().separator, "; ");
        assert_eq!(config.locale(Some("de")).unwrap().last_separator, " und ");
    }

    #[test]
    fn explicit_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");
        let err = parse_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn selects_locale() {
        let config: Config = r#"language = "es""#.parse().unwrap();
        assert_eq!(config.locale(None).unwrap().last_separator, " y ");
        assert_eq!(Config::default().locale(None).unwrap(), WordLocale::english());
        assert!(Config::default().locale(Some("xx")).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!("colour = true".parse::<Config>().is_err());
    }
}
