//! Runtime configuration
//!
//! Read once from the environment at startup.

use thiserror::Error;

use crate::conversion::{Locale, UnknownLocale};

/// Environment variable selecting the spoon label language
pub const LOCALE_ENV: &str = "SPOONCONV_LOCALE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {source}")]
    InvalidLocale {
        var: &'static str,
        #[source]
        source: UnknownLocale,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Default label language for conversions that don't ask for one
    pub locale: Locale,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = match lookup(LOCALE_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidLocale {
                var: LOCALE_ENV,
                source,
            })?,
            None => Locale::default(),
        };

        Ok(Self { locale })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.locale, Locale::French);

        let config = Config::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.locale, Locale::French);
    }

    #[test]
    fn test_locale_from_env() {
        let config = Config::from_lookup(|key| {
            (key == LOCALE_ENV).then(|| "en-GB".to_string())
        })
        .unwrap();
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn test_invalid_locale() {
        let err = Config::from_lookup(|_| Some("klingon".to_string())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid SPOONCONV_LOCALE: unknown locale 'klingon' (expected fr or en)"
        );
    }
}
