//! Unit types and normalization
//!
//! Canonical unit tokens, spelling-variant normalization, and the spoon
//! units produced by conversion.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Canonical Units
// ============================================================================

pub const GRAM: &str = "g";
pub const MILLILITER: &str = "ml";
pub const KILOGRAM: &str = "kg";
pub const LITER: &str = "l";

/// Grams per kilogram, milliliters per liter
pub const BASE_PER_THOUSAND: f64 = 1000.0;

/// Spelling groups, each collapsing to one canonical token.
///
/// Anchored on both ends so a canonical token always maps to itself.
static UNIT_GROUPS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"^(?:g|gr|grs|grams?|grammes?)$", GRAM),
        (r"^(?:ml|milliliters?|millilitres?)$", MILLILITER),
        (r"^(?:kg|kgs|kilos?|kilograms?|kilogrammes?)$", KILOGRAM),
        (r"^(?:l|liters?|litres?)$", LITER),
    ]
    .into_iter()
    .map(|(pattern, canonical)| {
        (
            Regex::new(pattern).expect("unit pattern is a valid regex"),
            canonical,
        )
    })
    .collect()
});

/// Normalize a unit string to its canonical token.
///
/// Lowercases and trims, then collapses known spellings ("gr", "grammes",
/// "millilitre", "kilos", "litres", ...) to `g`, `ml`, `kg` or `l`.
/// Unknown units come back lowercased and trimmed.
pub fn normalize_unit(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    UNIT_GROUPS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(lower)
}

/// Factor that brings a canonical unit to grams or milliliters.
///
/// Only weight and volume units with a spoon equivalent have one.
pub fn base_scale(canonical: &str) -> Option<f64> {
    match canonical {
        GRAM | MILLILITER => Some(1.0),
        KILOGRAM | LITER => Some(BASE_PER_THOUSAND),
        _ => None,
    }
}

// ============================================================================
// Spoon Units and Labels
// ============================================================================

/// Household spoon measure; only ever produced by conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpoonUnit {
    Tablespoon,
    Teaspoon,
}

impl SpoonUnit {
    /// Display label in the given locale
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SpoonUnit::Tablespoon, Locale::French) => "c. à soupe",
            (SpoonUnit::Teaspoon, Locale::French) => "c. à café",
            (SpoonUnit::Tablespoon, Locale::English) => "tbsp",
            (SpoonUnit::Teaspoon, Locale::English) => "tsp",
        }
    }
}

/// Language used for spoon labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::French => "fr",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{0}' (expected fr or en)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts language codes with an optional region ("fr", "fr-FR", "en_US")
    /// and the language names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let language = lower.split(['-', '_']).next().unwrap_or_default();

        match language {
            "fr" | "french" | "français" | "francais" => Ok(Locale::French),
            "en" | "english" => Ok(Locale::English),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
