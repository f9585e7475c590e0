//! Conversion result model
//!
//! Outcome of converting one ingredient quantity to spoons.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{Locale, SpoonMeasure};

/// Suffix appended to approximate display strings
pub const APPROX_SUFFIX: &str = " (approx.)";

/// Result of an ingredient conversion
///
/// When `is_converted` is false, `value` and `unit` echo the input (value 0
/// when the quantity was missing or unparseable). When true, `value` is a
/// whole number of spoons, `unit` is the spoon label and the result is
/// always approximate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: String,
    pub is_converted: bool,
    pub is_approximate: bool,
}

impl ConversionResult {
    /// Input passed through without conversion
    pub fn unconverted(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            is_converted: false,
            is_approximate: false,
        }
    }

    /// Spoon measure labelled in the given locale
    pub fn from_spoons(measure: SpoonMeasure, locale: Locale) -> Self {
        Self {
            value: f64::from(measure.count),
            unit: measure.unit.label(locale).to_string(),
            is_converted: true,
            is_approximate: true,
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_converted && self.value == 0.0 {
            return f.write_str(&self.unit);
        }

        write!(f, "{} {}", self.value, self.unit)?;
        if self.is_approximate {
            f.write_str(APPROX_SUFFIX)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::SpoonUnit;

    #[test]
    fn test_display_converted() {
        let result = ConversionResult::from_spoons(
            SpoonMeasure { count: 3, unit: SpoonUnit::Teaspoon },
            Locale::French,
        );
        assert_eq!(result.to_string(), "3 c. à café (approx.)");
    }

    #[test]
    fn test_display_any_approximate_has_suffix() {
        let result = ConversionResult {
            value: 1.5,
            unit: "tbsp".to_string(),
            is_converted: true,
            is_approximate: true,
        };
        assert!(result.to_string().ends_with(" (approx.)"));
    }

    #[test]
    fn test_display_unconverted() {
        assert_eq!(ConversionResult::unconverted(2.0, "pieces").to_string(), "2 pieces");
        assert_eq!(ConversionResult::unconverted(0.25, "cup").to_string(), "0.25 cup");
        assert_eq!(ConversionResult::unconverted(0.0, "pincée").to_string(), "pincée");
        assert_eq!(ConversionResult::unconverted(0.0, "").to_string(), "");
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(ConversionResult::unconverted(2.0, "pieces")).unwrap();
        assert_eq!(json["value"], 2.0);
        assert_eq!(json["unit"], "pieces");
        assert_eq!(json["is_converted"], false);
        assert_eq!(json["is_approximate"], false);
    }
}
