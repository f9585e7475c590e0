//! Ingredient model
//!
//! An ingredient line as stored on a recipe: display name plus the raw
//! quantity and unit extracted for it.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::ConversionResult;
use crate::conversion::{
    convert_ingredient_with_locale, detect_category, parse_quantity, IngredientCategory, Locale,
};

/// Quantity as extracted from a recipe: a number or free-form text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl Quantity {
    /// Numeric value; text goes through the quantity parser
    pub fn value(&self) -> Option<f64> {
        match self {
            Quantity::Number(n) => Some(*n),
            Quantity::Text(s) => parse_quantity(s),
        }
    }

    /// Empty text, zero or NaN count as no quantity at all
    pub fn is_blank(&self) -> bool {
        match self {
            Quantity::Number(n) => *n == 0.0 || n.is_nan(),
            Quantity::Text(s) => s.is_empty(),
        }
    }
}

impl From<f64> for Quantity {
    fn from(n: f64) -> Self {
        Quantity::Number(n)
    }
}

impl From<&str> for Quantity {
    fn from(s: &str) -> Self {
        Quantity::Text(s.to_string())
    }
}

impl From<String> for Quantity {
    fn from(s: String) -> Self {
        Quantity::Text(s)
    }
}

/// An ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Ingredient {
    /// Display name, e.g. "farine" or "olive oil"
    pub name: String,
    /// Amount as a number or text ("2", "1/2", "2,5")
    #[serde(default)]
    pub quantity: Option<Quantity>,
    /// Unit as written ("g", "grammes", "ml", "pieces")
    #[serde(default)]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: Option<Quantity>, unit: Option<&str>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.map(str::to_string),
        }
    }

    pub fn category(&self) -> IngredientCategory {
        detect_category(&self.name)
    }

    /// Convert this ingredient's quantity to spoons
    pub fn convert(&self, locale: Locale) -> ConversionResult {
        convert_ingredient_with_locale(
            &self.name,
            self.quantity.as_ref(),
            self.unit.as_deref(),
            locale,
        )
    }

    pub fn to_display_string(&self, locale: Locale) -> String {
        self.convert(locale).to_string()
    }
}
