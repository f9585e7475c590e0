//! Conversion MCP Tools
//!
//! Tools for classifying ingredients and converting their quantities to spoons.

use serde::Serialize;

use crate::conversion::{
    can_convert_ingredient, detect_category, normalize_unit, parse_quantity, IngredientCategory,
    Locale,
};
use crate::models::{ConversionResult, Ingredient};

/// Response for detect_category
#[derive(Debug, Serialize)]
pub struct DetectCategoryResponse {
    pub name: String,
    pub category: IngredientCategory,
    pub grams_per_tablespoon: f64,
}

/// Response for convert_ingredient
#[derive(Debug, Serialize)]
pub struct ConvertIngredientResponse {
    pub name: String,
    pub category: IngredientCategory,
    pub result: ConversionResult,
    pub display: String,
}

/// Counters for a batch conversion
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub converted: usize,
    pub skipped_missing_quantity: usize,
    pub skipped_unparseable: usize,
    pub skipped_unsupported_unit: usize,
    /// Negative, non-finite or too large for a spoon count
    pub skipped_invalid_value: usize,
}

/// Response for convert_ingredients
#[derive(Debug, Serialize)]
pub struct ConvertIngredientsResponse {
    pub ingredients: Vec<ConvertIngredientResponse>,
    pub locale: Locale,
    pub stats: ConversionStats,
}

/// Response for can_convert_ingredient
#[derive(Debug, Serialize)]
pub struct CanConvertResponse {
    pub unit: Option<String>,
    pub normalized_unit: Option<String>,
    pub convertible: bool,
}

/// Response for parse_quantity
#[derive(Debug, Serialize)]
pub struct ParseQuantityResponse {
    pub raw: String,
    pub value: Option<f64>,
}

/// Classify an ingredient by name
pub fn detect_ingredient_category(name: &str) -> DetectCategoryResponse {
    let category = detect_category(name);
    DetectCategoryResponse {
        name: name.to_string(),
        category,
        grams_per_tablespoon: category.grams_per_tablespoon(),
    }
}

/// Convert a single ingredient
pub fn convert_one(ingredient: &Ingredient, locale: Locale) -> ConvertIngredientResponse {
    let result = ingredient.convert(locale);
    ConvertIngredientResponse {
        name: ingredient.name.clone(),
        category: ingredient.category(),
        display: result.to_string(),
        result,
    }
}

/// Convert every ingredient of a recipe, in order
pub fn convert_ingredients(ingredients: &[Ingredient], locale: Locale) -> ConvertIngredientsResponse {
    let mut stats = ConversionStats::default();

    let converted = ingredients
        .iter()
        .map(|ingredient| {
            let response = convert_one(ingredient, locale);
            record_outcome(ingredient, &response.result, &mut stats);
            response
        })
        .collect();

    tracing::debug!(
        "Converted {}/{} ingredients ({} missing quantity, {} unparseable, {} unsupported unit, {} invalid value)",
        stats.converted,
        ingredients.len(),
        stats.skipped_missing_quantity,
        stats.skipped_unparseable,
        stats.skipped_unsupported_unit,
        stats.skipped_invalid_value
    );

    ConvertIngredientsResponse {
        ingredients: converted,
        locale,
        stats,
    }
}

/// Attribute a conversion outcome to exactly one counter
fn record_outcome(ingredient: &Ingredient, result: &ConversionResult, stats: &mut ConversionStats) {
    if result.is_converted {
        stats.converted += 1;
        return;
    }

    let quantity = match (&ingredient.quantity, ingredient.unit.as_deref()) {
        (Some(q), Some(u)) if !q.is_blank() && !u.is_empty() => q,
        _ => {
            stats.skipped_missing_quantity += 1;
            return;
        }
    };

    if quantity.value().is_none() {
        stats.skipped_unparseable += 1;
    } else if !can_convert_ingredient(ingredient.unit.as_deref()) {
        stats.skipped_unsupported_unit += 1;
    } else {
        stats.skipped_invalid_value += 1;
    }
}

/// Check whether a unit converts to spoons
pub fn check_unit(unit: Option<&str>) -> CanConvertResponse {
    CanConvertResponse {
        unit: unit.map(str::to_string),
        normalized_unit: unit.map(normalize_unit),
        convertible: can_convert_ingredient(unit),
    }
}

/// Parse a raw quantity string
pub fn parse_raw_quantity(raw: &str) -> ParseQuantityResponse {
    ParseQuantityResponse {
        raw: raw.to_string(),
        value: parse_quantity(raw),
    }
}
