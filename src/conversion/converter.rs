//! Spoon conversion functions
//!
//! Converts weight and volume quantities into tablespoons or teaspoons, and
//! exposes the top-level ingredient conversion used by display code.

use serde::{Deserialize, Serialize};

use super::category::{detect_category, IngredientCategory};
use super::units::{base_scale, normalize_unit, Locale, SpoonUnit};
use crate::models::{ConversionResult, Quantity};

/// Teaspoons per tablespoon
pub const TSP_PER_TBSP: f64 = 3.0;

/// A whole number of spoons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoonMeasure {
    pub count: u32,
    pub unit: SpoonUnit,
}

/// Convert a weight or volume to spoons for an ingredient category.
///
/// `unit` is the raw unit string; it is normalized here. Grams and
/// milliliters convert directly, kilograms and liters are scaled by 1000
/// first. Anything under one tablespoon is expressed in teaspoons. Counts are
/// rounded to the nearest whole spoon.
///
/// Returns None for units without a spoon equivalent, for negative or
/// non-finite values, and for counts too large to represent.
pub fn convert_to_spoons(value: f64, unit: &str, category: IngredientCategory) -> Option<SpoonMeasure> {
    let canonical = normalize_unit(unit);

    let Some(scale) = base_scale(&canonical) else {
        tracing::debug!("No spoon conversion for unit '{}'", canonical);
        return None;
    };

    if !value.is_finite() || value < 0.0 {
        tracing::debug!("No spoon conversion for quantity {}", value);
        return None;
    }

    let tablespoons = value * scale / category.grams_per_tablespoon();

    let (spoons, unit) = if tablespoons < 1.0 {
        (tablespoons * TSP_PER_TBSP, SpoonUnit::Teaspoon)
    } else {
        (tablespoons, SpoonUnit::Tablespoon)
    };

    let Some(count) = round_count(spoons) else {
        tracing::debug!("Spoon count for quantity {} does not fit a u32", value);
        return None;
    };

    Some(SpoonMeasure { count, unit })
}

/// Round half away from zero; None when the count does not fit a u32
fn round_count(spoons: f64) -> Option<u32> {
    let rounded = spoons.round();
    (rounded <= f64::from(u32::MAX)).then_some(rounded as u32)
}

/// Convert an ingredient to spoons with French labels.
///
/// See [`convert_ingredient_with_locale`].
pub fn convert_ingredient(name: &str, quantity: Option<&Quantity>, unit: Option<&str>) -> ConversionResult {
    convert_ingredient_with_locale(name, quantity, unit, Locale::default())
}

/// Convert an ingredient to spoons.
///
/// Decision sequence:
/// 1. Missing or empty quantity/unit → value 0, unit echoed, not converted
/// 2. Unparseable quantity → value 0, unit echoed, not converted
/// 3. Category detected from the name
/// 4. Unit without spoon equivalent → parsed value and unit echoed, not converted
/// 5. Otherwise the spoon count and label, converted and approximate
pub fn convert_ingredient_with_locale(
    name: &str,
    quantity: Option<&Quantity>,
    unit: Option<&str>,
    locale: Locale,
) -> ConversionResult {
    let (quantity, unit) = match (quantity, unit) {
        (Some(q), Some(u)) if !q.is_blank() && !u.is_empty() => (q, u),
        _ => return ConversionResult::unconverted(0.0, unit.unwrap_or_default()),
    };

    let Some(value) = quantity.value() else {
        return ConversionResult::unconverted(0.0, unit);
    };

    let category = detect_category(name);

    match convert_to_spoons(value, unit, category) {
        Some(measure) => ConversionResult::from_spoons(measure, locale),
        None => ConversionResult::unconverted(value, unit),
    }
}

/// Display string for an ingredient quantity, e.g. "2 c. à soupe (approx.)"
pub fn convert_ingredient_to_string(name: &str, quantity: Option<&Quantity>, unit: Option<&str>) -> String {
    convert_ingredient(name, quantity, unit).to_string()
}

/// Whether a unit can be converted to spoons (g, ml, kg, l and their spellings)
pub fn can_convert_ingredient(unit: Option<&str>) -> bool {
    unit.is_some_and(|u| base_scale(&normalize_unit(u)).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Quantity {
        Quantity::from(s)
    }

    #[test]
    fn test_spoons_liquid_tablespoons() {
        // 30ml / 15ml per tbsp = 2 tbsp
        let measure = convert_to_spoons(30.0, "ml", IngredientCategory::Liquid).unwrap();
        assert_eq!(measure, SpoonMeasure { count: 2, unit: SpoonUnit::Tablespoon });
    }

    #[test]
    fn test_spoons_teaspoon_fallback() {
        // 5g / 14g per tbsp = 0.357 tbsp -> 1.07 tsp -> 1 tsp
        let measure = convert_to_spoons(5.0, "g", IngredientCategory::Dense).unwrap();
        assert_eq!(measure, SpoonMeasure { count: 1, unit: SpoonUnit::Teaspoon });
    }

    #[test]
    fn test_spoons_rounding() {
        // 100g / 8g = 12.5 tbsp -> 13
        let measure = convert_to_spoons(100.0, "grammes", IngredientCategory::FineSolid).unwrap();
        assert_eq!(measure.count, 13);
        // 50g / 20g = 2.5 tbsp -> 3
        let measure = convert_to_spoons(50.0, "g", IngredientCategory::Pasty).unwrap();
        assert_eq!(measure.count, 3);
        // exactly one tablespoon stays in tablespoons
        let measure = convert_to_spoons(15.0, "ml", IngredientCategory::Liquid).unwrap();
        assert_eq!(measure, SpoonMeasure { count: 1, unit: SpoonUnit::Tablespoon });
    }

    #[test]
    fn test_spoons_zero_is_zero_teaspoons() {
        let measure = convert_to_spoons(0.0, "g", IngredientCategory::Dense).unwrap();
        assert_eq!(measure, SpoonMeasure { count: 0, unit: SpoonUnit::Teaspoon });
    }

    #[test]
    fn test_spoons_kilograms_and_liters_scale() {
        // 0.03 l = 30 ml -> 2 tbsp
        let measure = convert_to_spoons(0.03, "litres", IngredientCategory::Liquid).unwrap();
        assert_eq!(measure, SpoonMeasure { count: 2, unit: SpoonUnit::Tablespoon });
        // 1 kg flour = 1000g / 8g = 125 tbsp
        let measure = convert_to_spoons(1.0, "kg", IngredientCategory::FineSolid).unwrap();
        assert_eq!(measure, SpoonMeasure { count: 125, unit: SpoonUnit::Tablespoon });
    }

    #[test]
    fn test_spoons_rejects_other_units_and_bad_values() {
        assert_eq!(convert_to_spoons(2.0, "pieces", IngredientCategory::Dense), None);
        assert_eq!(convert_to_spoons(1.0, "cup", IngredientCategory::Liquid), None);
        assert_eq!(convert_to_spoons(-5.0, "g", IngredientCategory::Dense), None);
        assert_eq!(convert_to_spoons(f64::INFINITY, "g", IngredientCategory::Dense), None);
        assert_eq!(convert_to_spoons(f64::NAN, "g", IngredientCategory::Dense), None);
    }

    #[test]
    fn test_spoons_rejects_counts_beyond_u32() {
        // 1e11 g / 14g is about 7.1e9 tbsp
        assert_eq!(convert_to_spoons(1e11, "g", IngredientCategory::Dense), None);
        assert_eq!(convert_to_spoons(1e12, "kg", IngredientCategory::Dense), None);
        // largest representable count still converts
        let grams = f64::from(u32::MAX) * 14.0;
        let measure = convert_to_spoons(grams, "g", IngredientCategory::Dense).unwrap();
        assert_eq!(measure.count, u32::MAX);
    }

    #[test]
    fn test_convert_ingredient_huge_quantity_passes_through() {
        let result = convert_ingredient("sugar", Some(&text("1e12")), Some("kg"));
        assert_eq!(result, ConversionResult::unconverted(1e12, "kg"));
    }

    #[test]
    fn test_convert_ingredient_powdered_sugar_is_dense() {
        // 100g / 14g = 7.14 tbsp
        let result = convert_ingredient("sucre en poudre", Some(&text("100")), Some("g"));
        assert_eq!(result.value, 7.0);
        assert_eq!(result.unit, "c. à soupe");
    }

    #[test]
    fn test_convert_ingredient_liquid() {
        let result = convert_ingredient("milk", Some(&text("30")), Some("ml"));
        assert_eq!(
            result,
            ConversionResult {
                value: 2.0,
                unit: "c. à soupe".to_string(),
                is_converted: true,
                is_approximate: true,
            }
        );
    }

    #[test]
    fn test_convert_ingredient_teaspoon() {
        let result = convert_ingredient("salt", Some(&text("5")), Some("g"));
        assert_eq!(result.value, 1.0);
        assert_eq!(result.unit, "c. à café");
        assert!(result.is_converted);
        assert!(result.is_approximate);
    }

    #[test]
    fn test_convert_ingredient_english_labels() {
        let result =
            convert_ingredient_with_locale("milk", Some(&text("30")), Some("ml"), Locale::English);
        assert_eq!(result.unit, "tbsp");
        let result =
            convert_ingredient_with_locale("salt", Some(&text("5")), Some("g"), Locale::English);
        assert_eq!(result.unit, "tsp");
    }

    #[test]
    fn test_convert_ingredient_numeric_quantity() {
        let result = convert_ingredient("beurre", Some(&Quantity::Number(40.0)), Some("g"));
        // 40g / 20g = 2 tbsp
        assert_eq!(result.value, 2.0);
        assert_eq!(result.unit, "c. à soupe");
    }

    #[test]
    fn test_convert_ingredient_unsupported_unit() {
        let result = convert_ingredient("carrot", Some(&text("2")), Some("pieces"));
        assert_eq!(
            result,
            ConversionResult {
                value: 2.0,
                unit: "pieces".to_string(),
                is_converted: false,
                is_approximate: false,
            }
        );
    }

    #[test]
    fn test_convert_ingredient_missing_inputs() {
        let result = convert_ingredient("sugar", None, Some("g"));
        assert_eq!(result, ConversionResult::unconverted(0.0, "g"));

        let result = convert_ingredient("sugar", Some(&text("100")), None);
        assert_eq!(result, ConversionResult::unconverted(0.0, ""));

        let result = convert_ingredient("sugar", Some(&text("")), Some("g"));
        assert_eq!(result, ConversionResult::unconverted(0.0, "g"));

        let result = convert_ingredient("sugar", Some(&Quantity::Number(0.0)), Some("g"));
        assert_eq!(result, ConversionResult::unconverted(0.0, "g"));

        let result = convert_ingredient("sugar", Some(&text("100")), Some(""));
        assert_eq!(result, ConversionResult::unconverted(0.0, ""));
    }

    #[test]
    fn test_convert_ingredient_unparseable_quantity() {
        let result = convert_ingredient("sel", Some(&text("une pincée")), Some("g"));
        assert_eq!(result, ConversionResult::unconverted(0.0, "g"));
    }

    #[test]
    fn test_convert_ingredient_to_string() {
        assert_eq!(
            convert_ingredient_to_string("milk", Some(&text("30")), Some("ml")),
            "2 c. à soupe (approx.)"
        );
        assert_eq!(
            convert_ingredient_to_string("carrot", Some(&text("2,5")), Some("pieces")),
            "2.5 pieces"
        );
        assert_eq!(
            convert_ingredient_to_string("salt", None, Some("pincée")),
            "pincée"
        );
        assert_eq!(convert_ingredient_to_string("salt", None, None), "");
    }

    #[test]
    fn test_can_convert_matches_converter() {
        for unit in ["g", "gr", "Grammes", "ml", "millilitre", "kg", "kilos", "l", "Litre"] {
            assert!(can_convert_ingredient(Some(unit)), "unit {:?}", unit);
            assert!(convert_to_spoons(10.0, unit, IngredientCategory::Dense).is_some());
        }
        for unit in ["pieces", "cup", "pincée", "", "tbsp"] {
            assert!(!can_convert_ingredient(Some(unit)), "unit {:?}", unit);
            assert!(convert_to_spoons(10.0, unit, IngredientCategory::Dense).is_none());
        }
        assert!(!can_convert_ingredient(None));
    }
}
