//! Spoon Converter (spoonconv) Library
//!
//! Converts recipe ingredient quantities in grams, milliliters, kilograms or
//! liters into approximate tablespoons and teaspoons.

pub mod build_info;
pub mod config;
pub mod conversion;
pub mod mcp;
pub mod models;
pub mod tools;

pub use conversion::{
    can_convert_ingredient, convert_ingredient, convert_ingredient_to_string,
    convert_ingredient_with_locale, detect_category, IngredientCategory, Locale, SpoonUnit,
};
pub use models::{ConversionResult, Ingredient, Quantity};
pub use tools::conversions::convert_ingredients;
