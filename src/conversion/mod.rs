//! Spoon conversion module
//!
//! Category detection, quantity parsing, unit normalization and the
//! weight/volume to spoon conversion built on them.

pub mod category;
pub mod converter;
pub mod quantity;
pub mod units;

pub use category::{detect_category, IngredientCategory};
pub use converter::{
    can_convert_ingredient, convert_ingredient, convert_ingredient_to_string,
    convert_ingredient_with_locale, convert_to_spoons, SpoonMeasure,
};
pub use quantity::parse_quantity;
pub use units::{base_scale, normalize_unit, Locale, SpoonUnit, UnknownLocale};
