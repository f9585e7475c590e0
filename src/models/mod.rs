//! Data models
//!
//! Value types passed into and out of conversion.

mod conversion_result;
mod ingredient;

pub use conversion_result::{ConversionResult, APPROX_SUFFIX};
pub use ingredient::{Ingredient, Quantity};
