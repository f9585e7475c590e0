//! Ingredient category detection
//!
//! Maps an ingredient name (French or English) to a broad physical category,
//! which decides how many grams or milliliters fill one tablespoon.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Physical category of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Water, milk, oils, juices, broths
    Liquid,
    /// Flours, powders, ground spices
    FineSolid,
    /// Sugar, salt, rice, grains, seeds
    Dense,
    /// Butter, honey, jams, pastes, creams
    Pasty,
}

impl IngredientCategory {
    /// Detection order; the first category with a matching pattern wins
    pub const ALL: [IngredientCategory; 4] = [
        IngredientCategory::Liquid,
        IngredientCategory::FineSolid,
        IngredientCategory::Dense,
        IngredientCategory::Pasty,
    ];

    /// Grams (or milliliters for liquids) that fill one tablespoon
    pub fn grams_per_tablespoon(&self) -> f64 {
        match self {
            IngredientCategory::Liquid => 15.0,
            IngredientCategory::FineSolid => 8.0,
            IngredientCategory::Dense => 14.0,
            IngredientCategory::Pasty => 20.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Liquid => "liquid",
            IngredientCategory::FineSolid => "fine_solid",
            IngredientCategory::Dense => "dense",
            IngredientCategory::Pasty => "pasty",
        }
    }

    /// Keyword patterns matched against the lowercased name, French then English
    fn patterns(&self) -> &'static [&'static str] {
        match self {
            IngredientCategory::Liquid => &[
                r"\beaux?\b",
                r"\blaits?\b",
                r"\bcr[eè]me (?:liquide|fleurette)\b",
                r"\bhuiles?\b",
                r"\bvinaigres?\b",
                r"\bjus\b",
                r"\bbouillons?\b",
                r"\bvins?\b",
                r"\bbi[eè]res?\b",
                r"\bsirops?\b",
                r"\bsauce soja\b",
                r"\bcaf[eé]\b",
                r"\bthé\b",
                r"\brhum\b",
                r"\bliqueurs?\b",
                r"\bwater\b",
                r"\bmilk\b",
                r"\bbuttermilk\b",
                r"\b(?:heavy|whipping|single|double|light|liquid) cream\b",
                r"\boils?\b",
                r"\bvinegars?\b",
                r"\bjuices?\b",
                r"\bbroth\b",
                r"\bstock\b",
                r"\bwines?\b",
                r"\bbeers?\b",
                r"\bsyrups?\b",
                r"\bsoy sauce\b",
                r"\bcoffee\b",
                r"\btea\b",
                r"\brum\b",
            ],
            IngredientCategory::FineSolid => &[
                r"\bfarines?\b",
                r"\bsucre glace\b",
                r"\bcacao\b",
                r"\blevure\b",
                r"\bbicarbonate\b",
                r"\bf[eé]cule\b",
                r"\bma[iï]zena\b",
                r"\b[eé]pices?\b",
                r"\bcannelle\b",
                r"\bpoivre\b",
                r"\bpaprika\b",
                r"\bcumin\b",
                r"\bcurry\b",
                r"\bmuscade\b",
                r"\bcurcuma\b",
                r"\b(?:amandes?|noisettes?|lait|ail|gingembre|oignon) en poudre\b",
                r"\bchapelure\b",
                r"\bflours?\b",
                r"\b(?:powdered|icing|confectioners'?) sugar\b",
                r"\bcocoa\b",
                r"\bbaking (?:powder|soda)\b",
                r"\byeast\b",
                r"\bcorn ?starch\b",
                r"\bstarch\b",
                r"\bspices?\b",
                r"\bcinnamon\b",
                r"\b(?:black|white|ground|cayenne) pepper\b",
                r"\bnutmeg\b",
                r"\bturmeric\b",
                r"\bpowder\b",
                r"\bbread ?crumbs\b",
            ],
            IngredientCategory::Dense => &[
                r"\bsucres?\b",
                r"\bsel\b",
                r"\briz\b",
                r"\bsemoule\b",
                r"\bquinoa\b",
                r"\blentilles?\b",
                r"\bavoine\b",
                r"\bgraines?\b",
                r"\bcouscous\b",
                r"\bboulgour\b",
                r"\bcassonade\b",
                r"\bpolenta\b",
                r"\bsugars?\b",
                r"\bsalt\b",
                r"\brice\b",
                r"\bsemolina\b",
                r"\blentils?\b",
                r"\boats?\b",
                r"\bseeds?\b",
                r"\bbulgur\b",
                r"\bgrains?\b",
            ],
            IngredientCategory::Pasty => &[
                r"\bbeurres?\b",
                r"\bmiel\b",
                r"\bconfitures?\b",
                r"\bp[aâ]te\b",
                r"\bmoutarde\b",
                r"\bmayonnaise\b",
                r"\bpur[eé]e\b",
                r"\byaourts?\b",
                r"\bcr[eè]me fra[iî]che\b",
                r"\bfromage (?:frais|blanc)\b",
                r"\bketchup\b",
                r"\bconcentr[eé] de tomates?\b",
                r"\bnutella\b",
                r"\btahin[ei]\b",
                r"\bmascarpone\b",
                r"\bricotta\b",
                r"\bbutter\b",
                r"\bhoney\b",
                r"\bjam\b",
                r"\bpaste\b",
                r"\bmustard\b",
                r"\bmayo\b",
                r"\byog(?:h)?urts?\b",
                r"\bsour cream\b",
                r"\bcream cheese\b",
                r"\bjelly\b",
                r"\bhummus\b",
            ],
        }
    }
}

/// Compiled pattern table, in detection order
static CATEGORY_PATTERNS: LazyLock<Vec<(IngredientCategory, Vec<Regex>)>> = LazyLock::new(|| {
    IngredientCategory::ALL
        .iter()
        .map(|category| {
            let compiled = category
                .patterns()
                .iter()
                .map(|p| Regex::new(p).expect("category pattern is a valid regex"))
                .collect();
            (*category, compiled)
        })
        .collect()
});

/// Detect the category of an ingredient from its display name.
///
/// Matching is case-insensitive on whole words. Names that match nothing
/// (including the empty string) are treated as `Dense`, the most common
/// category among spoon-convertible ingredients.
pub fn detect_category(name: &str) -> IngredientCategory {
    let lower = name.to_lowercase();

    CATEGORY_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(&lower)))
        .map(|(category, _)| *category)
        .unwrap_or(IngredientCategory::Dense)
}
