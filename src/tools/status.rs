//! spoonconv Status Tool
//!
//! Provides runtime status information about the spoonconv service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::conversion::Locale;

/// Spoon conversion instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# Spoon Conversion Instructions

This guide explains how to turn recipe quantities into spoon measures for
cooks without a kitchen scale.

## Overview

Each ingredient line has three parts:
1. **name** - display name, French or English ("farine", "olive oil")
2. **quantity** - a number or text ("250", "2,5", "1/2")
3. **unit** - as written in the recipe ("g", "grammes", "ml", "kg", "l")

Only weight and volume units convert: g, ml, kg, l and their spellings
(gr, gramme, millilitre, kilo, litre, ...). Everything else ("pieces",
"pincée", "cup") is returned unchanged with `is_converted: false`.

---

## How the Conversion Works

1. The ingredient name picks a category:

| Category | Examples | Grams (or ml) per tablespoon |
|----------|----------|------------------------------|
| liquid | lait, eau, huile, milk, oil | 15 |
| fine_solid | farine, cacao, flour, cinnamon | 8 |
| dense | sucre, sel, riz, sugar, salt | 14 |
| pasty | beurre, miel, butter, honey | 20 |

   Unknown names are treated as **dense**.

2. kg and l are multiplied by 1000 first.
3. The amount is divided by the category density to get tablespoons.
4. Under one tablespoon the result is given in teaspoons (x3).
5. Counts are rounded to whole spoons. Results are always approximate.

---

## Tools

- `convert_ingredient` - one ingredient, returns the result and a display string
- `convert_ingredients` - a whole recipe's ingredient list, with statistics
- `detect_category` - category and density for a name
- `can_convert_ingredient` - whether a unit converts to spoons
- `parse_quantity` - numeric value of a quantity string

Pass `locale: "en"` for "tbsp"/"tsp" labels; the default is French
("c. à soupe"/"c. à café").

### Example

`convert_ingredient { "name": "lait", "quantity": "30", "unit": "ml" }`
→ display `"2 c. à soupe (approx.)"`

## Notes

- Missing or unreadable quantities ("to taste", "une pincée") are not errors:
  the display string is just the unit
- Fractions with a zero denominator ("1/0") are treated as unreadable
"#;

/// Runtime status of the spoonconv service
#[derive(Debug, Clone, Serialize)]
pub struct SpoonconvStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Configuration
    pub default_locale: Locale,

    /// Usage
    pub conversions_served: u64,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    default_locale: Locale,
    conversions_served: u64,
}

impl StatusTracker {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            default_locale,
            conversions_served: 0,
        }
    }

    /// Count ingredients converted by a tool call
    pub fn record_conversions(&mut self, count: usize) {
        self.conversions_served = self.conversions_served.saturating_add(count as u64);
    }

    pub fn conversions_served(&self) -> u64 {
        self.conversions_served
    }

    /// Get the current status
    pub fn get_status(&self) -> SpoonconvStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        SpoonconvStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_locale: self.default_locale,
            conversions_served: self.conversions_served,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
