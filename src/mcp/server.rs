//! spoonconv MCP Server Implementation
//!
//! Implements the MCP server with all spoonconv tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::conversion::{Locale, UnknownLocale};
use crate::models::{Ingredient, Quantity};
use crate::tools::conversions;
use crate::tools::status::StatusTracker;

/// spoonconv MCP Service
#[derive(Clone)]
pub struct SpoonService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    tool_router: ToolRouter<SpoonService>,
}

impl SpoonService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.locale))),
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Requested locale, falling back to the configured default
    fn resolve_locale(&self, requested: Option<&str>) -> Result<Locale, McpError> {
        match requested {
            Some(raw) => raw
                .parse()
                .map_err(|e: UnknownLocale| McpError::invalid_params(e.to_string(), None)),
            None => Ok(self.config.locale),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DetectCategoryParams {
    /// Ingredient display name (French or English)
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertIngredientParams {
    /// Ingredient display name (French or English)
    pub name: String,
    /// Quantity as a number or text ("250", "2,5", "1/2")
    pub quantity: Option<Quantity>,
    /// Unit as written ("g", "grammes", "ml", "kg", "l", "pieces")
    pub unit: Option<String>,
    /// Label language: "fr" (default) or "en"
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertIngredientsParams {
    /// Ingredient lines, converted in order
    pub ingredients: Vec<Ingredient>,
    /// Label language: "fr" (default) or "en"
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CanConvertIngredientParams {
    /// Unit to check
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseQuantityParams {
    /// Raw quantity text
    pub raw: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl SpoonService {
    // --- Status ---

    #[tool(description = "Get the current status of the spoonconv service including build info, default locale, conversion count, and process information")]
    async fn spoonconv_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for converting recipe quantities to spoons. Call this when unsure how the conversion tools behave.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERSION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Conversion ---

    #[tool(description = "Detect the physical category (liquid, fine_solid, dense, pasty) of an ingredient by name, with its grams per tablespoon")]
    fn detect_category(&self, Parameters(p): Parameters<DetectCategoryParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversions::detect_ingredient_category(&p.name))
    }

    #[tool(description = "Convert one ingredient quantity (g, ml, kg, l) to tablespoons or teaspoons. Other units are returned unchanged with is_converted=false.")]
    async fn convert_ingredient(&self, Parameters(p): Parameters<ConvertIngredientParams>) -> Result<CallToolResult, McpError> {
        let locale = self.resolve_locale(p.locale.as_deref())?;
        let ingredient = Ingredient {
            name: p.name,
            quantity: p.quantity,
            unit: p.unit,
        };

        let response = conversions::convert_one(&ingredient, locale);
        if response.result.is_converted {
            self.status_tracker.lock().await.record_conversions(1);
        }
        to_json(&response)
    }

    #[tool(description = "Convert a recipe's whole ingredient list to spoons in one call, with statistics on what could not be converted. PREFERRED over repeated convert_ingredient calls.")]
    async fn convert_ingredients(&self, Parameters(p): Parameters<ConvertIngredientsParams>) -> Result<CallToolResult, McpError> {
        let locale = self.resolve_locale(p.locale.as_deref())?;
        let response = conversions::convert_ingredients(&p.ingredients, locale);

        tracing::info!(
            "Converted {} of {} ingredients",
            response.stats.converted,
            p.ingredients.len()
        );
        self.status_tracker
            .lock()
            .await
            .record_conversions(response.stats.converted);
        to_json(&response)
    }

    #[tool(description = "Check whether a unit can be converted to spoons (g, ml, kg, l and their spellings)")]
    fn can_convert_ingredient(&self, Parameters(p): Parameters<CanConvertIngredientParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversions::check_unit(p.unit.as_deref()))
    }

    #[tool(description = "Parse a free-form quantity (\"2\", \"2,5\", \"1/2\") into a number; value is null when unreadable")]
    fn parse_quantity(&self, Parameters(p): Parameters<ParseQuantityParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversions::parse_raw_quantity(&p.raw))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for SpoonService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "spoonconv".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Spoon Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Spoon Converter (spoonconv) - converts recipe quantities in g, ml, kg or l \
                 into approximate tablespoons/teaspoons. \
                 Call conversion_instructions first if unsure. \
                 Conversion: convert_ingredient, convert_ingredients (batch, preferred). \
                 Helpers: detect_category, can_convert_ingredient, parse_quantity. \
                 Status: spoonconv_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        let service = SpoonService::new(Config { locale: Locale::English });
        assert_eq!(service.resolve_locale(None).unwrap(), Locale::English);
        assert_eq!(service.resolve_locale(Some("fr")).unwrap(), Locale::French);
        assert!(service.resolve_locale(Some("xx")).is_err());
    }

    #[test]
    fn test_params_accept_number_or_text_quantity() {
        let p: ConvertIngredientParams =
            serde_json::from_str(r#"{"name": "lait", "quantity": 30, "unit": "ml"}"#).unwrap();
        assert_eq!(p.quantity, Some(Quantity::Number(30.0)));

        let p: ConvertIngredientParams =
            serde_json::from_str(r#"{"name": "lait", "quantity": "1/2", "unit": "l"}"#).unwrap();
        assert_eq!(p.quantity, Some(Quantity::Text("1/2".to_string())));
        assert_eq!(p.locale, None);
    }

    #[test]
    fn test_server_info() {
        let service = SpoonService::new(Config::default());
        let info = service.get_info();
        assert_eq!(info.server_info.name, "spoonconv");
    }
}
