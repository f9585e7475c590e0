//! spoonconv Tools module
//!
//! MCP tool implementations for the spoon converter.

pub mod conversions;
pub mod status;
