//! JSON rendering of the content model.
//!
//! The JSON shape is the wire contract with the generation engine:
//! sections with heading/metadata/content, content nodes tagged by a
//! `type` discriminator.

use crate::error::{Error, Result};
use crate::model::ContentModel;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a content model to JSON.
pub fn to_json(model: &ContentModel, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(model),
        JsonFormat::Compact => serde_json::to_string(model),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
