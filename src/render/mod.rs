//! Rendering of a finished content model for the generation engine
//! and for inspection.

mod json;
mod markdown;

pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
