//! Content model types.
//!
//! This module defines the intermediate representation (IR) that bridges
//! source ingestion and the downstream generation engine. The model is
//! source-agnostic: OCR-derived and deck-derived documents both reconcile
//! into the same ordered, font-aware structure.

mod font;
mod section;
mod table;
mod text;

pub use font::FontInfo;
pub use section::{ContentModel, ContentNode, Section, SectionMetadata, SourceInfo, SourceKind};
pub use table::Table;
pub use text::{TextBlock, TextRun};
