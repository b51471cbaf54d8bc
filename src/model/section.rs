//! Section and document-level types.

use super::{FontInfo, Table, TextBlock};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ordered content element within a section.
///
/// A closed tagged union: the generation engine matches exhaustively on
/// the `type` discriminator (`"text"`, `"table"`, `"image"`). Order
/// within a section is significant and preserved from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    /// A paragraph of text with its font decision
    Text(TextBlock),

    /// A rectangular table (possibly empty)
    Table(Table),

    /// An extracted image referenced by path
    Image {
        /// Path to the extracted image file
        path: String,
    },
}

impl ContentNode {
    /// Check if this node is a table with zero rows.
    pub fn is_empty_table(&self) -> bool {
        matches!(self, ContentNode::Table(t) if t.is_empty())
    }
}

/// Per-section metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionMetadata {
    /// Font of the section title, when known (deck-derived sources)
    #[serde(default)]
    pub title_font: Option<FontInfo>,

    /// Slide number the section came from (deck-derived sources, 1-indexed)
    #[serde(default)]
    pub slide_number: Option<u32>,
}

/// A section of the content model: a heading plus ordered content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub heading: String,

    /// Section metadata
    #[serde(default)]
    pub metadata: SectionMetadata,

    /// Ordered content nodes
    pub content: Vec<ContentNode>,
}

impl Section {
    /// Create a new section with an empty body.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            metadata: SectionMetadata::default(),
            content: Vec::new(),
        }
    }

    /// Add a content node.
    pub fn push(&mut self, node: ContentNode) {
        self.content.push(node);
    }

    /// Check if the section carries no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Kind of source document a model was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// OCR/table-extraction output
    Ocr,
    /// An existing slide deck
    Deck,
}

/// Provenance of a content model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Kind of source document
    pub kind: SourceKind,

    /// Path of the source file, when known
    #[serde(default)]
    pub source_file: Option<String>,

    /// When the model was built
    pub created: DateTime<Utc>,
}

impl SourceInfo {
    /// Create provenance for a source of the given kind, stamped now.
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            source_file: None,
            created: Utc::now(),
        }
    }

    /// Attach the source file path.
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.source_file = Some(path.into());
        self
    }
}

/// The unified, ordered, font-aware representation of one source
/// document — the single artifact handed to the generation engine.
///
/// A model is built once per source document, is immutable after
/// construction, and is never merged with another model by this crate;
/// mixing a design source with a content source is the generation
/// engine's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentModel {
    /// Ordered sections
    pub sections: Vec<Section>,

    /// Provenance of the model
    pub source: SourceInfo,
}

impl ContentModel {
    /// Create an empty model for the given source kind.
    pub fn new(kind: SourceKind) -> Self {
        Self {
            sections: Vec::new(),
            source: SourceInfo::new(kind),
        }
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the model has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Count content nodes across all sections.
    pub fn node_count(&self) -> usize {
        self.sections.iter().map(|s| s.content.len()).sum()
    }
}
