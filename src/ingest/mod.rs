//! Ingestion boundary types and the document-analysis port.
//!
//! The network client that calls a remote OCR/table-extraction service
//! and the deck-parsing collaborator live outside this crate; what they
//! hand over is described here. [`DocumentAnalysis`] is the seam: an
//! analysis strategy is injected at construction time instead of being
//! selected through process-wide configuration, so two services (or a
//! test double) can coexist in one process.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::FontInfo;
use crate::model::ContentModel;
use crate::reconcile::{BuildOptions, ContentModelBuilder};

/// A single detected table cell from the analysis service.
///
/// Coordinates are 0-indexed within the declared grid; spans are always
/// at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedCell {
    /// Row of the cell's top-left position
    pub row_index: usize,

    /// Column of the cell's top-left position
    pub col_index: usize,

    /// Number of rows the cell spans
    #[serde(default = "one")]
    pub row_span: usize,

    /// Number of columns the cell spans
    #[serde(default = "one")]
    pub col_span: usize,

    /// Cell text
    pub text: String,

    /// Detection confidence reported by the service (0.0 - 1.0 or 0 - 100,
    /// service-dependent; carried through unchanged)
    #[serde(default)]
    pub confidence: f32,
}

fn one() -> usize {
    1
}

impl DetectedCell {
    /// Create a 1x1 cell at the given position.
    pub fn at(row_index: usize, col_index: usize, text: impl Into<String>) -> Self {
        Self {
            row_index,
            col_index,
            row_span: 1,
            col_span: 1,
            text: text.into(),
            confidence: 0.0,
        }
    }

    /// Set the span and return self.
    pub fn spanning(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }
}

/// A detected table: its cells plus the declared grid dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedTable {
    /// Declared number of rows
    pub row_count: usize,

    /// Declared number of columns
    pub col_count: usize,

    /// Detected cells; not required to cover the whole grid
    pub cells: Vec<DetectedCell>,
}

/// One structural unit detected by the analysis service, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutBlock {
    /// A detected heading line
    Heading {
        /// Heading text
        text: String,
    },

    /// A detected line or paragraph of plain text
    Line {
        /// Line text
        text: String,
    },

    /// A detected table as a flat cell list
    Table(DetectedTable),

    /// Previously-serialized table markup mixed into free text
    /// (e.g., re-ingested output of an earlier run); parsed defensively
    Markup {
        /// The markup fragment
        text: String,
    },

    /// An extracted image referenced by path
    Image {
        /// Path to the extracted image file
        path: String,
    },
}

/// An OCR-derived source document: ordered layout blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrSource {
    /// Detected blocks in document order
    pub blocks: Vec<LayoutBlock>,

    /// Path of the source file, when known
    #[serde(default)]
    pub source_file: Option<String>,
}

/// A styled run handed over by the deck-parsing collaborator.
///
/// `font: None` means the run carries no explicit style and inherits
/// the paragraph default; this is common and never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRun {
    /// Run text
    pub text: String,

    /// Explicit font, if the run carries one
    #[serde(default)]
    pub font: Option<FontInfo>,
}

impl RawRun {
    /// Create a run without explicit font information.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    /// Create a run with an explicit font.
    pub fn styled(text: impl Into<String>, font: FontInfo) -> Self {
        Self {
            text: text.into(),
            font: Some(font),
        }
    }
}

/// One body element of a slide, in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideElement {
    /// A body paragraph as styled runs
    Paragraph {
        /// Runs in source order
        runs: Vec<RawRun>,
        /// Indentation level
        #[serde(default)]
        level: u8,
    },

    /// An embedded picture already extracted to disk
    Picture {
        /// Path to the extracted image file
        path: String,
    },
}

/// One slide of a deck-derived source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideSource {
    /// Title paragraph runs, if the slide has a title placeholder
    #[serde(default)]
    pub title: Option<Vec<RawRun>>,

    /// Body elements in encounter order
    pub body: Vec<SlideElement>,
}

/// A deck-derived source document: ordered slides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckSource {
    /// Slides in deck order
    pub slides: Vec<SlideSource>,

    /// Path of the source file, when known
    #[serde(default)]
    pub source_file: Option<String>,
}

/// A source document of either provenance.
///
/// Exactly one `SourceDocument` produces exactly one [`ContentModel`];
/// this crate never merges two sources into one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum SourceDocument {
    /// OCR/table-extraction output
    Ocr(OcrSource),
    /// Parsed slide deck
    Deck(DeckSource),
}

/// Abstract interface for a document-analysis service.
///
/// Implementations wrap a concrete remote OCR/table-extraction client
/// and return already-materialized layout blocks. The reconciliation
/// core is synchronous and pure; fetching, timeouts and cancellation
/// belong to the implementation behind this trait.
pub trait DocumentAnalysis {
    /// Name of the backing service, used in diagnostics.
    fn name(&self) -> &str;

    /// Analyze raw source bytes into ordered layout blocks.
    ///
    /// A completely unreadable document is the one fatal condition and
    /// must be reported as an error; per-block problems should instead
    /// degrade inside the returned blocks.
    fn analyze(&self, data: &[u8]) -> Result<OcrSource>;
}

/// Run a source through an analysis backend and build its content model.
pub fn ingest_document(
    backend: &dyn DocumentAnalysis,
    data: &[u8],
    options: BuildOptions,
) -> Result<ContentModel> {
    if data.is_empty() {
        return Err(Error::UnreadableSource("empty input".to_string()));
    }

    log::debug!("analyzing document via backend '{}'", backend.name());
    let source = backend.analyze(data)?;

    let builder = ContentModelBuilder::with_options(options);
    Ok(builder.build(SourceDocument::Ocr(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_cell_builder() {
        let cell = DetectedCell::at(1, 2, "x").spanning(2, 1);
        assert_eq!(cell.row_index, 1);
        assert_eq!(cell.col_index, 2);
        assert_eq!(cell.row_span, 2);
        assert_eq!(cell.col_span, 1);
    }

    #[test]
    fn test_cell_span_defaults_from_json() {
        // Services omit spans for plain 1x1 cells.
        let cell: DetectedCell =
            serde_json::from_str(r#"{"row_index":0,"col_index":0,"text":"a"}"#).unwrap();
        assert_eq!(cell.row_span, 1);
        assert_eq!(cell.col_span, 1);
        assert_eq!(cell.confidence, 0.0);
    }

    #[test]
    fn test_ingest_rejects_empty_input() {
        struct Never;
        impl DocumentAnalysis for Never {
            fn name(&self) -> &str {
                "never"
            }
            fn analyze(&self, _: &[u8]) -> Result<OcrSource> {
                unreachable!("must not be called for empty input")
            }
        }

        let err = ingest_document(&Never, b"", BuildOptions::default()).unwrap_err();
        assert!(matches!(err, Error::UnreadableSource(_)));
    }
}
