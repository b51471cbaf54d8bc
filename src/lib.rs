//! # deckmodel
//!
//! Reconciliation of heterogeneous source documents into a unified,
//! font-aware content model for slide deck generation.
//!
//! Source documents arrive in two shapes: OCR/table-extraction output
//! from a remote document-analysis service, and existing slide decks
//! parsed by a deck collaborator. Both reduce to the same
//! [`ContentModel`] — ordered sections of text, tables and images with
//! per-block font decisions — which a downstream generation engine
//! consumes to produce a new deck.
//!
//! The hard part is reconciliation, not transport: raw extraction
//! output has ragged cell grids, missing tables and absent font
//! metadata. This crate reconstructs tabular structure from flat cell
//! lists, collapses per-run font metadata to block-level decisions,
//! and degrades gracefully — a malformed block becomes an empty table
//! or a default font, never a failed document.
//!
//! ## Quick Start
//!
//! ```
//! use deckmodel::{build_model, render, SourceDocument, OcrSource, LayoutBlock};
//!
//! let source = SourceDocument::Ocr(OcrSource {
//!     blocks: vec![
//!         LayoutBlock::Heading { text: "Results".to_string() },
//!         LayoutBlock::Line { text: "Revenue grew 12%".to_string() },
//!     ],
//!     source_file: None,
//! });
//!
//! let model = build_model(source);
//! let json = render::to_json(&model, render::JsonFormat::Pretty).unwrap();
//! assert!(json.contains("Results"));
//! ```
//!
//! ## Features
//!
//! - **Two ingestion paths**: OCR layout blocks and parsed deck slides
//! - **Table reconstruction**: flat cell lists to rectangular grids,
//!   spans replicated, malformed geometry clipped
//! - **Defensive markup parsing**: serialized tables re-enter the
//!   pipeline without ever aborting it
//! - **Font reconciliation**: explicit longest-run dominant-font rule
//! - **Parallel builds**: independent sources reconcile on Rayon threads

pub mod error;
pub mod ingest;
pub mod model;
pub mod reconcile;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ingest::{
    DeckSource, DetectedCell, DetectedTable, DocumentAnalysis, LayoutBlock, OcrSource, RawRun,
    SlideElement, SlideSource, SourceDocument,
};
pub use model::{
    ContentModel, ContentNode, FontInfo, Section, SectionMetadata, SourceInfo, SourceKind, Table,
    TextBlock, TextRun,
};
pub use reconcile::{
    BuildOptions, ContentModelBuilder, FontRunExtractor, MarkupTableParser, TableReconstructor,
};
pub use render::{to_json, to_markdown, JsonFormat};

/// Build the content model for one source document with default options.
///
/// # Example
///
/// ```
/// use deckmodel::{build_model, DeckSource, SourceDocument};
///
/// let model = build_model(SourceDocument::Deck(DeckSource::default()));
/// assert!(model.is_empty());
/// ```
pub fn build_model(source: SourceDocument) -> ContentModel {
    ContentModelBuilder::new().build(source)
}

/// Build the content model for one source document with custom options.
pub fn build_model_with_options(source: SourceDocument, options: BuildOptions) -> ContentModel {
    ContentModelBuilder::with_options(options).build(source)
}

/// Build models for several independent source documents in parallel.
///
/// Output order matches input order. Each document is reconciled in
/// isolation — no state is shared between builds.
pub fn build_models(sources: Vec<SourceDocument>) -> Vec<ContentModel> {
    ContentModelBuilder::new().build_many(sources)
}

/// Run source bytes through an analysis backend and build the model.
///
/// This is the one fallible entry point: a backend that cannot read
/// the document at all propagates its error. See
/// [`ingest::DocumentAnalysis`].
pub fn ingest_with(backend: &dyn DocumentAnalysis, data: &[u8]) -> Result<ContentModel> {
    ingest::ingest_document(backend, data, BuildOptions::default())
}
