//! Content model assembly.

use rayon::prelude::*;
use unicode_normalization::UnicodeNormalization;

use crate::ingest::{
    DeckSource, DetectedTable, LayoutBlock, OcrSource, RawRun, SlideElement, SourceDocument,
};
use crate::model::{ContentModel, ContentNode, Section, SourceKind, Table, TextBlock};

use super::{
    escape_cell, BuildOptions, FontRunExtractor, MarkupTableParser, TableReconstructor,
};

/// Assembles one [`ContentModel`] per source document.
///
/// The builder consumes exactly one source at a time and never merges
/// two sources into one model; combining a design source with a
/// content source is the generation engine's decision. Building is a
/// pure, synchronous transformation over already-materialized input —
/// no I/O, no suspension points, no shared state — so distinct sources
/// can be built on parallel threads freely (see [`Self::build_many`]).
#[derive(Debug, Default)]
pub struct ContentModelBuilder {
    options: BuildOptions,
    tables: TableReconstructor,
    fonts: FontRunExtractor,
    markup: MarkupTableParser,
}

impl ContentModelBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    /// Create a builder with the given options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            tables: TableReconstructor::new(),
            fonts: FontRunExtractor::new(),
            markup: MarkupTableParser::new(),
        }
    }

    /// Build the content model for one source document.
    pub fn build(&self, source: SourceDocument) -> ContentModel {
        match source {
            SourceDocument::Ocr(ocr) => self.build_ocr(ocr),
            SourceDocument::Deck(deck) => self.build_deck(deck),
        }
    }

    /// Build models for several independent source documents in
    /// parallel, preserving input order in the output.
    pub fn build_many(&self, sources: Vec<SourceDocument>) -> Vec<ContentModel> {
        sources.into_par_iter().map(|s| self.build(s)).collect()
    }

    fn build_ocr(&self, source: OcrSource) -> ContentModel {
        let mut model = ContentModel::new(SourceKind::Ocr);
        model.source.source_file = source.source_file;

        // Blocks before the first heading still need a position to
        // land in, so an untitled section opens the model lazily.
        let mut current: Option<Section> = None;

        for block in source.blocks {
            match block {
                LayoutBlock::Heading { text } => {
                    if let Some(done) = current.take() {
                        model.sections.push(done);
                    }
                    current = Some(Section::new(self.normalize(&text)));
                }
                LayoutBlock::Line { text } => {
                    let block = TextBlock::plain(self.normalize(&text));
                    if block.is_blank() && !self.options.keep_empty_blocks {
                        continue;
                    }
                    self.section_mut(&mut current).push(ContentNode::Text(block));
                }
                LayoutBlock::Table(detected) => {
                    let table = self.tables.reconstruct(&self.normalize_table(detected));
                    self.section_mut(&mut current).push(ContentNode::Table(table));
                }
                LayoutBlock::Markup { text } => {
                    // Absent and malformed both degrade to an empty
                    // table node so the block keeps its position in
                    // the sequence.
                    let table = self.table_from_markup(&text);
                    self.section_mut(&mut current).push(ContentNode::Table(table));
                }
                LayoutBlock::Image { path } => {
                    self.section_mut(&mut current)
                        .push(ContentNode::Image { path });
                }
            }
        }

        if let Some(done) = current.take() {
            model.sections.push(done);
        }
        model
    }

    fn build_deck(&self, source: DeckSource) -> ContentModel {
        let mut model = ContentModel::new(SourceKind::Deck);
        model.source.source_file = source.source_file;

        for (idx, slide) in source.slides.into_iter().enumerate() {
            let number = idx as u32 + 1;

            let mut section = match &slide.title {
                Some(runs) if !runs.is_empty() => {
                    let runs = self.normalize_runs(runs);
                    let title = self.fonts.extract(&runs);
                    let heading = if title.is_blank() {
                        format!("Slide {number}")
                    } else {
                        title.text.clone()
                    };
                    let mut section = Section::new(heading);
                    section.metadata.title_font = Some(title.dominant_font);
                    section
                }
                _ => Section::new(format!("Slide {number}")),
            };
            section.metadata.slide_number = Some(number);

            for element in slide.body {
                match element {
                    SlideElement::Paragraph { runs, level } => {
                        let runs = self.normalize_runs(&runs);
                        let block = self.fonts.extract_at_level(&runs, level);
                        if block.is_blank() && !self.options.keep_empty_blocks {
                            continue;
                        }
                        section.push(ContentNode::Text(block));
                    }
                    SlideElement::Picture { path } => {
                        section.push(ContentNode::Image { path });
                    }
                }
            }

            model.sections.push(section);
        }

        model
    }

    /// Reconcile a markup fragment into a table node value.
    fn table_from_markup(&self, text: &str) -> Table {
        let (header, data_rows) = self.markup.parse(&self.normalize(text));
        if header.is_empty() && data_rows.is_empty() {
            return Table::new();
        }

        // Parsed cells are raw text; re-escape so table cells stay
        // markup-safe across the whole model.
        let mut rows = Vec::with_capacity(data_rows.len() + 1);
        rows.push(header.iter().map(|c| escape_cell(c)).collect());
        for row in &data_rows {
            rows.push(row.iter().map(|c| escape_cell(c)).collect());
        }
        pad_rectangular(&mut rows);
        Table { rows }
    }

    fn section_mut<'a>(&self, current: &'a mut Option<Section>) -> &'a mut Section {
        current.get_or_insert_with(|| Section::new(""))
    }

    fn normalize(&self, text: &str) -> String {
        if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        }
    }

    fn normalize_runs(&self, runs: &[RawRun]) -> Vec<RawRun> {
        runs.iter()
            .map(|r| RawRun {
                text: self.normalize(&r.text),
                font: r.font.clone(),
            })
            .collect()
    }

    fn normalize_table(&self, mut detected: DetectedTable) -> DetectedTable {
        if self.options.normalize_unicode {
            for cell in &mut detected.cells {
                cell.text = cell.text.nfc().collect();
            }
        }
        detected
    }
}

/// Pad ragged parsed rows out to the widest row with empty cells.
/// External markup does not always keep its column counts straight,
/// but the model's tables must be rectangular.
fn pad_rectangular(rows: &mut [Vec<String>]) {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    for row in rows {
        row.resize(width, String::new());
    }
}
