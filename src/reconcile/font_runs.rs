//! Per-run font extraction for deck-derived paragraphs.

use crate::ingest::RawRun;
use crate::model::{FontInfo, TextBlock, TextRun};

/// Turns a paragraph's styled runs into a [`TextBlock`] with a
/// block-level font decision.
///
/// Runs are copied verbatim in order. A run with no explicit font
/// inherits the default [`FontInfo`] silently — missing font metadata
/// is expected and common, not a diagnosable condition. The dominant
/// font is the longest-run reduction documented on
/// [`TextBlock::from_runs`].
#[derive(Debug, Clone, Default)]
pub struct FontRunExtractor;

impl FontRunExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract a text block from paragraph runs.
    pub fn extract(&self, runs: &[RawRun]) -> TextBlock {
        self.extract_at_level(runs, 0)
    }

    /// Extract a text block at the given indentation level.
    pub fn extract_at_level(&self, runs: &[RawRun], level: u8) -> TextBlock {
        let runs = runs
            .iter()
            .map(|r| TextRun {
                text: r.text.clone(),
                font: r.font.clone().unwrap_or_default(),
            })
            .collect();
        TextBlock::from_runs_at_level(runs, level)
    }

    /// Block-level font of a title paragraph, if it has any runs.
    pub fn title_font(&self, runs: &[RawRun]) -> Option<FontInfo> {
        if runs.is_empty() {
            return None;
        }
        Some(self.extract(runs).dominant_font)
    }
}
