//! Text-level types.

use super::FontInfo;
use serde::{Deserialize, Serialize};

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Font information for this run
    #[serde(default)]
    pub font: FontInfo,
}

impl TextRun {
    /// Create a new run with the default (unset) font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: FontInfo::default(),
        }
    }

    /// Create a new run with an explicit font.
    pub fn styled(text: impl Into<String>, font: FontInfo) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A block of text (one paragraph) with its runs and a block-level
/// font decision.
///
/// `text` and `dominant_font` are derived at construction and never
/// mutated afterwards: `text` is the concatenation of all run texts,
/// and `dominant_font` is the font of the run with the longest text,
/// ties broken by earliest position. Zero-length runs are kept in
/// `runs` for positional fidelity but are never selected as dominant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Full text of the block
    pub text: String,

    /// Block-level font, derived from the dominant run
    #[serde(rename = "font")]
    pub dominant_font: FontInfo,

    /// The runs the block was built from, in source order
    #[serde(default)]
    pub runs: Vec<TextRun>,

    /// Indentation level (0 = top level)
    #[serde(default)]
    pub level: u8,
}

impl TextBlock {
    /// Build a block from runs, deriving the full text and the
    /// dominant font.
    ///
    /// The dominant font is an explicit reduction, not an accident of
    /// iteration order: the run with the greatest character count wins,
    /// and of two runs with equal maximal length the earlier one wins.
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self::from_runs_at_level(runs, 0)
    }

    /// Build a block from runs at the given indentation level.
    pub fn from_runs_at_level(runs: Vec<TextRun>, level: u8) -> Self {
        let text: String = runs.iter().map(|r| r.text.as_str()).collect();
        let dominant_font = dominant_font(&runs);
        Self {
            text,
            dominant_font,
            runs,
            level,
        }
    }

    /// Build a single-run block with the default font.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_runs(vec![TextRun::new(text)])
    }

    /// Check if the block carries any visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Select the font of the longest run, earliest position winning ties.
/// Empty runs never win; a sequence of only empty runs (or no runs)
/// yields the default font.
fn dominant_font(runs: &[TextRun]) -> FontInfo {
    runs.iter()
        .filter(|r| !r.text.is_empty())
        .reduce(|best, candidate| {
            if candidate.text.chars().count() > best.text.chars().count() {
                candidate
            } else {
                best
            }
        })
        .map(|r| r.font.clone())
        .unwrap_or_default()
}
