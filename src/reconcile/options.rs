//! Build options and configuration.

/// Options for building a content model.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Keep text blocks whose full text is blank.
    ///
    /// Off by default: deck parsers emit empty placeholder paragraphs
    /// that carry nothing the generation engine can use.
    pub keep_empty_blocks: bool,

    /// Apply NFC normalization to all ingested text.
    pub normalize_unicode: bool,
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or drop blank text blocks.
    pub fn with_empty_blocks(mut self, keep: bool) -> Self {
        self.keep_empty_blocks = keep;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            keep_empty_blocks: false,
            normalize_unicode: true,
        }
    }
}
