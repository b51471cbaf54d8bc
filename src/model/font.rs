//! Font types.

use serde::{Deserialize, Serialize};

/// Font information for a run of text.
///
/// Every field is optional or defaulted — extraction output routinely
/// lacks font metadata, and absence is a valid state rather than an error.
/// The generation engine substitutes its own defaults for unset fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    /// Font family name (e.g., "Arial")
    #[serde(default)]
    pub name: Option<String>,

    /// Font size in points
    #[serde(default)]
    pub size_pt: Option<f32>,

    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Italic text
    #[serde(default)]
    pub italic: bool,

    /// Underlined text
    #[serde(default)]
    pub underline: bool,

    /// Text color as (R, G, B)
    #[serde(default)]
    pub color_rgb: Option<(u8, u8, u8)>,
}

impl FontInfo {
    /// Create a font with just a name and size.
    pub fn named(name: impl Into<String>, size_pt: f32) -> Self {
        Self {
            name: Some(name.into()),
            size_pt: Some(size_pt),
            ..Default::default()
        }
    }

    /// Set bold and return self.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic and return self.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set the color and return self.
    pub fn with_color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.color_rgb = Some((r, g, b));
        self
    }

    /// Check if any metadata is present at all.
    pub fn is_unset(&self) -> bool {
        self.name.is_none()
            && self.size_pt.is_none()
            && !self.bold
            && !self.italic
            && !self.underline
            && self.color_rgb.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let font = FontInfo::default();
        assert!(font.is_unset());
        assert!(font.name.is_none());
        assert!(!font.bold);
    }

    #[test]
    fn test_named_builder() {
        let font = FontInfo::named("Arial", 12.0).bold().with_color(255, 0, 0);
        assert_eq!(font.name.as_deref(), Some("Arial"));
        assert_eq!(font.size_pt, Some(12.0));
        assert!(font.bold);
        assert_eq!(font.color_rgb, Some((255, 0, 0)));
        assert!(!font.is_unset());
    }
}
