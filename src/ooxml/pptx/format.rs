//! Format types for PPTX presentations.
use crate::common::RGBColor;

/// Horizontal paragraph alignment (`algn` attribute of `a:pPr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// DrawingML attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Vertical anchoring of text inside its shape (`anchor` attribute of `a:bodyPr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl TextAnchor {
    /// DrawingML attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Character formatting applied to a paragraph's run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Underline text
    pub underline: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

/// A paragraph of a text frame: one run of text plus paragraph properties.
///
/// An empty `text` produces a blank paragraph; the format is still written
/// (as `a:endParaRPr`) so the blank line keeps its height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,
    /// Run formatting
    pub format: TextFormat,
    /// Horizontal alignment; inherited from the list style when unset
    pub alignment: Option<Alignment>,
    /// Indentation level (0-8)
    pub level: u8,
    /// Space before the paragraph, in points
    pub space_before: Option<f64>,
    /// Space after the paragraph, in points
    pub space_after: Option<f64>,
}

impl Paragraph {
    /// Create a paragraph with default formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Builder method: set font size in points.
    pub fn size(mut self, size: f64) -> Self {
        self.format.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.format.bold = Some(bold);
        self
    }

    /// Builder method: set italic.
    pub fn italic(mut self, italic: bool) -> Self {
        self.format.italic = Some(italic);
        self
    }

    /// Builder method: set text color.
    pub fn color(mut self, color: RGBColor) -> Self {
        self.format.color = Some(color);
        self
    }

    /// Builder method: set font family.
    pub fn font(mut self, font: &str) -> Self {
        self.format.font = Some(font.to_string());
        self
    }

    /// Builder method: set alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Builder method: set indentation level, clamped to the 0-8 range DrawingML allows.
    pub fn level(mut self, level: u8) -> Self {
        self.level = level.min(8);
        self
    }

    /// Builder method: set space before and after, in points.
    pub fn spacing(mut self, before: f64, after: f64) -> Self {
        self.space_before = Some(before);
        self.space_after = Some(after);
        self
    }

    /// Check whether the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_builder() {
        let p = Paragraph::new("Strategic Value")
            .size(40.0)
            .bold(true)
            .color(RGBColor::new(255, 255, 255))
            .align(Alignment::Center)
            .spacing(12.0, 0.0);

        assert_eq!(p.format.size, Some(40.0));
        assert_eq!(p.format.bold, Some(true));
        assert_eq!(p.alignment, Some(Alignment::Center));
        assert_eq!(p.space_before, Some(12.0));
        assert_eq!(p.space_after, Some(0.0));
        assert_eq!(p.level, 0);
    }

    #[test]
    fn test_level_is_clamped() {
        assert_eq!(Paragraph::new("x").level(12).level, 8);
    }

    #[test]
    fn test_attribute_values() {
        assert_eq!(Alignment::Center.as_str(), "ctr");
        assert_eq!(TextAnchor::Middle.as_str(), "ctr");
        assert_eq!(Alignment::default(), Alignment::Left);
    }
}
