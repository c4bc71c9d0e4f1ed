//! Slide background support.
use crate::common::RGBColor;

/// Background of a single slide.
///
/// When a slide has no background the master background (white) shows through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideBackground {
    /// Solid fill
    Solid {
        /// Fill color
        color: RGBColor,
    },
}

impl SlideBackground {
    /// Create a solid color background.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ghostdeck::common::RGBColor;
    /// use ghostdeck::ooxml::pptx::SlideBackground;
    ///
    /// let bg = SlideBackground::solid(RGBColor::new(15, 23, 42));
    /// ```
    pub fn solid(color: RGBColor) -> Self {
        SlideBackground::Solid { color }
    }

    /// Fill color of the background.
    pub fn color(&self) -> RGBColor {
        match self {
            SlideBackground::Solid { color } => *color,
        }
    }

    /// Generate the `p:bg` element. It must precede `p:spTree` inside `p:cSld`.
    pub(crate) fn to_xml(&self) -> String {
        match self {
            SlideBackground::Solid { color } => format!(
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color.to_hex()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_background_xml() {
        let bg = SlideBackground::solid(RGBColor::new(15, 23, 42));
        let xml = bg.to_xml();
        assert!(xml.starts_with("<p:bg><p:bgPr>"));
        assert!(xml.contains(r#"<a:srgbClr val="0F172A"/>"#));
        assert!(xml.ends_with("</p:bgPr></p:bg>"));
    }
}
