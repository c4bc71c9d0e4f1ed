/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::textframe::TextFrame;

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    fn to_xml(self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }
}

/// A shape on a slide (text box or rectangle).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        bounds: Bounds,
        frame: TextFrame,
    },
    Rectangle {
        bounds: Bounds,
        fill_color: Option<RGBColor>,
        line_color: Option<RGBColor>,
        frame: Option<TextFrame>,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(shape_id: u32, bounds: Bounds) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                bounds,
                frame: TextFrame::for_text_box(),
            },
        }
    }

    /// Create a new rectangle shape.
    pub(crate) fn new_rectangle(
        shape_id: u32,
        bounds: Bounds,
        fill_color: Option<RGBColor>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Rectangle {
                bounds,
                fill_color,
                line_color: None,
                frame: None,
            },
        }
    }

    /// Shape ID within its slide.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Display name written to `p:cNvPr`.
    pub fn name(&self) -> String {
        match self.shape_type {
            ShapeType::TextBox { .. } => format!("TextBox {}", self.shape_id - 1),
            ShapeType::Rectangle { .. } => format!("Rectangle {}", self.shape_id - 1),
        }
    }

    /// Position and size.
    pub fn bounds(&self) -> Bounds {
        match self.shape_type {
            ShapeType::TextBox { bounds, .. } | ShapeType::Rectangle { bounds, .. } => bounds,
        }
    }

    /// Check whether this shape is a text box.
    pub fn is_text_box(&self) -> bool {
        matches!(self.shape_type, ShapeType::TextBox { .. })
    }

    /// Builder method: set the fill color (rectangles only).
    pub fn set_fill_color(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::Rectangle {
            ref mut fill_color, ..
        } = self.shape_type
        {
            *fill_color = Some(color);
        }
        self
    }

    /// Builder method: set the outline color (rectangles only).
    pub fn set_line_color(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::Rectangle {
            ref mut line_color, ..
        } = self.shape_type
        {
            *line_color = Some(color);
        }
        self
    }

    /// Fill color, if this shape has one.
    pub fn fill_color(&self) -> Option<RGBColor> {
        match self.shape_type {
            ShapeType::Rectangle { fill_color, .. } => fill_color,
            ShapeType::TextBox { .. } => None,
        }
    }

    /// Text frame of the shape, if it has one.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.shape_type {
            ShapeType::TextBox { frame, .. } => Some(frame),
            ShapeType::Rectangle { frame, .. } => frame.as_ref(),
        }
    }

    /// Mutable text frame. Rectangles get an empty frame on first access.
    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        match &mut self.shape_type {
            ShapeType::TextBox { frame, .. } => frame,
            ShapeType::Rectangle { frame, .. } => {
                frame.get_or_insert_with(TextFrame::for_autoshape)
            },
        }
    }

    /// Generate the `p:sp` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, self.shape_id, self.name())?;

        match &self.shape_type {
            ShapeType::TextBox { bounds, frame } => {
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                bounds.to_xml(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                frame.to_xml(xml)?;
            },
            ShapeType::Rectangle {
                bounds,
                fill_color,
                line_color,
                frame,
            } => {
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                bounds.to_xml(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                if let Some(color) = fill_color {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )?;
                }
                if let Some(color) = line_color {
                    write!(
                        xml,
                        r#"<a:ln><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                        color.to_hex()
                    )?;
                }
                xml.push_str("</p:spPr>");

                if let Some(frame) = frame {
                    frame.to_xml(xml)?;
                }
            },
        }

        xml.push_str("</p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::Paragraph;

    fn bounds() -> Bounds {
        Bounds {
            x: 0,
            y: 0,
            width: 9_144_000,
            height: 1_097_280,
        }
    }

    #[test]
    fn test_rectangle_xml() {
        let navy = RGBColor::new(15, 23, 42);
        let mut shape = MutableShape::new_rectangle(2, bounds(), None);
        shape.set_fill_color(navy).set_line_color(navy);

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 1"/>"#));
        assert!(xml.contains(r#"<a:ext cx="9144000" cy="1097280"/>"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="0F172A"/></a:solidFill><a:ln>"#));
        assert!(!xml.contains("<p:txBody>"));
    }

    #[test]
    fn test_rectangle_gets_text_frame_on_demand() {
        let mut shape = MutableShape::new_rectangle(2, bounds(), None);
        assert!(shape.text_frame().is_none());

        shape.text_frame_mut().add_paragraph(Paragraph::new("About Ghost Protocol"));
        assert_eq!(shape.text_frame().map(|f| f.text()), Some("About Ghost Protocol".to_string()));

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<p:txBody>"));
    }

    #[test]
    fn test_text_box_ignores_fill() {
        let mut shape = MutableShape::new_text_box(3, bounds());
        shape.set_fill_color(RGBColor::new(1, 2, 3));
        assert!(shape.is_text_box());
        assert_eq!(shape.fill_color(), None);

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains("<a:noFill/>"));
    }
}
