/// Text frame (`p:txBody`) writer for shapes.
use crate::common::unit::{inches, pt_to_centipoints};
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Paragraph, TextAnchor, TextFormat};
use std::fmt::Write as FmtWrite;

/// Default left/right inset of a DrawingML text body (0.1 inch).
const DEFAULT_INSET: i64 = 91_440;

/// The text container of a shape: body properties plus an ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    word_wrap: bool,
    auto_fit: bool,
    /// Left inset in EMU
    margin_left: i64,
    /// Right inset in EMU
    margin_right: i64,
    anchor: Option<TextAnchor>,
}

impl TextFrame {
    /// Frame used by text boxes: no wrap, shape grows to fit its text.
    pub(crate) fn for_text_box() -> Self {
        Self {
            paragraphs: Vec::new(),
            word_wrap: false,
            auto_fit: true,
            margin_left: DEFAULT_INSET,
            margin_right: DEFAULT_INSET,
            anchor: None,
        }
    }

    /// Frame used by autoshapes: wrapped text, centered vertically.
    pub(crate) fn for_autoshape() -> Self {
        Self {
            paragraphs: Vec::new(),
            word_wrap: true,
            auto_fit: false,
            margin_left: DEFAULT_INSET,
            margin_right: DEFAULT_INSET,
            anchor: Some(TextAnchor::Middle),
        }
    }

    /// Append a paragraph and return it for further tweaks.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.paragraphs.push(paragraph);
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Paragraphs in order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Enable or disable word wrap.
    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = wrap;
        self
    }

    /// Check whether word wrap is enabled.
    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    /// Set left and right insets, in inches.
    pub fn set_margins(&mut self, left: f64, right: f64) -> &mut Self {
        self.margin_left = inches(left);
        self.margin_right = inches(right);
        self
    }

    /// Left and right insets in EMU.
    pub fn margins(&self) -> (i64, i64) {
        (self.margin_left, self.margin_right)
    }

    /// Set vertical anchoring.
    pub fn set_anchor(&mut self, anchor: TextAnchor) -> &mut Self {
        self.anchor = Some(anchor);
        self
    }

    /// Full text, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generate the `p:txBody` element.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");

        xml.push_str("<a:bodyPr");
        if self.word_wrap {
            xml.push_str(r#" wrap="square""#);
        } else {
            xml.push_str(r#" wrap="none""#);
        }
        if self.margin_left != DEFAULT_INSET {
            write!(xml, r#" lIns="{}""#, self.margin_left)?;
        }
        if self.margin_right != DEFAULT_INSET {
            write!(xml, r#" rIns="{}""#, self.margin_right)?;
        }
        xml.push_str(r#" rtlCol="0""#);
        if let Some(anchor) = self.anchor {
            write!(xml, r#" anchor="{}""#, anchor.as_str())?;
        }
        if self.auto_fit {
            xml.push_str("><a:spAutoFit/></a:bodyPr>");
        } else {
            xml.push_str("/>");
        }

        xml.push_str("<a:lstStyle/>");

        // A text body needs at least one paragraph
        if self.paragraphs.is_empty() {
            xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
        }
        for paragraph in &self.paragraphs {
            write_paragraph(xml, paragraph)?;
        }

        xml.push_str("</p:txBody>");
        Ok(())
    }
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    let has_props = paragraph.level > 0
        || paragraph.alignment.is_some()
        || paragraph.space_before.is_some()
        || paragraph.space_after.is_some();
    if has_props {
        xml.push_str("<a:pPr");
        if paragraph.level > 0 {
            write!(xml, r#" lvl="{}""#, paragraph.level)?;
        }
        if let Some(alignment) = paragraph.alignment {
            write!(xml, r#" algn="{}""#, alignment.as_str())?;
        }
        xml.push('>');
        // Schema order: lnSpc, spcBef, spcAft
        if let Some(before) = paragraph.space_before {
            write!(xml, r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#, pt_to_centipoints(before))?;
        }
        if let Some(after) = paragraph.space_after {
            write!(xml, r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#, pt_to_centipoints(after))?;
        }
        xml.push_str("</a:pPr>");
    }

    if paragraph.is_empty() {
        write_run_props(xml, "a:endParaRPr", &paragraph.format)?;
    } else {
        xml.push_str("<a:r>");
        write_run_props(xml, "a:rPr", &paragraph.format)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(&paragraph.text))?;
        xml.push_str("</a:r>");
    }

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_props(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;

    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if let Some(bold) = format.bold {
        write!(xml, r#" b="{}""#, u8::from(bold))?;
    }
    if let Some(italic) = format.italic {
        write!(xml, r#" i="{}""#, u8::from(italic))?;
    }
    if let Some(true) = format.underline {
        xml.push_str(r#" u="sng""#);
    }
    xml.push_str(r#" dirty="0""#);

    if format.color.is_none() && format.font.is_none() {
        xml.push_str("/>");
        return Ok(());
    }

    xml.push('>');
    // Schema order: fill before latin typeface
    if let Some(color) = format.color {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
    }
    if let Some(ref font) = format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }
    write!(xml, "</{}>", tag)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::pptx::format::Alignment;

    #[test]
    fn test_text_box_body_properties() {
        let mut frame = TextFrame::for_text_box();
        frame.set_word_wrap(true);
        frame.add_paragraph(Paragraph::new("Ghost Protocol"));

        let mut xml = String::new();
        frame.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
        assert!(xml.contains("<a:t>Ghost Protocol</a:t>"));
    }

    #[test]
    fn test_blank_paragraph_keeps_format() {
        let mut frame = TextFrame::for_text_box();
        frame.add_paragraph(Paragraph::new("").size(18.0));

        let mut xml = String::new();
        frame.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:p><a:endParaRPr lang="en-US" sz="1800" dirty="0"/></a:p>"#));
        assert!(!xml.contains("<a:r>"));
    }

    #[test]
    fn test_paragraph_properties() {
        let mut frame = TextFrame::for_autoshape();
        frame.set_margins(0.5, 0.5);
        frame.add_paragraph(
            Paragraph::new("Products & Services")
                .size(40.0)
                .bold(true)
                .color(RGBColor::new(255, 255, 255))
                .align(Alignment::Center)
                .level(1)
                .spacing(12.0, 0.0),
        );

        let mut xml = String::new();
        frame.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"lIns="457200" rIns="457200""#));
        assert!(xml.contains(r#"anchor="ctr""#));
        assert!(xml.contains(
            r#"<a:pPr lvl="1" algn="ctr"><a:spcBef><a:spcPts val="1200"/></a:spcBef><a:spcAft><a:spcPts val="0"/></a:spcAft></a:pPr>"#
        ));
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="4000" b="1" dirty="0"><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:rPr>"#));
        assert!(xml.contains("<a:t>Products &amp; Services</a:t>"));
    }

    #[test]
    fn test_empty_frame_still_has_paragraph() {
        let frame = TextFrame::for_autoshape();
        let mut xml = String::new();
        frame.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:p>"));
        assert_eq!(frame.text(), "");
    }
}
