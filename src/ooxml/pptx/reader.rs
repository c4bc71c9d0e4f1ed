//! Read-back inspector for written presentations.
//!
//! Opens a `.pptx` package and extracts, per slide, the background color and
//! the text of every shape along with the paragraph level, font size and
//! bold flag. Slides are returned in presentation order, resolved through
//! `p:sldIdLst` and the presentation relationships.
use crate::common::RGBColor;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::path::Path;

/// Text content of one slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideText {
    /// Solid background color, if the slide defines one
    pub background: Option<RGBColor>,
    /// Shapes in document order
    pub shapes: Vec<ShapeText>,
}

impl SlideText {
    /// Text of the first non-empty paragraph on the slide.
    ///
    /// Every slide in a deck starts with its title, so this is the slide title.
    pub fn title(&self) -> Option<&str> {
        self.shapes
            .iter()
            .flat_map(|s| s.paragraphs.iter())
            .map(|p| p.text.as_str())
            .find(|t| !t.is_empty())
    }

    /// Find a shape by its `cNvPr` name.
    pub fn shape(&self, name: &str) -> Option<&ShapeText> {
        self.shapes.iter().find(|s| s.name == name)
    }
}

/// Text content of one shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeText {
    /// Shape name from `p:cNvPr`
    pub name: String,
    /// Paragraphs of the shape's text body
    pub paragraphs: Vec<ParagraphText>,
}

impl ShapeText {
    /// Paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One paragraph with the run properties of its first run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphText {
    pub text: String,
    /// Indentation level (`a:pPr/@lvl`)
    pub level: u8,
    /// Font size in hundredths of a point
    pub size: Option<u32>,
    pub bold: bool,
}

/// Read every slide of the presentation at `path`.
pub fn read_slides<P: AsRef<Path>>(path: P) -> Result<Vec<SlideText>> {
    let bytes = std::fs::read(path.as_ref())?;
    read_slides_from_bytes(&bytes)
}

/// Read every slide of an in-memory presentation package.
pub fn read_slides_from_bytes(bytes: &[u8]) -> Result<Vec<SlideText>> {
    let mut pkg = PhysPkgReader::new(bytes)?;

    let pkg_rels_uri = pack_uri("/_rels/.rels")?;
    let pkg_rels = parse_rels(&pkg.blob_for(&pkg_rels_uri)?)?;
    let main_target = pkg_rels
        .iter()
        .find(|(_, (reltype, _))| reltype == rt::OFFICE_DOCUMENT)
        .map(|(_, (_, target))| target.clone())
        .ok_or_else(|| OpcError::RelationshipNotFound(rt::OFFICE_DOCUMENT.to_string()))?;
    let pres_uri =
        PackURI::from_rel_ref(PACKAGE_URI, &main_target).map_err(OpcError::InvalidPackUri)?;

    let pres_rels_uri = pres_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
    let pres_rels = parse_rels(&pkg.blob_for(&pres_rels_uri)?)?;
    let slide_rel_ids = parse_slide_id_list(&pkg.blob_for(&pres_uri)?)?;

    let mut slides = Vec::with_capacity(slide_rel_ids.len());
    for r_id in slide_rel_ids {
        let (_, target) = pres_rels
            .get(&r_id)
            .ok_or_else(|| OpcError::RelationshipNotFound(r_id.clone()))?;
        let slide_uri =
            PackURI::from_rel_ref(pres_uri.base_uri(), target).map_err(OpcError::InvalidPackUri)?;
        slides.push(parse_slide(&pkg.blob_for(&slide_uri)?)?);
    }

    Ok(slides)
}

fn pack_uri(uri: &str) -> Result<PackURI> {
    Ok(PackURI::new(uri).map_err(OpcError::InvalidPackUri)?)
}

/// Value of the attribute with the given qualified name.
fn attr_value(e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            let value =
                std::str::from_utf8(&attr.value).map_err(|e| OoxmlError::Xml(e.to_string()))?;
            return Ok(Some(unescape_xml(value)));
        }
    }
    Ok(None)
}

/// Parse a relationships part into `rId -> (type, target)`.
fn parse_rels(xml: &[u8]) -> Result<HashMap<String, (String, String)>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut rels = HashMap::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"Relationship" {
                    let id = attr_value(&e, b"Id")?;
                    let reltype = attr_value(&e, b"Type")?;
                    let target = attr_value(&e, b"Target")?;
                    if let (Some(id), Some(reltype), Some(target)) = (id, reltype, target) {
                        rels.insert(id, (reltype, target));
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(rels)
}

/// Collect the `r:id` of every `p:sldId`, in list order.
fn parse_slide_id_list(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut ids = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"sldId"
                    && let Some(r_id) = attr_value(&e, b"r:id")?
                {
                    ids.push(r_id);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(ids)
}

/// Read the `lvl` attribute of `a:pPr` into a paragraph.
fn apply_level(e: &BytesStart, para: &mut ParagraphText) -> Result<()> {
    if let Some(lvl) = attr_value(e, b"lvl")? {
        para.level = lvl
            .parse::<u8>()
            .map_err(|err| OoxmlError::Xml(format!("Invalid paragraph level: {}", err)))?;
    }
    Ok(())
}

/// Read `sz` and `b` run attributes into a paragraph.
fn apply_run_props(e: &BytesStart, para: &mut ParagraphText) -> Result<()> {
    if para.size.is_none()
        && let Some(sz) = attr_value(e, b"sz")?
    {
        para.size = Some(
            sz.parse::<u32>()
                .map_err(|err| OoxmlError::Xml(format!("Invalid font size: {}", err)))?,
        );
        para.bold = attr_value(e, b"b")?.is_some_and(|b| b == "1" || b == "true");
    }
    Ok(())
}

/// Parse one slide part.
fn parse_slide(xml: &[u8]) -> Result<SlideText> {
    let mut reader = Reader::from_reader(xml);
    // Whitespace inside a:t is content; blank lines and indents must survive.
    reader.config_mut().trim_text(false);

    let mut slide = SlideText::default();
    let mut shape: Option<ShapeText> = None;
    let mut para: Option<ParagraphText> = None;
    let mut in_bg = false;
    let mut in_text = false;
    let mut raw_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"bg" => in_bg = true,
                b"sp" => shape = Some(ShapeText::default()),
                b"p" if shape.is_some() => para = Some(ParagraphText::default()),
                b"pPr" => {
                    if let Some(p) = para.as_mut() {
                        apply_level(&e, p)?;
                    }
                },
                b"rPr" | b"endParaRPr" => {
                    if let Some(p) = para.as_mut() {
                        apply_run_props(&e, p)?;
                    }
                },
                b"t" if para.is_some() => {
                    in_text = true;
                    raw_text.clear();
                },
                _ => {},
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"cNvPr" => {
                    if let Some(s) = shape.as_mut() {
                        s.name = attr_value(&e, b"name")?.unwrap_or_default();
                    }
                },
                b"srgbClr" if in_bg && slide.background.is_none() => {
                    slide.background = attr_value(&e, b"val")?.and_then(|v| RGBColor::from_hex(&v));
                },
                b"p" => {
                    if let Some(s) = shape.as_mut() {
                        s.paragraphs.push(ParagraphText::default());
                    }
                },
                b"pPr" => {
                    if let Some(p) = para.as_mut() {
                        apply_level(&e, p)?;
                    }
                },
                b"rPr" | b"endParaRPr" => {
                    if let Some(p) = para.as_mut() {
                        apply_run_props(&e, p)?;
                    }
                },
                _ => {},
            },
            Ok(Event::Text(e)) if in_text => {
                let t = std::str::from_utf8(e.as_ref())
                    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                raw_text.push_str(t);
            },
            Ok(Event::GeneralRef(e)) if in_text => {
                let name = std::str::from_utf8(e.as_ref())
                    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                raw_text.push('&');
                raw_text.push_str(name);
                raw_text.push(';');
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"bg" => in_bg = false,
                b"t" if in_text => {
                    in_text = false;
                    if let Some(p) = para.as_mut() {
                        p.text.push_str(&unescape_xml(&raw_text));
                    }
                },
                b"p" => {
                    if let (Some(s), Some(p)) = (shape.as_mut(), para.take()) {
                        s.paragraphs.push(p);
                    }
                },
                b"sp" => {
                    if let Some(s) = shape.take() {
                        slide.shapes.push(s);
                    }
                },
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(slide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::backgrounds::SlideBackground;
    use crate::ooxml::pptx::format::Paragraph;
    use crate::ooxml::pptx::writer::MutablePresentation;

    fn sample() -> Vec<u8> {
        let mut pres = MutablePresentation::new();

        let first = pres.add_slide();
        first.set_background(SlideBackground::solid(RGBColor::new(15, 23, 42)));
        first
            .add_text_box(0, 0, 914400, 914400)
            .text_frame_mut()
            .add_paragraph(Paragraph::new("Products & Services").size(40.0).bold(true));

        let second = pres.add_slide();
        let frame = second.add_text_box(0, 0, 914400, 914400).text_frame_mut();
        frame.add_paragraph(Paragraph::new("• <Tier 1>").size(16.0));
        frame.add_paragraph(Paragraph::new("").size(16.0));
        frame.add_paragraph(Paragraph::new("  - nested").size(15.0).level(1));

        pres.to_bytes().unwrap()
    }

    #[test]
    fn test_slides_in_order_with_background() {
        let slides = read_slides_from_bytes(&sample()).unwrap();
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title(), Some("Products & Services"));
        assert_eq!(slides[0].background, Some(RGBColor::new(15, 23, 42)));
        assert_eq!(slides[1].background, None);
    }

    #[test]
    fn test_paragraph_properties() {
        let slides = read_slides_from_bytes(&sample()).unwrap();

        let title = &slides[0].shapes[0].paragraphs[0];
        assert_eq!(title.size, Some(4000));
        assert!(title.bold);

        let body = &slides[1].shapes[0];
        assert_eq!(body.name, "TextBox 1");
        assert_eq!(body.paragraphs.len(), 3);
        assert_eq!(body.paragraphs[0].text, "• <Tier 1>");
        assert_eq!(body.paragraphs[1].text, "");
        assert_eq!(body.paragraphs[1].size, Some(1600));
        assert_eq!(body.paragraphs[2].text, "  - nested");
        assert_eq!(body.paragraphs[2].level, 1);
        assert_eq!(body.paragraphs[2].size, Some(1500));
    }

    #[test]
    fn test_malformed_level_is_an_error() {
        let xml = br#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree><p:sp><p:txBody><a:p><a:pPr lvl="x"/><a:r><a:t>line</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#;
        let err = parse_slide(xml).unwrap_err();
        assert!(err.to_string().contains("Invalid paragraph level"));

        let ok = br#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree><p:sp><p:txBody><a:p><a:pPr lvl="2"/><a:r><a:t>line</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#;
        let slide = parse_slide(ok).unwrap();
        assert_eq!(slide.shapes[0].paragraphs[0].level, 2);
    }

    #[test]
    fn test_not_a_package() {
        assert!(read_slides_from_bytes(b"not a zip").is_err());
    }
}
