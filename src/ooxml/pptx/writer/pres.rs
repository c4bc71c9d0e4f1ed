/// Presentation writer for PPTX.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use chrono::Utc;
use log::{debug, info};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

/// ID of the single slide master in `p:sldMasterIdLst`.
const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// First ID handed out in `p:sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and document properties,
/// and serialize the result as a `.pptx` package.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// `dc:title` of the core properties
    title: String,
    /// `dc:creator` of the core properties
    author: String,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            title: String::new(),
            author: String::new(),
        }
    }

    /// Append a new empty slide and return it.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Set the title and author written to `docProps/core.xml`.
    pub fn set_core_properties(&mut self, title: impl Into<String>, author: impl Into<String>) {
        self.title = title.into();
        self.author = author.into();
    }

    /// Generate presentation.xml content.
    ///
    /// `master_rel_id` and `slide_rel_ids` are the relationship IDs allocated
    /// by the presentation part, one per slide in order.
    pub(crate) fn presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), rel_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);

        xml.push_str("<p:defaultTextStyle>");
        xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
        xml.push_str(r#"<a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#);
        xml.push_str(r#"<a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#);
        xml.push_str(r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr>"#);
        xml.push_str(r#"<a:lvl2pPr marL="457200" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#);
        xml.push_str(r#"<a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#);
        xml.push_str(r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl2pPr>"#);
        xml.push_str("</p:defaultTextStyle>");

        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the complete OPC package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let pres_uri = part_uri("/ppt/presentation.xml")?;
        let master_uri = part_uri("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = part_uri("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme_uri = part_uri("/ppt/theme/theme1.xml")?;
        let pres_props_uri = part_uri("/ppt/presProps.xml")?;
        let view_props_uri = part_uri("/ppt/viewProps.xml")?;
        let table_styles_uri = part_uri("/ppt/tableStyles.xml")?;
        let core_uri = part_uri("/docProps/core.xml")?;
        let app_uri = part_uri("/docProps/app.xml")?;

        // The presentation part's XML embeds its own rIds, so relate first
        // and render afterwards.
        let mut pres_part = BlobPart::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for (index, slide) in self.slides.iter().enumerate() {
            let slide_uri = part_uri(&format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));

            let mut slide_part = BlobPart::from_xml(slide_uri, ct::PML_SLIDE, slide.to_xml()?);
            slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            debug!("rendered slide {} with {} shapes", index + 1, slide.shape_count());
            pkg.add_part(Box::new(slide_part));
        }

        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
        pres_part.set_blob(
            self.presentation_xml(&master_rel_id, &slide_rel_ids)?
                .into_bytes(),
        );
        pkg.add_part(Box::new(pres_part));

        let mut master_part = BlobPart::from_xml(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::SLIDE_MASTER_XML,
        );
        master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme_uri, rt::THEME);
        pkg.add_part(Box::new(master_part));

        let mut layout_part =
            BlobPart::from_xml(layout_uri, ct::PML_SLIDE_LAYOUT, template::BLANK_LAYOUT_XML);
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.add_part(Box::new(layout_part));

        pkg.add_part(Box::new(BlobPart::from_xml(theme_uri, ct::OFC_THEME, template::THEME_XML)));
        pkg.add_part(Box::new(BlobPart::from_xml(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::PRES_PROPS_XML,
        )));
        pkg.add_part(Box::new(BlobPart::from_xml(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::VIEW_PROPS_XML,
        )));
        pkg.add_part(Box::new(BlobPart::from_xml(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::TABLE_STYLES_XML,
        )));

        pkg.add_part(Box::new(BlobPart::from_xml(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            template::core_properties_xml(&self.title, &self.author, Utc::now()),
        )));
        pkg.add_part(Box::new(BlobPart::from_xml(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_properties_xml(self.slides.len()),
        )));

        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(pkg)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let pkg = self.to_package()?;
        Ok(PackageWriter::to_bytes(&pkg)?)
    }

    /// Save the presentation to a `.pptx` file.
    ///
    /// The package is rendered in memory and written with a single call, so
    /// a failure leaves no file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let pkg = self.to_package()?;
        PackageWriter::write(path.as_ref(), &pkg)?;
        info!(
            "saved presentation with {} slides to {}",
            self.slides.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

fn part_uri(uri: &str) -> Result<PackURI> {
    Ok(PackURI::new(uri).map_err(OpcError::InvalidPackUri)?)
}
