//! Open Packaging Convention (OPC) parts.
//!
//! Parts are the units of content in an OPC package, each with a unique
//! partname, a content type, and optional relationships to other parts.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// Trait representing a part in an OPC package.
pub trait Part {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the serialized content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part and return its rId.
    ///
    /// The target is given as an absolute partname and stored relative to
    /// this part's directory.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname().base_uri());
        let rel = self.rels_mut().get_or_add(reltype, &target_ref);
        rel.r_id().to_string()
    }
}

/// A part holding an already-serialized blob.
///
/// Every part the presentation writer produces is XML rendered up front, so a
/// single blob-backed implementation covers them all.
#[derive(Debug, Clone)]
pub struct BlobPart {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The serialized content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl BlobPart {
    /// Create a new BlobPart.
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels,
        }
    }

    /// Create a part from an XML string.
    pub fn from_xml(
        partname: PackURI,
        content_type: impl Into<String>,
        xml: impl Into<String>,
    ) -> Self {
        Self::new(partname, content_type, xml.into().into_bytes())
    }

    /// Replace the serialized content.
    ///
    /// Used when the content depends on relationship IDs allocated after the
    /// part was created.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relate_to_uses_relative_target() {
        let mut slide = BlobPart::from_xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            "application/xml",
            "<p:sld/>",
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();

        let r_id = slide.relate_to(&layout, "layout");
        assert_eq!(r_id, "rId1");

        let rel = slide.rels().get("rId1").unwrap();
        assert_eq!(rel.target_ref(), "../slideLayouts/slideLayout1.xml");
        assert_eq!(rel.target_partname().unwrap(), layout);
    }
}
