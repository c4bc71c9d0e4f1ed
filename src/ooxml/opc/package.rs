//! In-memory OPC package.
//!
//! OpcPackage holds package-level relationships and every part that will be
//! written. It is assembled by a format writer and handed to
//! [`PackageWriter`](super::pkgwriter::PackageWriter) for serialization.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;

/// Main API type for assembling OPC packages.
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, ordered by partname
    parts: BTreeMap<PackURI, Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: BTreeMap::new(),
        }
    }

    /// Add a new part to the package, replacing any part with the same name.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        self.parts.insert(part.partname().clone(), part);
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .get(partname)
            .map(|b| &**b as &dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Check if a part exists in the package.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname)
    }

    /// Iterate over all parts in partname order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|b| &**b as &dyn Part)
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part and return the relationship ID.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        let rel = self.rels.get_or_add(reltype, partname.membername());
        rel.r_id().to_string()
    }

    /// Get the part targeted by the package-level relationship of the given type.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&dyn Part> {
        let rel = self.rels.part_with_reltype(reltype)?;
        let partname = rel.target_partname()?;
        self.get_part(&partname)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
    use crate::ooxml::opc::part::BlobPart;

    #[test]
    fn test_main_part_lookup() {
        let mut pkg = OpcPackage::new();
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(Box::new(BlobPart::from_xml(
            partname.clone(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>",
        )));
        let r_id = pkg.relate_to(&partname, rt::OFFICE_DOCUMENT);

        assert_eq!(r_id, "rId1");
        assert_eq!(pkg.part_count(), 1);
        let main = pkg.part_by_reltype(rt::OFFICE_DOCUMENT).unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        let partname = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert!(!pkg.contains_part(&partname));
        assert!(matches!(pkg.get_part(&partname), Err(OpcError::PartNotFound(_))));
    }
}
