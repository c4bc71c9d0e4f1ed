/// Open Packaging Conventions (OPC) write support.
///
/// This module provides the package model used to serialize a presentation:
///
/// - Package structure (parts, relationships)
/// - Content type management (`[Content_Types].xml`)
/// - ZIP-based physical packaging
///
/// Parts are kept in a sorted map so that a package always serializes its
/// members in the same order.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
