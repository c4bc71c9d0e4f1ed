//! XML helpers shared by the part writers and the package inspector.

mod escape;

pub use escape::{escape_xml, unescape_xml};
