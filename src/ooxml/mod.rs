//! Office Open XML (OOXML) support.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): package handling (ZIP, parts, relationships,
//!    content types)
//! 2. **PresentationML** (`pptx`): the mutable presentation model, its XML
//!    writers and a read-back inspector for written decks
//!
//! # Example
//!
//! ```rust,no_run
//! use ghostdeck::ooxml::pptx::{MutablePresentation, Paragraph};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide
//!     .add_text_box(457_200, 457_200, 8_229_600, 914_400)
//!     .text_frame_mut()
//!     .add_paragraph(Paragraph::new("Hello"));
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
