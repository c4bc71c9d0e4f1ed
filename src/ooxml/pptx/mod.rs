//! PowerPoint (.pptx) presentation support.
//!
//! This module writes Microsoft PowerPoint presentations in the Office Open
//! XML (OOXML) format and reads back the text of written files.
//!
//! - `writer`: mutable presentation, slides, shapes and text frames
//! - `format`: paragraph and run formatting
//! - `backgrounds`: slide background fills
//! - `template`: the fixed master, layout, theme and property parts
//! - `reader`: slide-by-slide text inspector
//!
//! # Example
//!
//! ```rust,no_run
//! use ghostdeck::ooxml::pptx::{reader, MutablePresentation, Paragraph};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide()
//!     .add_text_box(457_200, 457_200, 8_229_600, 914_400)
//!     .text_frame_mut()
//!     .add_paragraph(Paragraph::new("Strategic Value").size(40.0).bold(true));
//! pres.save("deck.pptx")?;
//!
//! for slide in reader::read_slides("deck.pptx")? {
//!     println!("{:?}", slide.title());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod reader;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{Alignment, Paragraph, TextAnchor, TextFormat};
pub use reader::{ParagraphText, ShapeText, SlideText, read_slides, read_slides_from_bytes};
pub use writer::{Bounds, MutablePresentation, MutableShape, MutableSlide, TextFrame};
