//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod textframe;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{Bounds, MutableShape};
pub use slide::MutableSlide;
pub use textframe::TextFrame;
