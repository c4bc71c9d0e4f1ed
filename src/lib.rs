//! ghostdeck - builds the Ghost Protocol client presentation.
//!
//! The crate is split into three layers:
//!
//! - **`ooxml`**: a write-side PresentationML library. `ooxml::opc` assembles
//!   and zips OPC packages; `ooxml::pptx` models presentations, slides,
//!   shapes and text and can read the text of a written deck back.
//! - **`deck`**: the five fixed slides, their palette and their content.
//! - **`config`**: output path and document properties, loadable from YAML.
//!
//! # Example
//!
//! ```no_run
//! use ghostdeck::config::DeckConfig;
//! use ghostdeck::deck::build_deck;
//! use ghostdeck::ooxml::pptx::read_slides;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeckConfig::default().with_output("deck.pptx");
//! let pres = build_deck(&config);
//! pres.save(&config.output)?;
//!
//! for slide in read_slides(&config.output)? {
//!     println!("{}", slide.title().unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod config;
pub mod deck;
pub mod ooxml;

pub use common::{Error, Result};
