//! The Ghost Protocol client deck.
//!
//! [`build_deck`] assembles the five slides in their fixed order: title,
//! about, products and services, strategic value, pricing.
//!
//! ```rust,no_run
//! use ghostdeck::config::DeckConfig;
//! use ghostdeck::deck::build_deck;
//!
//! let config = DeckConfig::default();
//! build_deck(&config).save(&config.output)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod content;
pub mod palette;

#[cfg(test)]
mod tests;

pub use builder::{DeckBuilder, INDENT_MARKER, build_deck, summary_lines};
