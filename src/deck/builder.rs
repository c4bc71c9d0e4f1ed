//! Slide assembly for the Ghost Protocol deck.
use crate::common::RGBColor;
use crate::common::unit::inches;
use crate::config::DeckConfig;
use crate::ooxml::pptx::{
    Alignment, MutablePresentation, MutableSlide, Paragraph, SlideBackground, TextAnchor,
};
use log::debug;
use std::path::Path;

use super::content;
use super::palette::{ACCENT, PRIMARY, TEXT, WHITE};

/// Lines starting with this marker are pricing detail lines.
pub const INDENT_MARKER: &str = "  ";

/// Appends styled slides to a 10" x 7.5" presentation.
#[derive(Debug)]
pub struct DeckBuilder {
    pres: MutablePresentation,
}

impl DeckBuilder {
    /// Create a builder over an empty presentation.
    pub fn new() -> Self {
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(inches(10.0));
        pres.set_slide_height(inches(7.5));
        Self { pres }
    }

    /// Set the document title and author.
    pub fn with_properties(mut self, title: &str, author: &str) -> Self {
        self.pres.set_core_properties(title, author);
        self
    }

    /// Dark slide with a large centered title and an accent subtitle.
    pub fn add_title_slide(&mut self, title: &str, subtitle: &str) -> &mut MutableSlide {
        let slide = self.pres.add_slide();
        slide.set_background(SlideBackground::solid(PRIMARY));

        slide
            .add_text_box(inches(0.5), inches(2.5), inches(9.0), inches(1.5))
            .text_frame_mut()
            .set_word_wrap(true)
            .add_paragraph(
                Paragraph::new(title)
                    .size(54.0)
                    .bold(true)
                    .color(WHITE)
                    .align(Alignment::Center),
            );

        slide
            .add_text_box(inches(0.5), inches(4.2), inches(9.0), inches(2.0))
            .text_frame_mut()
            .set_word_wrap(true)
            .add_paragraph(
                Paragraph::new(subtitle)
                    .size(24.0)
                    .bold(false)
                    .color(ACCENT)
                    .align(Alignment::Center),
            );

        debug!("added title slide {:?}", title);
        slide
    }

    /// White slide with a header bar, a divider and one body paragraph per line.
    pub fn add_content_slide<S: AsRef<str>>(
        &mut self,
        title: &str,
        lines: &[S],
    ) -> &mut MutableSlide {
        let slide = self.pres.add_slide();
        add_header(slide, title);

        let frame = slide
            .add_text_box(inches(0.7), inches(1.8), inches(8.6), inches(5.0))
            .text_frame_mut()
            .set_word_wrap(true);
        for line in lines {
            frame.add_paragraph(body_paragraph(line.as_ref(), 18.0, 0, 6.0));
        }

        debug!("added content slide {:?} with {} lines", title, lines.len());
        slide
    }

    /// Content slide variant with per-line sizing.
    ///
    /// Lines starting with [`INDENT_MARKER`] are 15 pt at level 1; all other
    /// lines are 16 pt at level 0.
    pub fn add_pricing_slide<S: AsRef<str>>(
        &mut self,
        title: &str,
        lines: &[S],
    ) -> &mut MutableSlide {
        let slide = self.pres.add_slide();
        add_header(slide, title);

        let frame = slide
            .add_text_box(inches(0.7), inches(1.8), inches(8.6), inches(5.2))
            .text_frame_mut()
            .set_word_wrap(true);
        for line in lines {
            let line = line.as_ref();
            let paragraph = if line.starts_with(INDENT_MARKER) {
                body_paragraph(line, 15.0, 1, 4.0)
            } else {
                body_paragraph(line, 16.0, 0, 4.0)
            };
            frame.add_paragraph(paragraph);
        }

        debug!("added pricing slide {:?} with {} lines", title, lines.len());
        slide
    }

    /// Number of slides added so far.
    pub fn slide_count(&self) -> usize {
        self.pres.slide_count()
    }

    /// Finish building and return the presentation.
    pub fn finish(self) -> MutablePresentation {
        self.pres
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// White background, full-width header bar holding the title, accent divider.
fn add_header(slide: &mut MutableSlide, title: &str) {
    slide.set_background(SlideBackground::solid(WHITE));

    let header = slide.add_rectangle(0, 0, inches(10.0), inches(1.2), Some(PRIMARY));
    header.set_line_color(PRIMARY);
    header
        .text_frame_mut()
        .set_margins(0.5, 0.5)
        .set_anchor(TextAnchor::Middle)
        .add_paragraph(
            Paragraph::new(title)
                .size(40.0)
                .bold(true)
                .color(WHITE)
                .align(Alignment::Center)
                .spacing(12.0, 0.0),
        );

    add_rule(slide, ACCENT);
}

fn add_rule(slide: &mut MutableSlide, color: RGBColor) {
    slide
        .add_rectangle(inches(0.5), inches(1.3), inches(9.0), inches(0.05), Some(color))
        .set_line_color(color);
}

fn body_paragraph(text: &str, size: f64, level: u8, spacing: f64) -> Paragraph {
    Paragraph::new(text)
        .size(size)
        .bold(false)
        .color(TEXT)
        .level(level)
        .spacing(spacing, spacing)
}

/// Build the complete five-slide deck.
pub fn build_deck(config: &DeckConfig) -> MutablePresentation {
    let mut deck = DeckBuilder::new().with_properties(&config.title, &config.author);

    deck.add_title_slide(content::TITLE, content::SUBTITLE);
    deck.add_content_slide(content::ABOUT_TITLE, content::ABOUT_LINES);
    deck.add_content_slide(content::SERVICES_TITLE, content::SERVICES_LINES);
    deck.add_content_slide(content::VALUE_TITLE, content::VALUE_LINES);
    deck.add_pricing_slide(content::PRICING_TITLE, content::PRICING_LINES);

    deck.finish()
}

/// The four lines printed after the deck is written.
pub fn summary_lines(output: &Path, slide_count: usize) -> [String; 4] {
    [
        format!("✅ Presentation created successfully: {}", output.display()),
        format!("   Slides: {}", slide_count),
        "   Format: Professional, clean design".to_string(),
        "   Ready for client presentation".to_string(),
    ]
}
