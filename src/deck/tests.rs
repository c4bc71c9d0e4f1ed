use super::*;
use crate::config::DeckConfig;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::pptx::{Bounds, SlideText, read_slides, read_slides_from_bytes};
use proptest::prelude::*;

fn deck_slides() -> Vec<SlideText> {
    let bytes = build_deck(&DeckConfig::default()).to_bytes().unwrap();
    read_slides_from_bytes(&bytes).unwrap()
}

fn body_texts(slide: &SlideText) -> Vec<String> {
    let body = slide.shapes.last().unwrap();
    body.paragraphs.iter().map(|p| p.text.clone()).collect()
}

#[test]
fn test_five_slides_in_fixed_order() {
    let slides = deck_slides();
    let titles: Vec<_> = slides.iter().map(|s| s.title().unwrap()).collect();
    assert_eq!(
        titles,
        vec![
            "Ghost Protocol",
            "About Ghost Protocol",
            "Products & Services",
            "Strategic Value",
            "Investment & Engagement Models",
        ]
    );
}

#[test]
fn test_title_slide() {
    let slides = deck_slides();
    let title = &slides[0];

    assert_eq!(title.background, Some(palette::PRIMARY));
    assert_eq!(title.shapes.len(), 2);
    assert_eq!(title.shapes[0].paragraphs.len(), 1);
    assert_eq!(title.shapes[0].paragraphs[0].text, content::TITLE);
    assert_eq!(title.shapes[0].paragraphs[0].size, Some(5400));
    assert!(title.shapes[0].paragraphs[0].bold);
    assert_eq!(title.shapes[1].paragraphs.len(), 1);
    assert_eq!(title.shapes[1].paragraphs[0].text, content::SUBTITLE);
    assert_eq!(title.shapes[1].paragraphs[0].size, Some(2400));
    assert!(!title.shapes[1].paragraphs[0].bold);
}

#[test]
fn test_content_slides_have_header_divider_and_body() {
    let slides = deck_slides();
    let expected = [
        (content::ABOUT_TITLE, content::ABOUT_LINES),
        (content::SERVICES_TITLE, content::SERVICES_LINES),
        (content::VALUE_TITLE, content::VALUE_LINES),
    ];

    for (slide, (title, lines)) in slides[1..4].iter().zip(expected) {
        assert_eq!(slide.background, Some(palette::WHITE));
        assert_eq!(slide.shapes.len(), 3);

        let header = slide.shape("Rectangle 1").unwrap();
        assert_eq!(header.text(), title);
        assert_eq!(header.paragraphs[0].size, Some(4000));
        assert!(header.paragraphs[0].bold);

        assert_eq!(body_texts(slide), lines);
        for para in &slide.shapes[2].paragraphs {
            assert_eq!(para.size, Some(1800));
            assert_eq!(para.level, 0);
            assert!(!para.bold);
        }
    }
}

#[test]
fn test_layout_geometry() {
    let pres = build_deck(&DeckConfig::default());
    assert_eq!(pres.slide_width(), 9_144_000);
    assert_eq!(pres.slide_height(), 6_858_000);

    let title_slide = &pres.slides()[0];
    let title_box = &title_slide.shapes()[0];
    assert_eq!(
        title_box.bounds(),
        Bounds {
            x: 457_200,
            y: 2_286_000,
            width: 8_229_600,
            height: 1_371_600,
        }
    );
    assert!(title_box.text_frame().unwrap().word_wrap());

    let about = &pres.slides()[1];
    assert_eq!(about.background().map(|b| b.color()), Some(palette::WHITE));
    let [header, divider, body] = about.shapes() else {
        panic!("expected header, divider and body");
    };
    assert_eq!(header.bounds(), Bounds { x: 0, y: 0, width: 9_144_000, height: 1_097_280 });
    assert_eq!(header.fill_color(), Some(palette::PRIMARY));
    assert_eq!(header.text_frame().unwrap().margins(), (457_200, 457_200));
    assert_eq!(divider.bounds().height, 45_720);
    assert_eq!(divider.fill_color(), Some(palette::ACCENT));
    assert!(divider.text_frame().is_none());
    assert_eq!(body.bounds().height, 4_572_000);
    assert_eq!(body.text_frame().unwrap().paragraphs().len(), content::ABOUT_LINES.len());

    let pricing_body = &pres.slides()[4].shapes()[2];
    assert_eq!(pricing_body.bounds().height, 4_754_880);
}

#[test]
fn test_blank_lines_preserved() {
    let slides = deck_slides();
    let services = body_texts(&slides[2]);
    assert_eq!(services.len(), 9);
    assert_eq!(services.iter().filter(|t| t.is_empty()).count(), 4);
}

#[test]
fn test_pricing_levels_and_sizes() {
    let slides = deck_slides();
    let pricing = &slides[4];
    let body = &pricing.shapes[2];

    assert_eq!(body_texts(pricing), content::PRICING_LINES);
    for para in &body.paragraphs {
        if para.text.starts_with(INDENT_MARKER) {
            assert_eq!(para.level, 1, "{:?}", para.text);
            assert_eq!(para.size, Some(1500), "{:?}", para.text);
        } else {
            assert_eq!(para.level, 0, "{:?}", para.text);
            assert_eq!(para.size, Some(1600), "{:?}", para.text);
        }
    }
    assert_eq!(body.paragraphs.iter().filter(|p| p.level == 1).count(), 3);
}

#[test]
fn test_rebuild_is_identical() {
    let first = build_deck(&DeckConfig::default()).to_bytes().unwrap();
    let second = build_deck(&DeckConfig::default()).to_bytes().unwrap();

    assert_eq!(
        read_slides_from_bytes(&first).unwrap(),
        read_slides_from_bytes(&second).unwrap()
    );
    assert_eq!(
        PhysPkgReader::new(&first).unwrap().member_names(),
        PhysPkgReader::new(&second).unwrap().member_names()
    );
}

#[test]
fn test_save_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");

    build_deck(&DeckConfig::default()).save(&path).unwrap();
    let slides = read_slides(&path).unwrap();
    assert_eq!(slides.len(), 5);
}

#[test]
fn test_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("deck.pptx");

    assert!(build_deck(&DeckConfig::default()).save(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_summary_lines() {
    let lines = summary_lines(std::path::Path::new("out/deck.pptx"), 5);
    assert_eq!(
        lines,
        [
            "✅ Presentation created successfully: out/deck.pptx",
            "   Slides: 5",
            "   Format: Professional, clean design",
            "   Ready for client presentation",
        ]
    );
}

proptest! {
    #[test]
    fn prop_content_lines_become_paragraphs(
        lines in prop::collection::vec("[ -~•]{0,40}", 0..12)
    ) {
        let mut deck = DeckBuilder::new();
        deck.add_content_slide("Strategic Value", &lines);
        let bytes = deck.finish().to_bytes().unwrap();

        let slides = read_slides_from_bytes(&bytes).unwrap();
        let body = &slides[0].shapes[2];
        let texts: Vec<_> = body.paragraphs.iter().map(|p| p.text.clone()).collect();
        if lines.is_empty() {
            // An empty text body still carries one paragraph
            prop_assert_eq!(texts, vec![String::new()]);
        } else {
            prop_assert_eq!(texts, lines);
        }
    }
}
