//! Fixed deck colors shared by every slide.
use crate::common::RGBColor;

/// Deep navy: title slide background and header bars.
pub const PRIMARY: RGBColor = RGBColor::new(15, 23, 42);
/// Professional blue: subtitle and divider.
pub const ACCENT: RGBColor = RGBColor::new(59, 130, 246);
/// Dark gray body text.
pub const TEXT: RGBColor = RGBColor::new(51, 65, 85);
/// Very light blue. Part of the palette; no slide currently fills with it.
pub const LIGHT_BG: RGBColor = RGBColor::new(248, 250, 252);
pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex() {
        assert_eq!(PRIMARY.to_hex(), "0F172A");
        assert_eq!(ACCENT.to_hex(), "3B82F6");
        assert_eq!(TEXT.to_hex(), "334155");
        assert_eq!(LIGHT_BG.to_hex(), "F8FAFC");
        assert_eq!(WHITE.to_hex(), "FFFFFF");
    }
}
