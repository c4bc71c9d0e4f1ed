use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// DrawingML writes colors as six hex digits in `<a:srgbClr val="..."/>`.
///
/// # Examples
///
/// ```rust
/// use ghostdeck::common::RGBColor;
///
/// let navy = RGBColor::new(15, 23, 42);
/// assert_eq!(navy.to_hex(), "0F172A");
///
/// let blue = RGBColor::from_hex("#3B82F6").unwrap();
/// assert_eq!(blue, RGBColor::new(59, 130, 246));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string ("FF0000" or "#FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an uppercase hex string without the `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        assert_eq!(RGBColor::new(248, 250, 252).to_hex(), "F8FAFC");
        assert_eq!(RGBColor::from_hex("334155"), Some(RGBColor::new(51, 65, 85)));
        assert_eq!(RGBColor::new(255, 255, 255).to_string(), "#FFFFFF");
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("ÿÿÿ"), None);
    }
}
