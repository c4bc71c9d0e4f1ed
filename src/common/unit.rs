//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU),
//! font sizes in hundredths of a point and paragraph spacing in hundredths of
//! a point as well.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMU.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

/// Convert a point size to the hundredths-of-a-point integer used by
/// `sz` and `spcPts` attributes.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(7.5), 6_858_000);
        assert_eq!(inches(0.05), 45_720);
        assert_eq!(inches(1.2), 1_097_280);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_centipoints(54.0), 5400);
        assert_eq!(pt_to_centipoints(15.0), 1500);
    }
}
