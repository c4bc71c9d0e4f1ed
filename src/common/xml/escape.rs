use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Built once on first use, shared across threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so "&amp;lt;" resolves the "&amp;" first
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use ghostdeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Products & Services"), "Products &amp; Services");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use ghostdeck::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("Time &amp; Materials"), "Time & Materials");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_bullets_alone() {
        let line = "• Time & Materials (T&M)";
        assert_eq!(escape_xml(line), "• Time &amp; Materials (T&amp;M)");
    }

    #[test]
    fn test_unescape_reverses_escape() {
        let line = r#"<"Project" & 'Retainer'>"#;
        assert_eq!(unescape_xml(&escape_xml(line)), line);
    }
}
