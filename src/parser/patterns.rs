//! Regex patterns and the font catalog used to read brand documents.

use lazy_static::lazy_static;
use regex::Regex;

/// Common type families recognized in guideline text.
pub const FONT_CATALOG: &[&str] = &[
    "Inter",
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Poppins",
    "Source Sans Pro",
    "Raleway",
    "Nunito",
    "Playfair Display",
    "Merriweather",
    "Helvetica Neue",
    "Helvetica",
    "Arial",
    "Georgia",
    "Times New Roman",
    "Futura",
    "Gotham",
    "Avenir",
    "Proxima Nova",
    "SF Pro",
    "Work Sans",
    "DM Sans",
    "IBM Plex Sans",
    "Noto Sans",
    "Ubuntu",
    "Oswald",
    "PT Sans",
    "Manrope",
    "Space Grotesk",
    "Garamond",
    "Verdana",
];

lazy_static! {
    /// `#` followed by 6 or 3 hex digits, word-bounded
    pub static ref HEX_COLOR_PATTERN: Regex =
        Regex::new(r"#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b").unwrap();

    /// `rgb(r, g, b)` with integer channels
    pub static ref RGB_COLOR_PATTERN: Regex =
        Regex::new(r"(?i)\brgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)").unwrap();

    /// Number followed by a CSS length unit; not a fractional tail like `.5rem`
    pub static ref FONT_SIZE_PATTERN: Regex =
        Regex::new(r"(?i)(?:^|[^\w.])(\d+(?:\.\d+)?)\s*(px|pt|rem|em)\b").unwrap();

    /// Explicit spacing scale, e.g. `spacing: 4, 8, 16`; `letter-spacing` is not a scale
    pub static ref SPACING_SCALE_PATTERN: Regex = Regex::new(
        r"(?i)(?:^|[^\w-])spacing(?:\s+scale)?\s*[:=]\s*(\d+(?:\s*px)?(?:\s*,\s*\d+(?:\s*px)?)*)"
    )
    .unwrap();

    /// `margin: n` / `padding-left: n`
    pub static ref MARGIN_PADDING_PATTERN: Regex =
        Regex::new(r"(?i)\b(?:margin|padding)(?:-(?:top|right|bottom|left))?\s*:\s*(\d+)").unwrap();

    pub static ref MIN_WIDTH_PATTERN: Regex =
        Regex::new(r"(?i)\bmin(?:imum)?[\s-]*width\s*[:=]?\s*(\d+)").unwrap();

    pub static ref MIN_HEIGHT_PATTERN: Regex =
        Regex::new(r"(?i)\bmin(?:imum)?[\s-]*height\s*[:=]?\s*(\d+)").unwrap();

    pub static ref INTEGER_PATTERN: Regex = Regex::new(r"\d+").unwrap();

    /// Catalog families paired with their compiled matchers
    pub static ref FONT_PATTERNS: Vec<(&'static str, Regex)> = FONT_CATALOG
        .iter()
        .map(|family| (*family, font_pattern(family).unwrap()))
        .collect();
}

/// Case-insensitive, word-bounded matcher for a family name; any run of
/// whitespace may separate its words.
pub fn font_pattern(family: &str) -> Result<Regex, regex::Error> {
    let words: Vec<String> = family.split_whitespace().map(regex::escape).collect();
    Regex::new(&format!(r"(?i)\b{}\b", words.join(r"\s+")))
}
