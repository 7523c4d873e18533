//! Single-pass extractors over guideline text.
//!
//! Each extractor is independent; the parser composes them and applies the
//! defaulting policy afterwards.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{debug, warn};

use crate::color::{normalize_hex, rgb_to_hex};
use crate::types::guidelines::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::types::{BrandColor, ColorSource, Dimensions, FontFace};

use super::patterns::{
    font_pattern, FONT_PATTERNS, FONT_SIZE_PATTERN, HEX_COLOR_PATTERN, INTEGER_PATTERN,
    MARGIN_PADDING_PATTERN, MIN_HEIGHT_PATTERN, MIN_WIDTH_PATTERN, RGB_COLOR_PATTERN,
    SPACING_SCALE_PATTERN,
};

/// Label used when no descriptive text precedes a color.
pub const DEFAULT_COLOR_LABEL: &str = "Color";

/// Label given to colors pulled from document images.
pub const EXTRACTED_COLOR_LABEL: &str = "Image Color";

const PT_TO_PX: f64 = 1.333;
const REM_TO_PX: f64 = 16.0;
const MIN_MARGIN_PADDING: u32 = 4;
const MAX_MARGIN_PADDING: u32 = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelLookupError {
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
    #[error("no descriptive text precedes the color")]
    NoLabel,
}

/// Reads up to `window` word/space/hyphen characters immediately before
/// `offset` on the same line, skipping `:`/`=` separators.
pub fn label_before(content: &str, offset: usize, window: usize) -> Result<String, LabelLookupError> {
    let before = content
        .get(..offset)
        .ok_or(LabelLookupError::NotCharBoundary(offset))?;
    let line = before.rsplit('\n').next().unwrap_or_default();
    let trimmed =
        line.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '=' | '('));

    let mut tail: Vec<char> = trimmed
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ' ' | '\t'))
        .take(window)
        .collect();
    tail.reverse();

    let label: String = tail.into_iter().collect();
    let label = label.trim().trim_matches('-').trim();
    if label.chars().any(char::is_alphabetic) {
        Ok(label.to_string())
    } else {
        Err(LabelLookupError::NoLabel)
    }
}

/// Label lookup with the per-match fallback: a failed lookup for one color
/// yields the default label and never aborts extraction.
fn label_or_default(content: &str, offset: usize, window: usize) -> String {
    label_before(content, offset, window).unwrap_or_else(|err| {
        debug!(offset, error = %err, "color label lookup fell back to default");
        DEFAULT_COLOR_LABEL.to_string()
    })
}

fn contains_hex(colors: &[BrandColor], hex: &str) -> bool {
    colors.iter().any(|c| c.hex.eq_ignore_ascii_case(hex))
}

/// `#RGB` / `#RRGGBB` codes, deduplicated case-insensitively.
pub fn extract_hex_colors(content: &str, window: usize, colors: &mut Vec<BrandColor>) {
    for m in HEX_COLOR_PATTERN.find_iter(content) {
        let Some(hex) = normalize_hex(m.as_str()) else {
            continue;
        };
        if contains_hex(colors, &hex) {
            continue;
        }
        colors.push(BrandColor {
            name: label_or_default(content, m.start(), window),
            hex,
            source: ColorSource::Text,
        });
    }
}

/// `rgb(r, g, b)` triples; skipped when out of range or already present.
pub fn extract_rgb_colors(content: &str, window: usize, colors: &mut Vec<BrandColor>) {
    for caps in RGB_COLOR_PATTERN.captures_iter(content) {
        let channel = |i: usize| caps[i].parse::<u8>().ok();
        let (Some(r), Some(g), Some(b)) = (channel(1), channel(2), channel(3)) else {
            debug!(value = &caps[0], "skipping rgb() color with channel above 255");
            continue;
        };
        let hex = rgb_to_hex(r, g, b);
        if contains_hex(colors, &hex) {
            continue;
        }
        let start = caps.get(0).map(|m| m.start()).unwrap_or_default();
        colors.push(BrandColor {
            name: label_or_default(content, start, window),
            hex,
            source: ColorSource::Text,
        });
    }
}

/// Appends colors found by the external image-extraction step.
pub fn merge_extracted_colors(extracted: &[String], colors: &mut Vec<BrandColor>) {
    for raw in extracted {
        let Some(hex) = normalize_hex(raw) else {
            warn!(value = %raw, "skipping malformed extracted color");
            continue;
        };
        if contains_hex(colors, &hex) {
            continue;
        }
        colors.push(BrandColor {
            name: EXTRACTED_COLOR_LABEL.to_string(),
            hex,
            source: ColorSource::PdfImage,
        });
    }
}

/// Font families mentioned in the text, ordered by first mention.
///
/// `extra_fonts` are checked alongside the built-in catalog; compiling their
/// matchers is the only fallible step.
pub fn extract_fonts(content: &str, extra_fonts: &[String]) -> Result<Vec<FontFace>, regex::Error> {
    let mut hits: Vec<(usize, String)> = Vec::new();

    for family in extra_fonts {
        if family.trim().is_empty() {
            continue;
        }
        if let Some(m) = font_pattern(family)?.find(content) {
            hits.push((m.start(), family.trim().to_string()));
        }
    }
    for (family, pattern) in FONT_PATTERNS.iter() {
        if let Some(m) = pattern.find(content) {
            hits.push((m.start(), (*family).to_string()));
        }
    }

    hits.sort_by_key(|(pos, _)| *pos);

    let mut fonts: Vec<FontFace> = Vec::new();
    for (_, family) in hits {
        if !fonts.iter().any(|f| f.family.eq_ignore_ascii_case(&family)) {
            fonts.push(FontFace { family });
        }
    }
    Ok(fonts)
}

/// Converts a length with unit to whole pixels.
pub fn to_px(value: f64, unit: &str) -> Option<u32> {
    let px = match unit.to_ascii_lowercase().as_str() {
        "px" => value,
        "pt" => value * PT_TO_PX,
        "rem" | "em" => value * REM_TO_PX,
        _ => return None,
    };
    let rounded = px.round();
    (rounded >= 0.0 && rounded <= u32::MAX as f64).then_some(rounded as u32)
}

/// Font sizes in px within the accepted range, ascending and deduplicated.
pub fn extract_font_sizes(content: &str) -> Vec<u32> {
    let mut sizes = BTreeSet::new();
    for caps in FONT_SIZE_PATTERN.captures_iter(content) {
        let Ok(value) = caps[1].parse::<f64>() else {
            continue;
        };
        if let Some(px) = to_px(value, &caps[2]) {
            if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&px) {
                sizes.insert(px);
            }
        }
    }
    sizes.into_iter().collect()
}

/// Spacing scale from an explicit list plus margin/padding values.
///
/// Returns an empty vector when nothing is found; the caller applies the
/// default scale.
pub fn extract_spacing_scale(content: &str) -> Vec<u32> {
    let mut scale = BTreeSet::new();

    if let Some(caps) = SPACING_SCALE_PATTERN.captures(content) {
        for m in INTEGER_PATTERN.find_iter(&caps[1]) {
            match m.as_str().parse::<u32>() {
                Ok(v) if v > 0 => {
                    scale.insert(v);
                }
                _ => {}
            }
        }
    }

    for caps in MARGIN_PADDING_PATTERN.captures_iter(content) {
        if let Ok(v) = caps[1].parse::<u32>() {
            if (MIN_MARGIN_PADDING..=MAX_MARGIN_PADDING).contains(&v) {
                scale.insert(v);
            }
        }
    }

    scale.into_iter().collect()
}

/// First `min width` / `min height` values, if any.
pub fn extract_min_dimensions(content: &str) -> Option<Dimensions> {
    let first = |pattern: &regex::Regex| {
        pattern
            .captures(content)
            .and_then(|caps| caps[1].parse::<u32>().ok())
    };
    let dims = Dimensions {
        min_width: first(&MIN_WIDTH_PATTERN),
        min_height: first(&MIN_HEIGHT_PATTERN),
    };
    (!dims.is_empty()).then_some(dims)
}
