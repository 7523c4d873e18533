//! Brand guideline text parser.
//!
//! Converts free document text (plus colors an external step pulled out of
//! document images) into a [`GuidelineRecord`]:
//! - Colors from `#hex` codes and `rgb()` triples, labelled by preceding text
//! - Font families from a fixed catalog (plus configured extras)
//! - Font sizes from `px`/`pt`/`rem`/`em` lengths
//! - A spacing scale from explicit lists and margin/padding values
//! - Minimum width/height
//!
//! Missing colors, fonts, or spacing fall back to documented defaults.

pub mod extract;
pub mod patterns;


use tracing::debug;

use crate::error::BrandError;
use crate::types::{
    AiUnderstanding, BrandColor, ColorSource, FontFace, GuidelineRecord, Spacing, Typography,
    DEFAULT_SPACING_SCALE,
};
use crate::Result;

pub use extract::{label_before, LabelLookupError, DEFAULT_COLOR_LABEL};

/// Upper bound on the document prefix retained in `rawContent`.
pub const MAX_RAW_CONTENT_CHARS: usize = 10_000;

pub const DEFAULT_COLOR_NAME: &str = "Primary";
pub const DEFAULT_COLOR_HEX: &str = "#667EEA";
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

#[derive(Debug, Clone)]
pub struct GuidelineParser {
    /// Characters of `content` kept in `rawContent`.
    pub raw_content_limit: usize,
    /// Characters searched before a color for its label.
    pub label_window: usize,
    /// Brand-specific families recognized in addition to the catalog.
    pub extra_fonts: Vec<String>,
}

impl Default for GuidelineParser {
    fn default() -> Self {
        Self {
            raw_content_limit: MAX_RAW_CONTENT_CHARS,
            label_window: 30,
            extra_fonts: Vec::new(),
        }
    }
}

impl GuidelineParser {
    pub fn parse(&self, content: &str, extracted_colors: &[String]) -> Result<GuidelineRecord> {
        if content.trim().is_empty() {
            return Err(BrandError::invalid_input(
                "Guideline content is empty; upload a file with content",
            ));
        }

        let mut colors = Vec::new();
        extract::extract_hex_colors(content, self.label_window, &mut colors);
        extract::extract_rgb_colors(content, self.label_window, &mut colors);
        extract::merge_extracted_colors(extracted_colors, &mut colors);

        let mut fonts = extract::extract_fonts(content, &self.extra_fonts)
            .map_err(|e| BrandError::parse_failure(format!("invalid font pattern: {e}")))?;
        let sizes = extract::extract_font_sizes(content);
        let mut scale = extract::extract_spacing_scale(content);
        let dimensions = extract::extract_min_dimensions(content);

        if colors.is_empty() {
            colors.push(BrandColor {
                name: DEFAULT_COLOR_NAME.to_string(),
                hex: DEFAULT_COLOR_HEX.to_string(),
                source: ColorSource::Default,
            });
        }
        if fonts.is_empty() {
            fonts.push(FontFace {
                family: DEFAULT_FONT_FAMILY.to_string(),
            });
        }
        if scale.is_empty() {
            scale = DEFAULT_SPACING_SCALE.to_vec();
        }

        let limit = self.raw_content_limit.min(MAX_RAW_CONTENT_CHARS);
        let record = GuidelineRecord {
            colors,
            typography: Typography { fonts, sizes },
            spacing: Spacing {
                scale,
                ..Spacing::default()
            },
            dimensions,
            ai_understanding: None,
            raw_content: content.chars().take(limit).collect(),
        };

        record
            .validate()
            .map_err(|msg| BrandError::parse_failure(format!("extracted record is invalid: {msg}")))?;

        debug!(
            colors = record.colors.len(),
            fonts = record.typography.fonts.len(),
            sizes = record.typography.sizes.len(),
            spacing = record.spacing.scale.len(),
            has_dimensions = record.dimensions.is_some(),
            "parsed brand guidelines"
        );
        Ok(record)
    }
}

/// Parses guideline text with default options.
pub fn parse_guidelines(content: &str, extracted_colors: &[String]) -> Result<GuidelineRecord> {
    GuidelineParser::default().parse(content, extracted_colors)
}

/// Attaches the external collaborator's brand narrative to a parsed record.
pub fn with_ai_understanding(
    mut record: GuidelineRecord,
    understanding: Option<AiUnderstanding>,
) -> GuidelineRecord {
    record.ai_understanding = understanding;
    record
}
