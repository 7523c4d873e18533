//! Structured brand guidelines.
//!
//! A [`GuidelineRecord`] is derived once per uploaded document and replaced
//! wholesale on re-upload. It is serialized in camelCase so that stored
//! records stay readable by the plugin UI.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Spacing scale used when a document defines none.
pub const DEFAULT_SPACING_SCALE: [u32; 8] = [4, 8, 12, 16, 24, 32, 48, 64];

/// Smallest and largest font size (px) kept in a type scale.
pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 96;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineRecord {
    pub colors: Vec<BrandColor>,
    pub typography: Typography,
    pub spacing: Spacing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_understanding: Option<AiUnderstanding>,
    #[serde(default)]
    pub raw_content: String,
}

/// Where a palette entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSource {
    Text,
    PdfImage,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColor {
    pub name: String,
    /// `#RRGGBB`, uppercase.
    pub hex: String,
    pub source: ColorSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    #[serde(default)]
    pub fonts: Vec<FontFace>,
    #[serde(default)]
    pub sizes: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFace {
    pub family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub scale: Vec<u32>,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            scale: DEFAULT_SPACING_SCALE.to_vec(),
        }
    }
}

fn default_unit() -> String {
    "px".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
}

impl Dimensions {
    pub fn is_empty(&self) -> bool {
        self.min_width.is_none() && self.min_height.is_none()
    }
}

/// Brand narrative produced by the external LLM collaborator.
///
/// Opaque to the parser and analyzer; values are kept as raw JSON because
/// the model may answer with strings, lists, or nested objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiUnderstanding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_personality: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_style: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_values: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_psychology: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography_character: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagery_style: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_principles: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_essence: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GuidelineRecord {
    /// Looks up a palette entry by hex, ignoring case.
    pub fn find_color(&self, hex: &str) -> Option<&BrandColor> {
        self.colors
            .iter()
            .find(|c| c.hex.eq_ignore_ascii_case(hex))
    }

    pub fn font_families(&self) -> Vec<&str> {
        self.typography
            .fonts
            .iter()
            .map(|f| f.family.as_str())
            .collect()
    }

    /// Checks the record invariants: unique uppercase `#RRGGBB` colors,
    /// case-insensitively unique fonts, and sorted, deduplicated scales.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for color in &self.colors {
            if !is_normalized_hex(&color.hex) {
                return Err(format!(
                    "color '{}' has non-normalized hex '{}'",
                    color.name, color.hex
                ));
            }
            if !seen.insert(color.hex.clone()) {
                return Err(format!("duplicate color hex '{}'", color.hex));
            }
        }

        let mut families = HashSet::new();
        for font in &self.typography.fonts {
            if font.family.trim().is_empty() {
                return Err("font family must not be empty".to_string());
            }
            if !families.insert(font.family.to_lowercase()) {
                return Err(format!("duplicate font family '{}'", font.family));
            }
        }

        if !is_strictly_ascending(&self.typography.sizes) {
            return Err("font sizes must be sorted ascending without duplicates".to_string());
        }
        if let Some(size) = self
            .typography
            .sizes
            .iter()
            .find(|s| !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(*s))
        {
            return Err(format!(
                "font size {size}px is outside {MIN_FONT_SIZE}-{MAX_FONT_SIZE}px"
            ));
        }

        if !is_strictly_ascending(&self.spacing.scale) {
            return Err("spacing scale must be sorted ascending without duplicates".to_string());
        }

        Ok(())
    }
}

fn is_normalized_hex(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

fn is_strictly_ascending(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}
