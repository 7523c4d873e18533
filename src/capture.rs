//! Structured frame summary handed to the external grading step.

use serde::{Deserialize, Serialize};

use crate::color::hex_to_rgb;
use crate::types::{DesignElement, ElementKind, FontFamily, PaintKind};

/// Family reported for text runs that mix several fonts.
pub const MIXED_FAMILY: &str = "Mixed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    pub frame_name: String,
    pub frame_type: String,
    pub colors: Vec<CapturedColor>,
    pub fonts: Vec<String>,
    pub text_content: Vec<TextSample>,
    pub image_count: usize,
    pub dimensions: FrameDimensions,
    pub properties: FrameProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedColor {
    pub hex: String,
    pub name: String,
    /// `rgb(r, g, b)` text form.
    pub rgb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSample {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    pub font_family: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameDimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameProperties {
    pub opacity: f64,
    pub corner_radius: f64,
}

impl Default for FrameProperties {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            corner_radius: 0.0,
        }
    }
}

/// Summarizes `frame` and its descendants.
pub fn capture_frame(frame: &DesignElement) -> FrameSummary {
    let mut colors: Vec<CapturedColor> = Vec::new();
    let mut fonts: Vec<String> = Vec::new();
    let mut text_content = Vec::new();
    let mut image_count = 0;

    for node in frame.descendants_and_self() {
        for hex in node.fill_hexes() {
            if colors.iter().any(|c| c.hex == hex) {
                continue;
            }
            let Some([r, g, b]) = hex_to_rgb(&hex) else {
                continue;
            };
            colors.push(CapturedColor {
                rgb: format!("rgb({}, {}, {})", r, g, b),
                name: "Color".to_string(),
                hex,
            });
        }

        if let Some(text) = &node.text {
            let family = match &text.font_family {
                FontFamily::Named(name) => {
                    if !fonts.contains(name) {
                        fonts.push(name.clone());
                    }
                    name.clone()
                }
                FontFamily::Mixed => MIXED_FAMILY.to_string(),
            };
            text_content.push(TextSample {
                content: text.characters.clone(),
                font_size: text.font_size.and_then(|s| s.px()),
                font_family: family,
            });
        }

        let image_fill = node
            .fills
            .iter()
            .flatten()
            .any(|p| p.kind == PaintKind::Image && p.is_visible());
        if node.kind == ElementKind::Image || image_fill {
            image_count += 1;
        }
    }

    FrameSummary {
        frame_name: frame.name.clone(),
        frame_type: frame.kind.to_string(),
        colors,
        fonts,
        text_content,
        image_count,
        dimensions: FrameDimensions {
            width: frame.width,
            height: frame.height,
        },
        properties: FrameProperties {
            opacity: frame.opacity.unwrap_or(1.0),
            corner_radius: frame.corner_radius.unwrap_or(0.0),
        },
    }
}
