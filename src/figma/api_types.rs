//! Figma REST API node types, as returned by the files and nodes endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::unit_rgb_to_hex;

/// Raw Figma node data from the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNodeData {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub children: Vec<FigmaNodeData>,
    pub absolute_bounding_box: Option<FigmaBoundingBox>,
    pub characters: Option<String>,
    pub style: Option<FigmaTypeStyle>,
    /// Per-character style ids; non-zero entries refer to `style_override_table`.
    #[serde(default)]
    pub character_style_overrides: Vec<u32>,
    #[serde(default)]
    pub style_override_table: BTreeMap<String, FigmaTypeStyle>,
    #[serde(default)]
    pub fills: Vec<FigmaPaintData>,
    #[serde(default)]
    pub strokes: Vec<FigmaPaintData>,
    pub item_spacing: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub opacity: Option<f64>,
    pub corner_radius: Option<f64>,
}

/// Bounding box coordinates from Figma.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaBoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Typography style from Figma.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaTypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
}

/// Paint/fill data from Figma.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaPaintData {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Option<FigmaColor>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
}

/// RGBA color from Figma (0.0-1.0 range).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct FigmaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl FigmaColor {
    /// Convert to an uppercase hex color string (e.g., "#FF8000").
    pub fn to_hex(&self) -> String {
        unit_rgb_to_hex(self.r, self.g, self.b)
    }
}

/// Response from the nodes endpoint, keyed by node id.
#[derive(Debug, Deserialize)]
pub struct FigmaNodesResponse {
    pub nodes: BTreeMap<String, FigmaNodeWrapper>,
}

/// Wrapper containing the document for a node.
#[derive(Debug, Deserialize)]
pub struct FigmaNodeWrapper {
    pub document: FigmaNodeData,
}
