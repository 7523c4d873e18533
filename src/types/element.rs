//! Design element tree supplied by the design host.
//!
//! Optional fields are explicit: an absent `fills`, `text`, `itemSpacing`,
//! etc. disables the analyzer check that needs it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::unit_rgb_to_hex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// `None` when the host reports no fills or mixed fills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignElement>,
}

/// Node type as reported by the host. Unknown types are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Frame,
    Group,
    Rectangle,
    Ellipse,
    Line,
    Text,
    Component,
    Instance,
    Vector,
    Image,
    Section,
    Other(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Frame => "FRAME",
            ElementKind::Group => "GROUP",
            ElementKind::Rectangle => "RECTANGLE",
            ElementKind::Ellipse => "ELLIPSE",
            ElementKind::Line => "LINE",
            ElementKind::Text => "TEXT",
            ElementKind::Component => "COMPONENT",
            ElementKind::Instance => "INSTANCE",
            ElementKind::Vector => "VECTOR",
            ElementKind::Image => "IMAGE",
            ElementKind::Section => "SECTION",
            ElementKind::Other(other) => other.as_str(),
        }
    }
}

impl From<String> for ElementKind {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "FRAME" => ElementKind::Frame,
            "GROUP" => ElementKind::Group,
            "RECTANGLE" => ElementKind::Rectangle,
            "ELLIPSE" => ElementKind::Ellipse,
            "LINE" => ElementKind::Line,
            "TEXT" => ElementKind::Text,
            "COMPONENT" => ElementKind::Component,
            "INSTANCE" => ElementKind::Instance,
            "VECTOR" => ElementKind::Vector,
            "IMAGE" => ElementKind::Image,
            "SECTION" => ElementKind::Section,
            _ => ElementKind::Other(value),
        }
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<UnitColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Paint {
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(UnitColor { r, g, b, a: None }),
            opacity: None,
            visible: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// Hex of a visible solid paint; `None` for gradients, images, hidden paints.
    pub fn solid_hex(&self) -> Option<String> {
        if self.kind != PaintKind::Solid || !self.is_visible() {
            return None;
        }
        self.color.as_ref().map(UnitColor::to_hex)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaintKind {
    Solid,
    Gradient(String),
    Image,
    Other(String),
}

impl From<String> for PaintKind {
    fn from(value: String) -> Self {
        let upper = value.to_ascii_uppercase();
        match upper.as_str() {
            "SOLID" => PaintKind::Solid,
            "IMAGE" => PaintKind::Image,
            v if v.starts_with("GRADIENT") => PaintKind::Gradient(upper),
            _ => PaintKind::Other(value),
        }
    }
}

impl From<PaintKind> for String {
    fn from(kind: PaintKind) -> Self {
        match kind {
            PaintKind::Solid => "SOLID".to_string(),
            PaintKind::Image => "IMAGE".to_string(),
            PaintKind::Gradient(name) | PaintKind::Other(name) => name,
        }
    }
}

/// RGB(A) color with channels in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl UnitColor {
    pub fn to_hex(&self) -> String {
        unit_rgb_to_hex(self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub characters: String,
    pub font_family: FontFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
}

/// Font family of a text run, or the host's "mixed" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    Mixed,
    Named(String),
}

impl FontFamily {
    pub fn name(&self) -> Option<&str> {
        match self {
            FontFamily::Mixed => None,
            FontFamily::Named(name) => Some(name.as_str()),
        }
    }
}

impl From<String> for FontFamily {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("mixed") {
            FontFamily::Mixed
        } else {
            FontFamily::Named(value)
        }
    }
}

impl From<FontFamily> for String {
    fn from(family: FontFamily) -> Self {
        match family {
            FontFamily::Mixed => "mixed".to_string(),
            FontFamily::Named(name) => name,
        }
    }
}

/// Font size in px, or the host's "mixed" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FontSizeRepr", into = "FontSizeRepr")]
pub enum FontSize {
    Mixed,
    Px(f64),
}

impl FontSize {
    pub fn px(&self) -> Option<f64> {
        match self {
            FontSize::Mixed => None,
            FontSize::Px(px) => Some(*px),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum FontSizeRepr {
    Px(f64),
    Text(String),
}

impl TryFrom<FontSizeRepr> for FontSize {
    type Error = String;

    fn try_from(repr: FontSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            FontSizeRepr::Px(px) => Ok(FontSize::Px(px)),
            FontSizeRepr::Text(text) if text.trim().eq_ignore_ascii_case("mixed") => {
                Ok(FontSize::Mixed)
            }
            FontSizeRepr::Text(text) => text
                .trim()
                .trim_end_matches("px")
                .parse::<f64>()
                .map(FontSize::Px)
                .map_err(|_| format!("invalid font size '{text}'")),
        }
    }
}

impl From<FontSize> for FontSizeRepr {
    fn from(size: FontSize) -> Self {
        match size {
            FontSize::Mixed => FontSizeRepr::Text("mixed".to_string()),
            FontSize::Px(px) => FontSizeRepr::Px(px),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl Padding {
    pub fn sides(&self) -> [(&'static str, f64); 4] {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
    }
}

impl DesignElement {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind,
            fills: None,
            strokes: None,
            text: None,
            item_spacing: None,
            padding: None,
            width: None,
            height: None,
            opacity: None,
            corner_radius: None,
            children: Vec::new(),
        }
    }

    /// Hex codes of visible solid fills, in paint order.
    pub fn fill_hexes(&self) -> Vec<String> {
        solid_hexes(self.fills.as_deref())
    }

    pub fn stroke_hexes(&self) -> Vec<String> {
        solid_hexes(self.strokes.as_deref())
    }

    /// This element and all descendants, depth-first pre-order.
    pub fn descendants_and_self(&self) -> Vec<&DesignElement> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

fn solid_hexes(paints: Option<&[Paint]>) -> Vec<String> {
    paints
        .unwrap_or_default()
        .iter()
        .filter_map(Paint::solid_hex)
        .collect()
}
