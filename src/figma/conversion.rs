//! Mapping from Figma REST nodes to design elements.

use crate::types::{
    DesignElement, ElementKind, FontFamily, FontSize, Padding, Paint, PaintKind, TextRun,
    UnitColor,
};

use super::api_types::{FigmaNodeData, FigmaPaintData, FigmaTypeStyle};

/// Map a Figma node and its subtree to a [`DesignElement`].
///
/// Hidden children are dropped; hidden paints are kept but marked invisible.
pub fn design_element_from_figma(node: &FigmaNodeData) -> DesignElement {
    let padding = map_padding(node);
    DesignElement {
        id: node.id.clone(),
        name: node.name.clone(),
        kind: ElementKind::from(node.node_type.clone()),
        fills: (!node.fills.is_empty()).then(|| node.fills.iter().map(map_paint).collect()),
        strokes: (!node.strokes.is_empty()).then(|| node.strokes.iter().map(map_paint).collect()),
        text: map_text(node),
        item_spacing: node.item_spacing,
        padding,
        width: node.absolute_bounding_box.map(|b| b.width),
        height: node.absolute_bounding_box.map(|b| b.height),
        opacity: node.opacity,
        corner_radius: node.corner_radius,
        children: node
            .children
            .iter()
            .filter(|c| c.visible != Some(false))
            .map(design_element_from_figma)
            .collect(),
    }
}

/// Map Figma paint data to a [`Paint`].
pub fn map_paint(paint: &FigmaPaintData) -> Paint {
    Paint {
        kind: PaintKind::from(paint.paint_type.clone()),
        color: paint.color.map(|c| UnitColor {
            r: c.r,
            g: c.g,
            b: c.b,
            a: Some(c.a),
        }),
        opacity: paint.opacity,
        visible: paint.visible,
    }
}

fn map_padding(node: &FigmaNodeData) -> Option<Padding> {
    let sides = [
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    ];
    if sides.iter().all(Option::is_none) {
        return None;
    }
    Some(Padding {
        top: node.padding_top.unwrap_or_default(),
        right: node.padding_right.unwrap_or_default(),
        bottom: node.padding_bottom.unwrap_or_default(),
        left: node.padding_left.unwrap_or_default(),
    })
}

/// Text run for TEXT nodes with a font family. Character-level overrides
/// that change the family or size turn the corresponding field into the
/// mixed sentinel.
fn map_text(node: &FigmaNodeData) -> Option<TextRun> {
    if !node.node_type.eq_ignore_ascii_case("TEXT") {
        return None;
    }
    let base = node.style.clone().unwrap_or_default();
    let overrides: Vec<&FigmaTypeStyle> = node
        .character_style_overrides
        .iter()
        .filter(|id| **id != 0)
        .filter_map(|id| node.style_override_table.get(&id.to_string()))
        .collect();

    let family_mixed = overrides.iter().any(|o| {
        matches!((&o.font_family, &base.font_family), (Some(a), Some(b)) if a != b)
    });
    let size_mixed = overrides.iter().any(|o| {
        matches!((o.font_size, base.font_size), (Some(a), Some(b)) if a != b)
    });

    let font_family = if family_mixed {
        FontFamily::Mixed
    } else {
        // No family means no usable text style.
        match base.font_family.filter(|f| !f.trim().is_empty()) {
            Some(family) => FontFamily::from(family),
            None => return None,
        }
    };
    let font_size = if size_mixed {
        Some(FontSize::Mixed)
    } else {
        base.font_size.map(FontSize::Px)
    };

    Some(TextRun {
        characters: node.characters.clone().unwrap_or_default(),
        font_family,
        font_size,
    })
}
