use crate::color::closest_brand_color;
use crate::types::{
    ComplianceReport, DesignElement, FindingType, FontFamily, GuidelineRecord, Severity,
};

use super::{format_px, is_default_layer_name, near_equal, nearest, ComplianceAnalyzer};

pub(super) const ALL_FOLLOWED: &str = "🎉 All brand guidelines followed!";

#[derive(Clone, Copy)]
enum PaintRole {
    Fill,
    Stroke,
}

impl PaintRole {
    fn label(self) -> &'static str {
        match self {
            PaintRole::Fill => "Fill",
            PaintRole::Stroke => "Stroke",
        }
    }

    fn severity(self) -> Severity {
        match self {
            PaintRole::Fill => Severity::Medium,
            PaintRole::Stroke => Severity::Low,
        }
    }
}

pub(super) fn analyze_element(
    analyzer: &ComplianceAnalyzer,
    root: &DesignElement,
    guidelines: &GuidelineRecord,
) -> ComplianceReport {
    let mut report = ComplianceReport::new(root.kind.as_str(), root.name.clone(), 1);

    for node in root.descendants_and_self() {
        check_paints(node, PaintRole::Fill, node.fill_hexes(), guidelines, &mut report);
        check_paints(node, PaintRole::Stroke, node.stroke_hexes(), guidelines, &mut report);
        check_typography(analyzer, node, guidelines, &mut report);
        check_spacing(analyzer, node, guidelines, &mut report);
        check_general(node, &mut report);
    }
    check_dimensions(root, guidelines, &mut report);

    if report.violations.is_empty() && !report.good_practices.is_empty() {
        report.good_practice(ALL_FOLLOWED);
    }
    report
}

fn check_paints(
    node: &DesignElement,
    role: PaintRole,
    hexes: Vec<String>,
    guidelines: &GuidelineRecord,
    report: &mut ComplianceReport,
) {
    // No palette defined: nothing to compare against.
    if guidelines.colors.is_empty() {
        return;
    }
    for hex in hexes {
        match guidelines.find_color(&hex) {
            Some(brand) => {
                report.good_practice(format!("✓ Uses brand color {} ({})", brand.name, brand.hex))
            }
            None => {
                report.violation(
                    FindingType::Color,
                    role.severity(),
                    format!(
                        "{} color {} on \"{}\" is not in the brand palette",
                        role.label(),
                        hex,
                        node.name
                    ),
                );
                if let Some((closest, _)) = closest_brand_color(&hex, &guidelines.colors) {
                    report.suggest(format!(
                        "Replace {} with the closest brand color {} ({})",
                        hex, closest.name, closest.hex
                    ));
                }
            }
        }
    }
}

fn font_is_approved(family: &str, approved: &[&str]) -> bool {
    let family = family.to_lowercase();
    approved
        .iter()
        .any(|a| family.contains(&a.to_lowercase()))
}

fn check_typography(
    analyzer: &ComplianceAnalyzer,
    node: &DesignElement,
    guidelines: &GuidelineRecord,
    report: &mut ComplianceReport,
) {
    let Some(text) = &node.text else {
        return;
    };

    let family = match &text.font_family {
        FontFamily::Mixed => {
            report.violation(
                FindingType::Typography,
                Severity::Medium,
                format!("\"{}\" uses mixed font families", node.name),
            );
            return;
        }
        FontFamily::Named(family) => family,
    };

    let approved = guidelines.font_families();
    if !approved.is_empty() && !family.trim().is_empty() {
        if font_is_approved(family, &approved) {
            report.good_practice(format!("✓ Uses brand font {}", family));
        } else {
            report.violation(
                FindingType::Typography,
                Severity::High,
                format!(
                    "Font \"{}\" on \"{}\" is not an approved brand font",
                    family, node.name
                ),
            );
            report.suggest(format!(
                "Use an approved font family: {}",
                approved.join(", ")
            ));
        }
    }

    let Some(px) = text.font_size.and_then(|s| s.px()) else {
        return;
    };
    let sizes = &guidelines.typography.sizes;
    if sizes.is_empty() {
        return;
    }
    if sizes
        .iter()
        .any(|s| near_equal(*s as f64, px, analyzer.tolerance))
    {
        report.good_practice(format!("✓ Font size {}px is on the type scale", format_px(px)));
    } else {
        report.violation(
            FindingType::Typography,
            Severity::Low,
            format!(
                "Font size {}px on \"{}\" is not in the type scale",
                format_px(px),
                node.name
            ),
        );
        if let Some(closest) = nearest(px, sizes) {
            report.suggest(format!(
                "Use {}px from the type scale instead of {}px",
                closest,
                format_px(px)
            ));
        }
    }
}

fn check_spacing(
    analyzer: &ComplianceAnalyzer,
    node: &DesignElement,
    guidelines: &GuidelineRecord,
    report: &mut ComplianceReport,
) {
    let scale = &guidelines.spacing.scale;
    if scale.is_empty() {
        return;
    }

    let mut values: Vec<(String, f64)> = Vec::new();
    if let Some(spacing) = node.item_spacing {
        values.push(("Item spacing".to_string(), spacing));
    }
    if let Some(padding) = &node.padding {
        // Zero padding means "none", not an off-scale value.
        values.extend(
            padding
                .sides()
                .into_iter()
                .filter(|(_, v)| *v > 0.0)
                .map(|(side, v)| (format!("Padding ({side})"), v)),
        );
    }

    for (label, value) in values {
        if scale
            .iter()
            .any(|s| near_equal(*s as f64, value, analyzer.tolerance))
        {
            report.good_practice(format!(
                "✓ {} {}px follows the spacing scale",
                label,
                format_px(value)
            ));
        } else {
            report.violation(
                FindingType::Spacing,
                Severity::Low,
                format!(
                    "{} {}px on \"{}\" is not on the spacing scale",
                    label,
                    format_px(value),
                    node.name
                ),
            );
            if let Some(closest) = nearest(value, scale) {
                report.suggest(format!(
                    "Use {}px spacing from the scale instead of {}px",
                    closest,
                    format_px(value)
                ));
            }
        }
    }
}

fn check_dimensions(root: &DesignElement, guidelines: &GuidelineRecord, report: &mut ComplianceReport) {
    let Some(dims) = guidelines.dimensions else {
        return;
    };

    let mut below_minimum = false;
    for (axis, actual, minimum) in [
        ("width", root.width, dims.min_width),
        ("height", root.height, dims.min_height),
    ] {
        if let (Some(actual), Some(minimum)) = (actual, minimum) {
            if actual < minimum as f64 {
                below_minimum = true;
                report.violation(
                    FindingType::Dimensions,
                    Severity::Medium,
                    format!(
                        "\"{}\" {} {}px is below the minimum of {}px",
                        root.name,
                        axis,
                        format_px(actual),
                        minimum
                    ),
                );
                report.suggest(format!(
                    "Increase the {} of \"{}\" to at least {}px",
                    axis, root.name, minimum
                ));
            }
        }
    }

    if below_minimum {
        return;
    }
    if let (Some(min_w), Some(min_h), Some(_), Some(_)) =
        (dims.min_width, dims.min_height, root.width, root.height)
    {
        report.good_practice(format!(
            "✓ Meets minimum dimensions ({}x{}px)",
            min_w, min_h
        ));
    }
}

fn check_general(node: &DesignElement, report: &mut ComplianceReport) {
    if is_default_layer_name(&node.name) {
        report.suggest(format!(
            "Rename layer \"{}\" to describe its purpose",
            node.name
        ));
    }
    if let Some(opacity) = node.opacity {
        if opacity > 0.9 && opacity < 1.0 {
            report.suggest(format!(
                "\"{}\" is at {}% opacity; use 100% for crisp brand colors",
                node.name,
                (opacity * 100.0).round()
            ));
        }
    }
}
