use std::collections::HashMap;

use crate::types::{ComplianceReport, DesignElement, FindingType, FontFamily, GuidelineRecord, Severity};

use super::{format_px, ComplianceAnalyzer};

pub(super) const AGGREGATE_ELEMENT_TYPE: &str = "Multiple";
pub(super) const AGGREGATE_NAME: &str = "Section";
const ALL_FOLLOWED_ACROSS: &str = "🎉 All brand guidelines followed across the selection!";

/// Occurrence counts that remember first-seen order.
#[derive(Debug, Default)]
struct Tally {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, key: String) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.order.push(key);
            }
        }
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|k| (k.as_str(), self.counts.get(k).copied().unwrap_or_default()))
    }
}

#[derive(Debug, Default)]
struct SelectionStats {
    colors: Tally,
    fonts: Tally,
    sizes: Tally,
}

impl SelectionStats {
    fn collect(selection: &[DesignElement]) -> Self {
        let mut stats = Self::default();
        for root in selection {
            for node in root.descendants_and_self() {
                for hex in node.fill_hexes().into_iter().chain(node.stroke_hexes()) {
                    stats.colors.add(hex);
                }
                if let Some(text) = &node.text {
                    if let FontFamily::Named(family) = &text.font_family {
                        if !family.trim().is_empty() {
                            stats.fonts.add(family.clone());
                        }
                    }
                    if let Some(px) = text.font_size.and_then(|s| s.px()) {
                        stats.sizes.add(format_px(px));
                    }
                }
            }
        }
        stats
    }
}

pub(super) fn analyze_selection(
    analyzer: &ComplianceAnalyzer,
    selection: &[DesignElement],
    guidelines: &GuidelineRecord,
) -> ComplianceReport {
    let stats = SelectionStats::collect(selection);
    let mut report = ComplianceReport::new(AGGREGATE_ELEMENT_TYPE, AGGREGATE_NAME, selection.len());

    let colors = stats.colors.len();
    if colors > analyzer.max_palette_colors {
        report.violation(
            FindingType::Color,
            Severity::Medium,
            format!(
                "Selection uses {} distinct colors; consolidate to at most {} from the brand palette",
                colors, analyzer.max_palette_colors
            ),
        );
    } else if colors > 0 {
        report.good_practice(format!(
            "✓ Cohesive color usage: {} distinct color{}",
            colors,
            if colors == 1 { "" } else { "s" }
        ));
    }

    let fonts = stats.fonts.len();
    if fonts > analyzer.max_font_families {
        report.violation(
            FindingType::Typography,
            Severity::High,
            format!(
                "Selection uses {} font families; limit to the approved brand fonts",
                fonts
            ),
        );
    } else if fonts > 0 && fonts < analyzer.max_font_families {
        report.good_practice(format!(
            "✓ Good font discipline: {} font {}",
            fonts,
            if fonts == 1 { "family" } else { "families" }
        ));
    }

    let sizes = stats.sizes.len();
    if sizes > analyzer.max_type_sizes {
        report.suggest(format!(
            "Selection uses {} font sizes; reduce to a tighter type scale",
            sizes
        ));
    } else if sizes >= analyzer.min_balanced_type_sizes && sizes < analyzer.max_type_sizes {
        report.good_practice(format!("✓ Well-balanced type scale: {} sizes", sizes));
    }

    if !guidelines.colors.is_empty() {
        for (hex, count) in stats.colors.iter() {
            if guidelines.find_color(hex).is_some() {
                continue;
            }
            report.violation(
                FindingType::Color,
                Severity::Low,
                format!(
                    "{} is not in the brand palette (used {} time{})",
                    hex,
                    count,
                    if count == 1 { "" } else { "s" }
                ),
            );
        }
    }

    if report.violations.is_empty() {
        report.good_practice(ALL_FOLLOWED_ACROSS);
    }
    report
}
