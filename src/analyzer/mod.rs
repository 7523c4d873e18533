//! Rule-based brand compliance analyzer.
//!
//! A single selected element is walked depth-first and every node's fills,
//! strokes, text runs, and spacing are checked against the guideline record.
//! A multi-element selection is analyzed in aggregate: attribute frequencies
//! across all trees are compared against palette and type-scale thresholds.
//!
//! The analyzer holds no state between calls; identical inputs always produce
//! identical reports.

mod aggregate;
mod element;
mod insights;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::BrandError;
use crate::types::{ComplianceReport, DesignElement, GuidelineRecord};
use crate::Result;

pub use insights::derive_insights;

lazy_static! {
    /// Generic layer nouns the design host uses for auto-generated names
    static ref GENERIC_LAYER_NOUN: Regex =
        Regex::new(r"(?i)(rectangle|frame|group|ellipse|line|text)").unwrap();

    static ref TRAILING_DIGITS: Regex = Regex::new(r"\d+$").unwrap();
}

#[derive(Debug, Clone, Copy)]
pub struct ComplianceAnalyzer {
    /// Values closer than this (px) count as equal.
    pub tolerance: f64,
    /// More distinct colors than this in a selection is a violation.
    pub max_palette_colors: usize,
    /// More font families than this in a selection is a violation.
    pub max_font_families: usize,
    /// More font sizes than this in a selection earns a suggestion.
    pub max_type_sizes: usize,
    /// Fewest font sizes that still count as a balanced type scale.
    pub min_balanced_type_sizes: usize,
    pub include_insights: bool,
}

impl Default for ComplianceAnalyzer {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            max_palette_colors: 5,
            max_font_families: 3,
            max_type_sizes: 8,
            min_balanced_type_sizes: 4,
            include_insights: true,
        }
    }
}

impl ComplianceAnalyzer {
    /// Analyzes one element in depth, or several elements in aggregate.
    ///
    /// Fails with [`BrandError::MissingInput`] when the selection is empty or
    /// no guideline record is available.
    pub fn analyze(
        &self,
        selection: &[DesignElement],
        guidelines: Option<&GuidelineRecord>,
    ) -> Result<ComplianceReport> {
        if selection.is_empty() {
            return Err(BrandError::missing_input(
                "Selection is empty; select a frame or element to analyze",
            ));
        }
        let guidelines = guidelines.ok_or_else(|| {
            BrandError::missing_input("No brand guidelines loaded; parse a guideline document first")
        })?;

        let mut report = match selection {
            [single] => element::analyze_element(self, single, guidelines),
            many => aggregate::analyze_selection(self, many, guidelines),
        };

        if self.include_insights {
            let off_brand = off_brand_colors(selection, guidelines);
            report.insights = Some(derive_insights(&report, off_brand));
        }

        debug!(
            selection = selection.len(),
            violations = report.violations.len(),
            good_practices = report.good_practices.len(),
            suggestions = report.suggestions.len(),
            "analysis complete"
        );
        Ok(report)
    }
}

/// Analyzes a selection with the default thresholds.
pub fn analyze(
    selection: &[DesignElement],
    guidelines: Option<&GuidelineRecord>,
) -> Result<ComplianceReport> {
    ComplianceAnalyzer::default().analyze(selection, guidelines)
}

pub(crate) fn near_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Closest scale value to `target`; the first one encountered wins ties.
pub(crate) fn nearest(target: f64, values: &[u32]) -> Option<u32> {
    values.iter().copied().fold(None, |best, value| match best {
        Some(b) if (b as f64 - target).abs() <= (value as f64 - target).abs() => Some(b),
        _ => Some(value),
    })
}

/// Renders a pixel value without a trailing `.0`.
pub(crate) fn format_px(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Auto-generated names like "Rectangle 12" or "Frame3".
pub(crate) fn is_default_layer_name(name: &str) -> bool {
    GENERIC_LAYER_NOUN.is_match(name) && TRAILING_DIGITS.is_match(name.trim_end())
}

/// Distinct visible colors across the selection that are absent from the palette.
fn off_brand_colors(selection: &[DesignElement], guidelines: &GuidelineRecord) -> usize {
    if guidelines.colors.is_empty() {
        return 0;
    }
    let mut seen = HashSet::new();
    for root in selection {
        for node in root.descendants_and_self() {
            for hex in node.fill_hexes().into_iter().chain(node.stroke_hexes()) {
                if guidelines.find_color(&hex).is_none() {
                    seen.insert(hex);
                }
            }
        }
    }
    seen.len()
}
