//! Compliance report produced per analysis call.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub element_type: String,
    pub name: String,
    pub selection_count: usize,
    #[serde(default)]
    pub violations: Vec<Finding>,
    #[serde(default)]
    pub good_practices: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
}

impl ComplianceReport {
    pub fn new(element_type: impl Into<String>, name: impl Into<String>, count: usize) -> Self {
        Self {
            element_type: element_type.into(),
            name: name.into(),
            selection_count: count,
            violations: Vec::new(),
            good_practices: Vec::new(),
            suggestions: Vec::new(),
            insights: None,
        }
    }

    pub fn violation(
        &mut self,
        finding_type: FindingType,
        severity: Severity,
        message: impl Into<String>,
    ) {
        self.violations.push(Finding {
            finding_type,
            message: message.into(),
            severity,
        });
    }

    /// Adds a good-practice note unless an identical one is already present.
    pub fn good_practice(&mut self, note: impl Into<String>) {
        push_unique(&mut self.good_practices, note.into());
    }

    /// Adds a suggestion unless an identical one is already present.
    pub fn suggest(&mut self, suggestion: impl Into<String>) {
        push_unique(&mut self.suggestions, suggestion.into());
    }

    pub fn count(&self, finding_type: FindingType) -> usize {
        self.violations
            .iter()
            .filter(|v| v.finding_type == finding_type)
            .count()
    }

    pub fn max_severity(&self) -> Option<Severity> {
        self.violations.iter().map(|v| v.severity).max()
    }
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    #[serde(rename = "type")]
    pub finding_type: FindingType,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingType {
    Color,
    Typography,
    Spacing,
    Dimensions,
}

impl fmt::Display for FindingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FindingType::Color => "color",
            FindingType::Typography => "typography",
            FindingType::Spacing => "spacing",
            FindingType::Dimensions => "dimensions",
        })
    }
}

/// Ordered so that `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        })
    }
}

/// Narrative summary derived from a finished report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Share of good-practice notes among all observations, 0-100.
    pub compliance_rate: u8,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}
