use crate::types::{ComplianceReport, FindingType, Insights, Severity};

/// Summarizes a report into a rate, a headline, and a few highlights.
///
/// `off_brand_colors` is the number of distinct selection colors missing from
/// the palette.
pub fn derive_insights(report: &ComplianceReport, off_brand_colors: usize) -> Insights {
    let good = report.good_practices.len();
    let bad = report.violations.len();
    let compliance_rate = if good + bad == 0 {
        100
    } else {
        ((good as f64 / (good + bad) as f64) * 100.0).round() as u8
    };

    let headline = match compliance_rate {
        90..=100 => "Excellent brand compliance",
        70..=89 => "Good brand compliance with minor issues",
        50..=69 => "Moderate brand compliance; several issues need attention",
        _ => "Low brand compliance; significant rework recommended",
    }
    .to_string();

    let mut highlights = Vec::new();
    highlights.push(match off_brand_colors {
        0 => "Colors are fully on-brand".to_string(),
        1..=2 => format!(
            "Colors are mostly consistent with the palette ({} off-brand)",
            off_brand_colors
        ),
        n => format!("Multiple off-brand colors detected ({})", n),
    });

    let high = report
        .violations
        .iter()
        .filter(|v| v.severity == Severity::High)
        .count();
    if high > 0 {
        highlights.push(format!(
            "{} high-severity issue{} to fix first",
            high,
            if high == 1 { "" } else { "s" }
        ));
    }

    let typography = report.count(FindingType::Typography);
    if typography > 0 {
        highlights.push(format!(
            "{} typography issue{}",
            typography,
            if typography == 1 { "" } else { "s" }
        ));
    }

    Insights {
        compliance_rate,
        headline,
        highlights,
    }
}
