use super::*;
use crate::error::BrandError;
use crate::types::{
    BrandColor, ColorSource, Dimensions, ElementKind, FindingType, FontFace, FontFamily,
    FontSize, Padding, Paint, Severity, Spacing, TextRun, Typography,
};
use pretty_assertions::assert_eq;

fn guidelines() -> GuidelineRecord {
    GuidelineRecord {
        colors: vec![BrandColor {
            name: "Primary".to_string(),
            hex: "#667EEA".to_string(),
            source: ColorSource::Text,
        }],
        typography: Typography {
            fonts: vec![FontFace {
                family: "Inter".to_string(),
            }],
            sizes: vec![16, 24, 32],
        },
        spacing: Spacing::default(),
        dimensions: None,
        ai_understanding: None,
        raw_content: String::new(),
    }
}

fn filled(name: &str, r: f64, g: f64, b: f64) -> DesignElement {
    let mut element = DesignElement::new(name, ElementKind::Rectangle);
    element.fills = Some(vec![Paint::solid(r, g, b)]);
    element
}

fn brand_filled(name: &str) -> DesignElement {
    filled(name, 102.0 / 255.0, 126.0 / 255.0, 234.0 / 255.0)
}

fn text(name: &str, family: &str, size: Option<FontSize>) -> DesignElement {
    let mut element = DesignElement::new(name, ElementKind::Text);
    element.text = Some(TextRun {
        characters: "Hello".to_string(),
        font_family: FontFamily::from(family.to_string()),
        font_size: size,
    });
    element
}

fn color_findings(report: &ComplianceReport) -> Vec<Severity> {
    report
        .violations
        .iter()
        .filter(|v| v.finding_type == FindingType::Color)
        .map(|v| v.severity)
        .collect()
}

#[test]
fn off_palette_fill_is_a_single_medium_violation() {
    let element = filled("Hero", 1.0, 0.0, 0.0);
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");

    assert_eq!(color_findings(&report), vec![Severity::Medium]);
    assert!(report.violations[0].message.contains("#FF0000"));
    assert!(!report
        .good_practices
        .iter()
        .any(|note| note.contains("brand color")));
    assert_eq!(
        report.suggestions,
        vec!["Replace #FF0000 with the closest brand color Primary (#667EEA)".to_string()]
    );
    assert_eq!(report.element_type, "RECTANGLE");
    assert_eq!(report.selection_count, 1);
}

#[test]
fn off_palette_stroke_is_low_severity() {
    let mut element = DesignElement::new("Card", ElementKind::Frame);
    element.strokes = Some(vec![Paint::solid(0.0, 0.0, 0.0)]);
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");
    assert_eq!(color_findings(&report), vec![Severity::Low]);
}

#[test]
fn unapproved_font_is_high_severity_with_suggestion() {
    let element = text("Title", "Arial", Some(FontSize::Px(16.0)));
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");

    let typography: Vec<_> = report
        .violations
        .iter()
        .filter(|v| v.finding_type == FindingType::Typography)
        .collect();
    assert_eq!(typography.len(), 1);
    assert_eq!(typography[0].severity, Severity::High);
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.contains("approved font") && s.contains("Inter")));
}

#[test]
fn font_family_match_is_case_insensitive_containment() {
    let element = text("Body", "Inter Display", Some(FontSize::Px(16.0)));
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");
    assert!(report.violations.is_empty(), "{:?}", report.violations);
    assert!(report
        .good_practices
        .contains(&"✓ Uses brand font Inter Display".to_string()));
}

#[test]
fn brand_family_prefix_is_not_approved() {
    let mut record = guidelines();
    record.typography.fonts = vec![FontFace {
        family: "Roboto Mono".to_string(),
    }];
    let element = text("Body", "Roboto", Some(FontSize::Px(16.0)));
    let report = analyze(&[element], Some(&record)).expect("analyze");

    assert_eq!(report.count(FindingType::Typography), 1);
    assert_eq!(report.violations[0].severity, Severity::High);
    assert!(report.violations[0].message.contains("\"Roboto\""));
    assert!(!report
        .good_practices
        .iter()
        .any(|note| note.starts_with("✓ Uses brand font")));
}

#[test]
fn blank_font_family_is_not_reported_as_brand_font() {
    let element = text("Label", "", Some(FontSize::Px(16.0)));
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");

    assert!(report.violations.is_empty(), "{:?}", report.violations);
    assert!(!report
        .good_practices
        .iter()
        .any(|note| note.starts_with("✓ Uses brand font")));
    assert!(report
        .good_practices
        .contains(&"✓ Font size 16px is on the type scale".to_string()));
}

#[test]
fn mixed_font_family_skips_size_check() {
    let element = text("Rich text", "mixed", Some(FontSize::Px(13.0)));
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].finding_type, FindingType::Typography);
    assert_eq!(report.violations[0].severity, Severity::Medium);
}

#[test]
fn off_scale_font_size_suggests_nearest() {
    let element = text("Caption", "Inter", Some(FontSize::Px(15.0)));
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].severity, Severity::Low);
    assert!(report
        .suggestions
        .contains(&"Use 16px from the type scale instead of 15px".to_string()));
}

#[test]
fn size_within_tolerance_is_on_scale() {
    let element = text("Body", "Inter", Some(FontSize::Px(16.4)));
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");
    assert!(report.violations.is_empty());
}

#[test]
fn off_scale_item_spacing_prefers_first_nearest() {
    let mut element = DesignElement::new("Stack", ElementKind::Frame);
    element.item_spacing = Some(10.0);
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");
    assert_eq!(report.count(FindingType::Spacing), 1);
    assert!(report
        .suggestions
        .contains(&"Use 8px spacing from the scale instead of 10px".to_string()));
}

#[test]
fn padding_sides_are_checked_and_zero_is_ignored() {
    let mut element = DesignElement::new("Card", ElementKind::Frame);
    element.padding = Some(Padding {
        top: 16.0,
        right: 0.0,
        bottom: 16.0,
        left: 20.0,
    });
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");
    assert_eq!(report.count(FindingType::Spacing), 1);
    assert!(report.violations[0].message.contains("Padding (left) 20px"));
}

#[test]
fn nested_children_are_checked_and_notes_deduplicated() {
    let mut card = DesignElement::new("Card", ElementKind::Frame);
    card.children = vec![
        brand_filled("Background"),
        brand_filled("Badge"),
        text("Label", "Inter", Some(FontSize::Px(24.0))),
    ];
    let report = analyze(&[card], Some(&guidelines())).expect("analyze");

    assert!(report.violations.is_empty());
    assert_eq!(
        report.good_practices,
        vec![
            "✓ Uses brand color Primary (#667EEA)".to_string(),
            "✓ Uses brand font Inter".to_string(),
            "✓ Font size 24px is on the type scale".to_string(),
            "🎉 All brand guidelines followed!".to_string(),
        ]
    );
    let insights = report.insights.expect("insights");
    assert_eq!(insights.compliance_rate, 100);
    assert_eq!(insights.headline, "Excellent brand compliance");
}

#[test]
fn deep_violation_is_found() {
    let mut outer = DesignElement::new("Page", ElementKind::Frame);
    let mut inner = DesignElement::new("Section", ElementKind::Group);
    inner.children = vec![filled("Dot", 0.0, 1.0, 0.0)];
    outer.children = vec![inner];
    let report = analyze(&[outer], Some(&guidelines())).expect("analyze");
    assert_eq!(color_findings(&report), vec![Severity::Medium]);
    assert!(report.violations[0].message.contains("\"Dot\""));
}

#[test]
fn dimensions_are_checked_on_the_root_only() {
    let mut record = guidelines();
    record.dimensions = Some(Dimensions {
        min_width: Some(320),
        min_height: Some(44),
    });

    let mut root = DesignElement::new("Banner", ElementKind::Frame);
    root.width = Some(200.0);
    root.height = Some(60.0);
    let mut child = DesignElement::new("Icon", ElementKind::Vector);
    child.width = Some(10.0);
    child.height = Some(10.0);
    root.children = vec![child];

    let report = analyze(&[root.clone()], Some(&record)).expect("analyze");
    assert_eq!(report.count(FindingType::Dimensions), 1);
    assert!(report
        .suggestions
        .contains(&"Increase the width of \"Banner\" to at least 320px".to_string()));

    root.width = Some(400.0);
    let report = analyze(&[root], Some(&record)).expect("analyze");
    assert_eq!(report.count(FindingType::Dimensions), 0);
    assert!(report
        .good_practices
        .contains(&"✓ Meets minimum dimensions (320x44px)".to_string()));
}

#[test]
fn default_layer_names_and_near_opaque_layers_get_suggestions() {
    let mut element = DesignElement::new("Rectangle 12", ElementKind::Rectangle);
    element.opacity = Some(0.95);
    let report = analyze(&[element], Some(&guidelines())).expect("analyze");
    assert!(report.violations.is_empty());
    assert_eq!(
        report.suggestions,
        vec![
            "Rename layer \"Rectangle 12\" to describe its purpose".to_string(),
            "\"Rectangle 12\" is at 95% opacity; use 100% for crisp brand colors".to_string(),
        ]
    );
}

#[test]
fn aggregate_flags_too_many_off_brand_colors() {
    let selection: Vec<DesignElement> = (0..6)
        .map(|i| filled(&format!("Swatch {}", i), i as f64 / 10.0, 0.0, 0.0))
        .collect();
    let report = analyze(&selection, Some(&guidelines())).expect("analyze");

    assert_eq!(report.element_type, "Multiple");
    assert_eq!(report.name, "Section");
    assert_eq!(report.selection_count, 6);

    let findings = color_findings(&report);
    assert_eq!(findings.len(), 7);
    assert_eq!(
        findings.iter().filter(|s| **s == Severity::Medium).count(),
        1
    );
    assert_eq!(findings.iter().filter(|s| **s == Severity::Low).count(), 6);
    assert!(report.violations[1].message.ends_with("(used 1 time)"));
}

#[test]
fn aggregate_on_brand_selection_is_celebrated() {
    let selection = vec![
        brand_filled("Header"),
        brand_filled("Footer"),
        text("Title", "Inter", Some(FontSize::Px(24.0))),
    ];
    let report = analyze(&selection, Some(&guidelines())).expect("analyze");
    assert!(report.violations.is_empty());
    assert_eq!(
        report.good_practices,
        vec![
            "✓ Cohesive color usage: 1 distinct color".to_string(),
            "✓ Good font discipline: 1 font family".to_string(),
            "🎉 All brand guidelines followed across the selection!".to_string(),
        ]
    );
}

#[test]
fn aggregate_flags_too_many_font_families() {
    let selection = vec![
        text("A", "Inter", None),
        text("B", "Roboto", None),
        text("C", "Lato", None),
        text("D", "Poppins", None),
    ];
    let report = analyze(&selection, Some(&guidelines())).expect("analyze");
    assert_eq!(report.count(FindingType::Typography), 1);
    assert_eq!(report.violations[0].severity, Severity::High);
}

fn sized_texts(sizes: &[f64]) -> Vec<DesignElement> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, px)| text(&format!("Label {}", i), "Inter", Some(FontSize::Px(*px))))
        .collect()
}

fn has_well_balanced_note(report: &ComplianceReport) -> bool {
    report
        .good_practices
        .iter()
        .any(|note| note.starts_with("✓ Well-balanced type scale"))
}

#[test]
fn aggregate_too_many_sizes_suggests_reducing() {
    let selection = sized_texts(&[10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 32.0, 40.0]);
    let report = analyze(&selection, Some(&guidelines())).expect("analyze");

    assert!(report.violations.is_empty());
    assert_eq!(
        report.suggestions,
        vec!["Selection uses 9 font sizes; reduce to a tighter type scale".to_string()]
    );
    assert!(!has_well_balanced_note(&report));
}

#[test]
fn aggregate_moderate_size_count_is_well_balanced() {
    let selection = sized_texts(&[12.0, 16.0, 24.0, 32.0, 48.0]);
    let report = analyze(&selection, Some(&guidelines())).expect("analyze");

    assert!(report.suggestions.is_empty());
    assert!(report
        .good_practices
        .contains(&"✓ Well-balanced type scale: 5 sizes".to_string()));
}

#[test]
fn aggregate_eight_sizes_gets_neither_note_nor_suggestion() {
    let selection = sized_texts(&[10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 32.0]);
    let report = analyze(&selection, Some(&guidelines())).expect("analyze");

    assert!(report.suggestions.is_empty());
    assert!(!has_well_balanced_note(&report));
}

#[test]
fn aggregate_ignores_blank_font_families() {
    let selection = vec![text("A", "", None), text("B", "Inter", None)];
    let report = analyze(&selection, Some(&guidelines())).expect("analyze");
    assert!(report
        .good_practices
        .contains(&"✓ Good font discipline: 1 font family".to_string()));
}

#[test]
fn missing_selection_or_guidelines_is_missing_input() {
    let err = analyze(&[], Some(&guidelines())).unwrap_err();
    assert!(matches!(err, BrandError::MissingInput(_)), "{err:?}");

    let err = analyze(&[brand_filled("Hero")], None).unwrap_err();
    assert!(matches!(err, BrandError::MissingInput(_)), "{err:?}");
}

#[test]
fn analysis_is_idempotent() {
    let mut card = DesignElement::new("Card", ElementKind::Frame);
    card.item_spacing = Some(10.0);
    card.children = vec![
        filled("Bad", 1.0, 0.0, 0.0),
        text("Title", "Arial", Some(FontSize::Px(15.0))),
    ];
    let record = guidelines();
    let first = analyze(&[card.clone()], Some(&record)).expect("analyze");
    let second = analyze(&[card], Some(&record)).expect("analyze");
    assert_eq!(first, second);
}

#[test]
fn insights_can_be_disabled() {
    let analyzer = ComplianceAnalyzer {
        include_insights: false,
        ..ComplianceAnalyzer::default()
    };
    let report = analyzer
        .analyze(&[brand_filled("Hero")], Some(&guidelines()))
        .expect("analyze");
    assert!(report.insights.is_none());
}

#[test]
fn nearest_keeps_first_on_ties() {
    assert_eq!(nearest(14.0, &[12, 16]), Some(12));
    assert_eq!(nearest(15.0, &[12, 16, 24]), Some(16));
    assert_eq!(nearest(15.0, &[]), None);
}

#[test]
fn near_equal_is_strict() {
    assert!(near_equal(16.0, 16.9, 1.0));
    assert!(!near_equal(16.0, 17.0, 1.0));
}

#[test]
fn format_px_drops_trailing_zero() {
    assert_eq!(format_px(16.0), "16");
    assert_eq!(format_px(13.5), "13.5");
    assert_eq!(format_px(12.04), "12");
}

#[test]
fn default_layer_name_detection() {
    assert!(is_default_layer_name("Rectangle 12"));
    assert!(is_default_layer_name("frame3"));
    assert!(!is_default_layer_name("Hero Background"));
    assert!(!is_default_layer_name("Rectangle"));
    assert!(!is_default_layer_name("Step 2"));
}
