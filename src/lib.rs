//! Brand guideline extraction and design compliance checking.
//!
//! A guideline document (plain text) is parsed into a structured
//! [`GuidelineRecord`]: palette, approved fonts, type scale, spacing scale,
//! and minimum dimensions. Design elements are then checked against that
//! record, producing a [`ComplianceReport`] of violations, good practices,
//! and suggestions.
//!
//! # Module Overview
//!
//! - [`parser`] - Guideline text extraction with defaulting
//! - [`analyzer`] - Single-element and aggregate compliance rules
//! - [`capture`] - Frame summaries for external grading
//! - [`figma`] - Import of Figma REST node JSON
//! - [`store`] - File-backed guideline persistence
//! - [`config`] - Configuration file support
//! - [`types`] - Core data types and structures
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```
//! use brandcheck_lib::{analyze, parse_guidelines, DesignElement, ElementKind, Paint};
//!
//! let record = parse_guidelines("Primary: #667EEA\nHeadings use Inter at 24px", &[])?;
//!
//! let mut card = DesignElement::new("Card", ElementKind::Frame);
//! card.fills = Some(vec![Paint::solid(1.0, 0.0, 0.0)]);
//!
//! let report = analyze(&[card], Some(&record))?;
//! assert_eq!(report.violations.len(), 1);
//! # Ok::<(), brandcheck_lib::BrandError>(())
//! ```

pub mod analyzer;
pub mod capture;
pub mod color;
pub mod config;
pub mod error;
pub mod figma;
pub mod input;
pub mod output;
pub mod parser;
pub mod store;
pub mod types;

pub use analyzer::{analyze, derive_insights, ComplianceAnalyzer};
pub use capture::{capture_frame, FrameSummary};
pub use config::Config;
pub use error::{BrandError, ErrorCategory, ErrorPayload, Result};
pub use figma::{design_element_from_figma, design_elements_from_figma_json};
pub use input::SelectionFormat;
pub use output::{
    AnalyzeOutput, BrandOutput, CaptureOutput, ErrorOutput, ParseOutput, OUTPUT_VERSION,
};
pub use parser::{parse_guidelines, with_ai_understanding, GuidelineParser};
pub use store::{GuidelineStore, GUIDELINES_KEY};
pub use types::{
    AiUnderstanding, BrandColor, ColorSource, ComplianceReport, DesignElement, Dimensions,
    ElementKind, Finding, FindingType, FontFamily, FontSize, GuidelineRecord, Insights, Padding,
    Paint, Severity, TextRun,
};
