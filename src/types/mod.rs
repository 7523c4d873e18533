//! Core data types shared by the parser, analyzer, and CLI.
//!
//! - [`guidelines`] - The structured [`GuidelineRecord`] derived from a brand document
//! - [`element`] - The read-only [`DesignElement`] tree supplied by the design host
//! - [`report`] - The [`ComplianceReport`] produced per analysis call

pub mod element;
pub mod guidelines;
pub mod report;

pub use element::{
    DesignElement, ElementKind, FontFamily, FontSize, Padding, Paint, PaintKind, TextRun,
    UnitColor,
};
pub use guidelines::{
    AiUnderstanding, BrandColor, ColorSource, Dimensions, FontFace, GuidelineRecord, Spacing,
    Typography, DEFAULT_SPACING_SCALE,
};
pub use report::{ComplianceReport, Finding, FindingType, Insights, Severity};
