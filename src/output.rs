use crate::capture::FrameSummary;
use crate::error::ErrorPayload;
use crate::types::{ComplianceReport, GuidelineRecord, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Schema version for output payloads.
pub const OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum BrandOutput {
    Parse(ParseOutput),
    Analyze(AnalyzeOutput),
    Capture(CaptureOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutput {
    pub version: String,
    pub input: String,
    pub guidelines: GuidelineRecord,
    /// Store file the record was written to; absent with `--no-save`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutput {
    pub version: String,
    pub input: String,
    /// Where the guideline record came from (a file or the store).
    pub guidelines_source: String,
    pub report: ComplianceReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<Severity>,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOutput {
    pub version: String,
    pub input: String,
    pub frame: FrameSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}
