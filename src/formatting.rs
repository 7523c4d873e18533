use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use brandcheck_lib::{BrandError, BrandOutput, ErrorOutput, Severity, OUTPUT_VERSION};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &BrandOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: BrandError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = BrandOutput::Error(ErrorOutput {
        version: OUTPUT_VERSION.to_string(),
        message: Some(err.to_string()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    // Exit code 2 is reserved for errors; --fail-on trips use 1.
    ExitCode::from(2)
}

fn write_json_output(body: &BrandOutput, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

fn write_pretty_output(body: &BrandOutput, output: Option<&Path>) -> io::Result<()> {
    let use_human = output.is_none() && std::io::stdout().is_terminal();

    if use_human {
        println!("{}", format_pretty(body, true));
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &BrandOutput, colorize: bool) -> String {
    let mut buf = String::new();
    match body {
        BrandOutput::Parse(out) => {
            let g = &out.guidelines;
            let header = color("[PARSE]", "36", colorize);
            writeln!(buf, "{} Brand guidelines from {}", header, out.input).ok();
            writeln!(buf, "Colors:").ok();
            for c in &g.colors {
                writeln!(buf, "- {:8} {}", c.hex, c.name).ok();
            }
            writeln!(buf, "Fonts: {}", g.font_families().join(", ")).ok();
            if !g.typography.sizes.is_empty() {
                writeln!(buf, "Type scale: {}", join_px(&g.typography.sizes)).ok();
            }
            writeln!(buf, "Spacing scale: {}", join_px(&g.spacing.scale)).ok();
            if let Some(dims) = &g.dimensions {
                let show = |v: Option<u32>| v.map(|v| format!("{v}px")).unwrap_or_else(|| "-".into());
                writeln!(
                    buf,
                    "Minimum size: {} x {}",
                    show(dims.min_width),
                    show(dims.min_height)
                )
                .ok();
            }
            if let Some(path) = &out.stored_at {
                writeln!(buf, "Saved to {}", path.display()).ok();
            }
        }
        BrandOutput::Analyze(out) => {
            let r = &out.report;
            let status = if out.passed { "PASS" } else { "FAIL" };
            let status_colored = color(status, if out.passed { "32" } else { "31" }, colorize);
            writeln!(
                buf,
                "{} Brand compliance: {} \"{}\" ({} selected)",
                status_colored, r.element_type, r.name, r.selection_count
            )
            .ok();
            if let Some(insights) = &r.insights {
                let rate = format!("{}%", insights.compliance_rate);
                writeln!(
                    buf,
                    "{} {}",
                    color(&rate, rate_color_code(insights.compliance_rate), colorize),
                    insights.headline
                )
                .ok();
                for highlight in &insights.highlights {
                    writeln!(buf, "  {}", highlight).ok();
                }
            }
            if !r.violations.is_empty() {
                writeln!(buf, "Violations:").ok();
                for v in &r.violations {
                    let tag = format!("[{}]", v.severity);
                    writeln!(
                        buf,
                        "- {} {:10} {}",
                        color(&tag, severity_color_code(v.severity), colorize),
                        v.finding_type.to_string(),
                        v.message
                    )
                    .ok();
                }
            }
            if !r.good_practices.is_empty() {
                writeln!(buf, "Good practices:").ok();
                for note in &r.good_practices {
                    writeln!(buf, "- {}", note).ok();
                }
            }
            if !r.suggestions.is_empty() {
                writeln!(buf, "Suggestions:").ok();
                for s in &r.suggestions {
                    writeln!(buf, "- {}", s).ok();
                }
            }
        }
        BrandOutput::Capture(out) => {
            let f = &out.frame;
            let header = color("[CAPTURE]", "34", colorize);
            writeln!(buf, "{} {} \"{}\"", header, f.frame_type, f.frame_name).ok();
            if let (Some(w), Some(h)) = (f.dimensions.width, f.dimensions.height) {
                writeln!(buf, "Size: {} x {}", w, h).ok();
            }
            let hexes: Vec<&str> = f.colors.iter().map(|c| c.hex.as_str()).collect();
            writeln!(buf, "Colors: {}", hexes.join(", ")).ok();
            writeln!(buf, "Fonts: {}", f.fonts.join(", ")).ok();
            writeln!(
                buf,
                "Text runs: {}, images: {}",
                f.text_content.len(),
                f.image_count
            )
            .ok();
        }
        BrandOutput::Error(out) => {
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or(out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
        }
    }
    buf
}

fn join_px(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| format!("{v}px"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

fn rate_color_code(rate: u8) -> &'static str {
    if rate >= 90 {
        "32" // green
    } else if rate >= 70 {
        "33" // yellow
    } else {
        "31" // red
    }
}

fn severity_color_code(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "31",
        Severity::Medium => "33",
        Severity::Low => "36",
    }
}

/// Determine exit code for the analyze command.
pub fn exit_code_for_analyze(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcheck_lib::{
        capture_frame, parse_guidelines, AnalyzeOutput, CaptureOutput, ComplianceReport,
        DesignElement, ElementKind, ErrorCategory, ErrorPayload, FindingType, ParseOutput,
    };

    #[test]
    fn exit_code_for_analyze_maps_pass_fail() {
        assert_eq!(exit_code_for_analyze(true), ExitCode::SUCCESS);
        assert_eq!(exit_code_for_analyze(false), ExitCode::from(1));
    }

    #[test]
    fn render_error_always_returns_fatal_exit_code() {
        let code = render_error(
            BrandError::Config("boom".to_string()),
            OutputFormat::Json,
            None,
        );
        assert_eq!(code, ExitCode::from(2));
    }

    #[test]
    fn format_pretty_lists_violations_and_suggestions() {
        let mut report = ComplianceReport::new("FRAME", "Card", 1);
        report.violation(FindingType::Color, Severity::Medium, "Fill color #FF0000 is off palette");
        report.suggest("Replace #FF0000 with Primary");
        let output = BrandOutput::Analyze(AnalyzeOutput {
            version: OUTPUT_VERSION.to_string(),
            input: "card.json".into(),
            guidelines_source: "store".into(),
            report,
            fail_on: Some(Severity::Medium),
            passed: false,
        });

        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("FAIL Brand compliance: FRAME \"Card\""));
        assert!(pretty.contains("Violations:"));
        assert!(pretty.contains("[medium] color"));
        assert!(pretty.contains("Suggestions:"));
        assert!(!pretty.contains("\x1b["));
    }

    #[test]
    fn format_pretty_shows_parsed_palette() {
        let guidelines = parse_guidelines("Primary: #1E40AF\nBody 16px", &[]).expect("parse");
        let output = BrandOutput::Parse(ParseOutput {
            version: OUTPUT_VERSION.to_string(),
            input: "brand.txt".into(),
            guidelines,
            stored_at: Some(PathBuf::from("/tmp/store.json")),
        });
        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("#1E40AF  Primary"));
        assert!(pretty.contains("Type scale: 16px"));
        assert!(pretty.contains("Saved to /tmp/store.json"));
    }

    #[test]
    fn format_pretty_summarizes_capture() {
        let output = BrandOutput::Capture(CaptureOutput {
            version: OUTPUT_VERSION.to_string(),
            input: "frame.json".into(),
            frame: capture_frame(&DesignElement::new("Hero", ElementKind::Frame)),
        });
        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("[CAPTURE] FRAME \"Hero\""));
        assert!(pretty.contains("Text runs: 0, images: 0"));
    }

    #[test]
    fn format_pretty_error_includes_hint() {
        let output = BrandOutput::Error(ErrorOutput {
            version: OUTPUT_VERSION.to_string(),
            message: Some("bad input".to_string()),
            error: ErrorPayload::new(ErrorCategory::Config, "bad input".to_string(), "check flags"),
        });
        let pretty = format_pretty(&output, true);
        assert!(pretty.contains("bad input"));
        assert!(pretty.contains("Hint: check flags"));
    }
}
