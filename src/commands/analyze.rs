use std::path::PathBuf;
use std::process::ExitCode;

use brandcheck_lib::input::{load_guidelines_file, load_selection};
use brandcheck_lib::{
    AnalyzeOutput, BrandError, BrandOutput, ComplianceReport, GuidelineStore, Severity,
    OUTPUT_VERSION,
};
use tracing::debug;

use crate::cli::{FailOn, InputFormat, OutputFormat};
use crate::formatting::{exit_code_for_analyze, render_error, write_output};
use crate::settings::{format_effective_config, load_config, resolve_store_path};

pub struct AnalyzeArgs {
    pub input: PathBuf,
    pub input_format: InputFormat,
    pub guidelines: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub fail_on: Option<FailOn>,
}

/// Run the analyze command.
pub fn run_analyze(
    config_path: Option<PathBuf>,
    args: AnalyzeArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let (body, passed) = match build_analyze_output(config_path, args) {
        Ok(result) => result,
        Err(err) => return render_error(err, format, output),
    };
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(BrandError::Config(err.to_string()), format, output);
    }
    exit_code_for_analyze(passed)
}

/// Whether the report stays below the `--fail-on` threshold.
pub fn passes(report: &ComplianceReport, fail_on: Option<Severity>) -> bool {
    match (fail_on, report.max_severity()) {
        (Some(threshold), Some(worst)) => worst < threshold,
        _ => true,
    }
}

fn build_analyze_output(
    config_path: Option<PathBuf>,
    args: AnalyzeArgs,
) -> brandcheck_lib::Result<(BrandOutput, bool)> {
    let config = load_config(config_path.as_deref())?;
    let analyzer = config.compliance_analyzer();
    let store_path = resolve_store_path(args.store, &config);
    debug!(
        "{}",
        format_effective_config(
            &config.guideline_parser(),
            &analyzer,
            &store_path,
            config_path.as_deref()
        )
    );

    let selection = load_selection(&args.input, args.input_format.into())?;

    let (guidelines, source) = match &args.guidelines {
        Some(path) => (Some(load_guidelines_file(path)?), path.display().to_string()),
        None => (
            GuidelineStore::new(&store_path).load()?,
            store_path.display().to_string(),
        ),
    };

    let report = analyzer.analyze(&selection, guidelines.as_ref())?;
    let fail_on = args.fail_on.map(Severity::from);
    let passed = passes(&report, fail_on);

    let body = BrandOutput::Analyze(AnalyzeOutput {
        version: OUTPUT_VERSION.to_string(),
        input: args.input.display().to_string(),
        guidelines_source: source,
        report,
        fail_on,
        passed,
    });
    Ok((body, passed))
}
