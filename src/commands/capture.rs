use std::path::{Path, PathBuf};
use std::process::ExitCode;

use brandcheck_lib::input::load_selection;
use brandcheck_lib::{capture_frame, BrandError, BrandOutput, CaptureOutput, OUTPUT_VERSION};
use tracing::debug;

use crate::cli::{InputFormat, OutputFormat};
use crate::formatting::{render_error, write_output};
use crate::settings::load_config;

/// Run the capture command.
pub fn run_capture(
    config_path: Option<PathBuf>,
    input: PathBuf,
    input_format: InputFormat,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let body = match build_capture_output(config_path, &input, input_format) {
        Ok(body) => body,
        Err(err) => return render_error(err, format, output),
    };
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(BrandError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

fn build_capture_output(
    config_path: Option<PathBuf>,
    input: &Path,
    input_format: InputFormat,
) -> brandcheck_lib::Result<BrandOutput> {
    load_config(config_path.as_deref())?;

    let selection = load_selection(input, input_format.into())?;
    let Some(frame) = selection.first() else {
        return Err(BrandError::missing_input(
            "Selection is empty; select a frame to capture",
        ));
    };
    if selection.len() > 1 {
        debug!(
            ignored = selection.len() - 1,
            "capturing the first selected element only"
        );
    }

    Ok(BrandOutput::Capture(CaptureOutput {
        version: OUTPUT_VERSION.to_string(),
        input: input.display().to_string(),
        frame: capture_frame(frame),
    }))
}
