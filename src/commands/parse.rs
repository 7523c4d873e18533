use std::path::PathBuf;
use std::process::ExitCode;

use brandcheck_lib::input::{load_ai_understanding, load_extracted_colors, read_document};
use brandcheck_lib::{
    with_ai_understanding, BrandError, BrandOutput, GuidelineStore, ParseOutput, OUTPUT_VERSION,
};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{format_effective_config, load_config, resolve_parser, resolve_store_path};

pub struct ParseArgs {
    pub input: PathBuf,
    pub extracted_colors: Option<PathBuf>,
    pub ai_understanding: Option<PathBuf>,
    pub extra_fonts: Vec<String>,
    pub store: Option<PathBuf>,
    pub no_save: bool,
}

/// Run the parse command.
pub fn run_parse(
    config_path: Option<PathBuf>,
    args: ParseArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let body = match build_parse_output(config_path, args) {
        Ok(body) => body,
        Err(err) => return render_error(err, format, output),
    };
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(BrandError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

fn build_parse_output(
    config_path: Option<PathBuf>,
    args: ParseArgs,
) -> brandcheck_lib::Result<BrandOutput> {
    let config = load_config(config_path.as_deref())?;
    let parser = resolve_parser(&config, &args.extra_fonts);
    let store_path = resolve_store_path(args.store, &config);
    debug!(
        "{}",
        format_effective_config(
            &parser,
            &config.compliance_analyzer(),
            &store_path,
            config_path.as_deref()
        )
    );

    let content = read_document(&args.input)?;
    let extracted = match &args.extracted_colors {
        Some(path) => load_extracted_colors(path)?,
        None => Vec::new(),
    };
    let understanding = args
        .ai_understanding
        .as_deref()
        .map(load_ai_understanding)
        .transpose()?;

    let guidelines = with_ai_understanding(parser.parse(&content, &extracted)?, understanding);

    let stored_at = if args.no_save {
        None
    } else {
        GuidelineStore::new(&store_path).save(&guidelines)?;
        info!(path = %store_path.display(), "brand guidelines saved");
        Some(store_path)
    };

    Ok(BrandOutput::Parse(ParseOutput {
        version: OUTPUT_VERSION.to_string(),
        input: args.input.display().to_string(),
        guidelines,
        stored_at,
    }))
}
