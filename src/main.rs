mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_analyze, run_capture, run_parse, AnalyzeArgs, ParseArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Parse {
            input,
            extracted_colors,
            ai_understanding,
            extra_fonts,
            store,
            no_save,
            format,
            output,
        } => run_parse(
            args.config,
            ParseArgs {
                input,
                extracted_colors,
                ai_understanding,
                extra_fonts,
                store,
                no_save,
            },
            format,
            output,
        ),
        Commands::Analyze {
            input,
            input_format,
            guidelines,
            store,
            fail_on,
            format,
            output,
        } => run_analyze(
            args.config,
            AnalyzeArgs {
                input,
                input_format,
                guidelines,
                store,
                fail_on,
            },
            format,
            output,
        ),
        Commands::Capture {
            input,
            input_format,
            format,
            output,
        } => run_capture(args.config, input, input_format, format, output),
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
