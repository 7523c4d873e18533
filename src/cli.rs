use brandcheck_lib::{SelectionFormat, Severity};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brandcheck")]
#[command(
    version,
    about = "Brand Check - Extract brand guidelines and check designs against them",
    long_about = "Brand Check\n\nModes:\n- parse: extract colors, fonts, type scale, spacing, and minimum dimensions from a guideline document and save them.\n- analyze: check a design selection (element JSON/YAML or Figma REST JSON) against the saved guidelines.\n- capture: summarize a frame's colors, fonts, text, and images for external grading.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose (debug) logging on stderr")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) with [parser]/[analyzer] defaults and store_path; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a guideline document and save the extracted record
    Parse {
        #[arg(long, short, help = "Guideline document (plain text)")]
        input: PathBuf,

        #[arg(
            long,
            value_name = "PATH",
            help = "JSON/YAML array of hex colors extracted from document images"
        )]
        extracted_colors: Option<PathBuf>,

        #[arg(
            long,
            value_name = "PATH",
            help = "JSON/YAML object with the brand narrative to attach as aiUnderstanding"
        )]
        ai_understanding: Option<PathBuf>,

        #[arg(
            long = "extra-font",
            value_name = "FAMILY",
            help = "Additional font family to recognize (repeatable; adds to config)"
        )]
        extra_fonts: Vec<String>,

        #[arg(long, value_name = "PATH", help = "Guideline store file (overrides config)")]
        store: Option<PathBuf>,

        #[arg(long, help = "Print the record without saving it to the store")]
        no_save: bool,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Check a design selection against brand guidelines
    Analyze {
        #[arg(long, short, help = "Selection file (JSON or YAML): one element or an array")]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "auto", help = "Selection file shape")]
        input_format: InputFormat,

        #[arg(
            long,
            value_name = "PATH",
            help = "Guideline record file to use instead of the store"
        )]
        guidelines: Option<PathBuf>,

        #[arg(long, value_name = "PATH", help = "Guideline store file (overrides config)")]
        store: Option<PathBuf>,

        #[arg(
            long,
            value_enum,
            help = "Exit with code 1 when a violation of this severity or higher is found"
        )]
        fail_on: Option<FailOn>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Summarize a frame for external grading
    Capture {
        #[arg(long, short, help = "Selection file (JSON or YAML); the first element is captured")]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "auto", help = "Selection file shape")]
        input_format: InputFormat,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Auto,
    Element,
    Figma,
}

impl From<InputFormat> for SelectionFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Auto => SelectionFormat::Auto,
            InputFormat::Element => SelectionFormat::Element,
            InputFormat::Figma => SelectionFormat::Figma,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    Low,
    Medium,
    High,
}

impl From<FailOn> for Severity {
    fn from(level: FailOn) -> Self {
        match level {
            FailOn::Low => Severity::Low,
            FailOn::Medium => Severity::Medium,
            FailOn::High => Severity::High,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, FailOn, InputFormat, OutputFormat};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parse_command_uses_defaults() {
        let cli = Cli::parse_from(["brandcheck", "parse", "--input", "brand.txt"]);

        assert!(!cli.verbose);
        assert!(cli.config.is_none());

        match cli.command {
            Commands::Parse {
                input,
                extracted_colors,
                ai_understanding,
                extra_fonts,
                store,
                no_save,
                format,
                output,
            } => {
                assert_eq!(input, Path::new("brand.txt"));
                assert!(extracted_colors.is_none());
                assert!(ai_understanding.is_none());
                assert!(extra_fonts.is_empty());
                assert!(store.is_none());
                assert!(!no_save);
                assert!(matches!(format, OutputFormat::Json));
                assert!(output.is_none());
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn analyze_command_respects_overrides() {
        let cli = Cli::parse_from([
            "brandcheck",
            "analyze",
            "--input",
            "selection.yaml",
            "--input-format",
            "figma",
            "--guidelines",
            "record.json",
            "--fail-on",
            "medium",
            "--format",
            "pretty",
            "--output",
            "report.json",
            "--config",
            "brandcheck.toml",
        ]);

        assert_eq!(cli.config.as_deref(), Some(Path::new("brandcheck.toml")));
        match cli.command {
            Commands::Analyze {
                input,
                input_format,
                guidelines,
                store,
                fail_on,
                format,
                output,
            } => {
                assert_eq!(input, Path::new("selection.yaml"));
                assert_eq!(input_format, InputFormat::Figma);
                assert_eq!(guidelines.as_deref(), Some(Path::new("record.json")));
                assert!(store.is_none());
                assert_eq!(fail_on, Some(FailOn::Medium));
                assert!(matches!(format, OutputFormat::Pretty));
                assert_eq!(output.as_deref(), Some(Path::new("report.json")));
            }
            _ => panic!("expected analyze command with overrides"),
        }
    }

    #[test]
    fn parse_command_collects_repeated_extra_fonts() {
        let cli = Cli::parse_from([
            "brandcheck",
            "--verbose",
            "parse",
            "-i",
            "brand.txt",
            "--extra-font",
            "Acme Grotesk",
            "--extra-font",
            "Acme Serif",
            "--no-save",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Parse {
                extra_fonts,
                no_save,
                ..
            } => {
                assert_eq!(extra_fonts, vec!["Acme Grotesk", "Acme Serif"]);
                assert!(no_save);
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn capture_command_defaults_to_auto_input() {
        let cli = Cli::parse_from(["brandcheck", "capture", "--input", "frame.json"]);
        match cli.command {
            Commands::Capture { input_format, .. } => {
                assert_eq!(input_format, InputFormat::Auto);
            }
            _ => panic!("expected capture command"),
        }
    }

    #[test]
    fn unknown_fail_on_level_is_rejected() {
        let result = Cli::try_parse_from([
            "brandcheck",
            "analyze",
            "--input",
            "s.json",
            "--fail-on",
            "critical",
        ]);
        assert!(result.is_err());
    }
}
