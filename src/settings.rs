use std::path::{Path, PathBuf};

use brandcheck_lib::config::ConfigError;
use brandcheck_lib::{BrandError, ComplianceAnalyzer, Config, GuidelineParser};

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/brandcheck/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, BrandError> {
    let cfg = Config::load(path).map_err(|e| match e {
        ConfigError::NotFound(_) => BrandError::Config(format!("Config {e}")),
        other => {
            let loc = path
                .map(|p| p.display().to_string())
                .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
                .unwrap_or_else(|| "defaults".to_string());
            BrandError::Config(format!("Failed to read config {}: {}", loc, other))
        }
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        BrandError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Store file from the CLI flag when present, else from config.
pub fn resolve_store_path(cli_store: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_store.unwrap_or_else(|| config.resolved_store_path())
}

/// Parser from config, with CLI extra fonts appended.
pub fn resolve_parser(config: &Config, cli_extra_fonts: &[String]) -> GuidelineParser {
    let mut parser = config.guideline_parser();
    for font in cli_extra_fonts {
        if !parser
            .extra_fonts
            .iter()
            .any(|f| f.eq_ignore_ascii_case(font))
        {
            parser.extra_fonts.push(font.clone());
        }
    }
    parser
}

/// Format effective config as a single-line string.
pub fn format_effective_config(
    parser: &GuidelineParser,
    analyzer: &ComplianceAnalyzer,
    store_path: &Path,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: store={}, parser: raw_content_limit={}, label_window={}, extra_fonts=[{}], analyzer: tolerance={:.2}, max_colors={}, max_fonts={}, max_sizes={}, balanced_sizes>={}, insights={}",
        store_path.display(),
        parser.raw_content_limit,
        parser.label_window,
        parser.extra_fonts.join(", "),
        analyzer.tolerance,
        analyzer.max_palette_colors,
        analyzer.max_font_families,
        analyzer.max_type_sizes,
        analyzer.min_balanced_type_sizes,
        analyzer.include_insights
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_store_overrides_config() {
        let config = Config {
            store_path: Some(PathBuf::from("from-config.json")),
            ..Config::default()
        };
        assert_eq!(
            resolve_store_path(Some(PathBuf::from("from-cli.json")), &config),
            PathBuf::from("from-cli.json")
        );
        assert_eq!(
            resolve_store_path(None, &config),
            PathBuf::from("from-config.json")
        );
    }

    #[test]
    fn cli_extra_fonts_are_appended_once() {
        let mut config = Config::default();
        config.parser.extra_fonts = vec!["Acme Grotesk".to_string()];
        let parser = resolve_parser(
            &config,
            &["acme grotesk".to_string(), "Acme Serif".to_string()],
        );
        assert_eq!(parser.extra_fonts, vec!["Acme Grotesk", "Acme Serif"]);
    }

    #[test]
    fn missing_config_file_mentions_file_not_found() {
        let err = load_config(Some(Path::new("/no/such/brandcheck.toml"))).unwrap_err();
        let payload = err.to_payload();
        assert!(payload.message.contains("file not found"));
        assert!(payload
            .remediation
            .unwrap_or_default()
            .contains("absolute path"));
    }

    #[test]
    fn effective_config_line_lists_values() {
        let line = format_effective_config(
            &GuidelineParser::default(),
            &ComplianceAnalyzer::default(),
            Path::new("store.json"),
            None,
        );
        assert!(line.starts_with("Effective config [defaults]"));
        assert!(line.contains("store=store.json"));
        assert!(line.contains("max_colors=5"));
    }
}
