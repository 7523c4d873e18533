//! Optional TOML configuration.
//!
//! Lookup order: explicit path > `$HOME/.config/brandcheck/config.toml` >
//! built-in defaults. Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::ComplianceAnalyzer;
use crate::parser::{GuidelineParser, MAX_RAW_CONTENT_CHARS};

const CONFIG_DIR: &str = ".config/brandcheck";
const CONFIG_FILE: &str = "config.toml";
const STORE_FILE: &str = "store.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("{path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Guideline store file; defaults to `$HOME/.config/brandcheck/store.json`.
    pub store_path: Option<PathBuf>,
    pub parser: ParserConfig,
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub raw_content_limit: usize,
    pub label_window: usize,
    pub extra_fonts: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let parser = GuidelineParser::default();
        Self {
            raw_content_limit: parser.raw_content_limit,
            label_window: parser.label_window,
            extra_fonts: parser.extra_fonts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub tolerance: f64,
    pub max_palette_colors: usize,
    pub max_font_families: usize,
    pub max_type_sizes: usize,
    pub min_balanced_type_sizes: usize,
    pub include_insights: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let analyzer = ComplianceAnalyzer::default();
        Self {
            tolerance: analyzer.tolerance,
            max_palette_colors: analyzer.max_palette_colors,
            max_font_families: analyzer.max_font_families,
            max_type_sizes: analyzer.max_type_sizes,
            min_balanced_type_sizes: analyzer.min_balanced_type_sizes,
            include_insights: analyzer.include_insights,
        }
    }
}

impl Config {
    /// `$HOME/.config/brandcheck/config.toml`, if `HOME` is set.
    pub fn central_config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads `path` when given (it must exist), else the central config when
    /// present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => match Self::central_config_path() {
                Some(central) if central.is_file() => Self::from_file(&central),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        let p = &self.parser;
        if p.raw_content_limit == 0 || p.raw_content_limit > MAX_RAW_CONTENT_CHARS {
            return Err(format!(
                "parser.raw_content_limit must be between 1 and {MAX_RAW_CONTENT_CHARS}"
            ));
        }
        if p.label_window == 0 {
            return Err("parser.label_window must be greater than zero".to_string());
        }
        if p.extra_fonts.iter().any(|f| f.trim().is_empty()) {
            return Err("parser.extra_fonts must not contain empty names".to_string());
        }

        let a = &self.analyzer;
        if !a.tolerance.is_finite() || a.tolerance < 0.0 {
            return Err("analyzer.tolerance must be a non-negative number".to_string());
        }
        if a.max_palette_colors == 0 || a.max_font_families == 0 || a.max_type_sizes == 0 {
            return Err("analyzer limits must be greater than zero".to_string());
        }
        if a.min_balanced_type_sizes > a.max_type_sizes {
            return Err(
                "analyzer.min_balanced_type_sizes must not exceed analyzer.max_type_sizes"
                    .to_string(),
            );
        }
        Ok(())
    }

    /// Configured store file, else the per-user default, else a file in the
    /// working directory.
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .or_else(|| home_dir().map(|home| home.join(CONFIG_DIR).join(STORE_FILE)))
            .unwrap_or_else(|| PathBuf::from("brandcheck-store.json"))
    }

    pub fn guideline_parser(&self) -> GuidelineParser {
        GuidelineParser {
            raw_content_limit: self.parser.raw_content_limit,
            label_window: self.parser.label_window,
            extra_fonts: self.parser.extra_fonts.clone(),
        }
    }

    pub fn compliance_analyzer(&self) -> ComplianceAnalyzer {
        let a = &self.analyzer;
        ComplianceAnalyzer {
            tolerance: a.tolerance,
            max_palette_colors: a.max_palette_colors,
            max_font_families: a.max_font_families,
            max_type_sizes: a.max_type_sizes,
            min_balanced_type_sizes: a.min_balanced_type_sizes,
            include_insights: a.include_insights,
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_values_match_library_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.parser.raw_content_limit, 10_000);
        assert_eq!(cfg.parser.label_window, 30);
        assert!((cfg.analyzer.tolerance - 1.0).abs() < f64::EPSILON);
        assert_eq!(cfg.analyzer.max_palette_colors, 5);
        assert_eq!(cfg.analyzer.max_font_families, 3);
        assert_eq!(cfg.analyzer.max_type_sizes, 8);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "store_path = \"/tmp/guidelines.json\"\n\n[parser]\nextra_fonts = [\"Acme Grotesk\"]\n\n[analyzer]\nmax_palette_colors = 7"
        )
        .expect("write");

        let cfg = Config::load(Some(file.path())).expect("load");
        assert_eq!(cfg.store_path, Some(PathBuf::from("/tmp/guidelines.json")));
        assert_eq!(cfg.parser.extra_fonts, vec!["Acme Grotesk"]);
        assert_eq!(cfg.parser.label_window, 30);
        assert_eq!(cfg.analyzer.max_palette_colors, 7);
        assert_eq!(cfg.compliance_analyzer().max_palette_colors, 7);
        assert_eq!(cfg.guideline_parser().extra_fonts, vec!["Acme Grotesk"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[analyzer]\nmax_colours = 3").expect("write");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn missing_explicit_path_is_not_found() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("file not found"));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let mut cfg = Config::default();
        cfg.parser.label_window = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.analyzer.tolerance = -1.0;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.analyzer.min_balanced_type_sizes = 9;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.parser.raw_content_limit = 20_000;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn explicit_store_path_wins() {
        let cfg = Config {
            store_path: Some(PathBuf::from("custom.json")),
            ..Config::default()
        };
        assert_eq!(cfg.resolved_store_path(), PathBuf::from("custom.json"));
    }
}
