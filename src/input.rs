//! Loading of guideline documents, selections, and side inputs from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::figma::design_elements_from_figma_json;
use crate::types::{AiUnderstanding, DesignElement, GuidelineRecord};
use crate::{BrandError, Result};

/// Shape of a selection file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionFormat {
    /// Figma REST JSON when it looks like it, element JSON otherwise.
    #[default]
    Auto,
    Element,
    Figma,
}

/// Figma REST keys that never appear in element JSON.
const FIGMA_MARKERS: [&str; 5] = [
    "nodes",
    "document",
    "absoluteBoundingBox",
    "style",
    "characterStyleOverrides",
];

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(BrandError::Config(format!(
            "File not found: {}",
            path.display()
        )))
    }
}

/// Reads a guideline document as text.
pub fn read_document(path: &Path) -> Result<String> {
    ensure_exists(path)?;
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), chars = content.chars().count(), "read guideline document");
    Ok(content)
}

/// Reads a JSON or YAML file, chosen by extension.
pub fn read_structured(path: &Path) -> Result<Value> {
    ensure_exists(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;
    match ext.as_str() {
        "json" => Ok(serde_json::from_str(&content)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        other => Err(BrandError::Config(format!(
            "Unsupported selection file extension '{}' for {}",
            other,
            path.display()
        ))),
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

fn looks_like_figma(value: &Value) -> bool {
    match value {
        Value::Object(map) => FIGMA_MARKERS.iter().any(|key| map.contains_key(*key)),
        Value::Array(items) => items.first().is_some_and(looks_like_figma),
        _ => false,
    }
}

/// Converts a parsed selection document into design elements.
///
/// Accepts a single element or an array of elements; an empty array yields
/// an empty selection.
pub fn selection_from_value(value: Value, format: SelectionFormat) -> Result<Vec<DesignElement>> {
    let figma = match format {
        SelectionFormat::Auto => looks_like_figma(&value),
        SelectionFormat::Element => false,
        SelectionFormat::Figma => true,
    };

    if figma {
        return match value {
            Value::Array(items) => items
                .into_iter()
                .map(design_elements_from_figma_json)
                .collect::<Result<Vec<_>>>()
                .map(|nested| nested.into_iter().flatten().collect()),
            other => design_elements_from_figma_json(other),
        };
    }

    match value {
        Value::Array(_) => from_value(value),
        Value::Object(_) => Ok(vec![from_value(value)?]),
        _ => Err(BrandError::invalid_input(
            "selection must be an element object or an array of elements",
        )),
    }
}

/// Loads a selection file.
pub fn load_selection(path: &Path, format: SelectionFormat) -> Result<Vec<DesignElement>> {
    let selection = selection_from_value(read_structured(path)?, format)?;
    debug!(path = %path.display(), elements = selection.len(), "loaded selection");
    Ok(selection)
}

/// Loads a guideline record exported earlier, validating it.
pub fn load_guidelines_file(path: &Path) -> Result<GuidelineRecord> {
    let record: GuidelineRecord = from_value(read_structured(path)?)?;
    record.validate().map_err(|msg| {
        BrandError::invalid_input(format!("{} is not a valid guideline record: {msg}", path.display()))
    })?;
    Ok(record)
}

/// Loads a list of hex codes produced by an image color-extraction step.
pub fn load_extracted_colors(path: &Path) -> Result<Vec<String>> {
    from_value(read_structured(path)?)
}

pub fn load_ai_understanding(path: &Path) -> Result<AiUnderstanding> {
    from_value(read_structured(path)?)
}
