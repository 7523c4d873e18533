//! File-backed key-value store holding the current guideline record.
//!
//! The file is a JSON object; the record lives under [`GUIDELINES_KEY`] and
//! any other keys are preserved across writes.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::types::GuidelineRecord;
use crate::{BrandError, Result};

/// Key under which the guideline record is stored.
pub const GUIDELINES_KEY: &str = "brand-guidelines";

#[derive(Debug, Clone)]
pub struct GuidelineStore {
    path: PathBuf,
}

impl GuidelineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current record, or `None` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<GuidelineRecord>> {
        let mut entries = self.read_entries()?;
        let Some(value) = entries.remove(GUIDELINES_KEY) else {
            return Ok(None);
        };
        let record: GuidelineRecord = serde_json::from_value(value).map_err(|e| {
            BrandError::Store(format!(
                "stored guidelines in {} are unreadable: {e}",
                self.path.display()
            ))
        })?;
        record.validate().map_err(|msg| {
            BrandError::Store(format!(
                "stored guidelines in {} are invalid: {msg}",
                self.path.display()
            ))
        })?;
        Ok(Some(record))
    }

    /// Replaces the stored record.
    pub fn save(&self, record: &GuidelineRecord) -> Result<()> {
        record
            .validate()
            .map_err(|msg| BrandError::Store(format!("refusing to save invalid guidelines: {msg}")))?;
        let mut entries = self.read_entries()?;
        entries.insert(GUIDELINES_KEY.to_string(), serde_json::to_value(record)?);
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "saved brand guidelines");
        Ok(())
    }

    /// Removes the stored record; returns whether one was present.
    pub fn clear(&self) -> Result<bool> {
        let mut entries = self.read_entries()?;
        if entries.remove(GUIDELINES_KEY).is_none() {
            return Ok(false);
        }
        self.write_entries(&entries)?;
        Ok(true)
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(BrandError::Store(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(BrandError::Store(format!(
                "{} is not valid JSON: {e}",
                self.path.display()
            ))),
        }
    }

    /// Writes to a sibling temp file, then renames over the store.
    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
