//! Playground configuration.
//!
//! Every configurable wrapper in the tutorial (score bounds, date pattern,
//! rating symbols) can be overridden from a TOML or JSON file. Policies are
//! validated while the file is deserialized, so a loaded config always holds
//! usable policies.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WrapperError};
use crate::policies::{Clamped, FormattedDate, Rating};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Integer score bounds (Example 3.1).
    pub exam: Clamped<i32>,
    /// Floating-point score bounds (Example 3.2).
    pub exam_ratio: Clamped<f64>,
    pub birth_date: DateSection,
    pub review: ReviewSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateSection {
    pub format: FormattedDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewSection {
    pub ambiance: Rating,
    pub food: Rating,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        PlaygroundConfig {
            exam: default_exam_bounds(),
            exam_ratio: default_ratio_bounds(),
            birth_date: DateSection::default(),
            review: ReviewSection::default(),
        }
    }
}

impl Default for DateSection {
    fn default() -> Self {
        DateSection {
            format: FormattedDate::iso_8601(),
        }
    }
}

impl Default for ReviewSection {
    fn default() -> Self {
        ReviewSection {
            ambiance: Rating::default(),
            food: Rating::new("🍽"),
        }
    }
}

fn default_exam_bounds() -> Clamped<i32> {
    Clamped::ordered(10, 80)
}

fn default_ratio_bounds() -> Clamped<f64> {
    Clamped::ordered(0.5, 1.0)
}

impl PlaygroundConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| WrapperError::from_toml(err, content))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a `.toml` or `.json` file. Other extensions are sniffed:
    /// content starting with `{` is JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| WrapperError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let config = match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ if content.trim_start().starts_with('{') => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }?;

        debug!(path = %path.display(), "loaded playground config");
        Ok(config)
    }
}
