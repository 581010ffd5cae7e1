//! JSON configuration files for the `gradient` command.
//!
//! ```json
//! {
//!   "name": "Sunset",
//!   "start": { "hue": 10.0, "saturation": 0.6, "value": 0.9 },
//!   "end": { "hue": 60.0, "saturation": 0.9, "value": 0.5 },
//!   "steps": { "hue": 6, "saturation": 3, "value": 4 },
//!   "deduplicate": true,
//!   "formats": ["gpl", "json"]
//! }
//! ```
//!
//! Every field is optional; command-line flags take precedence.

use anyhow::{Context, Result};
use gradient_palette::{Hsv, OutputFormat, StepCounts};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    pub name: Option<String>,
    pub start: Option<Hsv>,
    pub end: Option<Hsv>,
    pub steps: Option<StepCounts>,
    pub deduplicate: Option<bool>,
    pub formats: Option<Vec<OutputFormat>>,
}

impl GradientConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
