//! Detection parameters: reference colors and mask cleanup thresholds.
//!
//! Configuration is plain JSON so thresholds can be tuned per photo without
//! recompiling:
//!
//! ```json
//! {
//!   "references": [
//!     { "name": "green", "center": [35, 95, 20], "radius": 60.0, "marker": [255, 0, 0] }
//!   ],
//!   "cleanup": { "min_size": 4000, "hole_size": 2000, "min_region_area": 5 }
//! }
//! ```

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Target color for one kind of candy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReference {
    pub name: String,

    /// RGB center of the accepted color sphere
    pub center: [u8; 3],

    /// Radius of the sphere in RGB units (exclusive)
    pub radius: f32,

    /// Dot color used when highlighting detections
    #[serde(default = "default_marker")]
    pub marker: [u8; 3],
}

fn default_marker() -> [u8; 3] {
    [255, 0, 0]
}

impl ColorReference {
    pub fn new(name: impl Into<String>, center: [u8; 3], radius: f32) -> Self {
        Self {
            name: name.into(),
            center,
            radius,
            marker: default_marker(),
        }
    }

    pub fn with_marker(mut self, marker: [u8; 3]) -> Self {
        self.marker = marker;
        self
    }

    pub fn green() -> Self {
        Self::new("green", [35, 95, 20], 60.0).with_marker([255, 0, 0])
    }

    pub fn brown() -> Self {
        Self::new("brown", [74, 4, 4], 65.0).with_marker([255, 255, 255])
    }
}

/// Mask cleanup thresholds, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Set components smaller than this are removed
    pub min_size: u32,

    /// Holes smaller than this are filled
    pub hole_size: u32,

    /// Regions must be strictly larger than this to yield a centroid
    #[serde(default = "default_min_region_area")]
    pub min_region_area: u32,
}

fn default_min_region_area() -> u32 {
    5
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            min_size: 4000,
            hole_size: 2000,
            min_region_area: default_min_region_area(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub references: Vec<ColorReference>,

    #[serde(default)]
    pub cleanup: CleanupConfig,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            references: vec![ColorReference::green(), ColorReference::brown()],
            cleanup: CleanupConfig::default(),
        }
    }
}

impl DetectionConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.references.is_empty() {
            return Err(anyhow!("references: at least one color reference is required"));
        }

        let mut seen = HashSet::new();
        for reference in &self.references {
            if reference.name.trim().is_empty() {
                return Err(anyhow!("references: name must not be empty"));
            }
            // Names double as debug output directory names
            if reference.name.contains(['/', '\\']) || reference.name.contains("..") {
                return Err(anyhow!(
                    "references: name '{}' must not contain '/', '\\' or '..'",
                    reference.name
                ));
            }
            if !seen.insert(reference.name.as_str()) {
                return Err(anyhow!("references: duplicate name '{}'", reference.name));
            }
            if !reference.radius.is_finite() || reference.radius < 0.0 {
                return Err(anyhow!(
                    "references.{}.radius: expected a non-negative number, got {}",
                    reference.name,
                    reference.radius
                ));
            }
        }

        Ok(())
    }
}
