use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::axis::AxisSpec;
use crate::contour::ContourLevels;
use crate::error::Result;
use crate::fractal::EscapeConfig;

/// Everything needed to produce one escape-time image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub x: AxisSpec,
    pub y: AxisSpec,
    pub escape: EscapeConfig,
    pub levels: Vec<u32>,
    pub output: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            x: AxisSpec::new(-0.32, -0.22, 512),
            y: AxisSpec::new(0.8, 0.9, 512),
            escape: EscapeConfig::default(),
            levels: vec![0, 8, 12, 16, 20, 24, 32],
            output: "escape_field.png".to_string(),
        }
    }
}

impl SceneConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let scene: SceneConfig = serde_json::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> Result<()> {
        self.x.validate()?;
        self.y.validate()?;
        self.escape.validate()?;
        self.contour_levels()?;
        Ok(())
    }

    pub fn contour_levels(&self) -> Result<ContourLevels> {
        ContourLevels::new(self.levels.clone())
    }
}
