//! Camera configuration
//!
//! Values the camera reads from the user configuration. Keys use the
//! same PascalCase spelling as the game's config file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{log_and_return, Error, Result};

const SOURCE: &str = "rtscam::config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CameraConfig {
    /// Edge-scroll border width as a fraction of the view size
    #[serde(default = "default_edge_move_width")]
    pub edge_move_width: f32,

    /// Fade edge-scroll speed with the distance to the edge instead of
    /// moving at full speed anywhere inside the border
    #[serde(default = "default_edge_move_dynamic")]
    pub edge_move_dynamic: bool,

    /// Vertical field of view in degrees
    #[serde(default = "default_field_of_view")]
    pub field_of_view: f32,
}

fn default_edge_move_width() -> f32 {
    0.02
}
fn default_edge_move_dynamic() -> bool {
    true
}
fn default_field_of_view() -> f32 {
    45.0
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            edge_move_width: default_edge_move_width(),
            edge_move_dynamic: default_edge_move_dynamic(),
            field_of_view: default_field_of_view(),
        }
    }
}

impl CameraConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: CameraConfig = toml::from_str(text)
            .map_err(|e| log_and_return(SOURCE, Error::ConfigParse(e.to_string())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => {
                let cfg = Self::from_toml_str(&text)?;
                crate::cam_info!(SOURCE, "Loaded camera config from {}", path.display());
                Ok(cfg)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                crate::cam_info!(SOURCE, "{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(log_and_return(
                SOURCE,
                Error::Io(format!("{}: {}", path.display(), e)),
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.edge_move_width.is_finite() || self.edge_move_width < 0.0 {
            return Err(log_and_return(
                SOURCE,
                Error::InvalidConfig(format!(
                    "EdgeMoveWidth must be a finite value >= 0, got {}",
                    self.edge_move_width
                )),
            ));
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(log_and_return(
                SOURCE,
                Error::InvalidConfig(format!(
                    "FieldOfView must be in (0, 180) degrees, got {}",
                    self.field_of_view
                )),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
