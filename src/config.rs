use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::PaintResult;
use crate::stroke::BrushWidth;
use crate::tools::ToolState;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "EFRAME_SKETCH_CONFIG";

/// Startup settings. Read once, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to their defaults
pub struct PaintConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// RGB
    pub background: [u8; 3],
    /// RGB
    pub pen_color: [u8; 3],
    pub brush_width: u8,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1200,
            canvas_height: 800,
            background: [255, 255, 255],
            pen_color: [0, 128, 0],
            brush_width: BrushWidth::MIN,
        }
    }
}

impl PaintConfig {
    pub fn from_json(json: &str) -> PaintResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> PaintResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Config named by [`CONFIG_ENV_VAR`], or the defaults if it is unset or unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring configuration {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Configured canvas size with each side clamped into `1..=max_side`
    pub fn canvas_size(&self, max_side: u32) -> (u32, u32) {
        let clamp = |side: u32| side.clamp(1, max_side.max(1));
        let size = (clamp(self.canvas_width), clamp(self.canvas_height));
        if size != (self.canvas_width, self.canvas_height) {
            log::warn!(
                "Configured canvas {}x{} doesn't fit, using {}x{}",
                self.canvas_width,
                self.canvas_height,
                size.0,
                size.1
            );
        }
        size
    }

    pub fn background(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    pub fn pen_color(&self) -> Color32 {
        let [r, g, b] = self.pen_color;
        Color32::from_rgb(r, g, b)
    }

    /// Brush width, clamped into the supported range
    pub fn brush_width(&self) -> BrushWidth {
        let pixels = self.brush_width.clamp(BrushWidth::MIN, BrushWidth::MAX);
        BrushWidth::new(pixels).unwrap_or_default()
    }

    pub fn tool_state(&self) -> ToolState {
        ToolState::new(self.pen_color(), self.brush_width(), self.background())
    }
}
