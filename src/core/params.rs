use serde::{Deserialize, Serialize};

use crate::types::TileLayer;

/// Rendering parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderParams {
    pub tile_layer: TileLayer,
    /// Initial zoom level of the viewport
    pub zoom_start: u8,
    /// Circle radius in meters
    pub radius_m: f64,
    /// Stroke width in pixels
    pub stroke_weight: f64,
    /// Fill opacity in [0, 1]; kept below the stroke opacity so each marker
    /// reads as a translucent disc with a solid outline
    pub fill_opacity: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            tile_layer: TileLayer::CartodbPositron,
            zoom_start: 12,
            radius_m: 100.0,
            stroke_weight: 3.0,
            fill_opacity: 0.2,
        }
    }
}
