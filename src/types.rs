//! Shared types and enums used across PINMAP.
//! Includes the `TileLayer` basemap styles and their tile-server endpoints.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Named basemap styles the canvas can reference.
///
/// Each style maps to a public tile-server URL template and the attribution
/// string its terms of use require.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum TileLayer {
    CartodbPositron,
    CartodbDarkMatter,
    OpenStreetMap,
}

impl TileLayer {
    /// Tile URL template in the `{s}`/`{z}`/`{x}`/`{y}` placeholder convention.
    pub fn url_template(&self) -> &'static str {
        match self {
            TileLayer::CartodbPositron => {
                "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png"
            }
            TileLayer::CartodbDarkMatter => {
                "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png"
            }
            TileLayer::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        }
    }

    /// Attribution line required by the tile provider.
    pub fn attribution(&self) -> &'static str {
        match self {
            TileLayer::CartodbPositron | TileLayer::CartodbDarkMatter => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
            }
            TileLayer::OpenStreetMap => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
        }
    }

    /// Maximum zoom level the provider serves tiles for.
    pub fn max_zoom(&self) -> u8 {
        match self {
            TileLayer::CartodbPositron | TileLayer::CartodbDarkMatter => 20,
            TileLayer::OpenStreetMap => 19,
        }
    }
}

impl std::fmt::Display for TileLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileLayer::CartodbPositron => write!(f, "CartodbPositron"),
            TileLayer::CartodbDarkMatter => write!(f, "CartodbDarkMatter"),
            TileLayer::OpenStreetMap => write!(f, "OpenStreetMap"),
        }
    }
}
