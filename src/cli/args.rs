use clap::Parser;
use std::path::PathBuf;

use pinmap::TileLayer;

#[derive(Parser)]
#[command(name = "pinmap", version, about = "PINMAP CLI")]
pub struct CliArgs {
    /// Input point table (pipe-delimited, header row required)
    #[arg(short, long, default_value = "./datafiles/data.txt")]
    pub input: PathBuf,

    /// Output HTML document (overwritten if present)
    #[arg(short, long, default_value = "index.html")]
    pub output: PathBuf,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value_t = '|')]
    pub delimiter: char,

    /// Basemap style
    #[arg(long, value_enum, default_value_t = TileLayer::CartodbPositron)]
    pub tiles: TileLayer,

    /// Initial zoom level of the viewport
    #[arg(long, default_value_t = 12)]
    pub zoom: u8,

    /// Circle radius in meters
    #[arg(long, default_value_t = 100.0)]
    pub radius: f64,

    /// Stroke width in pixels
    #[arg(long, default_value_t = 3.0)]
    pub weight: f64,

    /// Fill opacity, 0 to 1
    #[arg(long, default_value_t = 0.2)]
    pub fill_opacity: f64,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
