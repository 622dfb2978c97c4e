use tracing::info;

use pinmap::{RenderParams, render_dataset_to_path};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if !args.delimiter.is_ascii() {
        return Err(AppError::InvalidDelimiter {
            delimiter: args.delimiter,
        }
        .into());
    }

    if !args.radius.is_finite() || args.radius <= 0.0 {
        return Err(AppError::InvalidRadius { value: args.radius }.into());
    }

    if !(0.0..=1.0).contains(&args.fill_opacity) {
        return Err(AppError::OpacityOutOfRange {
            value: args.fill_opacity,
        }
        .into());
    }

    let params = RenderParams {
        tile_layer: args.tiles,
        zoom_start: args.zoom,
        radius_m: args.radius,
        stroke_weight: args.weight,
        fill_opacity: args.fill_opacity,
    };

    info!("Loading point table from {:?}", args.input);

    let report = render_dataset_to_path(&args.input, &args.output, args.delimiter as u8, &params)?;

    info!(
        "Successfully rendered: {:?} -> {:?} ({} markers)\n",
        args.input, args.output, report.markers
    );

    Ok(())
}
