use serde::Serialize;

use crate::core::params::RenderParams;
use crate::error::{Error, Result};
use crate::io::dataset::Dataset;
use crate::types::TileLayer;

/// Circular, filled, popup-labeled shape drawn at one coordinate.
///
/// Field renames follow the Leaflet option names the serialized form is
/// consumed under (`weight`, `radius`, `fillOpacity`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub lat: f64,
    pub lng: f64,
    /// Stroke and fill color, any CSS color string
    pub color: String,
    #[serde(rename = "weight")]
    pub stroke_weight: f64,
    /// Radius in meters
    #[serde(rename = "radius")]
    pub radius_m: f64,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: f64,
    pub popup: String,
}

/// Mutable map object accumulating markers before serialization.
///
/// Markers are appended in dataset order; their order affects only draw
/// order on the final map. The canvas is never mutated after population.
#[derive(Debug, Clone)]
pub struct MapCanvas {
    pub center: (f64, f64),
    pub zoom_start: u8,
    pub tile_layer: TileLayer,
    markers: Vec<CircleMarker>,
}

impl MapCanvas {
    pub fn new(center: (f64, f64), zoom_start: u8, tile_layer: TileLayer) -> Self {
        MapCanvas {
            center,
            zoom_start,
            tile_layer,
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    /// Build a canvas from a dataset: center on the first record, then append
    /// one marker per record in file order.
    ///
    /// Fails with [`Error::EmptyDataset`] when there is no first record to
    /// center on, and with [`Error::InvalidCoordinate`] when a record carries
    /// a non-finite coordinate (`NaN` and infinities parse as valid `f64`
    /// tokens but have no place on a map).
    pub fn from_dataset(dataset: &Dataset, params: &RenderParams) -> Result<Self> {
        let first = dataset.first().ok_or(Error::EmptyDataset)?;

        let mut canvas = MapCanvas::new(
            (first.lat, first.lng),
            params.zoom_start,
            params.tile_layer,
        );

        for (index, record) in dataset.iter().enumerate() {
            if !record.lat.is_finite() || !record.lng.is_finite() {
                return Err(Error::InvalidCoordinate {
                    index,
                    lat: record.lat,
                    lng: record.lng,
                });
            }

            canvas.add_marker(CircleMarker {
                lat: record.lat,
                lng: record.lng,
                color: record.color.clone(),
                stroke_weight: params.stroke_weight,
                radius_m: params.radius_m,
                fill_opacity: params.fill_opacity,
                popup: record.location.clone(),
            });
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dataset::PointRecord;

    fn record(lat: f64, lng: f64, color: &str, location: &str) -> PointRecord {
        PointRecord {
            lat,
            lng,
            color: color.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn canvas_centers_on_first_record() {
        let dataset = Dataset::from_records(vec![
            record(40.7, -74.0, "red", "Park"),
            record(51.5, -0.1, "blue", "Thames"),
        ]);
        let canvas = MapCanvas::from_dataset(&dataset, &RenderParams::default()).unwrap();

        assert_eq!(canvas.center, (40.7, -74.0));
        assert_eq!(canvas.zoom_start, 12);
        assert_eq!(canvas.markers().len(), 2);
    }

    #[test]
    fn markers_keep_dataset_order_and_colors() {
        let dataset = Dataset::from_records(vec![
            record(40.7, -74.0, "red", "Park"),
            record(40.7, -74.0, "green", "Park"),
        ]);
        let canvas = MapCanvas::from_dataset(&dataset, &RenderParams::default()).unwrap();

        let colors: Vec<&str> = canvas.markers().iter().map(|m| m.color.as_str()).collect();
        assert_eq!(colors, ["red", "green"]);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = MapCanvas::from_dataset(&Dataset::default(), &RenderParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let dataset = Dataset::from_records(vec![
            record(40.7, -74.0, "red", "Park"),
            record(f64::NAN, -74.0, "red", "Nowhere"),
        ]);
        let err = MapCanvas::from_dataset(&dataset, &RenderParams::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { index: 1, .. }));
    }

    #[test]
    fn marker_carries_render_constants() {
        let dataset = Dataset::from_records(vec![record(40.7, -74.0, "red", "Park")]);
        let canvas = MapCanvas::from_dataset(&dataset, &RenderParams::default()).unwrap();

        let marker = &canvas.markers()[0];
        assert_eq!(marker.stroke_weight, 3.0);
        assert_eq!(marker.radius_m, 100.0);
        assert_eq!(marker.fill_opacity, 0.2);
        assert_eq!(marker.popup, "Park");
    }
}
