use std::path::Path;

use tracing::info;

use crate::core::canvas::MapCanvas;
use crate::error::{Error, Result};

/// Leaflet release the generated document pins its CDN assets to.
const LEAFLET_VERSION: &str = "1.9.4";

/// Document skeleton. Placeholders are substituted with JSON-encoded values,
/// never raw strings, so quoting and escaping stay correct in both the HTML
/// and the embedded script.
const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>pinmap</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@__LEAFLET__/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@__LEAFLET__/dist/leaflet.js"></script>
<style>
html, body { margin: 0; padding: 0; height: 100%; }
#map { width: 100%; height: 100%; }
</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map("map").setView(__CENTER__, __ZOOM__);
L.tileLayer(__TILE_URL__, {
    maxZoom: __MAX_ZOOM__,
    attribution: __ATTRIBUTION__
}).addTo(map);
var markers = __MARKERS__;
markers.forEach(function (m) {
    L.circle([m.lat, m.lng], {
        color: m.color,
        weight: m.weight,
        radius: m.radius,
        fill: true,
        fillColor: m.color,
        fillOpacity: m.fillOpacity
    }).bindPopup(m.popup).addTo(map);
});
</script>
</body>
</html>
"#;

fn json_literal<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|e| Error::Render(e.to_string()))?;
    // A literal `</script>` inside a label would end the script block early;
    // `<\/` is the same string to the JS parser.
    Ok(json.replace("</", "<\\/"))
}

/// Render a canvas to a standalone, browser-openable HTML document.
///
/// The marker set is embedded as a JSON literal and the map element id is
/// fixed, so identical input yields a byte-identical document.
pub fn render_html_document(canvas: &MapCanvas) -> Result<String> {
    let (lat, lng) = canvas.center;

    let document = TEMPLATE
        .replace("__LEAFLET__", LEAFLET_VERSION)
        .replace("__CENTER__", &json_literal(&[lat, lng])?)
        .replace("__ZOOM__", &canvas.zoom_start.to_string())
        .replace("__TILE_URL__", &json_literal(&canvas.tile_layer.url_template())?)
        .replace("__MAX_ZOOM__", &canvas.tile_layer.max_zoom().to_string())
        .replace("__ATTRIBUTION__", &json_literal(&canvas.tile_layer.attribution())?)
        .replace("__MARKERS__", &json_literal(&canvas.markers())?);

    Ok(document)
}

/// Render a canvas and write the document to `output`, overwriting any
/// existing file there.
pub fn write_html_document(canvas: &MapCanvas, output: &Path) -> Result<()> {
    let document = render_html_document(canvas)?;
    std::fs::write(output, document.as_bytes())?;
    info!(
        "Wrote map with {} markers to {:?}",
        canvas.markers().len(),
        output
    );
    Ok(())
}
