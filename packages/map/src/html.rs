//! Standalone Leaflet HTML rendering.

use std::fmt::Write as _;

use crate::{CircleMarker, CrimeMap, MarkerStyle};

const LEAFLET_VERSION: &str = "1.9.4";

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Escapes text for use inside HTML markup.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Encodes a string as a JavaScript string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn marker_options(style: &MarkerStyle) -> String {
    serde_json::to_string(style).unwrap_or_else(|_| "{}".to_string())
}

fn render_marker(out: &mut String, marker: &CircleMarker, options: &str) {
    write!(
        out,
        "    L.circleMarker([{}, {}], {options})",
        marker.latitude, marker.longitude
    )
    .ok();
    if let Some(popup) = &marker.popup {
        write!(out, ".bindPopup({})", js_string(&html_escape(popup))).ok();
    }
    out.push_str(".addTo(map);\n");
}

/// Renders the full HTML document for a map.
#[must_use]
pub fn render_map(map: &CrimeMap) -> String {
    let options = marker_options(&map.style);
    let mut markers = String::new();
    for marker in &map.markers {
        render_marker(&mut markers, marker, &options);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Crime Map</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
    <style>
        html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
        #map {{ position: absolute; top: 0; bottom: 0; left: 0; right: 0; }}
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
    var map = L.map("map").setView([{lat}, {lng}], {zoom});
    L.tileLayer({tile_url}, {{
        maxZoom: 19,
        attribution: {attribution}
    }}).addTo(map);
{markers}    </script>
</body>
</html>
"#,
        version = LEAFLET_VERSION,
        lat = map.center.0,
        lng = map.center.1,
        zoom = map.zoom,
        tile_url = js_string(TILE_URL),
        attribution = js_string(TILE_ATTRIBUTION),
    )
}
