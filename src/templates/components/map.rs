use crate::geocode::Coordinates;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub title: String,
    /// Popup text, first line in bold.
    pub lines: Vec<String>,
    pub circle: bool,
}

impl MapMarker {
    pub fn pin(at: Coordinates, lines: Vec<String>) -> Self {
        Self::new(at, lines, false)
    }

    pub fn circle(at: Coordinates, lines: Vec<String>) -> Self {
        Self::new(at, lines, true)
    }

    fn new(at: Coordinates, lines: Vec<String>, circle: bool) -> Self {
        Self {
            lat: at.lat,
            lon: at.lon,
            title: lines.first().cloned().unwrap_or_default(),
            lines,
            circle,
        }
    }
}

/// Data handed to the page's `renderMap` script.
#[derive(Debug, Clone, Serialize)]
pub struct MapData {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    /// `[lat, lon, intensity]` with intensity in 0..=1.
    pub heat: Vec<[f64; 3]>,
}

impl MapData {
    pub fn new(center: Coordinates, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            markers: Vec::new(),
            heat: Vec::new(),
        }
    }
}

pub fn map_widget(id: &str, data: &MapData) -> Markup {
    // serde_json never fails on these plain structs; fall back to an empty map if it does.
    let json = serde_json::to_string(data).unwrap_or_else(|_| "null".to_string());
    let call = format!("renderMap({}, {});", js_string(id), script_safe(&json));

    html! {
        div id=(id) class="map" {}
        script { (PreEscaped(call)) }
    }
}

/// JSON placed inside a `<script>` must not close the element early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

fn js_string(s: &str) -> String {
    script_safe(&serde_json::Value::String(s.to_string()).to_string())
}
