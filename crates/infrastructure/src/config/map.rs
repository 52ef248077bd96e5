//! Map surface configuration.

use domain::Coordinate;
use serde::{Deserialize, Serialize};
use url::Url;

/// Map configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Tile URL template with `{z}`, `{x}`, `{y}` and optional `{s}`
    ///
    /// Must expand to an absolute http(s) URL.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Attribution shown in the map corner
    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Highest zoom the tile layer allows
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,

    /// Centre shown before any search
    #[serde(default = "default_initial_latitude")]
    pub initial_latitude: f64,

    #[serde(default = "default_initial_longitude")]
    pub initial_longitude: f64,

    /// Zoom shown before any search
    #[serde(default = "default_zoom")]
    pub initial_zoom: u8,

    /// Zoom used when a result is shown
    #[serde(default = "default_zoom")]
    pub result_zoom: u8,

    /// Marker icon location, relative to the page or absolute
    #[serde(default = "default_marker_icon_url")]
    pub marker_icon_url: String,

    #[serde(default = "default_marker_size")]
    pub marker_width: u32,

    #[serde(default = "default_marker_size")]
    pub marker_height: u32,

    /// Icon pixel that sits on the point (bottom centre by default)
    #[serde(default = "default_marker_anchor_x")]
    pub marker_anchor_x: u32,

    #[serde(default = "default_marker_size")]
    pub marker_anchor_y: u32,
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_attribution() -> String {
    "&copy; OpenStreetMap contributors".to_string()
}

const fn default_max_zoom() -> u8 {
    19
}

const fn default_initial_latitude() -> f64 {
    Coordinate::tokyo_station().latitude()
}

const fn default_initial_longitude() -> f64 {
    Coordinate::tokyo_station().longitude()
}

const fn default_zoom() -> u8 {
    12
}

fn default_marker_icon_url() -> String {
    "/assets/marker.svg".to_string()
}

const fn default_marker_size() -> u32 {
    60
}

const fn default_marker_anchor_x() -> u32 {
    30
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            max_zoom: default_max_zoom(),
            initial_latitude: default_initial_latitude(),
            initial_longitude: default_initial_longitude(),
            initial_zoom: default_zoom(),
            result_zoom: default_zoom(),
            marker_icon_url: default_marker_icon_url(),
            marker_width: default_marker_size(),
            marker_height: default_marker_size(),
            marker_anchor_x: default_marker_anchor_x(),
            marker_anchor_y: default_marker_size(),
        }
    }
}

impl MapConfig {
    /// Initial map centre
    ///
    /// # Errors
    ///
    /// Returns an error if the configured latitude/longitude are out of range.
    pub fn initial_center(&self) -> Result<Coordinate, String> {
        Coordinate::new(self.initial_latitude, self.initial_longitude)
            .map_err(|e| format!("map.initial_latitude/initial_longitude: {e}"))
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        check_tile_url(&self.tile_url)?;
        self.initial_center()?;
        for (name, zoom) in [
            ("initial_zoom", self.initial_zoom),
            ("result_zoom", self.result_zoom),
        ] {
            if zoom > self.max_zoom {
                return Err(format!(
                    "map.{name} ({zoom}) exceeds max_zoom ({})",
                    self.max_zoom
                ));
            }
        }
        if self.marker_icon_url.trim().is_empty() {
            return Err("map.marker_icon_url must not be empty".to_string());
        }
        if self.marker_anchor_x > self.marker_width || self.marker_anchor_y > self.marker_height {
            return Err("map marker anchor must lie inside the icon".to_string());
        }
        Ok(())
    }
}

/// The template must name every tile coordinate and expand to an http(s) URL
fn check_tile_url(template: &str) -> Result<(), String> {
    for placeholder in ["{z}", "{x}", "{y}"] {
        if !template.contains(placeholder) {
            return Err(format!("map.tile_url must contain {placeholder}"));
        }
    }

    let sample = template
        .replace("{s}", "a")
        .replace("{z}", "0")
        .replace("{x}", "0")
        .replace("{y}", "0");
    let url = Url::parse(&sample).map_err(|e| format!("map.tile_url is not a valid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("map.tile_url must use http or https, got {other}")),
    }
}
