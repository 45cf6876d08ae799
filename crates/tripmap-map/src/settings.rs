use tripmap_core::config::{DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL};
use tripmap_core::AppConfig;

use crate::style::MarkerStyles;
use crate::viewport::ViewportOptions;

const DEFAULT_TILE_MAX_ZOOM: u8 = 19;

/// Base raster tile layer drawn beneath the markers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            max_zoom: DEFAULT_TILE_MAX_ZOOM,
        }
    }
}

/// Everything the map controller needs, fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    pub tile_layer: TileLayer,
    pub viewport: ViewportOptions,
    pub styles: MarkerStyles,
}

impl MapSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            tile_layer: TileLayer {
                url_template: config.tile_url_template.clone(),
                attribution: config.tile_attribution.clone(),
                max_zoom: config.tile_max_zoom,
            },
            viewport: ViewportOptions {
                padding: config.viewport_padding,
                single_marker_zoom: config.single_marker_zoom,
            },
            styles: MarkerStyles::new(&config.visited_hue, &config.bucket_list_hue),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tripmap_core::Environment;

    use super::*;
    use crate::style::MarkerVariant;

    #[test]
    fn from_app_config_copies_every_setting() {
        let config = AppConfig {
            env: Environment::Test,
            log_level: "debug".to_string(),
            places_path: PathBuf::from("places.yaml"),
            tile_url_template: "https://tiles.test/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "test tiles".to_string(),
            tile_max_zoom: 16,
            viewport_padding: 0.1,
            single_marker_zoom: 12,
            visited_hue: "green".to_string(),
            bucket_list_hue: "orange".to_string(),
        };
        let settings = MapSettings::from_app_config(&config);
        assert_eq!(settings.tile_layer.url_template, "https://tiles.test/{z}/{x}/{y}.png");
        assert_eq!(settings.tile_layer.attribution, "test tiles");
        assert_eq!(settings.tile_layer.max_zoom, 16);
        assert!((settings.viewport.padding - 0.1).abs() < f64::EPSILON);
        assert_eq!(settings.viewport.single_marker_zoom, 12);
        assert_eq!(settings.styles.get(MarkerVariant::Visited).hue, "green");
        assert_eq!(settings.styles.get(MarkerVariant::BucketList).hue, "orange");
    }

    #[test]
    fn default_matches_openstreetmap_tiles() {
        let settings = MapSettings::default();
        assert!(settings.tile_layer.url_template.contains("tile.openstreetmap.org"));
        assert_eq!(settings.tile_layer.max_zoom, 19);
        assert_eq!(settings.viewport, ViewportOptions::default());
    }
}
