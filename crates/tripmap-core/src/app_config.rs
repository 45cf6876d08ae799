use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub places_path: PathBuf,
    pub tile_url_template: String,
    pub tile_attribution: String,
    pub tile_max_zoom: u8,
    /// Fraction of the marker bounding box added on every side when framing.
    pub viewport_padding: f64,
    /// Zoom used when every marker sits on the same point.
    pub single_marker_zoom: u8,
    pub visited_hue: String,
    pub bucket_list_hue: String,
}
