pub mod app_config;
pub mod config;
pub mod places;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use places::{load_places, partition_by_status, Place, PlacesFile, DEFAULT_IMAGE_URL};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read places file {path}: {source}")]
    PlacesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse places file: {0}")]
    PlacesFileParse(#[from] serde_yaml::Error),

    #[error("places validation failed: {0}")]
    Validation(String),
}
