//! Place records as handed out by the place store, plus the YAML file loader
//! that plays the store's role for the CLI.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Image shown for a place when no media was uploaded for it.
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    /// Free-text location; the resolution key when `coordinates` is absent.
    pub location: String,
    /// `[latitude, longitude]`. Takes precedence over `location` when valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
    /// Only meaningful when `is_visited` is true.
    #[serde(default, alias = "date", skip_serializing_if = "Option::is_none")]
    pub date_visited: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub is_visited: bool,
}

/// A place entry as written in the places file. `id` and `imageUrl` may be
/// omitted and are filled in by [`load_places`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceEntry {
    id: Option<String>,
    name: String,
    location: String,
    #[serde(default)]
    coordinates: Option<[f64; 2]>,
    #[serde(default, alias = "date")]
    date_visited: Option<String>,
    image_url: Option<String>,
    #[serde(default)]
    is_visited: bool,
}

impl From<PlaceEntry> for Place {
    fn from(entry: PlaceEntry) -> Self {
        let id = entry
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let image_url = entry
            .image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());
        let date_visited = entry.date_visited.filter(|d| !d.trim().is_empty());

        Self {
            id,
            name: entry.name,
            location: entry.location,
            coordinates: entry.coordinates,
            date_visited,
            image_url,
            is_visited: entry.is_visited,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPlacesFile {
    #[serde(default)]
    places: Vec<PlaceEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacesFile {
    pub places: Vec<Place>,
}

/// Load and validate a place list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_places(path: &Path) -> Result<PlacesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PlacesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_places(&content)
}

fn parse_places(content: &str) -> Result<PlacesFile, ConfigError> {
    let raw: RawPlacesFile = serde_yaml::from_str(content)?;
    let places_file = PlacesFile {
        places: raw.places.into_iter().map(Place::from).collect(),
    };

    validate_places(&places_file)?;

    Ok(places_file)
}

fn validate_places(places_file: &PlacesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for place in &places_file.places {
        if place.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "place name must be non-empty".to_string(),
            ));
        }

        if place.location.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "place '{}' has an empty location",
                place.name
            )));
        }

        if !seen_ids.insert(place.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate place id: '{}' (from place '{}')",
                place.id, place.name
            )));
        }
    }

    Ok(())
}

/// Split places into `(visited, bucket_list)`, preserving input order.
#[must_use]
pub fn partition_by_status(places: &[Place]) -> (Vec<&Place>, Vec<&Place>) {
    places.iter().partition(|place| place.is_visited)
}

#[cfg(test)]
#[path = "places_test.rs"]
mod tests;
