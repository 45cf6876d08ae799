//! Coordinate resolution for place records.
//!
//! Resolution is total: explicit coordinates win when usable, then the
//! gazetteer, then [`FALLBACK_POSITION`]. No place is ever dropped.

use serde::Serialize;
use tripmap_core::Place;

use crate::gazetteer;
use crate::geo::LatLng;

/// Position assigned to places nothing else can resolve.
pub const FALLBACK_POSITION: LatLng = LatLng::new(0.0, 0.0);

/// Where a resolved position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entry", rename_all = "snake_case")]
pub enum ResolutionSource {
    Explicit,
    Gazetteer(&'static str),
    Fallback,
}

/// A place paired with a guaranteed position. Rebuilt every render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlace<'a> {
    pub place: &'a Place,
    pub position: LatLng,
    pub source: ResolutionSource,
}

/// Resolve a place to a map position.
#[must_use]
pub fn resolve(place: &Place) -> LatLng {
    resolve_position(&place.location, place.coordinates).0
}

/// Resolve a location string and optional `[lat, lng]` pair.
#[must_use]
pub fn resolve_position(
    location: &str,
    coordinates: Option<[f64; 2]>,
) -> (LatLng, ResolutionSource) {
    if let Some(explicit) = coordinates.map(LatLng::from) {
        if explicit.is_valid() {
            return (explicit, ResolutionSource::Explicit);
        }
        tracing::debug!(
            location,
            lat = explicit.lat,
            lng = explicit.lng,
            "ignoring out-of-range explicit coordinates"
        );
    }

    if let Some(entry) = gazetteer::lookup(location) {
        return (entry.position, ResolutionSource::Gazetteer(entry.name));
    }

    tracing::debug!(location, "no gazetteer match; using fallback position");
    (FALLBACK_POSITION, ResolutionSource::Fallback)
}

/// Resolve every place, keeping input order and length.
#[must_use]
pub fn resolve_all(places: &[Place]) -> Vec<ResolvedPlace<'_>> {
    places
        .iter()
        .map(|place| {
            let (position, source) = resolve_position(&place.location, place.coordinates);
            ResolvedPlace {
                place,
                position,
                source,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(location: &str, coordinates: Option<[f64; 2]>) -> Place {
        Place {
            id: "p".to_string(),
            name: "Test".to_string(),
            location: location.to_string(),
            coordinates,
            date_visited: None,
            image_url: tripmap_core::DEFAULT_IMAGE_URL.to_string(),
            is_visited: false,
        }
    }

    #[test]
    fn explicit_coordinates_win_over_location() {
        let p = place("Paris, France", Some([10.0, 10.0]));
        assert_eq!(resolve(&p), LatLng::new(10.0, 10.0));
    }

    #[test]
    fn explicit_coordinates_returned_unchanged_for_any_text() {
        for text in ["", "Tokyo, Japan", "???", "\u{1F30D}"] {
            let p = place(text, Some([-33.5, 151.25]));
            assert_eq!(resolve(&p), LatLng::new(-33.5, 151.25));
        }
    }

    #[test]
    fn out_of_range_coordinates_fall_through_to_gazetteer() {
        let p = place("Rome, Italy", Some([95.0, 10.0]));
        let (pos, source) = resolve_position(&p.location, p.coordinates);
        assert_eq!(pos, LatLng::new(41.902_8, 12.496_4));
        assert_eq!(source, ResolutionSource::Gazetteer("Rome, Italy"));
    }

    #[test]
    fn non_finite_coordinates_fall_through_to_fallback() {
        let p = place("Nowhere", Some([f64::NAN, 0.0]));
        assert_eq!(
            resolve_position(&p.location, p.coordinates),
            (FALLBACK_POSITION, ResolutionSource::Fallback)
        );
    }

    #[test]
    fn gazetteer_key_resolves_to_its_position() {
        assert_eq!(
            resolve(&place("Paris, France", None)),
            LatLng::new(48.856_6, 2.352_2)
        );
        assert_eq!(
            resolve(&place("Tokyo, Japan", None)),
            LatLng::new(35.676_2, 139.650_3)
        );
    }

    #[test]
    fn unmatched_location_falls_back_to_origin() {
        assert_eq!(resolve(&place("Unknown Place", None)), FALLBACK_POSITION);
    }

    #[test]
    fn blank_location_falls_back_to_origin() {
        assert_eq!(resolve(&place("", None)), FALLBACK_POSITION);
        assert_eq!(resolve(&place("    ", None)), FALLBACK_POSITION);
    }

    #[test]
    fn odd_input_never_panics() {
        let long = "x".repeat(100_000);
        for text in [long.as_str(), "\u{0}", "ÅÄÖ ñ 東京", "\u{202E}evil"] {
            let _ = resolve(&place(text, None));
        }
    }

    #[test]
    fn resolve_all_keeps_every_place_in_order() {
        let places = vec![
            place("Paris, France", None),
            place("Unknown Place", None),
            place("anything", Some([1.0, 2.0])),
        ];
        let resolved = resolve_all(&places);
        assert_eq!(resolved.len(), places.len());
        assert_eq!(resolved[0].source, ResolutionSource::Gazetteer("Paris, France"));
        assert_eq!(resolved[1].source, ResolutionSource::Fallback);
        assert_eq!(resolved[2].position, LatLng::new(1.0, 2.0));
        assert!(std::ptr::eq(resolved[1].place, &places[1]));
    }

    #[test]
    fn source_serializes_kind_and_entry() {
        assert_eq!(
            serde_json::to_value(ResolutionSource::Gazetteer("Rome, Italy")).unwrap(),
            serde_json::json!({ "kind": "gazetteer", "entry": "Rome, Italy" })
        );
        assert_eq!(
            serde_json::to_value(ResolutionSource::Explicit).unwrap(),
            serde_json::json!({ "kind": "explicit" })
        );
        assert_eq!(
            serde_json::to_value(ResolutionSource::Fallback).unwrap(),
            serde_json::json!({ "kind": "fallback" })
        );
    }
}
