//! Static location-name lookup table.
//!
//! Matching is a case-insensitive, bidirectional substring test in table
//! order: the first entry whose name contains the query, or is contained by
//! it, wins. Short or generic queries ("Japan", "a") therefore match
//! whichever entry happens to come first. This is a known low-precision
//! heuristic; keep the table order stable because it decides ties.

use serde::Serialize;

use crate::geo::LatLng;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GazetteerEntry {
    pub name: &'static str,
    pub position: LatLng,
}

const fn entry(name: &'static str, lat: f64, lng: f64) -> GazetteerEntry {
    GazetteerEntry {
        name,
        position: LatLng::new(lat, lng),
    }
}

pub const GAZETTEER: &[GazetteerEntry] = &[
    entry("Paris, France", 48.856_6, 2.352_2),
    entry("Honshu, Japan", 35.676_2, 139.650_3),
    entry("Cyclades, Greece", 37.085_3, 25.148_8),
    entry("Tokyo, Japan", 35.676_2, 139.650_3),
    entry("New York, USA", 40.712_8, -74.006_0),
    entry("London, UK", 51.507_4, -0.127_8),
    entry("Rome, Italy", 41.902_8, 12.496_4),
    entry("Sydney, Australia", -33.868_8, 151.209_3),
];

/// Table entries in declaration order.
#[must_use]
pub fn entries() -> &'static [GazetteerEntry] {
    GAZETTEER
}

/// First entry matching `location`, or `None`.
///
/// Empty and whitespace-only input never matches.
#[must_use]
pub fn lookup(location: &str) -> Option<&'static GazetteerEntry> {
    if location.trim().is_empty() {
        return None;
    }

    let needle = location.to_lowercase();
    GAZETTEER.iter().find(|entry| {
        let key = entry.name.to_lowercase();
        needle.contains(&key) || key.contains(&needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_key_matches() {
        for e in GAZETTEER {
            let found = lookup(e.name).unwrap();
            assert_eq!(found.position, e.position, "key {}", e.name);
        }
    }

    #[test]
    fn exact_key_returns_own_entry_not_earlier_one() {
        assert_eq!(lookup("Tokyo, Japan").unwrap().name, "Tokyo, Japan");
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(lookup("pArIs, fRaNcE").unwrap().name, "Paris, France");
    }

    #[test]
    fn query_containing_key_matches() {
        assert_eq!(
            lookup("Eiffel Tower, Paris, France, Europe").unwrap().name,
            "Paris, France"
        );
    }

    #[test]
    fn key_containing_query_matches() {
        assert_eq!(lookup("London").unwrap().name, "London, UK");
    }

    #[test]
    fn ambiguous_query_takes_first_entry_in_table_order() {
        assert_eq!(lookup("Japan").unwrap().name, "Honshu, Japan");
        // "a" occurs in the very first key.
        assert_eq!(lookup("a").unwrap().name, "Paris, France");
    }

    #[test]
    fn unknown_location_has_no_match() {
        assert!(lookup("Unknown Place").is_none());
    }

    #[test]
    fn blank_location_has_no_match() {
        assert!(lookup("").is_none());
        assert!(lookup("   \t ").is_none());
    }

    #[test]
    fn entries_preserve_declaration_order() {
        let names: Vec<_> = entries().iter().map(|e| e.name).collect();
        assert_eq!(names.first(), Some(&"Paris, France"));
        assert_eq!(names.last(), Some(&"Sydney, Australia"));
        assert_eq!(names.len(), 8);
    }
}
