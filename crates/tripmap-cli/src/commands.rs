//! Command handlers for the CLI.
//!
//! The places file plays the role of the place store: each invocation reads
//! one full snapshot and hands it to the map controller.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tripmap_core::{partition_by_status, AppConfig, Place};
use tripmap_map::{
    gazetteer, resolve_position, HeadlessSurface, MapController, MapSettings, RenderReport,
};

#[derive(Debug, Serialize)]
struct RenderOutput<'a> {
    report: &'a RenderReport,
    surface: &'a HeadlessSurface,
}

/// Mount a headless map, apply `places`, and return the rendered surface as JSON.
///
/// # Errors
///
/// Returns an error if the surface cannot be mounted or the output cannot be
/// serialised.
pub(crate) fn render_snapshot(
    places: &[Place],
    settings: MapSettings,
) -> anyhow::Result<serde_json::Value> {
    let mut controller = MapController::new(HeadlessSurface::new(), settings);
    controller.mount().context("mounting headless map")?;
    let report = controller
        .apply_places(places)?
        .context("map controller did not rebuild after mount")?;

    if report.fell_back {
        tracing::warn!("map fell back to the world view");
    }

    let value = serde_json::to_value(RenderOutput {
        report: &report,
        surface: controller.surface(),
    })?;
    controller.unmount()?;
    Ok(value)
}

pub(crate) fn run_render(config: &AppConfig, path: &Path, pretty: bool) -> anyhow::Result<()> {
    let places_file = tripmap_core::load_places(path)
        .with_context(|| format!("loading places from {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        place_count = places_file.places.len(),
        "loaded places"
    );

    let value = render_snapshot(&places_file.places, MapSettings::from_app_config(config))?;
    let out = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{out}");
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct ResolveOutput<'a> {
    pub(crate) location: &'a str,
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    pub(crate) source: tripmap_map::ResolutionSource,
}

pub(crate) fn resolve_output(location: &str, coordinates: Option<[f64; 2]>) -> ResolveOutput<'_> {
    let (position, source) = resolve_position(location, coordinates);
    ResolveOutput {
        location,
        lat: position.lat,
        lng: position.lng,
        source,
    }
}

pub(crate) fn run_resolve(location: &str, coordinates: Option<[f64; 2]>) -> anyhow::Result<()> {
    let output = resolve_output(location, coordinates);
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

/// Format places as two headed groups, visited first.
pub(crate) fn format_place_groups(places: &[Place]) -> String {
    let (visited, bucket_list) = partition_by_status(places);
    let mut out = String::new();

    for (heading, group) in [("Visited", &visited), ("Bucket List", &bucket_list)] {
        out.push_str(&format!("{heading} ({})\n", group.len()));
        for place in group {
            let date = place
                .date_visited
                .as_deref()
                .filter(|_| place.is_visited)
                .map(|d| format!(" \u{2022} {d}"))
                .unwrap_or_default();
            out.push_str(&format!("  - {} ({}){date}\n", place.name, place.location));
        }
    }

    out
}

pub(crate) fn run_list(path: &Path) -> anyhow::Result<()> {
    let places_file = tripmap_core::load_places(path)
        .with_context(|| format!("loading places from {}", path.display()))?;
    print!("{}", format_place_groups(&places_file.places));
    Ok(())
}

pub(crate) fn run_gazetteer() {
    for entry in gazetteer::entries() {
        println!(
            "{:<20} {:>9.4} {:>10.4}",
            entry.name, entry.position.lat, entry.position.lng
        );
    }
}
