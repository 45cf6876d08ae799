//! The map-surface seam and an in-memory implementation of it.
//!
//! A [`MapSurface`] is whatever actually draws the map (a browser widget, a
//! tile renderer, a test double). It is driven exclusively by one
//! [`crate::MapController`].

use std::collections::HashMap;

use serde::Serialize;

use crate::error::SurfaceError;
use crate::geo::{LatLng, LatLngBounds};
use crate::marker::Marker;
use crate::settings::TileLayer;
use crate::viewport::Viewport;

pub trait MapSurface {
    /// Create the map with its base tile layer, showing `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the backend cannot create the map.
    fn init(&mut self, initial: &Viewport, tiles: &TileLayer) -> Result<(), SurfaceError>;

    /// Remove every marker from the marker layer.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the backend rejects the operation.
    fn clear_markers(&mut self) -> Result<(), SurfaceError>;

    /// Add one marker to the marker layer.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the backend rejects the marker.
    fn add_marker(&mut self, marker: &Marker) -> Result<(), SurfaceError>;

    /// Move the camera so `bounds` fills the view.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the bounds cannot be fitted.
    fn fit_bounds(&mut self, bounds: &LatLngBounds) -> Result<(), SurfaceError>;

    /// Move the camera to a fixed centre and zoom.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the view cannot be set.
    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<(), SurfaceError>;

    /// Drop the map and all of its layers. Infallible; a later `init`
    /// creates a fresh, empty map.
    fn release(&mut self);
}

/// Operations a [`HeadlessSurface`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceOp {
    Init,
    ClearMarkers,
    AddMarker,
    FitBounds,
    SetView,
}

impl SurfaceOp {
    fn name(self) -> &'static str {
        match self {
            SurfaceOp::Init => "init",
            SurfaceOp::ClearMarkers => "clear_markers",
            SurfaceOp::AddMarker => "add_marker",
            SurfaceOp::FitBounds => "fit_bounds",
            SurfaceOp::SetView => "set_view",
        }
    }
}

/// Surface that records what it was asked to draw. Serialises to a JSON
/// snapshot of the tile layer, markers and current view.
#[derive(Debug, Default, Serialize)]
pub struct HeadlessSurface {
    initialized: bool,
    released: bool,
    world_copy_jump: bool,
    tile_layer: Option<TileLayer>,
    markers: Vec<Marker>,
    view: Option<Viewport>,
    /// Injected failures: calls of the op that still succeed before every
    /// later call fails.
    #[serde(skip)]
    failing: HashMap<SurfaceOp, usize>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future call of `op` fail.
    #[must_use]
    pub fn failing_on(self, op: SurfaceOp) -> Self {
        self.failing_after(op, 0)
    }

    /// Let the next `successes` calls of `op` through, then fail every call.
    #[must_use]
    pub fn failing_after(mut self, op: SurfaceOp, successes: usize) -> Self {
        self.failing.insert(op, successes);
        self
    }

    pub fn stop_failing(&mut self, op: SurfaceOp) {
        self.failing.remove(&op);
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    #[must_use]
    pub fn tile_layer(&self) -> Option<&TileLayer> {
        self.tile_layer.as_ref()
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn view(&self) -> Option<&Viewport> {
        self.view.as_ref()
    }

    fn check(&mut self, op: SurfaceOp) -> Result<(), SurfaceError> {
        if op != SurfaceOp::Init && (!self.initialized || self.released) {
            return Err(SurfaceError::NotInitialized);
        }
        match self.failing.get_mut(&op) {
            None => Ok(()),
            Some(0) => Err(SurfaceError::Rejected {
                operation: op.name(),
                reason: "injected failure".to_string(),
            }),
            Some(successes) => {
                *successes -= 1;
                Ok(())
            }
        }
    }
}

impl MapSurface for HeadlessSurface {
    fn init(&mut self, initial: &Viewport, tiles: &TileLayer) -> Result<(), SurfaceError> {
        self.check(SurfaceOp::Init)?;
        self.initialized = true;
        self.released = false;
        self.world_copy_jump = true;
        self.tile_layer = Some(tiles.clone());
        self.markers.clear();
        self.view = Some(*initial);
        Ok(())
    }

    fn clear_markers(&mut self) -> Result<(), SurfaceError> {
        self.check(SurfaceOp::ClearMarkers)?;
        self.markers.clear();
        Ok(())
    }

    fn add_marker(&mut self, marker: &Marker) -> Result<(), SurfaceError> {
        self.check(SurfaceOp::AddMarker)?;
        if !marker.position.is_valid() {
            return Err(SurfaceError::Rejected {
                operation: SurfaceOp::AddMarker.name(),
                reason: format!(
                    "marker position ({}, {}) out of range",
                    marker.position.lat, marker.position.lng
                ),
            });
        }
        self.markers.push(marker.clone());
        Ok(())
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) -> Result<(), SurfaceError> {
        self.check(SurfaceOp::FitBounds)?;
        let ordered = bounds.south_west.lat <= bounds.north_east.lat
            && bounds.south_west.lng <= bounds.north_east.lng;
        if !ordered || !bounds.south_west.is_valid() || !bounds.north_east.is_valid() {
            return Err(SurfaceError::Rejected {
                operation: SurfaceOp::FitBounds.name(),
                reason: "bounds are not a valid south-west/north-east pair".to_string(),
            });
        }
        self.view = Some(Viewport::Bounds { bounds: *bounds });
        Ok(())
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<(), SurfaceError> {
        self.check(SurfaceOp::SetView)?;
        self.view = Some(Viewport::Centered { center, zoom });
        Ok(())
    }

    fn release(&mut self) {
        self.released = true;
        self.initialized = false;
        self.tile_layer = None;
        self.markers.clear();
        self.view = None;
    }
}
