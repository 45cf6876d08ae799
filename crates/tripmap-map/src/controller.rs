//! Map viewport controller.
//!
//! Owns a [`MapSurface`] and its marker layer for the surface's whole life:
//!
//! ```text
//! Uninitialized --mount--> Ready --unmount--> TornDown
//!                            |  ^
//!                    apply_places (rebuild)
//! ```
//!
//! Every place-list snapshot triggers a full rebuild: clear the layer,
//! resolve every place, build one marker per place, then frame them. A
//! rebuild runs to completion inside one `&mut self` call, so a later
//! snapshot always replaces an earlier one wholesale.

use serde::Serialize;
use tripmap_core::Place;

use crate::error::{MapError, SurfaceError};
use crate::marker::Marker;
use crate::resolve::resolve_all;
use crate::settings::MapSettings;
use crate::surface::MapSurface;
use crate::viewport::{compute_viewport, Viewport, WORLD_CENTER, WORLD_ZOOM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Uninitialized,
    Ready,
    TornDown,
}

#[derive(Debug)]
enum State {
    /// Snapshot received before mount; applied once the surface exists.
    Uninitialized { pending: Option<Vec<Place>> },
    Ready,
    TornDown,
}

/// Outcome of one rebuild.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderReport {
    /// Markers in the controller's layer, one per place.
    pub marker_count: usize,
    /// Markers actually on the surface after the rebuild.
    pub drawn_count: usize,
    /// Viewport actually shown on the surface.
    pub viewport: Viewport,
    /// The surface failed part of the rebuild and the default world view
    /// was shown instead.
    pub fell_back: bool,
}

pub struct MapController<S: MapSurface> {
    surface: S,
    settings: MapSettings,
    state: State,
    markers: Vec<Marker>,
    viewport: Option<Viewport>,
}

impl<S: MapSurface> MapController<S> {
    #[must_use]
    pub fn new(surface: S, settings: MapSettings) -> Self {
        Self {
            surface,
            settings,
            state: State::Uninitialized { pending: None },
            markers: Vec::new(),
            viewport: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Uninitialized { .. } => Phase::Uninitialized,
            State::Ready => Phase::Ready,
            State::TornDown => Phase::TornDown,
        }
    }

    /// Current marker layer, one marker per place of the last snapshot.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    /// Create the surface, its base tile layer and an empty marker layer.
    ///
    /// A second call while mounted does nothing. If a snapshot arrived before
    /// mounting it is applied now and its report returned.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::TornDown`] after [`Self::unmount`], or
    /// [`MapError::Surface`] if the surface cannot be created (the controller
    /// stays unmounted and may be mounted again).
    pub fn mount(&mut self) -> Result<Option<RenderReport>, MapError> {
        let pending = match self.state {
            State::TornDown => return Err(MapError::TornDown),
            State::Ready => {
                tracing::debug!("map already mounted; ignoring mount");
                return Ok(None);
            }
            State::Uninitialized { ref mut pending } => pending.take(),
        };

        let initial = Viewport::world();
        if let Err(err) = self.surface.init(&initial, &self.settings.tile_layer) {
            tracing::error!(error = %err, "failed to create map surface");
            self.state = State::Uninitialized { pending };
            return Err(err.into());
        }

        self.state = State::Ready;
        self.markers.clear();
        self.viewport = Some(initial);
        tracing::info!(
            tile_url = %self.settings.tile_layer.url_template,
            "map surface mounted"
        );

        Ok(pending.map(|places| self.rebuild(&places)))
    }

    /// Replace the rendered place set with `places`.
    ///
    /// Before mount the snapshot is held (replacing any earlier one) and
    /// `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::TornDown`] after [`Self::unmount`].
    pub fn apply_places(&mut self, places: &[Place]) -> Result<Option<RenderReport>, MapError> {
        match self.state {
            State::TornDown => Err(MapError::TornDown),
            State::Uninitialized { ref mut pending } => {
                tracing::debug!(
                    place_count = places.len(),
                    "map not mounted yet; holding place snapshot"
                );
                *pending = Some(places.to_vec());
                Ok(None)
            }
            State::Ready => Ok(Some(self.rebuild(places))),
        }
    }

    /// Release the surface and every layer. Terminal.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::TornDown`] if already torn down.
    pub fn unmount(&mut self) -> Result<(), MapError> {
        if matches!(self.state, State::TornDown) {
            return Err(MapError::TornDown);
        }
        if matches!(self.state, State::Ready) {
            self.surface.release();
        }
        self.state = State::TornDown;
        self.markers.clear();
        self.viewport = None;
        tracing::info!("map surface torn down");
        Ok(())
    }

    fn rebuild(&mut self, places: &[Place]) -> RenderReport {
        self.markers.clear();
        let cleared = self.clear_surface();

        let resolved = resolve_all(places);
        self.markers = resolved
            .iter()
            .map(|r| Marker::build(r, &self.settings.styles))
            .collect();

        let drawn = cleared.and_then(|()| {
            self.markers
                .iter()
                .try_for_each(|marker| self.surface.add_marker(marker))
        });

        let (viewport, fell_back, drawn_count) = match drawn {
            Ok(()) => {
                let target = compute_viewport(
                    self.markers.iter().map(|m| m.position),
                    &self.settings.viewport,
                );
                let (viewport, fell_back) = self.show(target);
                (viewport, fell_back, self.markers.len())
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "failed to draw markers; clearing layer and showing world view"
                );
                // Succeeds or not, the surface ends up with no markers.
                if let Err(err) = self.clear_surface() {
                    tracing::error!(error = %err, "map surface left released");
                }
                (self.show_world(), true, 0)
            }
        };

        self.viewport = Some(viewport);
        tracing::debug!(
            marker_count = self.markers.len(),
            drawn_count,
            ?viewport,
            fell_back,
            "rebuilt marker layer"
        );

        RenderReport {
            marker_count: self.markers.len(),
            drawn_count,
            viewport,
            fell_back,
        }
    }

    /// Remove every marker from the surface. If the surface refuses, it is
    /// released and created again so no superseded marker survives.
    fn clear_surface(&mut self) -> Result<(), SurfaceError> {
        let Err(err) = self.surface.clear_markers() else {
            return Ok(());
        };
        tracing::warn!(error = %err, "failed to clear markers; recreating map surface");
        self.surface.release();
        self.surface.init(&Viewport::world(), &self.settings.tile_layer)
    }

    /// Show `target`, falling back to the world view if the surface refuses.
    fn show(&mut self, target: Viewport) -> (Viewport, bool) {
        let result: Result<(), SurfaceError> = match target {
            Viewport::Bounds { bounds } => self.surface.fit_bounds(&bounds),
            Viewport::Centered { center, zoom } => self.surface.set_view(center, zoom),
        };

        match result {
            Ok(()) => (target, false),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    ?target,
                    "failed to apply viewport; showing world view"
                );
                (self.show_world(), true)
            }
        }
    }

    fn show_world(&mut self) -> Viewport {
        if let Err(err) = self.surface.set_view(WORLD_CENTER, WORLD_ZOOM) {
            tracing::error!(error = %err, "failed to set world view");
        }
        Viewport::world()
    }
}

impl<S: MapSurface + std::fmt::Debug> std::fmt::Debug for MapController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapController")
            .field("phase", &self.phase())
            .field("marker_count", &self.markers.len())
            .field("viewport", &self.viewport)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}
