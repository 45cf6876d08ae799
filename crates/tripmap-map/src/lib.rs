//! Place-to-map resolution and rendering.
//!
//! Turns a snapshot of [`tripmap_core::Place`] records into positioned,
//! styled markers on a [`MapSurface`], and frames them with a viewport.

pub mod controller;
pub mod error;
pub mod gazetteer;
pub mod geo;
pub mod marker;
pub mod popup;
pub mod resolve;
pub mod settings;
pub mod style;
pub mod surface;
pub mod viewport;

pub use controller::{MapController, Phase, RenderReport};
pub use error::{MapError, SurfaceError};
pub use geo::{LatLng, LatLngBounds};
pub use marker::Marker;
pub use popup::PopupContent;
pub use resolve::{resolve, resolve_all, resolve_position, ResolutionSource, ResolvedPlace};
pub use settings::{MapSettings, TileLayer};
pub use style::{Glyph, MarkerIcon, MarkerStyle, MarkerStyles, MarkerVariant};
pub use surface::{HeadlessSurface, MapSurface, SurfaceOp};
pub use viewport::{compute_viewport, Viewport, ViewportOptions};
