//! Viewport selection for a set of marker positions.

use serde::Serialize;

use crate::geo::{LatLng, LatLngBounds};

/// Centre of the default world view.
pub const WORLD_CENTER: LatLng = LatLng::new(20.0, 0.0);
/// Zoom of the default world view; low enough to show every continent.
pub const WORLD_ZOOM: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewport {
    /// Frame a padded bounding box.
    Bounds { bounds: LatLngBounds },
    /// Fixed centre and zoom.
    Centered { center: LatLng, zoom: u8 },
}

impl Viewport {
    #[must_use]
    pub fn world() -> Self {
        Self::Centered {
            center: WORLD_CENTER,
            zoom: WORLD_ZOOM,
        }
    }

    #[must_use]
    pub fn is_world(&self) -> bool {
        *self == Self::world()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    /// Fraction of the box height/width added on each side.
    pub padding: f64,
    /// Zoom used when all positions coincide.
    pub single_marker_zoom: u8,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            padding: 0.2,
            single_marker_zoom: 10,
        }
    }
}

/// Pick the viewport framing `positions`.
///
/// - no positions: the default world view;
/// - all positions identical: centred on that point at `single_marker_zoom`;
/// - otherwise: the enclosing box padded by `options.padding`.
#[must_use]
pub fn compute_viewport<I>(positions: I, options: &ViewportOptions) -> Viewport
where
    I: IntoIterator<Item = LatLng>,
{
    let Some(bounds) = LatLngBounds::from_points(positions) else {
        return Viewport::world();
    };

    if bounds.is_degenerate() {
        return Viewport::Centered {
            center: bounds.south_west,
            zoom: options.single_marker_zoom,
        };
    }

    Viewport::Bounds {
        bounds: bounds.pad(options.padding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: LatLng = LatLng::new(48.856_6, 2.352_2);
    const TOKYO: LatLng = LatLng::new(35.676_2, 139.650_3);

    #[test]
    fn empty_input_is_world_view() {
        let vp = compute_viewport(Vec::new(), &ViewportOptions::default());
        assert!(vp.is_world());
        assert_eq!(
            vp,
            Viewport::Centered {
                center: LatLng::new(20.0, 0.0),
                zoom: 2
            }
        );
    }

    #[test]
    fn single_point_centres_on_it() {
        let vp = compute_viewport([PARIS], &ViewportOptions::default());
        assert_eq!(
            vp,
            Viewport::Centered {
                center: PARIS,
                zoom: 10
            }
        );
    }

    #[test]
    fn duplicate_points_centre_on_them() {
        let opts = ViewportOptions {
            padding: 0.2,
            single_marker_zoom: 7,
        };
        let vp = compute_viewport([TOKYO, TOKYO, TOKYO], &opts);
        assert_eq!(
            vp,
            Viewport::Centered {
                center: TOKYO,
                zoom: 7
            }
        );
    }

    #[test]
    fn two_points_get_padded_box() {
        let vp = compute_viewport([PARIS, TOKYO], &ViewportOptions::default());
        let Viewport::Bounds { bounds } = vp else {
            panic!("expected bounds, got {vp:?}");
        };
        let lat_pad = (PARIS.lat - TOKYO.lat) * 0.2;
        let lng_pad = (TOKYO.lng - PARIS.lng) * 0.2;
        assert!((bounds.south_west.lat - (TOKYO.lat - lat_pad)).abs() < 1e-9);
        assert!((bounds.north_east.lat - (PARIS.lat + lat_pad)).abs() < 1e-9);
        assert!((bounds.south_west.lng - (PARIS.lng - lng_pad)).abs() < 1e-9);
        assert!((bounds.north_east.lng - (TOKYO.lng + lng_pad)).abs() < 1e-9);
        assert!(bounds.contains(PARIS) && bounds.contains(TOKYO));
    }

    #[test]
    fn zero_padding_is_tight_box() {
        let opts = ViewportOptions {
            padding: 0.0,
            single_marker_zoom: 10,
        };
        let vp = compute_viewport([PARIS, TOKYO], &opts);
        assert_eq!(
            vp,
            Viewport::Bounds {
                bounds: LatLngBounds {
                    south_west: LatLng::new(TOKYO.lat, PARIS.lng),
                    north_east: LatLng::new(PARIS.lat, TOKYO.lng),
                }
            }
        );
    }

    #[test]
    fn viewport_serializes_with_kind_tag() {
        let centered = serde_json::to_value(Viewport::world()).unwrap();
        assert_eq!(
            centered,
            serde_json::json!({
                "kind": "centered",
                "center": { "lat": 20.0, "lng": 0.0 },
                "zoom": 2
            })
        );

        let bounds = serde_json::to_value(Viewport::Bounds {
            bounds: LatLngBounds::from_points([PARIS, TOKYO]).unwrap(),
        })
        .unwrap();
        assert_eq!(bounds["kind"], "bounds");
        assert_eq!(bounds["bounds"]["south_west"]["lat"], TOKYO.lat);
        assert_eq!(bounds["bounds"]["north_east"]["lng"], TOKYO.lng);
    }
}
