//! Geographic primitives: points and south-west / north-east bounding boxes.

use serde::Serialize;

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components finite and inside the latitude/longitude ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (MIN_LAT..=MAX_LAT).contains(&self.lat)
            && (MIN_LNG..=MAX_LNG).contains(&self.lng)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    #[must_use]
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Zero-area box: every enclosed point is the same point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.south_west == self.north_east
    }

    /// Grow the box on every side by `ratio` of its height and width,
    /// clamped to the valid coordinate ranges.
    #[must_use]
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_buffer = (self.north_east.lat - self.south_west.lat).abs() * ratio;
        let lng_buffer = (self.north_east.lng - self.south_west.lng).abs() * ratio;

        Self {
            south_west: LatLng::new(
                (self.south_west.lat - lat_buffer).max(MIN_LAT),
                (self.south_west.lng - lng_buffer).max(MIN_LNG),
            ),
            north_east: LatLng::new(
                (self.north_east.lat + lat_buffer).min(MAX_LAT),
                (self.north_east.lng + lng_buffer).min(MAX_LNG),
            ),
        }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_point_accepts_range_edges() {
        assert!(LatLng::new(90.0, 180.0).is_valid());
        assert!(LatLng::new(-90.0, -180.0).is_valid());
    }

    #[test]
    fn invalid_point_rejects_out_of_range_and_non_finite() {
        assert!(!LatLng::new(90.1, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.5).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
        assert!(!LatLng::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(LatLngBounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn from_points_encloses_all() {
        let pts = [
            LatLng::new(10.0, 20.0),
            LatLng::new(-5.0, 40.0),
            LatLng::new(30.0, -10.0),
        ];
        let b = LatLngBounds::from_points(pts).unwrap();
        assert_eq!(b.south_west, LatLng::new(-5.0, -10.0));
        assert_eq!(b.north_east, LatLng::new(30.0, 40.0));
        assert!(pts.iter().all(|p| b.contains(*p)));
    }

    #[test]
    fn single_point_is_degenerate() {
        let b = LatLngBounds::from_point(LatLng::new(1.0, 2.0));
        assert!(b.is_degenerate());
    }

    #[test]
    fn line_is_not_degenerate() {
        let b = LatLngBounds::from_points([LatLng::new(0.0, 0.0), LatLng::new(0.0, 10.0)])
            .unwrap();
        assert!(!b.is_degenerate());
    }

    #[test]
    fn pad_grows_each_side_by_ratio() {
        let b = LatLngBounds::from_points([LatLng::new(0.0, 0.0), LatLng::new(10.0, 20.0)])
            .unwrap();
        let p = b.pad(0.2);
        assert!((p.south_west.lat - -2.0).abs() < 1e-9);
        assert!((p.north_east.lat - 12.0).abs() < 1e-9);
        assert!((p.south_west.lng - -4.0).abs() < 1e-9);
        assert!((p.north_east.lng - 24.0).abs() < 1e-9);
    }

    #[test]
    fn pad_clamps_to_valid_ranges() {
        let b =
            LatLngBounds::from_points([LatLng::new(-80.0, -170.0), LatLng::new(80.0, 170.0)])
                .unwrap();
        let p = b.pad(0.5);
        assert_eq!(p.south_west, LatLng::new(MIN_LAT, MIN_LNG));
        assert_eq!(p.north_east, LatLng::new(MAX_LAT, MAX_LNG));
    }

    #[test]
    fn center_is_midpoint() {
        let b = LatLngBounds::from_points([LatLng::new(-10.0, 0.0), LatLng::new(10.0, 40.0)])
            .unwrap();
        assert_eq!(b.center(), LatLng::new(0.0, 20.0));
    }
}
