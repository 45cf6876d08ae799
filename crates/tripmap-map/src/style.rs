//! Marker styles for the two visitation states.
//!
//! Styles are built once (see [`MarkerStyles::new`]) and shared by every
//! marker; the SVG icon for each variant is rendered a single time.

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

/// Outline of the teardrop pin in a 32x42 viewBox.
const PIN_PATH: &str =
    "M16 0C7.163 0 0 7.163 0 16c0 13 16 26 16 26s16-13 16-26C32 7.163 24.837 0 16 0z";
const STAR_PATH: &str = "M16 10l2 6h6l-5 4 2 6-5-4-5 4 2-6-5-4h6z";

const ICON_WIDTH: u32 = 32;
const ICON_HEIGHT: u32 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerVariant {
    Visited,
    BucketList,
}

impl MarkerVariant {
    #[must_use]
    pub fn for_status(is_visited: bool) -> Self {
        if is_visited {
            Self::Visited
        } else {
            Self::BucketList
        }
    }

    #[must_use]
    pub fn badge_text(self) -> &'static str {
        match self {
            Self::Visited => "Visited",
            Self::BucketList => "Bucket List",
        }
    }

    #[must_use]
    pub fn glyph(self) -> Glyph {
        match self {
            Self::Visited => Glyph::Circle,
            Self::BucketList => Glyph::Star,
        }
    }
}

impl std::fmt::Display for MarkerVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerVariant::Visited => write!(f, "visited"),
            MarkerVariant::BucketList => write!(f, "bucket_list"),
        }
    }
}

/// Shape drawn in the centre of the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Circle,
    Star,
}

/// Rendered pin image plus the geometry a map surface needs to place it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerIcon {
    /// `data:image/svg+xml` URI.
    pub url: String,
    pub size: [u32; 2],
    /// Pixel of the image that sits on the marker position (the pin tip).
    pub anchor: [i32; 2],
    /// Offset of the popup tip relative to the anchor.
    pub popup_anchor: [i32; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub variant: MarkerVariant,
    /// CSS colour used for the pin fill and the popup badge.
    pub hue: String,
    pub glyph: Glyph,
    pub badge_text: &'static str,
    /// Shared with every marker of this variant.
    pub icon: Arc<MarkerIcon>,
}

impl MarkerStyle {
    #[must_use]
    pub fn new(variant: MarkerVariant, hue: impl Into<String>) -> Self {
        let hue = hue.into();
        let glyph = variant.glyph();
        let svg = render_pin_svg(&hue, glyph);

        Self {
            variant,
            glyph,
            badge_text: variant.badge_text(),
            icon: Arc::new(MarkerIcon {
                url: svg_data_uri(&svg),
                size: [ICON_WIDTH, ICON_HEIGHT],
                anchor: [16, 42],
                popup_anchor: [0, -42],
            }),
            hue,
        }
    }
}

/// The fixed `{variant -> style}` table shared by all markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyles {
    visited: MarkerStyle,
    bucket_list: MarkerStyle,
}

impl MarkerStyles {
    #[must_use]
    pub fn new(visited_hue: &str, bucket_list_hue: &str) -> Self {
        Self {
            visited: MarkerStyle::new(MarkerVariant::Visited, visited_hue),
            bucket_list: MarkerStyle::new(MarkerVariant::BucketList, bucket_list_hue),
        }
    }

    #[must_use]
    pub fn style_for(&self, is_visited: bool) -> &MarkerStyle {
        self.get(MarkerVariant::for_status(is_visited))
    }

    #[must_use]
    pub fn get(&self, variant: MarkerVariant) -> &MarkerStyle {
        match variant {
            MarkerVariant::Visited => &self.visited,
            MarkerVariant::BucketList => &self.bucket_list,
        }
    }
}

impl Default for MarkerStyles {
    fn default() -> Self {
        Self::new(
            tripmap_core::config::DEFAULT_VISITED_HUE,
            tripmap_core::config::DEFAULT_BUCKET_LIST_HUE,
        )
    }
}

fn render_pin_svg(hue: &str, glyph: Glyph) -> String {
    let glyph_markup = match glyph {
        Glyph::Circle => r#"<circle cx="16" cy="16" r="6" fill="white"/>"#.to_string(),
        Glyph::Star => format!(r#"<path fill="white" d="{STAR_PATH}"/>"#),
    };
    // A quote would terminate the fill attribute.
    let fill = hue.replace('"', "");

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<path fill="{fill}" stroke="white" stroke-width="2" d="{pin}"/>"#,
            "{glyph}</svg>"
        ),
        w = ICON_WIDTH,
        h = ICON_HEIGHT,
        fill = fill,
        pin = PIN_PATH,
        glyph = glyph_markup,
    )
}

fn svg_data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(svg, NON_ALPHANUMERIC)
    )
}
