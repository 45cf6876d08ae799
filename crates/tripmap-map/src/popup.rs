//! Marker popup content.
//!
//! Fields that are missing or blank are left out of the markup entirely;
//! nothing is replaced with placeholder text.

use serde::Serialize;
use tripmap_core::Place;

use crate::style::MarkerStyle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub badge: &'static str,
    pub badge_hue: String,
    pub name: Option<String>,
    pub location: Option<String>,
    /// Present only for visited places that carry a date.
    pub date: Option<String>,
    pub image_url: Option<String>,
}

impl PopupContent {
    #[must_use]
    pub fn for_place(place: &Place, style: &MarkerStyle) -> Self {
        let date = if place.is_visited {
            non_blank(place.date_visited.as_deref())
        } else {
            None
        };

        Self {
            badge: style.badge_text,
            badge_hue: style.hue.clone(),
            name: non_blank(Some(&place.name)),
            location: non_blank(Some(&place.location)),
            date,
            image_url: non_blank(Some(&place.image_url)),
        }
    }

    /// Render the popup as an HTML fragment.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div style="min-width:200px">"#);

        html.push_str(&format!(
            concat!(
                r#"<div style="margin-bottom:6px">"#,
                r#"<span style="display:inline-block;padding:2px 8px;border-radius:999px;"#,
                r#"background:{};color:white;font-size:12px;">{}</span></div>"#
            ),
            encode_html(&self.badge_hue),
            self.badge
        ));

        if let Some(name) = &self.name {
            html.push_str(&format!(
                r#"<div style="font-weight:700;font-size:16px;margin-bottom:6px">{}</div>"#,
                encode_html(name)
            ));
        }

        let location_line = match (&self.location, &self.date) {
            (Some(location), Some(date)) => Some(format!(
                "{} \u{2022} {}",
                encode_html(location),
                encode_html(date)
            )),
            (Some(location), None) => Some(encode_html(location)),
            (None, Some(date)) => Some(encode_html(date)),
            (None, None) => None,
        };
        if let Some(line) = location_line {
            html.push_str(&format!(
                r#"<div style="color:#666;font-size:12px;margin-bottom:6px">{line}</div>"#
            ));
        }

        if let Some(url) = &self.image_url {
            html.push_str(&format!(
                r#"<img src="{}" alt="{}" style="width:100%;height:120px;object-fit:cover;border-radius:8px"/>"#,
                encode_html(url),
                encode_html(self.name.as_deref().unwrap_or_default())
            ));
        }

        html.push_str("</div>");
        html
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn encode_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
