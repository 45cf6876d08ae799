use std::sync::Arc;

use serde::Serialize;

use crate::geo::LatLng;
use crate::popup::PopupContent;
use crate::resolve::{ResolutionSource, ResolvedPlace};
use crate::style::{MarkerIcon, MarkerStyles, MarkerVariant};

/// One rendered map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub place_id: String,
    pub position: LatLng,
    pub source: ResolutionSource,
    pub variant: MarkerVariant,
    pub icon: Arc<MarkerIcon>,
    pub popup: PopupContent,
    pub popup_html: String,
}

impl Marker {
    #[must_use]
    pub fn build(resolved: &ResolvedPlace<'_>, styles: &MarkerStyles) -> Self {
        let style = styles.style_for(resolved.place.is_visited);
        let popup = PopupContent::for_place(resolved.place, style);
        let popup_html = popup.to_html();

        Self {
            place_id: resolved.place.id.clone(),
            position: resolved.position,
            source: resolved.source,
            variant: style.variant,
            icon: Arc::clone(&style.icon),
            popup,
            popup_html,
        }
    }
}
