//! Facebook Graph: place search and page lookup. Graph exposes no review
//! listing here.

use benchplaces_core::{PlaceDetails, PlaceSummary};
use serde_json::Value;

use super::{int_at, text_at};

#[must_use]
pub fn search_places(data: &[Value]) -> Vec<PlaceSummary> {
    data.iter()
        .map(|page| {
            let place_id = text_at(page, &["id"]).unwrap_or_default();
            PlaceSummary {
                address: text_at(page, &["location", "street"]),
                url: Some(page_url(&place_id)),
                name: text_at(page, &["name"]).unwrap_or_default(),
                place_id,
                raw: page.clone(),
            }
        })
        .collect()
}

#[must_use]
pub fn place_details(page: &Value) -> PlaceDetails {
    PlaceDetails {
        likes: int_at(page, &["likes"]),
        checkin_count: int_at(page, &["checkins"]),
        people_talking: int_at(page, &["talking_about_count"]),
        ..PlaceDetails::from_raw(page.clone())
    }
}

/// Graph search omits the profile link; it is always `facebook.com/{id}`.
fn page_url(place_id: &str) -> String {
    format!("https://facebook.com/{place_id}")
}
