//! Yelp v2: business search and business lookup. Yelp exposes no review
//! listing here.

use benchplaces_core::{PlaceDetails, PlaceSummary};
use serde_json::Value;

use super::{float_at, int_at, joined_at, text_at};

#[must_use]
pub fn search_places(items: &[Value]) -> Vec<PlaceSummary> {
    items
        .iter()
        .map(|item| PlaceSummary {
            address: joined_at(item, &["location", "display_address"]),
            place_id: text_at(item, &["id"]).unwrap_or_default(),
            name: text_at(item, &["name"]).unwrap_or_default(),
            url: text_at(item, &["url"]),
            raw: item.clone(),
        })
        .collect()
}

#[must_use]
pub fn place_details(business: &Value) -> PlaceDetails {
    PlaceDetails {
        rating: float_at(business, &["rating"]),
        rating_count: int_at(business, &["review_count"]),
        ..PlaceDetails::from_raw(business.clone())
    }
}
