//! Foursquare v2: venue search, venue lookup and tips (served as reviews).

use benchplaces_core::{PlaceDetails, PlaceSummary, ProviderKind, Review};
use serde_json::Value;

use super::{epoch_at, float_at, int_at, joined_at, text_at};

#[must_use]
pub fn search_places(venues: &[Value]) -> Vec<PlaceSummary> {
    venues
        .iter()
        .map(|venue| PlaceSummary {
            address: joined_at(venue, &["location", "formattedAddress"]),
            place_id: text_at(venue, &["id"]).unwrap_or_default(),
            name: text_at(venue, &["name"]).unwrap_or_default(),
            // Filled from `canonicalUrl` by the per-result venue lookup.
            url: None,
            raw: venue.clone(),
        })
        .collect()
}

#[must_use]
pub fn place_details(venue: &Value) -> PlaceDetails {
    PlaceDetails {
        rating: float_at(venue, &["rating"]),
        checkin_count: int_at(venue, &["stats", "checkinsCount"]),
        likes: int_at(venue, &["likes", "count"]),
        user_count: int_at(venue, &["stats", "usersCount"]),
        tip_count: int_at(venue, &["stats", "tipCount"]),
        ..PlaceDetails::from_raw(venue.clone())
    }
}

#[must_use]
pub fn reviews(tips: &[Value]) -> Vec<Review> {
    tips.iter()
        .map(|tip| Review {
            text: text_at(tip, &["text"]).unwrap_or_default(),
            source_created_on: epoch_at(tip, &["createdAt"]),
            review_id: text_at(tip, &["id"]).unwrap_or_default(),
            source: ProviderKind::Foursquare.as_str().to_string(),
            author: author_name(tip),
            raw: tip.clone(),
        })
        .collect()
}

/// `"First Last"`, skipping whichever half the user left blank.
fn author_name(tip: &Value) -> Option<String> {
    let parts: Vec<String> = [
        text_at(tip, &["user", "firstName"]),
        text_at(tip, &["user", "lastName"]),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.trim().is_empty())
    .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}
