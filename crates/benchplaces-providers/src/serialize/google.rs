//! Google Places: nearby search, place details, and the review sample
//! embedded in the details payload.

use benchplaces_core::{PlaceDetails, PlaceSummary, ProviderKind, Review};
use serde_json::Value;
use sha2::{Digest, Sha224};

use super::{at, epoch_at, float_at, int_at, text_at};

#[must_use]
pub fn search_places(items: &[Value]) -> Vec<PlaceSummary> {
    items
        .iter()
        .map(|item| PlaceSummary {
            address: text_at(item, &["vicinity"]),
            place_id: text_at(item, &["place_id"]).unwrap_or_default(),
            name: text_at(item, &["name"]).unwrap_or_default(),
            // Filled by the per-result details lookup.
            url: None,
            raw: item.clone(),
        })
        .collect()
}

/// Unrated places report `0` for both figures.
#[must_use]
pub fn place_details(result: &Value) -> PlaceDetails {
    PlaceDetails {
        rating: Some(float_at(result, &["rating"]).unwrap_or(0.0)),
        rating_count: Some(int_at(result, &["user_ratings_total"]).unwrap_or(0)),
        ..PlaceDetails::from_raw(result.clone())
    }
}

#[must_use]
pub fn reviews(place_id: &str, items: &[Value]) -> Vec<Review> {
    items
        .iter()
        .map(|item| {
            let text = text_at(item, &["text"]).unwrap_or_default();
            let time = match at(item, &["time"]) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            };
            Review {
                review_id: review_id(place_id, &time, &text),
                source_created_on: epoch_at(item, &["time"]),
                source: ProviderKind::Google.as_str().to_string(),
                author: text_at(item, &["author_name"]),
                text,
                raw: item.clone(),
            }
        })
        .collect()
}

/// Google returns a sample of reviews without ids, so one is derived:
/// hex SHA-224 of `place_id|time|text`.
///
/// The same place, timestamp and text always give the same id.
#[must_use]
pub fn review_id(place_id: &str, time: &str, text: &str) -> String {
    let joined = [place_id, time, text].join("|");
    format!("{:x}", Sha224::digest(joined.as_bytes()))
}
