//! Canonical records every provider normalizes into.
//!
//! Records are built per call and handed straight to the caller. Each one
//! keeps the untouched upstream object in `raw` so callers can reach fields
//! the canonical shape does not carry.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// The closed set of supported place-search services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Google,
    Yelp,
    Foursquare,
    Facebook,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Google,
        ProviderKind::Yelp,
        ProviderKind::Foursquare,
        ProviderKind::Facebook,
    ];

    /// Canonical lowercase name, as used in `Review::source`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::Yelp => "yelp",
            ProviderKind::Foursquare => "foursquare",
            ProviderKind::Facebook => "facebook",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any [`ProviderKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProviderKind(pub String);

impl FromStr for ProviderKind {
    type Err = UnknownProviderKind;

    /// Matches names case-insensitively, so `"google"` and `"Google"` resolve
    /// to the same provider.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProviderKind(s.to_string()))
    }
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceSummary {
    pub address: Option<String>,
    /// Only meaningful to the provider that produced it.
    pub place_id: String,
    pub name: String,
    pub url: Option<String>,
    pub raw: Value,
}

/// Popularity figures for one place. Providers fill only what their API
/// exposes; everything else stays `None` and is omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_talking: Option<i64>,
    pub raw: Value,
}

impl PlaceDetails {
    /// Details with no figures populated yet.
    #[must_use]
    pub fn from_raw(raw: Value) -> Self {
        Self {
            raw,
            ..Self::default()
        }
    }
}

/// A user review (Google) or tip (Foursquare).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub text: String,
    pub source_created_on: Option<DateTime<Utc>>,
    pub review_id: String,
    /// Lowercase provider name, e.g. `"google"`.
    pub source: String,
    pub author: Option<String>,
    pub raw: Value,
}
