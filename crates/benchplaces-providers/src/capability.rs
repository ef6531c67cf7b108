//! One trait per capability. A provider implements only the capabilities its
//! upstream API supports, so asking Yelp for reviews is a compile error when
//! the concrete type is known; the [`Provider`](crate::Provider) enum turns
//! it into [`SourceError::NotImplemented`] for name-based callers.

use async_trait::async_trait;
use benchplaces_core::{PlaceDetails, PlaceSummary, Review};

use crate::error::SourceError;
use crate::http::ExtraParams;

/// A resolved `(latitude, longitude)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoords {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoords {
    /// `lat,lng`, the form every upstream expects in a query string. Whole
    /// degrees keep their `.0` (`40.0,-74.0`).
    #[must_use]
    pub fn to_query_value(self) -> String {
        format!("{:?},{:?}", self.lat, self.lng)
    }
}

#[async_trait]
pub trait PlaceSearcher: Send + Sync {
    /// Searches for `query` near `address`.
    async fn search_places(
        &self,
        query: &str,
        address: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<PlaceSummary>, SourceError>;
}

#[async_trait]
pub trait DetailsFetcher: Send + Sync {
    async fn get_place_details(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<PlaceDetails, SourceError>;
}

#[async_trait]
pub trait ReviewFetcher: Send + Sync {
    async fn get_reviews(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<Review>, SourceError>;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a free-text address. `Ok(None)` means the geocoder answered
    /// but found nothing.
    async fn get_geo_coords(&self, address: &str) -> Result<Option<GeoCoords>, SourceError>;
}
