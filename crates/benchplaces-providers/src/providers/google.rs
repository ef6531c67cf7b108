use async_trait::async_trait;
use benchplaces_core::{
    PlaceDetails, PlaceSummary, ProviderConfig, ProviderKind, Review, SEARCH_RADIUS_METERS,
};
use serde_json::Value;

use crate::capability::{DetailsFetcher, GeoCoords, Geocoder, PlaceSearcher, ReviewFetcher};
use crate::error::SourceError;
use crate::http::{endpoint_url, merge_params, params, ApiClient, ExtraParams, Expected};
use crate::serialize::{self, google};

const KIND: ProviderKind = ProviderKind::Google;

/// Google Places and Geocoding APIs, authenticated with an API key.
///
/// Search costs `2 + N` requests for `N` results: one geocode, one nearby
/// search, and one details lookup per result because nearby search omits the
/// profile URL.
pub struct GoogleProvider {
    http: ApiClient,
    api_key: String,
    base_url: String,
}

impl GoogleProvider {
    /// # Errors
    ///
    /// Returns [`SourceError::MissingCredential`] without `GOOGLE_API_KEY`, or
    /// [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, SourceError> {
        let api_key = config
            .google_api_key
            .clone()
            .ok_or(SourceError::MissingCredential("GOOGLE_API_KEY"))?;
        Ok(Self {
            http: ApiClient::new(config)?,
            api_key,
            base_url: config.endpoints.google.clone(),
        })
    }

    /// The `result` object of the place details endpoint.
    async fn details_result(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Value, SourceError> {
        let query = merge_params(
            params([
                ("key", self.api_key.clone()),
                ("placeid", place_id.to_string()),
            ]),
            extra,
        );
        let url = endpoint_url(&self.base_url, &["place", "details", "json"], &query)?;
        self.http
            .get(KIND, url)
            .await?
            .into_payload(Expected::Path(&["result"]))
    }
}

#[async_trait]
impl Geocoder for GoogleProvider {
    /// Takes the first geocoding match; an empty result list is `Ok(None)`.
    async fn get_geo_coords(&self, address: &str) -> Result<Option<GeoCoords>, SourceError> {
        let query = params([
            ("address", address.to_string()),
            ("key", self.api_key.clone()),
        ]);
        let url = endpoint_url(&self.base_url, &["geocode", "json"], &query)?;
        let results = self
            .http
            .get(KIND, url)
            .await?
            .into_payload(Expected::Path(&["results"]))?;

        let location = serialize::items(&results)
            .first()
            .and_then(|first| first.get("geometry"))
            .and_then(|geometry| geometry.get("location"));
        let coords = location.and_then(|loc| {
            Some(GeoCoords {
                lat: loc.get("lat")?.as_f64()?,
                lng: loc.get("lng")?.as_f64()?,
            })
        });

        if coords.is_none() {
            tracing::warn!(address, "geocoding returned no coordinates");
        }
        Ok(coords)
    }
}

#[async_trait]
impl PlaceSearcher for GoogleProvider {
    async fn search_places(
        &self,
        query: &str,
        address: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<PlaceSummary>, SourceError> {
        let coords = self.get_geo_coords(address).await?;

        let mut defaults = params([
            ("key", self.api_key.clone()),
            ("keyword", query.to_string()),
            ("address", address.to_string()),
            ("radius", SEARCH_RADIUS_METERS.to_string()),
        ]);
        if let Some(coords) = coords {
            defaults.push(("location".to_string(), coords.to_query_value()));
        }
        let url = endpoint_url(
            &self.base_url,
            &["place", "nearbysearch", "json"],
            &merge_params(defaults, extra),
        )?;
        let results = self
            .http
            .get(KIND, url)
            .await?
            .into_payload(Expected::Path(&["results"]))?;

        let mut places = google::search_places(serialize::items(&results));
        tracing::info!(provider = %KIND, count = places.len(), "nearby search returned results");

        super::enrich_urls(self, &mut places, "url").await?;
        Ok(places)
    }
}

#[async_trait]
impl DetailsFetcher for GoogleProvider {
    async fn get_place_details(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<PlaceDetails, SourceError> {
        let result = self.details_result(place_id, extra).await?;
        Ok(google::place_details(&result))
    }
}

#[async_trait]
impl ReviewFetcher for GoogleProvider {
    /// Reviews ride along in the details payload; a place without any yields
    /// an empty list.
    async fn get_reviews(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<Review>, SourceError> {
        let result = self.details_result(place_id, extra).await?;
        let reviews = result.get("reviews").map(serialize::items).unwrap_or_default();
        Ok(google::reviews(place_id, reviews))
    }
}
