use async_trait::async_trait;
use benchplaces_core::{
    FoursquareCredentials, PlaceDetails, PlaceSummary, ProviderConfig, ProviderKind, Review,
    FOURSQUARE_API_VERSION, SEARCH_RADIUS_METERS,
};

use crate::capability::{DetailsFetcher, Geocoder, PlaceSearcher, ReviewFetcher};
use crate::error::SourceError;
use crate::http::{endpoint_url, merge_params, params, ApiClient, ExtraParams, Expected};
use crate::providers::GoogleProvider;
use crate::serialize::{self, foursquare};

const KIND: ProviderKind = ProviderKind::Foursquare;

/// Foursquare v2 venues API, authenticated with a userless client id/secret.
///
/// Venue search needs a `lat,lng` centre, so addresses are geocoded through
/// Google first. Like Google, each search result costs one extra venue
/// lookup to obtain `canonicalUrl`.
pub struct FoursquareProvider {
    http: ApiClient,
    credentials: FoursquareCredentials,
    base_url: String,
    geocoder: GoogleProvider,
}

impl FoursquareProvider {
    /// # Errors
    ///
    /// Returns [`SourceError::MissingCredential`] without the Foursquare
    /// client credentials or without `GOOGLE_API_KEY` (needed for
    /// geocoding), or [`SourceError::Http`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &ProviderConfig) -> Result<Self, SourceError> {
        let credentials = config
            .foursquare
            .clone()
            .ok_or(SourceError::MissingCredential("FOURSQUARE_CLIENT_ID"))?;
        Ok(Self {
            http: ApiClient::new(config)?,
            credentials,
            base_url: config.endpoints.foursquare.clone(),
            geocoder: GoogleProvider::new(config)?,
        })
    }

    /// Client credentials and API version, sent on every request.
    fn auth_params(&self) -> Vec<(String, String)> {
        params([
            ("client_id", self.credentials.client_id.clone()),
            ("client_secret", self.credentials.client_secret.clone()),
            ("v", FOURSQUARE_API_VERSION.to_string()),
        ])
    }
}

#[async_trait]
impl PlaceSearcher for FoursquareProvider {
    async fn search_places(
        &self,
        query: &str,
        address: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<PlaceSummary>, SourceError> {
        let coords = self.geocoder.get_geo_coords(address).await?;

        let mut defaults = params([
            ("radius", SEARCH_RADIUS_METERS.to_string()),
            ("query", query.to_string()),
        ]);
        defaults.extend(self.auth_params());
        if let Some(coords) = coords {
            defaults.push(("ll".to_string(), coords.to_query_value()));
        }
        let url = endpoint_url(
            &self.base_url,
            &["venues", "search"],
            &merge_params(defaults, extra),
        )?;
        let venues = self
            .http
            .get(KIND, url)
            .await?
            .into_payload(Expected::Path(&["response", "venues"]))?;

        let mut places = foursquare::search_places(serialize::items(&venues));
        tracing::info!(provider = %KIND, count = places.len(), "venue search returned results");

        super::enrich_urls(self, &mut places, "canonicalUrl").await?;
        Ok(places)
    }
}

#[async_trait]
impl DetailsFetcher for FoursquareProvider {
    async fn get_place_details(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<PlaceDetails, SourceError> {
        let url = endpoint_url(
            &self.base_url,
            &["venues", place_id],
            &merge_params(self.auth_params(), extra),
        )?;
        let venue = self
            .http
            .get(KIND, url)
            .await?
            .into_payload(Expected::Path(&["response", "venue"]))?;
        Ok(foursquare::place_details(&venue))
    }
}

#[async_trait]
impl ReviewFetcher for FoursquareProvider {
    /// Foursquare tips, served as reviews.
    async fn get_reviews(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<Review>, SourceError> {
        let url = endpoint_url(
            &self.base_url,
            &["venues", place_id, "tips"],
            &merge_params(self.auth_params(), extra),
        )?;
        let tips = self
            .http
            .get(KIND, url)
            .await?
            .into_payload(Expected::Path(&["response", "tips", "items"]))?;
        Ok(foursquare::reviews(serialize::items(&tips)))
    }
}
