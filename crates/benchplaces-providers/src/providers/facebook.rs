use async_trait::async_trait;
use benchplaces_core::{
    FacebookCredentials, PlaceDetails, PlaceSummary, ProviderConfig, ProviderKind,
    SEARCH_RADIUS_METERS,
};

use crate::capability::{DetailsFetcher, Geocoder, PlaceSearcher};
use crate::error::SourceError;
use crate::http::{endpoint_url, merge_params, params, ApiClient, ExtraParams, Expected};
use crate::providers::GoogleProvider;
use crate::serialize::{self, facebook};

const KIND: ProviderKind = ProviderKind::Facebook;

/// Facebook Graph API, authenticated with an `app_id|app_secret` app token.
///
/// Place search takes a `center` coordinate, so addresses are geocoded
/// through Google first. Profile URLs are synthesized from the page id, so
/// no per-result lookups are made.
pub struct FacebookProvider {
    http: ApiClient,
    credentials: FacebookCredentials,
    base_url: String,
    geocoder: GoogleProvider,
}

impl FacebookProvider {
    /// # Errors
    ///
    /// Returns [`SourceError::MissingCredential`] without the Facebook app
    /// credentials or without `GOOGLE_API_KEY` (needed for geocoding), or
    /// [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, SourceError> {
        let credentials = config
            .facebook
            .clone()
            .ok_or(SourceError::MissingCredential("FACEBOOK_APP_ID"))?;
        Ok(Self {
            http: ApiClient::new(config)?,
            credentials,
            base_url: config.endpoints.facebook.clone(),
            geocoder: GoogleProvider::new(config)?,
        })
    }
}

#[async_trait]
impl PlaceSearcher for FacebookProvider {
    /// `center` is sent only when geocoding produced coordinates.
    async fn search_places(
        &self,
        query: &str,
        address: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<PlaceSummary>, SourceError> {
        let coords = self.geocoder.get_geo_coords(address).await?;

        let mut defaults = params([
            ("access_token", self.credentials.access_token()),
            ("type", "place".to_string()),
            ("q", query.to_string()),
        ]);
        if let Some(coords) = coords {
            defaults.push(("center".to_string(), coords.to_query_value()));
        }
        defaults.push(("distance".to_string(), SEARCH_RADIUS_METERS.to_string()));

        let url = endpoint_url(&self.base_url, &["search"], &merge_params(defaults, extra))?;
        let data = self
            .http
            .get(KIND, url)
            .await?
            .into_payload(Expected::Path(&["data"]))?;

        let places = facebook::search_places(serialize::items(&data));
        tracing::info!(provider = %KIND, count = places.len(), "place search returned results");
        Ok(places)
    }
}

#[async_trait]
impl DetailsFetcher for FacebookProvider {
    async fn get_place_details(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<PlaceDetails, SourceError> {
        let query = merge_params(
            params([("access_token", self.credentials.access_token())]),
            extra,
        );
        let url = endpoint_url(&self.base_url, &[place_id], &query)?;
        let page = self
            .http
            .get(KIND, url)
            .await?
            .into_payload(Expected::NonEmptyObject)?;
        Ok(facebook::place_details(&page))
    }
}
