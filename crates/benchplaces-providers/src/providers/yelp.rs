use async_trait::async_trait;
use benchplaces_core::{
    PlaceDetails, PlaceSummary, ProviderConfig, ProviderKind, YelpCredentials,
    SEARCH_RADIUS_METERS,
};

use crate::capability::{DetailsFetcher, PlaceSearcher};
use crate::error::SourceError;
use crate::http::{endpoint_url, merge_params, params, ApiClient, ExtraParams, Expected, Fetched};
use crate::oauth1;
use crate::serialize::{self, yelp};

const KIND: ProviderKind = ProviderKind::Yelp;

/// Yelp v2 API. Every request is OAuth1-signed with static credentials.
///
/// Yelp geocodes free-text locations itself, so search is a single request.
pub struct YelpProvider {
    http: ApiClient,
    credentials: YelpCredentials,
    base_url: String,
}

impl YelpProvider {
    /// # Errors
    ///
    /// Returns [`SourceError::MissingCredential`] without the Yelp OAuth
    /// credentials, or [`SourceError::Http`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &ProviderConfig) -> Result<Self, SourceError> {
        let credentials = config
            .yelp
            .clone()
            .ok_or(SourceError::MissingCredential("YELP_CONSUMER_KEY"))?;
        Ok(Self {
            http: ApiClient::new(config)?,
            credentials,
            base_url: config.endpoints.yelp.clone(),
        })
    }

    async fn signed_get(
        &self,
        segments: &[&str],
        query: Vec<(String, String)>,
    ) -> Result<Fetched, SourceError> {
        let unsigned = endpoint_url(&self.base_url, segments, &[])?;
        let signature = oauth1::sign_now(&self.credentials, "GET", &unsigned, &query);
        let signed: Vec<(String, String)> = query.into_iter().chain(signature).collect();
        let url = endpoint_url(&self.base_url, segments, &signed)?;
        self.http.get(KIND, url).await
    }
}

#[async_trait]
impl PlaceSearcher for YelpProvider {
    async fn search_places(
        &self,
        query: &str,
        address: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<PlaceSummary>, SourceError> {
        let defaults = params([
            ("radius_filter", SEARCH_RADIUS_METERS.to_string()),
            ("location", address.to_string()),
            ("term", query.to_string()),
        ]);
        let businesses = self
            .signed_get(&["search"], merge_params(defaults, extra))
            .await?
            .into_payload(Expected::Path(&["businesses"]))?;

        let places = yelp::search_places(serialize::items(&businesses));
        tracing::info!(provider = %KIND, count = places.len(), "business search returned results");
        Ok(places)
    }
}

#[async_trait]
impl DetailsFetcher for YelpProvider {
    async fn get_place_details(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<PlaceDetails, SourceError> {
        let business = self
            .signed_get(&["business", place_id], merge_params(Vec::new(), extra))
            .await?
            .into_payload(Expected::NonEmptyObject)?;
        Ok(yelp::place_details(&business))
    }
}
