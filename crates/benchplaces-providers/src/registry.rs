//! Name-based provider resolution over the closed set of providers.

use benchplaces_core::{PlaceDetails, PlaceSummary, ProviderConfig, ProviderKind, Review};

use crate::capability::{DetailsFetcher, PlaceSearcher, ReviewFetcher};
use crate::error::SourceError;
use crate::http::ExtraParams;
use crate::providers::{FacebookProvider, FoursquareProvider, GoogleProvider, YelpProvider};

/// Any supported provider, for callers that pick one by name at runtime.
///
/// Callers that know the provider statically should use the concrete types,
/// where a missing capability is a compile error instead of
/// [`SourceError::NotImplemented`].
pub enum Provider {
    Google(GoogleProvider),
    Yelp(YelpProvider),
    Foursquare(FoursquareProvider),
    Facebook(FacebookProvider),
}

impl Provider {
    /// Resolves a provider name such as `"google"` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnknownProvider`] for an unrecognized name, or
    /// any error from constructing the provider (see [`Provider::new`]).
    pub fn source(name: &str, config: &ProviderConfig) -> Result<Self, SourceError> {
        let kind: ProviderKind = name.parse()?;
        Self::new(kind, config)
    }

    /// # Errors
    ///
    /// Returns [`SourceError::MissingCredential`] if `config` lacks the
    /// credentials the provider needs.
    pub fn new(kind: ProviderKind, config: &ProviderConfig) -> Result<Self, SourceError> {
        let provider = match kind {
            ProviderKind::Google => Provider::Google(GoogleProvider::new(config)?),
            ProviderKind::Yelp => Provider::Yelp(YelpProvider::new(config)?),
            ProviderKind::Foursquare => Provider::Foursquare(FoursquareProvider::new(config)?),
            ProviderKind::Facebook => Provider::Facebook(FacebookProvider::new(config)?),
        };
        tracing::debug!(provider = %kind, "provider resolved");
        Ok(provider)
    }

    #[must_use]
    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Google(_) => ProviderKind::Google,
            Provider::Yelp(_) => ProviderKind::Yelp,
            Provider::Foursquare(_) => ProviderKind::Foursquare,
            Provider::Facebook(_) => ProviderKind::Facebook,
        }
    }

    /// The provider's search capability. Every provider has one.
    #[must_use]
    pub fn searcher(&self) -> &dyn PlaceSearcher {
        match self {
            Provider::Google(p) => p,
            Provider::Yelp(p) => p,
            Provider::Foursquare(p) => p,
            Provider::Facebook(p) => p,
        }
    }

    /// The provider's details capability. Every provider has one.
    #[must_use]
    pub fn details_fetcher(&self) -> &dyn DetailsFetcher {
        match self {
            Provider::Google(p) => p,
            Provider::Yelp(p) => p,
            Provider::Foursquare(p) => p,
            Provider::Facebook(p) => p,
        }
    }

    /// The provider's review capability, if its API has one.
    #[must_use]
    pub fn review_fetcher(&self) -> Option<&dyn ReviewFetcher> {
        match self {
            Provider::Google(p) => Some(p as &dyn ReviewFetcher),
            Provider::Foursquare(p) => Some(p as &dyn ReviewFetcher),
            Provider::Yelp(_) | Provider::Facebook(_) => None,
        }
    }

    /// # Errors
    ///
    /// Propagates the provider's [`SourceError`].
    pub async fn search_places(
        &self,
        query: &str,
        address: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<PlaceSummary>, SourceError> {
        self.searcher().search_places(query, address, extra).await
    }

    /// # Errors
    ///
    /// Propagates the provider's [`SourceError`].
    pub async fn get_place_details(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<PlaceDetails, SourceError> {
        self.details_fetcher().get_place_details(place_id, extra).await
    }

    /// # Errors
    ///
    /// Returns [`SourceError::NotImplemented`] for Yelp and Facebook, otherwise
    /// propagates the provider's [`SourceError`].
    pub async fn get_reviews(
        &self,
        place_id: &str,
        extra: ExtraParams<'_>,
    ) -> Result<Vec<Review>, SourceError> {
        match self.review_fetcher() {
            Some(fetcher) => fetcher.get_reviews(place_id, extra).await,
            None => Err(SourceError::NotImplemented {
                provider: self.kind().as_str(),
                capability: "get_reviews",
            }),
        }
    }
}
