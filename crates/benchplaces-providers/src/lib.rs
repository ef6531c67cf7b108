//! Place search across Google Places, Yelp, Foursquare and Facebook Graph,
//! normalized into the canonical records of [`benchplaces_core`].
//!
//! Each call issues its upstream requests one at a time and never retries.
//! Providers are constructed from a [`ProviderConfig`] and can be used
//! directly or resolved by name through [`Provider::source`]:
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = benchplaces_core::load_config()?;
//! let yelp = benchplaces_providers::Provider::source("yelp", &config)?;
//! let _places = yelp.search_places("coffee", "1 Main St, Springfield", &[]).await?;
//! # Ok(()) }
//! ```

pub mod capability;
pub mod error;
pub mod providers;
pub mod registry;
pub mod serialize;

mod http;
mod oauth1;

pub use benchplaces_core::{PlaceDetails, PlaceSummary, ProviderConfig, ProviderKind, Review};
pub use capability::{DetailsFetcher, GeoCoords, Geocoder, PlaceSearcher, ReviewFetcher};
pub use error::{RawResponse, SourceError};
pub use http::ExtraParams;
pub use providers::{FacebookProvider, FoursquareProvider, GoogleProvider, YelpProvider};
pub use registry::Provider;
