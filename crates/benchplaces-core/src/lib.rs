//! Canonical place records and provider configuration shared by every
//! `benchplaces` provider.

pub mod config;
pub mod provider_config;
pub mod types;

use thiserror::Error;

pub use config::{load_config, load_config_from_env};
pub use provider_config::{
    Endpoints, FacebookCredentials, FoursquareCredentials, ProviderConfig, YelpCredentials,
    FOURSQUARE_API_VERSION, SEARCH_RADIUS_METERS,
};
pub use types::{PlaceDetails, PlaceSummary, ProviderKind, Review, UnknownProviderKind};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
