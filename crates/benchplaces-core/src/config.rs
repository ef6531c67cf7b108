use crate::provider_config::{
    Endpoints, FacebookCredentials, FoursquareCredentials, ProviderConfig, YelpCredentials,
    DEFAULT_FACEBOOK_BASE_URL, DEFAULT_FOURSQUARE_BASE_URL, DEFAULT_GOOGLE_BASE_URL,
    DEFAULT_YELP_BASE_URL,
};
use crate::ConfigError;

/// Load provider configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid, or if a credential
/// group is only partially configured.
pub fn load_config() -> Result<ProviderConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load provider configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid, or if a credential
/// group is only partially configured.
pub fn load_config_from_env() -> Result<ProviderConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build provider configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_config<F>(lookup: F) -> Result<ProviderConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let require = |var: &str| -> Result<String, ConfigError> {
        optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    // A credential group is all-or-nothing: once any member is set, the
    // rest are required.
    let any_set = |vars: &[&str]| vars.iter().any(|var| optional(var).is_some());

    let google_api_key = optional("GOOGLE_API_KEY");

    let yelp = if any_set(&[
        "YELP_CONSUMER_KEY",
        "YELP_CONSUMER_SECRET",
        "YELP_ACCESS_TOKEN",
        "YELP_ACCESS_TOKEN_SECRET",
    ]) {
        Some(YelpCredentials {
            consumer_key: require("YELP_CONSUMER_KEY")?,
            consumer_secret: require("YELP_CONSUMER_SECRET")?,
            access_token: require("YELP_ACCESS_TOKEN")?,
            access_token_secret: require("YELP_ACCESS_TOKEN_SECRET")?,
        })
    } else {
        None
    };

    let foursquare = if any_set(&["FOURSQUARE_CLIENT_ID", "FOURSQUARE_CLIENT_SECRET"]) {
        Some(FoursquareCredentials {
            client_id: require("FOURSQUARE_CLIENT_ID")?,
            client_secret: require("FOURSQUARE_CLIENT_SECRET")?,
        })
    } else {
        None
    };

    let facebook = if any_set(&["FACEBOOK_APP_ID", "FACEBOOK_APP_SECRET"]) {
        Some(FacebookCredentials {
            app_id: require("FACEBOOK_APP_ID")?,
            app_secret: require("FACEBOOK_APP_SECRET")?,
        })
    } else {
        None
    };

    let endpoints = Endpoints {
        google: or_default("BENCHPLACES_GOOGLE_BASE_URL", DEFAULT_GOOGLE_BASE_URL),
        yelp: or_default("BENCHPLACES_YELP_BASE_URL", DEFAULT_YELP_BASE_URL),
        foursquare: or_default("BENCHPLACES_FOURSQUARE_BASE_URL", DEFAULT_FOURSQUARE_BASE_URL),
        facebook: or_default("BENCHPLACES_FACEBOOK_BASE_URL", DEFAULT_FACEBOOK_BASE_URL),
    };

    let request_timeout_secs = parse_u64("BENCHPLACES_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("BENCHPLACES_USER_AGENT", "benchplaces/0.1 (place-search)");

    Ok(ProviderConfig {
        google_api_key,
        yelp,
        foursquare,
        facebook,
        endpoints,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
