use std::fmt;

/// Search radius sent with every proximity search, in meters.
pub const SEARCH_RADIUS_METERS: u32 = 500;

/// Foursquare rejects calls without a `v` version date.
pub const FOURSQUARE_API_VERSION: u32 = 20_150_228;

pub const DEFAULT_GOOGLE_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_YELP_BASE_URL: &str = "http://api.yelp.com/v2";
pub const DEFAULT_FOURSQUARE_BASE_URL: &str = "https://api.foursquare.com/v2";
pub const DEFAULT_FACEBOOK_BASE_URL: &str = "https://graph.facebook.com";

#[derive(Clone, PartialEq, Eq)]
pub struct YelpCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct FoursquareCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct FacebookCredentials {
    pub app_id: String,
    pub app_secret: String,
}

impl FacebookCredentials {
    /// App access token in the `app_id|app_secret` form the Graph API accepts.
    #[must_use]
    pub fn access_token(&self) -> String {
        format!("{}|{}", self.app_id, self.app_secret)
    }
}

/// Root URL of each upstream API. Overridable so tests can point providers
/// at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub google: String,
    pub yelp: String,
    pub foursquare: String,
    pub facebook: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            google: DEFAULT_GOOGLE_BASE_URL.to_string(),
            yelp: DEFAULT_YELP_BASE_URL.to_string(),
            foursquare: DEFAULT_FOURSQUARE_BASE_URL.to_string(),
            facebook: DEFAULT_FACEBOOK_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Every provider pointed at the same root, as a mock server serves them.
    #[must_use]
    pub fn all_at(base_url: &str) -> Self {
        Self {
            google: base_url.to_string(),
            yelp: base_url.to_string(),
            foursquare: base_url.to_string(),
            facebook: base_url.to_string(),
        }
    }
}

/// Process-wide provider settings, built once at startup and passed by
/// reference into each provider constructor.
///
/// Credentials are optional here; a provider checks for the ones it needs
/// when it is constructed.
#[derive(Clone)]
pub struct ProviderConfig {
    pub google_api_key: Option<String>,
    pub yelp: Option<YelpCredentials>,
    pub foursquare: Option<FoursquareCredentials>,
    pub facebook: Option<FacebookCredentials>,
    pub endpoints: Endpoints,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            yelp: None,
            foursquare: None,
            facebook: None,
            endpoints: Endpoints::default(),
            request_timeout_secs: 30,
            user_agent: "benchplaces/0.1 (place-search)".to_string(),
        }
    }
}

fn redact<T>(value: Option<&T>) -> Option<&'static str> {
    value.map(|_| "[redacted]")
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("google_api_key", &redact(self.google_api_key.as_ref()))
            .field("yelp", &redact(self.yelp.as_ref()))
            .field("foursquare", &redact(self.foursquare.as_ref()))
            .field("facebook", &redact(self.facebook.as_ref()))
            .field("endpoints", &self.endpoints)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl fmt::Debug for YelpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YelpCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[redacted]")
            .field("access_token", &"[redacted]")
            .field("access_token_secret", &"[redacted]")
            .finish()
    }
}

impl fmt::Debug for FoursquareCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoursquareCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

impl fmt::Debug for FacebookCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacebookCredentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &"[redacted]")
            .finish()
    }
}
