//! Shared request plumbing: URL construction, parameter merging, the single
//! GET every provider call goes through, and payload validation.

use std::time::Duration;

use benchplaces_core::{ProviderConfig, ProviderKind};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::{RawResponse, SourceError};

/// Query parameters whose values never appear in logs or error snapshots.
const SECRET_PARAMS: &[&str] = &[
    "key",
    "client_id",
    "client_secret",
    "access_token",
    "oauth_consumer_key",
    "oauth_token",
    "oauth_signature",
];

/// Caller-supplied query parameters, passed through verbatim.
pub type ExtraParams<'a> = &'a [(&'a str, &'a str)];

/// What a successful response body must contain.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Expected {
    /// A non-null value at this key path, e.g. `["response", "venues"]`.
    Path(&'static [&'static str]),
    /// Any JSON object with at least one field.
    NonEmptyObject,
}

/// Thin wrapper over `reqwest::Client` configured from [`ProviderConfig`].
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub(crate) fn new(config: &ProviderConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// Sends one GET and captures status and body. Never retries.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] on network failure. HTTP error statuses
    /// are not errors here; they surface from [`Fetched::into_payload`].
    pub(crate) async fn get(
        &self,
        provider: ProviderKind,
        url: Url,
    ) -> Result<Fetched, SourceError> {
        let redacted = redact_url(&url);
        tracing::debug!(provider = %provider, url = %redacted, "sending request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let json = serde_json::from_str::<Value>(&body).ok();

        Ok(Fetched {
            provider,
            success: status.is_success(),
            json,
            raw: RawResponse {
                status: status.as_u16(),
                url: redacted,
                body,
            },
        })
    }
}

/// A completed upstream exchange, not yet validated.
#[derive(Debug)]
pub(crate) struct Fetched {
    provider: ProviderKind,
    success: bool,
    json: Option<Value>,
    raw: RawResponse,
}

impl Fetched {
    /// Validates the exchange and extracts the expected payload.
    ///
    /// A 2xx status alone is not enough: the body must also be JSON holding
    /// the `expected` payload.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Api`] carrying the raw response otherwise.
    pub(crate) fn into_payload(self, expected: Expected) -> Result<Value, SourceError> {
        let payload = match (self.success, self.json) {
            (true, Some(mut json)) => match expected {
                Expected::Path(path) => take_path(&mut json, path),
                Expected::NonEmptyObject => json
                    .as_object()
                    .is_some_and(|map| !map.is_empty())
                    .then_some(json),
            },
            _ => None,
        };

        payload.ok_or_else(|| {
            tracing::warn!(
                provider = %self.provider,
                status = self.raw.status,
                url = %self.raw.url,
                "upstream response failed validation"
            );
            SourceError::api(self.provider.as_str(), self.raw)
        })
    }
}

/// Moves the value at `path` out of `json`; JSON `null` counts as missing.
fn take_path(json: &mut Value, path: &[&str]) -> Option<Value> {
    let pointer: String = path.iter().map(|key| format!("/{key}")).collect();
    json.pointer_mut(&pointer)
        .map(Value::take)
        .filter(|value| !value.is_null())
}

/// Joins `segments` onto `base` (each one percent-encoded) and appends
/// `params` as the query string.
///
/// # Errors
///
/// Returns [`SourceError::InvalidUrl`] if `base` cannot be parsed or cannot
/// carry a path.
pub(crate) fn endpoint_url(
    base: &str,
    segments: &[&str],
    params: &[(String, String)],
) -> Result<Url, SourceError> {
    let invalid = |reason: String| SourceError::InvalidUrl {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(segments);
    url.set_query(None);
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in params {
            pairs.append_pair(k, v);
        }
    }
    Ok(url)
}

/// Applies caller overrides on top of a provider's default parameters.
///
/// An extra parameter replaces a default with the same name; otherwise it is
/// appended.
pub(crate) fn merge_params(
    mut params: Vec<(String, String)>,
    extra: ExtraParams<'_>,
) -> Vec<(String, String)> {
    for (key, value) in extra {
        match params.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = (*value).to_string(),
            None => params.push(((*key).to_string(), (*value).to_string())),
        }
    }
    params
}

/// Builds an owned parameter list from string pairs.
pub(crate) fn params<const N: usize>(pairs: [(&str, String); N]) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn redact_url(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if SECRET_PARAMS.contains(&k.as_ref()) {
                "[redacted]".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
