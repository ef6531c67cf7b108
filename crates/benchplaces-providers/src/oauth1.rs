//! OAuth 1.0a request signing (HMAC-SHA1), as required by the Yelp v2 API.
//!
//! Yelp hands out static consumer and access-token pairs, so there is no
//! token exchange here: each request just gets the `oauth_*` parameters and
//! a signature appended to its query string.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use benchplaces_core::YelpCredentials;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distr::{Alphanumeric, SampleString};
use reqwest::Url;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay literal; everything else is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED).to_string()
}

/// Scheme, authority and path of `url`, without query or fragment.
fn base_string_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
        None => format!("{}://{host}{}", url.scheme(), url.path()),
    }
}

/// Builds the `oauth_*` parameters, including `oauth_signature`, for a
/// request to `url` carrying `params`.
///
/// `nonce` and `timestamp` are taken as arguments so signatures are
/// reproducible; [`sign_now`] fills them in for live requests.
pub(crate) fn sign(
    credentials: &YelpCredentials,
    method: &str,
    url: &Url,
    params: &[(String, String)],
    nonce: &str,
    timestamp: i64,
) -> Vec<(String, String)> {
    let mut oauth_params = vec![
        (
            "oauth_consumer_key".to_string(),
            credentials.consumer_key.clone(),
        ),
        ("oauth_nonce".to_string(), nonce.to_string()),
        (
            "oauth_signature_method".to_string(),
            "HMAC-SHA1".to_string(),
        ),
        ("oauth_timestamp".to_string(), timestamp.to_string()),
        ("oauth_token".to_string(), credentials.access_token.clone()),
        ("oauth_version".to_string(), "1.0".to_string()),
    ];

    let mut encoded: Vec<(String, String)> = params
        .iter()
        .chain(oauth_params.iter())
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();
    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(&base_string_uri(url)),
        encode(&normalized)
    );
    let key = format!(
        "{}&{}",
        encode(&credentials.consumer_secret),
        encode(&credentials.access_token_secret)
    );

    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    oauth_params.push(("oauth_signature".to_string(), signature));
    oauth_params
}

/// [`sign`] with a fresh random nonce and the current time.
pub(crate) fn sign_now(
    credentials: &YelpCredentials,
    method: &str,
    url: &Url,
    params: &[(String, String)],
) -> Vec<(String, String)> {
    let nonce = Alphanumeric.sample_string(&mut rand::rng(), 32);
    let timestamp = chrono::Utc::now().timestamp();
    sign(credentials, method, url, params, &nonce, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> YelpCredentials {
        YelpCredentials {
            consumer_key: "ck".to_string(),
            consumer_secret: "cs".to_string(),
            access_token: "at".to_string(),
            access_token_secret: "ats".to_string(),
        }
    }

    fn search_params() -> Vec<(String, String)> {
        vec![
            ("term".to_string(), "Cafe".to_string()),
            (
                "location".to_string(),
                "1 Main St, Springfield".to_string(),
            ),
            ("radius_filter".to_string(), "500".to_string()),
        ]
    }

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn signature_matches_known_vector() {
        let url = Url::parse("http://api.yelp.com/v2/search").unwrap();
        let signed = sign(
            &credentials(),
            "GET",
            &url,
            &search_params(),
            "abc123",
            1_400_000_000,
        );
        assert_eq!(
            param(&signed, "oauth_signature"),
            Some("qxgosg/XZPv5c+np5Zn7Ng1oz90=")
        );
    }

    #[test]
    fn signed_params_carry_static_credentials() {
        let url = Url::parse("http://api.yelp.com/v2/business/b1").unwrap();
        let signed = sign(&credentials(), "get", &url, &[], "n", 1);
        assert_eq!(param(&signed, "oauth_consumer_key"), Some("ck"));
        assert_eq!(param(&signed, "oauth_token"), Some("at"));
        assert_eq!(param(&signed, "oauth_signature_method"), Some("HMAC-SHA1"));
        assert_eq!(param(&signed, "oauth_version"), Some("1.0"));
        assert!(param(&signed, "oauth_consumer_secret").is_none());
    }

    #[test]
    fn signature_changes_with_params() {
        let url = Url::parse("http://api.yelp.com/v2/search").unwrap();
        let a = sign(&credentials(), "GET", &url, &search_params(), "n", 1);
        let mut other = search_params();
        other[0].1 = "Bar".to_string();
        let b = sign(&credentials(), "GET", &url, &other, "n", 1);
        assert_ne!(
            param(&a, "oauth_signature"),
            param(&b, "oauth_signature")
        );
    }

    #[test]
    fn base_string_uri_keeps_explicit_port_and_drops_query() {
        let url = Url::parse("http://127.0.0.1:8080/v2/search?term=x").unwrap();
        assert_eq!(base_string_uri(&url), "http://127.0.0.1:8080/v2/search");
        let url = Url::parse("HTTP://API.Yelp.com:80/v2/search").unwrap();
        assert_eq!(base_string_uri(&url), "http://api.yelp.com/v2/search");
    }

    #[test]
    fn sign_now_uses_fresh_nonces() {
        let url = Url::parse("http://api.yelp.com/v2/search").unwrap();
        let a = sign_now(&credentials(), "GET", &url, &[]);
        let b = sign_now(&credentials(), "GET", &url, &[]);
        assert_ne!(param(&a, "oauth_nonce"), param(&b, "oauth_nonce"));
        assert_eq!(param(&a, "oauth_nonce").map(str::len), Some(32));
    }
}
