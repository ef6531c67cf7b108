//! Integration tests for `GoogleProvider` using wiremock HTTP mocks.

use benchplaces_core::{Endpoints, ProviderConfig};
use benchplaces_providers::{
    DetailsFetcher, GeoCoords, Geocoder, GoogleProvider, PlaceSearcher, ReviewFetcher,
    SourceError,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_provider(base_url: &str) -> GoogleProvider {
    let config = ProviderConfig {
        google_api_key: Some("google-key".to_string()),
        endpoints: Endpoints::all_at(base_url),
        ..ProviderConfig::default()
    };
    GoogleProvider::new(&config).expect("provider construction should not fail")
}

async fn mount_geocode(server: &MockServer, lat: f64, lng: f64) {
    let body = json!({
        "status": "OK",
        "results": [{"geometry": {"location": {"lat": lat, "lng": lng}}}]
    });
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("key", "google-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

async fn mount_details_url(server: &MockServer, place_id: &str, url: &str) {
    let body = json!({"status": "OK", "result": {"place_id": place_id, "url": url}});
    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("placeid", place_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_geo_coords_returns_first_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "1 Main St, Springfield"))
        .and(query_param("key", "google-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"geometry": {"location": {"lat": 40.0, "lng": -74.0}}},
                {"geometry": {"location": {"lat": 1.0, "lng": 1.0}}}
            ]
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let coords = provider
        .get_geo_coords("1 Main St, Springfield")
        .await
        .expect("geocode should succeed");

    assert_eq!(
        coords,
        Some(GeoCoords {
            lat: 40.0,
            lng: -74.0
        })
    );
}

#[tokio::test]
async fn get_geo_coords_without_results_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let coords = provider.get_geo_coords("nowhere").await.unwrap();
    assert!(coords.is_none());
}

#[tokio::test]
async fn search_places_enriches_each_result_with_one_details_call() {
    let server = MockServer::start().await;
    mount_geocode(&server, 40.0, -74.0).await;

    let body = json!({
        "status": "OK",
        "results": [
            {"place_id": "p1", "name": "Joe's Coffee", "vicinity": "1 Main St"},
            {"place_id": "p2", "name": "Bean There", "vicinity": "3 Main St"}
        ]
    });
    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("keyword", "coffee"))
        .and(query_param("address", "Springfield"))
        .and(query_param("radius", "500"))
        .and(query_param("location", "40.0,-74.0"))
        .and(query_param("key", "google-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    mount_details_url(&server, "p1", "https://maps.google.com/?cid=1").await;
    mount_details_url(&server, "p2", "https://maps.google.com/?cid=2").await;

    let provider = test_provider(&server.uri());
    let places = provider
        .search_places("coffee", "Springfield", &[])
        .await
        .expect("search should succeed");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].place_id, "p1");
    assert_eq!(places[0].address.as_deref(), Some("1 Main St"));
    assert_eq!(places[0].url.as_deref(), Some("https://maps.google.com/?cid=1"));
    assert_eq!(places[1].url.as_deref(), Some("https://maps.google.com/?cid=2"));
    assert_eq!(places[1].raw, body["results"][1]);

    let requests = server.received_requests().await.unwrap();
    let details_calls = requests
        .iter()
        .filter(|r| r.url.path() == "/place/details/json")
        .count();
    assert_eq!(details_calls, 2, "one details call per search result");
}

#[tokio::test]
async fn search_places_with_no_results_makes_no_details_calls() {
    let server = MockServer::start().await;
    mount_geocode(&server, 40.0, -74.0).await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let places = provider.search_places("coffee", "Springfield", &[]).await.unwrap();
    assert!(places.is_empty());
}

#[tokio::test]
async fn search_places_omits_location_when_geocoding_finds_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param_is_missing("location"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let places = provider.search_places("coffee", "nowhere", &[]).await.unwrap();
    assert!(places.is_empty());
}

#[tokio::test]
async fn search_places_extra_params_override_defaults() {
    let server = MockServer::start().await;
    mount_geocode(&server, 40.0, -74.0).await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("radius", "2000"))
        .and(query_param("type", "cafe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    provider
        .search_places("coffee", "Springfield", &[("radius", "2000"), ("type", "cafe")])
        .await
        .expect("override should reach the request");
}

#[tokio::test]
async fn search_places_missing_results_key_is_source_error() {
    let server = MockServer::start().await;
    mount_geocode(&server, 40.0, -74.0).await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let err = provider
        .search_places("coffee", "Springfield", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Api { .. }), "got {err:?}");
    assert!(err.to_string().contains("google"), "got {err}");
    let response = err.response().expect("raw response attached");
    assert_eq!(response.status, 200);
    assert!(response.body.contains("REQUEST_DENIED"));
    assert!(!response.url.contains("google-key"), "key must be redacted");
}

#[tokio::test]
async fn search_places_server_error_is_source_error() {
    let server = MockServer::start().await;
    mount_geocode(&server, 40.0, -74.0).await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"results": [
            {"place_id": "p1", "name": "Half a result"}
        ]})))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let err = provider
        .search_places("coffee", "Springfield", &[])
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "An error occurred with google API");
    assert_eq!(err.response().map(|r| r.status), Some(500));
}

#[tokio::test]
async fn search_places_fails_when_an_enrichment_call_fails() {
    let server = MockServer::start().await;
    mount_geocode(&server, 40.0, -74.0).await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [
            {"place_id": "p1", "name": "Joe's Coffee"}
        ]})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let result = provider.search_places("coffee", "Springfield", &[]).await;
    assert!(matches!(result, Err(SourceError::Api { .. })), "got {result:?}");
}

#[tokio::test]
async fn get_place_details_maps_rating() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("placeid", "p1"))
        .and(query_param("key", "google-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {"place_id": "p1", "rating": 4.3, "user_ratings_total": 212}
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let details = provider.get_place_details("p1", &[]).await.unwrap();

    assert_eq!(details.rating, Some(4.3));
    assert_eq!(details.rating_count, Some(212));
    assert_eq!(details.raw["place_id"], "p1");
}

#[tokio::test]
async fn get_place_details_without_result_is_source_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "INVALID_REQUEST"})),
        )
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let err = provider.get_place_details("bogus", &[]).await.unwrap_err();
    assert!(err.to_string().contains("google"));
}

#[tokio::test]
async fn get_reviews_derives_stable_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("placeid", "ChIJabc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "place_id": "ChIJabc",
                "reviews": [
                    {"author_name": "Ann", "text": "Great coffee", "time": 1_400_000_000},
                    {"author_name": "Bo", "text": "", "time": 1_400_000_000}
                ]
            }
        })))
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let reviews = provider.get_reviews("ChIJabc", &[]).await.unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(
        reviews[0].review_id,
        "f1362c746eaaf8156c917184202f6ded9a14370989481f4ab6238fb2"
    );
    assert_eq!(reviews[0].author.as_deref(), Some("Ann"));
    assert_eq!(reviews[0].source, "google");
    assert_ne!(reviews[0].review_id, reviews[1].review_id);
}

#[tokio::test]
async fn get_reviews_for_place_without_reviews_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": {"place_id": "p1"}})),
        )
        .mount(&server)
        .await;

    let provider = test_provider(&server.uri());
    let reviews = provider.get_reviews("p1", &[]).await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn unreachable_host_is_http_error() {
    let provider = test_provider("http://127.0.0.1:1");
    let err = provider.get_place_details("p1", &[]).await.unwrap_err();
    assert!(matches!(err, SourceError::Http(_)), "got {err:?}");
    assert!(err.response().is_none());
}

#[test]
fn construction_requires_api_key() {
    let result = GoogleProvider::new(&ProviderConfig::default());
    assert!(matches!(
        result,
        Err(SourceError::MissingCredential("GOOGLE_API_KEY"))
    ));
}
