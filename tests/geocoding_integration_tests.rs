use nakshatra_lok::core::location::Location;
use nakshatra_lok::geocoding::{GeocodeError, Geocoder, OpenCageGeocoder, locate};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn geocoder_for(server: &MockServer) -> OpenCageGeocoder {
    OpenCageGeocoder::new(Some("test-key".to_string()), Some(server.uri()))
}

// ============================================================================
// OpenCage Geocoder Tests
// ============================================================================

#[tokio::test]
async fn test_opencage_returns_first_result() {
    let mock_server = MockServer::start().await;

    let body = r#"{
        "results": [
            {"geometry": {"lat": 19.0760, "lng": 72.8777}, "formatted": "Mumbai, India"},
            {"geometry": {"lat": 0.0, "lng": 0.0}, "formatted": "Elsewhere"}
        ],
        "status": {"code": 200, "message": "OK"}
    }"#;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param("q", "Mumbai"))
        .and(query_param("key", "test-key"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let coords = geocoder_for(&mock_server).geocode("Mumbai").await.unwrap();
    assert_eq!(coords.latitude, 19.0760);
    assert_eq!(coords.longitude, 72.8777);
}

#[tokio::test]
async fn test_opencage_empty_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"results": [], "status": {"code": 200}}"#),
        )
        .mount(&mock_server)
        .await;

    let geocoder = geocoder_for(&mock_server);
    let result = geocoder.geocode("Nowhere At All").await;
    assert!(matches!(result, Err(GeocodeError::NoResults)));

    // The fail-soft lookup lands on the default location instead.
    let loc = locate(&geocoder, "Nowhere At All").await;
    assert_eq!(loc, Location::default());
}

#[tokio::test]
async fn test_opencage_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid API key"))
        .mount(&mock_server)
        .await;

    let result = geocoder_for(&mock_server).geocode("Pune").await;
    match result {
        Err(GeocodeError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid API key"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_opencage_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result = geocoder_for(&mock_server).geocode("Pune").await;
    assert!(matches!(result, Err(GeocodeError::Parse(_))));
}

#[tokio::test]
async fn test_opencage_without_key_never_calls_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let geocoder = OpenCageGeocoder::new(None, Some(mock_server.uri()));
    let result = geocoder.geocode("Pune").await;
    assert!(matches!(result, Err(GeocodeError::Config(_))));
}

#[tokio::test]
async fn test_opencage_network_error() {
    // Nothing listens on port 1.
    let geocoder = OpenCageGeocoder::new(
        Some("test-key".to_string()),
        Some("http://127.0.0.1:1".to_string()),
    );
    let result = geocoder.geocode("Pune").await;
    assert!(matches!(result, Err(GeocodeError::Network(_))));
}

#[tokio::test]
async fn test_locate_names_location_after_place() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"results": [{"geometry": {"lat": 12.9716, "lng": 77.5946}}]}"#,
        ))
        .mount(&mock_server)
        .await;

    let loc = locate(&geocoder_for(&mock_server), "  Bengaluru ").await;
    assert_eq!(loc, Location::new(12.9716, 77.5946, "Bengaluru"));
}
