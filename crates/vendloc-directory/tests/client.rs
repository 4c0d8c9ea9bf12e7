//! Integration tests for `DirectoryClient` using wiremock HTTP mocks.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vendloc_directory::{DirectoryClient, DirectoryError};

fn test_client(base_url: &str) -> DirectoryClient {
    DirectoryClient::new(base_url).expect("client construction should not fail")
}

#[tokio::test]
async fn get_states_unwraps_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "id": 1, "name": "Maharashtra" },
                { "id": 2, "name": "Karnataka" }
            ]
        })))
        .mount(&server)
        .await;

    let states = test_client(&server.uri())
        .get_states()
        .await
        .expect("should parse states");
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].name, "Maharashtra");
    assert_eq!(states[1].id, 2);
}

#[tokio::test]
async fn get_districts_passes_state_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/districts"))
        .and(query_param("state_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [ { "id": 11, "name": "Pune" } ]
        })))
        .mount(&server)
        .await;

    let districts = test_client(&server.uri())
        .get_districts(1)
        .await
        .expect("should parse districts");
    assert_eq!(districts.len(), 1);
    assert_eq!(districts[0].name, "Pune");
}

#[tokio::test]
async fn get_cities_and_pincodes_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cities"))
        .and(query_param("district_id", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [ { "id": 111, "name": "Pune City" } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pincodes"))
        .and(query_param("city_id", "111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [ { "pincode": "411001", "city": "Pune City" } ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let cities = client.get_cities(11).await.expect("should parse cities");
    assert_eq!(cities[0].id, 111);

    let pincodes = client.get_pincodes(111).await.expect("should parse pincodes");
    assert_eq!(pincodes[0].pincode, "411001");
}

#[tokio::test]
async fn validate_pincode_returns_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pincodes/411001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "pincode": "411001", "city": "Pune", "district": "Pune", "state": "Maharashtra" }
            ]
        })))
        .mount(&server)
        .await;

    let info = test_client(&server.uri())
        .validate_pincode("411001")
        .await
        .expect("lookup should succeed")
        .expect("pincode should be known");
    assert_eq!(info.city.as_deref(), Some("Pune"));
    assert_eq!(info.state.as_deref(), Some("Maharashtra"));
}

#[tokio::test]
async fn unknown_pincode_is_none_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pincodes/999999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .validate_pincode("999999")
        .await
        .expect("lookup should succeed");
    assert!(result.is_none());
}

#[tokio::test]
async fn non_2xx_fails_loudly_instead_of_degrading() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/states"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).get_states().await;
    assert!(matches!(
        result,
        Err(DirectoryError::UnexpectedStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/states"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).get_states().await;
    assert!(matches!(result, Err(DirectoryError::Deserialize { .. })));
}
