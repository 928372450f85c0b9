//! Integration tests for `StoreApiClient` using wiremock HTTP mocks.

use connectyou_client::{GatewayError, StoreApiClient, StoreSource};
use connectyou_core::{CategoryFilter, FeedbackPayload, QueryState, StoreCategory};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StoreApiClient {
    StoreApiClient::with_base_url(base_url, Some(5), "connectyou-test/0.1")
        .expect("client construction should not fail")
}

fn stores_body() -> serde_json::Value {
    json!({
        "stores": [
            {
                "id": 1,
                "name": "Central Grocery",
                "type": "grocery",
                "address": "123 Main St, New York, NY",
                "lat": 40.7128,
                "lon": -74.006,
                "rating": 4.5,
                "reviews": 120
            },
            {
                "id": 4,
                "name": "Fresh Mart",
                "type": "grocery",
                "address": "321 Food Ave",
                "lat": 40.7158,
                "lon": -74.009,
                "rating": 4.6,
                "reviews": 150
            }
        ],
        "total": 2,
        "timestamp": "2024-05-01T12:30:45.123456"
    })
}

#[tokio::test]
async fn list_stores_sends_type_and_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores"))
        .and(query_param("type", "grocery"))
        .and(query_param("query", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stores_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .list_stores(&CategoryFilter::Only(StoreCategory::Grocery), "main")
        .await
        .expect("should parse stores");

    assert_eq!(response.total, 2);
    assert_eq!(response.stores.len(), 2);
    assert_eq!(response.stores[0].name, "Central Grocery");
    assert!(response.timestamp.is_some());
}

#[tokio::test]
async fn list_stores_omits_params_for_all_and_empty_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores"))
        .and(query_param_is_missing("type"))
        .and(query_param_is_missing("query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stores": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .list_stores(&CategoryFilter::All, "")
        .await
        .expect("empty list should parse");

    assert!(response.stores.is_empty());
    assert_eq!(response.total, 0);
}

#[tokio::test]
async fn list_stores_respects_api_path_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stores_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/api", server.uri()));
    let response = client.list_stores(&CategoryFilter::All, "").await;
    assert!(response.is_ok(), "expected Ok, got {response:?}");
}

#[tokio::test]
async fn server_error_with_structured_body_surfaces_its_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_stores(&CategoryFilter::All, "")
        .await
        .expect_err("500 should fail");

    assert_eq!(err.to_string(), "db down");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn server_error_with_empty_body_uses_fallback_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_stores(&CategoryFilter::All, "")
        .await
        .expect_err("500 should fail");

    assert_eq!(err.to_string(), "Failed to fetch stores");
    assert!(matches!(err, GatewayError::Status { status: 500, .. }));
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_analytics().await.expect_err("should not decode");

    assert!(matches!(err, GatewayError::Decode { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Failed to fetch analytics"));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = test_client(&format!("http://127.0.0.1:{port}"));
    let err = client
        .list_categories()
        .await
        .expect_err("closed port should fail");

    assert!(matches!(err, GatewayError::Transport { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Failed to fetch store types"));
}

#[tokio::test]
async fn list_categories_reads_types_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/store-types"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"types": ["books", "grocery"], "total": 2})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client.list_categories().await.expect("should parse types");
    assert_eq!(response.categories, vec!["books", "grocery"]);
}

#[tokio::test]
async fn fetch_analytics_parses_counters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_stores": 5,
            "stores_by_type": {"books": 1, "clothing": 1, "electronics": 1, "general": 1, "grocery": 1},
            "average_rating": 4.5,
            "total_reviews": 525,
            "top_rated": [{"name": "City Books", "rating": 4.8, "type": "books"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let analytics = client.fetch_analytics().await.expect("should parse");
    assert_eq!(analytics.total_stores, 5);
    assert_eq!(analytics.category_count(), 5);
    assert_eq!(analytics.top_rated[0].name, "City Books");
}

#[tokio::test]
async fn submit_feedback_posts_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .and(body_json(json!({"rating": 4, "comment": "Friendly staff", "storeId": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Feedback received successfully",
            "timestamp": "2024-05-01T12:30:45"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = FeedbackPayload::new(4, "Friendly staff", Some(2)).unwrap();
    let receipt = client
        .submit_feedback(&payload)
        .await
        .expect("feedback should be accepted");

    assert_eq!(receipt.message, "Feedback received successfully");
}

#[tokio::test]
async fn invalid_feedback_never_reaches_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = FeedbackPayload {
        rating: 9,
        comment: "too good".into(),
        store_id: None,
    };
    let err = client.submit_feedback(&payload).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidRequest(_)), "got {err:?}");
}

#[tokio::test]
async fn feedback_rejection_uses_top_level_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "comment too long"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let payload = FeedbackPayload::new(5, "x", None).unwrap();
    let err = client.submit_feedback(&payload).await.unwrap_err();
    assert_eq!(err.to_string(), "comment too long");
}

#[tokio::test]
async fn store_source_impl_forwards_query_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores"))
        .and(query_param("type", "books"))
        .and(query_param("query", "city"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stores": [{
                "id": 2, "name": "City Books", "type": "books", "address": "456 Book Lane",
                "lat": 40.7138, "lon": -74.009, "rating": 4.8
            }],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = std::sync::Arc::new(test_client(&server.uri()));
    let query = QueryState::new("city", CategoryFilter::Only(StoreCategory::Books));
    let stores = client.fetch_stores(&query).await.expect("should fetch");
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].id, 2);
}
