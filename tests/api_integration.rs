//! Integration tests for the VTEX HTTP transport.
//!
//! These tests run the reqwest-backed client against a local `wiremock` server
//! and check headers, query encoding, request bodies and status handling.

use serde_json::json;
use vtex_sdk::api::*;
use vtex_sdk::auth::AppCredentials;
use vtex_sdk::config::StoreContext;
use vtex_sdk::repository::VtexRepository;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> VtexHttpClient {
    VtexHttpClient::new(server.uri(), AppCredentials::new("test-key", "test-token")).unwrap()
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Transport
// =============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn test_get_sends_auth_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/pvt/product/1"))
            .and(header("X-VTEX-API-AppKey", "test-key"))
            .and(header("X-VTEX-API-AppToken", "test-token"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let product = client.get("/api/catalog/pvt/product/1", &[]).await.unwrap();
        assert_eq!(product, json!({"Id": 1}));
    }

    #[tokio::test]
    async fn test_get_encodes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/oms/pvt/orders/search"))
            .and(query_param("q", "john doe+1@example.com"))
            .and(query_param("f_status", "ready-for-handling"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = params(&[("q", "john doe+1@example.com"), ("f_status", "ready-for-handling")]);
        client.get("/api/oms/pvt/orders/search", &query).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].url.query(),
            Some("q=john+doe%2B1%40example.com&f_status=ready-for-handling")
        );
    }

    #[tokio::test]
    async fn test_get_without_query_has_no_query_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.get("/api/catalog/pvt/product/2", &[]).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        let body = json!({"items": [{"id": "1", "quantity": "1", "seller": "1"}], "sc": "1"});
        Mock::given(method("POST"))
            .and(path("/api/fulfillment/pvt/orderForms/simulation"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .post("/api/fulfillment/pvt/orderForms/simulation", Some(&body))
            .await
            .unwrap();
        assert_eq!(response, json!({"items": []}));
    }

    #[tokio::test]
    async fn test_post_without_body_sends_no_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/oms/pvt/orders/123/authorize"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.post("/api/oms/pvt/orders/123/authorize", None).await.unwrap();
        assert!(response.is_null());

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
        assert!(requests[0].headers.get("content-type").is_none());
    }

    #[tokio::test]
    async fn test_get_sends_no_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/pvt/product/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.get("/api/catalog/pvt/product/1", &[]).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("content-type").is_none());
    }

    #[tokio::test]
    async fn test_redirect_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/catalog/pvt/product/1"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/elsewhere"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Id": 999})))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/api/catalog/pvt/product/1", &[]).await.unwrap_err();
        assert_eq!(err.status(), Some(302));
        assert!(matches!(err, ApiError::RequestFailed { status: 302, .. }));
    }

    #[tokio::test]
    async fn test_non_200_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/api/catalog/pvt/product/1", &[]).await.unwrap_err();
        match err {
            ApiError::RequestFailed { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_2xx_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(206).set_body_json(json!(["partial"])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/api/catalog_system/pub/products/search", &[]).await.unwrap_err();
        assert_eq!(err.status(), Some(206));
    }

    #[tokio::test]
    async fn test_client_error_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"error":"forbidden"}"#))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.post("/api/oms/pvt/orders", Some(&json!({}))).await.unwrap_err();
        match err {
            ApiError::RequestFailed { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, r#"{"error":"forbidden"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_deserialize_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/api/catalog/pvt/product/1", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Deserialize(_)));
    }
}

// =============================================================================
// Repository over HTTP
// =============================================================================

mod repository_http {
    use super::*;

    fn repo_for(server: &MockServer) -> VtexRepository<VtexHttpClient> {
        VtexRepository::with_transport(client_for(server), StoreContext::new("1", "AFF", "2"))
    }

    #[tokio::test]
    async fn test_search_products_walks_ranges() {
        let server = MockServer::start().await;
        for (from, to, body) in [
            ("0", "49", json!([{"productId": "1"}, {"productId": "2"}])),
            ("50", "99", json!([{"productId": "3"}])),
            ("100", "149", json!([])),
        ] {
            Mock::given(method("GET"))
                .and(path("/api/catalog_system/pub/products/search"))
                .and(query_param("_from", from))
                .and(query_param("_to", to))
                .and(query_param("fq", "isAvailablePerSalesChannel_2"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .expect(1)
                .mount(&server)
                .await;
        }

        let repo = repo_for(&server);
        let products = repo.search_products(ProductSearchParams::new()).await.unwrap();
        assert_eq!(
            products,
            vec![json!({"productId": "1"}), json!({"productId": "2"}), json!({"productId": "3"})]
        );
    }

    #[tokio::test]
    async fn test_get_products_sends_page_params() {
        let server = MockServer::start().await;
        for (page, body) in [("1", json!([10, 11])), ("2", json!([12])), ("3", json!([]))] {
            Mock::given(method("GET"))
                .and(path("/api/catalog_system/pvt/sku/stockkeepingunitidsbysaleschannel"))
                .and(query_param("page", page))
                .and(query_param("pageSize", "2"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .expect(1)
                .mount(&server)
                .await;
        }

        let repo = repo_for(&server);
        let ids = repo
            .get_products(ProductListParams::new().with_page_size(2))
            .await
            .unwrap();
        assert_eq!(ids, vec![json!(10), json!(11), json!(12)]);
    }

    #[tokio::test]
    async fn test_failing_page_discards_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("_from", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["p1"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("_from", "50"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let repo = repo_for(&server);
        let err = repo.search_products(ProductSearchParams::new()).await.unwrap_err();
        assert_eq!(err.status(), Some(429));
    }

    #[tokio::test]
    async fn test_price_and_stock_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/fulfillment/pvt/orderForms/simulation"))
            .and(body_json(json!({
                "items": [
                    {"id": "sku1", "quantity": "1", "seller": "1"},
                    {"id": "sku2", "quantity": "1", "seller": "1"}
                ],
                "sc": "2",
                "country": "BRA",
                "postalCode": "01310-100"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "country": "BRA"})))
            .expect(1)
            .mount(&server)
            .await;

        let repo = repo_for(&server);
        let options = SimulationOptions::new()
            .with_country("BRA")
            .with_postal_code("01310-100");
        let results = repo.get_price_and_stock(&["sku1", "sku2"], &options).await.unwrap();
        assert_eq!(results, vec![json!({"items": [], "country": "BRA"})]);
    }

    #[tokio::test]
    async fn test_cancel_order_posts_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/oms/pvt/orders/123/cancel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orderId": "123"})))
            .expect(1)
            .mount(&server)
            .await;

        let repo = repo_for(&server);
        let response = repo.cancel_order("123").await.unwrap();
        assert_eq!(response["orderId"], "123");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_authorize_order_redirect_is_not_followed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/oms/pvt/orders/123/authorize"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/elsewhere"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authorized": true})))
            .expect(0)
            .mount(&server)
            .await;

        let repo = repo_for(&server);
        let err = repo.authorize_order("123").await.unwrap_err();
        assert_eq!(err.status(), Some(302));
    }
}
