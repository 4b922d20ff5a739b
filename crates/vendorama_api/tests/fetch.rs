use std::time::Duration;

use vendorama_api::{ApiSettings, FailureKind, ReqwestSearchApi, SearchApi};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EMPTY_PAGE: &str = r#"{"results": [], "total_rs": 0, "page": 1, "vendor": []}"#;

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        endpoint: format!("{}/search", server.uri()),
        ..ApiSettings::default()
    }
}

fn params(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

#[tokio::test]
async fn fetches_and_decodes_a_page() {
    let server = MockServer::start().await;
    let body = r#"{
        "results": [{"user_id": 1, "item_id": 2, "name": "Mug"}],
        "total_rs": 9,
        "page": 1,
        "vendor": []
    }"#;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("vq", "mugs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let api = ReqwestSearchApi::new(settings_for(&server)).unwrap();
    let page = api
        .fetch_page(&params(&[("vq", "mugs")]), false)
        .await
        .expect("fetch ok");

    assert_eq!(page.total, 9);
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "Mug");
}

#[tokio::test]
async fn sends_parameters_in_builder_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("vu", "12"))
        .and(query_param("ci", "3"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let api = ReqwestSearchApi::new(settings_for(&server)).unwrap();
    api.fetch_page(
        &params(&[("vu", "12"), ("ci", "3"), ("page", "2")]),
        false,
    )
    .await
    .expect("fetch ok");
}

#[tokio::test]
async fn bypass_cache_sends_no_cache_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let api = ReqwestSearchApi::new(settings_for(&server)).unwrap();
    api.fetch_page(&params(&[("vq", "mugs")]), true)
        .await
        .expect("fetch ok");
}

#[tokio::test]
async fn non_success_status_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = ReqwestSearchApi::new(settings_for(&server)).unwrap();
    let err = api
        .fetch_page(&params(&[("vq", "mugs")]), false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string(EMPTY_PAGE),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let api = ReqwestSearchApi::new(settings).unwrap();
    let err = api
        .fetch_page(&params(&[("vq", "mugs")]), false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_maps_to_too_large() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
        .mount(&server)
        .await;

    let settings = ApiSettings {
        max_bytes: 8,
        ..settings_for(&server)
    };
    let api = ReqwestSearchApi::new(settings).unwrap();
    let err = api
        .fetch_page(&params(&[("vq", "mugs")]), false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::TooLarge);
}

#[tokio::test]
async fn malformed_body_maps_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let api = ReqwestSearchApi::new(settings_for(&server)).unwrap();
    let err = api
        .fetch_page(&params(&[("vq", "mugs")]), false)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}
