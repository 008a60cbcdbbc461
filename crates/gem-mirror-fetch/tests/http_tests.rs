use std::time::{Duration, SystemTime};

use gem_mirror::{FetchError, Fetcher};
use gem_mirror_fetch::HttpFetcher;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_without_hint_returns_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gems/foo-1.0.gem"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"gem bytes".as_slice()))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let uri = format!("{}/gems/foo-1.0.gem", server.uri());
    let body = fetcher.fetch_if_newer(&uri, None).await.unwrap();

    assert_eq!(body.as_deref(), Some(b"gem bytes".as_slice()));
}

#[tokio::test]
async fn hint_is_sent_and_304_means_unchanged() {
    let server = MockServer::start().await;

    // The server only 304s when the conditional header actually arrives.
    Mock::given(method("GET"))
        .and(path("/Marshal.4.8.Z"))
        .and(header_exists("If-Modified-Since"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let uri = format!("{}/Marshal.4.8.Z", server.uri());
    let hint = SystemTime::now() - Duration::from_secs(3600);
    let body = fetcher.fetch_if_newer(&uri, Some(hint)).await.unwrap();

    assert!(body.is_none());
}

#[tokio::test]
async fn missing_resource_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gems/missing.gem"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let uri = format!("{}/gems/missing.gem", server.uri());
    let result = fetcher.fetch_if_newer(&uri, None).await;

    assert!(matches!(result, Err(FetchError::NotFound(_))));
}

#[tokio::test]
async fn server_error_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gems/broken.gem"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let uri = format!("{}/gems/broken.gem", server.uri());
    let result = fetcher.fetch_if_newer(&uri, None).await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}
