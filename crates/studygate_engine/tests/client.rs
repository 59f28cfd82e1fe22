use std::time::Duration;

use serde_json::json;
use studygate_engine::{
    CategorizationClient, CategorizationRequest, CategorizeError, ClientSettings, ReqwestClient,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings {
        endpoint: format!("{}/api/iab/iab_content_filtering.php", server.uri()),
        api_key: "test-key".to_string(),
        ..ClientSettings::default()
    }
}

#[tokio::test]
async fn posts_form_encoded_request_and_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/iab/iab_content_filtering.php"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("query=https%3A%2F%2Fexample.com%2Fa+b"))
        .and(body_string_contains("api_key=test-key"))
        .and(body_string_contains("data_type=url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filtering_taxonomy": [["Category name: News"]],
            "status": 200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings(&server)).expect("client");
    let value = client
        .call(&CategorizationRequest::for_url("https://example.com/a b"))
        .await
        .expect("call ok");

    assert_eq!(value["status"], json!(200));
    assert_eq!(
        value["filtering_taxonomy"][0][0],
        json!("Category name: News")
    );
}

#[tokio::test]
async fn error_status_with_json_body_is_still_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status": 403,
            "message": "invalid api key"
        })))
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings(&server)).expect("client");
    let value = client
        .call(&CategorizationRequest::for_url("https://example.com"))
        .await
        .expect("json body");

    assert_eq!(value["status"], json!(403));
}

#[tokio::test]
async fn non_json_body_is_a_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let client = ReqwestClient::new(settings(&server)).expect("client");
    let err = client
        .call(&CategorizationRequest::for_url("https://example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, CategorizeError::NetworkFailure(_)), "{err:?}");
}

#[tokio::test]
async fn slow_response_times_out_as_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let client = ReqwestClient::new(ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..settings(&server)
    })
    .expect("client");
    let err = client
        .call(&CategorizationRequest::for_url("https://example.com"))
        .await
        .unwrap_err();

    match err {
        CategorizeError::NetworkFailure(message) => assert!(message.starts_with("timeout")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn settings_debug_hides_api_key() {
    let settings = ClientSettings {
        api_key: "super-secret".to_string(),
        ..ClientSettings::default()
    };
    let rendered = format!("{settings:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}
