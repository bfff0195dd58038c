use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use judgment_search_client::{Config, SearchError, SearchSession};

async fn session_against(server: &MockServer) -> SearchSession {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    SearchSession::from_config(&config).expect("session should build against mock server")
}

#[tokio::test]
async fn test_pdf_url_resolves_for_known_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-pdf-url"))
        .and(query_param("doc_id", "SC1984_120"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://files.example.org/judgments/SC1984_120.pdf"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_against(&server).await;
    let url = session.resolve_pdf_url("SC1984_120").await.unwrap();
    assert_eq!(url, "https://files.example.org/judgments/SC1984_120.pdf");
}

#[tokio::test]
async fn test_pdf_not_found_surfaces_user_notice() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-pdf-url"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let session = session_against(&server).await;
    let error = session.resolve_pdf_url("HC2010_55").await.unwrap_err();
    assert!(matches!(error, SearchError::PdfNotFound { .. }));
    assert!(error.user_notice().unwrap().contains("HC2010_55"));
}

#[tokio::test]
async fn test_pdf_response_without_url_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-pdf-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let session = session_against(&server).await;
    let error = session.resolve_pdf_url("SC2001_9").await.unwrap_err();
    assert!(matches!(error, SearchError::PdfNotFound { .. }));
}

#[tokio::test]
async fn test_pdf_transport_failure_folds_into_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-pdf-url"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = session_against(&server).await;
    let error = session.resolve_pdf_url("SC2001_9").await.unwrap_err();
    assert!(matches!(error, SearchError::PdfNotFound { .. }));
    assert!(error.user_notice().is_some());
}

#[tokio::test]
async fn test_suggestions_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/autocomplete"))
        .and(query_param("q", "con"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["contract", "constitution", "contempt"])),
        )
        .mount(&server)
        .await;

    let session = session_against(&server).await;
    let suggestions = session.suggest("con").await;
    assert_eq!(suggestions, vec!["contract", "constitution", "contempt"]);
}

#[tokio::test]
async fn test_suggestion_failure_degrades_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/autocomplete"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = session_against(&server).await;
    assert!(session.suggest("con").await.is_empty());

    // empty prefixes never hit the network
    assert!(session.suggest("").await.is_empty());
}
