//! Gemini adapter tests against a mock server

use std::time::Duration;

use serde_json::json;
use tube_scribe::application::ports::{GenerationError, Generator};
use tube_scribe::domain::prompt::{select, PromptTemplate, PromptType};
use tube_scribe::domain::response::{extract, ExtractionStep};
use tube_scribe::domain::video::VideoUrl;
use tube_scribe::infrastructure::GeminiGenerator;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const ENDPOINT: &str = "/gemini-1.5-flash:generateContent";

fn video() -> VideoUrl {
    VideoUrl::parse(VIDEO).unwrap()
}

fn generator(server: &MockServer) -> GeminiGenerator {
    GeminiGenerator::new("test-key").with_base_url(server.uri())
}

#[tokio::test]
async fn generate_posts_prompt_and_file_reference() {
    let server = MockServer::start().await;
    let template = PromptTemplate::for_type(PromptType::Summary);

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "contents": [{
                "parts": [
                    {"text": template.text()},
                    {"file_data": {"file_uri": VIDEO}}
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "- point one"}], "role": "model"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = generator(&server).generate(&video(), &template).await.unwrap();

    assert_eq!(extract(&response).unwrap(), "- point one");
}

#[tokio::test]
async fn custom_model_in_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .expect(1)
        .mount(&server)
        .await;

    let generator =
        GeminiGenerator::with_model("test-key", "gemini-2.0-flash").with_base_url(server.uri());
    generator.generate(&video(), &select(Some("scene"))).await.unwrap();
}

#[tokio::test]
async fn shapeless_success_body_is_returned_for_extraction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let response = generator(&server)
        .generate(&video(), &select(None))
        .await
        .unwrap();

    assert_eq!(
        extract(&response).unwrap_err().step,
        ExtractionStep::EmptyCandidates
    );
}

#[tokio::test]
async fn unauthorized_is_invalid_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = generator(&server)
        .generate(&video(), &select(Some("transcript")))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::InvalidApiKey));
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = generator(&server)
        .generate(&video(), &select(Some("clips")))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::RateLimited));
}

#[tokio::test]
async fn http_error_carries_api_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "Unsupported file uri", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let err = generator(&server)
        .generate(&video(), &select(Some("transcript")))
        .await
        .unwrap_err();

    match err {
        GenerationError::ApiError(message) => {
            assert!(message.contains("HTTP 400"), "{}", message);
            assert!(message.contains("Unsupported file uri"), "{}", message);
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn error_body_with_success_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"message": "quota exhausted"}
        })))
        .mount(&server)
        .await;

    let err = generator(&server)
        .generate(&video(), &select(Some("transcript")))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::ApiError(ref m) if m == "quota exhausted"));
}

#[tokio::test]
async fn null_error_field_is_not_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Hello"}]}}],
            "error": null
        })))
        .mount(&server)
        .await;

    let response = generator(&server)
        .generate(&video(), &select(Some("transcript")))
        .await
        .unwrap();

    assert_eq!(extract(&response).unwrap(), "Hello");
}

#[tokio::test]
async fn file_uri_is_sent_as_typed() {
    let server = MockServer::start().await;
    let template = select(Some("scene"));

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_json(json!({
            "contents": [{
                "parts": [
                    {"text": template.text()},
                    {"file_data": {"file_uri": "https://Example.com"}}
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .expect(1)
        .mount(&server)
        .await;

    let video = VideoUrl::parse("  https://Example.com ").unwrap();
    generator(&server).generate(&video, &template).await.unwrap();
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"candidates": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = generator(&server)
        .with_timeout(Duration::from_millis(200))
        .generate(&video(), &select(Some("transcript")))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::RequestFailed(_)));
}

#[tokio::test]
async fn non_json_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = generator(&server)
        .generate(&video(), &select(Some("transcript")))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::ParseError(_)));
}

#[tokio::test]
async fn unreachable_server_is_request_failure() {
    // Grab a free port and close it again so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = GeminiGenerator::new("test-key")
        .with_base_url(format!("http://{}", addr))
        .generate(&video(), &select(Some("transcript")))
        .await
        .unwrap_err();

    match err {
        GenerationError::RequestFailed(message) => assert!(!message.contains("test-key")),
        other => panic!("expected RequestFailed, got {:?}", other),
    }
}

#[tokio::test]
#[ignore = "requires GOOGLE_API_KEY environment variable and network access"]
async fn generate_against_live_api() {
    let Ok(api_key) = std::env::var("GOOGLE_API_KEY") else {
        eprintln!("Skipping test: GOOGLE_API_KEY not set");
        return;
    };

    let response = GeminiGenerator::new(api_key)
        .generate(&video(), &select(Some("summary")))
        .await
        .unwrap();

    assert!(!extract(&response).unwrap().is_empty());
}
