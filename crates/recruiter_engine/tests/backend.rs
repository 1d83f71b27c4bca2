use std::time::Duration;

use pretty_assertions::assert_eq;
use recruiter_engine::{
    AnalyzeRequest, BackendClient, BackendError, BackendSettings, ChatMessage, ChatRequest,
    ChatRole, DocumentEndpoint, DocumentRequest, ReqwestBackend,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    let settings = BackendSettings::new(Url::parse(&server.uri()).unwrap());
    ReqwestBackend::new(settings).unwrap()
}

fn document_request(profile_url: Option<&str>) -> DocumentRequest {
    DocumentRequest {
        extracted_content: "resume".to_string(),
        transcript: "notes".to_string(),
        job_description: "Senior Engineer".to_string(),
        profile_url: profile_url.map(str::to_string),
    }
}

#[tokio::test]
async fn analyze_posts_url_and_selector() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"url": "https://example.com", "selector": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "Hello world"})))
        .expect(1)
        .mount(&server)
        .await;

    let content = backend_for(&server)
        .analyze(&AnalyzeRequest {
            url: "https://example.com".to_string(),
            selector: String::new(),
        })
        .await
        .expect("analyze ok");
    assert_eq!(content, "Hello world");
}

#[tokio::test]
async fn analyze_without_content_field_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let content = backend_for(&server)
        .analyze(&AnalyzeRequest {
            url: "https://example.com".to_string(),
            selector: "#bio".to_string(),
        })
        .await
        .expect("analyze ok");
    assert_eq!(content, "");
}

#[tokio::test]
async fn chat_sends_history_in_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({
            "history": [
                {"role": "user", "parts": [{"text": "q1"}]},
                {"role": "model", "parts": [{"text": "a1"}]},
                {"role": "user", "parts": [{"text": "q2"}]},
            ],
            "documentContent": "",
            "transcriptContent": "notes",
            "jobContent": "job",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "a2"})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = backend_for(&server)
        .chat(&ChatRequest {
            history: vec![
                ChatMessage::new(ChatRole::User, "q1"),
                ChatMessage::new(ChatRole::Model, "a1"),
                ChatMessage::new(ChatRole::User, "q2"),
            ],
            document_content: String::new(),
            transcript_content: "notes".to_string(),
            job_content: "job".to_string(),
        })
        .await
        .expect("chat ok");
    assert_eq!(reply, "a2");
}

#[tokio::test]
async fn summary_omits_profile_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_talent_summary"))
        .and(body_json(json!({
            "extracted_content": "resume",
            "transcript": "notes",
            "job_description": "Senior Engineer",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"talent_summary": "- **Rust**"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let summary = backend_for(&server)
        .generate(DocumentEndpoint::TalentSummary, &document_request(None))
        .await
        .expect("summary ok");
    assert_eq!(summary, "- **Rust**");
}

#[tokio::test]
async fn template_forwards_profile_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_talent_submission_template"))
        .and(body_json(json!({
            "extracted_content": "resume",
            "transcript": "notes",
            "job_description": "Senior Engineer",
            "profile_url": "https://example.com/in/jane",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"talent_submission_template": "**Jane Doe**"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let template = backend_for(&server)
        .generate(
            DocumentEndpoint::SubmissionTemplate,
            &document_request(Some("https://example.com/in/jane")),
        )
        .await
        .expect("template ok");
    assert_eq!(template, "**Jane Doe**");
}

#[tokio::test]
async fn server_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "Invalid URL. Must start with http:// or https://."})),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .analyze(&AnalyzeRequest {
            url: "ftp://example.com".to_string(),
            selector: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BackendError::Status {
            status: 400,
            message: Some("Invalid URL. Must start with http:// or https://.".to_string()),
        }
    );
    assert_eq!(
        err.user_message(),
        "Invalid URL. Must start with http:// or https://."
    );
}

#[tokio::test]
async fn status_without_error_field_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .chat(&ChatRequest {
            history: vec![ChatMessage::new(ChatRole::User, "hi")],
            document_content: String::new(),
            transcript_content: "notes".to_string(),
            job_content: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "HTTP error! status: 503");
}

#[tokio::test]
async fn missing_result_field_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_talent_summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "wrong key"})))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .generate(DocumentEndpoint::TalentSummary, &document_request(None))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BackendError::InvalidResponse("missing `talent_summary` field".to_string())
    );
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    // Bind and release a port so nothing listens on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let settings =
        BackendSettings::new(Url::parse(&format!("http://127.0.0.1:{port}")).unwrap());
    let err = ReqwestBackend::new(settings)
        .unwrap()
        .analyze(&AnalyzeRequest {
            url: "https://example.com".to_string(),
            selector: String::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn opt_in_timeout_bounds_slow_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"response": "slow"})),
        )
        .mount(&server)
        .await;

    let settings = BackendSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..BackendSettings::new(Url::parse(&server.uri()).unwrap())
    };
    let err = ReqwestBackend::new(settings)
        .unwrap()
        .chat(&ChatRequest {
            history: vec![ChatMessage::new(ChatRole::User, "hi")],
            document_content: String::new(),
            transcript_content: "notes".to_string(),
            job_content: String::new(),
        })
        .await
        .unwrap_err();
    let BackendError::Transport(message) = err else {
        panic!("expected transport error, got {err:?}");
    };
    assert!(message.starts_with("request timed out"), "got {message}");
}
