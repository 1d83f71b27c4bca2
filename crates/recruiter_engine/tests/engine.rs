use std::sync::{mpsc, Arc};
use std::time::Duration;

use recruiter_engine::{
    AnalyzeRequest, BackendSettings, ChannelEventSink, DocumentEndpoint, DocumentRequest,
    EngineEvent, EngineHandle, ReqwestBackend,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn next_event(rx: mpsc::Receiver<EngineEvent>) -> (EngineEvent, mpsc::Receiver<EngineEvent>) {
    tokio::task::spawn_blocking(move || {
        let event = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("engine event");
        (event, rx)
    })
    .await
    .expect("join")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn engine_reports_independent_requests() {
    engine_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(200))
                .set_body_json(json!({"content": "Hello world"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/generate_talent_summary"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "quota"})))
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(BackendSettings::new(Url::parse(&server.uri()).unwrap()))
        .unwrap();
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(Arc::new(backend), Arc::new(ChannelEventSink::new(tx)));

    engine.analyze(AnalyzeRequest {
        url: "https://example.com".to_string(),
        selector: String::new(),
    });
    engine.generate(
        DocumentEndpoint::TalentSummary,
        DocumentRequest {
            extracted_content: String::new(),
            transcript: "notes".to_string(),
            job_description: "job".to_string(),
            profile_url: None,
        },
    );

    // The slow analyze request does not hold back the generation result.
    let (first, rx) = next_event(rx).await;
    let EngineEvent::DocumentCompleted { endpoint, result } = first else {
        panic!("expected document event first, got {first:?}");
    };
    assert_eq!(endpoint, DocumentEndpoint::TalentSummary);
    assert_eq!(result.unwrap_err().user_message(), "quota");

    let (second, _rx) = next_event(rx).await;
    assert_eq!(
        second,
        EngineEvent::AnalyzeCompleted(Ok("Hello world".to_string()))
    );
}
