use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_info};
use recruiter_core::{ChatRole, ChatTurn, DocumentKind, Effect, Msg, RequestFailure};
use recruiter_engine::{
    AnalyzeRequest, BackendClient, BackendError, ChatMessage, ChatRequest, DocumentEndpoint,
    DocumentRequest, EngineEvent, EngineHandle, EventSink,
};

use super::app::AppEvent;
use super::clipboard::ClipboardWriter;

/// Executes core effects: backend calls go to the engine, clipboard writes
/// and copy timers run here. Every outcome comes back as a [`Msg`].
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Arc<dyn ClipboardWriter>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        client: Arc<dyn BackendClient>,
        clipboard: Arc<dyn ClipboardWriter>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let sink = Arc::new(MsgSink {
            tx: event_tx.clone(),
        });
        Self {
            engine: EngineHandle::new(client, sink),
            clipboard,
            event_tx,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Analyze(request) => {
                    engine_info!(
                        "Analyze url={} selector_len={}",
                        request.url,
                        request.selector.len()
                    );
                    self.engine.analyze(AnalyzeRequest {
                        url: request.url,
                        selector: request.selector,
                    });
                }
                Effect::SendChat(request) => {
                    engine_info!("Chat turns={}", request.history.len());
                    self.engine.chat(chat_request(request));
                }
                Effect::Generate { kind, request } => {
                    engine_info!("Generate {:?}", kind);
                    self.engine.generate(
                        endpoint_for(kind),
                        DocumentRequest {
                            extracted_content: request.extracted_content,
                            transcript: request.transcript,
                            job_description: request.job_description,
                            profile_url: request.profile_url,
                        },
                    );
                }
                Effect::CopyToClipboard { kind, text } => {
                    let result = self
                        .clipboard
                        .write_text(&text)
                        .map_err(|err| format!("{err:#}"));
                    self.send(Msg::CopyFinished { kind, result });
                }
                Effect::ScheduleCopyReset { kind, token, after } => {
                    let tx = self.event_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = tx.send(AppEvent::Core(Msg::CopyFeedbackExpired { kind, token }));
                    });
                }
            }
        }
    }

    fn send(&self, msg: Msg) {
        if self.event_tx.send(AppEvent::Core(msg)).is_err() {
            engine_debug!("Event loop closed; effect outcome dropped");
        }
    }
}

struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Core(msg_for_event(event)));
    }
}

fn chat_request(request: recruiter_core::ChatRequest) -> ChatRequest {
    ChatRequest {
        history: request.history.iter().map(chat_message).collect(),
        document_content: request.document_content,
        transcript_content: request.transcript_content,
        job_content: request.job_content,
    }
}

fn chat_message(turn: &ChatTurn) -> ChatMessage {
    let role = match turn.role {
        ChatRole::User => recruiter_engine::ChatRole::User,
        ChatRole::Model => recruiter_engine::ChatRole::Model,
    };
    ChatMessage::new(role, turn.text.as_str())
}

fn endpoint_for(kind: DocumentKind) -> DocumentEndpoint {
    match kind {
        DocumentKind::TalentSummary => DocumentEndpoint::TalentSummary,
        DocumentKind::SubmissionTemplate => DocumentEndpoint::SubmissionTemplate,
    }
}

fn kind_for(endpoint: DocumentEndpoint) -> DocumentKind {
    match endpoint {
        DocumentEndpoint::TalentSummary => DocumentKind::TalentSummary,
        DocumentEndpoint::SubmissionTemplate => DocumentKind::SubmissionTemplate,
    }
}

fn failure(result: Result<String, BackendError>) -> Result<String, RequestFailure> {
    result.map_err(|err| RequestFailure::new(err.user_message()))
}

fn msg_for_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalyzeCompleted(result) => Msg::AnalyzeFinished(failure(result)),
        EngineEvent::ChatCompleted(result) => Msg::ChatReplied(failure(result)),
        EngineEvent::DocumentCompleted { endpoint, result } => Msg::DocumentGenerated {
            kind: kind_for(endpoint),
            result: failure(result),
        },
    }
}
