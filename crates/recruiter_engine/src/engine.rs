use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_error, engine_warn};

use crate::{
    AnalyzeRequest, BackendClient, ChatRequest, DocumentEndpoint, DocumentRequest, EngineEvent,
};

/// Receives completed requests. Called from the engine's runtime threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Analyze(AnalyzeRequest),
    Chat(ChatRequest),
    Generate {
        endpoint: DocumentEndpoint,
        request: DocumentRequest,
    },
}

/// Runs backend requests on a dedicated tokio runtime. Every command runs as
/// its own task, so independent actions may be in flight at the same time.
/// Dropping the handle stops the runtime and abandons pending requests.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn BackendClient>, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, sink.as_ref()).await;
                });
            }
        });

        Self { cmd_tx }
    }

    pub fn analyze(&self, request: AnalyzeRequest) {
        self.send(EngineCommand::Analyze(request));
    }

    pub fn chat(&self, request: ChatRequest) {
        self.send(EngineCommand::Chat(request));
    }

    pub fn generate(&self, endpoint: DocumentEndpoint, request: DocumentRequest) {
        self.send(EngineCommand::Generate { endpoint, request });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            engine_warn!("Engine runtime is gone; request dropped");
        }
    }
}

async fn handle_command(client: &dyn BackendClient, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Analyze(request) => {
            let result = client.analyze(&request).await;
            log_failure("analyze", &result);
            sink.emit(EngineEvent::AnalyzeCompleted(result));
        }
        EngineCommand::Chat(request) => {
            let result = client.chat(&request).await;
            log_failure("chat", &result);
            sink.emit(EngineEvent::ChatCompleted(result));
        }
        EngineCommand::Generate { endpoint, request } => {
            let result = client.generate(endpoint, &request).await;
            log_failure(endpoint.path(), &result);
            sink.emit(EngineEvent::DocumentCompleted { endpoint, result });
        }
    }
}

fn log_failure(operation: &str, result: &Result<String, crate::BackendError>) {
    if let Err(err) = result {
        engine_warn!("{} failed: {}", operation, err);
    }
}
