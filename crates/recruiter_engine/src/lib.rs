//! Recruiter engine: backend HTTP client and effect execution.
mod client;
mod engine;
mod error;
mod html_text;
mod preview;
mod settings;
mod types;

pub use client::{BackendClient, ReqwestBackend};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use error::BackendError;
pub use html_text::HtmlTextRenderer;
pub use preview::{prepare_preview_content, MAX_PREVIEW_CONTENT};
pub use settings::{BackendSettings, DEFAULT_BACKEND_URL};
pub use types::{
    AnalyzeRequest, ChatMessage, ChatPart, ChatRequest, ChatRole, DocumentEndpoint,
    DocumentRequest, EngineEvent,
};
