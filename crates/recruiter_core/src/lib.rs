//! Recruiter core: pure session state machine, markdown rendering and view-model helpers.
mod chat;
mod document;
mod effect;
mod markdown;
pub mod messages;
mod msg;
mod sources;
mod state;
mod update;
mod view_model;

pub use chat::{ChatEntry, ChatHistory, ChatRole, ChatTurn, ChatWindow, EntryBody, Speaker};
pub use document::{CopyLabel, DocumentKind, DocumentOutput};
pub use effect::{AnalyzeRequest, ChatRequest, Effect, GenerateRequest, COPY_FEEDBACK_DURATION};
pub use markdown::render_markdown;
pub use msg::{Msg, RequestFailure};
pub use sources::{ContentSources, SourceKind};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AnalyzePanelView, AppViewModel, ChatPanelView, DocumentPanelView, ManualCopyView,
    SourcesPanelView,
};
