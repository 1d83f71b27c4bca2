use std::time::Duration;

use crate::{ChatTurn, DocumentKind};

/// How long a copy button shows its confirmation label.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Analyze(AnalyzeRequest),
    SendChat(ChatRequest),
    Generate {
        kind: DocumentKind,
        request: GenerateRequest,
    },
    CopyToClipboard {
        kind: DocumentKind,
        text: String,
    },
    /// Deliver `Msg::CopyFeedbackExpired { kind, token }` after `after`.
    ScheduleCopyReset {
        kind: DocumentKind,
        token: u64,
        after: Duration,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub url: String,
    pub selector: String,
}

/// Full conversation plus a snapshot of every content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub history: Vec<ChatTurn>,
    pub document_content: String,
    pub transcript_content: String,
    pub job_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub extracted_content: String,
    pub transcript: String,
    pub job_description: String,
    /// Only sent for the submission template.
    pub profile_url: Option<String>,
}
