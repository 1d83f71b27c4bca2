use serde::{Deserialize, Serialize};

use crate::BackendError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
    pub selector: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPart {
    pub text: String,
}

/// One turn in the `{role, parts: [{text}]}` shape the chat endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub parts: Vec<ChatPart>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![ChatPart { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub history: Vec<ChatMessage>,
    pub document_content: String,
    pub transcript_content: String,
    pub job_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRequest {
    pub extracted_content: String,
    pub transcript: String,
    pub job_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

/// The two document generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEndpoint {
    TalentSummary,
    SubmissionTemplate,
}

impl DocumentEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            DocumentEndpoint::TalentSummary => "generate_talent_summary",
            DocumentEndpoint::SubmissionTemplate => "generate_talent_submission_template",
        }
    }

    /// Name of the string field carrying the generated markdown.
    pub fn result_field(self) -> &'static str {
        match self {
            DocumentEndpoint::TalentSummary => "talent_summary",
            DocumentEndpoint::SubmissionTemplate => "talent_submission_template",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalyzeCompleted(Result<String, BackendError>),
    ChatCompleted(Result<String, BackendError>),
    DocumentCompleted {
        endpoint: DocumentEndpoint,
        result: Result<String, BackendError>,
    },
}
