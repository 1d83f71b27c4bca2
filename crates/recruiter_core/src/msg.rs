use crate::{DocumentKind, SourceKind};

/// A failed backend call, already reduced to the text the user should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    UrlChanged(String),
    /// User edited the optional selector input.
    SelectorChanged(String),
    /// User edited one of the content source text areas.
    SourceEdited { source: SourceKind, text: String },
    /// A content source was pasted into or lost focus.
    SourceCommitted(SourceKind),
    /// User edited the chat input.
    ChatInputChanged(String),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// User clicked Send (or pressed Enter in the chat input).
    SendClicked,
    /// User clicked Generate for one of the documents.
    GenerateClicked(DocumentKind),
    /// User clicked the copy button of one of the documents.
    CopyClicked(DocumentKind),
    /// Backend answered the analyze request.
    AnalyzeFinished(Result<String, RequestFailure>),
    /// Backend answered the chat request.
    ChatReplied(Result<String, RequestFailure>),
    /// Backend answered a document generation request.
    DocumentGenerated {
        kind: DocumentKind,
        result: Result<String, RequestFailure>,
    },
    /// Clipboard write finished.
    CopyFinished {
        kind: DocumentKind,
        result: Result<(), String>,
    },
    /// The "Copied!" confirmation timer fired.
    CopyFeedbackExpired { kind: DocumentKind, token: u64 },
    /// User acknowledged the manual copy prompt.
    ManualCopyDismissed,
}
