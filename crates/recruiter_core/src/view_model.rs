use crate::{ChatEntry, CopyLabel, DocumentKind, DocumentOutput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub analyze: AnalyzePanelView,
    pub sources: SourcesPanelView,
    pub chat: ChatPanelView,
    pub summary: DocumentPanelView,
    pub template: DocumentPanelView,
    pub manual_copy: Option<ManualCopyView>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn document(&self, kind: DocumentKind) -> &DocumentPanelView {
        match kind {
            DocumentKind::TalentSummary => &self.summary,
            DocumentKind::SubmissionTemplate => &self.template,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzePanelView {
    pub url: String,
    pub selector: String,
    pub analyze_enabled: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped on every reported error, including a repeat of the same text.
    pub error_seq: u64,
    /// Text of the extracted content area, including the fixed status messages.
    pub extracted_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcesPanelView {
    /// Web-content buffer as the gate sees it; the fixed status texts of
    /// the extracted area are not part of it.
    pub web_content: String,
    pub transcript: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPanelView {
    pub input: String,
    pub input_enabled: bool,
    pub send_enabled: bool,
    pub waiting: bool,
    pub placeholder: Option<&'static str>,
    pub entries: Vec<ChatEntry>,
    pub epoch: u64,
    pub error: Option<String>,
    pub error_seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPanelView {
    pub kind: DocumentKind,
    pub generate_enabled: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub error_seq: u64,
    pub output: DocumentOutput,
    pub copy_visible: bool,
    pub copy_label: CopyLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualCopyView {
    pub kind: DocumentKind,
    pub prompt: &'static str,
    pub text: String,
}
