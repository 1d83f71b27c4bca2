use crate::chat::{ChatEntry, ChatHistory, ChatTurn, ChatWindow};
use crate::document::{CopyLabel, DocumentKind, GeneratedDocument};
use crate::messages;
use crate::sources::{ContentSources, SourceKind};
use crate::view_model::{
    AnalyzePanelView, AppViewModel, ChatPanelView, DocumentPanelView, ManualCopyView,
    SourcesPanelView,
};

/// In-flight flag and error banner of one action. `error_seq` changes on
/// every reported error, so a repeated identical message is still a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ActionStatus {
    pub(crate) in_flight: bool,
    pub(crate) error: Option<String>,
    pub(crate) error_seq: u64,
}

impl ActionStatus {
    fn begin(&mut self) {
        self.in_flight = true;
        self.error = None;
    }

    pub(crate) fn report(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.error_seq += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct DocumentPanel {
    pub(crate) status: ActionStatus,
    pub(crate) document: GeneratedDocument,
    pub(crate) copy_label: CopyLabel,
    pub(crate) copy_token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ManualCopy {
    pub(crate) kind: DocumentKind,
    pub(crate) text: String,
}

/// One client session. Created empty at start-up, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    selector_input: String,
    chat_input: String,
    sources: ContentSources,
    extracted_display: String,
    analyzed_content: String,
    analyze: ActionStatus,
    chat: ActionStatus,
    history: ChatHistory,
    window: ChatWindow,
    summary: DocumentPanel,
    template: DocumentPanel,
    manual_copy: Option<ManualCopy>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sources(&self) -> &ContentSources {
        &self.sources
    }

    pub fn chat_history(&self) -> &ChatHistory {
        &self.history
    }

    /// Content returned by the last analysis; edits to the extracted area
    /// do not touch it. Sent to chat as the document content.
    pub fn analyzed_content(&self) -> &str {
        &self.analyzed_content
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn chat_enabled(&self) -> bool {
        self.sources.any_present()
    }

    /// Raw markdown of the latest generated document, empty when none.
    pub fn document_markdown(&self, kind: DocumentKind) -> &str {
        self.document(kind).document.raw()
    }

    /// True while any backend request is outstanding.
    pub fn has_pending_requests(&self) -> bool {
        self.analyze.in_flight
            || self.chat.in_flight
            || self.summary.status.in_flight
            || self.template.status.in_flight
    }

    pub fn manual_copy_open(&self) -> bool {
        self.manual_copy.is_some()
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Pure projection of the session into what every panel should display.
    pub fn view(&self) -> AppViewModel {
        let chat_enabled = self.chat_enabled();
        AppViewModel {
            analyze: AnalyzePanelView {
                url: self.url_input.clone(),
                selector: self.selector_input.clone(),
                analyze_enabled: !self.analyze.in_flight,
                loading: self.analyze.in_flight,
                error: self.analyze.error.clone(),
                error_seq: self.analyze.error_seq,
                extracted_content: self.extracted_display.clone(),
            },
            sources: SourcesPanelView {
                web_content: self.sources.web_content().to_string(),
                transcript: self.sources.transcript().to_string(),
                job_description: self.sources.job_description().to_string(),
            },
            chat: ChatPanelView {
                input: self.chat_input.clone(),
                input_enabled: chat_enabled,
                send_enabled: chat_enabled && !self.chat.in_flight,
                waiting: self.chat.in_flight,
                placeholder: self
                    .window
                    .shows_placeholder()
                    .then_some(messages::CHAT_PLACEHOLDER),
                entries: self.window.entries().to_vec(),
                epoch: self.window.epoch(),
                error: self.chat.error.clone(),
                error_seq: self.chat.error_seq,
            },
            summary: self.document_view(DocumentKind::TalentSummary),
            template: self.document_view(DocumentKind::SubmissionTemplate),
            manual_copy: self.manual_copy.as_ref().map(|copy| ManualCopyView {
                kind: copy.kind,
                prompt: messages::MANUAL_COPY_PROMPT,
                text: copy.text.clone(),
            }),
            dirty: self.dirty,
        }
    }

    fn document_view(&self, kind: DocumentKind) -> DocumentPanelView {
        let panel = self.document(kind);
        DocumentPanelView {
            kind,
            generate_enabled: !panel.status.in_flight,
            loading: panel.status.in_flight,
            error: panel.status.error.clone(),
            error_seq: panel.status.error_seq,
            output: panel.document.output().clone(),
            copy_visible: !panel.document.raw().is_empty(),
            copy_label: panel.copy_label,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn selector_input(&self) -> &str {
        &self.selector_input
    }

    pub(crate) fn chat_input(&self) -> &str {
        &self.chat_input
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        if self.url_input != text {
            self.url_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_selector_input(&mut self, text: String) {
        if self.selector_input != text {
            self.selector_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_chat_input(&mut self, text: String) {
        if self.chat_input != text {
            self.chat_input = text;
            self.mark_dirty();
        }
    }

    /// Editing the extracted content area replaces the web-content buffer used
    /// by the gate and by generation. The analyzed content stays as it was.
    pub(crate) fn set_source(&mut self, kind: SourceKind, text: String) {
        if kind == SourceKind::WebContent && self.extracted_display != text {
            self.extracted_display = text.clone();
            self.mark_dirty();
        }
        if self.sources.set(kind, text) {
            self.mark_dirty();
        }
    }

    /// Availability gate: when no source is present the visible transcript
    /// falls back to the placeholder. The history is left alone.
    pub(crate) fn refresh_chat_availability(&mut self) {
        if !self.chat_enabled() && self.window.reset() {
            self.mark_dirty();
        }
    }

    // --- analyze ---

    pub(crate) fn analyze_in_flight(&self) -> bool {
        self.analyze.in_flight
    }

    pub(crate) fn set_analyze_error(&mut self, message: impl Into<String>) {
        self.analyze.report(message);
        self.mark_dirty();
    }

    pub(crate) fn begin_analysis(&mut self) {
        self.analyze.begin();
        self.extracted_display.clear();
        self.analyzed_content.clear();
        self.sources.set(SourceKind::WebContent, String::new());
        self.mark_dirty();
    }

    pub(crate) fn complete_analysis(&mut self, content: String) {
        self.analyze.in_flight = false;
        self.extracted_display = if content.is_empty() {
            messages::NO_CONTENT_EXTRACTED.to_string()
        } else {
            content.clone()
        };
        let has_content = !content.is_empty();
        self.analyzed_content = content.clone();
        self.sources.set(SourceKind::WebContent, content);
        if has_content {
            self.window
                .push(ChatEntry::ai_markdown(messages::ANALYSIS_COMPLETE));
        }
        self.mark_dirty();
    }

    pub(crate) fn fail_analysis(&mut self, message: &str) {
        self.analyze.in_flight = false;
        self.analyze.report(messages::request_error(message));
        self.extracted_display = messages::EXTRACTION_FAILED.to_string();
        self.mark_dirty();
    }

    // --- chat ---

    pub(crate) fn chat_in_flight(&self) -> bool {
        self.chat.in_flight
    }

    pub(crate) fn set_chat_error(&mut self, message: impl Into<String>) {
        self.chat.report(message);
        self.mark_dirty();
    }

    /// Optimistically shows and records the user's turn.
    pub(crate) fn begin_chat(&mut self, message: String) {
        self.window.push(ChatEntry::user(message.clone()));
        self.chat_input.clear();
        self.chat.begin();
        self.history.push(ChatTurn::user(message));
        self.mark_dirty();
    }

    pub(crate) fn complete_chat(&mut self, reply: String) {
        self.chat.in_flight = false;
        self.window.push(ChatEntry::ai_markdown(&reply));
        self.history.push(ChatTurn::model(reply));
        self.mark_dirty();
    }

    /// Retracts the provisional user turn from the history only; the visible
    /// entry stays next to the error.
    pub(crate) fn fail_chat(&mut self, message: &str) {
        self.chat.in_flight = false;
        let text = messages::chat_error(message);
        self.chat.report(text.clone());
        self.window.push(ChatEntry::system_error(text));
        self.history.retract_last();
        self.mark_dirty();
    }

    // --- documents ---

    pub(crate) fn document(&self, kind: DocumentKind) -> &DocumentPanel {
        match kind {
            DocumentKind::TalentSummary => &self.summary,
            DocumentKind::SubmissionTemplate => &self.template,
        }
    }

    pub(crate) fn document_mut(&mut self, kind: DocumentKind) -> &mut DocumentPanel {
        self.mark_dirty();
        match kind {
            DocumentKind::TalentSummary => &mut self.summary,
            DocumentKind::SubmissionTemplate => &mut self.template,
        }
    }

    pub(crate) fn begin_generation(&mut self, kind: DocumentKind) {
        let panel = self.document_mut(kind);
        panel.status.begin();
        panel.document.clear();
        panel.copy_label = CopyLabel::Copy;
        // Invalidates any pending "Copied!" reset.
        panel.copy_token += 1;
    }

    pub(crate) fn complete_generation(&mut self, kind: DocumentKind, markdown: String) {
        let panel = self.document_mut(kind);
        panel.status.in_flight = false;
        panel.document.replace(markdown);
    }

    pub(crate) fn fail_generation(&mut self, kind: DocumentKind, message: &str) {
        let panel = self.document_mut(kind);
        panel.status.in_flight = false;
        panel.status.report(messages::request_error(message));
        panel.document.fail(kind);
    }

    /// Shows the "Copied!" label and returns the token the reset timer must carry.
    pub(crate) fn mark_copied(&mut self, kind: DocumentKind) -> u64 {
        let panel = self.document_mut(kind);
        panel.copy_label = CopyLabel::Copied;
        panel.copy_token += 1;
        panel.copy_token
    }

    pub(crate) fn restore_copy_label(&mut self, kind: DocumentKind, token: u64) -> bool {
        let panel = self.document(kind);
        if panel.copy_token != token || panel.copy_label == CopyLabel::Copy {
            return false;
        }
        self.document_mut(kind).copy_label = CopyLabel::Copy;
        true
    }

    pub(crate) fn open_manual_copy(&mut self, kind: DocumentKind, text: String) {
        self.manual_copy = Some(ManualCopy { kind, text });
        self.mark_dirty();
    }

    pub(crate) fn close_manual_copy(&mut self) {
        if self.manual_copy.take().is_some() {
            self.mark_dirty();
        }
    }
}
