use recruiter_core::{
    AppViewModel, ChatEntry, CopyLabel, DocumentKind, DocumentOutput, DocumentPanelView,
    EntryBody,
};
use recruiter_engine::{prepare_preview_content, HtmlTextRenderer, MAX_PREVIEW_CONTENT};

use super::constants::RULE;

/// Prints what changed between two views. The terminal is append-only, so
/// each render emits lines only for the panels that differ from the last
/// rendered view; chat entries are tracked by window epoch and index.
pub struct TerminalRenderer {
    html: HtmlTextRenderer,
    previous: AppViewModel,
    printed_epoch: u64,
    printed_entries: usize,
}

impl TerminalRenderer {
    pub fn new(initial: &AppViewModel) -> Self {
        Self {
            html: HtmlTextRenderer,
            previous: initial.clone(),
            printed_epoch: initial.chat.epoch,
            printed_entries: initial.chat.entries.len(),
        }
    }

    pub fn intro(&self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(placeholder) = view.chat.placeholder {
            lines.push(placeholder.to_string());
        }
        lines
    }

    pub fn render(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_analyze(view, &mut lines);
        self.render_sources(view, &mut lines);
        self.render_chat(view, &mut lines);
        for kind in DocumentKind::ALL {
            self.render_document(view.document(kind), self.previous.document(kind), &mut lines);
        }
        if view.manual_copy != self.previous.manual_copy {
            if let Some(copy) = &view.manual_copy {
                lines.push(format!("[{}] {}", copy.kind.title(), copy.prompt));
                lines.push(RULE.to_string());
                lines.push(copy.text.clone());
                lines.push(RULE.to_string());
            }
        }
        self.previous = view.clone();
        lines
    }

    fn render_analyze(&self, view: &AppViewModel, lines: &mut Vec<String>) {
        let (now, before) = (&view.analyze, &self.previous.analyze);
        if now.loading && !before.loading {
            lines.push(format!("Analyzing {} ...", now.url.trim()));
        }
        if now.error_seq != before.error_seq {
            if let Some(error) = &now.error {
                lines.push(format!("[Analyze] {error}"));
            }
        }
        if now.extracted_content != before.extracted_content && !now.extracted_content.is_empty()
        {
            lines.push("Extracted content:".to_string());
            lines.push(prepare_preview_content(&now.extracted_content, MAX_PREVIEW_CONTENT));
        }
    }

    fn render_sources(&self, view: &AppViewModel, lines: &mut Vec<String>) {
        let now = &view.sources;
        let before = &self.previous.sources;
        if now.transcript != before.transcript {
            lines.push(source_status("Call Transcript", &now.transcript));
        }
        if now.job_description != before.job_description {
            lines.push(source_status("Job Description", &now.job_description));
        }
    }

    fn render_chat(&mut self, view: &AppViewModel, lines: &mut Vec<String>) {
        let (now, before) = (&view.chat, &self.previous.chat);
        if now.input_enabled != before.input_enabled {
            lines.push(if now.input_enabled {
                "Chat enabled.".to_string()
            } else {
                "Chat disabled: no content source.".to_string()
            });
        }
        if now.epoch != self.printed_epoch {
            self.printed_epoch = now.epoch;
            self.printed_entries = 0;
            if let Some(placeholder) = now.placeholder {
                lines.push(placeholder.to_string());
            }
        }

        let fresh = now.entries.get(self.printed_entries..).unwrap_or_default();
        for entry in fresh {
            lines.push(self.format_entry(entry));
        }
        let error_shown = fresh.iter().any(|entry| entry.is_error);
        self.printed_entries = now.entries.len();

        if now.waiting && !before.waiting {
            lines.push("Gemini is thinking ...".to_string());
        }
        if now.error_seq != before.error_seq && !error_shown {
            if let Some(error) = &now.error {
                lines.push(format!("[Chat] {error}"));
            }
        }
    }

    fn render_document(
        &self,
        now: &DocumentPanelView,
        before: &DocumentPanelView,
        lines: &mut Vec<String>,
    ) {
        let title = now.kind.title();
        if now.loading && !before.loading {
            lines.push(format!("Generating {title} ..."));
        }
        if now.error_seq != before.error_seq {
            if let Some(error) = &now.error {
                lines.push(format!("[{title}] {error}"));
            }
        }
        if now.output != before.output {
            lines.extend(self.document_lines(now));
        }
        if now.copy_label != before.copy_label && now.copy_label == CopyLabel::Copied {
            lines.push(format!("[{title}] {}", now.copy_label.text()));
        }
    }

    /// Full text of one document panel, used for fresh results and `/show`.
    pub fn document_lines(&self, panel: &DocumentPanelView) -> Vec<String> {
        let title = panel.kind.title();
        match &panel.output {
            DocumentOutput::Empty => Vec::new(),
            DocumentOutput::Failed(text) => vec![format!("[{title}] {text}")],
            DocumentOutput::Rendered(html) => {
                let mut lines = vec![format!("== {title} =="), self.html.render(html)];
                if panel.copy_visible {
                    lines.push(format!(
                        "({}: /copy {})",
                        panel.copy_label.text(),
                        copy_argument(panel.kind)
                    ));
                }
                lines
            }
        }
    }

    pub fn format_entry(&self, entry: &ChatEntry) -> String {
        let body = match &entry.body {
            EntryBody::Text(text) => text.clone(),
            EntryBody::Html(html) => self.html.render(html),
        };
        format!("{}: {}", entry.speaker.label(), body)
    }

    /// Snapshot of the whole session for `/status`.
    pub fn status_lines(&self, view: &AppViewModel) -> Vec<String> {
        let analyze = &view.analyze;
        let mut lines = vec![
            RULE.to_string(),
            format!("URL: {}", analyze.url),
            format!("Selector: {}", analyze.selector),
            format!(
                "Analyze: {}",
                if analyze.loading { "running" } else { "ready" }
            ),
            source_status("Web Content", &view.sources.web_content),
            source_status("Call Transcript", &view.sources.transcript),
            source_status("Job Description", &view.sources.job_description),
            format!(
                "Chat: {}",
                match (view.chat.input_enabled, view.chat.waiting) {
                    (false, _) => "disabled",
                    (true, true) => "waiting for reply",
                    (true, false) => "ready",
                }
            ),
        ];
        for kind in DocumentKind::ALL {
            let panel = view.document(kind);
            let state = if panel.loading {
                "generating"
            } else if panel.copy_visible {
                "ready"
            } else {
                "none"
            };
            lines.push(format!("{}: {}", kind.title(), state));
        }
        lines.push(RULE.to_string());
        lines
    }
}

fn source_status(label: &str, text: &str) -> String {
    let chars = text.trim().chars().count();
    if chars == 0 {
        format!("{label}: empty")
    } else {
        format!("{label}: {chars} characters")
    }
}

fn copy_argument(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::TalentSummary => "summary",
        DocumentKind::SubmissionTemplate => "template",
    }
}
