use crate::markdown::render_markdown;

/// The two AI-generated documents. Each has its own panel, request and copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    TalentSummary,
    SubmissionTemplate,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::TalentSummary, DocumentKind::SubmissionTemplate];

    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::TalentSummary => "Talent Summary",
            DocumentKind::SubmissionTemplate => "Talent Submission Template",
        }
    }

    fn object(self) -> &'static str {
        match self {
            DocumentKind::TalentSummary => "a talent summary",
            DocumentKind::SubmissionTemplate => "a submission template",
        }
    }

    pub fn missing_both_message(self) -> String {
        format!(
            "Both Call Transcript and Job Description are required to generate {}.",
            self.object()
        )
    }

    pub fn missing_transcript_message(self) -> String {
        format!("Call Transcript is required to generate {}.", self.object())
    }

    pub fn missing_job_description_message(self) -> String {
        format!("Job Description is required to generate {}.", self.object())
    }

    /// Fixed text shown in the output area after a failed generation.
    pub fn failure_output(self) -> &'static str {
        match self {
            DocumentKind::TalentSummary => "Failed to generate talent summary.",
            DocumentKind::SubmissionTemplate => "Failed to generate template.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocumentOutput {
    #[default]
    Empty,
    /// Sanitized HTML rendered from the raw markdown.
    Rendered(String),
    Failed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Copy,
    Copied,
}

impl CopyLabel {
    pub fn text(self) -> &'static str {
        match self {
            CopyLabel::Copy => "Copy",
            CopyLabel::Copied => "Copied!",
        }
    }
}

/// Latest generated document: raw markdown plus its rendered form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct GeneratedDocument {
    raw: String,
    output: DocumentOutput,
}

impl GeneratedDocument {
    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn output(&self) -> &DocumentOutput {
        &self.output
    }

    pub(crate) fn clear(&mut self) {
        self.raw.clear();
        self.output = DocumentOutput::Empty;
    }

    pub(crate) fn replace(&mut self, markdown: String) {
        self.output = DocumentOutput::Rendered(render_markdown(&markdown));
        self.raw = markdown;
    }

    pub(crate) fn fail(&mut self, kind: DocumentKind) {
        self.raw.clear();
        self.output = DocumentOutput::Failed(kind.failure_output());
    }
}
