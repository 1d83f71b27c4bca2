/// One of the three independent text buffers the assistant can reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Text extracted from a web page by the analyze action (or edited by hand).
    WebContent,
    /// Call transcript pasted by the user.
    Transcript,
    /// Job description pasted by the user.
    JobDescription,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [
        SourceKind::WebContent,
        SourceKind::Transcript,
        SourceKind::JobDescription,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::WebContent => "Web Content",
            SourceKind::Transcript => "Call Transcript",
            SourceKind::JobDescription => "Job Description",
        }
    }
}

/// The content buffers, stored verbatim. Presence is always judged on trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSources {
    web_content: String,
    transcript: String,
    job_description: String,
}

impl ContentSources {
    pub fn get(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::WebContent => &self.web_content,
            SourceKind::Transcript => &self.transcript,
            SourceKind::JobDescription => &self.job_description,
        }
    }

    pub(crate) fn set(&mut self, kind: SourceKind, text: String) -> bool {
        let slot = match kind {
            SourceKind::WebContent => &mut self.web_content,
            SourceKind::Transcript => &mut self.transcript,
            SourceKind::JobDescription => &mut self.job_description,
        };
        if *slot == text {
            return false;
        }
        *slot = text;
        true
    }

    pub fn is_present(&self, kind: SourceKind) -> bool {
        !self.get(kind).trim().is_empty()
    }

    /// True when at least one buffer holds non-whitespace text.
    pub fn any_present(&self) -> bool {
        SourceKind::ALL.iter().any(|kind| self.is_present(*kind))
    }

    pub fn web_content(&self) -> &str {
        &self.web_content
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }
}
