use std::path::PathBuf;

use recruiter_core::{DocumentKind, Msg, SourceKind};

/// Line that ends a multi-line entry.
pub const END_OF_ENTRY: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowTarget {
    Document(DocumentKind),
    Extracted,
    All,
}

/// What the event loop should do with one line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Feed these messages to `update`, in order.
    Dispatch(Vec<Msg>),
    /// A multi-line entry for this source has started or continues.
    Collecting(SourceKind),
    Load { source: SourceKind, path: PathBuf },
    Show(ShowTarget),
    Status,
    Help,
    Quit,
    Invalid(String),
    Ignore,
}

/// Turns terminal lines into actions. Holds the partial text of a
/// multi-line entry between lines.
#[derive(Debug, Default)]
pub struct InputParser {
    pending: Option<PendingEntry>,
}

#[derive(Debug)]
struct PendingEntry {
    source: SourceKind,
    lines: Vec<String>,
}

impl InputParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the multi-line entry in progress, if any.
    pub fn collecting(&self) -> Option<SourceKind> {
        self.pending.as_ref().map(|entry| entry.source)
    }

    pub fn parse_line(&mut self, line: &str) -> InputAction {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(mut entry) = self.pending.take() {
            if line.trim() == END_OF_ENTRY {
                return edit_source(entry.source, entry.lines.join("\n"));
            }
            entry.lines.push(line.to_string());
            let source = entry.source;
            self.pending = Some(entry);
            return InputAction::Collecting(source);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return InputAction::Ignore;
        }
        let Some(command_line) = trimmed.strip_prefix('/') else {
            return InputAction::Dispatch(vec![
                Msg::ChatInputChanged(trimmed.to_string()),
                Msg::SendClicked,
            ]);
        };

        let (command, rest) = split_word(command_line);
        match command {
            "url" => InputAction::Dispatch(vec![Msg::UrlChanged(rest.to_string())]),
            "selector" => InputAction::Dispatch(vec![Msg::SelectorChanged(rest.to_string())]),
            "analyze" => {
                let mut msgs = Vec::new();
                if !rest.is_empty() {
                    let (url, selector) = split_word(rest);
                    msgs.push(Msg::UrlChanged(url.to_string()));
                    msgs.push(Msg::SelectorChanged(selector.to_string()));
                }
                msgs.push(Msg::AnalyzeClicked);
                InputAction::Dispatch(msgs)
            }
            "extracted" => self.begin_entry(SourceKind::WebContent),
            "transcript" => self.begin_entry(SourceKind::Transcript),
            "job" => self.begin_entry(SourceKind::JobDescription),
            "load" => {
                let (target, path) = split_word(rest);
                match (source_named(target), path.is_empty()) {
                    (Some(source), false) => InputAction::Load {
                        source,
                        path: PathBuf::from(path),
                    },
                    _ => InputAction::Invalid("usage: /load transcript|job <path>".to_string()),
                }
            }
            "summary" => {
                InputAction::Dispatch(vec![Msg::GenerateClicked(DocumentKind::TalentSummary)])
            }
            "template" => InputAction::Dispatch(vec![Msg::GenerateClicked(
                DocumentKind::SubmissionTemplate,
            )]),
            "copy" => match document_named(rest) {
                Some(kind) => InputAction::Dispatch(vec![Msg::CopyClicked(kind)]),
                None => InputAction::Invalid("usage: /copy summary|template".to_string()),
            },
            "show" => match rest {
                "" => InputAction::Show(ShowTarget::All),
                "extracted" => InputAction::Show(ShowTarget::Extracted),
                other => match document_named(other) {
                    Some(kind) => InputAction::Show(ShowTarget::Document(kind)),
                    None => InputAction::Invalid(
                        "usage: /show [summary|template|extracted]".to_string(),
                    ),
                },
            },
            "status" => InputAction::Status,
            "help" => InputAction::Help,
            "quit" | "exit" => InputAction::Quit,
            other => InputAction::Invalid(format!("unknown command `/{other}`, try /help")),
        }
    }

    fn begin_entry(&mut self, source: SourceKind) -> InputAction {
        self.pending = Some(PendingEntry {
            source,
            lines: Vec::new(),
        });
        InputAction::Collecting(source)
    }
}

/// Messages that replace a source buffer and then run the availability gate.
pub fn edit_source(source: SourceKind, text: String) -> InputAction {
    InputAction::Dispatch(vec![
        Msg::SourceEdited { source, text },
        Msg::SourceCommitted(source),
    ])
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn source_named(name: &str) -> Option<SourceKind> {
    match name {
        "transcript" => Some(SourceKind::Transcript),
        "job" => Some(SourceKind::JobDescription),
        _ => None,
    }
}

fn document_named(name: &str) -> Option<DocumentKind> {
    match name {
        "summary" => Some(DocumentKind::TalentSummary),
        "template" => Some(DocumentKind::SubmissionTemplate),
        _ => None,
    }
}
