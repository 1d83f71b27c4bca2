use crate::markdown::render_markdown;

/// Role of a turn in the conversation sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    /// Wire name used by the chat endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Logical conversation sent with every chat request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub(crate) fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Removes the most recently appended turn.
    pub(crate) fn retract_last(&mut self) -> Option<ChatTurn> {
        self.turns.pop()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Ai,
    System,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Ai => "Gemini",
            Speaker::System => "System",
        }
    }
}

/// Body of a chat window entry.
///
/// `Text` is literal and must never be interpreted as markup; `Html` has already
/// been produced by [`render_markdown`] and is safe to insert as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    Text(String),
    Html(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub body: EntryBody,
    pub is_error: bool,
}

impl ChatEntry {
    pub(crate) fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::You,
            body: EntryBody::Text(text.into()),
            is_error: false,
        }
    }

    pub(crate) fn ai_markdown(markdown: &str) -> Self {
        Self {
            speaker: Speaker::Ai,
            body: EntryBody::Html(render_markdown(markdown)),
            is_error: false,
        }
    }

    pub(crate) fn system_error(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::System,
            body: EntryBody::Text(text.into()),
            is_error: true,
        }
    }
}

/// Visible transcript. Diverges from [`ChatHistory`] on purpose: failed turns
/// stay visible, and resets only clear what is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatWindow {
    entries: Vec<ChatEntry>,
    epoch: u64,
}

impl ChatWindow {
    /// The placeholder stands in for the transcript until the first entry.
    pub fn shows_placeholder(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Incremented on every reset so renderers can tell a cleared window from a grown one.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub(crate) fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// Replaces the window content with the placeholder. Returns false if it
    /// already showed nothing else.
    pub(crate) fn reset(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        self.epoch += 1;
        true
    }
}
