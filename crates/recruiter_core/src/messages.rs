//! User-facing texts shown by the controller.

pub const ENTER_URL: &str = "Please enter a URL.";
pub const NO_CONTENT_EXTRACTED: &str = "No content extracted for the given selector.";
pub const EXTRACTION_FAILED: &str = "Failed to extract content.";
pub const ANALYSIS_COMPLETE: &str =
    "Web content analysis complete. You can now chat about the extracted content and any other inputs.";
pub const CHAT_PLACEHOLDER: &str =
    "Start by analyzing content, or pasting transcript/job description, then type your questions below!";
pub const CHAT_NEEDS_SOURCE: &str = "Please provide at least one content source (Web Content, Transcript, or Job Description) to start the chat.";
pub const MANUAL_COPY_PROMPT: &str = "Copy to clipboard: Ctrl+C, Enter";

pub fn request_error(message: &str) -> String {
    format!("Error: {message}")
}

pub fn chat_error(message: &str) -> String {
    format!("Chat Error: {message}")
}
