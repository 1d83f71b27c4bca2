const TRUNCATED_MARKER: &str = "\n[truncated]";
pub const MAX_PREVIEW_CONTENT: usize = 4_096;

/// Shortens long extracted content for display; the buffer itself is untouched.
pub fn prepare_preview_content(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }
    let mut end = max_len;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    let truncated = &text[..end];
    format!("{truncated}{TRUNCATED_MARKER}")
}
