use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Renders AI-sourced markdown into HTML that is safe to insert into a page.
///
/// GitHub flavoured extensions are enabled and single newlines become `<br />`.
/// Raw HTML in the source is escaped as text, and link or image destinations
/// with a scheme other than http, https or mailto are dropped.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(sanitize_event);
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, parser);
    out
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::SoftBreak => Event::HardBreak,
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&dest) {
        dest
    } else {
        CowStr::Borrowed("")
    }
}

fn is_safe_destination(dest: &str) -> bool {
    let trimmed = dest.trim();
    let Some(idx) = trimmed.find(':') else {
        return true;
    };
    let scheme = &trimmed[..idx];
    // A colon after a path, query or fragment delimiter is not a scheme separator.
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    matches!(
        scheme.to_ascii_lowercase().as_str(),
        "http" | "https" | "mailto"
    )
}

#[cfg(test)]
mod tests {
    use super::{is_safe_destination, render_markdown};

    #[test]
    fn renders_basic_markdown() {
        assert_eq!(
            render_markdown("**Talent Rate:** 50"),
            "<p><strong>Talent Rate:</strong> 50</p>\n"
        );
    }

    #[test]
    fn single_newlines_become_breaks() {
        let html = render_markdown("line one\nline two");
        assert!(html.contains("line one<br />"), "unexpected html: {html}");
        assert!(html.contains("line two"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\nhello <b>bold</b>");
        assert!(!html.contains("<script>"), "unexpected html: {html}");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn scriptable_links_are_dropped() {
        let html = render_markdown("[click](javascript:alert(1)) and [site](https://example.com)");
        assert!(!html.contains("javascript:"), "unexpected html: {html}");
        assert!(html.contains(r#"href="https://example.com""#));
    }

    #[test]
    fn destination_rules() {
        assert!(is_safe_destination("/relative/path:with-colon"));
        assert!(is_safe_destination("mailto:someone@example.com"));
        assert!(is_safe_destination("HTTPS://EXAMPLE.COM"));
        assert!(!is_safe_destination(" data:text/html,hi"));
        assert!(!is_safe_destination("vbscript:x"));
    }

    #[test]
    fn tables_are_enabled() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"), "unexpected html: {html}");
    }
}
