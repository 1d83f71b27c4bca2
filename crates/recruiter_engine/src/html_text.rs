use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Turns the sanitized HTML produced for AI replies and documents into plain
/// text suitable for a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTextRenderer;

impl HtmlTextRenderer {
    pub fn render(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        let mut ctx = TextContext::default();
        for child in fragment.root_element().children() {
            self.visit_node(child, &mut ctx);
        }
        ctx.into_output()
    }

    fn visit_node(&self, node: NodeRef<'_, Node>, ctx: &mut TextContext) {
        match node.value() {
            Node::Text(text) => ctx.append_text(text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.visit_element(element, ctx);
                }
            }
            _ => {
                for child in node.children() {
                    self.visit_node(child, ctx);
                }
            }
        }
    }

    fn visit_element(&self, element: ElementRef, ctx: &mut TextContext) {
        let tag = element.value().name().to_ascii_lowercase();
        match tag.as_str() {
            "br" => ctx.ensure_newline(),
            "hr" => {
                ctx.ensure_blank_line();
                ctx.append_raw("---");
                ctx.ensure_blank_line();
            }
            "p" | "blockquote" | "table" => {
                ctx.ensure_blank_line();
                self.visit_children(element, ctx);
                ctx.ensure_blank_line();
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                ctx.ensure_blank_line();
                let level = tag[1..].parse::<usize>().unwrap_or(1);
                ctx.append_raw(&"#".repeat(level));
                ctx.append_raw(" ");
                self.visit_children(element, ctx);
                ctx.ensure_blank_line();
            }
            "ul" | "ol" => {
                if ctx.lists.is_empty() {
                    ctx.ensure_blank_line();
                } else {
                    ctx.ensure_newline();
                }
                let start = element
                    .value()
                    .attr("start")
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(1);
                ctx.lists.push(if tag == "ol" {
                    ListKind::Ordered(start)
                } else {
                    ListKind::Unordered
                });
                self.visit_children(element, ctx);
                ctx.lists.pop();
                if ctx.lists.is_empty() {
                    ctx.ensure_blank_line();
                }
            }
            "li" => {
                ctx.ensure_newline();
                let depth = ctx.lists.len().max(1);
                let marker = match ctx.lists.last_mut() {
                    Some(ListKind::Ordered(next)) => {
                        let marker = format!("{next}. ");
                        *next += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                ctx.append_raw(&"  ".repeat(depth - 1));
                ctx.append_raw(&marker);
                self.visit_children(element, ctx);
                ctx.ensure_newline();
            }
            "input" => {
                if element.value().attr("type") == Some("checkbox") {
                    let checked = element.value().attr("checked").is_some();
                    ctx.append_raw(if checked { "[x] " } else { "[ ] " });
                }
            }
            "tr" => {
                ctx.ensure_newline();
                let mut first = true;
                for cell in element.children().filter_map(ElementRef::wrap) {
                    if !first {
                        ctx.append_raw(" | ");
                    }
                    first = false;
                    self.visit_children(cell, ctx);
                }
                ctx.ensure_newline();
            }
            "pre" => {
                ctx.ensure_blank_line();
                ctx.preformatted += 1;
                self.visit_children(element, ctx);
                ctx.preformatted -= 1;
                ctx.ensure_blank_line();
            }
            "code" if ctx.preformatted == 0 => {
                ctx.append_raw("`");
                self.visit_children(element, ctx);
                ctx.append_raw("`");
            }
            "a" => {
                let start = ctx.builder.len();
                self.visit_children(element, ctx);
                let label = ctx.builder[start..].trim().to_string();
                if let Some(href) = element.value().attr("href").map(str::trim) {
                    if !href.is_empty() && href != label {
                        ctx.append_raw(&format!(" ({href})"));
                    }
                }
            }
            "img" => {
                if let Some(alt) = element.value().attr("alt").filter(|alt| !alt.is_empty()) {
                    ctx.append_raw(&format!("[image: {alt}]"));
                }
            }
            "script" | "style" | "template" => {}
            _ => self.visit_children(element, ctx),
        }
    }

    fn visit_children(&self, element: ElementRef, ctx: &mut TextContext) {
        for child in element.children() {
            self.visit_node(child, ctx);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ListKind {
    Unordered,
    Ordered(u64),
}

#[derive(Default)]
struct TextContext {
    builder: String,
    last_char: Option<char>,
    lists: Vec<ListKind>,
    preformatted: usize,
}

impl TextContext {
    fn into_output(self) -> String {
        self.builder.trim().to_string()
    }

    fn append_text(&mut self, text: &str) {
        if self.preformatted > 0 {
            self.append_raw(text);
            return;
        }
        for ch in text.chars() {
            if ch.is_whitespace() {
                if self.builder.is_empty()
                    || self.last_char == Some(' ')
                    || self.last_char == Some('\n')
                {
                    continue;
                }
                self.push_char(' ');
            } else {
                self.push_char(ch);
            }
        }
    }

    fn append_raw(&mut self, text: &str) {
        for ch in text.chars() {
            self.push_char(ch);
        }
    }

    fn ensure_newline(&mut self) {
        if self.builder.is_empty() || self.last_char == Some('\n') {
            return;
        }
        self.trim_trailing_spaces();
        self.push_char('\n');
    }

    fn ensure_blank_line(&mut self) {
        if self.builder.is_empty() || self.builder.ends_with("\n\n") {
            return;
        }
        self.ensure_newline();
        self.push_char('\n');
    }

    fn trim_trailing_spaces(&mut self) {
        while self.builder.ends_with(' ') {
            self.builder.pop();
        }
        self.last_char = self.builder.chars().last();
    }

    fn push_char(&mut self, ch: char) {
        self.builder.push(ch);
        self.last_char = Some(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::HtmlTextRenderer;

    fn render(html: &str) -> String {
        HtmlTextRenderer.render(html)
    }

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        assert_eq!(render("<p>one</p>\n<p>two</p>\n"), "one\n\ntwo");
    }

    #[test]
    fn breaks_become_newlines() {
        assert_eq!(
            render("<p><strong>Talent Rate:</strong> 50<br />\n<strong>Job Rate:</strong> 80</p>\n"),
            "Talent Rate: 50\nJob Rate: 80"
        );
    }

    #[test]
    fn lists_are_bulleted_and_numbered() {
        let text = render("<ul>\n<li>Rust</li>\n<li>Go</li>\n</ul>\n<ol start=\"3\">\n<li>a</li>\n<li>b</li>\n</ol>\n");
        assert_eq!(text, "• Rust\n• Go\n\n3. a\n4. b");
    }

    #[test]
    fn nested_lists_are_indented() {
        let text = render("<ul><li>outer<ul><li>inner</li></ul></li></ul>");
        assert_eq!(text, "• outer\n  • inner");
    }

    #[test]
    fn headings_keep_their_level() {
        assert_eq!(render("<h2>Summary</h2><p>text</p>"), "## Summary\n\ntext");
    }

    #[test]
    fn escaped_markup_stays_text() {
        assert_eq!(
            render("<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"),
            "<script>alert(1)</script>"
        );
    }

    #[test]
    fn links_show_their_target() {
        assert_eq!(
            render(r#"<p><a href="https://example.com/in/jane">profile</a></p>"#),
            "profile (https://example.com/in/jane)"
        );
        assert_eq!(
            render(r#"<p><a href="https://example.com">https://example.com</a></p>"#),
            "https://example.com"
        );
    }

    #[test]
    fn table_rows_are_pipe_separated() {
        let text = render(
            "<table><thead><tr><th>a</th><th>b</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table>",
        );
        assert_eq!(text, "a | b\n1 | 2");
    }
}
