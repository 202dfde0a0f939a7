//! Markdown-lite formatter for assistant-authored text.
//!
//! A restricted single-pass grammar: bold spans, links, bullet lists, and
//! paragraph/line breaks. Parsed into explicit block and inline nodes so
//! escaping and block boundaries are not order-sensitive side effects.
//!
//! Deliberately not a markdown engine: no escaping of literal asterisks or
//! brackets, no nested lists, no code spans, no tables. Input comes from one
//! controlled upstream source; user-authored text never goes through here.

/// Inline node. Bold and link contents are flat text — nested spans are
/// unsupported and render literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Link { label: String, url: String },
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    /// One item per bullet line, each item a run of inlines
    List(Vec<Vec<Inline>>),
}

const BULLET: &str = "• ";

/// Parse text into blocks: runs of consecutive `• ` lines form one list, a
/// blank line ends any block, remaining line runs form paragraphs with
/// single newlines as line breaks.
pub fn parse(text: &str) -> Vec<Block> {
    fn flush_para(para_lines: &mut Vec<Vec<Inline>>, blocks: &mut Vec<Block>) {
        if para_lines.is_empty() {
            return;
        }
        let mut inlines = Vec::new();
        for (i, line) in para_lines.drain(..).enumerate() {
            if i > 0 {
                inlines.push(Inline::LineBreak);
            }
            inlines.extend(line);
        }
        blocks.push(Block::Paragraph(inlines));
    }
    fn flush_list(list_items: &mut Vec<Vec<Inline>>, blocks: &mut Vec<Block>) {
        if !list_items.is_empty() {
            blocks.push(Block::List(std::mem::take(list_items)));
        }
    }

    let mut blocks = Vec::new();
    let mut para_lines: Vec<Vec<Inline>> = Vec::new();
    let mut list_items: Vec<Vec<Inline>> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            flush_para(&mut para_lines, &mut blocks);
            flush_list(&mut list_items, &mut blocks);
        } else if let Some(item) = line.strip_prefix(BULLET) {
            flush_para(&mut para_lines, &mut blocks);
            list_items.push(parse_inline(item));
        } else {
            flush_list(&mut list_items, &mut blocks);
            para_lines.push(parse_inline(line));
        }
    }
    flush_para(&mut para_lines, &mut blocks);
    flush_list(&mut list_items, &mut blocks);

    blocks
}

/// Scan one line for `**bold**` spans and `[label](url)` links, leftmost
/// match first. Unterminated or empty markers stay literal text.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    fn flush(out: &mut Vec<Inline>, literal: &mut String) {
        if !literal.is_empty() {
            out.push(Inline::Text(std::mem::take(literal)));
        }
    }

    loop {
        let bold = rest.find("**");
        let bracket = rest.find('[');

        let (pos, is_bold) = match (bold, bracket) {
            (Some(b), Some(k)) if b <= k => (b, true),
            (Some(_), Some(k)) => (k, false),
            (Some(b), None) => (b, true),
            (None, Some(k)) => (k, false),
            (None, None) => {
                literal.push_str(rest);
                break;
            }
        };

        if is_bold {
            let after = &rest[pos + 2..];
            match after.find("**") {
                Some(end) if end > 0 => {
                    literal.push_str(&rest[..pos]);
                    flush(&mut out, &mut literal);
                    out.push(Inline::Bold(after[..end].to_string()));
                    rest = &after[end + 2..];
                }
                _ => {
                    // unterminated (or empty) span renders literally
                    literal.push_str(&rest[..pos + 2]);
                    rest = &rest[pos + 2..];
                }
            }
        } else {
            let after = &rest[pos + 1..];
            match match_link(after) {
                Some((label, url, consumed)) => {
                    literal.push_str(&rest[..pos]);
                    flush(&mut out, &mut literal);
                    out.push(Inline::Link { label, url });
                    rest = &after[consumed..];
                }
                None => {
                    literal.push_str(&rest[..pos + 1]);
                    rest = &rest[pos + 1..];
                }
            }
        }
    }

    flush(&mut out, &mut literal);
    out
}

/// Match `label](url)` after an opening bracket. Both parts must be
/// non-empty. Returns the label, url, and bytes consumed.
fn match_link(after_bracket: &str) -> Option<(String, String, usize)> {
    let close = after_bracket.find("](")?;
    if close == 0 {
        return None;
    }
    let label = &after_bracket[..close];
    let url_start = close + 2;
    let url_end = after_bracket[url_start..].find(')')?;
    if url_end == 0 {
        return None;
    }
    let url = &after_bracket[url_start..url_start + url_end];
    Some((label.to_string(), url.to_string(), url_start + url_end + 1))
}

/// Render to the canonical markup string: metacharacters escaped, `<strong>`
/// for bold, target-blank noopener links, `<ul>`/`<li>` lists, `<p>` with
/// `<br>` paragraphs. A list block, or a paragraph opening with bold, is
/// emitted unwrapped.
pub fn format(text: &str) -> String {
    render_html(&parse(text))
}

pub fn render_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            Block::List(items) => {
                html.push_str("<ul>");
                for item in items {
                    html.push_str("<li>");
                    html.push_str(&render_inlines(item));
                    html.push_str("</li>");
                }
                html.push_str("</ul>");
            }
            Block::Paragraph(inlines) => {
                let body = render_inlines(inlines);
                if matches!(inlines.first(), Some(Inline::Bold(_))) {
                    html.push_str(&body);
                } else {
                    html.push_str("<p>");
                    html.push_str(&body);
                    html.push_str("</p>");
                }
            }
        }
    }
    html
}

fn render_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => out.push_str(&escape(t)),
            Inline::Bold(t) => {
                out.push_str("<strong>");
                out.push_str(&escape(t));
                out.push_str("</strong>");
            }
            Inline::Link { label, url } => {
                out.push_str("<a href=\"");
                out.push_str(&escape(url));
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                out.push_str(&escape(label));
                out.push_str("</a>");
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
    out
}

/// `&` first so entities introduced here are not double-escaped.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
