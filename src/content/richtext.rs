//! Rich text to HTML rendering
//!
//! The content API delivers body text as a flat list of typed fragments
//! with inline spans addressed by character offsets. Rendering walks the
//! fragments once, grouping consecutive list items into a single list.

use crate::cms::{RichTextBlock, Span};

/// Render an ordered sequence of rich-text fragments as HTML
pub fn render(blocks: &[RichTextBlock]) -> String {
    let mut out = String::new();
    let mut open_list: Option<&str> = None;

    for block in blocks {
        let list_tag = match block.kind.as_str() {
            "list-item" => Some("ul"),
            "o-list-item" => Some("ol"),
            _ => None,
        };

        if open_list != list_tag {
            if let Some(tag) = open_list {
                out.push_str(&format!("</{}>", tag));
            }
            if let Some(tag) = list_tag {
                out.push_str(&format!("<{}>", tag));
            }
            open_list = list_tag;
        }

        let inner = render_spans(&block.text, &block.spans);
        match block.kind.as_str() {
            "list-item" | "o-list-item" => {
                out.push_str(&format!("<li>{}</li>", inner));
            }
            "preformatted" => {
                out.push_str(&format!("<pre>{}</pre>", inner));
            }
            "heading1" | "heading2" | "heading3" | "heading4" | "heading5" | "heading6" => {
                let level = &block.kind[7..];
                out.push_str(&format!("<h{level}>{}</h{level}>", inner));
            }
            // Unknown fragment types degrade to paragraphs
            _ => {
                out.push_str(&format!("<p>{}</p>", inner));
            }
        }
    }

    if let Some(tag) = open_list {
        out.push_str(&format!("</{}>", tag));
    }

    out
}

/// Apply inline spans to fragment text, escaping the text itself
///
/// Offsets index characters, not bytes. Spans sharing a start offset
/// open outer-first regardless of input order, so overlap-free input
/// always nests correctly.
fn render_spans(text: &str, spans: &[Span]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut opens: Vec<Vec<String>> = vec![Vec::new(); chars.len() + 1];
    let mut closes: Vec<Vec<String>> = vec![Vec::new(); chars.len() + 1];

    let mut ordered: Vec<&Span> = spans.iter().collect();
    ordered.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    for span in ordered {
        let start = span.start.min(chars.len());
        let end = span.end.min(chars.len());
        if start >= end {
            continue;
        }

        let (open, close) = match span.kind.as_str() {
            "strong" => ("<strong>".to_string(), "</strong>"),
            "em" => ("<em>".to_string(), "</em>"),
            "hyperlink" => {
                let url = span
                    .data
                    .as_ref()
                    .and_then(|data| data.url.as_deref())
                    .unwrap_or("#");
                (format!(r#"<a href="{}">"#, escape_html(url)), "</a>")
            }
            _ => continue,
        };

        opens[start].push(open);
        // Spans closing at the same offset unwind in reverse opening order
        closes[end].insert(0, close.to_string());
    }

    let mut out = String::with_capacity(text.len());
    for i in 0..=chars.len() {
        for tag in &closes[i] {
            out.push_str(tag);
        }
        for tag in &opens[i] {
            out.push_str(tag);
        }
        if i < chars.len() {
            push_escaped(&mut out, chars[i]);
        }
    }

    out
}

/// Escape a string for use in HTML text or attribute position
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}
