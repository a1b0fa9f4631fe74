//! Line-by-line Markdown classification
//!
//! Only headings (`#`, `##`, `###`), `-`/`*` bullets and plain paragraphs are
//! recognized. Everything else, including inline emphasis and tables, passes
//! through as literal paragraph text.

use crate::docx::model::{Block, Document};

const HEADING_PREFIXES: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];
const BULLET_PREFIXES: [&str; 2] = ["- ", "* "];

/// Characters that end a line, including the Unicode separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Convert report Markdown into a styled document.
pub fn convert(markdown: &str) -> Document {
    let mut doc = Document::new();

    for raw in split_lines(markdown) {
        doc.push(classify_line(raw));
    }

    doc
}

/// Split on every Unicode line boundary. `\r\n` counts as one break and a
/// trailing break does not add an empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn classify_line(raw: &str) -> Block {
    let line = raw.trim_end();

    if line.trim().is_empty() {
        return Block::Spacer;
    }

    for (prefix, level) in HEADING_PREFIXES {
        if let Some(text) = line.strip_prefix(prefix) {
            return Block::Heading {
                level,
                text: text.to_string(),
            };
        }
    }

    let unindented = line.trim_start();
    for prefix in BULLET_PREFIXES {
        if let Some(text) = unindented.strip_prefix(prefix) {
            return Block::Bullet(text.to_string());
        }
    }

    Block::Paragraph(line.to_string())
}
