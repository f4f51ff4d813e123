//! Lenient parser for a small HTML subset.
//!
//! Handles elements, void and self-closing tags, comments, doctype,
//! raw-text `script`/`style` bodies and the common character entities.
//! Attributes are skipped. Structure errors (stray closers, unclosed
//! elements) are tolerated; only tags and comments that never end fail.

use super::{Document, NodeId};
use crate::error::{Error, Result};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Parse markup into a [`Document`].
pub fn parse_markup(source: &str) -> Result<Document> {
    let mut doc = Document::new();
    let mut stack = vec![doc.root()];
    let bytes = source.as_bytes();
    let mut i = 0usize;
    let mut text_start = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'<' || !starts_markup(bytes.get(i + 1).copied()) {
            i += 1;
            continue;
        }

        let parent = current(&stack, &doc);
        flush_text(&mut doc, parent, &source[text_start..i]);

        if bytes[i..].starts_with(b"<!--") {
            let end = find(bytes, i + 4, b"-->").ok_or_else(|| parse_error(i, "unterminated comment"))?;
            i = end + 3;
        } else if matches!(bytes[i + 1], b'!' | b'?') {
            let end = find(bytes, i, b">").ok_or_else(|| parse_error(i, "unterminated declaration"))?;
            i = end + 1;
        } else if bytes[i + 1] == b'/' {
            let end = find(bytes, i, b">").ok_or_else(|| parse_error(i, "unterminated end tag"))?;
            let name = source[i + 2..end].trim().to_ascii_lowercase();
            close_element(&doc, &mut stack, &name);
            i = end + 1;
        } else {
            let (name, self_closing, next) = parse_start_tag(source, i)?;
            let node = doc.append_element(parent, &name);
            i = next;

            if RAW_TEXT_TAGS.contains(&name.as_str()) && !self_closing {
                let close = find_end_tag(bytes, i, &name)
                    .ok_or_else(|| parse_error(i, &format!("unterminated <{name}>")))?;
                if close > i {
                    doc.append_text(node, &source[i..close]);
                }
                let end = find(bytes, close, b">")
                    .ok_or_else(|| parse_error(close, "unterminated end tag"))?;
                i = end + 1;
            } else if !self_closing && !VOID_TAGS.contains(&name.as_str()) {
                stack.push(node);
            }
        }
        text_start = i;
    }

    let parent = current(&stack, &doc);
    flush_text(&mut doc, parent, &source[text_start..]);
    Ok(doc)
}

fn starts_markup(next: Option<u8>) -> bool {
    matches!(next, Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
}

fn current(stack: &[NodeId], doc: &Document) -> NodeId {
    stack.last().copied().unwrap_or_else(|| doc.root())
}

fn parse_error(offset: usize, reason: &str) -> Error {
    Error::Parse {
        offset,
        reason: reason.to_string(),
    }
}

fn flush_text(doc: &mut Document, parent: NodeId, raw: &str) {
    if raw.is_empty() {
        return;
    }
    let text = decode_entities(raw);
    if !text.is_empty() {
        doc.append_text(parent, &text);
    }
}

/// Pop open elements up to and including the nearest one named `name`.
/// Closers with no open match are dropped.
fn close_element(doc: &Document, stack: &mut Vec<NodeId>, name: &str) {
    let found = stack
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .find(|(_, id)| doc.tag(**id) == Some(name))
        .map(|(pos, _)| pos);
    if let Some(pos) = found {
        stack.truncate(pos);
    }
}

/// Returns `(name, self_closing, index after '>')`.
fn parse_start_tag(source: &str, start: usize) -> Result<(String, bool, usize)> {
    let bytes = source.as_bytes();
    let name_start = start + 1;
    let mut i = name_start;
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'>' | b'/') {
        i += 1;
    }
    let name = source[name_start..i].to_ascii_lowercase();

    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => {
                let self_closing = source[start..i].trim_end().ends_with('/');
                return Ok((name, self_closing, i + 1));
            }
            None => {}
        }
        i += 1;
    }
    Err(parse_error(start, &format!("unterminated <{name}> tag")))
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|pos| from + pos)
}

/// Position of `</name` (ASCII case-insensitive) at or after `from`.
fn find_end_tag(bytes: &[u8], from: usize, name: &str) -> Option<usize> {
    let needle_len = name.len() + 2;
    let mut i = from;
    while i + needle_len <= bytes.len() {
        if bytes[i] == b'<'
            && bytes[i + 1] == b'/'
            && bytes[i + 2..i + needle_len].eq_ignore_ascii_case(name.as_bytes())
        {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Decode character entities. Unknown entities are kept verbatim.
pub(crate) fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail[1..]
            .find(';')
            .filter(|semi| *semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..=semi]).map(|ch| (ch, semi + 2)));
        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
