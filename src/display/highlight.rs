//! Lightweight syntax coloring for response bodies.
//!
//! Both highlighters only insert escapes around tokens; stripping the escapes
//! always yields the input unchanged.

use super::style::{
    Palette, SYNTAX_COMMENT, SYNTAX_KEY, SYNTAX_KEYWORD, SYNTAX_NUMBER, SYNTAX_STRING,
    SYNTAX_TAG,
};

pub fn json(source: &str, palette: Palette) -> String {
    if palette == Palette::Plain {
        return source.to_string();
    }

    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len() * 2);
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let (end, color) = match bytes[i] {
            b'"' => {
                let end = string_end(bytes, i);
                let is_key = source[end..].trim_start().starts_with(':');
                (end, if is_key { SYNTAX_KEY } else { SYNTAX_STRING })
            }
            b'-' | b'0'..=b'9' => (
                scan_while(bytes, i, |b| {
                    b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')
                }),
                SYNTAX_NUMBER,
            ),
            b't' | b'f' | b'n' => (scan_while(bytes, i, |b| b.is_ascii_alphabetic()), SYNTAX_KEYWORD),
            _ => {
                i += 1;
                continue;
            }
        };

        out.push_str(&source[plain_start..i]);
        out.push_str(&palette.paint(&source[i..end], color));
        i = end;
        plain_start = end;
    }

    out.push_str(&source[plain_start..]);
    out
}

/// Colors tags, quoted attribute values and comments in HTML or XML.
pub fn markup(source: &str, palette: Palette) -> String {
    if palette == Palette::Plain {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len() * 2);
    let mut rest = source;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        if rest.starts_with("<!--") {
            let end = rest.find("-->").map_or(rest.len(), |p| p + 3);
            out.push_str(&palette.paint(&rest[..end], SYNTAX_COMMENT));
            rest = &rest[end..];
        } else {
            let end = rest.find('>').map_or(rest.len(), |p| p + 1);
            out.push_str(&paint_tag(&rest[..end], palette));
            rest = &rest[end..];
        }
    }

    out.push_str(rest);
    out
}

fn paint_tag(tag: &str, palette: Palette) -> String {
    let mut out = String::new();
    let mut rest = tag;

    while let Some(q) = rest.find(['"', '\'']) {
        let quote = rest.as_bytes()[q] as char;
        let close = rest[q + 1..].find(quote).map_or(rest.len(), |p| q + p + 2);
        out.push_str(&palette.paint(&rest[..q], SYNTAX_TAG));
        out.push_str(&palette.paint(&rest[q..close], SYNTAX_STRING));
        rest = &rest[close..];
    }

    out.push_str(&palette.paint(rest, SYNTAX_TAG));
    out
}

/// Index just past the closing quote of the string starting at `start`.
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn scan_while(bytes: &[u8], start: usize, accept: impl Fn(u8) -> bool) -> usize {
    let mut i = start;
    while i < bytes.len() && accept(bytes[i]) {
        i += 1;
    }
    i
}
