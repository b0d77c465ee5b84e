//! Property file loading.
//! Parses the line-oriented `key = value` format into an ordered message table.

use indexmap::IndexMap;
use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Ordered mapping of message key to template, in file order.
pub type MessageTable = IndexMap<String, String>;

/// Reads and parses a property file.
///
/// The file is decoded as UTF-8, or as ISO-8859-1 when it is not valid UTF-8.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::PropertiesError` on a malformed `\uXXXX` escape
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<MessageTable> {
    let bytes = fs::read(path.as_ref())?;
    parse_properties(&decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    };
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Parses property file content.
///
/// Duplicate keys keep the position of their first occurrence and the value
/// of their last.
pub fn parse_properties(content: &str) -> Result<MessageTable> {
    let mut table = MessageTable::new();
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = normalized.split('\n').enumerate();

    while let Some((index, line)) = lines.next() {
        let line = line.trim_start_matches(is_blank);
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let mut logical = line.to_string();
        while has_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let key = unescape(key, index + 1)?;
        let value = unescape(value, index + 1)?;
        table.insert(key, value);
    }

    Ok(table)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// An odd number of trailing backslashes joins the next line.
fn has_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let rest = line[key_end..].trim_start_matches(is_blank);
    let rest = rest
        .strip_prefix(|c: char| c == '=' || c == ':')
        .unwrap_or(rest);
    (&line[..key_end], rest.trim_start_matches(is_blank))
}

fn unescape(text: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => out.push(read_unicode_escape(&mut chars, line)?),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok()
}

/// Decodes the digits of a `\uXXXX` escape, joining UTF-16 surrogate pairs
/// written as two consecutive escapes.
fn read_unicode_escape(chars: &mut std::str::Chars<'_>, line: usize) -> Result<char> {
    let malformed = |reason: &str| Error::PropertiesError {
        line,
        reason: reason.to_string(),
    };

    let high = read_hex4(chars).ok_or_else(|| malformed("malformed \\uxxxx encoding"))?;
    if !(0xD800..0xDC00).contains(&high) {
        return char::from_u32(high).ok_or_else(|| malformed("unpaired surrogate in \\u escape"));
    }

    let mut lookahead = chars.clone();
    if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
        if let Some(low) = read_hex4(&mut lookahead) {
            if (0xDC00..0xE000).contains(&low) {
                *chars = lookahead;
                let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(code)
                    .ok_or_else(|| malformed("malformed \\uxxxx encoding"));
            }
        }
    }

    Err(malformed("unpaired surrogate in \\u escape"))
}
