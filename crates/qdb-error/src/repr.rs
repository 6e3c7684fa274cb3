//! Quoted renderings used by diagnostics and by the messages that echo raw input.

/// Quotes `text`, preferring single quotes and switching to double quotes only when
/// the text contains a single quote and no double quote.
pub fn quote(text: &str) -> String {
    let delimiter = delimiter_for(text.contains('\''), text.contains('"'));
    let mut out = String::with_capacity(text.len() + 2);

    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if is_unprintable(c) => out.push_str(&escape_char(c)),
            c => out.push(c),
        }
    }
    out.push(delimiter);

    out
}

/// Quotes `bytes` as a `b'...'` literal, escaping everything outside printable ASCII.
pub fn quote_bytes(bytes: &[u8]) -> String {
    let delimiter = delimiter_for(bytes.contains(&b'\''), bytes.contains(&b'"'));
    let mut out = String::with_capacity(bytes.len() + 3);

    out.push('b');
    out.push(delimiter);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b == delimiter as u8 => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            b => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out.push(delimiter);

    out
}

/// Control characters plus the separators and invisible format characters that
/// would otherwise break a log line or hide part of the text.
fn is_unprintable(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{200b}'..='\u{200f}' | '\u{2028}' | '\u{2029}' | '\u{2060}' | '\u{feff}'
        )
}

fn escape_char(c: char) -> String {
    match c as u32 {
        n @ 0..=0xff => format!("\\x{n:02x}"),
        n @ 0x100..=0xffff => format!("\\u{n:04x}"),
        n => format!("\\U{n:08x}"),
    }
}

fn delimiter_for(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double { '"' } else { '\'' }
}
