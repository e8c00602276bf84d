//! Comma-separated list parsing.
//!
//! Two flavors: plain trimmed fields, and `name:port` pairs as used for
//! tracker-style host lists. Neither supports quoting; a comma always
//! delimits (see [`crate::text::split_string`] for the quote-aware
//! primitive).

use crate::text::ascii::{is_digit, is_space};

/// Split `input` on `,` into whitespace-trimmed fields.
///
/// Empty fields are preserved as empty strings.
pub fn parse_csv(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        while start < bytes.len() && is_space(bytes[start]) {
            start += 1;
        }
        let end = find_byte(bytes, start, b',').unwrap_or(bytes.len());

        let mut soft_end = end;
        while soft_end > start && is_space(bytes[soft_end - 1]) {
            soft_end -= 1;
        }

        out.push(input[start..soft_end].to_string());
        start = end + 1;
    }

    out
}

/// Split `input` on `,` into `(name, port)` pairs.
///
/// Each field is split at its *last* `:`; the name has trailing whitespace
/// trimmed and one layer of `[`/`]` brackets stripped (IPv6 literals), and
/// the port is parsed with `atoi` semantics, so malformed trailing text
/// yields `0` rather than an error. A field with no colon after the leading
/// whitespace emits nothing.
pub fn parse_csv_name_port(input: &str) -> Vec<(String, i32)> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        while start < bytes.len() && is_space(bytes[start]) {
            start += 1;
        }
        let end = find_byte(bytes, start, b',').unwrap_or(bytes.len());

        if let Some(colon) = rfind_byte(&bytes[..end], b':') {
            if colon > start {
                let port = atoi_prefix(&input[colon + 1..end]);

                let mut soft_end = colon;
                while soft_end > start && is_space(bytes[soft_end - 1]) {
                    soft_end -= 1;
                }

                // strip one layer of IPv6 brackets
                let mut name_start = start;
                if bytes[name_start] == b'[' {
                    name_start += 1;
                }
                if soft_end > name_start && bytes[soft_end - 1] == b']' {
                    soft_end -= 1;
                }

                out.push((input[name_start..soft_end].to_string(), port));
            }
        }

        start = end + 1;
    }

    out
}

fn find_byte(bytes: &[u8], from: usize, target: u8) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == target)
        .map(|i| from + i)
}

fn rfind_byte(bytes: &[u8], target: u8) -> Option<usize> {
    bytes.iter().rposition(|&b| b == target)
}

/// C `atoi` semantics: skip leading whitespace, optional sign, then the
/// longest run of digits; anything after the digits is ignored and no digits
/// at all yields 0. Out-of-range values saturate.
fn atoi_prefix(text: &str) -> i32 {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    let limit = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;
    while i < bytes.len() && is_digit(bytes[i]) {
        value = (value * 10 + i64::from(bytes[i] - b'0')).min(limit);
        i += 1;
    }

    if negative {
        (-value).max(i64::from(i32::MIN)) as i32
    } else {
        value.min(i64::from(i32::MAX)) as i32
    }
}
