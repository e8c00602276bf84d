//! Byte-level character classification.
//!
//! All predicates operate on raw bytes, never on decoded characters, and are
//! deliberately locale-free: configuration strings must parse the same way
//! regardless of the runtime environment. Multi-byte UTF-8 sequences pass
//! through untouched because every byte of such a sequence is >= 0x80 and
//! therefore matches none of these classes.

/// ASCII letter (`a`-`z`, `A`-`Z`).
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// ASCII decimal digit.
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Printable ASCII, codes 32 through 126 inclusive.
pub const fn is_print(b: u8) -> bool {
    matches!(b, 0x20..=0x7e)
}

/// Whitespace: space, tab, newline, carriage return, form feed, vertical tab.
///
/// Note that this includes vertical tab (0x0b), which
/// [`u8::is_ascii_whitespace`] does not.
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0c | 0x0b)
}

/// Map `A`-`Z` to `a`-`z`, identity for every other byte.
pub const fn to_lower(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// Byte-wise ASCII case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes()
            .zip(b.bytes())
            .all(|(x, y)| to_lower(x) == to_lower(y))
}

/// Does `s` start with `prefix`, compared ASCII case-insensitively?
pub fn begins_with_ignore_case(prefix: &str, s: &str) -> bool {
    prefix.len() <= s.len()
        && prefix
            .bytes()
            .zip(s.bytes())
            .all(|(x, y)| to_lower(x) == to_lower(y))
}

/// Strip leading and trailing whitespace as defined by [`is_space`].
pub fn trim_spaces(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut start = 0;
    while start < bytes.len() && is_space(bytes[start]) {
        start += 1;
    }
    let mut end = bytes.len();
    while end > start && is_space(bytes[end - 1]) {
        end -= 1;
    }
    &s[start..end]
}
