//! Quote-aware single-split primitive.

/// Split `input` at the first occurrence of `sep`, honoring one level of
/// quoting: if the input starts with `"` (and `sep` is not itself `"`), the
/// scan for the separator begins after the matching closing quote, so a
/// separator inside the quoted prefix is not recognized.
///
/// Returns `(before, after)` as subslices of `input` with no copying. If the
/// separator is absent the whole input is `before` and `after` is empty.
/// Repeated application on `after` walks a separated list one field at a
/// time.
///
/// `sep` must be an ASCII byte; splitting in the middle of a multi-byte
/// sequence is impossible because continuation bytes never match it.
pub fn split_string(input: &str, sep: u8) -> (&str, &str) {
    debug_assert!(sep.is_ascii());
    if input.is_empty() {
        return ("", "");
    }

    let bytes = input.as_bytes();
    let mut pos = 0;
    if bytes[0] == b'"' && sep != b'"' {
        // scan past the quoted prefix; an unterminated quote runs to the end
        for &b in &bytes[1..] {
            pos += 1;
            if b == b'"' {
                break;
            }
        }
    }

    let mut found_sep = 0;
    while pos < bytes.len() {
        if bytes[pos] == sep {
            found_sep = 1;
            break;
        }
        pos += 1;
    }

    (&input[..pos], &input[pos + found_sep..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        assert_eq!(split_string("a,b,c", b','), ("a", "b,c"));
        assert_eq!(split_string("a", b','), ("a", ""));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_string("", b','), ("", ""));
    }

    #[test]
    fn test_separator_first() {
        assert_eq!(split_string(",a", b','), ("", "a"));
    }

    #[test]
    fn test_quoted_prefix_protects_separator() {
        assert_eq!(split_string("\"a,b\",c", b','), ("\"a,b\"", "c"));
    }

    #[test]
    fn test_separator_after_quote() {
        assert_eq!(split_string("\"a\"b,c", b','), ("\"a\"b", "c"));
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(split_string("\"a,b", b','), ("\"a,b", ""));
    }

    #[test]
    fn test_quote_as_separator() {
        // quoting is disabled when the separator is the quote itself
        assert_eq!(split_string("\"a\"b", b'"'), ("", "a\"b"));
    }

    #[test]
    fn test_repeated_application() {
        let (a, rest) = split_string("x y z", b' ');
        let (b, rest) = split_string(rest, b' ');
        let (c, rest) = split_string(rest, b' ');
        assert_eq!((a, b, c, rest), ("x", "y", "z", ""));
    }
}
