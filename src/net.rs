//! Address-literal classification.

use std::net::Ipv6Addr;

/// Is `text` a syntactically valid, unbracketed IPv6 literal?
///
/// Delegates to the standard address parser; any parse failure (including
/// scoped literals it does not understand) simply answers `false`. The
/// printer uses this to decide whether a device token needs brackets.
pub fn is_ipv6_literal(text: &str) -> bool {
    text.parse::<Ipv6Addr>().is_ok()
}
