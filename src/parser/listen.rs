//! Listen-interface list parsing and printing.
//!
//! The `listen_interfaces`-style setting is a comma-separated list of
//! device names or addresses with ports, for example `"eth0:6881,eth1:6881"`,
//! `"127.0.0.1:6881s"` or `"[::1]:6881"`. A trailing `s` marks an endpoint
//! as TLS-enabled, and IPv6 literals are wrapped in square brackets.

use tracing::{debug, trace};

use crate::models::ListenInterface;
use crate::net::is_ipv6_literal;
use crate::parser::cursor::Cursor;
use crate::text::ascii::{is_digit, is_space};
use crate::text::to_decimal_text;

/// Parse a comma-separated listen-interface list.
///
/// Malformed input never produces an error, only a degraded result, on two
/// tiers:
/// - an entry whose port is empty, longer than five digits, or outside
///   `0..=65535` is dropped and parsing continues with the next entry;
/// - a missing `:` after the device token aborts the whole parse and
///   returns only the entries accumulated so far.
pub fn parse_listen_interfaces(input: &str) -> Vec<ListenInterface> {
    let mut out = Vec::new();
    let mut cur = Cursor::new(input);

    while !cur.is_at_end() {
        cur.skip_spaces();
        if cur.is_at_end() {
            return out;
        }

        let device = if cur.peek() == Some(b'[') {
            cur.bump();
            // IPv6 literal: everything up to the closing bracket (or end of
            // input if unterminated), then skip ahead to the colon
            let literal = cur.take_until(b']');
            cur.skip_until(b':');
            literal
        } else {
            cur.take_while(|b| !is_space(b) && b != b':')
        };

        cur.skip_spaces();

        // the colon is mandatory; without it the string is not in the
        // expected grammar at all, so give up on everything that follows
        if cur.peek() != Some(b':') {
            debug!(device = device, "missing ':' in listen interface, aborting parse");
            return out;
        }
        cur.bump();

        cur.skip_spaces();
        let port_text = cur.take_while(is_digit);
        let port = parse_port(port_text);

        cur.skip_spaces();
        let mut ssl = false;
        if cur.peek() == Some(b's') {
            ssl = true;
            cur.bump();
        }

        // discard any trailing junk before the delimiter
        cur.skip_until(b',');

        match port {
            Some(port) => out.push(ListenInterface {
                device: device.to_string(),
                port,
                ssl,
            }),
            None => {
                trace!(device = device, port = port_text, "dropping entry with invalid port");
            }
        }

        if cur.peek() == Some(b',') {
            cur.bump();
        }
    }

    out
}

/// A valid port is one to five digits parsing into `0..=65535`.
fn parse_port(text: &str) -> Option<u16> {
    if text.is_empty() || text.len() > 5 {
        return None;
    }
    match text.parse::<u32>() {
        Ok(port) if port <= 65535 => Some(port as u16),
        _ => None,
    }
}

/// Serialize listen interfaces into the canonical comma-separated form.
///
/// Devices that are syntactically valid IPv6 literals are wrapped in square
/// brackets so the port colon stays unambiguous. Every string produced here
/// re-parses to the same entries via [`parse_listen_interfaces`].
pub fn print_listen_interfaces(entries: &[ListenInterface]) -> String {
    let mut ret = String::new();

    for entry in entries {
        if !ret.is_empty() {
            ret.push(',');
        }

        if is_ipv6_literal(&entry.device) {
            ret.push('[');
            ret.push_str(&entry.device);
            ret.push(']');
        } else {
            ret.push_str(&entry.device);
        }
        ret.push(':');
        ret.push_str(&to_decimal_text(i64::from(entry.port)));
        if entry.ssl {
            ret.push('s');
        }
    }

    ret
}
