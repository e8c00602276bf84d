//! Listen endpoint domain model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::net::is_ipv6_literal;
use crate::text::ascii::{is_digit, trim_spaces};
use crate::text::to_decimal_text;

/// A configured endpoint on which a service is instructed to accept
/// connections.
///
/// The device is a hostname, network interface name, IPv4 literal, or
/// unbracketed IPv6 literal. Endpoints are plain values with no identity
/// beyond equality; the parsers construct them fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenInterface {
    /// Device or address text, with IPv6 brackets already stripped.
    pub device: String,
    /// Port number. The list parser never emits an out-of-range value.
    pub port: u16,
    /// Whether the endpoint is TLS-enabled (the `s` suffix).
    #[serde(default)]
    pub ssl: bool,
}

impl ListenInterface {
    /// Create a non-TLS endpoint.
    pub fn new(device: impl Into<String>, port: u16) -> Self {
        Self {
            device: device.into(),
            port,
            ssl: false,
        }
    }

    /// Create a TLS-enabled endpoint.
    pub fn ssl(device: impl Into<String>, port: u16) -> Self {
        Self {
            device: device.into(),
            port,
            ssl: true,
        }
    }
}

impl fmt::Display for ListenInterface {
    /// The canonical single-entry text form, identical to what
    /// [`crate::print_listen_interfaces`] emits for one entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_ipv6_literal(&self.device) {
            write!(f, "[{}]", self.device)?;
        } else {
            f.write_str(&self.device)?;
        }
        write!(f, ":{}", to_decimal_text(i64::from(self.port)))?;
        if self.ssl {
            f.write_str("s")?;
        }
        Ok(())
    }
}

impl FromStr for ListenInterface {
    type Err = Error;

    /// Strictly parse exactly one endpoint.
    ///
    /// Unlike [`crate::parse_listen_interfaces`], which silently drops or
    /// truncates malformed entries, this rejects anything outside the
    /// single-entry grammar with a descriptive error. Surrounding whitespace
    /// is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = trim_spaces(s);
        if raw.is_empty() {
            return Err(Error::EmptyEndpoint);
        }

        let (device, rest) = if let Some(bracketed) = raw.strip_prefix('[') {
            let close = bracketed
                .find(']')
                .ok_or_else(|| Error::UnclosedBracket(raw.to_string()))?;
            let rest = bracketed[close + 1..]
                .strip_prefix(':')
                .ok_or_else(|| Error::MissingColon(raw.to_string()))?;
            (&bracketed[..close], rest)
        } else {
            // the device itself cannot contain a colon outside brackets, so
            // the last colon is the port separator
            let colon = raw
                .rfind(':')
                .ok_or_else(|| Error::MissingColon(raw.to_string()))?;
            (&raw[..colon], &raw[colon + 1..])
        };

        if device.is_empty() {
            return Err(Error::MissingDevice(raw.to_string()));
        }

        let (port_text, ssl) = match rest.strip_suffix('s') {
            Some(digits) => (digits, true),
            None => (rest, false),
        };
        let port = parse_strict_port(port_text)
            .ok_or_else(|| Error::InvalidPort(rest.to_string()))?;

        Ok(Self {
            device: device.to_string(),
            port,
            ssl,
        })
    }
}

fn parse_strict_port(text: &str) -> Option<u16> {
    if text.is_empty() || text.len() > 5 || !text.bytes().all(is_digit) {
        return None;
    }
    match text.parse::<u32>() {
        Ok(port) if port <= 65535 => Some(port as u16),
        _ => None,
    }
}
