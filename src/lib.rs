//! Listenconf - parsing and printing of listen endpoint configuration
//!
//! This library implements the compact configuration grammar for network
//! listen endpoints: a comma-separated list of `device-or-address[:port][s]`
//! entries, where the device may be a hostname, an interface name, an IPv4
//! literal, or a bracketed IPv6 literal, and a trailing `s` marks the
//! endpoint as TLS-enabled. It provides:
//! - Best-effort parsing of endpoint lists ([`parse_listen_interfaces`])
//! - The inverse, canonical serialization ([`print_listen_interfaces`])
//! - Comma-separated list helpers ([`parse_csv`], [`parse_csv_name_port`])
//! - Quote-aware string splitting and locale-free text primitives
//!
//! All operations are synchronous pure functions over immutable input; the
//! crate performs no I/O and binds no sockets. Whether a device text is a
//! *reachable* address is out of scope — only the syntactic IPv6-literal
//! check needed for bracketing is provided ([`is_ipv6_literal`]).

pub mod error;
pub mod models;
pub mod net;
pub mod parser;
pub mod text;

// Re-export the primary API
pub use error::{Error, Result};
pub use models::ListenInterface;
pub use net::is_ipv6_literal;
pub use parser::{parse_csv, parse_csv_name_port, parse_listen_interfaces, print_listen_interfaces};
pub use text::{split_string, to_decimal_text};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
