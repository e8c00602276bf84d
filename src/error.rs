//! Error types for the listenconf library.
//!
//! Only the strict single-endpoint surface ([`crate::ListenInterface`]'s
//! `FromStr`) reports errors; the bulk list parsers are deliberately
//! best-effort and degrade to partial results instead.

use thiserror::Error;

/// Result type alias for listenconf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when strictly parsing a single listen endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was empty or all whitespace.
    #[error("empty listen endpoint")]
    EmptyEndpoint,

    /// The device token was empty.
    #[error("missing device in {0:?}")]
    MissingDevice(String),

    /// No `:` separator between device and port.
    #[error("missing ':' separator in {0:?}")]
    MissingColon(String),

    /// A `[` without a matching `]`.
    #[error("unclosed '[' in {0:?}")]
    UnclosedBracket(String),

    /// The port text was empty, non-numeric, or outside `0..=65535`.
    #[error("invalid port {0:?}")]
    InvalidPort(String),
}
